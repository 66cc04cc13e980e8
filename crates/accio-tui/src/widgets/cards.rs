//! Character cards: the paginated grid and the all-houses sections.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use accio_core::{CharacterCard, HouseSection, ImageRef, render::NO_HOUSE_MEMBERS};

use crate::theme;

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 5;
const MAX_COLUMNS: u16 = 6;

/// Number of card columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).clamp(1, MAX_COLUMNS))
}

/// First grid row to draw so the `selected` card stays visible.
fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let row = selected / columns.max(1);
    row.saturating_sub(visible_rows.saturating_sub(1))
}

fn image_line(card: &CharacterCard) -> Line<'static> {
    if card.missing_image {
        return Line::from(Span::styled("No image available", theme::placeholder()));
    }
    match &card.image {
        ImageRef::Url(url) => Line::from(Span::styled(url.clone(), theme::key_hint())),
        ImageRef::Placeholder => Line::from(Span::styled(
            card.image.location().to_owned(),
            theme::placeholder(),
        )),
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CharacterCard, selected: bool) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            theme::border_focused()
        } else {
            theme::border_default()
        })
        .title(Span::styled(format!(" {} ", card.name), theme::title_style()));

    let lines = vec![
        Line::from(Span::styled(
            card.house.clone(),
            theme::house_name_style(&card.house),
        )),
        image_line(card),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw `cards` as a grid, keeping `selected` (an index into `cards`) in view.
pub fn render_card_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[CharacterCard],
    selected: Option<usize>,
) {
    if cards.is_empty() || area.height < CARD_HEIGHT {
        return;
    }
    let columns = grid_columns(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let first_row = first_visible_row(selected.unwrap_or(0), columns, visible_rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let col_constraints = vec![Constraint::Ratio(1, u32::try_from(columns).unwrap_or(1)); columns];

    for (row_area, (row_index, row_cards)) in row_areas
        .iter()
        .zip(cards.chunks(columns).enumerate().skip(first_row))
    {
        let cells = Layout::horizontal(col_constraints.clone()).split(*row_area);
        for (col, (cell, card)) in cells.iter().zip(row_cards).enumerate() {
            let index = row_index * columns + col;
            render_card(frame, *cell, card, selected == Some(index));
        }
    }
}

/// All-houses view as text lines: a heading per house, then one line per
/// member. Returns the lines and the line number of the selected card.
pub fn house_section_lines(
    sections: &[HouseSection],
    selected: Option<usize>,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut position = 0;

    for section in sections {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("{} ({})", section.house.name(), section.cards.len()),
            theme::title_style().fg(theme::house_color(section.house)),
        )));

        if section.cards.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {NO_HOUSE_MEMBERS}"),
                theme::placeholder(),
            )));
            continue;
        }

        for card in &section.cards {
            let is_selected = selected == Some(position);
            if is_selected {
                selected_line = lines.len();
            }
            let marker = if card.missing_image { "  ◦ " } else { "  • " };
            lines.push(Line::from(vec![
                Span::styled(marker, theme::key_hint()),
                Span::styled(
                    card.name.clone(),
                    if is_selected {
                        theme::selected()
                    } else {
                        theme::body()
                    },
                ),
            ]));
            position += 1;
        }
    }

    (lines, selected_line)
}

/// Draw the all-houses sections, scrolled so the selection is visible.
pub fn render_house_sections(
    frame: &mut Frame,
    area: Rect,
    sections: &[HouseSection],
    selected: Option<usize>,
) {
    let (lines, selected_line) = house_section_lines(sections, selected);
    let height = usize::from(area.height.max(1));
    let scroll = u16::try_from(selected_line.saturating_sub(height - 1)).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use accio_core::{Character, House};
    use pretty_assertions::assert_eq;

    fn card(index: usize, name: &str) -> CharacterCard {
        CharacterCard::new(
            index,
            &Character {
                name: name.into(),
                ..Character::default()
            },
        )
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn columns_fit_width() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(120), 4);
        assert_eq!(grid_columns(1000), 6);
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(first_visible_row(0, 4, 2), 0);
        assert_eq!(first_visible_row(7, 4, 2), 0);
        assert_eq!(first_visible_row(11, 4, 2), 1);
    }

    #[test]
    fn sections_list_members_and_empty_houses() {
        let sections = vec![
            HouseSection {
                house: House::Gryffindor,
                cards: vec![card(0, "Harry Potter"), card(3, "Ron Weasley")],
            },
            HouseSection {
                house: House::Hufflepuff,
                cards: Vec::new(),
            },
        ];
        let (lines, selected_line) = house_section_lines(&sections, Some(1));
        let rendered: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            rendered,
            vec![
                "Gryffindor (2)",
                "  ◦ Harry Potter",
                "  ◦ Ron Weasley",
                "",
                "Hufflepuff (0)",
                "  No characters for this house",
            ]
        );
        assert_eq!(selected_line, 2);
    }
}
