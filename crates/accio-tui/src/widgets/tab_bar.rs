//! Horizontal tab and house-filter bars.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use accio_core::{HouseFilter, Tab};

use crate::theme;

/// Renders a horizontal bar of `(key, label, style)` items. The active
/// item is bracketed, bold and underlined; the others use their own style.
pub fn render_sub_tabs(items: &[(char, &'static str, Style)], active_index: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 3);

    for (i, (key, label, style)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::key_hint()));
        }
        spans.push(Span::styled(format!("{key} "), theme::key_hint_key()));

        if i == active_index {
            spans.push(Span::styled(
                format!("[{label}]"),
                style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::styled(*label, *style));
        }
    }

    Line::from(spans)
}

/// The five dataset tabs with their number keys.
pub fn tab_line(active: Tab) -> Line<'static> {
    let items: Vec<(char, &'static str, Style)> = Tab::ALL
        .iter()
        .map(|&tab| {
            let key = char::from(b'0' + tab.number());
            let style = if tab == active {
                theme::tab_active()
            } else {
                theme::tab_inactive()
            };
            (key, tab.label(), style)
        })
        .collect();
    let active_index = Tab::ALL.iter().position(|&t| t == active).unwrap_or(0);
    render_sub_tabs(&items, active_index)
}

/// House filter buttons, only drawn on the houses tab.
pub fn house_line(active: HouseFilter) -> Line<'static> {
    let items: Vec<(char, &'static str, Style)> = HouseFilter::ALL
        .iter()
        .map(|&filter| {
            let (key, style) = match filter {
                HouseFilter::All => ('a', theme::tab_inactive()),
                HouseFilter::Only(house) => (
                    house.name().chars().next().map_or('?', |c| c.to_ascii_lowercase()),
                    Style::default().fg(theme::house_color(house)),
                ),
            };
            (key, filter.label(), style)
        })
        .collect();
    let active_index = HouseFilter::ALL
        .iter()
        .position(|&h| h == active)
        .unwrap_or(0);
    render_sub_tabs(&items, active_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accio_core::House;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn tab_line_brackets_active_tab() {
        assert_eq!(
            text(&tab_line(Tab::Staff)),
            "1 Characters  2 Students  3 [Staff]  4 Houses  5 Spells"
        );
    }

    #[test]
    fn house_line_shows_filter_keys() {
        assert_eq!(
            text(&house_line(HouseFilter::Only(House::Ravenclaw))),
            "a All  g Gryffindor  s Slytherin  r [Ravenclaw]  h Hufflepuff"
        );
    }
}
