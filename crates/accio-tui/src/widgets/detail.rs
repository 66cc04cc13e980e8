//! Character detail overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use accio_core::CharacterDetail;

use super::centered_rect;
use crate::theme;

const LABEL_WIDTH: usize = 10;

/// Overlay body: one labelled line per field, then the image reference.
pub fn detail_lines(detail: &CharacterDetail) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for (label, value) in detail.rows() {
        let style = if label == "House" {
            theme::house_name_style(value)
        } else {
            theme::body()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<LABEL_WIDTH$}"), theme::key_hint_key()),
            Span::styled(value.to_owned(), style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<LABEL_WIDTH$}", "Image"), theme::key_hint_key()),
        Span::styled(detail.image.location().to_owned(), theme::key_hint()),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Esc to close", theme::key_hint())).centered());
    lines
}

pub fn render_detail(frame: &mut Frame, area: Rect, detail: &CharacterDetail) {
    let overlay = centered_rect(area, 64, 14);
    frame.render_widget(Clear, overlay);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused())
        .style(Style::default().bg(theme::BG_HIGHLIGHT))
        .title(Span::styled(format!(" {} ", detail.name), theme::title_style()));

    frame.render_widget(Paragraph::new(detail_lines(detail)).block(block), overlay);
}
