//! Loader, failure and empty-result states of the content area.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

pub fn render_loader(frame: &mut Frame, area: Rect, state: &mut ThrobberState) {
    let [_, row, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(14),
        Constraint::Min(0),
    ])
    .areas(row);

    let throbber = Throbber::default()
        .label("Loading...")
        .style(Style::default().fg(theme::NEON_CYAN))
        .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
    frame.render_stateful_widget(throbber, cell, state);
}

/// Inline "Failed to fetch: {reason}" in place of the loader.
pub fn render_failure(frame: &mut Frame, area: Rect, reason: &str) {
    render_centered(
        frame,
        area,
        Line::styled(format!("Failed to fetch: {reason}"), theme::error()),
    );
    let hint_area = Rect {
        y: area.y + area.height / 2 + 1,
        height: 1,
        ..area
    };
    if hint_area.bottom() <= area.bottom() {
        frame.render_widget(
            Paragraph::new(Line::from("R to retry").style(theme::key_hint()).centered()),
            hint_area,
        );
    }
}

pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    render_centered(frame, area, Line::from(message.to_owned()).style(theme::body()));
}

fn render_centered(frame: &mut Frame, area: Rect, line: Line<'static>) {
    let [_, row, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(line.centered()), row);
}
