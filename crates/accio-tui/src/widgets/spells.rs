//! Spell list: name and description, one row per spell.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Modifier,
    text::Span,
    widgets::{Cell, Row, Table},
};

use accio_core::SpellRow;

use crate::theme;

pub fn render_spell_list(frame: &mut Frame, area: Rect, rows: &[SpellRow]) {
    let header = Row::new([
        Cell::from(Span::styled("Spell", theme::title_style())),
        Cell::from(Span::styled("Description", theme::title_style())),
    ])
    .bottom_margin(1);

    let body = rows.iter().map(|row| {
        Row::new([
            Cell::from(Span::styled(
                row.name.clone(),
                theme::tab_active().remove_modifier(Modifier::UNDERLINED),
            )),
            Cell::from(Span::styled(row.description.clone(), theme::body())),
        ])
    });

    let table = Table::new(body, [Constraint::Length(28), Constraint::Min(20)])
        .header(header)
        .column_spacing(2);

    frame.render_widget(table, area);
}
