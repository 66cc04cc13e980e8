//! Palette and semantic styles for the TUI.

use ratatui::style::{Color, Modifier, Style};

use accio_core::House;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36

// ── House colours ────────────────────────────────────────────────────

pub const GRYFFINDOR: Color = Color::Rgb(238, 76, 58);
pub const SLYTHERIN: Color = Color::Rgb(42, 170, 96);
pub const RAVENCLAW: Color = Color::Rgb(96, 140, 235);
pub const HUFFLEPUFF: Color = Color::Rgb(240, 199, 94);

pub fn house_color(house: House) -> Color {
    match house {
        House::Gryffindor => GRYFFINDOR,
        House::Slytherin => SLYTHERIN,
        House::Ravenclaw => RAVENCLAW,
        House::Hufflepuff => HUFFLEPUFF,
    }
}

/// Colour for a raw house string from the API, dim when unknown.
pub fn house_name_style(raw: &str) -> Style {
    House::ALL
        .into_iter()
        .find(|h| h.matches(Some(raw)))
        .map_or_else(
            || Style::default().fg(BORDER_GRAY),
            |h| Style::default().fg(house_color(h)),
        )
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Border for the selected card or an overlay.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn body() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Selected list line.
pub fn selected() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the tab bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the tab bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
}

/// Disabled Previous/Next button.
pub fn disabled() -> Style {
    Style::default()
        .fg(BORDER_GRAY)
        .add_modifier(Modifier::DIM)
}

/// Placeholder text in an empty search box.
pub fn placeholder() -> Style {
    Style::default()
        .fg(BORDER_GRAY)
        .add_modifier(Modifier::ITALIC)
}
