//! Reusable drawing helpers for the browser's content area.

pub mod cards;
pub mod detail;
pub mod pagination;
pub mod spells;
pub mod status;
pub mod tab_bar;

use ratatui::layout::Rect;

/// A `width` x `height` rect centred in `area`, clamped to fit inside it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let area = Rect::new(10, 5, 100, 40);
        assert_eq!(centered_rect(area, 60, 20), Rect::new(30, 15, 60, 20));
    }

    #[test]
    fn clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        assert_eq!(centered_rect(area, 60, 20), area);
    }
}
