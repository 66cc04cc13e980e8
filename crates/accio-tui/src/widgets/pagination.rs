//! Pagination bar: Previous, page numbers with ellipses, Next, and the
//! "Showing X - Y of Z" summary. While the page picker is open the picked
//! number is highlighted and the summary becomes the picker prompt.

use ratatui::text::{Line, Span};

use accio_core::{NavButton, PageControls, PageItem};

use crate::keys::PageJump;
use crate::theme;

fn nav_span(label: &'static str, button: NavButton) -> Span<'static> {
    if button.is_disabled() {
        Span::styled(label, theme::disabled())
    } else {
        Span::styled(label, theme::key_hint_key())
    }
}

fn picker_prompt(jump: PageJump) -> Line<'static> {
    Line::from(vec![
        Span::styled("Go to page ", theme::key_hint()),
        Span::styled(jump.target().to_string(), theme::selected()),
        Span::styled(format!(" of {}", jump.total()), theme::key_hint()),
        Span::styled("  ←/→ 0-9 ", theme::key_hint_key()),
        Span::styled("pick  ", theme::key_hint()),
        Span::styled("⏎ ", theme::key_hint_key()),
        Span::styled("go  ", theme::key_hint()),
        Span::styled("Esc ", theme::key_hint_key()),
        Span::styled("cancel", theme::key_hint()),
    ])
    .centered()
}

/// Two lines: the button row and the summary (or picker prompt).
pub fn pagination_lines(controls: &PageControls, jump: Option<PageJump>) -> [Line<'static>; 2] {
    let picked = jump.map(PageJump::target);
    let mut spans = vec![nav_span("‹ Prev", controls.previous), Span::raw("  ")];

    for item in &controls.items {
        match *item {
            PageItem::Page { number, .. } if picked == Some(number) => {
                spans.push(Span::styled(format!("<{number}>"), theme::selected()));
            }
            PageItem::Page {
                number,
                active: true,
            } => spans.push(Span::styled(format!("[{number}]"), theme::tab_active())),
            PageItem::Page { number, .. } => {
                spans.push(Span::styled(format!(" {number} "), theme::tab_inactive()));
            }
            PageItem::Ellipsis => spans.push(Span::styled(" … ", theme::key_hint())),
        }
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    spans.push(nav_span("Next ›", controls.next));

    let summary = match jump {
        Some(jump) => picker_prompt(jump),
        None => Line::from(Span::styled(controls.summary.clone(), theme::key_hint())).centered(),
    };
    [Line::from(spans).centered(), summary]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use accio_core::build_page_controls;
    use pretty_assertions::assert_eq;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn renders_collapsed_row_and_summary() {
        let controls = build_page_controls(120, 5, 12).unwrap();
        let [row, summary] = pagination_lines(&controls, None);
        assert_eq!(
            text(&row),
            "‹ Prev   1   …   4  [5]  6   …   10   Next ›"
        );
        assert_eq!(text(&summary), "Showing 49 - 60 of 120");
    }

    #[test]
    fn open_picker_highlights_target_and_prompts() {
        let controls = build_page_controls(120, 5, 12).unwrap();
        let [row, prompt] = pagination_lines(&controls, Some(PageJump::new(6, 10)));
        assert_eq!(
            text(&row),
            "‹ Prev   1   …   4  [5] <6>  …   10   Next ›"
        );
        assert!(text(&prompt).starts_with("Go to page 6 of 10"));

        // A picked page outside the visible window only shows in the prompt.
        let [row, prompt] = pagination_lines(&controls, Some(PageJump::new(8, 10)));
        assert!(!text(&row).contains('<'));
        assert!(text(&prompt).starts_with("Go to page 8 of 10"));
    }

    #[test]
    fn first_page_disables_previous() {
        let controls = build_page_controls(30, 1, 12).unwrap();
        let [row, _] = pagination_lines(&controls, None);
        assert_eq!(row.spans[0].style, theme::disabled());
        assert_eq!(row.spans.last().unwrap().style, theme::key_hint_key());
    }
}
