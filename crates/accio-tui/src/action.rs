//! All UI actions. Actions are the sole mechanism for state mutation.

use accio_core::Intent;

/// What the event loop should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // ── View state ──
    /// Forward to the view controller.
    View(Intent),

    // ── Search box ──
    OpenSearch,
    /// Leave the search box; the text stays.
    CloseSearch,
    SearchInput(char),
    SearchBackspace,
    /// Empty the search box and show the unfiltered dataset.
    ClearSearch,
    /// A debounced query arrived from the search task.
    SearchSettled(String),

    // ── Page picker ──
    OpenPageJump,
    ClosePageJump,
    /// Move the picked page by this many pages.
    PageJumpStep(i32),
    PageJumpSet(u32),
    PageJumpDigit(u32),
    PageJumpBackspace,

    // ── Cards ──
    /// Move the card cursor by this many positions.
    MoveSelection(isize),
    OpenDetail,
    CloseDetail,
    ToggleHelp,
}
