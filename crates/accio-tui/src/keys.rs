//! Key bindings: map a key press in a given input mode to an [`Action`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use accio_core::{House, HouseFilter, Intent, Tab};

use crate::action::Action;

/// Which layer currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Tab, house, page and card navigation.
    Normal,
    /// Typing into the search box.
    Search,
    /// Character detail overlay is open.
    Detail,
    /// Help overlay is open.
    Help,
    /// Picking a page number to jump to.
    PageJump,
}

/// Page picker: the page Enter will jump to, chosen with arrows or digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageJump {
    target: u32,
    total: u32,
    /// Typed digits extend the target instead of replacing it.
    typing: bool,
}

impl PageJump {
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            target: current.clamp(1, total),
            total,
            typing: false,
        }
    }

    pub fn target(self) -> u32 {
        self.target
    }

    pub fn total(self) -> u32 {
        self.total
    }

    pub fn step(&mut self, delta: i32) {
        self.set(self.target.saturating_add_signed(delta));
    }

    pub fn set(&mut self, page: u32) {
        self.target = page.clamp(1, self.total);
        self.typing = false;
    }

    /// Type one digit. A digit that would overshoot the last page is ignored.
    pub fn digit(&mut self, digit: u32) {
        let page = if self.typing {
            self.target.saturating_mul(10).saturating_add(digit)
        } else {
            digit
        };
        if (1..=self.total).contains(&page) {
            self.target = page;
            self.typing = true;
        }
    }

    pub fn backspace(&mut self) {
        if self.typing && self.target >= 10 {
            self.target /= 10;
        } else {
            self.typing = false;
        }
    }

    /// Same target, clamped to a new page count.
    pub fn refit(self, total: u32) -> Self {
        Self {
            typing: self.typing,
            ..Self::new(self.target, total)
        }
    }
}

/// Context the mapping depends on besides the key itself.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    pub mode: InputMode,
    pub tab: Tab,
    /// Total pages of the current view, if it is paginated.
    pub total_pages: Option<u32>,
    /// Whether a search query is applied.
    pub has_query: bool,
    /// Open page picker, if any.
    pub page_jump: Option<PageJump>,
}

/// Map a key to an action, or `None` if it is unbound in this context.
pub fn map_key(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match ctx.mode {
        InputMode::Search => search_key(key),
        InputMode::Detail => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseDetail),
            _ => None,
        },
        InputMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(Action::ToggleHelp),
            _ => None,
        },
        InputMode::PageJump => page_jump_key(key, ctx.page_jump?),
        InputMode::Normal => normal_key(key, ctx),
    }
}

fn page_jump_key(key: KeyEvent, jump: PageJump) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char(':' | 'q') => Some(Action::ClosePageJump),
        KeyCode::Enter => Some(Action::View(Intent::GoToPage(jump.target()))),
        KeyCode::Left | KeyCode::Char('h' | 'p' | '[') => Some(Action::PageJumpStep(-1)),
        KeyCode::Right | KeyCode::Char('l' | 'n' | ']') => Some(Action::PageJumpStep(1)),
        KeyCode::Home => Some(Action::PageJumpSet(1)),
        KeyCode::End => Some(Action::PageJumpSet(jump.total())),
        KeyCode::Backspace => Some(Action::PageJumpBackspace),
        KeyCode::Char(c) => c.to_digit(10).map(Action::PageJumpDigit),
        _ => None,
    }
}

fn search_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::CloseSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchInput(c))
        }
        _ => None,
    }
}

fn normal_key(key: KeyEvent, ctx: KeyContext) -> Option<Action> {
    let view = |intent| Some(Action::View(intent));

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('R') => view(Intent::Reload),

        // Tabs
        KeyCode::Char(c @ '1'..='5') => {
            let n = u8::try_from(c.to_digit(10)?).ok()?;
            view(Intent::SelectTab(Tab::from_number(n)?))
        }
        KeyCode::Tab => view(Intent::SelectTab(ctx.tab.next())),
        KeyCode::BackTab => view(Intent::SelectTab(ctx.tab.prev())),

        // Houses
        KeyCode::Char(c @ ('a' | 'g' | 's' | 'r' | 'h')) if ctx.tab.shows_house_controls() => {
            let filter = match c {
                'g' => HouseFilter::Only(House::Gryffindor),
                's' => HouseFilter::Only(House::Slytherin),
                'r' => HouseFilter::Only(House::Ravenclaw),
                'h' => HouseFilter::Only(House::Hufflepuff),
                _ => HouseFilter::All,
            };
            view(Intent::SelectHouse(filter))
        }

        // Pages
        KeyCode::Right | KeyCode::Char('n' | ']') => view(Intent::NextPage),
        KeyCode::Left | KeyCode::Char('p' | '[') => view(Intent::PrevPage),
        KeyCode::Home => view(Intent::GoToPage(1)),
        KeyCode::End => view(Intent::GoToPage(ctx.total_pages?)),
        KeyCode::Char(':') if ctx.total_pages.is_some_and(|total| total > 1) => {
            Some(Action::OpenPageJump)
        }

        // Cards
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-1)),
        KeyCode::Enter => Some(Action::OpenDetail),

        KeyCode::Esc if ctx.has_query => Some(Action::ClearSearch),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx(mode: InputMode, tab: Tab) -> KeyContext {
        KeyContext {
            mode,
            tab,
            total_pages: Some(4),
            has_query: false,
            page_jump: None,
        }
    }

    /// Feed `keys` through the page picker the way the app does, returning
    /// the first view intent produced.
    fn pick_page(keys: &[KeyCode], current: u32, total: u32) -> Option<Intent> {
        let mut context = KeyContext {
            total_pages: Some(total),
            ..ctx(InputMode::Normal, Tab::Characters)
        };
        assert_eq!(
            map_key(press(KeyCode::Char(':')), context),
            Some(Action::OpenPageJump)
        );
        let mut jump = PageJump::new(current, total);

        for &code in keys {
            context.mode = InputMode::PageJump;
            context.page_jump = Some(jump);
            match map_key(press(code), context)? {
                Action::View(intent) => return Some(intent),
                Action::PageJumpStep(delta) => jump.step(delta),
                Action::PageJumpSet(page) => jump.set(page),
                Action::PageJumpDigit(d) => jump.digit(d),
                Action::PageJumpBackspace => jump.backspace(),
                other => panic!("unexpected action {other:?}"),
            }
        }
        None
    }

    #[test]
    fn page_picker_reaches_middle_pages() {
        let right = [KeyCode::Right; 4];
        let keys: Vec<KeyCode> = right.into_iter().chain([KeyCode::Enter]).collect();
        assert_eq!(pick_page(&keys, 1, 10), Some(Intent::GoToPage(5)));

        let typed = [KeyCode::Char('5'), KeyCode::Enter];
        assert_eq!(pick_page(&typed, 9, 10), Some(Intent::GoToPage(5)));

        let two_digits = [KeyCode::Char('1'), KeyCode::Char('0'), KeyCode::Enter];
        assert_eq!(pick_page(&two_digits, 3, 10), Some(Intent::GoToPage(10)));
    }

    #[test]
    fn page_picker_clamps_and_ignores_overshoot() {
        let mut jump = PageJump::new(2, 10);
        jump.step(-5);
        assert_eq!(jump.target(), 1);
        jump.set(40);
        assert_eq!(jump.target(), 10);

        jump.digit(0);
        assert_eq!(jump.target(), 10);
        jump.digit(7);
        jump.digit(7);
        assert_eq!(jump.target(), 7);
        jump.backspace();
        jump.digit(3);
        assert_eq!(jump.target(), 3);

        assert_eq!(jump.refit(2).target(), 2);
    }

    #[test]
    fn page_picker_needs_several_pages() {
        let mut normal = ctx(InputMode::Normal, Tab::Characters);
        normal.total_pages = Some(1);
        assert_eq!(map_key(press(KeyCode::Char(':')), normal), None);
        normal.total_pages = None;
        assert_eq!(map_key(press(KeyCode::Char(':')), normal), None);

        let picking = KeyContext {
            mode: InputMode::PageJump,
            page_jump: Some(PageJump::new(2, 4)),
            ..ctx(InputMode::Normal, Tab::Characters)
        };
        assert_eq!(map_key(press(KeyCode::Esc), picking), Some(Action::ClosePageJump));
        assert_eq!(map_key(press(KeyCode::Char('x')), picking), None);
    }

    #[test]
    fn number_keys_select_tabs() {
        let normal = ctx(InputMode::Normal, Tab::Characters);
        assert_eq!(
            map_key(press(KeyCode::Char('4')), normal),
            Some(Action::View(Intent::SelectTab(Tab::Houses)))
        );
        assert_eq!(
            map_key(press(KeyCode::BackTab), normal),
            Some(Action::View(Intent::SelectTab(Tab::Spells)))
        );
        assert_eq!(map_key(press(KeyCode::Char('6')), normal), None);
    }

    #[test]
    fn house_keys_only_on_houses_tab() {
        let houses = ctx(InputMode::Normal, Tab::Houses);
        assert_eq!(
            map_key(press(KeyCode::Char('s')), houses),
            Some(Action::View(Intent::SelectHouse(HouseFilter::Only(
                House::Slytherin
            ))))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a')), houses),
            Some(Action::View(Intent::SelectHouse(HouseFilter::All)))
        );

        let staff = ctx(InputMode::Normal, Tab::Staff);
        assert_eq!(map_key(press(KeyCode::Char('s')), staff), None);
    }

    #[test]
    fn end_jumps_to_last_page_when_paginated() {
        let mut normal = ctx(InputMode::Normal, Tab::Characters);
        assert_eq!(
            map_key(press(KeyCode::End), normal),
            Some(Action::View(Intent::GoToPage(4)))
        );
        normal.total_pages = None;
        assert_eq!(map_key(press(KeyCode::End), normal), None);
    }

    #[test]
    fn search_mode_captures_text() {
        let search = ctx(InputMode::Search, Tab::Characters);
        assert_eq!(
            map_key(press(KeyCode::Char('q')), search),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('1')), search),
            Some(Action::SearchInput('1'))
        );
        assert_eq!(map_key(press(KeyCode::Esc), search), Some(Action::CloseSearch));
    }

    #[test]
    fn esc_clears_applied_query() {
        let mut normal = ctx(InputMode::Normal, Tab::Characters);
        assert_eq!(map_key(press(KeyCode::Esc), normal), None);
        normal.has_query = true;
        assert_eq!(map_key(press(KeyCode::Esc), normal), Some(Action::ClearSearch));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [
            InputMode::Normal,
            InputMode::Search,
            InputMode::Detail,
            InputMode::Help,
        ] {
            assert_eq!(map_key(key, ctx(mode, Tab::Spells)), Some(Action::Quit));
        }
    }

    #[test]
    fn detail_closes_on_esc() {
        let detail = ctx(InputMode::Detail, Tab::Characters);
        assert_eq!(map_key(press(KeyCode::Esc), detail), Some(Action::CloseDetail));
        assert_eq!(map_key(press(KeyCode::Char('2')), detail), None);
    }
}
