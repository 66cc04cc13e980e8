//! Application core: event loop, action dispatch, and frame layout.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{Event as TerminalEvent, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use accio_core::{
    CharacterDetail, ClientConfig, DataService, Effect, HousesPlan, Intent, LoadStatus,
    RenderPlan, SearchDebouncer, ViewController,
};

use crate::action::Action;
use crate::bridge;
use crate::keys::{InputMode, KeyContext, PageJump, map_key};
use crate::theme;
use crate::tui::TerminalSession;
use crate::widgets::{cards, centered_rect, detail, pagination, spells, status, tab_bar};

/// Loader animation frame interval.
const LOADER_FRAME: Duration = Duration::from_millis(100);

/// Contents of the search box. The applied query lives in the controller;
/// this is what the user has typed so far.
#[derive(Debug, Default)]
struct SearchBox {
    text: String,
    editing: bool,
}

/// Top-level application state and event loop.
pub struct App {
    controller: ViewController,
    service: DataService,
    debouncer: SearchDebouncer,
    search: SearchBox,
    /// Card cursor, an index into the current render plan's cards.
    selected: usize,
    detail: Option<CharacterDetail>,
    help_visible: bool,
    page_jump: Option<PageJump>,
    throbber: ThrobberState,
    /// Set when the next loop iteration must redraw.
    redraw: bool,
    running: bool,
    cancel: CancellationToken,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Build the app and its background tasks. Must run inside a tokio
    /// runtime.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let debouncer = SearchDebouncer::spawn(config.search_debounce, settled_tx, cancel.clone());
        bridge::spawn_search_bridge(settled_rx, action_tx.clone(), cancel.clone());

        Ok(Self {
            controller: ViewController::new(config.start_tab, config.page_size),
            service: DataService::new(config)?,
            debouncer,
            search: SearchBox::default(),
            selected: 0,
            detail: None,
            help_visible: false,
            page_jump: None,
            throbber: ThrobberState::default(),
            redraw: true,
            running: true,
            cancel,
            action_tx,
            action_rx,
        })
    }

    /// Run the main event loop until the user quits.
    ///
    /// Redraws only when something changed: a key press, a resize, a
    /// controller `Effect::Render`, or a loader animation frame.
    pub async fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::open()?;
        let mut terminal_events = EventStream::new();
        let mut loader_frames = tokio::time::interval(LOADER_FRAME);
        loader_frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let effects = self.controller.start();
        self.perform(effects);
        info!(tab = %self.controller.state().tab, "TUI event loop started");

        while self.running {
            if std::mem::take(&mut self.redraw) {
                session.draw(|frame| self.render(frame))?;
            }

            let loading = matches!(self.controller.status(), LoadStatus::Loading);
            tokio::select! {
                event = terminal_events.next() => match event {
                    Some(event) => self.handle_terminal_event(event?),
                    None => break,
                },

                Some(action) = self.action_rx.recv() => self.process_action(action),

                _ = loader_frames.tick(), if loading => {
                    self.throbber.calc_next();
                    self.redraw = true;
                }
            }
        }

        self.cancel.cancel();
        info!("TUI event loop ended");
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key, self.key_context()) {
                    self.process_action(action);
                }
                self.redraw = true;
            }
            TerminalEvent::Resize(..) => self.redraw = true,
            _ => {}
        }
    }

    fn input_mode(&self) -> InputMode {
        if self.detail.is_some() {
            InputMode::Detail
        } else if self.help_visible {
            InputMode::Help
        } else if self.page_jump.is_some() {
            InputMode::PageJump
        } else if self.search.editing {
            InputMode::Search
        } else {
            InputMode::Normal
        }
    }

    fn key_context(&self) -> KeyContext {
        KeyContext {
            mode: self.input_mode(),
            tab: self.controller.state().tab,
            total_pages: self.controller.total_pages(),
            has_query: !self.controller.state().query.is_empty(),
            page_jump: self.page_jump,
        }
    }

    /// Hand an intent to the controller and carry out its effects.
    fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::SelectTab(_) => {
                self.search = SearchBox::default();
                self.detail = None;
                self.page_jump = None;
            }
            Intent::GoToPage(_) => self.page_jump = None,
            _ => {}
        }
        self.selected = 0;
        let effects = self.controller.apply(intent);
        self.perform(effects);

        // The page count may have changed under an open picker.
        self.page_jump = self
            .page_jump
            .zip(self.controller.total_pages())
            .map(|(jump, total)| jump.refit(total));
    }

    fn perform(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(request) => {
                    bridge::spawn_fetch(self.service.clone(), request, self.action_tx.clone());
                }
                Effect::Render => self.redraw = true,
            }
        }
    }

    fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,

            Action::View(intent) => self.dispatch(intent),

            Action::OpenSearch => self.search.editing = true,
            Action::CloseSearch => self.search.editing = false,
            Action::SearchInput(c) => {
                self.search.text.push(c);
                self.debouncer.push(self.search.text.clone());
            }
            Action::SearchBackspace => {
                self.search.text.pop();
                self.debouncer.push(self.search.text.clone());
            }
            Action::ClearSearch => {
                self.search.text.clear();
                self.dispatch(Intent::Search(String::new()));
            }
            Action::SearchSettled(query) => {
                // The box may have changed (or been reset by a tab switch)
                // since this query was typed.
                if query == self.search.text {
                    self.dispatch(Intent::Search(query));
                } else {
                    debug!(query = %query, "dropping superseded search");
                }
            }

            Action::MoveSelection(delta) => {
                let count = self.controller.render_plan().cards().len();
                if count > 0 {
                    let step = delta.unsigned_abs();
                    self.selected = if delta < 0 {
                        self.selected.saturating_sub(step)
                    } else {
                        self.selected.saturating_add(step).min(count - 1)
                    };
                }
            }
            Action::OpenDetail => {
                let plan = self.controller.render_plan();
                self.detail = plan
                    .cards()
                    .get(self.selected)
                    .and_then(|card| self.controller.detail(card.index));
            }
            Action::CloseDetail => self.detail = None,
            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::OpenPageJump => {
                let current = self.controller.state().page;
                self.page_jump = self
                    .controller
                    .total_pages()
                    .map(|total| PageJump::new(current, total));
            }
            Action::ClosePageJump => self.page_jump = None,
            Action::PageJumpStep(delta) => self.edit_page_jump(|jump| jump.step(delta)),
            Action::PageJumpSet(page) => self.edit_page_jump(|jump| jump.set(page)),
            Action::PageJumpDigit(digit) => self.edit_page_jump(|jump| jump.digit(digit)),
            Action::PageJumpBackspace => self.edit_page_jump(PageJump::backspace),
        }
    }

    fn edit_page_jump(&mut self, edit: impl FnOnce(&mut PageJump)) {
        if let Some(jump) = self.page_jump.as_mut() {
            edit(jump);
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&mut self, frame: &mut Frame) {
        let plan = self.controller.render_plan();
        let state = self.controller.state().clone();
        let area = frame.area();

        let house_row = u16::from(state.tab.shows_house_controls());
        let pager_rows = if plan.controls().is_some() { 2 } else { 0 };

        let [header, tabs, houses, search, content, pager, status_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(house_row),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(pager_rows),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Accio ", theme::title_style()),
                Span::styled("· Harry Potter API browser", theme::key_hint()),
            ])),
            header,
        );
        frame.render_widget(Paragraph::new(tab_bar::tab_line(state.tab)), tabs);
        if house_row > 0 {
            frame.render_widget(Paragraph::new(tab_bar::house_line(state.house)), houses);
        }
        self.render_search(frame, search, state.tab.search_placeholder());

        let content = content.inner(Margin::new(1, 0));
        self.render_content(frame, content, &plan);

        if let Some(controls) = plan.controls() {
            let [row, summary] = pagination::pagination_lines(controls, self.page_jump);
            frame.render_widget(Paragraph::new(vec![row, summary]), pager);
        }

        Self::render_status_bar(frame, status_bar);

        if let Some(detail) = &self.detail {
            detail::render_detail(frame, area, detail);
        } else if self.help_visible {
            Self::render_help(frame, area);
        }
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, placeholder: &'static str) {
        let prompt = Span::styled(" / ", theme::key_hint_key());
        let body = if self.search.text.is_empty() && !self.search.editing {
            Span::styled(placeholder, theme::placeholder())
        } else {
            Span::styled(self.search.text.clone(), theme::body())
        };
        let mut spans = vec![prompt, body];
        if self.search.editing {
            spans.push(Span::styled("▏", theme::border_focused()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, plan: &RenderPlan) {
        let count = plan.cards().len();
        let selected = (count > 0).then(|| self.selected.min(count - 1));

        match plan {
            RenderPlan::Loading => status::render_loader(frame, area, &mut self.throbber),
            RenderPlan::Failed { reason } => status::render_failure(frame, area, reason),
            RenderPlan::Empty { message } => status::render_empty(frame, area, message),
            RenderPlan::Grid { cards, .. } => cards::render_card_grid(frame, area, cards, selected),
            RenderPlan::Spells { rows, .. } => spells::render_spell_list(frame, area, rows),
            RenderPlan::Houses(HousesPlan::All { sections }) => {
                cards::render_house_sections(frame, area, sections, selected);
            }
            RenderPlan::Houses(HousesPlan::Single { house, cards, .. }) => {
                let [heading, grid] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        house.name(),
                        theme::title_style().fg(theme::house_color(*house)),
                    )),
                    heading,
                );
                if cards.is_empty() {
                    status::render_empty(frame, grid, accio_core::render::NO_HOUSE_MEMBERS);
                } else {
                    cards::render_card_grid(frame, grid, cards, selected);
                }
            }
        }
    }

    fn render_status_bar(frame: &mut Frame, area: Rect) {
        let hint = |key: &'static str, label: &'static str| {
            [
                Span::styled(key, theme::key_hint_key()),
                Span::styled(label, theme::key_hint()),
            ]
        };
        let spans: Vec<Span> = [
            hint(" 1-5", " tab  "),
            hint("←/→", " page  "),
            hint(":", " go to  "),
            hint("j/k", " select  "),
            hint("⏎", " details  "),
            hint("/", " search  "),
            hint("?", " help  "),
            hint("q", " quit"),
        ]
        .into_iter()
        .flatten()
        .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        const BINDINGS: &[(&str, &str)] = &[
            ("1-5 Tab", "Switch tab"),
            ("a g s r h", "House filter (houses tab)"),
            ("← → n p", "Previous / next page"),
            ("Home End", "First / last page"),
            (":", "Pick a page (←/→ or digits, Enter)"),
            ("j k ↑ ↓", "Move card cursor"),
            ("Enter", "Character details"),
            ("/", "Search (Esc or Enter to leave)"),
            ("Esc", "Clear search / close"),
            ("R", "Reload"),
            ("q Ctrl+c", "Quit"),
        ];

        let overlay = centered_rect(area, 56, 16);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_HIGHLIGHT))
            .title(Span::styled(" Keyboard Shortcuts ", theme::title_style()));

        let mut lines = vec![Line::default()];
        lines.extend(BINDINGS.iter().map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(*what, theme::body()),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Esc or ? to close", theme::key_hint())).centered());

        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}
