//! View controller: the tab / house / search / page state machine.
//!
//! Every user action arrives as an [`Intent`]. [`ViewController::apply`]
//! computes the next [`ViewState`], swaps it in, and returns the
//! [`Effect`]s the caller must carry out: spawn a fetch, or repaint.
//! Fetch results come back as [`Intent::Loaded`] tagged with the
//! generation they were issued under; anything older than the latest
//! generation is discarded, so a slow response for a tab the user has
//! already left can never overwrite a newer one.

use tracing::{debug, info, warn};

use crate::detail::{CharacterCard, CharacterDetail};
use crate::error::FetchFailure;
use crate::filter;
use crate::model::{Character, Dataset, Spell};
use crate::paginate::{build_page_controls, paginate, total_pages as page_count};
use crate::render::{
    HouseSection, HousesPlan, NO_CHARACTERS, NO_SPELLS, RenderPlan, SpellRow,
};
use crate::view::{HouseFilter, Renderer, Tab, ViewState};

/// A load the caller must perform, tagged with its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub tab: Tab,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the dataset for `request.tab` and feed the result back as
    /// [`Intent::Loaded`].
    Fetch(FetchRequest),
    /// State changed; repaint from [`ViewController::render_plan`].
    Render,
}

/// Everything that can happen to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Switch tab and reload its dataset.
    SelectTab(Tab),
    /// Pick a house filter. Only acted on in the houses tab.
    SelectHouse(HouseFilter),
    /// A settled (already debounced) search query.
    Search(String),
    GoToPage(u32),
    NextPage,
    PrevPage,
    /// Re-fetch the current tab, keeping the query.
    Reload,
    /// Result of a fetch previously requested via [`Effect::Fetch`].
    Loaded {
        generation: u64,
        result: Result<Dataset, FetchFailure>,
    },
}

/// Where the current tab's data is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(FetchFailure),
}

/// A dataset together with the tab it belongs to and its search-filtered
/// view.
#[derive(Debug, Clone)]
struct LoadedData {
    tab: Tab,
    all: Dataset,
    visible: Dataset,
}

/// Owns the view state and the current dataset.
#[derive(Debug)]
pub struct ViewController {
    state: ViewState,
    page_size: usize,
    status: LoadStatus,
    data: Option<LoadedData>,
    generation: u64,
}

impl ViewController {
    pub fn new(tab: Tab, page_size: usize) -> Self {
        Self {
            state: ViewState::new(tab),
            page_size: page_size.max(1),
            status: LoadStatus::Idle,
            data: None,
            generation: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Generation of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The search-filtered dataset, if one is loaded for the current tab.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.current().map(|d| &d.visible)
    }

    /// Detail projection for a card index from the current render plan.
    pub fn detail(&self, index: usize) -> Option<CharacterDetail> {
        self.dataset()?
            .characters()
            .get(index)
            .map(CharacterDetail::from)
    }

    fn current(&self) -> Option<&LoadedData> {
        self.data.as_ref().filter(|d| d.tab == self.state.tab)
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Initial load of the starting tab.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![Effect::Fetch(self.begin_fetch()), Effect::Render]
    }

    /// Apply one intent and return the effects to perform.
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::SelectTab(tab) => {
                debug!(from = %self.state.tab, to = %tab, "select tab");
                self.state = self.state.with_tab(tab);
                vec![Effect::Fetch(self.begin_fetch()), Effect::Render]
            }

            Intent::SelectHouse(house) => {
                if !self.state.tab.shows_house_controls() {
                    debug!(house = house.label(), "house selection ignored outside houses tab");
                    return Vec::new();
                }
                debug!(house = house.label(), "select house");
                self.state = self.state.with_house(house);
                self.mark_ready_if_loaded();
                vec![Effect::Render]
            }

            Intent::Search(query) => self.search(&query),

            Intent::GoToPage(page) => self.go_to_page(page),
            Intent::NextPage => self.go_to_page(self.state.page.saturating_add(1)),
            Intent::PrevPage => self.go_to_page(self.state.page.saturating_sub(1)),

            Intent::Reload => {
                debug!(tab = %self.state.tab, "reload");
                vec![Effect::Fetch(self.begin_fetch()), Effect::Render]
            }

            Intent::Loaded { generation, result } => self.loaded(generation, result),
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        FetchRequest {
            generation: self.generation,
            tab: self.state.tab,
        }
    }

    /// Local re-render from data already in memory replaces a stale
    /// failure message, but never hides an in-flight loader.
    fn mark_ready_if_loaded(&mut self) {
        if self.current().is_some() && self.status != LoadStatus::Loading {
            self.status = LoadStatus::Ready;
        }
    }

    fn search(&mut self, query: &str) -> Vec<Effect> {
        self.state = self.state.with_query(query);
        let query = self.state.query.clone();
        debug!(tab = %self.state.tab, query = %query, "search");

        if query.is_empty() {
            if let Some(data) = self.data.as_mut().filter(|d| d.tab == self.state.tab) {
                data.visible = data.all.clone();
                self.mark_ready_if_loaded();
                return vec![Effect::Render];
            }
            return vec![Effect::Fetch(self.begin_fetch()), Effect::Render];
        }

        // Spell descriptions are searched against a fresh list every time.
        if self.state.tab == Tab::Spells {
            return vec![Effect::Fetch(self.begin_fetch()), Effect::Render];
        }

        if let Some(data) = self.data.as_mut().filter(|d| d.tab == self.state.tab) {
            data.visible = data.all.filtered(&query);
            self.mark_ready_if_loaded();
            vec![Effect::Render]
        } else {
            vec![Effect::Fetch(self.begin_fetch()), Effect::Render]
        }
    }

    fn go_to_page(&mut self, page: u32) -> Vec<Effect> {
        let Some(total) = self.total_pages() else {
            return Vec::new();
        };
        if page == 0 || page > total || page == self.state.page {
            return Vec::new();
        }
        debug!(page, total, "go to page");
        self.state = self.state.with_page(page);
        vec![Effect::Render]
    }

    fn loaded(&mut self, generation: u64, result: Result<Dataset, FetchFailure>) -> Vec<Effect> {
        if generation != self.generation {
            warn!(
                generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return Vec::new();
        }

        match result {
            Ok(all) => {
                let visible = if self.state.query.is_empty() {
                    all.clone()
                } else {
                    all.filtered(&self.state.query)
                };
                info!(
                    tab = %self.state.tab,
                    loaded = all.len(),
                    visible = visible.len(),
                    "dataset ready"
                );
                self.data = Some(LoadedData {
                    tab: self.state.tab,
                    all,
                    visible,
                });
                self.status = LoadStatus::Ready;

                // A reload may come back shorter than the page we were on.
                let last = self.total_pages().unwrap_or(1).max(1);
                if self.state.page > last {
                    debug!(page = self.state.page, last, "clamping page after load");
                    self.state = self.state.with_page(last);
                }
            }
            Err(failure) => {
                warn!(tab = %self.state.tab, reason = %failure.reason, "fetch failed");
                self.status = LoadStatus::Failed(failure);
            }
        }
        vec![Effect::Render]
    }

    // ── Page math ────────────────────────────────────────────────────

    /// Page count of whatever is currently paginated, or `None` when the
    /// current view has no pagination (no data, or all-houses sections).
    pub fn total_pages(&self) -> Option<u32> {
        if self.status != LoadStatus::Ready {
            return None;
        }
        let data = self.current()?;
        let len = match (self.state.tab.renderer(), self.state.house) {
            (Renderer::Houses, HouseFilter::All) => return None,
            (Renderer::Houses, HouseFilter::Only(house)) => {
                filter::in_house(data.visible.characters(), house).len()
            }
            (Renderer::Grid | Renderer::List, _) => data.visible.len(),
        };
        Some(page_count(len, self.page_size))
    }

    fn page_offset(&self) -> usize {
        usize::try_from(self.state.page.max(1) - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(self.page_size)
    }

    // ── Render plans ─────────────────────────────────────────────────

    /// Describe what the surface should draw. The renderer is looked up
    /// from the current tab on every call.
    pub fn render_plan(&self) -> RenderPlan {
        match &self.status {
            LoadStatus::Idle | LoadStatus::Loading => RenderPlan::Loading,
            LoadStatus::Failed(failure) => RenderPlan::Failed {
                reason: failure.reason.clone(),
            },
            LoadStatus::Ready => {
                let Some(data) = self.current() else {
                    return RenderPlan::Loading;
                };
                match self.state.tab.renderer() {
                    Renderer::Grid => self.grid_plan(data.visible.characters()),
                    Renderer::List => self.spells_plan(data.visible.spells()),
                    Renderer::Houses => self.houses_plan(data.visible.characters()),
                }
            }
        }
    }

    fn grid_plan(&self, list: &[Character]) -> RenderPlan {
        if list.is_empty() {
            return RenderPlan::Empty {
                message: NO_CHARACTERS,
            };
        }
        let offset = self.page_offset();
        let cards = paginate(list, self.state.page, self.page_size)
            .iter()
            .enumerate()
            .map(|(i, ch)| CharacterCard::new(offset + i, ch))
            .collect();
        RenderPlan::Grid {
            cards,
            controls: build_page_controls(list.len(), self.state.page, self.page_size),
        }
    }

    fn spells_plan(&self, list: &[Spell]) -> RenderPlan {
        if list.is_empty() {
            return RenderPlan::Empty { message: NO_SPELLS };
        }
        let rows = paginate(list, self.state.page, self.page_size)
            .iter()
            .map(|s| SpellRow {
                name: s.name.clone(),
                description: s.description.clone().unwrap_or_default(),
            })
            .collect();
        RenderPlan::Spells {
            rows,
            controls: build_page_controls(list.len(), self.state.page, self.page_size),
        }
    }

    fn houses_plan(&self, list: &[Character]) -> RenderPlan {
        match self.state.house {
            HouseFilter::All => {
                let sections = filter::group_by_house(list)
                    .into_iter()
                    .map(|(house, members)| HouseSection {
                        house,
                        cards: members
                            .into_iter()
                            .map(|(i, ch)| CharacterCard::new(i, ch))
                            .collect(),
                    })
                    .collect();
                RenderPlan::Houses(HousesPlan::All { sections })
            }
            HouseFilter::Only(house) => {
                let members = filter::in_house(list, house);
                let cards = paginate(&members, self.state.page, self.page_size)
                    .iter()
                    .map(|(i, ch)| CharacterCard::new(*i, ch))
                    .collect();
                RenderPlan::Houses(HousesPlan::Single {
                    house,
                    cards,
                    controls: build_page_controls(members.len(), self.state.page, self.page_size),
                })
            }
        }
    }
}
