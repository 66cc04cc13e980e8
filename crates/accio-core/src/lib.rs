//! View logic and data loading between `accio-api` and the terminal UI.
//!
//! This crate owns everything about browsing the Harry Potter API that is
//! not drawing:
//!
//! - **[`ViewController`]** — The tab / house / search / page state
//!   machine. User actions arrive as [`Intent`]s; each transition returns
//!   the [`Effect`]s to perform (spawn a fetch, repaint). Fetch results are
//!   tagged with a generation so stale responses are discarded.
//!
//! - **[`RenderPlan`]** — A declarative description of what to draw,
//!   rebuilt from the current state on every call to
//!   [`ViewController::render_plan`].
//!
//! - **[`DataService`]** — Loads a tab's dataset, converts wire records to
//!   the domain model ([`model`]) and cleans character lists.
//!
//! - **Pure helpers** — [`paginate()`], [`build_page_controls`], the search
//!   filters in [`filter`], and the [`SearchDebouncer`] for keystrokes.

pub mod clean;
pub mod config;
pub mod controller;
pub mod convert;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod render;
pub mod service;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use clean::clean_characters;
pub use config::ClientConfig;
pub use controller::{Effect, FetchRequest, Intent, LoadStatus, ViewController};
pub use debounce::SearchDebouncer;
pub use detail::{CharacterCard, CharacterDetail};
pub use error::FetchFailure;
pub use paginate::{NavButton, PageControls, PageItem, build_page_controls, paginate};
pub use render::{HouseSection, HousesPlan, RenderPlan, SpellRow};
pub use service::DataService;
pub use view::{HouseFilter, Renderer, Tab, ViewState};

pub use model::{Character, Dataset, House, ImageRef, PLACEHOLDER_IMAGE, Spell, Wand};

// Transport error surfaced by `DataService::new`.
pub use accio_api::{DEFAULT_BASE_URL, Error as ApiError};
