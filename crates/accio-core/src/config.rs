// ── Runtime client configuration ──
//
// Describes where to load data from and how the view is paged. Built by
// the TUI from the config file and command line, then handed to
// `DataService` and `ViewController`. Core never reads config files.

use std::time::Duration;

use accio_api::TransportConfig;
use url::Url;

use crate::debounce::DEFAULT_SEARCH_DEBOUNCE;
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::view::Tab;

/// Whole-request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `https://hp-api.onrender.com/api`.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Items per page (at least 1).
    pub page_size: usize,
    /// Quiet period before a search is issued.
    pub search_debounce: Duration,
    /// Tab shown on startup.
    pub start_tab: Tab,
}

impl ClientConfig {
    /// Defaults for everything except the API root.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            start_tab: Tab::default(),
        }
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(self.timeout)
    }
}
