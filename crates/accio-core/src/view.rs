//! View state: which tab, which house, which page, which query.
//!
//! `ViewState` is replaced wholesale on every transition. The `with_*`
//! builders enforce the reset rule: changing the tab, the house filter
//! or the query always lands on page 1.

use std::fmt;

use accio_api::Endpoint;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::model::House;

/// The five mutually exclusive dataset views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    #[default]
    Characters, // 1
    Students, // 2
    Staff,    // 3
    Houses,   // 4
    Spells,   // 5
}

/// Which renderer draws a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Paginated card grid.
    Grid,
    /// Paginated name/description list.
    List,
    /// Sections per house, or one paginated house.
    Houses,
}

impl Tab {
    /// All tabs in tab-bar order.
    pub const ALL: [Tab; 5] = [
        Self::Characters,
        Self::Students,
        Self::Staff,
        Self::Houses,
        Self::Spells,
    ];

    /// Numeric key (1-5) for this tab.
    pub fn number(self) -> u8 {
        match self {
            Self::Characters => 1,
            Self::Students => 2,
            Self::Staff => 3,
            Self::Houses => 4,
            Self::Spells => 5,
        }
    }

    /// Tab from a numeric key (1-5). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Characters),
            2 => Some(Self::Students),
            3 => Some(Self::Staff),
            4 => Some(Self::Houses),
            5 => Some(Self::Spells),
            _ => None,
        }
    }

    /// Next tab in order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous tab in order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Characters => "Characters",
            Self::Students => "Students",
            Self::Staff => "Staff",
            Self::Houses => "Houses",
            Self::Spells => "Spells",
        }
    }

    /// The endpoint that backs this tab. Houses groups the full
    /// character list client-side.
    pub fn endpoint(self) -> Endpoint {
        match self {
            Self::Characters | Self::Houses => Endpoint::Characters,
            Self::Students => Endpoint::Students,
            Self::Staff => Endpoint::Staff,
            Self::Spells => Endpoint::Spells,
        }
    }

    /// Placeholder text for the search box.
    pub fn search_placeholder(self) -> &'static str {
        match self {
            Self::Spells => "Search spells...",
            _ => "Search characters... (e.g. Harry)",
        }
    }

    /// House selection controls are only shown on the houses tab.
    pub fn shows_house_controls(self) -> bool {
        self == Self::Houses
    }

    pub fn renderer(self) -> Renderer {
        match self {
            Self::Houses => Renderer::Houses,
            Self::Spells => Renderer::List,
            Self::Characters | Self::Students | Self::Staff => Renderer::Grid,
        }
    }

    /// The identifier used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// House filter on the houses tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseFilter {
    #[default]
    All,
    Only(House),
}

impl HouseFilter {
    /// `All` followed by each house, in button order.
    pub const ALL: [HouseFilter; 5] = [
        Self::All,
        Self::Only(House::Gryffindor),
        Self::Only(House::Slytherin),
        Self::Only(House::Ravenclaw),
        Self::Only(House::Hufflepuff),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(house) => house.name(),
        }
    }
}

/// The complete, immutable-on-write view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    /// Only meaningful when `tab == Tab::Houses`.
    pub house: HouseFilter,
    /// 1-based.
    pub page: u32,
    /// Trimmed search text, possibly empty.
    pub query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: Tab::default(),
            house: HouseFilter::default(),
            page: 1,
            query: String::new(),
        }
    }
}

impl ViewState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Switch tab. The query is cleared since the new tab loads unfiltered.
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self {
            tab,
            house: self.house,
            page: 1,
            query: String::new(),
        }
    }

    pub fn with_house(&self, house: HouseFilter) -> Self {
        Self {
            house,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.trim().to_owned(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tab_round_trips_through_number() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_number(tab.number()), Some(tab));
        }
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(6), None);
    }

    #[test]
    fn tab_cycles_wrap() {
        assert_eq!(Tab::Spells.next(), Tab::Characters);
        assert_eq!(Tab::Characters.prev(), Tab::Spells);
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("houses".parse::<Tab>().unwrap(), Tab::Houses);
        assert_eq!("Spells".parse::<Tab>().unwrap(), Tab::Spells);
        assert!("wands".parse::<Tab>().is_err());
        assert_eq!(Tab::Staff.as_str(), "staff");
    }

    #[test]
    fn renderer_dispatch() {
        assert_eq!(Tab::Houses.renderer(), Renderer::Houses);
        assert_eq!(Tab::Spells.renderer(), Renderer::List);
        assert_eq!(Tab::Staff.renderer(), Renderer::Grid);
    }

    #[test]
    fn house_tab_uses_character_endpoint() {
        assert_eq!(Tab::Houses.endpoint(), Endpoint::Characters);
        assert_eq!(Tab::Students.endpoint(), Endpoint::Students);
    }

    #[test]
    fn placeholder_depends_on_tab() {
        assert_eq!(Tab::Spells.search_placeholder(), "Search spells...");
        assert_eq!(
            Tab::Houses.search_placeholder(),
            "Search characters... (e.g. Harry)"
        );
    }

    #[test]
    fn every_change_resets_page() {
        let state = ViewState::new(Tab::Characters).with_page(4);
        assert_eq!(state.page, 4);
        assert_eq!(state.with_tab(Tab::Staff).page, 1);
        assert_eq!(state.with_house(HouseFilter::Only(House::Ravenclaw)).page, 1);
        assert_eq!(state.with_query("harry").page, 1);
    }

    #[test]
    fn query_is_trimmed_and_cleared_on_tab_switch() {
        let state = ViewState::default().with_query("  harry ");
        assert_eq!(state.query, "harry");
        assert!(state.with_tab(Tab::Spells).query.is_empty());
    }
}
