// ── Dataset: the entities loaded for one tab ──

use super::{Character, Spell};
use crate::filter;

/// Ordered entities currently loaded for the active tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Characters(Vec<Character>),
    Spells(Vec<Spell>),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Self::Characters(list) => list.len(),
            Self::Spells(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character slice; empty for a spell dataset.
    pub fn characters(&self) -> &[Character] {
        match self {
            Self::Characters(list) => list,
            Self::Spells(_) => &[],
        }
    }

    /// Spell slice; empty for a character dataset.
    pub fn spells(&self) -> &[Spell] {
        match self {
            Self::Spells(list) => list,
            Self::Characters(_) => &[],
        }
    }

    /// Apply a search query. Characters match on name, spells on name or
    /// description. An empty query returns an unfiltered copy.
    pub fn filtered(&self, query: &str) -> Self {
        match self {
            Self::Characters(list) => Self::Characters(filter::search_characters(list, query)),
            Self::Spells(list) => Self::Spells(filter::search_spells(list, query)),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::Characters(Vec::new())
    }
}
