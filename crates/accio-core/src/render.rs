//! Render plans: what the presentation surface should draw right now.
//!
//! The controller builds one on demand from its current state; the
//! surface treats it as a sink of instructions and never reaches back
//! into the dataset except through card indices.

use crate::detail::CharacterCard;
use crate::model::House;
use crate::paginate::PageControls;

/// Shown when a grid tab has nothing to display.
pub const NO_CHARACTERS: &str = "No characters found.";
/// Shown when the spell list has nothing to display.
pub const NO_SPELLS: &str = "No spells found.";
/// Shown inside an empty house section.
pub const NO_HOUSE_MEMBERS: &str = "No characters for this house";

/// One row of the spell list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellRow {
    pub name: String,
    /// Empty when the API has no description.
    pub description: String,
}

/// One house heading with its (unpaginated) cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseSection {
    pub house: House,
    /// Empty sections render [`NO_HOUSE_MEMBERS`].
    pub cards: Vec<CharacterCard>,
}

/// The houses tab has two layouts depending on the house filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HousesPlan {
    /// Every house, one section each, not paginated.
    All { sections: Vec<HouseSection> },
    /// A single house, paginated.
    Single {
        house: House,
        cards: Vec<CharacterCard>,
        controls: Option<PageControls>,
    },
}

/// Everything the surface may be asked to draw in the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// A fetch is in flight (or nothing has been requested yet).
    Loading,
    /// The last fetch failed; `reason` is shown inline.
    Failed { reason: String },
    /// Loaded, but nothing matches.
    Empty { message: &'static str },
    /// Card grid for characters / students / staff.
    Grid {
        cards: Vec<CharacterCard>,
        controls: Option<PageControls>,
    },
    /// Name + description list.
    Spells {
        rows: Vec<SpellRow>,
        controls: Option<PageControls>,
    },
    Houses(HousesPlan),
}

impl RenderPlan {
    /// Pagination controls, if this plan has any.
    pub fn controls(&self) -> Option<&PageControls> {
        match self {
            Self::Grid { controls, .. }
            | Self::Spells { controls, .. }
            | Self::Houses(HousesPlan::Single { controls, .. }) => controls.as_ref(),
            _ => None,
        }
    }

    /// All cards in display order (empty for non-character plans).
    pub fn cards(&self) -> Vec<&CharacterCard> {
        match self {
            Self::Grid { cards, .. } | Self::Houses(HousesPlan::Single { cards, .. }) => {
                cards.iter().collect()
            }
            Self::Houses(HousesPlan::All { sections }) => {
                sections.iter().flat_map(|s| s.cards.iter()).collect()
            }
            _ => Vec::new(),
        }
    }
}
