// ── API-to-domain type conversions ──
//
// Bridges raw `accio_api` response types into canonical `accio_core::model`
// types. Blank strings are treated the same as missing fields so the
// renderers only ever need to check for `None`.

use accio_api::{CharacterResponse, SpellResponse, WandResponse};

use crate::model::{Character, Spell, Wand};

/// Drop empty / whitespace-only strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<WandResponse> for Wand {
    fn from(w: WandResponse) -> Self {
        Wand {
            wood: non_blank(w.wood),
            core: non_blank(w.core),
            length: w.length,
        }
    }
}

impl From<CharacterResponse> for Character {
    fn from(c: CharacterResponse) -> Self {
        let wand = c
            .wand
            .map(Wand::from)
            .filter(|w| w.wood.is_some() || w.core.is_some() || w.length.is_some());

        Character {
            name: c.name.unwrap_or_default(),
            house: non_blank(c.house),
            image: non_blank(c.image),
            species: non_blank(c.species),
            actor: non_blank(c.actor),
            patronus: non_blank(c.patronus),
            wand,
            date_of_birth: non_blank(c.date_of_birth),
            year_of_birth: c.year_of_birth,
        }
    }
}

impl From<SpellResponse> for Spell {
    fn from(s: SpellResponse) -> Self {
        Spell {
            name: s.name.unwrap_or_default(),
            description: non_blank(s.description),
        }
    }
}
