// ── Character domain types ──

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr, VariantNames};

/// Image shown when a character has no usable portrait.
pub const PLACEHOLDER_IMAGE: &str = "images/hogwarts-crest.png";

/// An image URL must be longer than this to count as usable.
const MIN_IMAGE_LEN: usize = 10;

/// The four Hogwarts houses, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
pub enum House {
    Gryffindor,
    Slytherin,
    Ravenclaw,
    Hufflepuff,
}

impl House {
    /// All houses in section order.
    pub const ALL: [House; 4] = [
        Self::Gryffindor,
        Self::Slytherin,
        Self::Ravenclaw,
        Self::Hufflepuff,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Case-insensitive equality against a raw `house` field.
    pub fn matches(self, raw: Option<&str>) -> bool {
        raw.is_some_and(|h| h.eq_ignore_ascii_case(self.name()))
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wand description. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wand {
    pub wood: Option<String>,
    pub core: Option<String>,
    /// Length in inches.
    pub length: Option<f64>,
}

impl Wand {
    /// `"holly phoenix tail feather 11 in"`, skipping missing parts.
    /// Returns `None` when nothing is known about the wand.
    pub fn describe(&self) -> Option<String> {
        let length = self
            .length
            .filter(|l| *l > 0.0)
            .map(|l| format!("{l} in"));
        let parts: Vec<&str> = [self.wood.as_deref(), self.core.as_deref(), length.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Where a card's portrait comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    Placeholder,
}

impl ImageRef {
    /// The URL or path the surface should load.
    pub fn location(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }
}

/// The canonical Character type.
///
/// Empty strings from the wire are normalised to `None`; the name is the
/// only field that is always present (possibly empty before cleaning).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Character {
    pub name: String,
    pub house: Option<String>,
    pub image: Option<String>,
    pub species: Option<String>,
    pub actor: Option<String>,
    pub patronus: Option<String>,
    pub wand: Option<Wand>,
    pub date_of_birth: Option<String>,
    pub year_of_birth: Option<i32>,
}

impl Character {
    /// Whether the image URL is long enough to be worth loading.
    pub fn has_image(&self) -> bool {
        self.image
            .as_deref()
            .is_some_and(|url| url.chars().count() > MIN_IMAGE_LEN)
    }

    pub fn image_ref(&self) -> ImageRef {
        match &self.image {
            Some(url) if self.has_image() => ImageRef::Url(url.clone()),
            _ => ImageRef::Placeholder,
        }
    }

    /// Case-insensitive substring match on the name. `needle` must already
    /// be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
