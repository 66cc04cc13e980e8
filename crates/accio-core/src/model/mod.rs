// ── Domain model ──
//
// Canonical types the view layer works with. Wire types live in
// `accio_api::models`; `crate::convert` maps one onto the other.

pub mod character;
pub mod dataset;
pub mod spell;

pub use character::{Character, House, ImageRef, PLACEHOLDER_IMAGE, Wand};
pub use dataset::Dataset;
pub use spell::Spell;
