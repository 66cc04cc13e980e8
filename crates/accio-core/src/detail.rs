//! Read-only projections of a character for cards and the detail overlay.

use crate::model::{Character, ImageRef};

const DASH: &str = "—";
const NO_HOUSE: &str = "No House";
const UNKNOWN_HOUSE: &str = "Unknown";

/// What a grid or house-section card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    /// Position in the currently filtered dataset; pass it back to
    /// `ViewController::detail` to open the overlay.
    pub index: usize,
    pub name: String,
    /// House name, or "No House".
    pub house: String,
    pub image: ImageRef,
    /// Draw the "No image available" marker.
    pub missing_image: bool,
}

impl CharacterCard {
    pub fn new(index: usize, ch: &Character) -> Self {
        Self {
            index,
            name: ch.name.clone(),
            house: ch.house.clone().unwrap_or_else(|| NO_HOUSE.to_owned()),
            image: ch.image_ref(),
            missing_image: !ch.has_image(),
        }
    }
}

/// Structured summary shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub name: String,
    pub image: ImageRef,
    pub house: String,
    pub actor: String,
    pub species: String,
    pub patronus: String,
    pub wand: String,
    pub born: String,
}

impl CharacterDetail {
    /// Labelled rows in display order.
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("House", self.house.as_str()),
            ("Actor", self.actor.as_str()),
            ("Species", self.species.as_str()),
            ("Patronus", self.patronus.as_str()),
            ("Wand", self.wand.as_str()),
            ("Born", self.born.as_str()),
        ]
    }
}

fn or_dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| DASH.to_owned())
}

impl From<&Character> for CharacterDetail {
    fn from(ch: &Character) -> Self {
        let born = ch
            .date_of_birth
            .clone()
            .or_else(|| ch.year_of_birth.map(|y| y.to_string()))
            .unwrap_or_else(|| DASH.to_owned());

        Self {
            name: ch.name.clone(),
            image: ch.image_ref(),
            house: ch
                .house
                .clone()
                .unwrap_or_else(|| UNKNOWN_HOUSE.to_owned()),
            actor: or_dash(ch.actor.as_ref()),
            species: or_dash(ch.species.as_ref()),
            patronus: or_dash(ch.patronus.as_ref()),
            wand: ch
                .wand
                .as_ref()
                .and_then(crate::model::Wand::describe)
                .unwrap_or_else(|| DASH.to_owned()),
            born,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PLACEHOLDER_IMAGE, Wand};
    use pretty_assertions::assert_eq;

    fn harry() -> Character {
        Character {
            name: "Harry Potter".into(),
            house: Some("Gryffindor".into()),
            image: Some("https://ik.imagekit.io/hpapi/harry.jpg".into()),
            species: Some("human".into()),
            actor: Some("Daniel Radcliffe".into()),
            patronus: Some("stag".into()),
            wand: Some(Wand {
                wood: Some("holly".into()),
                core: Some("phoenix tail feather".into()),
                length: Some(11.0),
            }),
            date_of_birth: Some("31-07-1980".into()),
            year_of_birth: Some(1980),
        }
    }

    #[test]
    fn full_detail() {
        let detail = CharacterDetail::from(&harry());
        assert_eq!(
            detail.rows(),
            [
                ("House", "Gryffindor"),
                ("Actor", "Daniel Radcliffe"),
                ("Species", "human"),
                ("Patronus", "stag"),
                ("Wand", "holly phoenix tail feather 11 in"),
                ("Born", "31-07-1980"),
            ]
        );
    }

    #[test]
    fn missing_fields_fall_back() {
        let ch = Character {
            name: "Mrs Norris".into(),
            ..Character::default()
        };
        let detail = CharacterDetail::from(&ch);
        assert_eq!(detail.house, "Unknown");
        assert_eq!(detail.actor, "—");
        assert_eq!(detail.wand, "—");
        assert_eq!(detail.born, "—");
        assert_eq!(detail.image.location(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn born_falls_back_to_year() {
        let ch = Character {
            name: "Albus Dumbledore".into(),
            year_of_birth: Some(1881),
            ..Character::default()
        };
        assert_eq!(CharacterDetail::from(&ch).born, "1881");
    }

    #[test]
    fn card_flags_missing_image() {
        let ch = Character {
            name: "Harry Potter".into(),
            image: Some("x.png".into()),
            ..Character::default()
        };
        let card = CharacterCard::new(3, &ch);
        assert_eq!(card.index, 3);
        assert_eq!(card.house, "No House");
        assert!(card.missing_image);
        assert_eq!(card.image, ImageRef::Placeholder);
    }
}
