// ── Character cleaning ──
//
// The upstream data is uncurated, so cleaning favours inclusion: only
// records without a real name are dropped. Records lacking a usable
// image are kept and rendered with a placeholder (see
// `Character::has_image`).

use crate::model::Character;

/// Keep only records whose trimmed name is longer than one character.
pub fn clean_characters(list: impl IntoIterator<Item = Character>) -> Vec<Character> {
    list.into_iter().filter(has_valid_name).collect()
}

fn has_valid_name(ch: &Character) -> bool {
    ch.name.trim().chars().count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, image: Option<&str>) -> Character {
        Character {
            name: name.into(),
            image: image.map(Into::into),
            ..Character::default()
        }
    }

    #[test]
    fn drops_empty_and_single_letter_names() {
        let cleaned = clean_characters(vec![
            named("", None),
            named("A", None),
            named("   B  ", None),
            named("Harry Potter", None),
        ]);
        let names: Vec<&str> = cleaned.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Harry Potter"]);
    }

    #[test]
    fn keeps_characters_without_usable_image() {
        let cleaned = clean_characters(vec![named("Harry Potter", Some("a.jpg"))]);
        assert_eq!(cleaned.len(), 1);
        assert!(!cleaned[0].has_image());
    }

    #[test]
    fn two_letter_name_survives() {
        let cleaned = clean_characters(vec![named("Bo", None)]);
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn preserves_order() {
        let cleaned = clean_characters(vec![
            named("Ron Weasley", None),
            named("", None),
            named("Draco Malfoy", None),
        ]);
        assert_eq!(cleaned[0].name, "Ron Weasley");
        assert_eq!(cleaned[1].name, "Draco Malfoy");
    }
}
