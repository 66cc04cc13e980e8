// ── Search and house filtering ──

use crate::model::{Character, House, Spell};

/// Characters whose name contains `query`, case-insensitively.
pub fn search_characters(list: &[Character], query: &str) -> Vec<Character> {
    let needle = query.trim().to_lowercase();
    list.iter()
        .filter(|ch| ch.name_contains(&needle))
        .cloned()
        .collect()
}

/// Spells whose name or description contains `query`, case-insensitively.
pub fn search_spells(list: &[Spell], query: &str) -> Vec<Spell> {
    let needle = query.trim().to_lowercase();
    list.iter()
        .filter(|s| s.text_contains(&needle))
        .cloned()
        .collect()
}

/// Members of `house`, in dataset order, paired with their dataset index.
pub fn in_house(list: &[Character], house: House) -> Vec<(usize, &Character)> {
    list.iter()
        .enumerate()
        .filter(|(_, ch)| house.matches(ch.house.as_deref()))
        .collect()
}

/// One group per house in [`House::ALL`] order, including empty groups.
pub fn group_by_house(list: &[Character]) -> Vec<(House, Vec<(usize, &Character)>)> {
    House::ALL
        .into_iter()
        .map(|house| (house, in_house(list, house)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn character(name: &str, house: Option<&str>) -> Character {
        Character {
            name: name.into(),
            house: house.map(Into::into),
            ..Character::default()
        }
    }

    fn names(list: &[Character]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let list = vec![
            character("Harry Potter", None),
            character("Hermione Granger", None),
        ];
        assert_eq!(names(&search_characters(&list, "harry")), ["Harry Potter"]);
        assert_eq!(names(&search_characters(&list, "HARRY")), ["Harry Potter"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let list = vec![character("Harry Potter", None), character("Ron", None)];
        assert_eq!(search_characters(&list, "").len(), 2);
    }

    #[test]
    fn search_ignores_other_fields() {
        let list = vec![character("Cedric Diggory", Some("Hufflepuff"))];
        assert!(search_characters(&list, "huffle").is_empty());
    }

    #[test]
    fn spell_search_matches_description() {
        let list = vec![
            Spell {
                name: "Lumos".into(),
                description: Some("Illuminates the wand tip".into()),
            },
            Spell {
                name: "Nox".into(),
                description: Some("Extinguishes the light".into()),
            },
            Spell {
                name: "Alohomora".into(),
                description: None,
            },
        ];
        let hits: Vec<String> = search_spells(&list, "LIGHT")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(hits, ["Nox"]);

        let hits: Vec<String> = search_spells(&list, "lum")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(hits, ["Lumos"]);
    }

    #[test]
    fn grouping_covers_every_house_in_order() {
        let list = vec![
            character("Harry Potter", Some("Gryffindor")),
            character("Draco Malfoy", Some("slytherin")),
            character("Argus Filch", None),
            character("Ron Weasley", Some("GRYFFINDOR")),
        ];
        let groups = group_by_house(&list);

        let summary: Vec<(House, Vec<usize>)> = groups
            .iter()
            .map(|(h, members)| (*h, members.iter().map(|(i, _)| *i).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (House::Gryffindor, vec![0, 3]),
                (House::Slytherin, vec![1]),
                (House::Ravenclaw, vec![]),
                (House::Hufflepuff, vec![]),
            ]
        );
    }
}
