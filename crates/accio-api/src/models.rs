// Wire types for the HP API.
//
// Every field is optional: the upstream data is hand-curated and records
// regularly arrive with nulls, empty strings, or numbers encoded as
// strings. Normalisation into domain types happens in `accio-core`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A character record as returned by `/characters`, `/characters/students`
/// and `/characters/staff`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub year_of_birth: Option<i32>,
    #[serde(default)]
    pub wand: Option<WandResponse>,
    #[serde(default)]
    pub patronus: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Wand description nested inside a character record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WandResponse {
    #[serde(default)]
    pub wood: Option<String>,
    #[serde(default)]
    pub core: Option<String>,
    /// Length in inches. Usually a number, occasionally `""` or a string.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub length: Option<f64>,
}

/// A spell record as returned by `/spells`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Lenient number decoding ─────────────────────────────────────────

fn number_from_value(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(number_from_value(value))
}

#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(number_from_value(value)
        .filter(|n| n.is_finite() && n.fract() == 0.0)
        .filter(|n| *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX))
        .map(|n| n as i32))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn character_full_record() {
        let raw = json!({
            "id": "9e3f7ce4-b9a7-4244-b709-dae5c1f1d4a8",
            "name": "Harry Potter",
            "species": "human",
            "house": "Gryffindor",
            "dateOfBirth": "31-07-1980",
            "yearOfBirth": 1980,
            "wand": { "wood": "holly", "core": "phoenix tail feather", "length": 11 },
            "patronus": "stag",
            "actor": "Daniel Radcliffe",
            "image": "https://ik.imagekit.io/hpapi/harry.jpg",
            "hogwartsStudent": true
        });
        let ch: CharacterResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(ch.name.as_deref(), Some("Harry Potter"));
        assert_eq!(ch.year_of_birth, Some(1980));
        assert_eq!(ch.wand.unwrap().length, Some(11.0));
    }

    #[test]
    fn character_tolerates_nulls_and_missing_fields() {
        let raw = json!({ "name": "Vernon Dursley", "yearOfBirth": null, "wand": null });
        let ch: CharacterResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(ch.year_of_birth, None);
        assert!(ch.wand.is_none());
        assert!(ch.house.is_none());
    }

    #[test]
    fn wand_length_accepts_strings_and_empty() {
        let w: WandResponse =
            serde_json::from_value(json!({ "wood": "vine", "length": "10.75" })).unwrap();
        assert_eq!(w.length, Some(10.75));

        let w: WandResponse = serde_json::from_value(json!({ "length": "" })).unwrap();
        assert_eq!(w.length, None);
    }

    #[test]
    fn spell_record() {
        let s: SpellResponse =
            serde_json::from_value(json!({ "name": "Lumos", "description": "Lights the wand" }))
                .unwrap();
        assert_eq!(s.name.as_deref(), Some("Lumos"));
        assert_eq!(s.description.as_deref(), Some("Lights the wand"));
    }
}
