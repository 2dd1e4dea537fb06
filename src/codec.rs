//! # Settings Column Codec
//!
//! Conversion between the persisted text form of a settings column and the
//! in-memory [`SettingsMap`].
//!
//! ## Error Policy
//!
//! The fail-soft pair [`decode`] / [`encode`] never surfaces JSON errors:
//! malformed or non-object text decodes to an empty map, and an encode
//! failure writes `"{}"`. This keeps settings access from ever throwing at
//! read time, at the cost of masking corrupted rows.
//!
//! The strict pair [`try_decode`] / [`try_encode`] propagates the underlying
//! `serde_json` error for callers that want corruption surfaced.
//!
//! Round-trip contract: `decode(Some(&encode(&m))) == m` for any JSON-safe
//! map `m` (key order included — `SettingsMap` preserves insertion order).

use crate::error::Result;
use crate::model::SettingsMap;

/// Decode persisted column text into a map, failing soft.
///
/// Absent text, malformed JSON, and valid JSON that is not an object all
/// yield an empty map.
pub fn decode(text: Option<&str>) -> SettingsMap {
    text.and_then(|t| serde_json::from_str(t).ok())
        .unwrap_or_default()
}

/// Decode persisted column text strictly. Non-object JSON is an error.
pub fn try_decode(text: &str) -> Result<SettingsMap> {
    Ok(serde_json::from_str(text)?)
}

/// Encode a map as column text, failing soft to the empty object.
pub fn encode(map: &SettingsMap) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string())
}

/// Encode a map as column text, propagating serialization errors.
pub fn try_encode(map: &SettingsMap) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}

/// Serde adapter for persisting a `SettingsMap` field as an embedded JSON
/// text column, matching the single text/JSON column convention.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "model_settings::codec::json_text")]
///     settings: SettingsMap,
/// }
/// ```
///
/// Deserialization is fail-soft: a null or malformed column reads back as an
/// empty map.
pub mod json_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::model::SettingsMap;

    pub fn serialize<S>(map: &SettingsMap, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::encode(map))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<SettingsMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: Option<String> = Option::deserialize(deserializer)?;
        Ok(super::decode(text.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    fn sample_map() -> SettingsMap {
        let mut map = SettingsMap::new();
        map.insert("theme".to_string(), json!("dark"));
        map.insert("retries".to_string(), json!(3));
        map.insert("flags".to_string(), json!({"beta": true, "ids": [1, 2]}));
        map
    }

    #[test]
    fn round_trip_preserves_map() {
        let map = sample_map();
        let text = encode(&map);
        assert_eq!(decode(Some(&text)), map);
    }

    #[test]
    fn strict_round_trip_preserves_map() {
        let map = sample_map();
        let text = try_encode(&map).unwrap();
        assert_eq!(try_decode(&text).unwrap(), map);
    }

    #[test]
    fn decode_absent_yields_empty_map() {
        assert!(decode(None).is_empty());
    }

    #[test]
    fn decode_malformed_yields_empty_map() {
        assert!(decode(Some("{not json")).is_empty());
        assert!(decode(Some("")).is_empty());
    }

    #[test]
    fn decode_non_object_json_yields_empty_map() {
        assert!(decode(Some("[1, 2, 3]")).is_empty());
        assert!(decode(Some("\"just a string\"")).is_empty());
        assert!(decode(Some("null")).is_empty());
    }

    #[test]
    fn try_decode_surfaces_malformed_text() {
        assert!(try_decode("{not json").is_err());
        assert!(try_decode("[1, 2, 3]").is_err());
    }

    #[test]
    fn encode_empty_map_is_empty_object() {
        assert_eq!(encode(&SettingsMap::new()), "{}");
    }

    #[derive(Serialize, Deserialize)]
    struct Row {
        name: String,
        #[serde(with = "json_text")]
        settings: SettingsMap,
    }

    #[test]
    fn json_text_adapter_embeds_column_as_text() {
        let row = Row {
            name: "site".to_string(),
            settings: sample_map(),
        };

        let serialized = serde_json::to_string(&row).unwrap();
        // The settings column is a string, not a nested object
        let raw: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert!(raw["settings"].is_string());

        let loaded: Row = serde_json::from_str(&serialized).unwrap();
        assert_eq!(loaded.settings, sample_map());
    }

    #[test]
    fn json_text_adapter_reads_null_column_as_empty() {
        let loaded: Row =
            serde_json::from_str(r#"{"name": "site", "settings": null}"#).unwrap();
        assert!(loaded.settings.is_empty());
    }

    #[test]
    fn json_text_adapter_reads_corrupt_column_as_empty() {
        let loaded: Row =
            serde_json::from_str(r#"{"name": "site", "settings": "{broken"}"#).unwrap();
        assert!(loaded.settings.is_empty());
    }
}
