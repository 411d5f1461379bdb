use serde_json::{Map, Value};

use crate::models::domain::{RawProfile, StyleEntry};

/// Keys that only appear on records written by the current client
const CURRENT_ONLY_KEYS: &[&str] = &["displayName", "danceStyles", "availableTimes", "photoURL", "level"];

/// Keys that only appear on records written by the old client
const LEGACY_ONLY_KEYS: &[&str] = &[
    "name",
    "fullName",
    "danceLevel",
    "styles",
    "location",
    "availability",
    "profileImage",
];

/// Layout of a user document in the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    Current,
    Legacy,
}

impl DocumentShape {
    /// A document is legacy iff it carries none of the current-only keys
    /// and at least one legacy-only key.
    pub fn detect(fields: &Map<String, Value>) -> Self {
        let has_any = |keys: &[&str]| keys.iter().any(|key| fields.contains_key(*key));

        if !has_any(CURRENT_ONLY_KEYS) && has_any(LEGACY_ONLY_KEYS) {
            DocumentShape::Legacy
        } else {
            DocumentShape::Current
        }
    }
}

impl RawProfile {
    /// Build a raw profile from a backend document of either shape.
    ///
    /// Never fails: fields that are missing, empty or of an unexpected type
    /// are left as `None` (or empty lists).
    pub fn from_document(doc: &Value) -> Self {
        let id = document_id(doc);

        // Appwrite wraps the attributes in `data` on some endpoints
        let data = doc.get("data").unwrap_or(doc);
        let Some(fields) = data.as_object() else {
            return RawProfile {
                id,
                ..Default::default()
            };
        };

        match DocumentShape::detect(fields) {
            DocumentShape::Current => RawProfile {
                id,
                display_name: string_field(fields, "displayName"),
                age: u32_field(fields, "age"),
                gender: string_field(fields, "gender"),
                level: string_field(fields, "level"),
                dance_styles: string_list(fields.get("danceStyles")),
                city: string_field(fields, "city"),
                available_times: string_list(fields.get("availableTimes")),
                photo_url: string_field(fields, "photoURL"),
                rating: number_field(fields, "rating"),
                height: number_field(fields, "height"),
                weight: number_field(fields, "weight"),
            },
            DocumentShape::Legacy => RawProfile {
                id,
                display_name: string_field(fields, "name").or_else(|| string_field(fields, "fullName")),
                age: u32_field(fields, "age"),
                gender: string_field(fields, "gender"),
                level: string_field(fields, "danceLevel"),
                dance_styles: legacy_style_list(fields.get("styles")),
                city: string_field(fields, "location"),
                available_times: string_list(fields.get("availability")),
                photo_url: string_field(fields, "profileImage"),
                rating: number_field(fields, "rating"),
                height: number_field(fields, "height"),
                weight: number_field(fields, "weight"),
            },
        }
    }
}

impl StyleEntry {
    /// Parse a style document. Documents without a label are skipped;
    /// a missing id falls back to the document id and a missing value to the label.
    pub fn from_document(doc: &Value) -> Option<Self> {
        let data = doc.get("data").unwrap_or(doc);
        let fields = data.as_object()?;

        let label = string_field(fields, "label")?;
        let id = string_field(fields, "id").unwrap_or_else(|| document_id(doc));
        let value = string_field(fields, "value").unwrap_or_else(|| label.clone());

        Some(StyleEntry { id, label, value })
    }
}

fn document_id(doc: &Value) -> String {
    ["$id", "id", "uid"]
        .iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Numbers, or numeric strings, that are finite
fn number_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let number = match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

fn u32_field(fields: &Map<String, Value>, key: &str) -> Option<u32> {
    number_field(fields, key)
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Old clients stored styles either as a list or as one comma-separated string
fn legacy_style_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        other => string_list(other),
    }
}
