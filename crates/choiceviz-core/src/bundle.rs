//! Bundle payload: `{ "data": [ { "title", "image"?, "bundleDate" }, ... ] }`.
//!
//! Shape validation happens in two steps so the error can say which part is
//! wrong: first the top-level `data` array, then each record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// One game offered in a bundle. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "bundleDate")]
    pub bundle_date: Option<String>,
}

impl GameRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: None,
            bundle_date: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_bundle_date(mut self, date: impl Into<String>) -> Self {
        self.bundle_date = Some(date.into());
        self
    }

    /// Image URL if present and usable. Empty strings and a literal `"null"`
    /// (what some scrapers emit) count as absent.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
    }
}

/// A `null` title renders as an untitled card rather than failing the bundle.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a response body and validates it carries a `data` array of records.
pub fn parse_bundle(body: &[u8]) -> Result<Vec<GameRecord>, AppError> {
    let root: Value = serde_json::from_slice(body).map_err(AppError::InvalidJson)?;
    records_from_value(root)
}

/// Validates an already parsed JSON document.
pub fn records_from_value(root: Value) -> Result<Vec<GameRecord>, AppError> {
    let data = match root {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };
    let items = match data {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(AppError::Shape(
                "response must contain a \"data\" array".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(AppError::Shape(format!("data[{i}] is not an object")));
            }
            serde_json::from_value(item)
                .map_err(|e| AppError::Shape(format!("data[{i}]: {e}")))
        })
        .collect()
}
