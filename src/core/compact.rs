//! Compact board entries
//!
//! A compact entry is the slice of a board detail document that the website
//! needs. Missing or mistyped fields degrade to null or an empty list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::normalize::normalize_package_url;
use crate::core::package_url::find_package_url;

/// Reduced per-board record published in the aggregated output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompactEntry {
    /// Board display name
    pub name: Option<String>,
    /// Platform version, always rendered as a string
    pub version: Option<String>,
    /// Configuration option descriptors, passed through verbatim
    ///
    /// Only a JSON array is taken; an object in this position is dropped
    /// and the field becomes `[]`.
    pub config_options: Vec<Value>,
    /// Package index URL
    pub package_url: Option<String>,
}

impl CompactEntry {
    /// Extract a compact entry from a decoded board detail document
    pub fn from_detail(detail: &Value) -> Self {
        let fields = detail.as_object();

        Self {
            name: fields
                .and_then(|f| f.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string),
            version: fields.and_then(|f| f.get("version")).and_then(version_string),
            config_options: fields
                .and_then(|f| f.get("config_options"))
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
            package_url: fields
                .and_then(explicit_package_url)
                .or_else(|| find_package_url(detail))
                .map(normalize_package_url)
                .map(str::to_string),
        }
    }
}

/// `package.url` when it is present and a string
fn explicit_package_url(fields: &Map<String, Value>) -> Option<&str> {
    fields.get("package")?.get("url")?.as_str()
}

/// Render a string or numeric version as text
///
/// Whole floats drop their fractional part so `2.0` reads `"2"`.
fn version_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{f:.0}")
            } else {
                f.to_string()
            }
        }),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
