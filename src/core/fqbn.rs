//! FQBN discovery
//!
//! The board listing has no fixed schema: board records may sit in arrays
//! or as object values at any depth. Every object carrying both a string
//! `fqbn` and a string `name` counts as a board.

use indexmap::IndexMap;
use serde_json::Value;

/// Boards found in a listing, keyed by FQBN in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardIndex {
    boards: IndexMap<String, String>,
}

impl BoardIndex {
    /// Walk a decoded listing and collect every board record
    ///
    /// The first name seen for an FQBN wins; later duplicates are ignored.
    pub fn from_listing(listing: &Value) -> Self {
        let mut index = Self::default();
        index.collect(listing);
        index
    }

    fn collect(&mut self, node: &Value) {
        match node {
            Value::Object(map) => {
                if let (Some(Value::String(fqbn)), Some(Value::String(name))) =
                    (map.get("fqbn"), map.get("name"))
                {
                    self.boards
                        .entry(fqbn.clone())
                        .or_insert_with(|| name.clone());
                }
                for child in map.values() {
                    self.collect(child);
                }
            }
            Value::Array(items) => {
                for child in items {
                    self.collect(child);
                }
            }
            _ => {}
        }
    }

    /// FQBNs in discovery order
    pub fn fqbns(&self) -> impl Iterator<Item = &str> {
        self.boards.keys().map(String::as_str)
    }

    /// Display name recorded for an FQBN
    pub fn name(&self, fqbn: &str) -> Option<&str> {
        self.boards.get(fqbn).map(String::as_str)
    }

    /// Number of unique boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether no board was found
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Unique FQBNs in a decoded listing, in discovery order
pub fn extract_fqbns(listing: &Value) -> Vec<String> {
    BoardIndex::from_listing(listing)
        .fqbns()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::test_utils::generators;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_extracts_from_arduino_cli_shape() {
        let listing = json!({
            "boards": [
                {"name": "Arduino Uno", "fqbn": "arduino:avr:uno", "platform": {"id": "arduino:avr"}},
                {"name": "Arduino Nano", "fqbn": "arduino:avr:nano"}
            ]
        });

        assert_eq!(
            extract_fqbns(&listing),
            vec!["arduino:avr:uno".to_string(), "arduino:avr:nano".to_string()]
        );
    }

    #[test]
    fn test_records_as_object_values() {
        let listing = json!({
            "by_id": {
                "uno": {"fqbn": "arduino:avr:uno", "name": "Uno"},
                "deep": {"more": {"fqbn": "esp32:esp32:esp32", "name": "ESP32 Dev"}}
            }
        });

        let index = BoardIndex::from_listing(&listing);
        assert_eq!(index.len(), 2);
        assert_eq!(index.name("esp32:esp32:esp32"), Some("ESP32 Dev"));
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_name() {
        let listing = json!([
            {"fqbn": "a:b:c", "name": "First"},
            [{"fqbn": "a:b:c", "name": "Second"}],
            {"nested": {"fqbn": "a:b:c", "name": "Third"}}
        ]);

        let index = BoardIndex::from_listing(&listing);
        assert_eq!(index.len(), 1);
        assert_eq!(index.name("a:b:c"), Some("First"));
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let listing = json!([
            {"fqbn": "a:b:c"},
            {"fqbn": 42, "name": "Numeric"},
            {"fqbn": "x:y:z", "name": null},
            {"fqbn": "ok:ok:ok", "name": "Ok"}
        ]);

        assert_eq!(extract_fqbns(&listing), vec!["ok:ok:ok".to_string()]);
    }

    #[test]
    fn test_empty_listing_yields_nothing() {
        assert!(BoardIndex::from_listing(&json!([])).is_empty());
        assert!(BoardIndex::from_listing(&json!({})).is_empty());
        assert!(BoardIndex::from_listing(&json!("boards")).is_empty());
    }

    #[test]
    fn test_record_nested_inside_record_is_found() {
        let listing = json!({
            "fqbn": "outer:arch:board",
            "name": "Outer",
            "variants": [{"fqbn": "inner:arch:board", "name": "Inner"}]
        });

        assert_eq!(
            extract_fqbns(&listing),
            vec!["outer:arch:board".to_string(), "inner:arch:board".to_string()]
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        /// A board record planted anywhere, any number of times, is found once
        #[test]
        fn prop_planted_record_found_exactly_once(
            tree in generators::json_tree(),
            copies in 1usize..4,
        ) {
            let record = json!({"fqbn": "planted:arch:board", "name": "Planted"});
            let mut listing = vec![tree];
            for depth in 0..copies {
                let mut wrapped = record.clone();
                for _ in 0..depth {
                    wrapped = json!({"wrap": [wrapped]});
                }
                listing.push(wrapped);
            }
            let listing = Value::Array(listing);

            let found = extract_fqbns(&listing);
            prop_assert_eq!(
                found.iter().filter(|f| f.as_str() == "planted:arch:board").count(),
                1
            );
        }

        /// Extraction never yields duplicates
        #[test]
        fn prop_no_duplicate_fqbns(tree in generators::json_tree()) {
            let found = extract_fqbns(&tree);
            let mut unique = found.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(found.len(), unique.len());
        }
    }
}
