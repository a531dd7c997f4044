//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;
    use serde_json::Value;

    /// Generate a valid FQBN (`vendor:arch:board`)
    pub fn fqbn() -> impl Strategy<Value = String> {
        ("[a-z][a-z0-9_]{0,8}", "[a-z][a-z0-9]{0,6}", "[a-z][a-z0-9_]{0,10}")
            .prop_map(|(vendor, arch, board)| format!("{vendor}:{arch}:{board}"))
    }

    /// Generate a valid URL
    pub fn url() -> impl Strategy<Value = String> {
        (
            prop_oneof!["https", "http"],
            "[a-z]{3,10}",
            "[a-z]{2,5}",
            "[a-z0-9-]{1,20}",
        )
            .prop_map(|(scheme, domain, tld, path)| {
                format!("{scheme}://{domain}.{tld}/{path}.tar.gz")
            })
    }

    /// Generate an object key, biased toward the keys board records use
    pub fn json_key() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("fqbn".to_string()),
            Just("name".to_string()),
            Just("url".to_string()),
            "[a-z_]{1,8}",
        ]
    }

    /// Generate a scalar JSON value; strings never look like URLs
    pub fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(Value::from),
            "[a-z:]{0,12}".prop_map(Value::String),
        ]
    }

    /// Generate an arbitrarily nested JSON tree without URLs
    pub fn json_tree() -> impl Strategy<Value = Value> {
        json_leaf().prop_recursive(4, 48, 5, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                prop::collection::vec((json_key(), inner), 0..5)
                    .prop_map(|entries| Value::Object(entries.into_iter().collect())),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::package_url::is_http_url;
    use proptest::prelude::*;
    use serde_json::Value;

    fn strings(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Array(items) => items.iter().for_each(|v| strings(v, out)),
            Value::Object(map) => map.values().for_each(|v| strings(v, out)),
            _ => {}
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_fqbn_generator(fqbn in fqbn()) {
            prop_assert_eq!(fqbn.split(':').count(), 3);
        }

        #[test]
        fn test_url_generator(url in url()) {
            prop_assert!(is_http_url(&url));
        }

        #[test]
        fn test_json_tree_has_no_urls(tree in json_tree()) {
            let mut found = Vec::new();
            strings(&tree, &mut found);
            prop_assert!(found.iter().all(|s| !is_http_url(s)));
        }
    }
}
