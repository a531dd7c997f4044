//! Package index URL heuristic
//!
//! Vendors nest the package index URL under inconsistent keys, so every
//! `http(s)://` string in a detail document is scored by its key and value
//! and the highest score wins. Ties keep the candidate found first, which
//! makes the walk order (document key order, array order) significant.

use serde_json::Value;

/// Weight for a key mentioning "package"
const KEY_PACKAGE: u32 = 4;
/// Weight for a value mentioning "package"
const VALUE_PACKAGE: u32 = 2;
/// Weight for a value ending in "index.json"
const VALUE_INDEX_JSON: u32 = 3;
/// Weight for a key mentioning "url"
const KEY_URL: u32 = 1;
/// Weight for a key mentioning "website" or "home"
const KEY_HOMEPAGE: u32 = 1;
/// Keys mentioning "help" or "online" carry no signal either way
const KEY_HELP: u32 = 0;

/// Best candidate seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate<'a> {
    score: u32,
    url: &'a str,
}

/// Find the most plausible package index URL anywhere in `detail`
///
/// Array elements are scored with an empty key. Returns `None` when no
/// string in the structure starts with `http://` or `https://`.
pub fn find_package_url(detail: &Value) -> Option<&str> {
    walk(detail, None).map(|best| best.url)
}

fn walk<'a>(node: &'a Value, best: Option<Candidate<'a>>) -> Option<Candidate<'a>> {
    match node {
        Value::Object(map) => map
            .iter()
            .fold(best, |best, (key, value)| visit(key, value, best)),
        Value::Array(items) => items.iter().fold(best, |best, value| visit("", value, best)),
        _ => best,
    }
}

fn visit<'a>(key: &str, value: &'a Value, best: Option<Candidate<'a>>) -> Option<Candidate<'a>> {
    match value {
        Value::String(url) if is_http_url(url) => {
            let score = score(key, url);
            match best {
                Some(current) if current.score >= score => Some(current),
                _ => Some(Candidate { score, url }),
            }
        }
        Value::Object(_) | Value::Array(_) => walk(value, best),
        _ => best,
    }
}

/// Whether `value` starts with an `http://` or `https://` scheme, any case
pub fn is_http_url(value: &str) -> bool {
    starts_with_ignore_case(value, "http://") || starts_with_ignore_case(value, "https://")
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Score a URL candidate by the key it sits under and its content
pub fn score(key: &str, url: &str) -> u32 {
    let key = key.to_lowercase();
    let url = url.to_lowercase();
    let mut score = 0;

    if key.contains("package") {
        score += KEY_PACKAGE;
    }
    if url.contains("package") {
        score += VALUE_PACKAGE;
    }
    if url.ends_with("index.json") {
        score += VALUE_INDEX_JSON;
    }
    if key.contains("url") {
        score += KEY_URL;
    }
    if key.contains("website") || key.contains("home") {
        score += KEY_HOMEPAGE;
    }
    if key.contains("help") || key.contains("online") {
        score += KEY_HELP;
    }

    score
}
