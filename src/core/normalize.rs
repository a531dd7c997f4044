//! Package URL corrections
//!
//! Some board detail documents advertise URLs that do not point at a usable
//! package index. Known cases are rewritten by exact match.

/// Known incorrect URL and its replacement
const URL_CORRECTIONS: &[(&str, &str)] = &[(
    "https://downloads.arduino.cc/packages/package_index.tar.bz2",
    "https://espressif.github.io/arduino-esp32/package_esp32_index.json",
)];

/// Rewrite a package URL if it is a known incorrect one
pub fn normalize_package_url(url: &str) -> &str {
    URL_CORRECTIONS
        .iter()
        .find(|(wrong, _)| *wrong == url)
        .map_or(url, |&(_, corrected)| corrected)
}
