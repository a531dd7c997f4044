//! File names derived from FQBNs

/// Replace every character outside `[A-Za-z0-9._-]` with `_`
///
/// Replacement is per Unicode scalar, not per UTF-8 byte: `ä` becomes a
/// single `_`.
///
/// Distinct FQBNs may collapse to the same name (`a:b` and `a/b`); the later
/// board then overwrites the earlier one's raw file.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
