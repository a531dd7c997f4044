//! Published JSON encoding
//!
//! Output files are pretty-printed with four-space indentation, keep `/` and
//! non-ASCII characters unescaped, and end with a newline.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Encode `value` in the published JSON layout
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
