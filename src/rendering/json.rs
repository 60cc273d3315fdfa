// src/rendering/json.rs

use crate::constants::JSON_INDENT;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Re-serializes JSON text with a four-space indent, keeping key order.
///
/// Numbers are copied digit for digit, so integers beyond 64 bits and long
/// decimals survive unchanged.
///
/// Applying it to its own output returns the same text.
///
/// # Errors
/// Returns the parser's error if `text` is not valid JSON.
pub fn canonicalize_json(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    let mut buf = Vec::with_capacity(text.len());
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_prints_with_four_spaces() {
        let out = canonicalize_json(r#"{"b":1,"a":[true,null]}"#).unwrap();
        assert_eq!(
            out,
            "{\n    \"b\": 1,\n    \"a\": [\n        true,\n        null\n    ]\n}"
        );
    }

    #[test]
    fn test_is_idempotent() {
        let once = canonicalize_json(r#"{"z": {"y": [1, 2.5, "x"]}, "k": "v"}"#).unwrap();
        let twice = canonicalize_json(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_large_and_precise_numbers_are_kept() {
        let out = canonicalize_json(
            r#"{"id": 12345678901234567890123, "f": 0.1000000000000000055511151231257827}"#,
        )
        .unwrap();
        assert_eq!(
            out,
            "{\n    \"id\": 12345678901234567890123,\n    \"f\": 0.1000000000000000055511151231257827\n}"
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(canonicalize_json("{not json").is_err());
    }
}
