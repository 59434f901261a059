// src/parse/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

/// Matches a `{word}`-style placeholder in a description template.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// Derive the canonical lowercase identifier for a raw error code.
///
/// Digits, hyphens and underscores are dropped, the result is lowercased,
/// and any trailing `error` suffixes are trimmed. This must match the
/// lookup performed by the runtime library itself, so keep the two in sync.
pub fn canonical_name(raw_name: &str) -> String {
    let mut name = raw_name
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase();

    while name.ends_with("error") {
        name.truncate(name.len() - "error".len());
    }

    name
}

/// Extract the capture identifier for a parameterized error.
///
/// A '0' in the raw name marks the error as parameterized; its description
/// must then carry a `{word}` placeholder naming the captured value. Names
/// without a '0' never capture and the description is not searched.
pub fn capture_name(raw_name: &str, description: &str) -> Result<Option<String>, ParseError> {
    if !raw_name.contains('0') {
        return Ok(None);
    }

    match PLACEHOLDER.captures(description) {
        Some(caps) => Ok(Some(caps[1].to_string())),
        None => Err(ParseError::NoPlaceholder {
            name: raw_name.to_string(),
        }),
    }
}
