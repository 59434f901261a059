// src/parse/types.rs

use serde::{Deserialize, Serialize};

/// A single error definition as parsed from the error table.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
pub struct ErrorDefinition {
    /// Integer HTTP-like codes this error is reported under. Never empty;
    /// rows with a blank codes field default to `[400]`.
    pub codes: Vec<i32>,
    /// Original symbolic code, e.g. `FLOOD_WAIT_X`.
    pub raw_name: String,
    /// Lowercase identifier used to name the generated type.
    pub canonical_name: String,
    /// Human-readable description template. May hold a `{name}` placeholder.
    pub description: String,
    /// Identifier bound by the description's placeholder, for
    /// parameterized errors only.
    pub capture_name: Option<String>,
}

impl ErrorDefinition {
    /// The primary integer code, used to pick the base category downstream.
    /// Some errors carry several codes; the first one wins.
    pub fn int_code(&self) -> i32 {
        self.codes[0]
    }

    /// Whether the error captures a value from the server response.
    pub fn is_parameterized(&self) -> bool {
        self.capture_name.is_some()
    }
}
