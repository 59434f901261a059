// src/codes.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base classes for generated error types, keyed by integer error code.
/// Codes outside this table fall back to the generator's catch-all.
pub static KNOWN_BASE_CLASSES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (303, "InvalidDCError"),
        (400, "BadRequestError"),
        (401, "UnauthorizedError"),
        (403, "ForbiddenError"),
        (404, "NotFoundError"),
        (406, "AuthKeyError"),
        (420, "FloodError"),
        (500, "ServerError"),
        (503, "TimedOutError"),
    ])
});

/// Base class name for `code`, or `None` for an unrecognized code.
pub fn base_class_for(code: i32) -> Option<&'static str> {
    KNOWN_BASE_CLASSES.get(&code).copied()
}

/// Convert a SNAKE_CASE symbolic code into the CamelCase type name used by
/// the generator, e.g. `FLOOD_WAIT_X` becomes `FloodWaitX`.
pub fn snake_to_camel_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}
