pub mod codes;
pub mod error;
pub mod parse;

pub use error::ParseError;
pub use parse::{parse_errors, parse_errors_from, ErrorDefinition};
