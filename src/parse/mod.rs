pub mod normalize;
pub mod read;
pub mod types;

pub use normalize::{canonical_name, capture_name};
pub use read::{parse_errors, parse_errors_from, ErrorTableReader};
pub use types::ErrorDefinition;
