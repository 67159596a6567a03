//! Grading request parsing and validation.
//!
//! Requests arrive as JSON (or YAML files for offline scoring) and are
//! validated against an embedded JSON Schema before deserialization, so
//! callers get every violation at once instead of the first serde error.

mod parser;
mod schema;

pub use parser::RequestError;
pub use schema::{is_valid_request, validate_request_schema};
