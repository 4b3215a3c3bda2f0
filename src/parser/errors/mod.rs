//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Context-aware messages naming the construct being parsed
//! - The [`ParseError`] returned by a failed parse and its diagnostic form

mod codes;
mod context;
mod error;
mod parse_error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder};
pub use parse_error::{describe_expected, Expected, ParseError};
