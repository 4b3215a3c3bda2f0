//! Foundation types shared by the lexer, the rule engine and the consumers.
//!
//! - [`TextRange`], [`TextSize`] - byte offsets into the source
//! - [`LineIndex`], [`LineCol`] - offset to line/column conversion
//! - [`Position`], [`Span`] - line/column positions reported to consumers
//! - [`Encoding`] - the declared character encoding of a source buffer
//!
//! This module has NO dependencies on other rsyn modules.

mod encoding;
mod line_index;
mod position;

pub use encoding::{Encoding, EncodingError};
pub use line_index::{LineCol, LineIndex};
pub use position::{Position, Span};

pub use text_size::{TextRange, TextSize};
