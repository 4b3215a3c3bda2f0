use thiserror::Error;

use crate::base::EncodingError;
use crate::parser::engine::GrammarError;
use crate::parser::errors::{ParseError, SyntaxError};
use crate::parser::LexError;

/// Everything that can stop a file from producing a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The built-in grammar failed validation; a bug in this crate
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),
}

impl Error {
    /// Diagnostic form for lexical and syntax errors
    pub fn to_syntax_error(&self) -> Option<SyntaxError> {
        match self {
            Error::Lex(err) => Some(SyntaxError::from(err)),
            Error::Parse(err) => Some(err.to_syntax_error()),
            Error::Encoding(_) | Error::Grammar(_) => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Parse(ParseError::Syntax { .. }))
    }
}
