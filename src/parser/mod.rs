//! Lossless parser for Rust source text
//!
//! The front end follows the rust-analyzer approach: a lossless CST that
//! preserves every whitespace and comment byte, with a typed AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → TokenStream: tokens owning their leading trivia
//!     ↓
//! Engine → packrat evaluation of the grammar rules, memoized per position
//!     ↓
//! Builder → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! The grammar is data: [`grammar`] declares named rules once per process and
//! every parse shares them. A parse succeeds with a complete tree or fails
//! with the furthest position any alternative reached.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod builder;
pub mod engine;
pub mod errors;
pub mod grammar;
pub mod keywords;
mod lexer;
pub mod rule_parser;
mod syntax_kind;
mod token;

pub use ast::*;
pub use errors::{ErrorCode, Expected, ParseContext, ParseError, Severity, SyntaxError};
pub use keywords::kind_to_name;
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize_str};
pub use parser::{DEFAULT_MAX_DEPTH, Parse, ParseOptions, parse_str, parse_tokens, parse_with};
pub use rule_parser::{Rule, RuleParseResult, parse_rule, parse_rule_with};
pub use syntax_kind::{
    RustLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeExt, SyntaxToken,
};
pub use token::{Token, TokenCategory, TokenStream, Trivia, TriviaKind};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
