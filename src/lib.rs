//! # rsyn
//!
//! Lossless lexer and parser for Rust source text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch     → Parallel parsing of many sources (rayon)
//!   ↓
//! metrics   → Line, comment and statement counts per file
//!   ↓
//! parser    → Logos lexer, packrat grammar engine, rowan CST, typed AST
//!   ↓
//! base      → Primitives (Position, LineIndex, Encoding, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use rsyn::base::Encoding;
//! use rsyn::parser::{AstNode, Item};
//!
//! let parse = rsyn::parse(b"fn main() { println!(\"hi\"); }", Encoding::Utf8).unwrap();
//! let file = parse.source_file().unwrap();
//! let Some(Item::Function(main)) = file.items().next() else { panic!() };
//! assert_eq!(main.name().unwrap().text(), "main");
//! assert_eq!(parse.text(), "fn main() { println!(\"hi\"); }");
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → metrics → batch)
// ============================================================================

/// Foundation types: positions, line index, source encodings
pub mod base;

/// Parser: Logos lexer, grammar engine, CST and typed AST
pub mod parser;

/// Per-file size metrics over tokens and tree
pub mod metrics;

/// Parallel parsing of in-memory sources
pub mod batch;

mod error;

pub use error::Error;

// Re-export commonly needed items
pub use parser::keywords;
pub use parser::{Parse, ParseOptions, SyntaxKind, SyntaxNode, TokenStream};

// Re-export foundation types
pub use base::{Encoding, LineCol, LineIndex, Position, Span, TextRange, TextSize};

use parser::engine::MemoTable;

/// Decode `bytes` and split them into tokens with attached trivia
pub fn tokenize(bytes: &[u8], encoding: Encoding) -> Result<TokenStream, Error> {
    let text = encoding.decode(bytes)?;
    Ok(parser::tokenize_str(&text)?)
}

/// Decode, tokenize and parse one file with default options
pub fn parse(bytes: &[u8], encoding: Encoding) -> Result<Parse, Error> {
    parse_with(bytes, encoding, &ParseOptions::default())
}

pub fn parse_with(
    bytes: &[u8],
    encoding: Encoding,
    options: &ParseOptions,
) -> Result<Parse, Error> {
    let tokens = tokenize(bytes, encoding)?;
    parser::parse_tokens(tokens, options, &mut MemoTable::new())
}
