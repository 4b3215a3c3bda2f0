//! Parser tests
//!
//! Tests for the front end, from bytes to typed tree:
//! - Lexing, trivia and positions
//! - The expression ladder
//! - Items, statements, patterns and types
//! - Syntax error reporting
//! - Lossless round trips

mod tests_errors;
mod tests_items;
mod tests_lexer;
mod tests_patterns;
mod tests_rule_parser;
