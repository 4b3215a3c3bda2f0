//! The Rust grammar, expressed as engine rules
//!
//! Rules are split by the part of the language they cover:
//! - `attributes` - names, attributes, visibility, token trees and macros
//! - `paths` - simple, type and expression paths with generic arguments
//! - `types` - types, bounds, generic parameters and where clauses
//! - `patterns` - patterns
//! - `expressions` - the operator ladder and every primary form
//! - `statements` - statements inside blocks
//! - `items` - items, from `mod` to `impl`
//!
//! Every module contributes a `define` function adding its rules to one
//! shared [`GrammarBuilder`]. Rules reference each other by name, so the
//! order of the `define` calls does not matter.

mod attributes;
pub(crate) mod expressions;
mod items;
mod paths;
mod patterns;
mod statements;
mod types;

use std::sync::LazyLock;

use crate::parser::engine::term::*;
use crate::parser::engine::{Grammar, GrammarBuilder, GrammarError};

/// Name of the rule matching a whole file
pub const SOURCE_FILE_RULE: &str = "source_file";

static RUST_GRAMMAR: LazyLock<Result<Grammar, GrammarError>> = LazyLock::new(build);

/// The linked Rust grammar, built once per process
pub fn rust_grammar() -> Result<&'static Grammar, GrammarError> {
    RUST_GRAMMAR.as_ref().map_err(Clone::clone)
}

fn build() -> Result<Grammar, GrammarError> {
    let mut g = GrammarBuilder::new();
    attributes::define(&mut g);
    paths::define(&mut g);
    types::define(&mut g);
    patterns::define(&mut g);
    expressions::define(&mut g);
    statements::define(&mut g);
    items::define(&mut g);

    // the tree builder supplies the SOURCE_FILE root itself
    g.rule(
        SOURCE_FILE_RULE,
        seq([star(r("inner_attr")), star(r("item")), eof()]),
    );

    let grammar = g.finish()?;
    tracing::debug!(rules = grammar.len(), "rust grammar ready");
    Ok(grammar)
}

// Shorthands used across the grammar modules

/// Zero or more outer attributes
pub(super) fn attrs() -> Term {
    r("attrs")
}

/// Optional visibility
pub(super) fn vis() -> Term {
    opt(r("visibility"))
}

/// Evaluate `term` with struct literals and `let` allowed again, as inside
/// any delimiter
pub(super) fn reset(term: Term) -> Term {
    without_flags(Flags::ALL, term)
}

/// The scrutinee of `match` and the iterable of `for`: no struct literals
/// and no `let`
pub(super) fn scrutinee(term: Term) -> Term {
    Term::With {
        set: Flags::NO_STRUCT,
        clear: Flags::LET_ALLOWED,
        term: Box::new(term),
    }
}
