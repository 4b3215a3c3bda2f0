//! Packrat parser for Rust source text
//!
//! Runs the shared grammar over a token stream and lowers the result into a
//! rowan green tree. A parse either produces the complete tree or stops at
//! the first syntax error; there is no recovery.

use rowan::{GreenNode, TextRange, TextSize};

use super::ast::{AstNode, SourceFile};
use super::builder::TreeBuilder;
use super::engine::term::{Term, r};
use super::engine::{EvalError, EvalStats, Evaluator, Failure, MemoTable};
use super::errors::ParseError;
use super::grammar::{SOURCE_FILE_RULE, rust_grammar};
use super::lexer::tokenize_str;
use super::syntax_kind::{SyntaxKind, SyntaxNode};
use super::token::TokenStream;
use crate::Error;
use crate::base::Position;

/// Rule applications that may be nested by default. Roughly twenty per
/// level of parentheses or blocks.
pub const DEFAULT_MAX_DEPTH: u32 = 1024;

/// Knobs for a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Upper bound on rule applications; `None` is unbounded
    pub max_steps: Option<u64>,
    /// Upper bound on nested rule applications; `None` is unbounded and
    /// deep enough input overflows the stack
    pub max_depth: Option<u32>,
    /// Emit a `trace!` event for every rule match and failure
    pub trace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_steps: None,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            trace: false,
        }
    }
}

impl ParseOptions {
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// A successful parse: the green tree and the tokens it was built from
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    tokens: TokenStream,
    stats: EvalStats,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// The source text, rebuilt from the tree
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Typed view of the root
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.syntax())
    }
}

/// Parse a whole file with default options
pub fn parse_str(text: &str) -> Result<Parse, Error> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Parse, Error> {
    let tokens = tokenize_str(text)?;
    let mut memo = MemoTable::new();
    parse_tokens(tokens, options, &mut memo)
}

/// Parse an already tokenized file, reusing `memo`'s allocation. Entries
/// left over from another stream are discarded first.
pub fn parse_tokens(
    tokens: TokenStream,
    options: &ParseOptions,
    memo: &mut MemoTable,
) -> Result<Parse, Error> {
    run(tokens, &r(SOURCE_FILE_RULE), options, memo)
}

/// Match `root` against the whole stream and build a `SOURCE_FILE` tree from
/// whatever it produced
pub(crate) fn run(
    tokens: TokenStream,
    root: &Term,
    options: &ParseOptions,
    memo: &mut MemoTable,
) -> Result<Parse, Error> {
    let grammar = rust_grammar()?;
    tracing::debug!(tokens = tokens.len(), "parse start");
    if !memo.is_empty() {
        memo.reset();
    }

    let mut evaluator = Evaluator::new(grammar, tokens.tokens(), memo)
        .with_max_steps(options.max_steps)
        .with_max_depth(options.max_depth)
        .with_trace(options.trace);
    let result = evaluator.run(root);
    let stats = evaluator.stats();

    let nodes = match result {
        Ok((nodes, _)) => nodes,
        Err(EvalError::Budget { steps }) => {
            return Err(ParseError::BudgetExceeded { steps }.into());
        }
        Err(EvalError::Depth { depth }) => {
            return Err(ParseError::NestingTooDeep { depth }.into());
        }
        Err(EvalError::Syntax(failure)) => {
            let err = syntax_error(&tokens, failure);
            tracing::debug!("parse failed: {}", err);
            return Err(err.into());
        }
    };

    let green = TreeBuilder::new(tokens.tokens()).build(SyntaxKind::SOURCE_FILE, &nodes);
    tracing::debug!(
        steps = stats.steps,
        memo_entries = stats.memo_entries,
        "parse finished"
    );

    let parse = Parse {
        green,
        tokens,
        stats,
    };
    debug_assert_eq!(parse.text(), parse.tokens.reconstruct());
    Ok(parse)
}

/// Locate a failure at its token, or inside it for a split punctuator
fn syntax_error(tokens: &TokenStream, failure: Failure) -> ParseError {
    let all = tokens.tokens();
    let index = (failure.pos.index as usize).min(all.len().saturating_sub(1));
    let Some(token) = all.get(index) else {
        return ParseError::syntax(
            Position::default(),
            TextRange::empty(TextSize::new(0)),
            None,
            &failure.expected,
            failure.context,
        );
    };

    // split points only occur inside ASCII punctuators
    let skip = usize::from(failure.pos.offset).min(token.text.len());
    let rest = token.text.get(skip..).unwrap_or("");
    let start = token.range.start() + TextSize::new(skip as u32);
    let found = (!token.is_eof()).then_some(rest);

    ParseError::syntax(
        Position::new(token.line, token.column + skip as u32),
        TextRange::at(start, TextSize::of(rest)),
        found,
        &failure.expected,
        failure.context,
    )
}
