//! Size metrics for one file.
//!
//! Line counts come from the token stream alone; statement, function and
//! executable line counts need the tree, so [`FileMetrics::compute`] leaves
//! them at zero and [`FileMetrics::from_parse`] fills them in.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line, as in the lexer.

use std::collections::BTreeSet;

use crate::parser::{
    AstNode, Item, Parse, SyntaxKind, SyntaxNode, SyntaxNodeExt, TextSize, Token, TokenStream,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileMetrics {
    /// Distinct lines holding at least one significant token
    pub lines_of_code: usize,
    /// Distinct lines holding non-blank comment text
    pub comment_lines: usize,
    /// Significant tokens, end of file excluded
    pub tokens: usize,
    pub statements: usize,
    pub functions: usize,
    /// Distinct lines on which a `let` or expression statement starts
    pub executable_lines: usize,
}

impl FileMetrics {
    /// Metrics available from tokens alone
    pub fn compute(tokens: &TokenStream) -> Self {
        Self {
            lines_of_code: code_lines(tokens).len(),
            comment_lines: comment_lines(tokens).len(),
            tokens: tokens.significant_len(),
            statements: 0,
            functions: 0,
            executable_lines: 0,
        }
    }

    pub fn from_parse(parse: &Parse) -> Self {
        let root = parse.syntax();
        Self {
            statements: count_statements(&root),
            functions: root
                .descendants()
                .filter(|n| n.kind() == SyntaxKind::FN)
                .count(),
            executable_lines: executable_lines(parse).len(),
            ..Self::compute(parse.tokens())
        }
    }
}

/// Lines covered by significant tokens; a multi-line string covers every
/// line it spans
pub fn code_lines(tokens: &TokenStream) -> BTreeSet<u32> {
    let mut lines = BTreeSet::new();
    for token in tokens.iter().filter(|t| !t.is_eof()) {
        let span = split_lines(&token.text).count().saturating_sub(1) as u32;
        lines.extend(token.line..=token.line + span);
    }
    lines
}

/// Lines with comment text containing a letter or digit.
///
/// Comments before the first token are the file header (license, module
/// banner) and are not counted.
pub fn comment_lines(tokens: &TokenStream) -> BTreeSet<u32> {
    let mut lines = BTreeSet::new();
    for token in tokens.iter().skip(1) {
        for trivia in token.comments() {
            for (i, line) in split_lines(trivia.comment_body()).enumerate() {
                if line.chars().any(char::is_alphanumeric) {
                    lines.insert(trivia.line + i as u32);
                }
            }
        }
    }
    lines
}

/// Lines holding the first token of a `let` or expression statement
pub fn executable_lines(parse: &Parse) -> BTreeSet<u32> {
    let tokens = parse.tokens().tokens();
    parse
        .syntax()
        .descendants()
        .filter(|n| matches!(n.kind(), SyntaxKind::LET_STMT | SyntaxKind::EXPR_STMT))
        .filter_map(|n| n.first_significant_token())
        .filter_map(|t| line_at(tokens, t.text_range().start()))
        .collect()
}

/// Line of the stream token covering `offset`
fn line_at(tokens: &[Token], offset: TextSize) -> Option<u32> {
    let index = tokens
        .partition_point(|t| t.range.start() <= offset)
        .checked_sub(1)?;
    tokens.get(index).map(|t| t.line)
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// `let` statements, expression statements and items declared in blocks
fn count_statements(root: &SyntaxNode) -> usize {
    root.descendants()
        .filter(|node| match node.kind() {
            SyntaxKind::LET_STMT | SyntaxKind::EXPR_STMT => true,
            // a macro call directly in a block is its tail expression
            SyntaxKind::MACRO_CALL => false,
            kind => {
                Item::can_cast(kind)
                    && node
                        .parent()
                        .is_some_and(|p| p.kind() == SyntaxKind::BLOCK_EXPR)
            }
        })
        .count()
}
