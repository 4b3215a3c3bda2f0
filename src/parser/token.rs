//! Token and trivia value types produced by the lexer.
//!
//! Every character of the source belongs to exactly one token or one trivia
//! span. Trivia is owned by the significant token that follows it; the single
//! `EOF` token at the end of every stream owns the trailing trivia.

use std::fmt;
use std::ops::Index;

use rowan::TextRange;
use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use crate::base::Position;

/// Classification of a trivia span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Whitespace,
    /// `// ...` (also `////...`)
    LineComment,
    /// `/* ... */` (also `/***...*/` and `/**/`)
    BlockComment,
    /// `//! ...` or `/*! ... */`
    InnerDoc,
    /// `/// ...` or `/** ... */`
    OuterDoc,
    /// `#!...` on the first line
    Shebang,
}

impl TriviaKind {
    pub fn is_comment(self) -> bool {
        !matches!(self, Self::Whitespace)
    }

    pub fn is_doc(self) -> bool {
        matches!(self, Self::InnerDoc | Self::OuterDoc)
    }

    /// Kind of the rowan token this trivia becomes in the CST
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Whitespace => SyntaxKind::WHITESPACE,
            Self::LineComment => SyntaxKind::LINE_COMMENT,
            Self::BlockComment => SyntaxKind::BLOCK_COMMENT,
            Self::InnerDoc => SyntaxKind::INNER_DOC_COMMENT,
            Self::OuterDoc => SyntaxKind::OUTER_DOC_COMMENT,
            Self::Shebang => SyntaxKind::SHEBANG,
        }
    }

    /// Classify a `//` comment by its leading markers.
    pub fn of_line_comment(text: &str) -> Self {
        if text.starts_with("///") && !text.starts_with("////") {
            Self::OuterDoc
        } else if text.starts_with("//!") {
            Self::InnerDoc
        } else {
            Self::LineComment
        }
    }

    /// Classify a `/* */` comment by its leading markers.
    pub fn of_block_comment(text: &str) -> Self {
        if text.starts_with("/**") && !text.starts_with("/***") && text != "/**/" {
            Self::OuterDoc
        } else if text.starts_with("/*!") {
            Self::InnerDoc
        } else {
            Self::BlockComment
        }
    }
}

/// A comment or whitespace span attached to the following token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: SmolStr,
    pub range: TextRange,
    /// 1-based
    pub line: u32,
    /// 0-based, in chars
    pub column: u32,
}

impl Trivia {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Comment body without the `//`, `///`, `/*`, `*/` markers
    pub fn comment_body(&self) -> &str {
        let text = self.text.as_str();
        match self.kind {
            TriviaKind::Whitespace | TriviaKind::Shebang => text,
            TriviaKind::LineComment => text.trim_start_matches('/'),
            TriviaKind::OuterDoc => text.strip_prefix("///").unwrap_or_else(|| {
                strip_block(text, "/**")
            }),
            TriviaKind::InnerDoc => text
                .strip_prefix("//!")
                .unwrap_or_else(|| strip_block(text, "/*!")),
            TriviaKind::BlockComment => strip_block(text, "/*"),
        }
    }
}

fn strip_block<'a>(text: &'a str, open: &str) -> &'a str {
    let inner = text.strip_prefix(open).unwrap_or(text);
    inner.strip_suffix("*/").unwrap_or(inner)
}

/// Coarse token classification for consumers such as highlighters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Identifier,
    RawIdentifier,
    Keyword,
    Lifetime,
    NumericLiteral,
    FloatLiteral,
    StringLiteral,
    RawStringLiteral,
    ByteStringLiteral,
    CharLiteral,
    BooleanLiteral,
    Punctuator,
    EndOfFile,
}

/// A significant token with its leading trivia
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Raw lexeme as it appears in the source
    pub text: SmolStr,
    pub range: TextRange,
    /// 1-based
    pub line: u32,
    /// 0-based, in chars
    pub column: u32,
    /// Trivia between the previous token and this one, in source order
    pub trivia: Vec<Trivia>,
}

impl Token {
    /// Text before any escape processing. Escapes are never cooked, so this
    /// is the lexeme itself.
    pub fn original_text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::EOF
    }

    pub fn category(&self) -> TokenCategory {
        use SyntaxKind::*;
        match self.kind {
            IDENT => TokenCategory::Identifier,
            RAW_IDENT => TokenCategory::RawIdentifier,
            LIFETIME => TokenCategory::Lifetime,
            INT_NUMBER => TokenCategory::NumericLiteral,
            FLOAT_NUMBER => TokenCategory::FloatLiteral,
            STRING => TokenCategory::StringLiteral,
            RAW_STRING => TokenCategory::RawStringLiteral,
            BYTE_STRING | RAW_BYTE_STRING | BYTE => TokenCategory::ByteStringLiteral,
            CHAR => TokenCategory::CharLiteral,
            TRUE_KW | FALSE_KW => TokenCategory::BooleanLiteral,
            EOF => TokenCategory::EndOfFile,
            kind if kind.is_keyword() => TokenCategory::Keyword,
            _ => TokenCategory::Punctuator,
        }
    }

    /// Comments in the leading trivia
    pub fn comments(&self) -> impl Iterator<Item = &Trivia> {
        self.trivia.iter().filter(|t| t.kind.is_comment())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}:{} {:?}", self.kind, self.line, self.column, self.text)
    }
}

/// The complete, gapless token list of one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wrap a token list. The last token must be the only `EOF`.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof)
                && tokens.iter().filter(|t| t.is_eof()).count() == 1
        );
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens including `EOF`
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    /// Number of tokens excluding `EOF`
    pub fn significant_len(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    pub fn eof(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// All trivia in source order
    pub fn trivia(&self) -> impl Iterator<Item = &Trivia> {
        self.tokens.iter().flat_map(|t| t.trivia.iter())
    }

    /// Concatenate every trivia and token text back into source text
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            for trivia in &token.trivia {
                out.push_str(&trivia.text);
            }
            out.push_str(&token.text);
        }
        out
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
