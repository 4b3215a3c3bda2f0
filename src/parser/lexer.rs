//! Logos-based lexer for Rust source text
//!
//! Two layers:
//! - [`Lexer`] yields every lexeme (trivia included) with its offset,
//!   failing hard on anything the recognizers cannot consume.
//! - [`tokenize_str`] groups those lexemes into significant [`Token`]s that
//!   own their leading [`Trivia`], and terminates the stream with `EOF`.

use logos::Logos;
use rowan::{TextRange, TextSize};
use thiserror::Error;
use unicode_ident::{is_xid_continue, is_xid_start};

use super::keywords::{RAW_IDENT_FORBIDDEN, keyword_kind};
use super::syntax_kind::SyntaxKind;
use super::token::{Token, TokenStream, Trivia, TriviaKind};

/// Why a lexeme could not be recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("bare control character in literal")]
    ControlCharacter,
    #[error("non-ASCII character in byte literal")]
    NonAscii,
    #[error("reserved word cannot be a raw identifier")]
    ReservedRawIdentifier,
    #[error("invalid numeric literal")]
    InvalidNumber,
}

/// A fatal lexical error with its exact location
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: TextSize,
    /// 1-based
    pub line: u32,
    /// 0-based, in chars
    pub column: u32,
}

/// A raw lexeme: trivia or significant, with its offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Lexeme<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    shebang: Option<&'a str>,
    base: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let shebang = shebang_len(input).map(|len| &input[..len]);
        let base = shebang.map_or(0, |s| s.len() as u32);
        Self {
            inner: LogosToken::lexer(&input[base as usize..]),
            shebang,
            base,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Lexeme<'a>, (LexErrorKind, TextSize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(text) = self.shebang.take() {
            return Some(Ok(Lexeme {
                kind: SyntaxKind::SHEBANG,
                text,
                offset: TextSize::new(0),
            }));
        }

        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.base + self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(LogosToken::Ident) => keyword_kind(text).unwrap_or(SyntaxKind::IDENT),
            Ok(LogosToken::LineComment) => TriviaKind::of_line_comment(text).syntax_kind(),
            Ok(LogosToken::BlockComment) => TriviaKind::of_block_comment(text).syntax_kind(),
            Ok(t) => t.into(),
            Err(kind) => return Some(Err((kind, offset))),
        };

        Some(Ok(Lexeme { kind, text, offset }))
    }
}

/// Length of a leading `#!` line that is not an inner attribute
fn shebang_len(input: &str) -> Option<usize> {
    let rest = input.strip_prefix("#!")?;
    let after = rest.trim_start_matches([' ', '\t', '\r', '\n']);
    if after.starts_with('[') {
        return None;
    }
    Some(input.find('\n').unwrap_or(input.len()))
}

/// Tokenize decoded source text into a gapless token stream
pub fn tokenize_str(input: &str) -> Result<TokenStream, LexError> {
    let mut cursor = LineCursor::default();
    let mut tokens = Vec::new();
    let mut pending: Vec<Trivia> = Vec::new();

    for lexeme in Lexer::new(input) {
        let lexeme = match lexeme {
            Ok(lexeme) => lexeme,
            Err((kind, offset)) => {
                let consumed = &input[cursor.offset..usize::from(offset)];
                cursor.advance(consumed);
                let err = LexError {
                    kind,
                    offset,
                    line: cursor.line,
                    column: cursor.column,
                };
                tracing::debug!("lex error: {}", err);
                return Err(err);
            }
        };

        let (line, column) = (cursor.line, cursor.column);
        cursor.advance(lexeme.text);

        if let Some(trivia_kind) = trivia_kind(lexeme.kind) {
            pending.push(Trivia {
                kind: trivia_kind,
                text: lexeme.text.into(),
                range: lexeme.range(),
                line,
                column,
            });
        } else {
            tokens.push(Token {
                kind: lexeme.kind,
                text: lexeme.text.into(),
                range: lexeme.range(),
                line,
                column,
                trivia: std::mem::take(&mut pending),
            });
        }
    }

    tokens.push(Token {
        kind: SyntaxKind::EOF,
        text: "".into(),
        range: TextRange::empty(TextSize::of(input)),
        line: cursor.line,
        column: cursor.column,
        trivia: pending,
    });

    tracing::debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    Ok(TokenStream::new(tokens))
}

fn trivia_kind(kind: SyntaxKind) -> Option<TriviaKind> {
    Some(match kind {
        SyntaxKind::WHITESPACE => TriviaKind::Whitespace,
        SyntaxKind::LINE_COMMENT => TriviaKind::LineComment,
        SyntaxKind::BLOCK_COMMENT => TriviaKind::BlockComment,
        SyntaxKind::INNER_DOC_COMMENT => TriviaKind::InnerDoc,
        SyntaxKind::OUTER_DOC_COMMENT => TriviaKind::OuterDoc,
        SyntaxKind::SHEBANG => TriviaKind::Shebang,
        _ => return None,
    })
}

/// Running line/column tracker; `\r\n` counts as one line break.
#[derive(Debug, Clone, Copy)]
struct LineCursor {
    offset: usize,
    line: u32,
    column: u32,
    after_cr: bool,
}

impl Default for LineCursor {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
            after_cr: false,
        }
    }
}

impl LineCursor {
    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' if self.after_cr => {}
                '\n' | '\r' => {
                    self.line += 1;
                    self.column = 0;
                }
                _ => self.column += 1,
            }
            self.after_cr = c == '\r';
        }
        self.offset += text.len();
    }
}

// =============================================================================
// Logos recognizers
// =============================================================================

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexErrorKind)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\n\r\x0B\x0C\u{85}\u{200E}\u{200F}\u{2028}\u{2029}]+", priority = 3)]
    #[regex(r"\\\r?\n")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", ident_tail)]
    #[regex(r"[^\x00-\x7F]", unicode_ident)]
    Ident,

    #[regex(r"r#[a-zA-Z_][a-zA-Z0-9_]*", raw_ident)]
    RawIdent,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[0-9]", number)]
    Number(NumberKind),

    #[token("\"", |lex| string(lex, false))]
    Str,

    #[token("b\"", |lex| string(lex, true))]
    ByteStr,

    #[regex(r##"r#*""##, raw_string)]
    RawStr,

    #[regex(r##"br#*""##, raw_string)]
    RawByteStr,

    #[token("'", quote)]
    Quote(QuoteKind),

    #[token("b'", byte_char)]
    Byte,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("...")]
    DotDotDot,
    #[token("..=")]
    DotDotEq,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("=>")]
    FatArrow,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    Shl,
    #[token("<<=")]
    ShlEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(">>")]
    Shr,
    #[token(">>=")]
    ShrEq,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusEq,
    #[token("->")]
    ThinArrow,
    #[token("+")]
    Plus,
    #[token("+=")]
    PlusEq,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEq,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEq,
    #[token("^")]
    Caret,
    #[token("^=")]
    CaretEq,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("&=")]
    AmpEq,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("|=")]
    PipeEq,
    #[token("@")]
    At,
    #[token("#")]
    Pound,
    #[token("$")]
    Dollar,
    #[token("?")]
    Question,
    #[token("~")]
    Tilde,
    #[token("_", priority = 3)]
    Underscore,
}

/// Integer or float, decided while scanning the literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

/// What a leading `'` turned out to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Char,
    Lifetime,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,
            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::RawIdent => SyntaxKind::RAW_IDENT,
            LogosToken::Number(NumberKind::Int) => SyntaxKind::INT_NUMBER,
            LogosToken::Number(NumberKind::Float) => SyntaxKind::FLOAT_NUMBER,
            LogosToken::Str => SyntaxKind::STRING,
            LogosToken::ByteStr => SyntaxKind::BYTE_STRING,
            LogosToken::RawStr => SyntaxKind::RAW_STRING,
            LogosToken::RawByteStr => SyntaxKind::RAW_BYTE_STRING,
            LogosToken::Quote(QuoteKind::Char) => SyntaxKind::CHAR,
            LogosToken::Quote(QuoteKind::Lifetime) => SyntaxKind::LIFETIME,
            LogosToken::Byte => SyntaxKind::BYTE,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::DotDot => SyntaxKind::DOT_DOT,
            LogosToken::DotDotDot => SyntaxKind::DOT_DOT_DOT,
            LogosToken::DotDotEq => SyntaxKind::DOT_DOT_EQ,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::FatArrow => SyntaxKind::FAT_ARROW,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::Shl => SyntaxKind::SHL,
            LogosToken::ShlEq => SyntaxKind::SHL_EQ,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::Shr => SyntaxKind::SHR,
            LogosToken::ShrEq => SyntaxKind::SHR_EQ,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::MinusEq => SyntaxKind::MINUS_EQ,
            LogosToken::ThinArrow => SyntaxKind::THIN_ARROW,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::PlusEq => SyntaxKind::PLUS_EQ,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::StarEq => SyntaxKind::STAR_EQ,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::SlashEq => SyntaxKind::SLASH_EQ,
            LogosToken::Percent => SyntaxKind::PERCENT,
            LogosToken::PercentEq => SyntaxKind::PERCENT_EQ,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::CaretEq => SyntaxKind::CARET_EQ,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::AmpEq => SyntaxKind::AMP_EQ,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::PipeEq => SyntaxKind::PIPE_EQ,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Pound => SyntaxKind::POUND,
            LogosToken::Dollar => SyntaxKind::DOLLAR,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Underscore => SyntaxKind::UNDERSCORE,
        }
    }
}

// =============================================================================
// Callbacks
// =============================================================================

type Lex<'a> = logos::Lexer<'a, LogosToken>;

/// Length in bytes of the XID_Continue run at the start of `s`
fn xid_continue_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_xid_continue(c))
        .map_or(s.len(), |(i, _)| i)
}

fn ident_tail(lex: &mut Lex<'_>) {
    let len = xid_continue_len(lex.remainder());
    lex.bump(len);
}

fn unicode_ident(lex: &mut Lex<'_>) -> Result<(), LexErrorKind> {
    let first = lex.slice().chars().next().ok_or(LexErrorKind::UnexpectedChar)?;
    if !is_xid_start(first) {
        return Err(LexErrorKind::UnexpectedChar);
    }
    ident_tail(lex);
    Ok(())
}

fn raw_ident(lex: &mut Lex<'_>) -> Result<(), LexErrorKind> {
    ident_tail(lex);
    let name = &lex.slice()[2..];
    if name == "_" || RAW_IDENT_FORBIDDEN.contains(&name) {
        return Err(LexErrorKind::ReservedRawIdentifier);
    }
    Ok(())
}

fn block_comment(lex: &mut Lex<'_>) -> Result<(), LexErrorKind> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Ok(())
        }
        None => {
            lex.bump(lex.remainder().len());
            Err(LexErrorKind::UnterminatedBlockComment)
        }
    }
}

fn raw_string(lex: &mut Lex<'_>) -> Result<(), LexErrorKind> {
    let hashes = lex.slice().bytes().filter(|&b| b == b'#').count();
    let rest = lex.remainder();
    let mut search = 0;
    while let Some(quote) = rest[search..].find('"') {
        let close = search + quote + 1;
        let tail = &rest.as_bytes()[close..];
        if tail.len() >= hashes && tail[..hashes].iter().all(|&b| b == b'#') {
            let body = &rest[..close - 1];
            if lex.slice().starts_with('b') && !body.is_ascii() {
                return Err(LexErrorKind::NonAscii);
            }
            if has_bare_cr(body) {
                return Err(LexErrorKind::ControlCharacter);
            }
            lex.bump(close + hashes);
            return Ok(());
        }
        search = close;
    }
    Err(LexErrorKind::UnterminatedRawString)
}

fn has_bare_cr(body: &str) -> bool {
    let bytes = body.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'\r' && bytes.get(i + 1) != Some(&b'\n'))
}

fn string(lex: &mut Lex<'_>, bytes_only: bool) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(());
            }
            '\\' => {
                let consumed = escape(&rest[i + 1..], bytes_only, true)?;
                // skip the escape body
                while chars.peek().is_some_and(|&(j, _)| j <= i + consumed) {
                    chars.next();
                }
            }
            '\r' if chars.peek().map(|&(_, n)| n) != Some('\n') => {
                return Err(LexErrorKind::ControlCharacter);
            }
            c if bytes_only && !c.is_ascii() => return Err(LexErrorKind::NonAscii),
            _ => {}
        }
    }
    Err(LexErrorKind::UnterminatedString)
}

/// Validate an escape body (the text after `\`), returning its length in bytes.
fn escape(s: &str, bytes_only: bool, in_string: bool) -> Result<usize, LexErrorKind> {
    let mut chars = s.chars();
    let c = chars.next().ok_or(LexErrorKind::InvalidEscape)?;
    match c {
        'n' | 'r' | 't' | '\\' | '0' | '\'' | '"' => Ok(1),
        'x' => {
            let digits = s.get(1..3).ok_or(LexErrorKind::InvalidEscape)?;
            let value = u8::from_str_radix(digits, 16).map_err(|_| LexErrorKind::InvalidEscape)?;
            if value > 0x7F && !bytes_only {
                return Err(LexErrorKind::InvalidEscape);
            }
            Ok(3)
        }
        'u' if !bytes_only => {
            let body = s.strip_prefix("u{").ok_or(LexErrorKind::InvalidEscape)?;
            let close = body.find('}').ok_or(LexErrorKind::InvalidEscape)?;
            let hex: String = body[..close].chars().filter(|&c| c != '_').collect();
            if hex.is_empty() || hex.len() > 6 {
                return Err(LexErrorKind::InvalidEscape);
            }
            let value = u32::from_str_radix(&hex, 16).map_err(|_| LexErrorKind::InvalidEscape)?;
            char::from_u32(value).ok_or(LexErrorKind::InvalidEscape)?;
            Ok(2 + close + 1)
        }
        '\n' if in_string => Ok(1),
        '\r' if in_string && s[1..].starts_with('\n') => Ok(2),
        _ => Err(LexErrorKind::InvalidEscape),
    }
}

/// Body of a char or byte literal after the opening quote, up to and
/// including the closing quote. Returns its length, or `None` when the text
/// does not form a literal.
fn char_body(rest: &str, bytes_only: bool) -> Result<Option<usize>, LexErrorKind> {
    let mut chars = rest.chars();
    let first = chars.next().ok_or(LexErrorKind::UnterminatedChar)?;
    let len = match first {
        '\\' => 1 + escape(&rest[1..], bytes_only, false)?,
        '\'' => return Err(LexErrorKind::UnterminatedChar),
        c => c.len_utf8(),
    };
    if !rest[len..].starts_with('\'') {
        return Ok(None);
    }
    if matches!(first, '\n' | '\r' | '\t') {
        return Err(LexErrorKind::ControlCharacter);
    }
    if bytes_only && !first.is_ascii() {
        return Err(LexErrorKind::NonAscii);
    }
    Ok(Some(len + 1))
}

fn quote(lex: &mut Lex<'_>) -> Result<QuoteKind, LexErrorKind> {
    let rest = lex.remainder();
    if let Some(len) = char_body(rest, false)? {
        lex.bump(len);
        return Ok(QuoteKind::Char);
    }
    let first = rest.chars().next().ok_or(LexErrorKind::UnterminatedChar)?;
    if first == '_' || is_xid_start(first) {
        lex.bump(xid_continue_len(rest));
        return Ok(QuoteKind::Lifetime);
    }
    Err(LexErrorKind::UnterminatedChar)
}

fn byte_char(lex: &mut Lex<'_>) -> Result<(), LexErrorKind> {
    match char_body(lex.remainder(), true)? {
        Some(len) => {
            lex.bump(len);
            Ok(())
        }
        None => Err(LexErrorKind::UnterminatedChar),
    }
}

fn number(lex: &mut Lex<'_>) -> Result<NumberKind, LexErrorKind> {
    let first = lex.slice().as_bytes()[0];
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    if first == b'0' && matches!(at(0), Some(b'x' | b'o' | b'b')) {
        let radix = match at(0) {
            Some(b'x') => 16,
            Some(b'o') => 8,
            _ => 2,
        };
        let mut i = 1;
        let mut digits = 0;
        while let Some(b) = at(i) {
            if b == b'_' {
                i += 1;
            } else if (b as char).is_digit(radix) {
                digits += 1;
                i += 1;
            } else if b.is_ascii_digit() {
                return Err(LexErrorKind::InvalidNumber);
            } else {
                break;
            }
        }
        if digits == 0 {
            return Err(LexErrorKind::InvalidNumber);
        }
        i += suffix_len(&rest[i..]);
        lex.bump(i);
        return Ok(NumberKind::Int);
    }

    let mut kind = NumberKind::Int;
    let mut i = 0;
    while matches!(at(i), Some(b'0'..=b'9' | b'_')) {
        i += 1;
    }

    // right after a single `.` digits are a tuple index: `t.0.1` is `t.0` then `.1`
    let before = &lex.source()[..lex.span().start];
    if before.ends_with('.') && !before.ends_with("..") {
        lex.bump(i);
        return Ok(NumberKind::Int);
    }

    // `1.` is a float, `1..2` and `1.foo` are not
    if at(i) == Some(b'.') {
        let next = rest[i + 1..].chars().next();
        let starts_member = next.is_some_and(|c| c == '.' || c == '_' || is_xid_start(c));
        if !starts_member {
            kind = NumberKind::Float;
            i += 1;
            if at(i).is_some_and(|b| b.is_ascii_digit()) {
                while matches!(at(i), Some(b'0'..=b'9' | b'_')) {
                    i += 1;
                }
            }
        }
    }

    if matches!(at(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(at(j), Some(b'+' | b'-')) {
            j += 1;
        }
        while at(j) == Some(b'_') {
            j += 1;
        }
        if at(j).is_some_and(|b| b.is_ascii_digit()) {
            while matches!(at(j), Some(b'0'..=b'9' | b'_')) {
                j += 1;
            }
            kind = NumberKind::Float;
            i = j;
        }
    }

    let suffix = suffix_len(&rest[i..]);
    if suffix > 0 && kind == NumberKind::Int && rest[i..].starts_with('f') {
        kind = NumberKind::Float;
    }
    lex.bump(i + suffix);
    Ok(kind)
}

fn suffix_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if c == '_' || is_xid_start(c) => xid_continue_len(s),
        _ => 0,
    }
}
