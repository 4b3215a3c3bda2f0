//! Lexer tests: token kinds, trivia ownership, positions and lex errors

use rsyn::parser::{
    LexErrorKind, Lexer, SyntaxKind, TokenCategory, TriviaKind, kind_to_name, tokenize_str,
};
use rsyn::{Encoding, Error};
use rstest::rstest;

use crate::helpers::source_fixtures::HELLO_WORLD;

fn kinds(input: &str) -> Vec<SyntaxKind> {
    tokenize_str(input)
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .filter(|k| *k != SyntaxKind::EOF)
        .collect()
}

fn first_kind(input: &str) -> SyntaxKind {
    tokenize_str(input).unwrap()[0].kind
}

// =============================================================================
// Token kinds
// =============================================================================

#[test]
fn test_hello_world_token_count() {
    let tokens = tokenize_str(HELLO_WORLD).unwrap();
    assert_eq!(tokens.significant_len(), 12);
    assert_eq!(tokens.len(), 13);
    assert!(tokens.eof().is_some_and(|t| t.text.is_empty()));

    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "fn",
            "main",
            "(",
            ")",
            "{",
            "println",
            "!",
            "(",
            "\"Hello, world!\"",
            ")",
            ";",
            "}",
            ""
        ]
    );
}

#[rstest]
#[case("r#match", SyntaxKind::RAW_IDENT, "raw identifier")]
#[case("match", SyntaxKind::MATCH_KW, "strict keyword")]
#[case("abstract", SyntaxKind::ABSTRACT_KW, "reserved keyword")]
#[case("union", SyntaxKind::IDENT, "contextual keyword")]
#[case("try", SyntaxKind::IDENT, "try is an identifier")]
#[case("_private", SyntaxKind::IDENT, "leading underscore")]
#[case("_", SyntaxKind::UNDERSCORE, "bare underscore")]
#[case("true", SyntaxKind::TRUE_KW, "boolean")]
#[case("0x1F_u8", SyntaxKind::INT_NUMBER, "hex with suffix")]
#[case("0b1010", SyntaxKind::INT_NUMBER, "binary")]
#[case("0o777", SyntaxKind::INT_NUMBER, "octal")]
#[case("1_000_000", SyntaxKind::INT_NUMBER, "digit separators")]
#[case("1_000.5e-3", SyntaxKind::FLOAT_NUMBER, "fraction and exponent")]
#[case("2.0f32", SyntaxKind::FLOAT_NUMBER, "float suffix")]
#[case("1f64", SyntaxKind::FLOAT_NUMBER, "integer digits with float suffix")]
#[case("1e10", SyntaxKind::FLOAT_NUMBER, "exponent only")]
#[case("1.", SyntaxKind::FLOAT_NUMBER, "trailing dot")]
#[case("\"text\"", SyntaxKind::STRING, "string")]
#[case("\"multi\nline\"", SyntaxKind::STRING, "string spanning lines")]
#[case("b\"bytes\"", SyntaxKind::BYTE_STRING, "byte string")]
#[case("r\"raw\"", SyntaxKind::RAW_STRING, "raw string")]
#[case("r#\"raw \"quoted\"\"#", SyntaxKind::RAW_STRING, "raw string with hashes")]
#[case("br\"\\d\"", SyntaxKind::RAW_BYTE_STRING, "raw byte string")]
#[case("'x'", SyntaxKind::CHAR, "char")]
#[case("'\\u{1F600}'", SyntaxKind::CHAR, "unicode escape")]
#[case("'\\x7F'", SyntaxKind::CHAR, "hex escape")]
#[case("b'a'", SyntaxKind::BYTE, "byte")]
#[case("'label", SyntaxKind::LIFETIME, "lifetime")]
#[case("'_", SyntaxKind::LIFETIME, "anonymous lifetime")]
#[case("..=", SyntaxKind::DOT_DOT_EQ, "longest punctuator")]
#[case("...", SyntaxKind::DOT_DOT_DOT, "three dots")]
#[case("<<=", SyntaxKind::SHL_EQ, "shift assign")]
#[case(">>=", SyntaxKind::SHR_EQ, "shift right assign")]
#[case("->", SyntaxKind::THIN_ARROW, "thin arrow")]
#[case("=>", SyntaxKind::FAT_ARROW, "fat arrow")]
#[case("::", SyntaxKind::COLON_COLON, "path separator")]
fn test_first_token_kind(#[case] input: &str, #[case] expected: SyntaxKind, #[case] desc: &str) {
    assert_eq!(first_kind(input), expected, "{desc}: {input}");
}

#[rstest]
#[case("1..2", &[SyntaxKind::INT_NUMBER, SyntaxKind::DOT_DOT, SyntaxKind::INT_NUMBER])]
#[case("1.max(2)", &[
    SyntaxKind::INT_NUMBER,
    SyntaxKind::DOT,
    SyntaxKind::IDENT,
    SyntaxKind::L_PAREN,
    SyntaxKind::INT_NUMBER,
    SyntaxKind::R_PAREN,
])]
#[case("x.0", &[SyntaxKind::IDENT, SyntaxKind::DOT, SyntaxKind::INT_NUMBER])]
#[case("a&&b", &[SyntaxKind::IDENT, SyntaxKind::AMP_AMP, SyntaxKind::IDENT])]
#[case("Vec<Vec<u8>>", &[
    SyntaxKind::IDENT,
    SyntaxKind::LT,
    SyntaxKind::IDENT,
    SyntaxKind::LT,
    SyntaxKind::IDENT,
    SyntaxKind::SHR,
])]
#[case("$x:expr", &[SyntaxKind::DOLLAR, SyntaxKind::IDENT, SyntaxKind::COLON, SyntaxKind::IDENT])]
fn test_token_sequences(#[case] input: &str, #[case] expected: &[SyntaxKind]) {
    assert_eq!(kinds(input), expected, "{input}");
}

#[test]
fn test_token_categories() {
    let tokens = tokenize_str("let r#type = 'a' as u8 + 1.5;").unwrap();
    let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category()).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::Keyword,
            TokenCategory::RawIdentifier,
            TokenCategory::Punctuator,
            TokenCategory::CharLiteral,
            TokenCategory::Keyword,
            TokenCategory::Identifier,
            TokenCategory::Punctuator,
            TokenCategory::FloatLiteral,
            TokenCategory::Punctuator,
            TokenCategory::EndOfFile,
        ]
    );
}

#[test]
fn test_kind_names_for_diagnostics() {
    assert_eq!(kind_to_name(SyntaxKind::SEMICOLON), "';'");
    assert_eq!(kind_to_name(SyntaxKind::FN_KW), "'fn'");
    assert_eq!(kind_to_name(SyntaxKind::IDENT), "identifier");
    assert_eq!(kind_to_name(SyntaxKind::EOF), "end of file");
}

// =============================================================================
// Trivia
// =============================================================================

#[rstest]
#[case("/// outer\nfn", TriviaKind::OuterDoc)]
#[case("//! inner\nfn", TriviaKind::InnerDoc)]
#[case("//// four slashes\nfn", TriviaKind::LineComment)]
#[case("// plain\nfn", TriviaKind::LineComment)]
#[case("/** outer */ fn", TriviaKind::OuterDoc)]
#[case("/*! inner */ fn", TriviaKind::InnerDoc)]
#[case("/*** three stars */ fn", TriviaKind::BlockComment)]
#[case("/**/ fn", TriviaKind::BlockComment)]
#[case("/* plain */ fn", TriviaKind::BlockComment)]
fn test_comment_classification(#[case] input: &str, #[case] expected: TriviaKind) {
    let tokens = tokenize_str(input).unwrap();
    let first = &tokens[0];
    assert_eq!(first.kind, SyntaxKind::FN_KW);
    assert_eq!(first.trivia[0].kind, expected, "{input}");
}

#[test]
fn test_trivia_belongs_to_following_token() {
    let tokens = tokenize_str("let /* a */ x // b\n= 1;").unwrap();
    let x = &tokens[1];
    assert_eq!(x.text, "x");
    let kinds: Vec<TriviaKind> = x.trivia.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TriviaKind::Whitespace,
            TriviaKind::BlockComment,
            TriviaKind::Whitespace
        ]
    );

    let eq = &tokens[2];
    assert_eq!(eq.comments().count(), 1);
    assert_eq!(eq.comments().next().unwrap().comment_body(), " b");
}

#[test]
fn test_trailing_trivia_goes_to_eof() {
    let tokens = tokenize_str("fn a() {} // done\n").unwrap();
    let eof = tokens.eof().unwrap();
    assert_eq!(eof.trivia.len(), 3);
    assert_eq!(eof.comments().next().unwrap().text, "// done");
}

#[test]
fn test_backslash_newline_is_whitespace() {
    let tokens = tokenize_str("a \\\n b").unwrap();
    assert_eq!(tokens.significant_len(), 2);
    assert_eq!(tokens[1].trivia.len(), 3);
}

#[rstest]
#[case("#!/usr/bin/env run-cargo-script\nfn main() {}")]
#[case("#! shebang with space\n")]
fn test_shebang_is_trivia(#[case] input: &str) {
    let tokens = tokenize_str(input).unwrap();
    let owner = &tokens[0];
    assert_eq!(owner.trivia[0].kind, TriviaKind::Shebang);
    assert_eq!(tokens.reconstruct(), input);
}

#[test]
fn test_inner_attribute_is_not_a_shebang() {
    assert_eq!(
        kinds("#![no_std]"),
        vec![
            SyntaxKind::POUND,
            SyntaxKind::BANG,
            SyntaxKind::L_BRACKET,
            SyntaxKind::IDENT,
            SyntaxKind::R_BRACKET
        ]
    );
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn test_line_and_column() {
    let tokens = tokenize_str("fn main() {\n    let x = 1;\n}").unwrap();
    let let_kw = tokens.iter().find(|t| t.kind == SyntaxKind::LET_KW).unwrap();
    assert_eq!((let_kw.line, let_kw.column), (2, 4));
    let close = tokens.iter().find(|t| t.kind == SyntaxKind::R_BRACE).unwrap();
    assert_eq!((close.line, close.column), (3, 0));
}

#[test]
fn test_crlf_is_one_line_break() {
    let tokens = tokenize_str("a\r\nb\r\n\r\nc").unwrap();
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_columns_count_chars_not_bytes() {
    let tokens = tokenize_str("let s = \"héllo\"; x").unwrap();
    let x = tokens.iter().find(|t| t.text == "x").unwrap();
    assert_eq!(x.column, 17);
    assert_eq!(u32::from(x.range.start()), 18);
}

#[test]
fn test_reconstruct_is_lossless() {
    let source = "//! top\r\n#![allow(dead_code)]\n\n/* block\n   comment */\nfn f() -> u8 { 0x2A } \t\n";
    let tokens = tokenize_str(source).unwrap();
    assert_eq!(tokens.reconstruct(), source);
}

#[test]
fn test_relexing_is_idempotent() {
    for source in [HELLO_WORLD, "/// doc\nfn f<'a>(x: &'a str) -> bool { x >= \"a\" } // end\n"] {
        let tokens = tokenize_str(source).unwrap();
        let again = tokenize_str(&tokens.reconstruct()).unwrap();
        assert_eq!(tokens, again);
    }
}

#[rstest]
#[case("r#self")]
#[case("r#super")]
#[case("r#Self")]
#[case("r#crate")]
fn test_reserved_raw_identifiers(#[case] input: &str) {
    let err = tokenize_str(input).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::ReservedRawIdentifier, "{input}");
}

#[rstest]
#[case("r#a")]
#[case("r#_52")]
#[case("r#fn")]
fn test_raw_identifiers(#[case] input: &str) {
    assert_eq!(kinds(input), vec![SyntaxKind::RAW_IDENT], "{input}");
}

#[rstest]
#[case("r\"foo\"", true)]
#[case("r#\"a\"b\"#", true)]
#[case("r##\"a\"#", false)]
#[case("br#\"bytes\"#", true)]
fn test_raw_string_delimiters(#[case] input: &str, #[case] ok: bool) {
    match tokenize_str(input) {
        Ok(tokens) => {
            assert!(ok, "{input} should fail");
            assert_eq!(tokens.significant_len(), 1, "{input}");
        }
        Err(err) => {
            assert!(!ok, "{input}: {err}");
            assert_eq!(err.kind, LexErrorKind::UnterminatedRawString);
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
#[case("let s = \"open", LexErrorKind::UnterminatedString, 8)]
#[case("r#\"never closed\"", LexErrorKind::UnterminatedRawString, 0)]
#[case("x /* open", LexErrorKind::UnterminatedBlockComment, 2)]
#[case("r#crate", LexErrorKind::ReservedRawIdentifier, 0)]
#[case("r#_", LexErrorKind::ReservedRawIdentifier, 0)]
#[case("let x = €;", LexErrorKind::UnexpectedChar, 8)]
#[case("a ` b", LexErrorKind::UnexpectedChar, 2)]
#[case("\"bad \\q escape\"", LexErrorKind::InvalidEscape, 0)]
#[case("'\\u{110000}'", LexErrorKind::InvalidEscape, 0)]
#[case("0x", LexErrorKind::InvalidNumber, 0)]
#[case("0b102", LexErrorKind::InvalidNumber, 0)]
#[case("b\"café\"", LexErrorKind::NonAscii, 0)]
#[case("b'é'", LexErrorKind::NonAscii, 0)]
#[case("'\t'", LexErrorKind::ControlCharacter, 0)]
fn test_lex_errors(#[case] input: &str, #[case] kind: LexErrorKind, #[case] column: u32) {
    let err = tokenize_str(input).unwrap_err();
    assert_eq!(err.kind, kind, "{input}");
    assert_eq!(err.line, 1);
    assert_eq!(err.column, column, "{input}");
}

#[test]
fn test_lex_error_position_on_later_line() {
    let err = tokenize_str("fn f() {\n    \"open\n").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (2, 4));
    assert_eq!(u32::from(err.offset), 13);
    assert_eq!(
        err.to_string(),
        "unterminated string literal at line 2, column 4"
    );
}

#[test]
fn test_raw_lexer_keeps_trivia() {
    let lexemes: Vec<_> = Lexer::new("a // c\n").map(Result::unwrap).collect();
    let kinds: Vec<SyntaxKind> = lexemes.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IDENT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::LINE_COMMENT,
            SyntaxKind::WHITESPACE
        ]
    );
    assert_eq!(u32::from(lexemes[2].offset), 2);
}

// =============================================================================
// Encodings
// =============================================================================

#[test]
fn test_latin1_source() {
    let tokens = rsyn::tokenize(b"let s = \"\xE0 la carte\";", Encoding::Latin1).unwrap();
    assert_eq!(tokens[3].text, "\"à la carte\"");
}

#[test]
fn test_invalid_utf8_reports_offset() {
    let err = rsyn::tokenize(b"fn \xFF()", Encoding::Utf8).unwrap_err();
    let Error::Encoding(err) = err else {
        panic!("expected an encoding error, got {err:?}");
    };
    assert_eq!(err.offset, 3);
}
