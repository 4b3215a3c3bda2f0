//! Error tests: furthest-failure positions, messages, codes and error kinds

use rsyn::parser::{
    ErrorCode, LexErrorKind, ParseContext, ParseError, ParseOptions, Rule, parse_rule, parse_str,
    parse_with,
};
use rsyn::{Encoding, Error};
use rstest::rstest;

use crate::helpers::source_fixtures::MODULE_WITH_ITEMS;

/// Unpack the syntax error of a failed parse
fn syntax_error(source: &str) -> ParseError {
    match parse_str(source) {
        Ok(_) => panic!("expected {source:?} to fail"),
        Err(Error::Parse(err @ ParseError::Syntax { .. })) => err,
        Err(other) => panic!("expected a syntax error for {source:?}, got {other:?}"),
    }
}

// =============================================================================
// Furthest failure
// =============================================================================

#[rstest]
#[case("fn main() {\n    let x = 1\n    let y = 2;\n}", 3, 4, "'let'", ParseContext::LetStatement)]
#[case("fn f(a: u8 b: u8) {}", 1, 11, "'b'", ParseContext::ParameterList)]
#[case("struct S { a: u8 b: u8 }", 1, 17, "'b'", ParseContext::FieldList)]
#[case("fn main() {\n    foo();\n", 3, 0, "end of file", ParseContext::Block)]
#[case("fn f() -> bool { a == b == c }", 1, 24, "'=='", ParseContext::Block)]
#[case("fn f(x: Vec<u8>>) {}", 1, 15, "'>'", ParseContext::ParameterList)]
#[case("fn f() {}\n}", 2, 0, "'}'", ParseContext::TopLevel)]
#[case("fn é() { x y }", 1, 11, "'y'", ParseContext::Block)]
fn test_failure_location(
    #[case] source: &str,
    #[case] line: u32,
    #[case] column: u32,
    #[case] found: &str,
    #[case] context: ParseContext,
) {
    let ParseError::Syntax {
        line: got_line,
        column: got_column,
        found: got_found,
        context: got_context,
        ..
    } = syntax_error(source)
    else {
        unreachable!()
    };
    assert_eq!((got_line, got_column), (line, column), "{source:?}");
    assert_eq!(got_found, found, "{source:?}");
    assert_eq!(got_context, context, "{source:?}");
}

#[test]
fn test_offset_counts_bytes_and_column_counts_chars() {
    let ParseError::Syntax { offset, len, column, .. } = syntax_error("fn é() { x y }") else {
        unreachable!()
    };
    assert_eq!(column, 11);
    assert_eq!(u32::from(offset), 12);
    assert_eq!(u32::from(len), 1);
}

#[test]
fn test_split_token_offset() {
    let ParseError::Syntax { offset, len, .. } = syntax_error("fn f(x: Vec<u8>>) {}") else {
        unreachable!()
    };
    // the failure sits on the second half of `>>`
    assert_eq!(u32::from(offset), 15);
    assert_eq!(u32::from(len), 1);
}

// =============================================================================
// Messages and codes
// =============================================================================

#[test]
fn test_trailing_input_message() {
    let err = syntax_error("fn f() {}\n}");
    assert_eq!(
        err.message(),
        "expected item or end of file, found '}' at top level"
    );
    assert_eq!(err.to_string(), format!("{} at line 2, column 0", err.message()));
    assert_eq!(err.code(), ErrorCode::E0301);
}

#[test]
fn test_missing_semicolon() {
    let err = syntax_error("fn main() {\n    let x = 1\n    let y = 2;\n}");
    let ParseError::Syntax { expected, .. } = &err else {
        unreachable!()
    };
    assert!(expected.iter().any(|e| e == "';'"), "{expected:?}");
    assert!(err.message().starts_with("expected "));
    assert!(err.message().ends_with("found 'let' in let statement"));
    assert_eq!(err.code(), ErrorCode::E0201);

    let diag = err.to_syntax_error();
    assert_eq!(diag.code, ErrorCode::E0201);
    assert!(diag.has_hint());
    assert!(diag.format().starts_with("E0201 [3:4]: expected"));
}

#[test]
fn test_unclosed_block() {
    let err = syntax_error("fn main() {\n    foo();\n");
    let ParseError::Syntax { expected, .. } = &err else {
        unreachable!()
    };
    assert!(expected.iter().any(|e| e == "'}'"), "{expected:?}");
    assert!(err.message().ends_with("found end of file in block"));
    assert_eq!(err.code(), ErrorCode::E0202);
}

#[test]
fn test_chained_comparison() {
    let err = syntax_error("fn f() -> bool { a == b == c }");
    assert_eq!(err.code(), ErrorCode::E0403);
    let diag = err.to_syntax_error();
    assert_eq!(
        diag.hint.as_deref(),
        Some("use parentheses to group comparisons")
    );
}

#[rstest]
#[case("fn f(x: Vec<u8>>) {}")]
#[case("struct S<T>> {}")]
#[case("type A = B<C>>;")]
#[case("fn f() { let v: Vec<u8>> = x; }")]
fn test_stray_closer_is_not_a_comparison(#[case] source: &str) {
    let err = syntax_error(source);
    assert_ne!(err.code(), ErrorCode::E0403, "{source:?}");
    assert_ne!(
        err.to_syntax_error().hint.as_deref(),
        Some("use parentheses to group comparisons")
    );
}

#[rstest]
#[case("fn f() -> bool { x.len() != 0 == done }")]
#[case("fn f() { let ok = a == b != c; }")]
fn test_chained_comparison_in_expressions(#[case] source: &str) {
    assert_eq!(syntax_error(source).code(), ErrorCode::E0403, "{source:?}");
}

#[test]
fn test_missing_field_separator() {
    let err = syntax_error("struct S { a: u8 b: u8 }");
    assert_eq!(err.code(), ErrorCode::E0202);
    assert!(err.message().ends_with("found 'b' in field list"));
}

#[test]
fn test_diagnostic_carries_location() {
    let err = syntax_error("fn f(a: u8 b: u8) {}");
    let diag = err.to_syntax_error();
    assert_eq!((diag.position.line, diag.position.column), (1, 11));
    assert_eq!(u32::from(diag.range.start()), 11);
    assert_eq!(u32::from(diag.range.len()), 1);
    assert_eq!(diag.context, Some(ParseContext::ParameterList));
    assert!(diag.severity.is_error());
}

#[test]
fn test_rule_errors() {
    let result = parse_rule(Rule::Expression, "1 +");
    assert!(!result.is_ok());
    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E0401);
    assert!(errors[0].message.contains("found end of file"));
    assert_eq!(errors[0].position.column, 3);

    assert!(parse_rule(Rule::Expression, "1 + 2").errors().is_empty());
}

// =============================================================================
// Error kinds
// =============================================================================

#[test]
fn test_lex_error_stops_the_parse() {
    let err = parse_str("fn f() { let s = \"open; }").unwrap_err();
    assert!(!err.is_syntax());
    let Error::Lex(lex) = &err else {
        panic!("expected a lex error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::UnterminatedString);
    assert_eq!((lex.line, lex.column), (1, 17));
    assert_eq!(
        err.to_string(),
        "unterminated string literal at line 1, column 17"
    );
    assert_eq!(err.to_syntax_error().unwrap().code, ErrorCode::E0102);
}

#[test]
fn test_encoding_error() {
    let err = rsyn::parse(b"fn \xFF() {}", Encoding::Utf8).unwrap_err();
    let Error::Encoding(encoding) = &err else {
        panic!("expected an encoding error, got {err:?}");
    };
    assert_eq!(encoding.offset, 3);
    assert!(err.to_syntax_error().is_none());
    assert!(!err.is_syntax());
}

#[test]
fn test_syntax_error_kind() {
    let err = parse_str("fn f(").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_syntax_error().is_some());
}

#[test]
fn test_budget_exceeded() {
    let options = ParseOptions::default().with_max_steps(10);
    let err = parse_with(MODULE_WITH_ITEMS, &options).unwrap_err();
    let Error::Parse(parse_err) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert!(matches!(parse_err, ParseError::BudgetExceeded { .. }));
    assert_eq!(parse_err.code(), ErrorCode::E0902);
    assert!(parse_err.position().is_none());
    assert!(!err.is_syntax());
    assert!(err.to_string().contains("budget"));
}

#[test]
fn test_deep_nesting_is_an_error() {
    let source = format!("fn f() {{ {}x{} }}", "(".repeat(2000), ")".repeat(2000));
    let options = ParseOptions::default().with_max_depth(Some(256));
    let err = parse_with(&source, &options).unwrap_err();
    let Error::Parse(parse_err) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(*parse_err, ParseError::NestingTooDeep { depth: 256 });
    assert_eq!(parse_err.code(), ErrorCode::E0903);
    assert!(!err.is_syntax());
}

#[test]
fn test_default_depth_limit_stops_runaway_nesting() {
    // the default limit must trip before the stack does
    let source = format!("fn f() {{ {}x{} }}", "[".repeat(5000), "]".repeat(5000));
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(move || parse_str(&source).map(|_| ()))
        .unwrap();
    let result = handle.join().unwrap();
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::NestingTooDeep { .. }))
    ));
}

#[test]
fn test_moderate_nesting_fits_the_default_limit() {
    let source = format!("fn f() {{ {}x{} }}", "(".repeat(20), ")".repeat(20));
    assert!(parse_str(&source).is_ok());
}

#[test]
fn test_generous_budget_succeeds() {
    let limit = 10_000_000;
    let options = ParseOptions::default().with_max_steps(limit);
    let parse = parse_with(MODULE_WITH_ITEMS, &options).unwrap();
    let stats = parse.stats();
    assert!(stats.steps > 0);
    assert!(stats.steps <= limit);
    assert!(stats.memo_entries > 0);
}

#[rstest]
#[case("fn f() { let x = ; }", ErrorCode::E0401)]
#[case("fn f() { g(1, 2; }", ErrorCode::E0203)]
#[case("fn f() { a[1; }", ErrorCode::E0204)]
fn test_error_codes(#[case] source: &str, #[case] code: ErrorCode) {
    assert_eq!(syntax_error(source).code(), code, "{source:?}");
}
