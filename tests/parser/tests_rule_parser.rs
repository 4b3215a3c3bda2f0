//! Rule parser tests: every entry rule on its own, full-input matching

use rsyn::parser::{ParseOptions, Rule, SyntaxKind, parse_rule, parse_rule_with};
use rstest::rstest;

use crate::helpers::tree_helpers::{assert_rule_fails, assert_rule_parses, rule_node};

#[rstest]
#[case(Rule::Item, "pub fn f() {}", SyntaxKind::FN)]
#[case(Rule::Item, "m! { x }", SyntaxKind::MACRO_CALL)]
#[case(
    Rule::Function,
    "async unsafe fn f<T>(x: T) -> T where T: Copy { x }",
    SyntaxKind::FN
)]
#[case(Rule::Struct, "struct P(pub u8, u8);", SyntaxKind::STRUCT)]
#[case(Rule::Enum, "enum E { A = 1, B(u8), C { x: i32 } }", SyntaxKind::ENUM)]
#[case(Rule::Union, "union U { a: u32, b: f32 }", SyntaxKind::UNION)]
#[case(Rule::Trait, "pub unsafe trait T: Clone { fn f(&self); }", SyntaxKind::TRAIT)]
#[case(
    Rule::Impl,
    "impl<T> From<T> for W<T> { fn from(t: T) -> Self { W(t) } }",
    SyntaxKind::IMPL
)]
#[case(Rule::Module, "mod m;", SyntaxKind::MODULE)]
#[case(Rule::Use, "use a::{b, c::*};", SyntaxKind::USE)]
#[case(Rule::TypeAlias, "type R<T> = Result<T, E>;", SyntaxKind::TYPE_ALIAS)]
#[case(Rule::Const, "const _: () = ();", SyntaxKind::CONST)]
#[case(Rule::Static, "static mut N: u8 = 0;", SyntaxKind::STATIC)]
#[case(
    Rule::ExternBlock,
    "extern \"C\" { fn abs(x: i32) -> i32; }",
    SyntaxKind::EXTERN_BLOCK
)]
#[case(Rule::MacroRules, "macro_rules! m { () => {}; }", SyntaxKind::MACRO_RULES)]
#[case(Rule::MacroCall, "m!(a, b);", SyntaxKind::MACRO_CALL)]
#[case(Rule::Attribute, "#[derive(Debug)]", SyntaxKind::ATTR)]
#[case(Rule::InnerAttribute, "#![no_std]", SyntaxKind::INNER_ATTR)]
#[case(Rule::Visibility, "pub(in crate::a)", SyntaxKind::VISIBILITY)]
#[case(Rule::Identifier, "r#type", SyntaxKind::NAME)]
#[case(Rule::SimplePath, "::std::io", SyntaxKind::PATH)]
#[case(Rule::TypePath, "Fn(u8) -> u8", SyntaxKind::PATH)]
#[case(Rule::ExprPath, "Vec::<u8>::new", SyntaxKind::PATH)]
#[case(
    Rule::GenericParams,
    "<'a, T: 'a, const N: usize>",
    SyntaxKind::GENERIC_PARAM_LIST
)]
#[case(Rule::GenericArgs, "<u8, Item = T>", SyntaxKind::GENERIC_ARG_LIST)]
#[case(Rule::WhereClause, "where T: Clone", SyntaxKind::WHERE_CLAUSE)]
#[case(Rule::Type, "&'a mut [u8]", SyntaxKind::REF_TYPE)]
#[case(Rule::Pattern, "Some(_)", SyntaxKind::TUPLE_STRUCT_PAT)]
#[case(Rule::Expression, "a + b", SyntaxKind::BIN_EXPR)]
#[case(Rule::Literal, "0x1F_u8", SyntaxKind::LITERAL)]
#[case(Rule::Block, "{ 1 }", SyntaxKind::BLOCK_EXPR)]
#[case(Rule::Statement, "let x = 1;", SyntaxKind::LET_STMT)]
#[case(Rule::LetStatement, "let (a, b) = pair;", SyntaxKind::LET_STMT)]
#[case(Rule::MatchArm, "Some(x) if x > 0 => x,", SyntaxKind::MATCH_ARM)]
#[case(Rule::Closure, "move |x| x + 1", SyntaxKind::CLOSURE_EXPR)]
fn test_rule_node_kind(#[case] rule: Rule, #[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(rule_node(rule, input).kind(), expected, "{rule:?}: {input}");
}

#[test]
fn test_source_file_rule() {
    let result = parse_rule(Rule::SourceFile, "#![allow(dead_code)]\nfn a() {}\nstruct B;");
    let root = result.syntax().unwrap();
    assert_eq!(root.kind(), SyntaxKind::SOURCE_FILE);
    let kinds: Vec<SyntaxKind> = root.children().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::INNER_ATTR, SyntaxKind::FN, SyntaxKind::STRUCT]
    );
}

// =============================================================================
// Whole-input matching
// =============================================================================

#[rstest]
#[case(Rule::Expression, "1 + 2 3", "trailing operand")]
#[case(Rule::Type, "u8 u16", "two types")]
#[case(Rule::Item, "fn f() {} fn g() {}", "two items")]
#[case(Rule::Statement, "let a = 1; let b = 2;", "two statements")]
#[case(Rule::Pattern, "a b", "two patterns")]
#[case(Rule::Literal, "-1", "negation is not part of a literal")]
#[case(Rule::Identifier, "fn", "strict keyword")]
#[case(Rule::Identifier, "r#crate", "reserved raw identifier")]
#[case(Rule::MacroCall, "m!(a)", "parenthesized macro item without semicolon")]
#[case(Rule::MatchArm, "x => x", "arm without comma or closing brace")]
#[case(Rule::Visibility, "crate::a", "crate path")]
#[case(Rule::Attribute, "#![inner]", "inner attribute")]
#[case(Rule::Block, "unsafe", "modifier without block")]
fn test_rule_rejects(#[case] rule: Rule, #[case] input: &str, #[case] desc: &str) {
    assert_rule_fails(rule, input, desc);
}

#[rstest]
#[case(Rule::Identifier, "union")]
#[case(Rule::Identifier, "macro_rules")]
#[case(Rule::Identifier, "r#async")]
#[case(Rule::Visibility, "crate")]
#[case(Rule::Visibility, "pub(super)")]
#[case(Rule::Expression, "  1  ")]
#[case(Rule::Type, "/* leading */ u8 // trailing")]
#[case(Rule::SimplePath, "$crate::inner")]
#[case(Rule::Closure, "for<'a> |x: &'a u8| -> u8 { *x }")]
fn test_rule_accepts(#[case] rule: Rule, #[case] input: &str) {
    assert_rule_parses(rule, input, "rule input");
}

#[test]
fn test_rule_result_fields() {
    let result = parse_rule(Rule::Type, "Vec<u8>");
    assert!(result.is_ok());
    assert_eq!(result.rule, Rule::Type);
    assert_eq!(result.input, "Vec<u8>");
    assert!(result.error().is_none());
    assert!(result.errors().is_empty());
}

#[test]
fn test_rule_lex_error() {
    let result = parse_rule(Rule::Expression, "\"open");
    assert!(!result.is_ok());
    assert!(result.syntax().is_none());
    assert!(result.error().is_some());
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn test_rule_respects_budget() {
    let options = ParseOptions::default().with_max_steps(3);
    let result = parse_rule_with(Rule::Expression, "a + b * c - d", &options);
    assert!(!result.is_ok());
    let unlimited = parse_rule_with(Rule::Expression, "a + b * c - d", &ParseOptions::default());
    assert!(unlimited.is_ok());
}

#[test]
fn test_rule_trivia_kept() {
    let input = "  1  ";
    let result = parse_rule(Rule::Expression, input);
    assert_eq!(result.syntax().unwrap().text().to_string(), input);
}
