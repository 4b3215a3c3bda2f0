//! Pattern tests: every pattern form, or-patterns and pattern positions

use rsyn::parser::{AstNode, Pat, Rule, SyntaxKind};
use rstest::rstest;

use crate::helpers::tree_helpers::{
    assert_rule_fails, assert_rule_parses, compact_text, count_kind, parse_ok, rule_node,
};

fn pat(input: &str) -> Pat {
    let node = rule_node(Rule::Pattern, input);
    Pat::cast(node.clone()).unwrap_or_else(|| panic!("{:?} is not a pattern", node.kind()))
}

// =============================================================================
// Pattern kinds
// =============================================================================

#[rstest]
#[case("x", SyntaxKind::IDENT_PAT)]
#[case("ref mut y", SyntaxKind::IDENT_PAT)]
#[case("None", SyntaxKind::IDENT_PAT)]
#[case("r#match", SyntaxKind::IDENT_PAT)]
#[case("_", SyntaxKind::WILDCARD_PAT)]
#[case("..", SyntaxKind::REST_PAT)]
#[case("42", SyntaxKind::LITERAL_PAT)]
#[case("-1", SyntaxKind::LITERAL_PAT)]
#[case("\"text\"", SyntaxKind::LITERAL_PAT)]
#[case("b'x'", SyntaxKind::LITERAL_PAT)]
#[case("true", SyntaxKind::LITERAL_PAT)]
#[case("1..=5", SyntaxKind::RANGE_PAT)]
#[case("'a'..='z'", SyntaxKind::RANGE_PAT)]
#[case("i32::MIN..0", SyntaxKind::RANGE_PAT)]
#[case("..=9", SyntaxKind::RANGE_PAT)]
#[case("10..", SyntaxKind::RANGE_PAT)]
#[case("&x", SyntaxKind::REF_PAT)]
#[case("&mut (a, b)", SyntaxKind::REF_PAT)]
#[case("Point { x, y: 0, .. }", SyntaxKind::RECORD_PAT)]
#[case("Some(v)", SyntaxKind::TUPLE_STRUCT_PAT)]
#[case("Ordering::Less", SyntaxKind::PATH_PAT)]
#[case("(a, b)", SyntaxKind::TUPLE_PAT)]
#[case("(a,)", SyntaxKind::TUPLE_PAT)]
#[case("()", SyntaxKind::TUPLE_PAT)]
#[case("(..)", SyntaxKind::TUPLE_PAT)]
#[case("(a)", SyntaxKind::PAREN_PAT)]
#[case("[first, .., last]", SyntaxKind::SLICE_PAT)]
#[case("A | B", SyntaxKind::OR_PAT)]
#[case("| A | B", SyntaxKind::OR_PAT)]
#[case("m!(x)", SyntaxKind::MACRO_CALL)]
fn test_pattern_kinds(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(rule_node(Rule::Pattern, input).kind(), expected, "{input}");
}

#[rstest]
#[case("a..=", "inclusive range without end")]
#[case("ref 1", "ref on a literal")]
#[case("x @", "binding without subpattern")]
#[case("&mut", "reference without pattern")]
#[case("(a | )", "dangling alternative")]
#[case("Point { x y }", "missing comma between fields")]
#[case("[a, b", "unclosed slice")]
fn test_malformed_patterns(#[case] input: &str, #[case] desc: &str) {
    assert_rule_fails(Rule::Pattern, input, desc);
}

// =============================================================================
// Typed accessors
// =============================================================================

#[test]
fn test_ident_pattern_modifiers() {
    let Pat::IdentPat(binding) = pat("ref mut y") else {
        panic!("expected IdentPat");
    };
    assert!(binding.is_ref());
    assert!(binding.is_mut());
    assert_eq!(binding.name().unwrap().text(), "y");
    assert!(binding.subpattern().is_none());
}

#[test]
fn test_at_binding() {
    let Pat::IdentPat(binding) = pat("n @ 1..=9") else {
        panic!("expected IdentPat");
    };
    assert_eq!(binding.name().unwrap().text(), "n");
    let Some(Pat::RangePat(range)) = binding.subpattern() else {
        panic!("expected range subpattern");
    };
    assert!(range.is_inclusive());
}

#[test]
fn test_negative_literal() {
    let Pat::LiteralPat(lit) = pat("-128") else {
        panic!("expected LiteralPat");
    };
    assert!(lit.is_negative());
    assert_eq!(lit.literal().unwrap().syntax().text().to_string(), "128");
}

#[rstest]
#[case("1..=5", Some("1"), Some("5"), true)]
#[case("1...5", Some("1"), Some("5"), true)]
#[case("0..10", Some("0"), Some("10"), false)]
#[case("..=9", None, Some("9"), true)]
#[case("10..", Some("10"), None, false)]
#[case("-5..=-1", Some("-5"), Some("-1"), true)]
fn test_range_bounds(
    #[case] input: &str,
    #[case] start: Option<&str>,
    #[case] end: Option<&str>,
    #[case] inclusive: bool,
) {
    let Pat::RangePat(range) = pat(input) else {
        panic!("expected RangePat for {input}");
    };
    let text = |p: Pat| compact_text(p.syntax());
    assert_eq!(range.start().map(text).as_deref(), start, "{input}");
    assert_eq!(range.end().map(text).as_deref(), end, "{input}");
    assert_eq!(range.is_inclusive(), inclusive, "{input}");
}

#[test]
fn test_record_pattern_fields() {
    let Pat::RecordPat(record) = pat("Point { x, ref mut y, z: 0, .. }") else {
        panic!("expected RecordPat");
    };
    assert_eq!(record.path().unwrap().text(), "Point");
    let list = record.field_list().unwrap();
    let names: Vec<String> = list.fields().filter_map(|f| f.field_name()).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
    assert!(list.rest_pat().is_some());
}

#[test]
fn test_record_pattern_tuple_index_field() {
    let Pat::RecordPat(record) = pat("Pair { 0: a, 1: _ }") else {
        panic!("expected RecordPat");
    };
    let names: Vec<String> = record
        .field_list()
        .unwrap()
        .fields()
        .filter_map(|f| f.field_name())
        .collect();
    assert_eq!(names, vec!["0", "1"]);
}

#[test]
fn test_nested_or_pattern() {
    let Pat::TupleStructPat(tuple) = pat("Some(1 | 2 | 3)") else {
        panic!("expected TupleStructPat");
    };
    assert_eq!(tuple.path().unwrap().text(), "Some");
    let fields: Vec<Pat> = tuple.fields().collect();
    assert_eq!(fields.len(), 1);
    let Pat::OrPat(or) = &fields[0] else {
        panic!("expected OrPat");
    };
    assert_eq!(or.alternatives().count(), 3);
}

#[test]
fn test_leading_pipe_is_not_an_alternative() {
    let Pat::OrPat(or) = pat("| Red | Green") else {
        panic!("expected OrPat");
    };
    assert_eq!(or.alternatives().count(), 2);
}

#[test]
fn test_slice_with_rest_binding() {
    let Pat::SlicePat(slice) = pat("[head, tail @ ..]") else {
        panic!("expected SlicePat");
    };
    let elements: Vec<Pat> = slice.elements().collect();
    assert_eq!(elements.len(), 2);
    let Pat::IdentPat(tail) = &elements[1] else {
        panic!("expected IdentPat");
    };
    assert!(matches!(tail.subpattern(), Some(Pat::RestPat(_))));
}

#[test]
fn test_double_reference_splits() {
    let Pat::RefPat(outer) = pat("&&x") else {
        panic!("expected RefPat");
    };
    let Some(Pat::RefPat(inner)) = outer.pat() else {
        panic!("expected nested RefPat");
    };
    assert!(!inner.is_mut());
    assert!(matches!(inner.pat(), Some(Pat::IdentPat(_))));
}

#[test]
fn test_paren_pattern_unwraps() {
    let Pat::ParenPat(paren) = pat("(A | B)") else {
        panic!("expected ParenPat");
    };
    assert!(matches!(paren.pat(), Some(Pat::OrPat(_))));
}

// =============================================================================
// Pattern positions
// =============================================================================

#[rstest]
#[case("fn f((a, b): (u8, u8), Point { x, .. }: Point) {}", "function parameters")]
#[case("fn f() { let [a, b, rest @ ..] = arr; }", "let statement")]
#[case("fn f() { let Some(x) = opt else { return; }; }", "let-else")]
#[case("fn f() { if let Some(0) | None = x {} }", "if-let with alternatives")]
#[case("fn f() { for (i, _) in pairs {} }", "for loop")]
#[case("fn f() { let g = |&(a, b): &(u8, u8)| a + b; }", "closure parameters")]
#[case("fn f() { match c { 'a'..='z' | 'A'..='Z' => {} _ => {} } }", "match arms")]
fn test_patterns_in_context(#[case] source: &str, #[case] desc: &str) {
    let parse = parse_ok(source);
    assert!(
        parse.syntax().descendants().any(|n| Pat::can_cast(n.kind())),
        "no pattern found in {desc}"
    );
}

#[test]
fn test_closure_parameters_do_not_take_alternatives() {
    // `|a| b` is a closure returning `b`, never the pattern `a | b`
    let node = rule_node(Rule::Expression, "|a| b");
    assert_eq!(node.kind(), SyntaxKind::CLOSURE_EXPR);
    assert_eq!(count_kind(&node, SyntaxKind::OR_PAT), 0);
}

#[rstest]
#[case("Some(ref inner)")]
#[case("Message::Move { x, y: 0 }")]
#[case("[.., last]")]
#[case("box_like!(a, b)")]
#[case("&[ref a, ref b]")]
fn test_pattern_rule_accepts(#[case] input: &str) {
    assert_rule_parses(Rule::Pattern, input, "pattern");
}
