//! Item tests: every item kind through the file parser and the typed layer

use rsyn::parser::{
    AssocItem, AstNode, Expr, GenericParam, Item, Rule, Stmt, SyntaxKind, Type, VisibilityKind,
};
use rstest::rstest;

use crate::helpers::source_fixtures::{GENERICS, HELLO_WORLD, MACROS, MODULE_WITH_ITEMS};
use crate::helpers::tree_helpers::{
    assert_rule_fails, assert_rule_parses, compact_text, source_file,
};

fn only_item(source: &str) -> Item {
    let file = source_file(source);
    let items: Vec<Item> = file.items().collect();
    assert_eq!(items.len(), 1, "expected one item in {source}");
    items.into_iter().next().unwrap()
}

// =============================================================================
// Item kinds
// =============================================================================

#[rstest]
#[case("fn f() {}", SyntaxKind::FN)]
#[case("pub(crate) const fn f() -> u8 { 0 }", SyntaxKind::FN)]
#[case("unsafe extern \"C\" fn cb(x: i32) {}", SyntaxKind::FN)]
#[case("struct Unit;", SyntaxKind::STRUCT)]
#[case("struct Pair<T>(T, T) where T: Copy;", SyntaxKind::STRUCT)]
#[case("enum Never {}", SyntaxKind::ENUM)]
#[case("union Bits { i: u32, f: f32 }", SyntaxKind::UNION)]
#[case("trait Marker {}", SyntaxKind::TRAIT)]
#[case("unsafe auto trait Auto {}", SyntaxKind::TRAIT)]
#[case("trait Both = Send + Sync;", SyntaxKind::TRAIT)]
#[case("impl Foo {}", SyntaxKind::IMPL)]
#[case("impl !Send for Raw {}", SyntaxKind::IMPL)]
#[case("mod inline { fn f() {} }", SyntaxKind::MODULE)]
#[case("use a::b as c;", SyntaxKind::USE)]
#[case("extern crate alloc as heap;", SyntaxKind::EXTERN_CRATE)]
#[case("type Id = u64;", SyntaxKind::TYPE_ALIAS)]
#[case("const _: () = ();", SyntaxKind::CONST)]
#[case("static NAME: &str = \"x\";", SyntaxKind::STATIC)]
#[case("extern \"C\" { fn abs(x: i32) -> i32; static errno: i32; }", SyntaxKind::EXTERN_BLOCK)]
#[case("macro_rules! nothing {}", SyntaxKind::MACRO_RULES)]
#[case("lazy_static! { static ref X: u8 = 1; }", SyntaxKind::MACRO_CALL)]
#[case("include!(\"generated.rs\");", SyntaxKind::MACRO_CALL)]
fn test_item_kind(#[case] source: &str, #[case] kind: SyntaxKind) {
    assert_eq!(only_item(source).syntax().kind(), kind, "{source}");
}

#[rstest]
#[case("fn f()", "missing body")]
#[case("struct S { a: u8 b: u8 }", "missing comma between fields")]
#[case("include!(\"x.rs\")", "parenthesized item macro without semicolon")]
#[case("impl for T {}", "impl without a type")]
#[case("enum E { A = }", "discriminant without value")]
#[case("pub pub fn f() {}", "doubled visibility")]
fn test_malformed_items(#[case] source: &str, #[case] desc: &str) {
    assert_rule_fails(Rule::SourceFile, source, desc);
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_function_signature() {
    let Item::Function(f) = only_item(
        "pub async unsafe fn read<'a, T: Read + ?Sized, const N: usize>(&'a mut self, buf: &mut [u8; N], _: T) -> io::Result<usize> where T: 'a {}",
    ) else {
        panic!("expected fn");
    };
    assert_eq!(f.name().unwrap().text(), "read");
    assert!(f.is_async());
    assert!(f.is_unsafe());
    assert!(!f.is_const());
    assert_eq!(f.visibility().unwrap().kind(), VisibilityKind::Pub);

    let params: Vec<GenericParam> = f.generic_param_list().unwrap().params().collect();
    assert!(matches!(params[0], GenericParam::LifetimeParam(_)));
    assert!(matches!(params[1], GenericParam::TypeParam(_)));
    assert!(matches!(params[2], GenericParam::ConstParam(_)));

    let param_list = f.param_list().unwrap();
    let self_param = param_list.self_param().unwrap();
    assert!(self_param.is_ref());
    assert!(self_param.is_mut());
    assert_eq!(self_param.lifetime().unwrap().text(), "'a");
    assert_eq!(param_list.params().count(), 2);

    let ret = f.ret_type().unwrap().ty().unwrap();
    assert_eq!(compact_text(ret.syntax()), "io::Result<usize>");
    assert_eq!(f.where_clause().unwrap().predicates().count(), 1);
    assert!(f.body().is_some());
}

#[test]
fn test_function_abi() {
    let Item::Function(f) = only_item("extern \"system\" fn hook() {}") else {
        panic!("expected fn");
    };
    let abi = f.abi().unwrap();
    assert_eq!(abi.abi_string().unwrap().text(), "\"system\"");
}

#[test]
fn test_c_variadic() {
    let Item::ExternBlock(block) = only_item("extern \"C\" { fn printf(fmt: *const u8, ...) -> i32; }")
    else {
        panic!("expected extern block");
    };
    let items = block.items();
    let Item::Function(printf) = &items[0] else {
        panic!("expected fn");
    };
    assert!(printf.body().is_none());
    let params: Vec<_> = printf.param_list().unwrap().params().collect();
    assert!(params[1].is_variadic());
}

// =============================================================================
// Data types
// =============================================================================

#[test]
fn test_struct_shapes() {
    let file = source_file(MODULE_WITH_ITEMS);
    let structs: Vec<_> = file
        .items()
        .filter_map(|item| match item {
            Item::Struct(s) => Some(s),
            _ => None,
        })
        .collect();
    assert_eq!(structs.len(), 2);

    let point = &structs[0];
    assert_eq!(point.name().unwrap().text(), "Point");
    assert_eq!(point.attrs().count(), 1);
    let fields: Vec<_> = point.record_fields().unwrap().fields().collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].name().unwrap().text(), "y");
    assert!(fields[1].visibility().is_some());

    let meters = &structs[1];
    assert!(meters.record_fields().is_none());
    assert_eq!(meters.tuple_fields().unwrap().fields().count(), 1);
    assert!(!meters.is_unit());
}

#[test]
fn test_enum_variants() {
    let Item::Enum(e) = only_item("enum Op { Add = 1, Neg(i64), Call { name: String, argc: u8 }, Nop }")
    else {
        panic!("expected enum");
    };
    let variants = e.variants();
    assert_eq!(variants.len(), 4);
    assert_eq!(variants[0].discriminant().unwrap().syntax().text(), "1");
    assert!(variants[1].tuple_fields().is_some());
    assert_eq!(variants[2].record_fields().unwrap().fields().count(), 2);
    assert!(variants[3].record_fields().is_none() && variants[3].tuple_fields().is_none());
}

#[test]
fn test_union_is_contextual() {
    // `union` only starts an item when followed by a name
    let file = source_file("union U { a: u8 }\nfn union() { let union = 1; }");
    let kinds: Vec<SyntaxKind> = file.items().map(|i| i.syntax().kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::UNION, SyntaxKind::FN]);
}

#[test]
fn test_record_field_default_value() {
    let Item::Struct(s) = only_item("struct Opts { depth: u8 = 3 }") else {
        panic!("expected struct");
    };
    let field = s.record_fields().unwrap().fields().next().unwrap();
    assert_eq!(field.default_value().unwrap().syntax().text(), "3");
}

// =============================================================================
// Traits and impls
// =============================================================================

#[test]
fn test_trait_items() {
    let file = source_file(MODULE_WITH_ITEMS);
    let Some(Item::Trait(area)) = file.items().find(|i| matches!(i, Item::Trait(_))) else {
        panic!("expected a trait");
    };
    let items: Vec<AssocItem> = area.assoc_item_list().unwrap().items().collect();
    assert_eq!(items.len(), 2);
    let AssocItem::Const(unit) = &items[0] else {
        panic!("expected const");
    };
    assert_eq!(unit.body().unwrap().syntax().text(), "\"m2\"");
    let AssocItem::Function(f) = &items[1] else {
        panic!("expected fn");
    };
    assert!(f.body().is_none());
}

#[test]
fn test_trait_alias_and_supertraits() {
    let Item::Trait(alias) = only_item("trait Shareable = Send + Sync;") else {
        panic!("expected trait");
    };
    assert!(alias.is_alias());

    let Item::Trait(sub) = only_item("pub unsafe trait Sub: Super + 'static where Self: Sized {}")
    else {
        panic!("expected trait");
    };
    assert!(!sub.is_alias());
    assert!(sub.is_unsafe());
    assert_eq!(sub.bounds().unwrap().syntax().children().count(), 2);
    assert!(sub.where_clause().is_some());
}

#[rstest]
#[case("impl Add for Point {}", Some("Add"), "Point", false)]
#[case("impl<T> From<T> for Wrapper<T> {}", Some("From<T>"), "Wrapper<T>", false)]
#[case("impl !Sync for Cell {}", Some("Sync"), "Cell", true)]
#[case("impl<'a> Parser<'a> {}", None, "Parser<'a>", false)]
#[case("impl dyn Any + Send {}", None, "dynAny+Send", false)]
fn test_impl_parts(
    #[case] source: &str,
    #[case] trait_text: Option<&str>,
    #[case] self_text: &str,
    #[case] negative: bool,
) {
    let Item::Impl(imp) = only_item(source) else {
        panic!("expected impl: {source}");
    };
    let trait_ = imp.trait_().map(|t: Type| compact_text(t.syntax()));
    assert_eq!(trait_.as_deref(), trait_text, "{source}");
    assert_eq!(compact_text(imp.self_ty().unwrap().syntax()), self_text);
    assert_eq!(imp.is_negative(), negative);
}

#[test]
fn test_generic_impl_fixture() {
    let file = source_file(GENERICS);
    let Some(Item::Impl(imp)) = file.items().find(|i| matches!(i, Item::Impl(_))) else {
        panic!("expected an impl");
    };
    assert_eq!(imp.generic_param_list().unwrap().params().count(), 3);
    let methods: Vec<String> = imp
        .assoc_item_list()
        .unwrap()
        .items()
        .filter_map(|item| match item {
            AssocItem::Function(f) => f.name().map(|n| n.text()),
            _ => None,
        })
        .collect();
    assert_eq!(methods, vec!["get_or_insert_with", "refresh"]);
}

// =============================================================================
// Modules and imports
// =============================================================================

#[rstest]
#[case("use std::io;", &["std::io"])]
#[case("use std::io::{self, Read, Write as W};", &["std::io::self", "std::io::Read", "std::io::Write"])]
#[case("use a::{b::{c, d}, e::*};", &["a::b::c", "a::b::d", "a::e::*"])]
#[case("use ::core::mem;", &["::core::mem"])]
#[case("use {alpha, beta};", &["alpha", "beta"])]
#[case("use super::*;", &["super::*"])]
fn test_use_tree_flatten(#[case] source: &str, #[case] expected: &[&str]) {
    let Item::Use(use_item) = only_item(source) else {
        panic!("expected use");
    };
    assert_eq!(use_item.use_tree().unwrap().flatten(), expected, "{source}");
}

#[test]
fn test_modules() {
    let file = source_file("mod a;\npub mod b { mod c { fn f() {} } }\n");
    let modules: Vec<_> = file
        .items()
        .filter_map(|i| match i {
            Item::Module(m) => Some(m),
            _ => None,
        })
        .collect();
    assert!(modules[0].is_out_of_line());
    assert!(!modules[1].is_out_of_line());
    let nested: Vec<Item> = modules[1].item_list().unwrap().items().collect();
    assert_eq!(nested[0].name().unwrap().text(), "c");
}

#[test]
fn test_extern_crate_rename() {
    let Item::ExternCrate(krate) = only_item("extern crate self as this;") else {
        panic!("expected extern crate");
    };
    assert!(krate.name_ref().unwrap().is_self());
    assert_eq!(krate.rename().unwrap().name().unwrap().text(), "this");
}

#[rstest]
#[case("pub fn f() {}", VisibilityKind::Pub)]
#[case("pub(crate) fn f() {}", VisibilityKind::PubCrate)]
#[case("pub(self) fn f() {}", VisibilityKind::PubSelf)]
#[case("pub(super) fn f() {}", VisibilityKind::PubSuper)]
#[case("crate fn f() {}", VisibilityKind::Crate)]
fn test_visibility_kinds(#[case] source: &str, #[case] kind: VisibilityKind) {
    assert_eq!(only_item(source).visibility().unwrap().kind(), kind);
}

#[test]
fn test_pub_in_path() {
    let vis = only_item("pub(in crate::net) struct Socket;").visibility().unwrap();
    let VisibilityKind::PubIn(path) = vis.kind() else {
        panic!("expected pub(in path)");
    };
    assert_eq!(path.text(), "crate::net");
}

// =============================================================================
// Attributes and docs
// =============================================================================

#[test]
fn test_inner_and_outer_attributes() {
    let file = source_file(
        "#![no_std]\n#![cfg_attr(test, allow(dead_code))]\n#[inline(always)]\n#[doc = \"x\"]\nfn f() {}",
    );
    let inner: Vec<String> = file.inner_attrs().filter_map(|a| a.name()).collect();
    assert_eq!(inner, vec!["no_std", "cfg_attr"]);

    let item = file.items().next().unwrap();
    let outer: Vec<String> = item.attrs().filter_map(|a| a.name()).collect();
    assert_eq!(outer, vec!["inline", "doc"]);
    let doc = item.attrs().nth(1).unwrap();
    assert!(doc.meta().unwrap().value().is_some());
}

#[rstest]
#[case("#[unsafe(no_mangle)] pub extern \"C\" fn f() {}", "unsafe attribute")]
#[case("#[cfg(all(unix, target_pointer_width = \"64\"))] fn f() {}", "nested cfg")]
#[case("#[rustfmt::skip] fn f() {}", "tool attribute")]
fn test_attribute_forms(#[case] source: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::SourceFile, source, desc);
}

#[test]
fn test_doc_comments_attach_to_items() {
    let file = source_file("//! crate docs\n\n/// First line\n/// second line\n#[derive(Debug)]\nstruct S;\n\n// plain\nfn f() {}\n");
    let items: Vec<Item> = file.items().collect();
    assert_eq!(
        items[0].doc_comment().as_deref(),
        Some("First line\nsecond line")
    );
    assert_eq!(items[1].doc_comment(), None);
}

// =============================================================================
// Macros
// =============================================================================

#[test]
fn test_macro_rules_arms() {
    let file = source_file(MACROS);
    let Some(Item::MacroRules(square)) = file.items().next() else {
        panic!("expected macro_rules");
    };
    assert_eq!(square.name().unwrap().text(), "square");
    let rules: Vec<_> = square.rules().collect();
    assert_eq!(rules.len(), 2);
    let matcher = rules[0].matcher().unwrap();
    assert_eq!(compact_text(matcher.syntax()), "($x:expr)");
    assert_eq!(
        rules[1].transcriber().unwrap().delimiter(),
        Some(SyntaxKind::L_BRACE)
    );
}

#[test]
fn test_item_macro_call() {
    let file = source_file(MACROS);
    let Some(Item::MacroCall(call)) = file.items().nth(1) else {
        panic!("expected a macro call");
    };
    assert_eq!(call.name().as_deref(), Some("thread_local"));
    assert_eq!(call.token_tree().unwrap().delimiter(), Some(SyntaxKind::L_BRACE));
}

#[rstest]
#[case("macro_rules! m { () => {} }", "braces")]
#[case("macro_rules! m ( () => {} );", "parens with semicolon")]
#[case("macro_rules! m [ (a) => [b]; (c) => (d) ];", "brackets, two rules")]
#[case("macro_rules! m { ($($t:tt)*) => { $($t)* }; }", "repetition")]
fn test_macro_rules_delimiters(#[case] source: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::MacroRules, source, desc);
}

#[test]
fn test_item_counts_in_fixture() {
    let file = source_file(MODULE_WITH_ITEMS);
    let names: Vec<String> = file
        .items()
        .filter_map(|i| i.name().map(|n| n.text()))
        .collect();
    assert_eq!(
        names,
        vec![
            "Point", "Meters", "Shape", "Area", "ORIGIN", "COUNTER", "Polyline", "tests"
        ]
    );
    assert_eq!(file.items().count(), 12);
}

#[test]
fn test_hello_world_structure() {
    let Item::Function(main) = only_item(HELLO_WORLD) else {
        panic!("expected a function");
    };
    assert_eq!(main.name().unwrap().text(), "main");
    let params = main.param_list().unwrap();
    assert!(params.self_param().is_none());
    assert_eq!(params.params().count(), 0);
    assert!(main.ret_type().is_none());

    let body = main.body().unwrap();
    let stmts: Vec<Stmt> = body.statements().collect();
    assert_eq!(stmts.len(), 1);
    let Stmt::ExprStmt(call) = &stmts[0] else {
        panic!("expected an expression statement");
    };
    assert!(call.has_semicolon());
    let Some(Expr::MacroCall(println)) = call.expr() else {
        panic!("expected a macro call");
    };
    assert_eq!(println.name().as_deref(), Some("println"));
    assert_eq!(
        compact_text(println.token_tree().unwrap().syntax()),
        "(\"Hello, world!\")"
    );
    assert!(body.tail_expr().is_none());
}
