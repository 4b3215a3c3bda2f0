//! Items

use super::{attrs, vis};
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::*;

/// Items allowed anywhere, in the order they are tried
const ITEMS: &[&str] = &[
    "module",
    "extern_crate",
    "use",
    "fn",
    "type_alias",
    "struct",
    "enum",
    "union",
    "const",
    "static",
    "trait",
    "impl",
    "extern_block",
    "macro_rules",
];

pub(super) fn define(g: &mut GrammarBuilder) {
    let mut top: Vec<Term> = ITEMS.iter().copied().map(r).collect();
    top.push(r("macro_call_item"));
    g.rule("item", choice(top)).label("item");
    // inside a block `foo!(...)` is an expression statement
    g.rule("item_in_block", choice(ITEMS.iter().copied().map(r).collect::<Vec<_>>()));

    modules(g);
    functions(g);
    adts(g);
    values(g);
    traits(g);
}

fn modules(g: &mut GrammarBuilder) {
    g.node(
        "module",
        MODULE,
        seq([
            attrs(),
            vis(),
            opt(tok(UNSAFE_KW)),
            tok(MOD_KW),
            r("name"),
            choice([
                tok(SEMICOLON),
                node(
                    ITEM_LIST,
                    seq([
                        tok(L_BRACE),
                        star(r("inner_attr")),
                        star(r("item")),
                        tok(R_BRACE),
                    ]),
                ),
            ]),
        ]),
    )
    .context(ParseContext::Module);

    g.node(
        "rename",
        RENAME,
        seq([tok(AS_KW), choice([r("name"), tok(UNDERSCORE)])]),
    );
    g.node(
        "extern_crate",
        EXTERN_CRATE,
        seq([
            attrs(),
            vis(),
            tok(EXTERN_KW),
            tok(CRATE_KW),
            node(NAME_REF, choice([r("ident"), tok(SELF_KW)])),
            opt(r("rename")),
            tok(SEMICOLON),
        ]),
    );

    g.node(
        "use",
        USE,
        seq([attrs(), vis(), tok(USE_KW), r("use_tree"), tok(SEMICOLON)]),
    )
    .context(ParseContext::Use);
    g.node(
        "use_tree",
        USE_TREE,
        choice([
            // `a::b::*`, `a::{b, c}`, `::*`, `{a, b}`
            seq([
                opt(seq([opt(r("simple_path")), tok(COLON_COLON)])),
                choice([tok(STAR), r("use_tree_list")]),
            ]),
            seq([r("simple_path"), opt(r("rename"))]),
        ]),
    );
    g.node(
        "use_tree_list",
        USE_TREE_LIST,
        seq([tok(L_BRACE), opt(list(r("use_tree"), COMMA)), tok(R_BRACE)]),
    );

    g.node(
        "extern_block",
        EXTERN_BLOCK,
        seq([
            attrs(),
            opt(tok(UNSAFE_KW)),
            r("abi"),
            node(
                EXTERN_ITEM_LIST,
                seq([
                    tok(L_BRACE),
                    star(r("inner_attr")),
                    star(choice([
                        r("fn"),
                        r("static"),
                        r("type_alias"),
                        r("macro_call_item"),
                    ])),
                    tok(R_BRACE),
                ]),
            ),
        ]),
    )
    .context(ParseContext::ExternBlock);
}

fn functions(g: &mut GrammarBuilder) {
    g.node(
        "fn",
        FN,
        seq([
            attrs(),
            vis(),
            opt(contextual("default")),
            opt(tok(CONST_KW)),
            opt(tok(ASYNC_KW)),
            opt(choice([tok(UNSAFE_KW), contextual("safe")])),
            opt(r("abi")),
            tok(FN_KW),
            r("name"),
            opt(r("generic_params")),
            r("param_list"),
            opt(r("ret_type")),
            opt(r("where_clause")),
            choice([r("block"), tok(SEMICOLON)]),
        ]),
    )
    .context(ParseContext::Function);

    g.node(
        "param_list",
        PARAM_LIST,
        seq([
            tok(L_PAREN),
            opt(choice([
                seq([
                    r("self_param"),
                    opt(seq([tok(COMMA), opt(list(r("param"), COMMA))])),
                ]),
                list(r("param"), COMMA),
            ])),
            tok(R_PAREN),
        ]),
    )
    .context(ParseContext::ParameterList);

    g.node(
        "self_param",
        SELF_PARAM,
        seq([
            attrs(),
            choice([
                seq([opt(tok(MUT_KW)), tok(SELF_KW), tok(COLON), r("type")]),
                seq([
                    opt(seq([split(AMP), opt(tok(LIFETIME))])),
                    opt(tok(MUT_KW)),
                    tok(SELF_KW),
                ]),
            ]),
        ]),
    );
    g.node(
        "param",
        PARAM,
        seq([
            attrs(),
            choice([
                seq([r("pat_single"), tok(COLON), r("type")]),
                // C variadics: `...` or `args: ...`
                seq([opt(seq([r("pat_single"), tok(COLON)])), tok(DOT_DOT_DOT)]),
                // anonymous parameters in trait methods, 2015 style
                r("type"),
            ]),
        ]),
    );
}

fn adts(g: &mut GrammarBuilder) {
    g.node(
        "struct",
        STRUCT,
        seq([
            attrs(),
            vis(),
            tok(STRUCT_KW),
            r("name"),
            opt(r("generic_params")),
            choice([
                seq([
                    opt(r("where_clause")),
                    choice([tok(SEMICOLON), r("record_field_list")]),
                ]),
                seq([r("tuple_field_list"), opt(r("where_clause")), tok(SEMICOLON)]),
            ]),
        ]),
    )
    .context(ParseContext::Struct);

    g.node(
        "union",
        UNION,
        seq([
            attrs(),
            vis(),
            contextual("union"),
            r("name"),
            opt(r("generic_params")),
            opt(r("where_clause")),
            r("record_field_list"),
        ]),
    )
    .context(ParseContext::Union);

    g.node(
        "record_field_list",
        RECORD_FIELD_LIST,
        seq([tok(L_BRACE), opt(list(r("record_field"), COMMA)), tok(R_BRACE)]),
    )
    .context(ParseContext::FieldList);
    g.node(
        "record_field",
        RECORD_FIELD,
        seq([
            attrs(),
            vis(),
            r("name"),
            tok(COLON),
            r("type"),
            opt(seq([tok(EQ), r("expr")])),
        ]),
    );
    g.node(
        "tuple_field_list",
        TUPLE_FIELD_LIST,
        seq([tok(L_PAREN), opt(list(r("tuple_field"), COMMA)), tok(R_PAREN)]),
    )
    .context(ParseContext::FieldList);
    g.node("tuple_field", TUPLE_FIELD, seq([attrs(), vis(), r("type")]));

    g.node(
        "enum",
        ENUM,
        seq([
            attrs(),
            vis(),
            tok(ENUM_KW),
            r("name"),
            opt(r("generic_params")),
            opt(r("where_clause")),
            node(
                VARIANT_LIST,
                seq([tok(L_BRACE), opt(list(r("variant"), COMMA)), tok(R_BRACE)]),
            ),
        ]),
    )
    .context(ParseContext::Enum);
    g.node(
        "variant",
        VARIANT,
        seq([
            attrs(),
            vis(),
            r("name"),
            opt(choice([r("record_field_list"), r("tuple_field_list")])),
            opt(seq([tok(EQ), r("expr")])),
        ]),
    );
}

fn values(g: &mut GrammarBuilder) {
    g.node(
        "type_alias",
        TYPE_ALIAS,
        seq([
            attrs(),
            vis(),
            opt(contextual("default")),
            tok(TYPE_KW),
            r("name"),
            opt(r("generic_params")),
            opt(seq([tok(COLON), opt(r("type_bounds"))])),
            opt(r("where_clause")),
            opt(seq([tok(EQ), r("type")])),
            opt(r("where_clause")),
            tok(SEMICOLON),
        ]),
    )
    .context(ParseContext::TypeAlias);

    g.node(
        "const",
        CONST,
        seq([
            attrs(),
            vis(),
            opt(contextual("default")),
            tok(CONST_KW),
            choice([r("name"), tok(UNDERSCORE)]),
            opt(r("generic_params")),
            opt(seq([tok(COLON), r("type")])),
            opt(seq([tok(EQ), r("expr")])),
            opt(r("where_clause")),
            tok(SEMICOLON),
        ]),
    )
    .context(ParseContext::Constant);

    g.node(
        "static",
        STATIC,
        seq([
            attrs(),
            vis(),
            opt(choice([tok(UNSAFE_KW), contextual("safe")])),
            tok(STATIC_KW),
            opt(tok(MUT_KW)),
            r("name"),
            tok(COLON),
            r("type"),
            opt(seq([tok(EQ), r("expr")])),
            tok(SEMICOLON),
        ]),
    )
    .context(ParseContext::Static);
}

fn traits(g: &mut GrammarBuilder) {
    g.node(
        "assoc_item_list",
        ASSOC_ITEM_LIST,
        seq([
            tok(L_BRACE),
            star(r("inner_attr")),
            star(r("assoc_item")),
            tok(R_BRACE),
        ]),
    );
    g.rule(
        "assoc_item",
        choice([
            r("fn"),
            r("type_alias"),
            r("const"),
            r("macro_call_item"),
        ]),
    )
    .label("associated item");

    g.node(
        "trait",
        TRAIT,
        seq([
            attrs(),
            vis(),
            opt(tok(UNSAFE_KW)),
            opt(contextual("auto")),
            tok(TRAIT_KW),
            r("name"),
            opt(r("generic_params")),
            choice([
                // trait alias
                seq([
                    tok(EQ),
                    opt(r("type_bounds")),
                    opt(r("where_clause")),
                    tok(SEMICOLON),
                ]),
                seq([
                    opt(seq([tok(COLON), opt(r("type_bounds"))])),
                    opt(r("where_clause")),
                    r("assoc_item_list"),
                ]),
            ]),
        ]),
    )
    .context(ParseContext::Trait);

    g.node(
        "impl",
        IMPL,
        seq([
            attrs(),
            vis(),
            opt(contextual("default")),
            opt(tok(UNSAFE_KW)),
            tok(IMPL_KW),
            opt(r("generic_params")),
            opt(tok(CONST_KW)),
            choice([
                seq([opt(tok(BANG)), r("type"), tok(FOR_KW), r("type")]),
                r("type"),
            ]),
            opt(r("where_clause")),
            r("assoc_item_list"),
        ]),
    )
    .context(ParseContext::Impl);
}
