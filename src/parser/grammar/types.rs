//! Types, trait bounds, generic parameters and where clauses

use super::{attrs, reset};
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::*;

pub(super) fn define(g: &mut GrammarBuilder) {
    types(g);
    bounds(g);
    functions(g);
    generics(g);
}

fn types(g: &mut GrammarBuilder) {
    g.rule(
        "type",
        choice([
            node(IMPL_TRAIT_TYPE, seq([tok(IMPL_KW), r("type_bounds")])),
            node(DYN_TRAIT_TYPE, seq([tok(DYN_KW), r("type_bounds")])),
            // bare trait object `A + B`, 2015 style
            node(
                DYN_TRAIT_TYPE,
                node(
                    TYPE_BOUND_LIST,
                    seq([
                        r("type_bound"),
                        plus(seq([tok(PLUS), r("type_bound")])),
                        opt(tok(PLUS)),
                    ]),
                ),
            ),
            r("type_no_bounds"),
        ]),
    )
    .label("type");

    // operands of `&`, `*const`, `as` and `->` in fn pointers, where a `+`
    // would be ambiguous
    g.rule(
        "type_no_bounds",
        choice([
            node(PAREN_TYPE, seq([tok(L_PAREN), r("type"), tok(R_PAREN)])),
            node(
                TUPLE_TYPE,
                seq([
                    tok(L_PAREN),
                    opt(seq([r("type"), tok(COMMA), opt(list(r("type"), COMMA))])),
                    tok(R_PAREN),
                ]),
            ),
            node(NEVER_TYPE, tok(BANG)),
            node(
                PTR_TYPE,
                seq([tok(STAR), any_of(&[CONST_KW, MUT_KW]), r("type_no_bounds")]),
            ),
            node(
                REF_TYPE,
                seq([
                    split(AMP),
                    opt(tok(LIFETIME)),
                    opt(tok(MUT_KW)),
                    r("type_no_bounds"),
                ]),
            ),
            node(
                ARRAY_TYPE,
                seq([
                    tok(L_BRACKET),
                    r("type"),
                    tok(SEMICOLON),
                    reset(r("expr")),
                    tok(R_BRACKET),
                ]),
            ),
            node(SLICE_TYPE, seq([tok(L_BRACKET), r("type"), tok(R_BRACKET)])),
            node(INFER_TYPE, tok(UNDERSCORE)),
            r("fn_ptr_type"),
            node(
                IMPL_TRAIT_TYPE,
                seq([tok(IMPL_KW), node(TYPE_BOUND_LIST, r("type_bound"))]),
            ),
            node(
                DYN_TRAIT_TYPE,
                seq([tok(DYN_KW), node(TYPE_BOUND_LIST, r("type_bound"))]),
            ),
            r("macro_call"),
            node(PATH_TYPE, r("type_path")),
        ]),
    )
    .label("type");
}

fn bounds(g: &mut GrammarBuilder) {
    g.node(
        "type_bounds",
        TYPE_BOUND_LIST,
        seq([
            r("type_bound"),
            star(seq([tok(PLUS), r("type_bound")])),
            opt(tok(PLUS)),
        ]),
    );

    let modifier = choice([
        tok(QUESTION),
        seq([tok(TILDE), tok(CONST_KW)]),
        tok(CONST_KW),
        tok(ASYNC_KW),
    ]);
    g.node(
        "type_bound",
        TYPE_BOUND,
        choice([
            tok(LIFETIME),
            seq([
                tok(L_PAREN),
                opt(modifier.clone()),
                opt(r("for_lifetimes")),
                r("type_path"),
                tok(R_PAREN),
            ]),
            seq([opt(modifier), opt(r("for_lifetimes")), r("type_path")]),
            // precise capturing: `use<'a, T>`
            seq([
                tok(USE_KW),
                split(LT),
                opt(list(choice([tok(LIFETIME), r("name_ref")]), COMMA)),
                split(GT),
            ]),
        ]),
    )
    .label("bound");

    g.node(
        "lifetime_bounds",
        TYPE_BOUND_LIST,
        seq([
            node(TYPE_BOUND, tok(LIFETIME)),
            star(seq([tok(PLUS), node(TYPE_BOUND, tok(LIFETIME))])),
            opt(tok(PLUS)),
        ]),
    );

    g.node(
        "for_lifetimes",
        FOR_LIFETIMES,
        seq([tok(FOR_KW), r("generic_params")]),
    );
}

fn functions(g: &mut GrammarBuilder) {
    g.node("ret_type", RET_TYPE, seq([tok(THIN_ARROW), r("type")]));
    g.node(
        "ret_type_no_bounds",
        RET_TYPE,
        seq([tok(THIN_ARROW), r("type_no_bounds")]),
    );
    g.node(
        "abi",
        ABI,
        seq([tok(EXTERN_KW), opt(any_of(&[STRING, RAW_STRING]))]),
    );

    g.node(
        "fn_ptr_type",
        FN_PTR_TYPE,
        seq([
            opt(r("for_lifetimes")),
            opt(tok(UNSAFE_KW)),
            opt(r("abi")),
            tok(FN_KW),
            node(
                PARAM_LIST,
                seq([tok(L_PAREN), opt(list(r("fn_ptr_param"), COMMA)), tok(R_PAREN)]),
            ),
            opt(r("ret_type_no_bounds")),
        ]),
    );
    g.node(
        "fn_ptr_param",
        PARAM,
        seq([
            attrs(),
            choice([
                seq([
                    opt(seq([
                        choice([node(NAME, r("ident")), tok(UNDERSCORE)]),
                        tok(COLON),
                    ])),
                    r("type"),
                ]),
                tok(DOT_DOT_DOT),
            ]),
        ]),
    );
}

fn generics(g: &mut GrammarBuilder) {
    g.node(
        "generic_params",
        GENERIC_PARAM_LIST,
        seq([tok(LT), opt(list(r("generic_param"), COMMA)), split(GT)]),
    )
    .context(ParseContext::GenericParameters);

    g.rule(
        "generic_param",
        choice([
            node(
                LIFETIME_PARAM,
                seq([
                    attrs(),
                    tok(LIFETIME),
                    opt(seq([tok(COLON), opt(r("lifetime_bounds"))])),
                ]),
            ),
            node(
                CONST_PARAM,
                seq([
                    attrs(),
                    tok(CONST_KW),
                    r("name"),
                    tok(COLON),
                    r("type"),
                    opt(seq([tok(EQ), r("const_arg_body")])),
                ]),
            ),
            node(
                TYPE_PARAM,
                seq([
                    attrs(),
                    r("name"),
                    opt(seq([tok(COLON), opt(r("type_bounds"))])),
                    opt(seq([tok(EQ), r("type")])),
                ]),
            ),
        ]),
    )
    .label("generic parameter");

    g.node(
        "where_clause",
        WHERE_CLAUSE,
        seq([tok(WHERE_KW), opt(list(r("where_pred"), COMMA))]),
    )
    .context(ParseContext::WhereClause);
    g.node(
        "where_pred",
        WHERE_PRED,
        choice([
            seq([tok(LIFETIME), tok(COLON), opt(r("lifetime_bounds"))]),
            seq([
                opt(r("for_lifetimes")),
                r("type"),
                tok(COLON),
                opt(r("type_bounds")),
            ]),
        ]),
    );
}
