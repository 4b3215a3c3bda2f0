//! Paths and generic arguments
//!
//! Three path flavors share the same shape but differ in what may follow a
//! segment:
//!
//! ```text
//! simple_path   a::b::c              attributes, use trees, macro names
//! type_path     Vec<T>, Fn(u8) -> u8 generic args need no turbofish
//! expr_path     Vec::<T>::new         `<` only as turbofish, or when a `(`
//!                                     or `::` follows the closing `>`
//! ```

use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::*;

pub(super) fn define(g: &mut GrammarBuilder) {
    let simple_segment = node(PATH_SEGMENT, r("name_ref"));
    g.node(
        "simple_path",
        PATH,
        seq([
            opt(tok(COLON_COLON)),
            simple_segment.clone(),
            star(seq([tok(COLON_COLON), simple_segment])),
        ]),
    )
    .label("path");

    g.node(
        "type_path",
        PATH,
        path_body("qualified_path_type", "type_path_segment"),
    )
    .label("path");
    g.node(
        "type_path_segment",
        PATH_SEGMENT,
        seq([
            r("name_ref"),
            opt(choice([
                seq([opt(tok(COLON_COLON)), r("generic_args")]),
                seq([r("paren_args"), opt(r("ret_type_no_bounds"))]),
            ])),
        ]),
    );
    g.node(
        "paren_args",
        PAREN_ARG_LIST,
        seq([tok(L_PAREN), opt(list(r("type"), COMMA)), tok(R_PAREN)]),
    );

    g.node(
        "expr_path",
        PATH,
        path_body("qualified_path_type", "expr_path_segment"),
    )
    .label("path");
    g.node(
        "expr_path_segment",
        PATH_SEGMENT,
        seq([
            r("name_ref"),
            opt(choice([
                seq([tok(COLON_COLON), r("generic_args")]),
                seq([
                    r("generic_args"),
                    and(any_of(&[L_PAREN, COLON_COLON])),
                ]),
            ])),
        ]),
    );

    g.node(
        "qualified_path_type",
        QUALIFIED_PATH_TYPE,
        seq([
            split(LT),
            r("type"),
            opt(seq([tok(AS_KW), r("type_path")])),
            split(GT),
        ]),
    );

    generic_args(g);
}

/// `<T as Trait>::seg::seg` or `::? seg (:: seg)*`
fn path_body(qualified: &'static str, segment: &'static str) -> Term {
    choice([
        seq([r(qualified), plus(seq([tok(COLON_COLON), r(segment)]))]),
        seq([
            opt(tok(COLON_COLON)),
            r(segment),
            star(seq([tok(COLON_COLON), r(segment)])),
        ]),
    ])
}

fn generic_args(g: &mut GrammarBuilder) {
    g.node(
        "generic_args",
        GENERIC_ARG_LIST,
        seq([split(LT), opt(list(r("generic_arg"), COMMA)), split(GT)]),
    )
    .context(ParseContext::GenericArguments);

    g.rule(
        "generic_arg",
        choice([
            node(LIFETIME_ARG, tok(LIFETIME)),
            node(
                ASSOC_TYPE_ARG,
                seq([
                    r("name_ref"),
                    opt(r("generic_args")),
                    choice([
                        seq([tok(EQ), choice([r("type"), r("const_arg_body")])]),
                        seq([tok(COLON), r("type_bounds")]),
                    ]),
                ]),
            ),
            node(TYPE_ARG, r("type")),
            node(CONST_ARG, r("const_arg_body")),
        ]),
    )
    .label("generic argument");

    // `{ N + 1 }`, `3`, `-3`
    g.rule(
        "const_arg_body",
        choice([
            r("block"),
            r("literal"),
            node(PREFIX_EXPR, seq([tok(MINUS), r("literal")])),
        ]),
    );
}
