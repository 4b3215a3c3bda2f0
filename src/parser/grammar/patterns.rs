//! Patterns
//!
//! `pattern` allows top-level alternatives (`A | B`) and a leading `|`;
//! `pat_single` does not, for closure and function parameters where `|`
//! means something else.

use super::attrs;
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::syntax_kind::SyntaxKind::*;

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        "pattern",
        seq([
            opt(tok(PIPE)),
            choice([
                node(
                    OR_PAT,
                    seq([
                        r("pat_single"),
                        plus(seq([tok(PIPE), r("pat_single")])),
                    ]),
                ),
                r("pat_single"),
            ]),
        ]),
    )
    .label("pattern");

    g.rule(
        "pat_single",
        choice([
            r("range_pat"),
            r("literal_pat"),
            node(WILDCARD_PAT, tok(UNDERSCORE)),
            node(REST_PAT, tok(DOT_DOT)),
            node(
                REF_PAT,
                seq([split(AMP), opt(tok(MUT_KW)), r("pat_single")]),
            ),
            r("macro_call"),
            r("record_pat"),
            r("tuple_struct_pat"),
            r("ident_pat"),
            node(PATH_PAT, r("expr_path")),
            node(
                PAREN_PAT,
                seq([
                    tok(L_PAREN),
                    not(seq([tok(DOT_DOT), tok(R_PAREN)])),
                    r("pattern"),
                    tok(R_PAREN),
                ]),
            ),
            node(
                TUPLE_PAT,
                seq([tok(L_PAREN), opt(list(r("pattern"), COMMA)), tok(R_PAREN)]),
            ),
            node(
                SLICE_PAT,
                seq([
                    tok(L_BRACKET),
                    opt(list(r("pattern"), COMMA)),
                    tok(R_BRACKET),
                ]),
            ),
        ]),
    )
    .label("pattern");

    g.node(
        "literal_pat",
        LITERAL_PAT,
        seq([opt(tok(MINUS)), r("literal")]),
    );

    let bound = || r("range_pat_bound");
    g.rule(
        "range_pat_bound",
        choice([r("literal_pat"), node(PATH_PAT, r("expr_path"))]),
    );
    g.node(
        "range_pat",
        RANGE_PAT,
        choice([
            seq([bound(), any_of(&[DOT_DOT_EQ, DOT_DOT_DOT]), bound()]),
            seq([bound(), tok(DOT_DOT), bound()]),
            seq([bound(), tok(DOT_DOT)]),
            seq([tok(DOT_DOT_EQ), bound()]),
        ]),
    );

    g.node(
        "ident_pat",
        IDENT_PAT,
        seq([
            opt(tok(REF_KW)),
            opt(tok(MUT_KW)),
            r("name"),
            // `Foo::Bar`, `Foo(..)`, `Foo { .. }` and `foo!()` are not bindings
            not(any_of(&[COLON_COLON, L_PAREN, L_BRACE, BANG])),
            opt(seq([tok(AT), r("pat_single")])),
        ]),
    );

    g.node(
        "tuple_struct_pat",
        TUPLE_STRUCT_PAT,
        seq([
            r("expr_path"),
            tok(L_PAREN),
            opt(list(r("pattern"), COMMA)),
            tok(R_PAREN),
        ]),
    );

    g.node(
        "record_pat",
        RECORD_PAT,
        seq([
            r("expr_path"),
            node(
                RECORD_PAT_FIELD_LIST,
                seq([
                    tok(L_BRACE),
                    star(seq([r("record_pat_field"), tok(COMMA)])),
                    opt(r("record_pat_field")),
                    tok(R_BRACE),
                ]),
            ),
        ]),
    );
    g.rule(
        "record_pat_field",
        choice([
            node(REST_PAT, seq([attrs(), tok(DOT_DOT)])),
            node(
                RECORD_PAT_FIELD,
                seq([
                    attrs(),
                    choice([
                        seq([
                            node(NAME_REF, any_of(&[IDENT, RAW_IDENT, INT_NUMBER])),
                            tok(COLON),
                            r("pattern"),
                        ]),
                        // shorthand `ref mut field`
                        node(
                            IDENT_PAT,
                            seq([opt(tok(REF_KW)), opt(tok(MUT_KW)), r("name")]),
                        ),
                    ]),
                ]),
            ),
        ]),
    );
}
