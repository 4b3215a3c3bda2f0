//! Names, attributes, visibility, token trees and macros

use super::{attrs, vis};
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::*;

pub(super) fn define(g: &mut GrammarBuilder) {
    names(g);
    attributes(g);
    visibility(g);
    token_trees(g);
    macros(g);
}

fn names(g: &mut GrammarBuilder) {
    g.rule("ident", any_of(&[IDENT, RAW_IDENT]));
    g.node("name", NAME, r("ident")).label("identifier");
    g.node(
        "name_ref",
        NAME_REF,
        choice([
            r("ident"),
            any_of(&[SELF_KW, SUPER_KW, CRATE_KW, SELF_TYPE_KW]),
            seq([tok(DOLLAR), tok(CRATE_KW)]),
        ]),
    )
    .label("identifier");
    g.node("label", LABEL, seq([tok(LIFETIME), tok(COLON)]));
}

fn attributes(g: &mut GrammarBuilder) {
    g.node(
        "outer_attr",
        ATTR,
        seq([tok(POUND), tok(L_BRACKET), r("meta"), tok(R_BRACKET)]),
    )
    .context(ParseContext::Attribute);
    g.node(
        "inner_attr",
        INNER_ATTR,
        seq([tok(POUND), tok(BANG), tok(L_BRACKET), r("meta"), tok(R_BRACKET)]),
    )
    .context(ParseContext::Attribute);
    g.rule("attrs", star(r("outer_attr")));

    // #[path], #[path(tokens)], #[path = expr], #[unsafe(path ...)]
    let meta_body = seq([
        r("simple_path"),
        opt(choice([r("token_tree"), seq([tok(EQ), r("expr")])])),
    ]);
    g.node(
        "meta",
        META,
        choice([
            seq([tok(UNSAFE_KW), tok(L_PAREN), meta_body.clone(), tok(R_PAREN)]),
            meta_body,
        ]),
    );
}

fn visibility(g: &mut GrammarBuilder) {
    g.node(
        "visibility",
        VISIBILITY,
        choice([
            seq([
                tok(PUB_KW),
                tok(L_PAREN),
                choice([
                    any_of(&[CRATE_KW, SELF_KW, SUPER_KW]),
                    seq([tok(IN_KW), r("simple_path")]),
                ]),
                tok(R_PAREN),
            ]),
            tok(PUB_KW),
            // 2015 `crate` visibility, not the start of a `crate::` path
            seq([tok(CRATE_KW), not(tok(COLON_COLON))]),
        ]),
    );
}

fn token_trees(g: &mut GrammarBuilder) {
    g.node(
        "token_tree",
        TOKEN_TREE,
        choice([
            seq([tok(L_PAREN), star(r("tt")), tok(R_PAREN)]),
            seq([tok(L_BRACKET), star(r("tt")), tok(R_BRACKET)]),
            seq([tok(L_BRACE), star(r("tt")), tok(R_BRACE)]),
        ]),
    );
    g.rule("tt", choice([r("token_tree"), any_token()]))
        .label("token");
}

fn macros(g: &mut GrammarBuilder) {
    g.rule("macro_args", r("token_tree"))
        .context(ParseContext::MacroCall);

    // expression, pattern and type position: `path!(...)`
    g.node(
        "macro_call",
        MACRO_CALL,
        seq([r("simple_path"), tok(BANG), r("macro_args")]),
    );
    // a statement `path! { ... }` needs no semicolon
    g.node(
        "braced_macro_call",
        MACRO_CALL,
        seq([r("simple_path"), tok(BANG), and(tok(L_BRACE)), r("macro_args")]),
    );
    g.node(
        "macro_call_item",
        MACRO_CALL,
        seq([
            attrs(),
            r("simple_path"),
            tok(BANG),
            choice([
                seq([and(tok(L_BRACE)), r("macro_args")]),
                seq([r("macro_args"), tok(SEMICOLON)]),
            ]),
        ]),
    );

    let rules = |open, close| {
        seq([
            tok(open),
            opt(seq([
                r("macro_rule"),
                star(seq([tok(SEMICOLON), r("macro_rule")])),
                opt(tok(SEMICOLON)),
            ])),
            tok(close),
        ])
    };
    g.node(
        "macro_rules",
        MACRO_RULES,
        seq([
            attrs(),
            vis(),
            contextual("macro_rules"),
            tok(BANG),
            r("name"),
            choice([
                rules(L_BRACE, R_BRACE),
                seq([rules(L_PAREN, R_PAREN), tok(SEMICOLON)]),
                seq([rules(L_BRACKET, R_BRACKET), tok(SEMICOLON)]),
            ]),
        ]),
    )
    .context(ParseContext::MacroRules);
    g.node(
        "macro_rule",
        MACRO_RULE,
        seq([
            node(MACRO_MATCHER, r("token_tree")),
            tok(FAT_ARROW),
            node(MACRO_TRANSCRIBER, r("token_tree")),
        ]),
    );
}
