//! Statements
//!
//! A block is `{ stmt* expr? }`. Block-like expressions (`if`, `match`,
//! loops, blocks) and brace-delimited macro calls end a statement without
//! `;` unless a method call or `?` continues them. Anything else needs the
//! `;`, and a final expression without one is the block's value.

use super::attrs;
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::*;

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule(
        "stmt",
        choice([
            tok(SEMICOLON),
            r("item_in_block"),
            r("let_stmt"),
            node(
                EXPR_STMT,
                seq([
                    attrs(),
                    choice([r("block_like_expr"), r("braced_macro_call")]),
                    not(any_of(&[DOT, QUESTION])),
                    opt(tok(SEMICOLON)),
                ]),
            ),
            node(EXPR_STMT, seq([attrs(), r("expr"), tok(SEMICOLON)])),
        ]),
    )
    .label("statement");

    g.node(
        "let_stmt",
        LET_STMT,
        seq([
            attrs(),
            tok(LET_KW),
            r("pattern"),
            opt(seq([tok(COLON), r("type")])),
            opt(seq([
                tok(EQ),
                r("expr"),
                opt(node(LET_ELSE, seq([tok(ELSE_KW), r("block")]))),
            ])),
            tok(SEMICOLON),
        ]),
    )
    .context(ParseContext::LetStatement);
}
