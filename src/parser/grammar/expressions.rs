//! Expressions
//!
//! Binary operators are a flat table of levels, loosest first. Each level
//! is one rule folding operands of the next tighter rule:
//!
//! ```text
//! expr_assign   =  +=  -=  ...        right
//! expr_range    ..  ..=               (hand-written, see `range`)
//! expr_or       ||                    left
//! expr_and      &&                    left
//! expr_cmp      ==  !=  <  >  <= >=   non-chaining
//! expr_bitor    |                     left
//! expr_bitxor   ^                     left
//! expr_bitand   &                     left
//! expr_shift    <<  >>                left
//! expr_add      +  -                  left
//! expr_mul      *  /  %               left
//! expr_cast     as                    left
//! expr_unary    -  !  *  &  &mut      prefix
//! expr_postfix  .f  .m()  ()  []  ?  .await
//! expr_primary
//! ```
//!
//! Two flags thread through the ladder: `NO_STRUCT` forbids struct
//! literals (in `if`/`while`/`match`/`for` heads, where `{` opens the body)
//! and `LET_ALLOWED` permits `let` in conditions. Every delimiter resets
//! both.

use super::{attrs, reset, scrutinee};
use crate::parser::engine::GrammarBuilder;
use crate::parser::engine::term::*;
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    /// At most one operator: `a == b == c` is an error
    NonChaining,
}

/// One rung of the binary operator ladder
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub rule: &'static str,
    /// The tighter rule supplying operands
    pub next: &'static str,
    pub ops: &'static [SyntaxKind],
    pub assoc: Assoc,
}

pub const ASSIGN_OPS: &[SyntaxKind] = &[
    EQ, PLUS_EQ, MINUS_EQ, STAR_EQ, SLASH_EQ, PERCENT_EQ, CARET_EQ, AMP_EQ, PIPE_EQ, SHL_EQ,
    SHR_EQ,
];

pub const COMPARISON_OPS: &[SyntaxKind] = &[EQ_EQ, BANG_EQ, LT, GT, LT_EQ, GT_EQ];

pub const BINARY_LEVELS: &[Level] = &[
    Level { rule: "expr_assign", next: "expr_range", ops: ASSIGN_OPS, assoc: Assoc::Right },
    Level { rule: "expr_or", next: "expr_and", ops: &[PIPE_PIPE], assoc: Assoc::Left },
    Level { rule: "expr_and", next: "expr_cmp", ops: &[AMP_AMP], assoc: Assoc::Left },
    Level {
        rule: "expr_cmp",
        next: "expr_bitor",
        ops: COMPARISON_OPS,
        assoc: Assoc::NonChaining,
    },
    Level { rule: "expr_bitor", next: "expr_bitxor", ops: &[PIPE], assoc: Assoc::Left },
    Level { rule: "expr_bitxor", next: "expr_bitand", ops: &[CARET], assoc: Assoc::Left },
    Level { rule: "expr_bitand", next: "expr_shift", ops: &[AMP], assoc: Assoc::Left },
    Level { rule: "expr_shift", next: "expr_add", ops: &[SHL, SHR], assoc: Assoc::Left },
    Level { rule: "expr_add", next: "expr_mul", ops: &[PLUS, MINUS], assoc: Assoc::Left },
    Level { rule: "expr_mul", next: "expr_cast", ops: &[STAR, SLASH, PERCENT], assoc: Assoc::Left },
];

/// Every ladder rule, loosest first
pub const LADDER: &[&str] = &[
    "expr_assign",
    "expr_range",
    "expr_or",
    "expr_and",
    "expr_cmp",
    "expr_bitor",
    "expr_bitxor",
    "expr_bitand",
    "expr_shift",
    "expr_add",
    "expr_mul",
    "expr_cast",
    "expr_unary",
    "expr_postfix",
    "expr_primary",
];

pub(super) fn define(g: &mut GrammarBuilder) {
    g.rule("expr", r("expr_assign")).label("expression");

    for level in BINARY_LEVELS {
        g.rule(level.rule, binary(level));
    }
    range(g);
    unary(g);
    postfix(g);
    primary(g);
    blocks(g);
    control_flow(g);
    closures(g);
    records(g);
}

fn binary(level: &Level) -> Term {
    let op = any_of(level.ops);
    match level.assoc {
        Assoc::Left => fold(r(level.next), [tail(BIN_EXPR, seq([op, r(level.next)]))], None),
        Assoc::NonChaining => {
            fold(r(level.next), [tail(BIN_EXPR, seq([op, r(level.next)]))], Some(1))
        }
        Assoc::Right => fold(r(level.next), [tail(BIN_EXPR, seq([op, r(level.rule)]))], Some(1)),
    }
}

fn range(g: &mut GrammarBuilder) {
    // `x..{` in a loop head is a half-open range followed by the body
    let rhs = || {
        seq([
            choice([unless(Flags::NO_STRUCT, empty()), not(tok(L_BRACE))]),
            r("expr_or"),
        ])
    };
    g.rule(
        "expr_range",
        choice([
            node(RANGE_TO_EXPR, seq([any_of(&[DOT_DOT_EQ, DOT_DOT]), rhs()])),
            node(RANGE_FULL_EXPR, tok(DOT_DOT)),
            fold(
                r("expr_or"),
                [
                    tail(RANGE_EXPR, seq([any_of(&[DOT_DOT_EQ, DOT_DOT]), rhs()])),
                    tail(RANGE_FROM_EXPR, tok(DOT_DOT)),
                ],
                Some(1),
            ),
        ]),
    );
}

fn unary(g: &mut GrammarBuilder) {
    g.rule(
        "expr_cast",
        fold(
            r("expr_unary"),
            [tail(CAST_EXPR, seq([tok(AS_KW), r("type_no_bounds")]))],
            None,
        ),
    );
    g.rule(
        "expr_unary",
        choice([
            node(
                PREFIX_EXPR,
                seq([any_of(&[MINUS, BANG, STAR]), r("expr_unary")]),
            ),
            node(
                REF_EXPR,
                seq([
                    split(AMP),
                    opt(choice([
                        seq([contextual("raw"), any_of(&[CONST_KW, MUT_KW])]),
                        tok(MUT_KW),
                    ])),
                    r("expr_unary"),
                ]),
            ),
            r("expr_postfix"),
        ]),
    );
}

fn postfix(g: &mut GrammarBuilder) {
    g.rule(
        "expr_postfix",
        fold(
            r("expr_primary"),
            [
                tail(
                    METHOD_CALL_EXPR,
                    seq([
                        tok(DOT),
                        node(NAME_REF, r("ident")),
                        opt(seq([tok(COLON_COLON), r("generic_args")])),
                        r("arg_list"),
                    ]),
                ),
                tail(AWAIT_EXPR, seq([tok(DOT), tok(AWAIT_KW)])),
                tail(
                    FIELD_EXPR,
                    seq([
                        tok(DOT),
                        node(NAME_REF, any_of(&[IDENT, RAW_IDENT, INT_NUMBER])),
                    ]),
                ),
                tail(CALL_EXPR, r("arg_list")),
                tail(
                    INDEX_EXPR,
                    seq([tok(L_BRACKET), reset(r("expr")), tok(R_BRACKET)]),
                ),
                tail(TRY_EXPR, tok(QUESTION)),
            ],
            None,
        ),
    );
    g.node(
        "arg_list",
        ARG_LIST,
        seq([
            tok(L_PAREN),
            reset(opt(list(r("expr"), COMMA))),
            tok(R_PAREN),
        ]),
    )
    .context(ParseContext::ArgumentList);
}

fn primary(g: &mut GrammarBuilder) {
    g.rule(
        "expr_primary",
        choice([
            r("literal"),
            node(
                PAREN_EXPR,
                seq([tok(L_PAREN), reset(r("expr")), tok(R_PAREN)]),
            ),
            node(
                TUPLE_EXPR,
                seq([
                    tok(L_PAREN),
                    reset(opt(seq([
                        r("expr"),
                        tok(COMMA),
                        opt(list(r("expr"), COMMA)),
                    ]))),
                    tok(R_PAREN),
                ]),
            ),
            node(
                ARRAY_EXPR,
                seq([
                    tok(L_BRACKET),
                    reset(opt(choice([
                        seq([r("expr"), tok(SEMICOLON), r("expr")]),
                        list(r("expr"), COMMA),
                    ]))),
                    tok(R_BRACKET),
                ]),
            ),
            r("block_like_expr"),
            r("closure_expr"),
            node(RETURN_EXPR, seq([tok(RETURN_KW), opt(r("expr"))])),
            node(
                BREAK_EXPR,
                seq([tok(BREAK_KW), opt(tok(LIFETIME)), opt(r("expr"))]),
            ),
            node(CONTINUE_EXPR, seq([tok(CONTINUE_KW), opt(tok(LIFETIME))])),
            when(
                Flags::LET_ALLOWED,
                node(
                    LET_EXPR,
                    seq([tok(LET_KW), r("pattern"), tok(EQ), r("expr_cmp")]),
                ),
            ),
            r("macro_call"),
            unless(Flags::NO_STRUCT, r("record_expr")),
            node(PATH_EXPR, r("expr_path")),
        ]),
    )
    .label("expression");

    g.node(
        "literal",
        LITERAL,
        any_of(&[
            INT_NUMBER,
            FLOAT_NUMBER,
            STRING,
            RAW_STRING,
            BYTE_STRING,
            RAW_BYTE_STRING,
            CHAR,
            BYTE,
            TRUE_KW,
            FALSE_KW,
        ]),
    )
    .label("literal");
}

fn blocks(g: &mut GrammarBuilder) {
    g.rule(
        "block_body",
        seq([
            tok(L_BRACE),
            reset(seq([
                star(r("inner_attr")),
                star(r("stmt")),
                opt(r("expr")),
            ])),
            tok(R_BRACE),
        ]),
    )
    .context(ParseContext::Block);

    g.node("block", BLOCK_EXPR, r("block_body")).label("block");
    g.node(
        "block_expr",
        BLOCK_EXPR,
        seq([
            opt(r("label")),
            opt(choice([
                tok(UNSAFE_KW),
                seq([tok(ASYNC_KW), opt(tok(MOVE_KW))]),
                tok(CONST_KW),
            ])),
            r("block_body"),
        ]),
    );

    // Expressions that end in a block and may stand as statements
    // without a trailing `;`
    g.rule(
        "block_like_expr",
        choice([
            r("if_expr"),
            r("match_expr"),
            r("loop_expr"),
            r("while_expr"),
            r("for_expr"),
            r("block_expr"),
        ]),
    );
}

fn control_flow(g: &mut GrammarBuilder) {
    g.rule(
        "condition",
        with_flags(Flags::NO_STRUCT | Flags::LET_ALLOWED, r("expr")),
    );

    g.node(
        "if_expr",
        IF_EXPR,
        seq([
            tok(IF_KW),
            r("condition"),
            r("block"),
            opt(seq([tok(ELSE_KW), choice([r("if_expr"), r("block")])])),
        ]),
    );
    g.node(
        "loop_expr",
        LOOP_EXPR,
        seq([opt(r("label")), tok(LOOP_KW), r("block")]),
    );
    g.node(
        "while_expr",
        WHILE_EXPR,
        seq([opt(r("label")), tok(WHILE_KW), r("condition"), r("block")]),
    );
    g.node(
        "for_expr",
        FOR_EXPR,
        seq([
            opt(r("label")),
            tok(FOR_KW),
            r("pattern"),
            tok(IN_KW),
            scrutinee(r("expr")),
            r("block"),
        ]),
    );

    g.node(
        "match_expr",
        MATCH_EXPR,
        seq([tok(MATCH_KW), scrutinee(r("expr")), r("match_arm_list")]),
    );
    g.node(
        "match_arm_list",
        MATCH_ARM_LIST,
        seq([
            tok(L_BRACE),
            reset(seq([star(r("inner_attr")), star(r("match_arm"))])),
            tok(R_BRACE),
        ]),
    );
    g.node(
        "match_arm",
        MATCH_ARM,
        seq([
            attrs(),
            r("pattern"),
            opt(node(
                MATCH_GUARD,
                seq([tok(IF_KW), with_flags(Flags::LET_ALLOWED, r("expr"))]),
            )),
            tok(FAT_ARROW),
            choice([
                seq([r("expr"), tok(COMMA)]),
                seq([r("expr"), and(tok(R_BRACE))]),
                seq([r("block_like_expr"), opt(tok(COMMA))]),
            ]),
        ]),
    )
    .context(ParseContext::MatchArm);
}

fn closures(g: &mut GrammarBuilder) {
    g.node(
        "closure_expr",
        CLOSURE_EXPR,
        seq([
            opt(seq([tok(FOR_KW), r("generic_params")])),
            opt(tok(STATIC_KW)),
            opt(tok(ASYNC_KW)),
            opt(tok(MOVE_KW)),
            node(
                PARAM_LIST,
                choice([
                    tok(PIPE_PIPE),
                    seq([
                        tok(PIPE),
                        opt(list(r("closure_param"), COMMA)),
                        tok(PIPE),
                    ]),
                ]),
            ),
            // an explicit return type requires a block body
            choice([seq([r("ret_type_no_bounds"), r("block")]), r("expr")]),
        ]),
    )
    .context(ParseContext::Closure);
    g.node(
        "closure_param",
        PARAM,
        seq([
            attrs(),
            r("pat_single"),
            opt(seq([tok(COLON), r("type")])),
        ]),
    );
}

fn records(g: &mut GrammarBuilder) {
    g.node(
        "record_expr",
        RECORD_EXPR,
        seq([r("expr_path"), r("record_expr_field_list")]),
    );
    g.node(
        "record_expr_field_list",
        RECORD_EXPR_FIELD_LIST,
        seq([
            tok(L_BRACE),
            reset(seq([
                star(seq([r("record_expr_field"), tok(COMMA)])),
                opt(choice([
                    seq([tok(DOT_DOT), opt(r("expr"))]),
                    r("record_expr_field"),
                ])),
            ])),
            tok(R_BRACE),
        ]),
    )
    .context(ParseContext::StructLiteral);
    g.node(
        "record_expr_field",
        RECORD_EXPR_FIELD,
        seq([
            attrs(),
            choice([
                seq([
                    node(NAME_REF, any_of(&[IDENT, RAW_IDENT, INT_NUMBER])),
                    tok(COLON),
                    r("expr"),
                ]),
                node(NAME_REF, r("ident")),
            ]),
        ]),
    );
}
