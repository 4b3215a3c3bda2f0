//! Expression and statement nodes

use super::*;

ast_enum!(
    /// Any expression
    Expr {
        Literal,
        PathExpr,
        TupleExpr,
        ArrayExpr,
        ParenExpr,
        BlockExpr,
        ClosureExpr,
        IfExpr,
        LetExpr,
        LoopExpr,
        WhileExpr,
        ForExpr,
        BreakExpr,
        ContinueExpr,
        ReturnExpr,
        MatchExpr,
        RecordExpr,
        CallExpr,
        MethodCallExpr,
        FieldExpr,
        AwaitExpr,
        TryExpr,
        IndexExpr,
        CastExpr,
        PrefixExpr,
        RefExpr,
        BinExpr,
        RangeExpr,
        MacroCall,
    }
);

impl Expr {
    /// Ends in a block and may stand as a statement without `;`
    pub fn is_block_like(&self) -> bool {
        matches!(
            self,
            Expr::BlockExpr(_)
                | Expr::IfExpr(_)
                | Expr::MatchExpr(_)
                | Expr::LoopExpr(_)
                | Expr::WhileExpr(_)
                | Expr::ForExpr(_)
        )
    }
}

// ============================================================================
// Literals and paths
// ============================================================================

ast_node!(Literal, LITERAL);

/// What kind of literal token a `Literal` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    RawString,
    ByteString,
    RawByteString,
    Char,
    Byte,
    Bool(bool),
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_significant_child_token(&self.0)
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        let kind = match self.token()?.kind() {
            SyntaxKind::INT_NUMBER => LiteralKind::Int,
            SyntaxKind::FLOAT_NUMBER => LiteralKind::Float,
            SyntaxKind::STRING => LiteralKind::String,
            SyntaxKind::RAW_STRING => LiteralKind::RawString,
            SyntaxKind::BYTE_STRING => LiteralKind::ByteString,
            SyntaxKind::RAW_BYTE_STRING => LiteralKind::RawByteString,
            SyntaxKind::CHAR => LiteralKind::Char,
            SyntaxKind::BYTE => LiteralKind::Byte,
            SyntaxKind::TRUE_KW => LiteralKind::Bool(true),
            SyntaxKind::FALSE_KW => LiteralKind::Bool(false),
            _ => return None,
        };
        Some(kind)
    }
}

ast_node!(PathExpr, PATH_EXPR);

impl PathExpr {
    first_child_method!(path, Path);
}

// ============================================================================
// Operators
// ============================================================================

/// Binary operators, compound assignment included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    ShrAssign,
}

impl BinaryOp {
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::SubAssign
                | BinaryOp::MulAssign
                | BinaryOp::DivAssign
                | BinaryOp::RemAssign
                | BinaryOp::BitAndAssign
                | BinaryOp::BitOrAssign
                | BinaryOp::BitXorAssign
                | BinaryOp::ShlAssign
                | BinaryOp::ShrAssign
        )
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }
}

ast_node!(BinExpr, BIN_EXPR);

impl BinExpr {
    first_child_method!(lhs, Expr);
    nth_child_method!(rhs, Expr, 1);

    /// The operator token, between the operands
    pub fn op_token(&self) -> Option<SyntaxToken> {
        first_significant_child_token(&self.0)
    }

    token_to_enum_method!(op, BinaryOp, [
        PLUS => Add,
        MINUS => Sub,
        STAR => Mul,
        SLASH => Div,
        PERCENT => Rem,
        AMP => BitAnd,
        PIPE => BitOr,
        CARET => BitXor,
        SHL => Shl,
        SHR => Shr,
        AMP_AMP => And,
        PIPE_PIPE => Or,
        EQ_EQ => Eq,
        BANG_EQ => Ne,
        LT => Lt,
        LT_EQ => Le,
        GT => Gt,
        GT_EQ => Ge,
        EQ => Assign,
        PLUS_EQ => AddAssign,
        MINUS_EQ => SubAssign,
        STAR_EQ => MulAssign,
        SLASH_EQ => DivAssign,
        PERCENT_EQ => RemAssign,
        AMP_EQ => BitAndAssign,
        PIPE_EQ => BitOrAssign,
        CARET_EQ => BitXorAssign,
        SHL_EQ => ShlAssign,
        SHR_EQ => ShrAssign,
    ]);
}

/// Prefix operators other than borrows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    Deref,
}

ast_node!(PrefixExpr, PREFIX_EXPR);

impl PrefixExpr {
    first_child_method!(expr, Expr);

    token_to_enum_method!(op, UnaryOp, [
        MINUS => Neg,
        BANG => Not,
        STAR => Deref,
    ]);
}

ast_node!(RefExpr, REF_EXPR);

impl RefExpr {
    first_child_method!(expr, Expr);
    has_token_method!(is_mut, MUT_KW, "&mut x");

    /// `&raw const x` and `&raw mut x`
    pub fn is_raw(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::IDENT && t.text() == "raw")
    }
}

ast_node!(CastExpr, CAST_EXPR);

impl CastExpr {
    first_child_method!(expr, Expr);
    child_after_token_method!(ty, Type, AS_KW);
}

ast_node!(
    RangeExpr,
    [RANGE_EXPR, RANGE_FROM_EXPR, RANGE_TO_EXPR, RANGE_FULL_EXPR]
);

impl RangeExpr {
    /// `a` in `a..b` and `a..`
    pub fn start(&self) -> Option<Expr> {
        match self.0.kind() {
            SyntaxKind::RANGE_EXPR | SyntaxKind::RANGE_FROM_EXPR => {
                self.0.children().find_map(Expr::cast)
            }
            _ => None,
        }
    }

    /// `b` in `a..b` and `..b`
    pub fn end(&self) -> Option<Expr> {
        match self.0.kind() {
            SyntaxKind::RANGE_EXPR => self.0.children().filter_map(Expr::cast).nth(1),
            SyntaxKind::RANGE_TO_EXPR => self.0.children().find_map(Expr::cast),
            _ => None,
        }
    }

    has_token_method!(is_inclusive, DOT_DOT_EQ, "a..=b");
}

// ============================================================================
// Postfix
// ============================================================================

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    // The callee
    first_child_method!(expr, Expr);
    first_child_method!(arg_list, ArgList);
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    children_method!(args, Expr);
}

ast_node!(MethodCallExpr, METHOD_CALL_EXPR);

impl MethodCallExpr {
    first_child_method!(receiver, Expr);
    first_child_method!(name_ref, NameRef);
    first_child_method!(generic_arg_list, GenericArgList);
    first_child_method!(arg_list, ArgList);
}

ast_node!(FieldExpr, FIELD_EXPR);

impl FieldExpr {
    first_child_method!(expr, Expr);
    // A name, or an index for tuple fields
    first_child_method!(name_ref, NameRef);
}

ast_node!(AwaitExpr, AWAIT_EXPR);

impl AwaitExpr {
    first_child_method!(expr, Expr);
}

ast_node!(TryExpr, TRY_EXPR);

impl TryExpr {
    first_child_method!(expr, Expr);
}

ast_node!(IndexExpr, INDEX_EXPR);

impl IndexExpr {
    first_child_method!(base, Expr);
    nth_child_method!(index, Expr, 1);
}

// ============================================================================
// Compound and atomic
// ============================================================================

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    first_child_method!(expr, Expr);
}

ast_node!(TupleExpr, TUPLE_EXPR);

impl TupleExpr {
    children_method!(fields, Expr);
}

ast_node!(ArrayExpr, ARRAY_EXPR);

impl ArrayExpr {
    children_method!(elements, Expr);

    /// `[x; N]`
    pub fn is_repeat(&self) -> bool {
        has_token(&self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(RecordExpr, RECORD_EXPR);

impl RecordExpr {
    first_child_method!(path, Path);
    first_child_method!(field_list, RecordExprFieldList);
}

ast_node!(RecordExprFieldList, RECORD_EXPR_FIELD_LIST);

impl RecordExprFieldList {
    children_method!(fields, RecordExprField);

    /// `..base` functional update source
    pub fn spread(&self) -> Option<Expr> {
        if has_token(&self.0, SyntaxKind::DOT_DOT) {
            self.0.children().find_map(Expr::cast)
        } else {
            None
        }
    }
}

ast_node!(RecordExprField, RECORD_EXPR_FIELD);

impl RecordExprField {
    first_child_method!(name_ref, NameRef);
    // `None` for shorthand `Foo { x }`
    first_child_method!(expr, Expr);
}

ast_node!(ClosureExpr, CLOSURE_EXPR);

impl ClosureExpr {
    first_child_method!(param_list, ParamList);
    first_child_method!(ret_type, RetType);
    first_child_method!(body, Expr);
    has_token_method!(is_move, MOVE_KW, "move || x");
    has_token_method!(is_async, ASYNC_KW, "async || x");
}

ast_node!(ReturnExpr, RETURN_EXPR);

impl ReturnExpr {
    first_child_method!(expr, Expr);
}

ast_node!(BreakExpr, BREAK_EXPR);

impl BreakExpr {
    token_method!(lifetime, LIFETIME);
    first_child_method!(expr, Expr);
}

ast_node!(ContinueExpr, CONTINUE_EXPR);

impl ContinueExpr {
    token_method!(lifetime, LIFETIME);
}

// ============================================================================
// Blocks and control flow
// ============================================================================

ast_node!(BlockExpr, BLOCK_EXPR);

impl BlockExpr {
    first_child_method!(label, Label);
    children_method!(statements, Stmt);
    has_token_method!(is_unsafe, UNSAFE_KW, "unsafe { }");
    has_token_method!(is_async, ASYNC_KW, "async { }");
    has_token_method!(is_const, CONST_KW, "const { }");

    /// The value of the block.
    ///
    /// A trailing block-like statement without `;` is the value too:
    /// `{ if a { 1 } else { 2 } }` evaluates to the `if`.
    pub fn tail_expr(&self) -> Option<Expr> {
        if let Some(expr) = self.0.children().find_map(Expr::cast) {
            return Some(expr);
        }
        match self.statements().last()? {
            Stmt::ExprStmt(stmt) if !stmt.has_semicolon() => stmt.expr(),
            _ => None,
        }
    }
}

ast_node!(IfExpr, IF_EXPR);

impl IfExpr {
    // The condition, possibly a `let` chain
    first_child_method!(condition, Expr);

    pub fn then_branch(&self) -> Option<BlockExpr> {
        match self.0.children().filter_map(Expr::cast).nth(1)? {
            Expr::BlockExpr(block) => Some(block),
            _ => None,
        }
    }

    // The `else` block or the nested `else if`
    child_after_token_method!(else_branch, Expr, ELSE_KW);
}

ast_node!(LetExpr, LET_EXPR);

impl LetExpr {
    first_child_method!(pat, Pat);
    child_after_token_method!(expr, Expr, EQ);
}

ast_node!(LoopExpr, LOOP_EXPR);

impl LoopExpr {
    first_child_method!(label, Label);
    first_child_method!(body, BlockExpr);
}

ast_node!(WhileExpr, WHILE_EXPR);

impl WhileExpr {
    first_child_method!(label, Label);
    first_child_method!(condition, Expr);

    pub fn body(&self) -> Option<BlockExpr> {
        self.0.children().filter_map(BlockExpr::cast).last()
    }
}

ast_node!(ForExpr, FOR_EXPR);

impl ForExpr {
    first_child_method!(label, Label);
    first_child_method!(pat, Pat);
    // The iterated expression
    child_after_token_method!(iterable, Expr, IN_KW);

    pub fn body(&self) -> Option<BlockExpr> {
        self.0.children().filter_map(BlockExpr::cast).last()
    }
}

ast_node!(MatchExpr, MATCH_EXPR);

impl MatchExpr {
    // The scrutinee
    first_child_method!(expr, Expr);
    first_child_method!(arm_list, MatchArmList);

    pub fn arms(&self) -> Vec<MatchArm> {
        self.arm_list()
            .map(|list| list.arms().collect())
            .unwrap_or_default()
    }
}

ast_node!(MatchArmList, MATCH_ARM_LIST);

impl MatchArmList {
    children_method!(arms, MatchArm);
}

ast_node!(MatchArm, MATCH_ARM);

impl MatchArm {
    first_child_method!(pat, Pat);
    first_child_method!(guard, MatchGuard);
    // The arm's value
    child_after_token_method!(expr, Expr, FAT_ARROW);
}

ast_node!(MatchGuard, MATCH_GUARD);

impl MatchGuard {
    first_child_method!(condition, Expr);
}

// ============================================================================
// Statements
// ============================================================================

/// A statement inside a block
///
/// Macro calls in a block are always wrapped in an `EXPR_STMT`, so a bare
/// `MACRO_CALL` child is the block's tail expression and not an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    LetStmt(LetStmt),
    ExprStmt(ExprStmt),
    Item(Item),
}

impl AstNode for Stmt {
    fn can_cast(kind: SyntaxKind) -> bool {
        LetStmt::can_cast(kind)
            || ExprStmt::can_cast(kind)
            || (Item::can_cast(kind) && kind != SyntaxKind::MACRO_CALL)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::LET_STMT => LetStmt::cast(node).map(Stmt::LetStmt),
            SyntaxKind::EXPR_STMT => ExprStmt::cast(node).map(Stmt::ExprStmt),
            SyntaxKind::MACRO_CALL => None,
            _ => Item::cast(node).map(Stmt::Item),
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Stmt::LetStmt(it) => it.syntax(),
            Stmt::ExprStmt(it) => it.syntax(),
            Stmt::Item(it) => it.syntax(),
        }
    }
}

ast_node!(LetStmt, LET_STMT);

impl LetStmt {
    first_child_method!(pat, Pat);
    child_after_token_method!(ty, Type, COLON);
    child_after_token_method!(initializer, Expr, EQ);
    first_child_method!(let_else, LetElse);
}

ast_node!(LetElse, LET_ELSE);

impl LetElse {
    first_child_method!(block, BlockExpr);
}

ast_node!(ExprStmt, EXPR_STMT);

impl ExprStmt {
    first_child_method!(expr, Expr);

    pub fn has_semicolon(&self) -> bool {
        has_token(&self.0, SyntaxKind::SEMICOLON)
    }
}
