//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Token kinds come first (trivia, literals, punctuation, keywords), node
//! kinds follow, grouped the way the grammar modules are.

/// All syntax kinds (tokens and nodes) of Rust source text
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (items, expressions, patterns, types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    INNER_DOC_COMMENT, // //! or /*!
    OUTER_DOC_COMMENT, // /// or /**
    SHEBANG,           // #!/usr/bin/env ...

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,           // identifier
    RAW_IDENT,       // r#ident
    LIFETIME,        // 'a
    INT_NUMBER,      // 42, 0xFFu8
    FLOAT_NUMBER,    // 3.14, 1e10f64
    STRING,          // "hello"
    RAW_STRING,      // r#"hello"#
    BYTE_STRING,     // b"hello"
    RAW_BYTE_STRING, // br"hello"
    CHAR,            // 'c'
    BYTE,            // b'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COMMA,       // ,
    DOT,         // .
    DOT_DOT,     // ..
    DOT_DOT_DOT, // ...
    DOT_DOT_EQ,  // ..=
    COLON,       // :
    COLON_COLON, // ::
    EQ,          // =
    EQ_EQ,       // ==
    FAT_ARROW,   // =>
    BANG,        // !
    BANG_EQ,     // !=
    LT,          // <
    LT_EQ,       // <=
    SHL,         // <<
    SHL_EQ,      // <<=
    GT,          // >
    GT_EQ,       // >=
    SHR,         // >>
    SHR_EQ,      // >>=
    MINUS,       // -
    MINUS_EQ,    // -=
    THIN_ARROW,  // ->
    PLUS,        // +
    PLUS_EQ,     // +=
    STAR,        // *
    STAR_EQ,     // *=
    SLASH,       // /
    SLASH_EQ,    // /=
    PERCENT,     // %
    PERCENT_EQ,  // %=
    CARET,       // ^
    CARET_EQ,    // ^=
    AMP,         // &
    AMP_AMP,     // &&
    AMP_EQ,      // &=
    PIPE,        // |
    PIPE_PIPE,   // ||
    PIPE_EQ,     // |=
    AT,          // @
    POUND,       // #
    DOLLAR,      // $
    QUESTION,    // ?
    TILDE,       // ~
    UNDERSCORE,  // _

    // =========================================================================
    // KEYWORDS (strict)
    // =========================================================================
    AS_KW,
    ASYNC_KW,
    AWAIT_KW,
    BREAK_KW,
    CONST_KW,
    CONTINUE_KW,
    CRATE_KW,
    DYN_KW,
    ELSE_KW,
    ENUM_KW,
    EXTERN_KW,
    FALSE_KW,
    FN_KW,
    FOR_KW,
    IF_KW,
    IMPL_KW,
    IN_KW,
    LET_KW,
    LOOP_KW,
    MATCH_KW,
    MOD_KW,
    MOVE_KW,
    MUT_KW,
    PUB_KW,
    REF_KW,
    RETURN_KW,
    SELF_KW,      // self
    SELF_TYPE_KW, // Self
    STATIC_KW,
    STRUCT_KW,
    SUPER_KW,
    TRAIT_KW,
    TRUE_KW,
    TYPE_KW,
    UNSAFE_KW,
    USE_KW,
    WHERE_KW,
    WHILE_KW,

    // =========================================================================
    // KEYWORDS (reserved for future use, never identifiers)
    // =========================================================================
    ABSTRACT_KW,
    BECOME_KW,
    BOX_KW,
    DO_KW,
    FINAL_KW,
    MACRO_KW,
    OVERRIDE_KW,
    PRIV_KW,
    TYPEOF_KW,
    UNSIZED_KW,
    VIRTUAL_KW,
    YIELD_KW,

    // End of input (empty text, carries trailing trivia)
    EOF,

    // =========================================================================
    // NODES: file, attributes, visibility, names
    // =========================================================================
    SOURCE_FILE,
    ATTR,       // #[...]
    INNER_ATTR, // #![...]
    META,       // path followed by token tree or `= expr`
    TOKEN_TREE,
    VISIBILITY,
    NAME,
    NAME_REF,
    LABEL, // 'outer:

    // =========================================================================
    // NODES: items
    // =========================================================================
    MODULE,
    ITEM_LIST,
    EXTERN_CRATE,
    RENAME,
    USE,
    USE_TREE,
    USE_TREE_LIST,
    FN,
    ABI,
    PARAM_LIST,
    PARAM,
    SELF_PARAM,
    RET_TYPE,
    TYPE_ALIAS,
    STRUCT,
    RECORD_FIELD_LIST,
    RECORD_FIELD,
    TUPLE_FIELD_LIST,
    TUPLE_FIELD,
    ENUM,
    VARIANT_LIST,
    VARIANT,
    UNION,
    CONST,
    STATIC,
    TRAIT,
    ASSOC_ITEM_LIST,
    IMPL,
    EXTERN_BLOCK,
    EXTERN_ITEM_LIST,
    MACRO_CALL,
    MACRO_RULES,
    MACRO_RULE,
    MACRO_MATCHER,
    MACRO_TRANSCRIBER,

    // Generics
    GENERIC_PARAM_LIST,
    LIFETIME_PARAM,
    TYPE_PARAM,
    CONST_PARAM,
    WHERE_CLAUSE,
    WHERE_PRED,
    TYPE_BOUND_LIST,
    TYPE_BOUND,
    FOR_LIFETIMES,

    // =========================================================================
    // NODES: paths
    // =========================================================================
    PATH,
    PATH_SEGMENT,
    QUALIFIED_PATH_TYPE, // <T as Trait>
    GENERIC_ARG_LIST,
    TYPE_ARG,
    LIFETIME_ARG,
    CONST_ARG,
    ASSOC_TYPE_ARG,
    PAREN_ARG_LIST, // Fn(A, B) -> C

    // =========================================================================
    // NODES: types
    // =========================================================================
    PATH_TYPE,
    TUPLE_TYPE,
    NEVER_TYPE,
    PTR_TYPE,
    REF_TYPE,
    ARRAY_TYPE,
    SLICE_TYPE,
    INFER_TYPE,
    FN_PTR_TYPE,
    IMPL_TRAIT_TYPE,
    DYN_TRAIT_TYPE,
    PAREN_TYPE,

    // =========================================================================
    // NODES: patterns
    // =========================================================================
    LITERAL_PAT,
    IDENT_PAT,
    WILDCARD_PAT,
    REST_PAT,
    RANGE_PAT,
    REF_PAT,
    RECORD_PAT,
    RECORD_PAT_FIELD_LIST,
    RECORD_PAT_FIELD,
    TUPLE_STRUCT_PAT,
    TUPLE_PAT,
    SLICE_PAT,
    PAREN_PAT,
    PATH_PAT,
    OR_PAT,

    // =========================================================================
    // NODES: expressions
    // =========================================================================
    LITERAL,
    PATH_EXPR,
    TUPLE_EXPR,
    ARRAY_EXPR,
    PAREN_EXPR,
    BLOCK_EXPR,
    CLOSURE_EXPR,
    IF_EXPR,
    LET_EXPR, // `let PAT = EXPR` in if/while conditions
    LOOP_EXPR,
    WHILE_EXPR,
    FOR_EXPR,
    BREAK_EXPR,
    CONTINUE_EXPR,
    RETURN_EXPR,
    MATCH_EXPR,
    MATCH_ARM_LIST,
    MATCH_ARM,
    MATCH_GUARD,
    RECORD_EXPR,
    RECORD_EXPR_FIELD_LIST,
    RECORD_EXPR_FIELD,
    CALL_EXPR,
    ARG_LIST,
    METHOD_CALL_EXPR,
    FIELD_EXPR,
    AWAIT_EXPR,
    TRY_EXPR,
    INDEX_EXPR,
    CAST_EXPR,
    PREFIX_EXPR,
    REF_EXPR,
    BIN_EXPR,
    RANGE_EXPR,      // a..b, a..=b
    RANGE_FROM_EXPR, // a..
    RANGE_TO_EXPR,   // ..b, ..=b
    RANGE_FULL_EXPR, // ..

    // =========================================================================
    // NODES: statements
    // =========================================================================
    EXPR_STMT,
    LET_STMT,
    LET_ELSE,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        (self as u16) <= (Self::SHEBANG as u16)
    }

    /// Check if this is a comment of any flavor
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::INNER_DOC_COMMENT | Self::OUTER_DOC_COMMENT
        )
    }

    /// Check if this is a keyword (strict or reserved)
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AS_KW as u16) && (self as u16) <= (Self::YIELD_KW as u16)
    }

    /// Check if this is a reserved keyword
    pub fn is_reserved_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::YIELD_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::UNDERSCORE as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        (self as u16) >= (Self::INT_NUMBER as u16) && (self as u16) <= (Self::BYTE as u16)
            || matches!(self, Self::TRUE_KW | Self::FALSE_KW)
    }

    /// Check if this is a token kind (as opposed to a node kind)
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Check if this is an opening delimiter of a token tree
    pub fn is_open_delim(self) -> bool {
        matches!(self, Self::L_PAREN | Self::L_BRACKET | Self::L_BRACE)
    }

    /// Check if this is a closing delimiter of a token tree
    pub fn is_close_delim(self) -> bool {
        matches!(self, Self::R_PAREN | Self::R_BRACKET | Self::R_BRACE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RustLanguage {}

impl rowan::Language for RustLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<RustLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<RustLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<RustLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<RustLanguage>;

/// Trivia-aware navigation on CST nodes.
///
/// Rowan's own `first_token`/`last_token` return whitespace and comments;
/// these skip them, along with the empty end-of-file token.
pub trait SyntaxNodeExt {
    /// First significant token covered by this node
    fn first_significant_token(&self) -> Option<SyntaxToken>;
    /// Last significant token covered by this node
    fn last_significant_token(&self) -> Option<SyntaxToken>;
    /// Significant tokens covered by this node, in order
    fn significant_tokens(&self) -> Vec<SyntaxToken>;
}

fn is_insignificant(kind: SyntaxKind) -> bool {
    kind.is_trivia() || kind == SyntaxKind::EOF
}

impl SyntaxNodeExt for SyntaxNode {
    fn first_significant_token(&self) -> Option<SyntaxToken> {
        let end = self.text_range().end();
        let mut token = self.first_token()?;
        while is_insignificant(token.kind()) {
            token = token.next_token()?;
            if token.text_range().start() >= end {
                return None;
            }
        }
        Some(token)
    }

    fn last_significant_token(&self) -> Option<SyntaxToken> {
        let start = self.text_range().start();
        let mut token = self.last_token()?;
        while is_insignificant(token.kind()) {
            token = token.prev_token()?;
            if token.text_range().end() <= start {
                return None;
            }
        }
        Some(token)
    }

    fn significant_tokens(&self) -> Vec<SyntaxToken> {
        self.descendants_with_tokens()
            .filter_map(|el| el.into_token())
            .filter(|t| !is_insignificant(t.kind()))
            .collect()
    }
}
