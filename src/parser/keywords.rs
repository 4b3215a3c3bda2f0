//! Keyword and punctuator tables.
//!
//! Immutable, process-wide tables shared by the lexer, the grammar and the
//! diagnostics. Nothing here is ever mutated after compilation.

use super::syntax_kind::SyntaxKind;

/// Strict keywords of the 2018+ editions
pub const STRICT_KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("as", SyntaxKind::AS_KW),
    ("async", SyntaxKind::ASYNC_KW),
    ("await", SyntaxKind::AWAIT_KW),
    ("break", SyntaxKind::BREAK_KW),
    ("const", SyntaxKind::CONST_KW),
    ("continue", SyntaxKind::CONTINUE_KW),
    ("crate", SyntaxKind::CRATE_KW),
    ("dyn", SyntaxKind::DYN_KW),
    ("else", SyntaxKind::ELSE_KW),
    ("enum", SyntaxKind::ENUM_KW),
    ("extern", SyntaxKind::EXTERN_KW),
    ("false", SyntaxKind::FALSE_KW),
    ("fn", SyntaxKind::FN_KW),
    ("for", SyntaxKind::FOR_KW),
    ("if", SyntaxKind::IF_KW),
    ("impl", SyntaxKind::IMPL_KW),
    ("in", SyntaxKind::IN_KW),
    ("let", SyntaxKind::LET_KW),
    ("loop", SyntaxKind::LOOP_KW),
    ("match", SyntaxKind::MATCH_KW),
    ("mod", SyntaxKind::MOD_KW),
    ("move", SyntaxKind::MOVE_KW),
    ("mut", SyntaxKind::MUT_KW),
    ("pub", SyntaxKind::PUB_KW),
    ("ref", SyntaxKind::REF_KW),
    ("return", SyntaxKind::RETURN_KW),
    ("self", SyntaxKind::SELF_KW),
    ("Self", SyntaxKind::SELF_TYPE_KW),
    ("static", SyntaxKind::STATIC_KW),
    ("struct", SyntaxKind::STRUCT_KW),
    ("super", SyntaxKind::SUPER_KW),
    ("trait", SyntaxKind::TRAIT_KW),
    ("true", SyntaxKind::TRUE_KW),
    ("type", SyntaxKind::TYPE_KW),
    ("unsafe", SyntaxKind::UNSAFE_KW),
    ("use", SyntaxKind::USE_KW),
    ("where", SyntaxKind::WHERE_KW),
    ("while", SyntaxKind::WHILE_KW),
];

/// Keywords reserved for future use
pub const RESERVED_KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("abstract", SyntaxKind::ABSTRACT_KW),
    ("become", SyntaxKind::BECOME_KW),
    ("box", SyntaxKind::BOX_KW),
    ("do", SyntaxKind::DO_KW),
    ("final", SyntaxKind::FINAL_KW),
    ("macro", SyntaxKind::MACRO_KW),
    ("override", SyntaxKind::OVERRIDE_KW),
    ("priv", SyntaxKind::PRIV_KW),
    ("typeof", SyntaxKind::TYPEOF_KW),
    ("unsized", SyntaxKind::UNSIZED_KW),
    ("virtual", SyntaxKind::VIRTUAL_KW),
    ("yield", SyntaxKind::YIELD_KW),
];

/// Identifiers that act as keywords only in specific positions
pub const CONTEXTUAL_KEYWORDS: &[&str] = &["union", "auto", "default", "macro_rules", "raw"];

/// Keywords that may never follow `r#`
pub const RAW_IDENT_FORBIDDEN: &[&str] = &["crate", "self", "super", "Self"];

/// Punctuators, longest first within each shared prefix
pub const PUNCTUATORS: &[(&str, SyntaxKind)] = &[
    ("...", SyntaxKind::DOT_DOT_DOT),
    ("..=", SyntaxKind::DOT_DOT_EQ),
    ("<<=", SyntaxKind::SHL_EQ),
    (">>=", SyntaxKind::SHR_EQ),
    ("..", SyntaxKind::DOT_DOT),
    ("::", SyntaxKind::COLON_COLON),
    ("==", SyntaxKind::EQ_EQ),
    ("=>", SyntaxKind::FAT_ARROW),
    ("!=", SyntaxKind::BANG_EQ),
    ("<=", SyntaxKind::LT_EQ),
    ("<<", SyntaxKind::SHL),
    (">=", SyntaxKind::GT_EQ),
    (">>", SyntaxKind::SHR),
    ("-=", SyntaxKind::MINUS_EQ),
    ("->", SyntaxKind::THIN_ARROW),
    ("+=", SyntaxKind::PLUS_EQ),
    ("*=", SyntaxKind::STAR_EQ),
    ("/=", SyntaxKind::SLASH_EQ),
    ("%=", SyntaxKind::PERCENT_EQ),
    ("^=", SyntaxKind::CARET_EQ),
    ("&&", SyntaxKind::AMP_AMP),
    ("&=", SyntaxKind::AMP_EQ),
    ("||", SyntaxKind::PIPE_PIPE),
    ("|=", SyntaxKind::PIPE_EQ),
    ("{", SyntaxKind::L_BRACE),
    ("}", SyntaxKind::R_BRACE),
    ("[", SyntaxKind::L_BRACKET),
    ("]", SyntaxKind::R_BRACKET),
    ("(", SyntaxKind::L_PAREN),
    (")", SyntaxKind::R_PAREN),
    (";", SyntaxKind::SEMICOLON),
    (",", SyntaxKind::COMMA),
    (".", SyntaxKind::DOT),
    (":", SyntaxKind::COLON),
    ("=", SyntaxKind::EQ),
    ("!", SyntaxKind::BANG),
    ("<", SyntaxKind::LT),
    (">", SyntaxKind::GT),
    ("-", SyntaxKind::MINUS),
    ("+", SyntaxKind::PLUS),
    ("*", SyntaxKind::STAR),
    ("/", SyntaxKind::SLASH),
    ("%", SyntaxKind::PERCENT),
    ("^", SyntaxKind::CARET),
    ("&", SyntaxKind::AMP),
    ("|", SyntaxKind::PIPE),
    ("@", SyntaxKind::AT),
    ("#", SyntaxKind::POUND),
    ("$", SyntaxKind::DOLLAR),
    ("?", SyntaxKind::QUESTION),
    ("~", SyntaxKind::TILDE),
    ("_", SyntaxKind::UNDERSCORE),
];

/// Look up a keyword (strict or reserved) by its text
pub fn keyword_kind(text: &str) -> Option<SyntaxKind> {
    STRICT_KEYWORDS
        .iter()
        .chain(RESERVED_KEYWORDS)
        .find(|(kw, _)| *kw == text)
        .map(|(_, kind)| *kind)
}

/// Look up a punctuator by its exact text
pub fn punct_kind(text: &str) -> Option<SyntaxKind> {
    PUNCTUATORS
        .iter()
        .find(|(p, _)| *p == text)
        .map(|(_, kind)| *kind)
}

/// The fixed text of a keyword or punctuator kind
pub fn kind_text(kind: SyntaxKind) -> Option<&'static str> {
    STRICT_KEYWORDS
        .iter()
        .chain(RESERVED_KEYWORDS)
        .chain(PUNCTUATORS)
        .find(|(_, k)| *k == kind)
        .map(|(text, _)| *text)
}

/// Check if `text` is a keyword of any flavor
pub fn is_keyword(text: &str) -> bool {
    keyword_kind(text).is_some()
}

/// Human-readable name of a kind for diagnostics (`'fn'`, `';'`, `identifier`)
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        IDENT | RAW_IDENT => "identifier",
        LIFETIME => "lifetime",
        INT_NUMBER => "integer literal",
        FLOAT_NUMBER => "float literal",
        STRING | RAW_STRING => "string literal",
        BYTE_STRING | RAW_BYTE_STRING => "byte string literal",
        CHAR => "char literal",
        BYTE => "byte literal",
        EOF => "end of file",
        WHITESPACE => "whitespace",
        LINE_COMMENT | BLOCK_COMMENT | INNER_DOC_COMMENT | OUTER_DOC_COMMENT | SHEBANG => {
            "comment"
        }
        _ => quoted_text(kind).unwrap_or("syntax"),
    }
}

fn quoted_text(kind: SyntaxKind) -> Option<&'static str> {
    // Quoted forms are spelled out so diagnostics need no allocation
    const QUOTED: &[(SyntaxKind, &str)] = &[
        (SyntaxKind::L_BRACE, "'{'"),
        (SyntaxKind::R_BRACE, "'}'"),
        (SyntaxKind::L_BRACKET, "'['"),
        (SyntaxKind::R_BRACKET, "']'"),
        (SyntaxKind::L_PAREN, "'('"),
        (SyntaxKind::R_PAREN, "')'"),
        (SyntaxKind::SEMICOLON, "';'"),
        (SyntaxKind::COMMA, "','"),
        (SyntaxKind::DOT, "'.'"),
        (SyntaxKind::DOT_DOT, "'..'"),
        (SyntaxKind::DOT_DOT_DOT, "'...'"),
        (SyntaxKind::DOT_DOT_EQ, "'..='"),
        (SyntaxKind::COLON, "':'"),
        (SyntaxKind::COLON_COLON, "'::'"),
        (SyntaxKind::EQ, "'='"),
        (SyntaxKind::EQ_EQ, "'=='"),
        (SyntaxKind::FAT_ARROW, "'=>'"),
        (SyntaxKind::BANG, "'!'"),
        (SyntaxKind::BANG_EQ, "'!='"),
        (SyntaxKind::LT, "'<'"),
        (SyntaxKind::LT_EQ, "'<='"),
        (SyntaxKind::SHL, "'<<'"),
        (SyntaxKind::SHL_EQ, "'<<='"),
        (SyntaxKind::GT, "'>'"),
        (SyntaxKind::GT_EQ, "'>='"),
        (SyntaxKind::SHR, "'>>'"),
        (SyntaxKind::SHR_EQ, "'>>='"),
        (SyntaxKind::MINUS, "'-'"),
        (SyntaxKind::MINUS_EQ, "'-='"),
        (SyntaxKind::THIN_ARROW, "'->'"),
        (SyntaxKind::PLUS, "'+'"),
        (SyntaxKind::PLUS_EQ, "'+='"),
        (SyntaxKind::STAR, "'*'"),
        (SyntaxKind::STAR_EQ, "'*='"),
        (SyntaxKind::SLASH, "'/'"),
        (SyntaxKind::SLASH_EQ, "'/='"),
        (SyntaxKind::PERCENT, "'%'"),
        (SyntaxKind::PERCENT_EQ, "'%='"),
        (SyntaxKind::CARET, "'^'"),
        (SyntaxKind::CARET_EQ, "'^='"),
        (SyntaxKind::AMP, "'&'"),
        (SyntaxKind::AMP_AMP, "'&&'"),
        (SyntaxKind::AMP_EQ, "'&='"),
        (SyntaxKind::PIPE, "'|'"),
        (SyntaxKind::PIPE_PIPE, "'||'"),
        (SyntaxKind::PIPE_EQ, "'|='"),
        (SyntaxKind::AT, "'@'"),
        (SyntaxKind::POUND, "'#'"),
        (SyntaxKind::DOLLAR, "'$'"),
        (SyntaxKind::QUESTION, "'?'"),
        (SyntaxKind::TILDE, "'~'"),
        (SyntaxKind::UNDERSCORE, "'_'"),
        (SyntaxKind::AS_KW, "'as'"),
        (SyntaxKind::ASYNC_KW, "'async'"),
        (SyntaxKind::AWAIT_KW, "'await'"),
        (SyntaxKind::BREAK_KW, "'break'"),
        (SyntaxKind::CONST_KW, "'const'"),
        (SyntaxKind::CONTINUE_KW, "'continue'"),
        (SyntaxKind::CRATE_KW, "'crate'"),
        (SyntaxKind::DYN_KW, "'dyn'"),
        (SyntaxKind::ELSE_KW, "'else'"),
        (SyntaxKind::ENUM_KW, "'enum'"),
        (SyntaxKind::EXTERN_KW, "'extern'"),
        (SyntaxKind::FALSE_KW, "'false'"),
        (SyntaxKind::FN_KW, "'fn'"),
        (SyntaxKind::FOR_KW, "'for'"),
        (SyntaxKind::IF_KW, "'if'"),
        (SyntaxKind::IMPL_KW, "'impl'"),
        (SyntaxKind::IN_KW, "'in'"),
        (SyntaxKind::LET_KW, "'let'"),
        (SyntaxKind::LOOP_KW, "'loop'"),
        (SyntaxKind::MATCH_KW, "'match'"),
        (SyntaxKind::MOD_KW, "'mod'"),
        (SyntaxKind::MOVE_KW, "'move'"),
        (SyntaxKind::MUT_KW, "'mut'"),
        (SyntaxKind::PUB_KW, "'pub'"),
        (SyntaxKind::REF_KW, "'ref'"),
        (SyntaxKind::RETURN_KW, "'return'"),
        (SyntaxKind::SELF_KW, "'self'"),
        (SyntaxKind::SELF_TYPE_KW, "'Self'"),
        (SyntaxKind::STATIC_KW, "'static'"),
        (SyntaxKind::STRUCT_KW, "'struct'"),
        (SyntaxKind::SUPER_KW, "'super'"),
        (SyntaxKind::TRAIT_KW, "'trait'"),
        (SyntaxKind::TRUE_KW, "'true'"),
        (SyntaxKind::TYPE_KW, "'type'"),
        (SyntaxKind::UNSAFE_KW, "'unsafe'"),
        (SyntaxKind::USE_KW, "'use'"),
        (SyntaxKind::WHERE_KW, "'where'"),
        (SyntaxKind::WHILE_KW, "'while'"),
    ];
    QUOTED.iter().find(|(k, _)| *k == kind).map(|(_, q)| *q)
}
