//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters, semicolons, trailing input)
//! - E03xx: Item, type and pattern errors
//! - E04xx: Expression errors
//! - E09xx: Generic/fallback errors

use std::fmt;

use crate::parser::lexer::LexErrorKind;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string or raw string literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Invalid numeric literal
    E0104,
    /// Unterminated or malformed character literal
    E0105,
    /// Invalid escape sequence or control character in a literal
    E0106,
    /// Reserved word used as a raw identifier
    E0107,
    /// Source bytes are not valid in the declared encoding
    E0108,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Expected `}`
    E0202,
    /// Expected `)`
    E0203,
    /// Expected `]`
    E0204,
    /// Unclosed generic list, expected `>`
    E0205,
    /// Input continues after a complete file
    E0206,

    // =========================================================================
    // E03xx: Item, type and pattern errors
    // =========================================================================
    /// Expected an item
    E0301,
    /// Missing identifier/name
    E0302,
    /// Expected a type
    E0303,
    /// Expected a pattern
    E0304,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Expected an expression
    E0401,
    /// Missing operand after an operator
    E0402,
    /// Comparison operators cannot be chained
    E0403,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Evaluation step budget exhausted
    E0902,
    /// Input nested past the depth limit
    E0903,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0107 => "E0107",
            Self::E0108 => "E0108",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0903 => "E0903",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101
            | Self::E0102
            | Self::E0103
            | Self::E0104
            | Self::E0105
            | Self::E0106
            | Self::E0107
            | Self::E0108 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 => "item error",
            Self::E0303 => "type error",
            Self::E0304 => "pattern error",
            Self::E0401 | Self::E0402 | Self::E0403 => "expression error",
            Self::E0901 | Self::E0902 | Self::E0903 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "invalid numeric literal",
            Self::E0105 => "invalid character literal",
            Self::E0106 => "invalid escape sequence",
            Self::E0107 => "reserved word used as raw identifier",
            Self::E0108 => "invalid source encoding",
            Self::E0201 => "missing semicolon",
            Self::E0202 => "expected '}'",
            Self::E0203 => "expected ')'",
            Self::E0204 => "expected ']'",
            Self::E0205 => "expected '>'",
            Self::E0206 => "unexpected input after end of file",
            Self::E0301 => "expected item",
            Self::E0302 => "missing identifier",
            Self::E0303 => "expected type",
            Self::E0304 => "expected pattern",
            Self::E0401 => "expected expression",
            Self::E0402 => "missing operand",
            Self::E0403 => "comparison operators cannot be chained",
            Self::E0901 => "unexpected token",
            Self::E0902 => "parse budget exceeded",
            Self::E0903 => "nesting too deep",
            Self::E0999 => "internal parser error",
        }
    }

    /// Code for a lexical failure
    pub fn for_lex_error(kind: LexErrorKind) -> Self {
        match kind {
            LexErrorKind::UnexpectedChar => Self::E0101,
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedRawString => Self::E0102,
            LexErrorKind::UnterminatedBlockComment => Self::E0103,
            LexErrorKind::InvalidNumber => Self::E0104,
            LexErrorKind::UnterminatedChar => Self::E0105,
            LexErrorKind::InvalidEscape
            | LexErrorKind::ControlCharacter
            | LexErrorKind::NonAscii => Self::E0106,
            LexErrorKind::ReservedRawIdentifier => Self::E0107,
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206
        )
    }

    pub fn is_lexical(&self) -> bool {
        self.category_description() == "lexical error"
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
