//! The error returned by a failed parse
//!
//! A failed parse reports the furthest token position any alternative reached,
//! what would have been accepted there, and the innermost construct being
//! parsed:
//!
//! ```text
//! expected ';', '.' or operator, found '}' in let statement
//! ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^ ^^^^^^^^^^^^^^^^
//!        expected set              found       context
//! ```

use std::borrow::Cow;

use rowan::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use super::context::ParseContext;
use super::error::SyntaxError;
use crate::base::Position;
use crate::parser::keywords::kind_to_name;
use crate::parser::syntax_kind::SyntaxKind;

/// Collapse this many or more operator alternatives into one "operator"
const OPERATOR_COLLAPSE: usize = 3;

/// One alternative that would have been accepted at the failure position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    Token(SyntaxKind),
    /// A contextual keyword such as `union`
    Word(&'static str),
    /// A whole construct, e.g. "expression"
    Label(&'static str),
}

impl Expected {
    pub fn describe(&self) -> Cow<'static, str> {
        match self {
            Expected::Token(kind) => Cow::Borrowed(kind_to_name(*kind)),
            Expected::Word(word) => Cow::Owned(format!("'{word}'")),
            Expected::Label(label) => Cow::Borrowed(label),
        }
    }

    fn is_operator(&self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            Expected::Token(
                PLUS | MINUS
                    | STAR
                    | SLASH
                    | PERCENT
                    | CARET
                    | AMP
                    | PIPE
                    | SHL
                    | SHR
                    | AMP_AMP
                    | PIPE_PIPE
                    | EQ_EQ
                    | BANG_EQ
                    | LT
                    | GT
                    | LT_EQ
                    | GT_EQ
                    | EQ
                    | PLUS_EQ
                    | MINUS_EQ
                    | STAR_EQ
                    | SLASH_EQ
                    | PERCENT_EQ
                    | CARET_EQ
                    | AMP_EQ
                    | PIPE_EQ
                    | SHL_EQ
                    | SHR_EQ
                    | DOT_DOT
                    | DOT_DOT_EQ
                    | AS_KW
            )
        )
    }
}

/// Render an expected set as `a`, `a or b` or `a, b or c`.
///
/// Duplicates are dropped, and long runs of operators are summarized.
pub fn describe_expected(expected: &[Expected]) -> Vec<String> {
    let operators = expected.iter().filter(|e| e.is_operator()).count();
    let collapse = operators >= OPERATOR_COLLAPSE;

    let mut names: Vec<String> = Vec::new();
    for item in expected {
        let name = if collapse && item.is_operator() {
            Cow::Borrowed("operator")
        } else {
            item.describe()
        };
        if !names.iter().any(|n| n == name.as_ref()) {
            names.push(name.into_owned());
        }
    }
    names
}

fn join_alternatives(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No rule could consume the token at this position
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        /// 1-based
        line: u32,
        /// 0-based, in chars
        column: u32,
        offset: TextSize,
        /// Length of the offending token text
        len: TextSize,
        message: String,
        expected: Vec<String>,
        found: String,
        context: ParseContext,
    },
    /// The evaluation step budget ran out before the parse finished
    #[error("parse budget of {steps} steps exceeded")]
    BudgetExceeded { steps: u64 },
    /// Rule applications nested past the configured depth limit
    #[error("input nested deeper than {depth} rule applications")]
    NestingTooDeep { depth: u32 },
}

impl ParseError {
    /// Build a syntax error for the token text `found` at `position`.
    ///
    /// `found` is `None` at end of input.
    pub fn syntax(
        position: Position,
        range: TextRange,
        found: Option<&str>,
        expected: &[Expected],
        context: ParseContext,
    ) -> Self {
        let expected = describe_expected(expected);
        let found = match found {
            Some(text) => format!("'{text}'"),
            None => "end of file".to_string(),
        };
        let message = if expected.is_empty() {
            format!("unexpected {} {}", found, context.description())
        } else {
            format!(
                "expected {}, found {} {}",
                join_alternatives(&expected),
                found,
                context.description()
            )
        };
        ParseError::Syntax {
            line: position.line,
            column: position.column,
            offset: range.start(),
            len: range.len(),
            message,
            expected,
            found,
            context,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Syntax { line, column, .. } => Some(Position::new(*line, *column)),
            ParseError::BudgetExceeded { .. } | ParseError::NestingTooDeep { .. } => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        let (expected, found, context) = match self {
            ParseError::BudgetExceeded { .. } => return ErrorCode::E0902,
            ParseError::NestingTooDeep { .. } => return ErrorCode::E0903,
            ParseError::Syntax {
                expected,
                found,
                context,
                ..
            } => (expected, found, *context),
        };
        let has = |name: &str| expected.iter().any(|e| e == name);

        // a comparison where only further operators could follow its operand
        let comparison = matches!(found.as_str(), "'<'" | "'>'" | "'<='" | "'>='" | "'=='" | "'!='");
        if comparison && has("operator") && !has("expression") && !context.is_type_position() {
            return ErrorCode::E0403;
        }
        let priority = [
            ("';'", ErrorCode::E0201),
            ("'}'", ErrorCode::E0202),
            ("')'", ErrorCode::E0203),
            ("']'", ErrorCode::E0204),
            ("'>'", ErrorCode::E0205),
            ("expression", ErrorCode::E0401),
            ("type", ErrorCode::E0303),
            ("pattern", ErrorCode::E0304),
            ("item", ErrorCode::E0301),
            ("end of file", ErrorCode::E0206),
            ("identifier", ErrorCode::E0302),
        ];
        priority
            .iter()
            .find(|(name, _)| has(name))
            .map_or(ErrorCode::E0901, |(_, code)| *code)
    }

    /// Convert into the diagnostic form
    pub fn to_syntax_error(&self) -> SyntaxError {
        let code = self.code();
        let mut builder = SyntaxError::builder(code).message(self.message());
        if let ParseError::Syntax {
            line,
            column,
            offset,
            len,
            context,
            ..
        } = self
        {
            builder = builder
                .range(TextRange::at(*offset, *len))
                .position(Position::new(*line, *column))
                .context(*context);
        }
        match code {
            ErrorCode::E0201 => builder = builder.hint("add ';' to end the statement"),
            ErrorCode::E0403 => builder = builder.hint("use parentheses to group comparisons"),
            ErrorCode::E0902 => {
                builder = builder.hint("raise the step budget in ParseOptions for large inputs")
            }
            ErrorCode::E0903 => {
                builder = builder.hint("raise the depth limit in ParseOptions for deeply nested input")
            }
            _ => {}
        }
        builder.build()
    }
}
