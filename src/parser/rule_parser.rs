//! Rule-based parser for testing individual grammar rules
//!
//! Parses one grammar construct without a surrounding file. The rule must
//! match the entire input; the result is wrapped in a `SOURCE_FILE` root so
//! the usual tree APIs apply.
//!
//! # Example
//!
//! ```
//! use rsyn::parser::{Rule, parse_rule};
//!
//! let result = parse_rule(Rule::Expression, "1 + 2 * 3");
//! assert!(result.is_ok());
//! ```

use super::engine::MemoTable;
use super::engine::term::{eof, r, seq};
use super::errors::SyntaxError;
use super::lexer::tokenize_str;
use super::parser::{Parse, ParseOptions, run};
use super::syntax_kind::SyntaxNode;
use crate::Error;

/// Grammar rules that can be parsed individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // === Whole files and items ===
    SourceFile,
    Item,
    Function,
    Struct,
    Enum,
    Union,
    Trait,
    Impl,
    Module,
    Use,
    TypeAlias,
    Const,
    Static,
    ExternBlock,
    MacroRules,
    MacroCall,

    // === Building blocks ===
    Attribute,
    InnerAttribute,
    Visibility,
    /// A binding name; raw identifiers allowed, keywords not
    Identifier,
    SimplePath,
    TypePath,
    ExprPath,
    GenericParams,
    GenericArgs,
    WhereClause,

    // === Sub-grammars ===
    Type,
    Pattern,
    Expression,
    Literal,
    Block,
    Statement,
    LetStatement,
    MatchArm,
    Closure,
}

impl Rule {
    /// Name of the grammar rule this maps to
    pub fn rule_name(self) -> &'static str {
        match self {
            Rule::SourceFile => super::grammar::SOURCE_FILE_RULE,
            Rule::Item => "item",
            Rule::Function => "fn",
            Rule::Struct => "struct",
            Rule::Enum => "enum",
            Rule::Union => "union",
            Rule::Trait => "trait",
            Rule::Impl => "impl",
            Rule::Module => "module",
            Rule::Use => "use",
            Rule::TypeAlias => "type_alias",
            Rule::Const => "const",
            Rule::Static => "static",
            Rule::ExternBlock => "extern_block",
            Rule::MacroRules => "macro_rules",
            Rule::MacroCall => "macro_call_item",
            Rule::Attribute => "outer_attr",
            Rule::InnerAttribute => "inner_attr",
            Rule::Visibility => "visibility",
            Rule::Identifier => "name",
            Rule::SimplePath => "simple_path",
            Rule::TypePath => "type_path",
            Rule::ExprPath => "expr_path",
            Rule::GenericParams => "generic_params",
            Rule::GenericArgs => "generic_args",
            Rule::WhereClause => "where_clause",
            Rule::Type => "type",
            Rule::Pattern => "pattern",
            Rule::Expression => "expr",
            Rule::Literal => "literal",
            Rule::Block => "block_expr",
            Rule::Statement => "stmt",
            Rule::LetStatement => "let_stmt",
            Rule::MatchArm => "match_arm",
            Rule::Closure => "closure_expr",
        }
    }
}

/// Parse result for a single rule
#[derive(Debug)]
pub struct RuleParseResult {
    /// The tree, when the rule matched the whole input
    pub parse: Result<Parse, Error>,
    /// The rule that was parsed
    pub rule: Rule,
    /// The original input
    pub input: String,
}

impl RuleParseResult {
    /// Check if the rule matched the entire input
    pub fn is_ok(&self) -> bool {
        self.parse.is_ok()
    }

    pub fn error(&self) -> Option<&Error> {
        self.parse.as_ref().err()
    }

    /// Diagnostics for a failed parse, empty on success
    pub fn errors(&self) -> Vec<SyntaxError> {
        self.error()
            .and_then(Error::to_syntax_error)
            .into_iter()
            .collect()
    }

    /// Get the syntax tree root
    pub fn syntax(&self) -> Option<SyntaxNode> {
        self.parse.as_ref().ok().map(Parse::syntax)
    }
}

/// Parse `input` as exactly one `rule`
pub fn parse_rule(rule: Rule, input: &str) -> RuleParseResult {
    parse_rule_with(rule, input, &ParseOptions::default())
}

pub fn parse_rule_with(rule: Rule, input: &str, options: &ParseOptions) -> RuleParseResult {
    let parse = tokenize_str(input).map_err(Error::from).and_then(|tokens| {
        let root = seq([r(rule.rule_name()), eof()]);
        run(tokens, &root, options, &mut MemoTable::new())
    });
    RuleParseResult {
        parse,
        rule,
        input: input.to_string(),
    }
}
