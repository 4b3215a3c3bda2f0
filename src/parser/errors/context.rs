//! Syntactic constructs named in error messages
//!
//! Grammar rules that open a recognizable construct carry a context. When a
//! parse fails, the innermost context active at the furthest failure is what
//! the message reports as "in ...".

/// The construct being parsed when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// At the top level of a file
    #[default]
    TopLevel,

    // Items
    Function,
    Struct,
    Enum,
    Union,
    Trait,
    Impl,
    Module,
    Use,
    ExternBlock,
    TypeAlias,
    Constant,
    Static,
    MacroRules,

    // Pieces of items
    Attribute,
    ParameterList,
    GenericParameters,
    WhereClause,
    FieldList,

    // Expressions and statements
    Block,
    LetStatement,
    MatchArm,
    ArgumentList,
    GenericArguments,
    StructLiteral,
    Closure,
    MacroCall,
}

impl ParseContext {
    /// Constructs whose failures sit among types rather than expressions
    pub fn is_type_position(&self) -> bool {
        matches!(
            self,
            Self::ParameterList
                | Self::GenericParameters
                | Self::GenericArguments
                | Self::WhereClause
                | Self::FieldList
                | Self::TypeAlias
        )
    }

    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::Function => "in function",
            Self::Struct => "in struct",
            Self::Enum => "in enum",
            Self::Union => "in union",
            Self::Trait => "in trait",
            Self::Impl => "in impl block",
            Self::Module => "in module",
            Self::Use => "in use declaration",
            Self::ExternBlock => "in extern block",
            Self::TypeAlias => "in type alias",
            Self::Constant => "in constant",
            Self::Static => "in static",
            Self::MacroRules => "in macro_rules definition",
            Self::Attribute => "in attribute",
            Self::ParameterList => "in parameter list",
            Self::GenericParameters => "in generic parameters",
            Self::WhereClause => "in where clause",
            Self::FieldList => "in field list",
            Self::Block => "in block",
            Self::LetStatement => "in let statement",
            Self::MatchArm => "in match arm",
            Self::ArgumentList => "in argument list",
            Self::GenericArguments => "in generic arguments",
            Self::StructLiteral => "in struct literal",
            Self::Closure => "in closure",
            Self::MacroCall => "in macro invocation",
        }
    }

    /// Get a description of what is expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel | Self::Module => "an item (fn, struct, use, mod, ...)",
            Self::Function => "a signature followed by a body or ';'",
            Self::Struct | Self::Union | Self::FieldList => "fields",
            Self::Enum => "variants",
            Self::Trait | Self::Impl => "associated items (fn, type, const)",
            Self::Use => "a path, '*' or '{...}'",
            Self::ExternBlock => "foreign items (fn, static, type)",
            Self::TypeAlias => "a type",
            Self::Constant | Self::Static => "a type and an initializer",
            Self::MacroRules => "macro rules of the form (...) => {...}",
            Self::Attribute => "a path with optional arguments",
            Self::ParameterList => "a parameter",
            Self::GenericParameters => "a lifetime, type or const parameter",
            Self::WhereClause => "a bound predicate",
            Self::Block => "a statement or expression",
            Self::LetStatement => "a pattern with optional type and initializer",
            Self::MatchArm => "a pattern, '=>' and an expression",
            Self::ArgumentList => "an argument",
            Self::GenericArguments => "a lifetime, type or const argument",
            Self::StructLiteral => "field initializers",
            Self::Closure => "parameters and a body",
            Self::MacroCall => "a delimited token tree",
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(
            self,
            Self::Function
                | Self::Struct
                | Self::Enum
                | Self::Union
                | Self::Trait
                | Self::Impl
                | Self::Module
                | Self::Use
                | Self::ExternBlock
                | Self::TypeAlias
                | Self::Constant
                | Self::Static
                | Self::MacroRules
        )
    }

    /// Contexts that sit between a pair of delimiters
    pub fn is_delimited(&self) -> bool {
        matches!(
            self,
            Self::Attribute
                | Self::ParameterList
                | Self::GenericParameters
                | Self::FieldList
                | Self::Block
                | Self::ArgumentList
                | Self::GenericArguments
                | Self::StructLiteral
        )
    }
}
