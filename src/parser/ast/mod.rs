//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Wrappers never own data and never fail: a missing child is `None`.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities for reducing code duplication
// ============================================================================

/// Check if a syntax node has a direct child token of the specified kind.
///
/// Used throughout the AST for modifier keywords like `mut`, `unsafe`,
/// `async` and so on.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// First direct child token of the given kind
#[inline]
fn token_of(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// First direct child token that is not trivia
#[inline]
fn first_significant_child_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

/// Macro to generate boolean property methods that check for a specific token kind.
///
/// Usage:
/// ```ignore
/// impl Function {
///     has_token_method!(is_async, ASYNC_KW, "async fn f() {}");
/// }
/// ```
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token (e.g., `", $example, "`).")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl Function {
///     first_child_method!(name, Name);
///     first_child_method!(body, BlockExpr);
/// }
/// ```
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns the `n`th child of a specific AST type.
macro_rules! nth_child_method {
    ($name:ident, $type:ident, $n:literal) => {
        #[doc = concat!("Get `", stringify!($type), "` child number ", stringify!($n), " of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().filter_map($type::cast).nth($n)
        }
    };
}

/// Macro to generate a method that finds the first child of a type after a
/// direct token, for nodes where the same kind can appear on both sides.
///
/// Usage:
/// ```ignore
/// impl LetStmt {
///     child_after_token_method!(initializer, Expr, EQ);
/// }
/// ```
macro_rules! child_after_token_method {
    ($name:ident, $type:ident, $kind:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` after `", stringify!($kind), "`.")]
        pub fn $name(&self) -> Option<$type> {
            let token = token_of(&self.0, SyntaxKind::$kind)?;
            let after = token.text_range().end();
            self.0
                .children()
                .filter(|n| n.text_range().start() >= after)
                .find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
///
/// Usage:
/// ```ignore
/// impl SourceFile {
///     children_method!(items, Item);
/// }
/// ```
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns the first direct token of a kind.
macro_rules! token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Get the `", stringify!($kind), "` token of this node.")]
        pub fn $name(&self) -> Option<SyntaxToken> {
            token_of(&self.0, SyntaxKind::$kind)
        }
    };
}

/// Macro to generate a method that maps token kinds to enum variants.
///
/// Usage:
/// ```ignore
/// impl PrefixExpr {
///     token_to_enum_method!(op, UnaryOp, [
///         MINUS => Neg,
///         BANG => Not,
///         STAR => Deref,
///     ]);
/// }
/// ```
macro_rules! token_to_enum_method {
    ($name:ident, $enum_type:ident, [$($token:ident => $variant:ident),+ $(,)?]) => {
        pub fn $name(&self) -> Option<$enum_type> {
            for token in self.0.children_with_tokens().filter_map(|e| e.into_token()) {
                match token.kind() {
                    $(SyntaxKind::$token => return Some($enum_type::$variant),)+
                    _ => {}
                }
            }
            None
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }

    /// Outer doc comments (`///` and `/** */`) directly preceding this node,
    /// separated from it only by whitespace
    fn doc_comment(&self) -> Option<String> {
        extract_doc_comment(self.syntax())
    }
}

/// Collect the outer doc comments in the trivia preceding `node`.
///
/// Trivia is attached in front of the outermost node starting at a token, so
/// an item's doc comments are its preceding sibling tokens.
pub fn extract_doc_comment(node: &SyntaxNode) -> Option<String> {
    let mut comments = Vec::new();
    let mut current = node.prev_sibling_or_token();

    while let Some(rowan::NodeOrToken::Token(token)) = current {
        match token.kind() {
            SyntaxKind::WHITESPACE => {}
            SyntaxKind::OUTER_DOC_COMMENT => {
                let text = token.text();
                let content = match text.strip_prefix("///") {
                    Some(line) => line.trim().to_string(),
                    None => clean_doc_comment(
                        text.strip_prefix("/**")
                            .and_then(|s| s.strip_suffix("*/"))
                            .unwrap_or_default(),
                    ),
                };
                comments.push(content);
            }
            _ => break,
        }
        current = token.prev_sibling_or_token();
    }

    if comments.is_empty() {
        return None;
    }

    // Reverse because we collected bottom-up
    comments.reverse();
    Some(comments.join("\n"))
}

/// Remove leading asterisks from block doc comment lines
fn clean_doc_comment(s: &str) -> String {
    s.lines()
        .map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix('*')
                .map_or(trimmed, str::trim_start)
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trait for AST tokens that wrap a SyntaxToken
pub trait AstToken: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(token: SyntaxToken) -> Option<Self>;
    fn syntax(&self) -> &SyntaxToken;
    fn text(&self) -> &str {
        self.syntax().text()
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        ast_node!($name, [$kind]);
    };
    ($name:ident, [$($kind:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// An enum over several node wrappers, cast by node kind
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($variant::can_cast(kind))||+
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                $(
                    if $variant::can_cast(node.kind()) {
                        return $variant::cast(node).map($name::$variant);
                    }
                )+
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $($name::$variant(it) => it.syntax(),)+
                }
            }
        }
    };
}

macro_rules! ast_token {
    ($name:ident, [$($kind:ident),+ $(,)?]) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxToken);

        impl AstToken for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(token: SyntaxToken) -> Option<Self> {
                if Self::can_cast(token.kind()) {
                    Some(Self(token))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxToken {
                &self.0
            }
        }
    };
}

// Submodules: declared after the macros so the macro_rules! are in scope
mod common;
mod expressions;
mod items;
mod patterns;
mod types;

// Re-export all public types so external code sees a flat namespace
pub use self::common::*;
pub use self::expressions::*;
pub use self::items::*;
pub use self::patterns::*;
pub use self::types::*;
