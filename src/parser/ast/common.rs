//! Names, attributes, visibility and the file root

use super::*;

// ============================================================================
// Source File
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(items, Item);
    children_method!(inner_attrs, InnerAttr);

    /// The `#!` line, when the file starts with one
    pub fn shebang(&self) -> Option<SyntaxToken> {
        self.0
            .first_token()
            .filter(|t| t.kind() == SyntaxKind::SHEBANG)
    }
}

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        first_significant_child_token(&self.0)
    }

    /// The identifier with any `r#` prefix removed
    pub fn text(&self) -> String {
        self.ident_token()
            .map(|t| strip_raw(t.text()).to_string())
            .unwrap_or_default()
    }
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .last()
    }

    /// The referenced name; `$crate` reads as `crate`
    pub fn text(&self) -> String {
        self.token()
            .map(|t| strip_raw(t.text()).to_string())
            .unwrap_or_default()
    }

    has_token_method!(is_self, SELF_KW, "self::x");
    has_token_method!(is_super, SUPER_KW, "super::x");
    has_token_method!(is_crate, CRATE_KW, "crate::x");
}

fn strip_raw(text: &str) -> &str {
    text.strip_prefix("r#").unwrap_or(text)
}

ast_node!(Label, LABEL);

impl Label {
    token_method!(lifetime, LIFETIME);
}

// ============================================================================
// Attributes
// ============================================================================

ast_node!(Attr, ATTR);

impl Attr {
    first_child_method!(meta, Meta);

    /// `derive` for `#[derive(Debug)]`
    pub fn name(&self) -> Option<String> {
        self.meta().and_then(|m| m.path()).map(|p| p.text())
    }
}

ast_node!(InnerAttr, INNER_ATTR);

impl InnerAttr {
    first_child_method!(meta, Meta);

    pub fn name(&self) -> Option<String> {
        self.meta().and_then(|m| m.path()).map(|p| p.text())
    }
}

ast_node!(Meta, META);

impl Meta {
    first_child_method!(path, Path);
    first_child_method!(token_tree, TokenTree);
    first_child_method!(value, Expr);
    has_token_method!(is_unsafe, UNSAFE_KW, "#[unsafe(no_mangle)]");
}

ast_node!(TokenTree, TOKEN_TREE);

impl TokenTree {
    /// Opening delimiter kind: `(`, `[` or `{`
    pub fn delimiter(&self) -> Option<SyntaxKind> {
        first_significant_child_token(&self.0).map(|t| t.kind())
    }

    children_method!(subtrees, TokenTree);

    /// Significant tokens of this tree and all subtrees, delimiters included
    pub fn tokens(&self) -> Vec<SyntaxToken> {
        self.0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .collect()
    }
}

// ============================================================================
// Visibility
// ============================================================================

ast_node!(Visibility, VISIBILITY);

/// What a visibility modifier restricts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityKind {
    Pub,
    PubCrate,
    PubSelf,
    PubSuper,
    PubIn(Path),
    /// 2015 edition `crate fn f()`
    Crate,
}

impl Visibility {
    first_child_method!(path, Path);

    pub fn kind(&self) -> VisibilityKind {
        if let Some(path) = self.path() {
            return VisibilityKind::PubIn(path);
        }
        if !has_token(&self.0, SyntaxKind::PUB_KW) {
            return VisibilityKind::Crate;
        }
        if has_token(&self.0, SyntaxKind::CRATE_KW) {
            VisibilityKind::PubCrate
        } else if has_token(&self.0, SyntaxKind::SELF_KW) {
            VisibilityKind::PubSelf
        } else if has_token(&self.0, SyntaxKind::SUPER_KW) {
            VisibilityKind::PubSuper
        } else {
            VisibilityKind::Pub
        }
    }
}

// ============================================================================
// Tokens
// ============================================================================

ast_token!(Ident, [IDENT, RAW_IDENT]);

impl Ident {
    pub fn is_raw(&self) -> bool {
        self.0.kind() == SyntaxKind::RAW_IDENT
    }

    /// Identifier text without the `r#` prefix
    pub fn name(&self) -> &str {
        strip_raw(self.0.text())
    }
}

ast_token!(
    Comment,
    [LINE_COMMENT, BLOCK_COMMENT, INNER_DOC_COMMENT, OUTER_DOC_COMMENT]
);

impl Comment {
    pub fn is_doc(&self) -> bool {
        matches!(
            self.0.kind(),
            SyntaxKind::INNER_DOC_COMMENT | SyntaxKind::OUTER_DOC_COMMENT
        )
    }

    pub fn is_inner(&self) -> bool {
        self.0.kind() == SyntaxKind::INNER_DOC_COMMENT
    }

    pub fn is_block(&self) -> bool {
        self.0.text().starts_with("/*")
    }
}
