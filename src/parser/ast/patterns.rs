//! Pattern nodes

use super::*;

ast_enum!(
    /// Any pattern, including or-patterns
    Pat {
        IdentPat,
        WildcardPat,
        RestPat,
        LiteralPat,
        RangePat,
        RefPat,
        RecordPat,
        TupleStructPat,
        TuplePat,
        SlicePat,
        ParenPat,
        PathPat,
        OrPat,
        MacroCall,
    }
);

ast_node!(IdentPat, IDENT_PAT);

impl IdentPat {
    first_child_method!(name, Name);
    has_token_method!(is_ref, REF_KW, "ref x");
    has_token_method!(is_mut, MUT_KW, "mut x");

    // `p` in `x @ p`
    first_child_method!(subpattern, Pat);
}

ast_node!(WildcardPat, WILDCARD_PAT);
ast_node!(RestPat, REST_PAT);

ast_node!(LiteralPat, LITERAL_PAT);

impl LiteralPat {
    first_child_method!(literal, Literal);
    has_token_method!(is_negative, MINUS, "-1");
}

ast_node!(RangePat, RANGE_PAT);

impl RangePat {
    /// Lower bound; `None` for `..=b`
    pub fn start(&self) -> Option<Pat> {
        let first = self.0.children().find_map(Pat::cast)?;
        let op = self.op_token()?;
        (first.syntax().text_range().end() <= op.text_range().start()).then_some(first)
    }

    /// Upper bound; `None` for `a..`
    pub fn end(&self) -> Option<Pat> {
        let op = self.op_token()?;
        self.0
            .children()
            .filter_map(Pat::cast)
            .find(|p| p.syntax().text_range().start() >= op.text_range().end())
    }

    /// `..=` and the legacy `...` both include the end
    pub fn is_inclusive(&self) -> bool {
        self.op_token()
            .is_some_and(|t| t.kind() != SyntaxKind::DOT_DOT)
    }

    fn op_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SyntaxKind::DOT_DOT | SyntaxKind::DOT_DOT_EQ | SyntaxKind::DOT_DOT_DOT
                )
            })
    }
}

ast_node!(RefPat, REF_PAT);

impl RefPat {
    first_child_method!(pat, Pat);
    has_token_method!(is_mut, MUT_KW, "&mut x");
}

ast_node!(RecordPat, RECORD_PAT);

impl RecordPat {
    first_child_method!(path, Path);
    first_child_method!(field_list, RecordPatFieldList);
}

ast_node!(RecordPatFieldList, RECORD_PAT_FIELD_LIST);

impl RecordPatFieldList {
    children_method!(fields, RecordPatField);

    /// `Foo { a, .. }`
    pub fn rest_pat(&self) -> Option<RestPat> {
        self.0.children().find_map(RestPat::cast)
    }
}

ast_node!(RecordPatField, RECORD_PAT_FIELD);

impl RecordPatField {
    // `a` in `a: p`; `None` for shorthand fields
    first_child_method!(name_ref, NameRef);
    first_child_method!(pat, Pat);

    /// The field being matched, for both `a: p` and shorthand `ref a`
    pub fn field_name(&self) -> Option<String> {
        if let Some(name_ref) = self.name_ref() {
            return Some(name_ref.text());
        }
        match self.pat()? {
            Pat::IdentPat(ident) => ident.name().map(|n| n.text()),
            _ => None,
        }
    }
}

ast_node!(TupleStructPat, TUPLE_STRUCT_PAT);

impl TupleStructPat {
    first_child_method!(path, Path);
    children_method!(fields, Pat);
}

ast_node!(TuplePat, TUPLE_PAT);

impl TuplePat {
    children_method!(fields, Pat);
}

ast_node!(SlicePat, SLICE_PAT);

impl SlicePat {
    children_method!(elements, Pat);
}

ast_node!(ParenPat, PAREN_PAT);

impl ParenPat {
    first_child_method!(pat, Pat);
}

ast_node!(PathPat, PATH_PAT);

impl PathPat {
    first_child_method!(path, Path);
}

ast_node!(OrPat, OR_PAT);

impl OrPat {
    children_method!(alternatives, Pat);
}
