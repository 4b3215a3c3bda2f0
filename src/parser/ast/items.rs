//! Item nodes: functions, ADTs, traits, impls, modules, uses and macros

use super::*;

ast_enum!(
    /// Anything that can appear at module level
    Item {
        Function,
        Struct,
        Enum,
        Union,
        Trait,
        Impl,
        Module,
        Use,
        ExternCrate,
        TypeAlias,
        Const,
        Static,
        ExternBlock,
        MacroRules,
        MacroCall,
    }
);

impl Item {
    /// Declared name, for items that have one
    pub fn name(&self) -> Option<Name> {
        match self {
            Item::Impl(_)
            | Item::Use(_)
            | Item::ExternBlock(_)
            | Item::ExternCrate(_)
            | Item::MacroCall(_) => None,
            _ => self.syntax().children().find_map(Name::cast),
        }
    }

    pub fn visibility(&self) -> Option<Visibility> {
        self.syntax().children().find_map(Visibility::cast)
    }

    pub fn attrs(&self) -> impl Iterator<Item = Attr> + '_ {
        self.syntax().children().filter_map(Attr::cast)
    }
}

// ============================================================================
// Functions
// ============================================================================

ast_node!(Function, FN);

impl Function {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(param_list, ParamList);
    first_child_method!(ret_type, RetType);
    first_child_method!(where_clause, WhereClause);
    first_child_method!(abi, Abi);
    children_method!(attrs, Attr);

    // The body; `None` for a declaration ending in `;`
    first_child_method!(body, BlockExpr);

    has_token_method!(is_const, CONST_KW, "const fn f()");
    has_token_method!(is_async, ASYNC_KW, "async fn f()");
    has_token_method!(is_unsafe, UNSAFE_KW, "unsafe fn f()");
}

ast_node!(Abi, ABI);

impl Abi {
    /// The ABI string, like `"C"`
    pub fn abi_string(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::STRING | SyntaxKind::RAW_STRING))
    }
}

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    first_child_method!(self_param, SelfParam);
    children_method!(params, Param);

    /// Closure parameter lists are delimited by pipes
    pub fn is_closure(&self) -> bool {
        matches!(
            first_significant_child_token(&self.0).map(|t| t.kind()),
            Some(SyntaxKind::PIPE | SyntaxKind::PIPE_PIPE)
        )
    }
}

ast_node!(Param, PARAM);

impl Param {
    first_child_method!(pat, Pat);
    first_child_method!(ty, Type);
    has_token_method!(is_variadic, DOT_DOT_DOT, "...");
}

ast_node!(SelfParam, SELF_PARAM);

impl SelfParam {
    first_child_method!(ty, Type);
    has_token_method!(is_mut, MUT_KW, "mut self");
    token_method!(lifetime, LIFETIME);

    /// `&self` or `&mut self`
    pub fn is_ref(&self) -> bool {
        has_token(&self.0, SyntaxKind::AMP)
    }
}

ast_node!(RetType, RET_TYPE);

impl RetType {
    first_child_method!(ty, Type);
}

// ============================================================================
// Generics
// ============================================================================

ast_node!(GenericParamList, GENERIC_PARAM_LIST);

impl GenericParamList {
    children_method!(params, GenericParam);
}

ast_enum!(
    GenericParam {
        LifetimeParam,
        TypeParam,
        ConstParam,
    }
);

ast_node!(LifetimeParam, LIFETIME_PARAM);

impl LifetimeParam {
    token_method!(lifetime, LIFETIME);
}

ast_node!(TypeParam, TYPE_PARAM);

impl TypeParam {
    first_child_method!(name, Name);
    first_child_method!(bounds, TypeBoundList);
    child_after_token_method!(default_type, Type, EQ);
}

ast_node!(ConstParam, CONST_PARAM);

impl ConstParam {
    first_child_method!(name, Name);
    first_child_method!(ty, Type);
}

ast_node!(WhereClause, WHERE_CLAUSE);

impl WhereClause {
    children_method!(predicates, WherePred);
}

ast_node!(WherePred, WHERE_PRED);

impl WherePred {
    // `for<'a>` on a higher-ranked predicate
    first_child_method!(for_lifetimes, ForLifetimes);
    first_child_method!(ty, Type);
    first_child_method!(bounds, TypeBoundList);
    token_method!(lifetime, LIFETIME);
}

// ============================================================================
// ADTs
// ============================================================================

ast_node!(Struct, STRUCT);

impl Struct {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(where_clause, WhereClause);
    first_child_method!(record_fields, RecordFieldList);
    first_child_method!(tuple_fields, TupleFieldList);
    children_method!(attrs, Attr);

    /// `struct Unit;`
    pub fn is_unit(&self) -> bool {
        self.record_fields().is_none() && self.tuple_fields().is_none()
    }
}

ast_node!(Union, UNION);

impl Union {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(record_fields, RecordFieldList);
}

ast_node!(RecordFieldList, RECORD_FIELD_LIST);

impl RecordFieldList {
    children_method!(fields, RecordField);
}

ast_node!(RecordField, RECORD_FIELD);

impl RecordField {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(ty, Type);
    // Default value, `field: u8 = 3`
    child_after_token_method!(default_value, Expr, EQ);
}

ast_node!(TupleFieldList, TUPLE_FIELD_LIST);

impl TupleFieldList {
    children_method!(fields, TupleField);
}

ast_node!(TupleField, TUPLE_FIELD);

impl TupleField {
    first_child_method!(visibility, Visibility);
    first_child_method!(ty, Type);
}

ast_node!(Enum, ENUM);

impl Enum {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(variant_list, VariantList);

    pub fn variants(&self) -> Vec<Variant> {
        self.variant_list()
            .map(|list| list.variants().collect())
            .unwrap_or_default()
    }
}

ast_node!(VariantList, VARIANT_LIST);

impl VariantList {
    children_method!(variants, Variant);
}

ast_node!(Variant, VARIANT);

impl Variant {
    first_child_method!(name, Name);
    first_child_method!(record_fields, RecordFieldList);
    first_child_method!(tuple_fields, TupleFieldList);
    // `A = 1`
    child_after_token_method!(discriminant, Expr, EQ);
}

// ============================================================================
// Values and aliases
// ============================================================================

ast_node!(TypeAlias, TYPE_ALIAS);

impl TypeAlias {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(bounds, TypeBoundList);
    child_after_token_method!(ty, Type, EQ);
}

ast_node!(Const, CONST);

impl Const {
    // `None` for `const _: () = ...;`
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    child_after_token_method!(ty, Type, COLON);
    child_after_token_method!(body, Expr, EQ);
}

ast_node!(Static, STATIC);

impl Static {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    child_after_token_method!(ty, Type, COLON);
    child_after_token_method!(body, Expr, EQ);
    has_token_method!(is_mut, MUT_KW, "static mut X: u8 = 0;");
}

// ============================================================================
// Traits and impls
// ============================================================================

ast_node!(Trait, TRAIT);

impl Trait {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(bounds, TypeBoundList);
    first_child_method!(where_clause, WhereClause);
    first_child_method!(assoc_item_list, AssocItemList);
    has_token_method!(is_unsafe, UNSAFE_KW, "unsafe trait T {}");

    /// `trait Alias = A + B;`
    pub fn is_alias(&self) -> bool {
        has_token(&self.0, SyntaxKind::EQ)
    }
}

ast_node!(Impl, IMPL);

impl Impl {
    first_child_method!(generic_param_list, GenericParamList);
    first_child_method!(where_clause, WhereClause);
    first_child_method!(assoc_item_list, AssocItemList);
    has_token_method!(is_unsafe, UNSAFE_KW, "unsafe impl Send for T {}");
    has_token_method!(is_negative, BANG, "impl !Send for T {}");

    /// The implemented trait, for `impl Trait for Type`
    pub fn trait_(&self) -> Option<Type> {
        if has_token(&self.0, SyntaxKind::FOR_KW) {
            self.0.children().find_map(Type::cast)
        } else {
            None
        }
    }

    /// The type being implemented on
    pub fn self_ty(&self) -> Option<Type> {
        let mut types = self.0.children().filter_map(Type::cast);
        if has_token(&self.0, SyntaxKind::FOR_KW) {
            types.nth(1)
        } else {
            types.next()
        }
    }
}

ast_node!(AssocItemList, ASSOC_ITEM_LIST);

impl AssocItemList {
    children_method!(items, AssocItem);
}

ast_enum!(
    /// Items allowed in trait and impl bodies
    AssocItem {
        Function,
        TypeAlias,
        Const,
        MacroCall,
    }
);

// ============================================================================
// Modules
// ============================================================================

ast_node!(Module, MODULE);

impl Module {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    first_child_method!(item_list, ItemList);

    /// `mod foo;` refers to another file
    pub fn is_out_of_line(&self) -> bool {
        self.item_list().is_none()
    }
}

ast_node!(ItemList, ITEM_LIST);

impl ItemList {
    children_method!(items, Item);
}

ast_node!(ExternCrate, EXTERN_CRATE);

impl ExternCrate {
    first_child_method!(name_ref, NameRef);
    first_child_method!(rename, Rename);
}

ast_node!(Rename, RENAME);

impl Rename {
    // `None` for `as _`
    first_child_method!(name, Name);
}

ast_node!(ExternBlock, EXTERN_BLOCK);

impl ExternBlock {
    first_child_method!(abi, Abi);

    pub fn items(&self) -> Vec<Item> {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::EXTERN_ITEM_LIST)
            .flat_map(|list| list.children().filter_map(Item::cast).collect::<Vec<_>>())
            .collect()
    }
}

// ============================================================================
// Use
// ============================================================================

ast_node!(Use, USE);

impl Use {
    first_child_method!(visibility, Visibility);
    first_child_method!(use_tree, UseTree);
}

ast_node!(UseTree, USE_TREE);

impl UseTree {
    first_child_method!(path, Path);
    first_child_method!(rename, Rename);
    first_child_method!(use_tree_list, UseTreeList);
    has_token_method!(is_glob, STAR, "use a::*;");

    /// Fully qualified leaf paths this tree imports, `self` kept as written
    pub fn flatten(&self) -> Vec<String> {
        let prefix = self.path().map(|p| p.text()).unwrap_or_default();
        let join = |rest: &str| match (prefix.is_empty(), rest.is_empty()) {
            (true, _) => rest.to_string(),
            (false, true) => prefix.clone(),
            (false, false) => format!("{prefix}::{rest}"),
        };

        if let Some(list) = self.use_tree_list() {
            list.use_trees()
                .flat_map(|tree| tree.flatten())
                .map(|leaf| join(&leaf))
                .collect()
        } else if self.is_glob() {
            vec![join("*")]
        } else {
            vec![prefix]
        }
    }
}

ast_node!(UseTreeList, USE_TREE_LIST);

impl UseTreeList {
    children_method!(use_trees, UseTree);
}

// ============================================================================
// Macros
// ============================================================================

ast_node!(MacroCall, MACRO_CALL);

impl MacroCall {
    first_child_method!(path, Path);
    first_child_method!(token_tree, TokenTree);
    children_method!(attrs, Attr);

    /// `println` for `println!("hi")`
    pub fn name(&self) -> Option<String> {
        self.path()
            .and_then(|p| p.segments().last())
            .and_then(|s| s.name_ref())
            .map(|n| n.text())
    }
}

ast_node!(MacroRules, MACRO_RULES);

impl MacroRules {
    first_child_method!(name, Name);
    first_child_method!(visibility, Visibility);
    children_method!(rules, MacroRule);
}

ast_node!(MacroRule, MACRO_RULE);

impl MacroRule {
    pub fn matcher(&self) -> Option<TokenTree> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::MACRO_MATCHER)
            .and_then(|n| n.children().find_map(TokenTree::cast))
    }

    pub fn transcriber(&self) -> Option<TokenTree> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::MACRO_TRANSCRIBER)
            .and_then(|n| n.children().find_map(TokenTree::cast))
    }
}
