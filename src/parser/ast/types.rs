//! Types, paths and generic arguments

use super::*;

ast_enum!(
    /// Any type expression
    Type {
        PathType,
        TupleType,
        NeverType,
        PtrType,
        RefType,
        ArrayType,
        SliceType,
        InferType,
        FnPtrType,
        ImplTraitType,
        DynTraitType,
        ParenType,
        MacroCall,
    }
);

// ============================================================================
// Paths
// ============================================================================

ast_node!(Path, PATH);

impl Path {
    children_method!(segments, PathSegment);
    first_child_method!(qualifier, QualifiedPathType);

    /// `::std::mem` starts at the extern prelude
    pub fn is_global(&self) -> bool {
        self.0
            .children_with_tokens()
            .find(|e| !e.kind().is_trivia())
            .is_some_and(|e| e.kind() == SyntaxKind::COLON_COLON)
    }

    /// The path as written, without trivia: `std::vec::Vec<u8>`
    pub fn text(&self) -> String {
        self.0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    /// The single identifier of a one-segment path without generic arguments
    pub fn as_single_name(&self) -> Option<String> {
        if self.qualifier().is_some() || self.is_global() {
            return None;
        }
        let mut segments = self.segments();
        let first = segments.next()?;
        if segments.next().is_some() || first.generic_arg_list().is_some() {
            return None;
        }
        first.name_ref().map(|n| n.text())
    }
}

ast_node!(PathSegment, PATH_SEGMENT);

impl PathSegment {
    first_child_method!(name_ref, NameRef);
    first_child_method!(generic_arg_list, GenericArgList);
    // `-> R` in `Fn(A) -> R`
    first_child_method!(ret_type, RetType);

    /// `Fn(A, B)` style arguments
    pub fn paren_args(&self) -> Option<Vec<Type>> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::PAREN_ARG_LIST)
            .map(|list| list.children().filter_map(Type::cast).collect())
    }

    /// `Vec::<u8>` in expression position
    pub fn has_turbofish(&self) -> bool {
        has_token(&self.0, SyntaxKind::COLON_COLON)
    }
}

ast_node!(QualifiedPathType, QUALIFIED_PATH_TYPE);

impl QualifiedPathType {
    // `T` in `<T as Trait>`
    first_child_method!(self_ty, Type);

    /// `Trait` in `<T as Trait>`
    pub fn trait_path(&self) -> Option<Path> {
        if has_token(&self.0, SyntaxKind::AS_KW) {
            self.0.children().find_map(Path::cast)
        } else {
            None
        }
    }
}

// ============================================================================
// Generic arguments
// ============================================================================

ast_node!(GenericArgList, GENERIC_ARG_LIST);

impl GenericArgList {
    children_method!(args, GenericArg);
}

ast_enum!(
    GenericArg {
        TypeArg,
        LifetimeArg,
        ConstArg,
        AssocTypeArg,
    }
);

ast_node!(TypeArg, TYPE_ARG);

impl TypeArg {
    first_child_method!(ty, Type);
}

ast_node!(LifetimeArg, LIFETIME_ARG);

impl LifetimeArg {
    token_method!(lifetime, LIFETIME);
}

ast_node!(ConstArg, CONST_ARG);

impl ConstArg {
    first_child_method!(expr, Expr);
}

ast_node!(AssocTypeArg, ASSOC_TYPE_ARG);

impl AssocTypeArg {
    first_child_method!(name_ref, NameRef);
    // `Item = u8`
    first_child_method!(ty, Type);
    // `Item: Clone`
    first_child_method!(bounds, TypeBoundList);
}

// ============================================================================
// Type nodes
// ============================================================================

ast_node!(PathType, PATH_TYPE);

impl PathType {
    first_child_method!(path, Path);
}

ast_node!(TupleType, TUPLE_TYPE);

impl TupleType {
    children_method!(fields, Type);
}

ast_node!(NeverType, NEVER_TYPE);
ast_node!(InferType, INFER_TYPE);

ast_node!(PtrType, PTR_TYPE);

impl PtrType {
    first_child_method!(ty, Type);
    has_token_method!(is_mut, MUT_KW, "*mut u8");
    has_token_method!(is_const, CONST_KW, "*const u8");
}

ast_node!(RefType, REF_TYPE);

impl RefType {
    first_child_method!(ty, Type);
    token_method!(lifetime, LIFETIME);
    has_token_method!(is_mut, MUT_KW, "&mut T");
}

ast_node!(ArrayType, ARRAY_TYPE);

impl ArrayType {
    first_child_method!(ty, Type);

    /// The length expression
    pub fn length(&self) -> Option<Expr> {
        self.0
            .children()
            .skip_while(|n| !Type::can_cast(n.kind()))
            .skip(1)
            .find_map(Expr::cast)
    }
}

ast_node!(SliceType, SLICE_TYPE);

impl SliceType {
    first_child_method!(ty, Type);
}

ast_node!(ParenType, PAREN_TYPE);

impl ParenType {
    first_child_method!(ty, Type);
}

ast_node!(FnPtrType, FN_PTR_TYPE);

impl FnPtrType {
    first_child_method!(param_list, ParamList);
    first_child_method!(ret_type, RetType);
    first_child_method!(abi, Abi);
    has_token_method!(is_unsafe, UNSAFE_KW, "unsafe fn()");
}

ast_node!(ImplTraitType, IMPL_TRAIT_TYPE);

impl ImplTraitType {
    first_child_method!(bounds, TypeBoundList);
}

ast_node!(DynTraitType, DYN_TRAIT_TYPE);

impl DynTraitType {
    first_child_method!(bounds, TypeBoundList);

    /// `Send + 'a` written without `dyn`, 2015 edition
    pub fn is_bare(&self) -> bool {
        !has_token(&self.0, SyntaxKind::DYN_KW)
    }
}

// ============================================================================
// Bounds
// ============================================================================

ast_node!(TypeBoundList, TYPE_BOUND_LIST);

impl TypeBoundList {
    children_method!(bounds, TypeBound);
}

ast_node!(TypeBound, TYPE_BOUND);

impl TypeBound {
    // The trait in `?Sized` or `for<'a> Fn(&'a u8)`; `None` for lifetimes
    first_child_method!(path, Path);
    first_child_method!(for_lifetimes, ForLifetimes);
    token_method!(lifetime, LIFETIME);
    has_token_method!(is_maybe, QUESTION, "?Sized");
}

ast_node!(ForLifetimes, FOR_LIFETIMES);

impl ForLifetimes {
    first_child_method!(generic_param_list, GenericParamList);
}
