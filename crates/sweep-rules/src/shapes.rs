//! Shape resolvers: classify a type annotation as array-, boolean-,
//! function-, object-, element- or component-constructor-shaped.
//!
//! Resolution walks the annotation structurally, follows references to
//! aliases and interfaces declared in the same file through a [`CycleGuard`],
//! and defers to the [`TypeService`] when one is attached. When the service
//! has an opinion it decides; the annotation alone never reports a stricter
//! verdict than the resolved type allows.

use std::collections::HashMap;

use sweep_parser::ast::{
    AstKind, TsInterfaceDeclaration, TsKeyword, TsLiteral, TsSignature, TsType,
    TsTypeOperatorKind, TsTypeReference,
};
use sweep_parser::{ResolvedType, Semantic, TypeService};

use crate::guard::CycleGuard;

// ── Alias table ────────────────────────────────────────────────────

/// Type aliases and interfaces declared anywhere in one file, by name.
///
/// Collected in one pass over the whole tree so lookups do not depend on
/// declaration order.
#[derive(Debug, Default)]
pub struct AliasTable<'a> {
    aliases: HashMap<&'a str, &'a TsType>,
    interfaces: HashMap<&'a str, Vec<&'a TsInterfaceDeclaration>>,
}

impl<'a> AliasTable<'a> {
    #[must_use]
    pub fn collect(semantic: &Semantic<'a>) -> Self {
        let mut table = Self::default();
        for node in semantic.nodes() {
            match node {
                AstKind::TsTypeAliasDeclaration(alias) => {
                    table
                        .aliases
                        .entry(alias.name.name.as_str())
                        .or_insert(&alias.type_annotation);
                }
                AstKind::TsInterfaceDeclaration(interface) => {
                    table
                        .interfaces
                        .entry(interface.name.name.as_str())
                        .or_default()
                        .push(interface);
                }
                _ => {}
            }
        }
        table
    }

    #[must_use]
    pub fn alias(&self, name: &str) -> Option<&'a TsType> {
        self.aliases.get(name).copied()
    }

    /// Every declaration of interface `name` (declaration merging keeps all).
    #[must_use]
    pub fn interfaces(&self, name: &str) -> &[&'a TsInterfaceDeclaration] {
        self.interfaces.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_interface(&self, name: &str) -> bool {
        self.interfaces.contains_key(name)
    }

    /// Members of a local interface (all merged declarations) or of an alias
    /// whose right-hand side is a type literal.
    #[must_use]
    pub fn members(&self, name: &str) -> Option<Vec<&'a TsSignature>> {
        let interfaces = self.interfaces(name);
        if !interfaces.is_empty() {
            return Some(interfaces.iter().flat_map(|decl| decl.body.iter()).collect());
        }
        match self.alias(name)?.without_parens() {
            TsType::TypeLiteral(literal) => Some(literal.members.iter().collect()),
            _ => None,
        }
    }
}

/// Alias name a reference can be resolved through locally. Qualified names
/// (`React.ReactNode`) never name a local declaration.
fn local_name(reference: &TsTypeReference) -> Option<&str> {
    (!reference.name.is_qualified()).then(|| reference.name.last())
}

// ── Element kinds ──────────────────────────────────────────────────

/// Which React element type a prop is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `ReactNode`: anything renderable.
    Node,
    /// `ReactElement`: a single element.
    Element,
}

impl ElementKind {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Node => "ReactNode",
            Self::Element => "ReactElement",
        }
    }
}

const COMPONENT_CONSTRUCTORS: &[&str] = &["ComponentType", "FC", "FunctionComponent"];
const READONLY_CONTAINERS: &[&str] = &["Readonly", "ReadonlyArray", "ReadonlyMap", "ReadonlySet"];
const ARRAY_CONTAINERS: &[&str] = &["Array", "ReadonlyArray"];
const OBJECT_CONTAINERS: &[&str] = &["Record", "RefObject", "MutableRefObject"];

/// Heuristic over printed type text for services that only know the text.
fn array_text(text: &str) -> bool {
    let text = text.trim();
    text.ends_with("[]")
        || ["readonly ", "Array<", "ReadonlyArray<", "[", "readonly ["]
            .iter()
            .any(|prefix| text.starts_with(prefix))
}

// ── Resolver ───────────────────────────────────────────────────────

/// Classifies annotations against one file's [`AliasTable`] and an optional
/// [`TypeService`]. Holds no mutable state between calls.
#[derive(Clone, Copy)]
pub struct ShapeResolver<'t, 'a> {
    aliases: &'t AliasTable<'a>,
    types: Option<&'a dyn TypeService>,
}

impl<'t, 'a> ShapeResolver<'t, 'a> {
    #[must_use]
    pub fn new(aliases: &'t AliasTable<'a>, types: Option<&'a dyn TypeService>) -> Self {
        Self { aliases, types }
    }

    #[must_use]
    pub const fn aliases(&self) -> &'t AliasTable<'a> {
        self.aliases
    }

    fn resolved(&self, ty: &TsType) -> Option<ResolvedType> {
        self.types.and_then(|types| types.type_of(ty.node_id()))
    }

    /// Service verdict when it has one, otherwise the annotation verdict.
    fn decide(
        &self,
        ty: &TsType,
        resolved: impl FnOnce(&ResolvedType) -> bool,
        annotation: impl FnOnce() -> bool,
    ) -> bool {
        match self.resolved(ty) {
            Some(resolved_type) => resolved(&resolved_type),
            None => annotation(),
        }
    }

    /// Walk an annotation with existential semantics over unions and
    /// intersections, following local aliases through `guard`.
    fn any_shape(
        &self,
        ty: &TsType,
        guard: &mut CycleGuard<String>,
        leaf: &impl Fn(&TsType) -> bool,
    ) -> bool {
        match ty {
            TsType::Parenthesized(inner) => self.any_shape(&inner.type_annotation, guard, leaf),
            TsType::Optional(inner) => self.any_shape(&inner.type_annotation, guard, leaf),
            TsType::Union(union) => union.types.iter().any(|member| self.any_shape(member, guard, leaf)),
            TsType::Intersection(intersection) => intersection
                .types
                .iter()
                .any(|member| self.any_shape(member, guard, leaf)),
            TsType::Reference(reference) => {
                if leaf(ty) {
                    return true;
                }
                let Some(name) = local_name(reference) else {
                    return false;
                };
                let Some(target) = self.aliases.alias(name) else {
                    return false;
                };
                guard.guarded(name.to_string(), false, |guard| {
                    self.any_shape(target, guard, leaf)
                })
            }
            _ => leaf(ty),
        }
    }

    // ── Array ──────────────────────────────────────────────────────

    /// Array or tuple, directly or through wrappers, aliases and union or
    /// intersection members.
    #[must_use]
    pub fn is_array(&self, ty: &TsType) -> bool {
        self.decide(
            ty,
            |resolved| resolved.any_member(&|member| member.is_array_like || array_text(&member.text)),
            || self.any_shape(ty, &mut CycleGuard::new(), &array_leaf),
        )
    }

    // ── Boolean ────────────────────────────────────────────────────

    /// `boolean`, `true` or `false`, existential over unions.
    #[must_use]
    pub fn is_boolean(&self, ty: &TsType) -> bool {
        self.decide(
            ty,
            |resolved| resolved.any_member(&|member| member.is_boolean_like),
            || self.any_shape(ty, &mut CycleGuard::new(), &boolean_leaf),
        )
    }

    // ── Function ───────────────────────────────────────────────────

    /// Function or constructor type, or an object type with call or
    /// construct signatures.
    #[must_use]
    pub fn is_function(&self, ty: &TsType) -> bool {
        self.decide(
            ty,
            |resolved| resolved.any_member(&ResolvedType::is_function_like),
            || self.any_shape(ty, &mut CycleGuard::new(), &function_leaf),
        )
    }

    // ── Object ─────────────────────────────────────────────────────

    /// A plain object shape: type literals, local interfaces, `object`,
    /// records and ref objects. Arrays, functions and primitives are not.
    #[must_use]
    pub fn is_object(&self, ty: &TsType) -> bool {
        self.decide(ty, is_plain_object_type, || {
            self.any_shape(ty, &mut CycleGuard::new(), &|leaf| self.object_leaf(leaf))
        })
    }

    fn object_leaf(&self, ty: &TsType) -> bool {
        match ty {
            TsType::TypeLiteral(literal) => !literal
                .members
                .iter()
                .any(|member| matches!(member, TsSignature::Call(_) | TsSignature::Construct(_))),
            TsType::Keyword(keyword) => keyword.keyword == TsKeyword::Object,
            TsType::Reference(reference) => {
                let last = reference.name.last();
                if OBJECT_CONTAINERS.contains(&last) {
                    return true;
                }
                local_name(reference).is_some_and(|name| {
                    self.aliases.interfaces(name).iter().any(|decl| {
                        !decl
                            .body
                            .iter()
                            .any(|member| matches!(member, TsSignature::Call(_) | TsSignature::Construct(_)))
                    })
                })
            }
            _ => false,
        }
    }

    // ── Element ────────────────────────────────────────────────────

    /// Whether the annotation contains `ReactNode` or `ReactElement` of the
    /// given kind, through aliases, interface heritage and type operators.
    #[must_use]
    pub fn contains_element(&self, ty: &TsType, kind: ElementKind) -> bool {
        self.decide(
            ty,
            |resolved| resolved.any_member(&|member| member.is_rooted_at(&[kind.symbol()])),
            || self.element_in(ty, kind, &mut CycleGuard::new()),
        )
    }

    fn element_in(&self, ty: &TsType, kind: ElementKind, guard: &mut CycleGuard<String>) -> bool {
        match ty {
            TsType::Parenthesized(inner) => self.element_in(&inner.type_annotation, kind, guard),
            TsType::Optional(inner) => self.element_in(&inner.type_annotation, kind, guard),
            TsType::Operator(inner) => self.element_in(&inner.type_annotation, kind, guard),
            TsType::Union(union) => union.types.iter().any(|member| self.element_in(member, kind, guard)),
            TsType::Intersection(intersection) => intersection
                .types
                .iter()
                .any(|member| self.element_in(member, kind, guard)),
            TsType::Reference(reference) => {
                if reference.name.last() == kind.symbol() {
                    return true;
                }
                let Some(name) = local_name(reference) else {
                    return false;
                };
                guard.guarded(name.to_string(), false, |guard| {
                    if let Some(target) = self.aliases.alias(name) {
                        return self.element_in(target, kind, guard);
                    }
                    self.aliases
                        .interfaces(name)
                        .iter()
                        .flat_map(|decl| decl.extends.iter())
                        .any(|base| self.element_in(base, kind, guard))
                })
            }
            _ => false,
        }
    }

    // ── Component constructors ─────────────────────────────────────

    /// `ComponentType`, `FC` or `FunctionComponent`, through wrappers,
    /// unions, intersections and local aliases.
    #[must_use]
    pub fn is_component_constructor(&self, ty: &TsType) -> bool {
        self.decide(
            ty,
            |resolved| resolved.any_member(&|member| member.is_rooted_at(COMPONENT_CONSTRUCTORS)),
            || {
                self.any_shape(ty, &mut CycleGuard::new(), &|leaf| {
                    matches!(leaf, TsType::Reference(reference)
                        if COMPONENT_CONSTRUCTORS.contains(&reference.name.last()))
                })
            },
        )
    }

    // ── Readonly ───────────────────────────────────────────────────

    /// Every constituent is spelled readonly: a `readonly` operator, one of
    /// the `Readonly*` containers, or a primitive keyword or literal.
    /// Universal over unions and intersections.
    #[must_use]
    pub fn is_readonly(&self, ty: &TsType) -> bool {
        self.readonly_in(ty, &mut CycleGuard::new())
    }

    fn readonly_in(&self, ty: &TsType, guard: &mut CycleGuard<String>) -> bool {
        match ty {
            TsType::Parenthesized(inner) => self.readonly_in(&inner.type_annotation, guard),
            TsType::Optional(inner) => self.readonly_in(&inner.type_annotation, guard),
            TsType::Operator(operator) => operator.operator == TsTypeOperatorKind::Readonly,
            TsType::Keyword(keyword) => is_primitive_keyword(keyword.keyword),
            TsType::Literal(_) => true,
            TsType::Union(union) => {
                !union.types.is_empty() && union.types.iter().all(|member| self.readonly_in(member, guard))
            }
            TsType::Intersection(intersection) => {
                !intersection.types.is_empty()
                    && intersection
                        .types
                        .iter()
                        .all(|member| self.readonly_in(member, guard))
            }
            TsType::Reference(reference) => {
                if READONLY_CONTAINERS.contains(&reference.name.last()) {
                    return true;
                }
                let Some(name) = local_name(reference) else {
                    return false;
                };
                let Some(target) = self.aliases.alias(name) else {
                    return false;
                };
                guard.guarded(name.to_string(), false, |guard| self.readonly_in(target, guard))
            }
            _ => false,
        }
    }
}

const fn is_primitive_keyword(keyword: TsKeyword) -> bool {
    matches!(
        keyword,
        TsKeyword::String
            | TsKeyword::Number
            | TsKeyword::Boolean
            | TsKeyword::BigInt
            | TsKeyword::Symbol
            | TsKeyword::Null
            | TsKeyword::Undefined
    )
}

/// Return types of the function types in `ty`, through parentheses, unions
/// and intersections.
#[must_use]
pub fn function_return_types(ty: &TsType) -> Vec<&TsType> {
    match ty {
        TsType::Function(function) => function.return_type.iter().collect(),
        TsType::Parenthesized(inner) => function_return_types(&inner.type_annotation),
        TsType::Union(union) => union.types.iter().flat_map(function_return_types).collect(),
        TsType::Intersection(intersection) => intersection
            .types
            .iter()
            .flat_map(function_return_types)
            .collect(),
        _ => Vec::new(),
    }
}

/// `Promise<…>`, qualified or not.
#[must_use]
pub fn is_promise(ty: &TsType) -> bool {
    matches!(ty, TsType::Reference(reference) if reference.name.last() == "Promise")
}

fn array_leaf(ty: &TsType) -> bool {
    match ty {
        TsType::Array(_) | TsType::Tuple(_) => true,
        TsType::Operator(operator) => array_leaf(operator.type_annotation.without_parens()),
        TsType::Reference(reference) => ARRAY_CONTAINERS.contains(&reference.name.last()),
        _ => false,
    }
}

fn boolean_leaf(ty: &TsType) -> bool {
    match ty {
        TsType::Keyword(keyword) => keyword.keyword == TsKeyword::Boolean,
        TsType::Literal(literal) => matches!(literal.literal, TsLiteral::Boolean(_)),
        _ => false,
    }
}

fn function_leaf(ty: &TsType) -> bool {
    match ty {
        TsType::Function(_) | TsType::Constructor(_) => true,
        TsType::TypeLiteral(literal) => literal
            .members
            .iter()
            .any(|member| matches!(member, TsSignature::Call(_) | TsSignature::Construct(_))),
        _ => false,
    }
}

/// A resolved type with a plain object member: not an array, function,
/// primitive, boolean, `any` or `unknown`.
#[must_use]
pub fn is_plain_object_type(resolved: &ResolvedType) -> bool {
    resolved.any_member(&|member| {
        let text = member.text.trim();
        !member.is_array_like
            && !member.is_function_like()
            && !member.is_primitive
            && !member.is_boolean_like
            && text != "any"
            && text != "unknown"
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sweep_parser::ast::{AstKind, NodeId};
    use sweep_parser::{Dialect, ResolvedType, Semantic, TypeService, parse};

    use super::*;

    /// Annotation of the property `value` in interface `Probe`.
    fn probe<'a>(semantic: &Semantic<'a>) -> &'a TsType {
        semantic
            .nodes()
            .find_map(|node| match node {
                AstKind::TsPropertySignature(signature)
                    if signature.key.static_name() == Some("value") =>
                {
                    signature.type_annotation.as_ref()
                }
                _ => None,
            })
            .unwrap()
    }

    fn classify(source: &str, check: impl Fn(&ShapeResolver<'_, '_>, &TsType) -> bool) -> bool {
        let parsed = parse(source, Dialect::Tsx).unwrap();
        let semantic = Semantic::new(&parsed.program);
        let aliases = AliasTable::collect(&semantic);
        let resolver = ShapeResolver::new(&aliases, None);
        check(&resolver, probe(&semantic))
    }

    #[rstest]
    #[case("interface Probe { value: string[] }", true)]
    #[case("interface Probe { value: [string, number] }", true)]
    #[case("interface Probe { value: Array<string> }", true)]
    #[case("interface Probe { value: readonly string[] }", true)]
    #[case("interface Probe { value: string | number[] }", true)]
    #[case("type Items = string[]; interface Probe { value: Items }", true)]
    #[case("type A = B; type B = string[]; interface Probe { value: A }", true)]
    #[case("interface Probe { value: Items } type Items = string[];", true)]
    #[case("type A = B; type B = A; interface Probe { value: A }", false)]
    #[case("interface Probe { value: string }", false)]
    fn arrays(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(classify(source, |r, ty| r.is_array(ty)), expected);
    }

    #[rstest]
    #[case("interface Probe { value: boolean }", true)]
    #[case("interface Probe { value?: boolean | undefined }", true)]
    #[case("interface Probe { value: true }", true)]
    #[case("type Flag = boolean; interface Probe { value: Flag }", true)]
    #[case("interface Probe { value: 'on' | 'off' }", false)]
    fn booleans(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(classify(source, |r, ty| r.is_boolean(ty)), expected);
    }

    #[rstest]
    #[case("interface Probe { value: { id: string } }", true)]
    #[case("interface User { id: string } interface Probe { value: User }", true)]
    #[case("interface Probe { value: React.RefObject<HTMLDivElement> }", true)]
    #[case("interface Probe { value: () => void }", false)]
    #[case("interface Probe { value: { (): void } }", false)]
    #[case("interface Probe { value: string[] }", false)]
    #[case("interface Probe { value: ReactNode }", false)]
    fn objects(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(classify(source, |r, ty| r.is_object(ty)), expected);
    }

    #[rstest]
    #[case("interface Probe { value: ReactNode }", ElementKind::Node, true)]
    #[case("interface Probe { value?: React.ReactNode }", ElementKind::Node, true)]
    #[case("type Slot = ReactNode | string; interface Probe { value: Slot }", ElementKind::Node, true)]
    #[case("interface Slot extends ReactElement {} interface Probe { value: Slot }", ElementKind::Element, true)]
    #[case("interface Probe { value: ReactElement }", ElementKind::Node, false)]
    #[case("interface Probe { value: string }", ElementKind::Node, false)]
    fn elements(#[case] source: &str, #[case] kind: ElementKind, #[case] expected: bool) {
        assert_eq!(classify(source, |r, ty| r.contains_element(ty, kind)), expected);
    }

    #[rstest]
    #[case("interface Probe { value: readonly string[] }", true)]
    #[case("interface Probe { value: Readonly<Config> }", true)]
    #[case("interface Probe { value: ReadonlyMap<string, number> & ReadonlySet<string> }", true)]
    #[case("interface Probe { value: ReadonlyArray<string> | string[] }", false)]
    #[case("interface Probe { value: Map<string, number> }", false)]
    #[case("interface Probe { value: string }", true)]
    #[case("interface Probe { value: 'sm' | 'lg' | null }", true)]
    #[case("interface Probe { value: string | string[] }", false)]
    #[case("interface Probe { value: object }", false)]
    fn readonly(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(classify(source, |r, ty| r.is_readonly(ty)), expected);
    }

    #[test]
    fn component_constructors() {
        assert!(classify("interface Probe { value: React.ComponentType<P> }", |r, ty| {
            r.is_component_constructor(ty)
        }));
        assert!(classify("type Icon = FC | null; interface Probe { value: Icon }", |r, ty| {
            r.is_component_constructor(ty)
        }));
        assert!(!classify("interface Probe { value: ComponentProps }", |r, ty| {
            r.is_component_constructor(ty)
        }));
    }

    struct FixedTypes(HashMap<NodeId, ResolvedType>);

    impl TypeService for FixedTypes {
        fn type_of(&self, node: NodeId) -> Option<ResolvedType> {
            self.0.get(&node).cloned()
        }
    }

    #[test]
    fn resolved_type_overrides_annotation() {
        let parsed = parse("interface Probe { value: Items }", Dialect::Tsx).unwrap();
        let semantic = Semantic::new(&parsed.program);
        let aliases = AliasTable::collect(&semantic);
        let ty = probe(&semantic);

        let array = ResolvedType {
            text: "Item[]".to_string(),
            is_array_like: true,
            ..ResolvedType::default()
        };
        let service = FixedTypes(HashMap::from([(ty.node_id(), array)]));
        assert!(ShapeResolver::new(&aliases, Some(&service as &dyn TypeService)).is_array(ty));
        assert!(!ShapeResolver::new(&aliases, None).is_array(ty));

        let text_only = ResolvedType {
            text: "string".to_string(),
            is_primitive: true,
            ..ResolvedType::default()
        };
        let service = FixedTypes(HashMap::from([(ty.node_id(), text_only)]));
        assert!(!ShapeResolver::new(&aliases, Some(&service as &dyn TypeService)).is_object(ty));
    }

    #[test]
    fn classification_is_repeatable() {
        let source = "type A = B; type B = A | string[]; interface Probe { value: A }";
        let first = classify(source, |r, ty| r.is_array(ty));
        let second = classify(source, |r, ty| r.is_array(ty) && r.is_array(ty));
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn members_of_interfaces_and_literal_aliases() {
        let parsed = parse(
            "interface A { x: string } interface A { y: string } type B = { z: number };",
            Dialect::Tsx,
        )
        .unwrap();
        let semantic = Semantic::new(&parsed.program);
        let aliases = AliasTable::collect(&semantic);
        let names = |name: &str| -> Vec<String> {
            aliases
                .members(name)
                .unwrap_or_default()
                .iter()
                .filter_map(|member| member.key_name().map(str::to_string))
                .collect()
        };
        assert_eq!(names("A"), vec!["x", "y"]);
        assert_eq!(names("B"), vec!["z"]);
        assert!(aliases.members("C").is_none());
    }
}
