//! Component discovery and the cross-reference edges between components:
//! self-closing handoffs and props that are only forwarded.

use std::collections::BTreeSet;

use sweep_core::Span;
use sweep_parser::Semantic;
use sweep_parser::ast::{
    AstKind, BindingIdentifier, Expression, FunctionKind, JsxAttributeName, JsxChild,
    JsxElement, JsxElementName, JsxFragment, NodeId, Param, Pattern, PropertyKey,
};

use crate::markup::{Body, NamedFunction, named_functions, returned_expressions};
use crate::naming::starts_uppercase;

// ── Components ─────────────────────────────────────────────────────

/// Named functions whose name starts with `A`-`Z`, in source order.
#[must_use]
pub fn components<'a>(semantic: &Semantic<'a>) -> Vec<NamedFunction<'a>> {
    named_functions(semantic)
        .into_iter()
        .filter(|function| starts_uppercase(function.name()))
        .collect()
}

/// Where a component-level finding is reported: the whole declaration for
/// `function Name() {}`, the binding for `const Name = () => …`.
#[must_use]
pub fn report_span(component: &NamedFunction<'_>) -> Span {
    match component.function {
        AstKind::Function(function) if function.kind == FunctionKind::Declaration => function.span,
        _ => component.name.span,
    }
}

/// Custom component an element name refers to: `Card` for `<Card>` and
/// `<Card.Header>`. Intrinsic elements have none.
#[must_use]
pub fn custom_element_name(name: &JsxElementName) -> Option<&str> {
    let candidate = match name {
        JsxElementName::Identifier(ident) => ident.name.as_str(),
        JsxElementName::Member(member) if member.segments.len() == 2 => member.segments[0].as_str(),
        _ => return None,
    };
    starts_uppercase(candidate).then_some(candidate)
}

// ── Handoff edges ──────────────────────────────────────────────────

/// Custom components rendered self-closing anywhere in the markup the body
/// returns, without descending into other functions.
#[must_use]
pub fn self_closing_children(body: Option<Body<'_>>) -> Vec<String> {
    let mut names = Vec::new();
    let roots: Vec<&Expression> = match body {
        Some(Body::Expression(expression)) => vec![expression],
        Some(Body::Block(block)) => returned_expressions(block),
        None => Vec::new(),
    };
    for root in roots {
        collect_from_expression(root, &mut names);
    }
    names
}

fn collect_from_expression(expression: &Expression, names: &mut Vec<String>) {
    match expression {
        Expression::JsxElement(element) => collect_from_element(element, names),
        Expression::JsxFragment(fragment) => collect_from_fragment(fragment, names),
        Expression::Parenthesized(inner) => collect_from_expression(&inner.expression, names),
        Expression::Conditional(conditional) => {
            collect_from_expression(&conditional.consequent, names);
            collect_from_expression(&conditional.alternate, names);
        }
        Expression::Logical(logical) => {
            collect_from_expression(&logical.left, names);
            collect_from_expression(&logical.right, names);
        }
        _ => {}
    }
}

fn collect_from_element(element: &JsxElement, names: &mut Vec<String>) {
    if element.self_closing
        && let Some(name) = custom_element_name(&element.opening.name)
        && !names.iter().any(|seen| seen == name)
    {
        names.push(name.to_string());
    }
    collect_from_children(&element.children, names);
}

fn collect_from_fragment(fragment: &JsxFragment, names: &mut Vec<String>) {
    collect_from_children(&fragment.children, names);
}

fn collect_from_children(children: &[JsxChild], names: &mut Vec<String>) {
    for child in children {
        match child {
            JsxChild::Element(element) => collect_from_element(element, names),
            JsxChild::Fragment(fragment) => collect_from_fragment(fragment, names),
            JsxChild::ExpressionContainer(container) => {
                if let Some(expression) = &container.expression {
                    collect_from_expression(expression, names);
                }
            }
            JsxChild::Text(_) => {}
        }
    }
}

// ── Prop bindings ──────────────────────────────────────────────────

/// One name destructured from a component's first parameter.
#[derive(Debug, Clone, Copy)]
pub struct PropBinding<'a> {
    /// Prop key; the local name for a rest binding.
    pub prop: &'a str,
    pub is_rest: bool,
    pub local: &'a BindingIdentifier,
}

impl PropBinding<'_> {
    #[must_use]
    pub fn prop_label(&self) -> String {
        if self.is_rest {
            format!("...{}", self.local.name)
        } else {
            self.prop.to_string()
        }
    }
}

/// Bindings of an object pattern in the first parameter: `{ a, b: c, d = 1 }`
/// yields `a`, `c` (prop `b`) and `d`. Nested patterns are skipped.
#[must_use]
pub fn prop_bindings(params: &[Param], include_rest: bool) -> Vec<PropBinding<'_>> {
    let Some(first) = params.first() else {
        return Vec::new();
    };
    let pattern = match &first.pattern {
        Pattern::Assignment(assignment) => &assignment.left,
        other => other,
    };
    let Pattern::Object(object) = pattern else {
        return Vec::new();
    };
    let mut bindings = Vec::new();
    for property in &object.properties {
        let local = match &property.value {
            Pattern::Identifier(ident) => ident,
            Pattern::Assignment(assignment) => match &assignment.left {
                Pattern::Identifier(ident) => ident,
                _ => continue,
            },
            _ => continue,
        };
        let prop = match &property.key {
            PropertyKey::Identifier(name) => name.name.as_str(),
            PropertyKey::String(literal) => literal.value.as_str(),
            _ => local.name.as_str(),
        };
        bindings.push(PropBinding {
            prop,
            is_rest: false,
            local,
        });
    }
    if include_rest
        && let Some(rest) = &object.rest
        && let Pattern::Identifier(ident) = &rest.argument
    {
        bindings.push(PropBinding {
            prop: ident.name.as_str(),
            is_rest: true,
            local: ident,
        });
    }
    bindings
}

// ── Forwarding ─────────────────────────────────────────────────────

/// A prop that is read only to be handed, unchanged, to JSX attributes or
/// spreads.
#[derive(Debug, Clone)]
pub struct ForwardedProp<'a> {
    pub binding: PropBinding<'a>,
    /// Attribute names (or `props spread`) it reaches, sorted.
    pub targets: BTreeSet<String>,
    /// Custom components receiving it, in first-use order.
    pub components: Vec<String>,
}

impl ForwardedProp<'_> {
    /// `a, b` for the targets, or `child prop` when there are none.
    #[must_use]
    pub fn targets_label(&self) -> String {
        if self.targets.is_empty() {
            "child prop".to_string()
        } else {
            self.targets.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

enum Use {
    Owned,
    Forwarded {
        target: String,
        component: Option<String>,
    },
}

/// Props of `component` that are used at least once and only ever as a
/// direct attribute value or spread argument. `children` is never reported.
#[must_use]
pub fn forwarded_props<'a>(
    semantic: &Semantic<'a>,
    component: &NamedFunction<'a>,
    include_rest: bool,
) -> Vec<ForwardedProp<'a>> {
    let mut forwarded = Vec::new();
    for binding in prop_bindings(component.params, include_rest) {
        if !binding.is_rest && binding.prop == "children" {
            continue;
        }
        let Some(symbol) = semantic.symbol_for_binding(binding.local.node_id) else {
            continue;
        };
        let mut seen = false;
        let mut owned = false;
        let mut targets = BTreeSet::new();
        let mut components: Vec<String> = Vec::new();
        for reference in semantic.references_to(symbol) {
            seen = true;
            match classify_use(semantic, reference.node_id) {
                Use::Owned => {
                    owned = true;
                    break;
                }
                Use::Forwarded { target, component } => {
                    targets.insert(target);
                    if let Some(component) = component
                        && !components.contains(&component)
                    {
                        components.push(component);
                    }
                }
            }
        }
        if seen && !owned {
            forwarded.push(ForwardedProp {
                binding,
                targets,
                components,
            });
        }
    }
    forwarded
}

fn classify_use(semantic: &Semantic<'_>, node: NodeId) -> Use {
    let mut parent = semantic.parent(node);
    while let Some(AstKind::ParenthesizedExpression(wrapper)) = parent {
        parent = semantic.parent(wrapper.node_id);
    }
    match parent {
        Some(AstKind::JsxExpressionContainer(container)) => {
            let Some(AstKind::JsxAttribute(attribute)) = semantic.parent(container.node_id) else {
                return Use::Owned;
            };
            let JsxAttributeName::Identifier(name) = &attribute.name else {
                return Use::Owned;
            };
            Use::Forwarded {
                target: name.name.clone(),
                component: receiving_component(semantic, attribute.node_id),
            }
        }
        Some(AstKind::JsxSpreadAttribute(spread)) => Use::Forwarded {
            target: "props spread".to_string(),
            component: receiving_component(semantic, spread.node_id),
        },
        _ => Use::Owned,
    }
}

fn receiving_component(semantic: &Semantic<'_>, attribute: NodeId) -> Option<String> {
    match semantic.parent(attribute)? {
        AstKind::JsxOpeningElement(opening) => custom_element_name(&opening.name).map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sweep_parser::{Dialect, parse};

    use super::*;

    fn with_components<R>(
        source: &str,
        f: impl for<'a> FnOnce(&Semantic<'a>, &[NamedFunction<'a>]) -> R,
    ) -> R {
        let parsed = parse(source, Dialect::Tsx).unwrap();
        let semantic = Semantic::new(&parsed.program);
        let found = components(&semantic);
        f(&semantic, &found)
    }

    #[test]
    fn only_capitalized_functions_are_components() {
        let names = with_components(
            "function Card() {} const row = () => null; const Panel = function () {};",
            |_, found| found.iter().map(|c| c.name().to_string()).collect::<Vec<_>>(),
        );
        assert_eq!(names, vec!["Card", "Panel"]);
    }

    #[rstest]
    #[case("const A = () => <B />;", vec!["B"])]
    #[case("function A() { return <div><B /><C.Item /></div>; }", vec!["B", "C"])]
    #[case("function A() { return ok ? <B /> : <C />; }", vec!["B", "C"])]
    #[case("function A() { return <B>text</B>; }", vec![])]
    #[case("function A() { return <input />; }", vec![])]
    #[case("function A() { const r = () => <B />; return <div />; }", vec![])]
    #[case("function A() { return <>{open && <B />}</>; }", vec!["B"])]
    fn handoff_edges(#[case] source: &str, #[case] expected: Vec<&str>) {
        let children = with_components(source, |_, found| self_closing_children(found[0].body));
        assert_eq!(children, expected);
    }

    #[test]
    fn prop_bindings_cover_renames_defaults_and_rest() {
        let labels = with_components(
            "function A({ a, b: c, d = 1, 'e': f, g: { h }, ...rest }) {}",
            |_, found| {
                prop_bindings(found[0].params, true)
                    .iter()
                    .map(|binding| (binding.prop_label(), binding.local.name.clone()))
                    .collect::<Vec<_>>()
            },
        );
        assert_eq!(
            labels,
            vec![
                ("a".to_string(), "a".to_string()),
                ("b".to_string(), "c".to_string()),
                ("d".to_string(), "d".to_string()),
                ("e".to_string(), "f".to_string()),
                ("...rest".to_string(), "rest".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("function Card({ title }) { return <Header title={title} />; }", vec![("title", "title", "Header")])]
    #[case("function Card({ title }) { return <h1>{title.toUpperCase()}</h1>; }", vec![])]
    #[case("function Card({ title }) { return <Header title={title}>{title}</Header>; }", vec![])]
    #[case("function Card({ data }) { return <Header {...data} />; }", vec![("data", "props spread", "Header")])]
    #[case("function Card({ children }) { return <Header children={children} />; }", vec![])]
    #[case("function Card({ title }) { return <div />; }", vec![])]
    fn forwarding(#[case] source: &str, #[case] expected: Vec<(&str, &str, &str)>) {
        let found = with_components(source, |semantic, found| {
            forwarded_props(semantic, &found[0], false)
                .iter()
                .map(|prop| {
                    (
                        prop.binding.prop.to_string(),
                        prop.targets_label(),
                        prop.components.join(","),
                    )
                })
                .collect::<Vec<_>>()
        });
        let expected: Vec<_> = expected
            .into_iter()
            .map(|(a, b, c)| (a.to_string(), b.to_string(), c.to_string()))
            .collect();
        assert_eq!(found, expected);
    }
}
