//! `no-param-reassign`: parameters are inputs, not scratch variables.
//!
//! Every write reference to a parameter binding is reported. With
//! `props: true`, assignments, updates and `delete`s through a member chain
//! rooted at a parameter (`options.retries = 3`, `delete state.cache[key]`)
//! are reported too.

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::Semantic;
use sweep_parser::ast::{AssignmentTarget, AstKind, Expression, ForInLeft, IdentifierReference, Pattern};
use sweep_parser::semantic::DeclKind;

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-param-reassign",
    category: RuleCategory::Core,
    description: "Disallow reassigning function parameters",
    messages: &[
        ("assignmentToFunctionParam", "Assignment to function parameter '{{name}}'."),
        (
            "assignmentToFunctionParamProp",
            "Assignment to property of function parameter '{{name}}'.",
        ),
    ],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub props: bool,
}

#[derive(Debug, Default)]
pub struct NoParamReassign {
    props: bool,
}

impl Configurable for NoParamReassign {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        Ok(Self { props: options.props })
    }
}

/// Identifier a member chain like `a.b[c].d` starts from, through
/// parentheses and casts.
fn chain_root(mut current: &Expression) -> Option<&IdentifierReference> {
    loop {
        match current.without_wrappers() {
            Expression::Identifier(ident) => return Some(ident),
            Expression::Member(member) => current = &member.object,
            _ => return None,
        }
    }
}

fn member_root(expression: &Expression) -> Option<&IdentifierReference> {
    match expression.without_wrappers() {
        Expression::Member(member) => chain_root(&member.object),
        _ => None,
    }
}

/// Member expressions nested in a destructuring assignment target.
fn pattern_members<'a>(pattern: &'a Pattern, out: &mut Vec<&'a Expression>) {
    match pattern {
        Pattern::Identifier(_) => {}
        Pattern::Object(object) => {
            for property in &object.properties {
                pattern_members(&property.value, out);
            }
            if let Some(rest) = &object.rest {
                pattern_members(&rest.argument, out);
            }
        }
        Pattern::Array(array) => {
            for element in array.elements.iter().flatten() {
                pattern_members(element, out);
            }
            if let Some(rest) = &array.rest {
                pattern_members(&rest.argument, out);
            }
        }
        Pattern::Assignment(assignment) => pattern_members(&assignment.left, out),
        Pattern::Rest(rest) => pattern_members(&rest.argument, out),
        Pattern::Expression(expression) => out.push(expression),
    }
}

fn target_members(target: &AssignmentTarget) -> Vec<&Expression> {
    let mut out = Vec::new();
    if let AssignmentTarget::Pattern(pattern) = target {
        pattern_members(pattern, &mut out);
    }
    out
}

fn is_parameter(semantic: &Semantic<'_>, ident: &IdentifierReference) -> bool {
    semantic
        .resolve(ident.node_id)
        .is_some_and(|symbol| semantic.symbol(symbol).kind == DeclKind::Param)
}

impl NoParamReassign {
    fn reassignments(semantic: &Semantic<'_>) -> Vec<Diagnostic> {
        semantic
            .symbols()
            .iter()
            .filter(|symbol| symbol.kind == DeclKind::Param)
            .flat_map(|symbol| {
                symbol
                    .references()
                    .map(|reference| semantic.reference(reference))
                    .filter(|reference| reference.is_write())
                    .filter_map(|reference| {
                        let span = semantic.kind(reference.node_id)?.span();
                        Some(Diagnostic::new(span, "assignmentToFunctionParam").with("name", &symbol.name))
                    })
            })
            .collect()
    }

    fn property_writes(semantic: &Semantic<'_>) -> Vec<Diagnostic> {
        let mut roots: Vec<&IdentifierReference> = Vec::new();
        for node in semantic.nodes() {
            match node {
                AstKind::AssignmentExpression(assignment) => match &assignment.target {
                    AssignmentTarget::Member(member) => roots.extend(chain_root(&member.object)),
                    target => roots.extend(target_members(target).into_iter().filter_map(member_root)),
                },
                AstKind::UpdateExpression(update) => roots.extend(member_root(&update.argument)),
                AstKind::UnaryExpression(unary) if unary.operator == "delete" => {
                    roots.extend(member_root(&unary.argument));
                }
                AstKind::ForInStatement(statement) => match &statement.left {
                    ForInLeft::Target(AssignmentTarget::Member(member)) => roots.extend(chain_root(&member.object)),
                    ForInLeft::Target(target) => {
                        roots.extend(target_members(target).into_iter().filter_map(member_root));
                    }
                    ForInLeft::Declaration { .. } => {}
                },
                _ => {}
            }
        }
        roots
            .into_iter()
            .filter(|ident| is_parameter(semantic, ident))
            .map(|ident| Diagnostic::new(ident.span, "assignmentToFunctionParamProp").with("name", &ident.name))
            .collect()
    }
}

impl Rule for NoParamReassign {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut diagnostics = Self::reassignments(semantic);
        if self.props {
            diagnostics.extend(Self::property_writes(semantic));
        }
        diagnostics.sort_by_key(|diagnostic| diagnostic.span.start);
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::{data, findings, lint_with};

    #[rstest]
    #[case("function f(a) { const b = a; return b; }")]
    #[case("function f(a) { a.b = 1; delete a.c; a.count++; }")]
    #[case("function f() { let a = 1; a = 2; return a; }")]
    #[case("let a = 1; function f() { a = 2; }")]
    #[case("function f(a) { function g() { let a = 1; a = 2; } return g; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoParamReassign::default(), source).is_empty());
    }

    #[rstest]
    #[case("function f(a) { a = 1; }")]
    #[case("const f = (a) => { a += 1; };")]
    #[case("function f(a) { a++; }")]
    #[case("function f({ a }) { a = 1; }")]
    #[case("function f(a = 1) { a = 2; }")]
    #[case("function f(a) { [a] = [1]; }")]
    #[case("function f(a) { for (a of list) {} }")]
    #[case("function f(a) { return () => { a = 1; }; }")]
    fn reassignments(#[case] source: &str) {
        assert_eq!(
            findings(&NoParamReassign::default(), source),
            vec![("assignmentToFunctionParam", data(&[("name", "a")]))]
        );
    }

    #[rstest]
    #[case("function f(a) { a.b = 1; }")]
    #[case("function f(a) { a.b.c = 1; }")]
    #[case("function f(a) { a[key] += 1; }")]
    #[case("function f(a) { a.count++; }")]
    #[case("function f(a) { delete a.cache[key]; }")]
    #[case("function f(a) { [a.first] = list; }")]
    #[case("function f(a) { ({ x: a.x } = point); }")]
    #[case("function f(a) { for (a.key in source) {} }")]
    fn property_writes(#[case] source: &str) {
        assert_eq!(
            lint_with::<NoParamReassign>(json!({"props": true}), source),
            vec![("assignmentToFunctionParamProp", data(&[("name", "a")]))]
        );
    }

    #[rstest]
    #[case("function f(a) { a.b(); a.c.push(1); }")]
    #[case("function f(a) { const b = {}; b.c = a; delete b.c; }")]
    #[case("function f(a) { a().b = 1; }")]
    fn property_reads_are_fine(#[case] source: &str) {
        assert!(lint_with::<NoParamReassign>(json!({"props": true}), source).is_empty());
    }

    #[test]
    fn reports_in_source_order() {
        let source = "function f(a, b) { b.x = 1; a = 2; }";
        let found: Vec<&str> = lint_with::<NoParamReassign>(json!({"props": true}), source)
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(found, vec!["assignmentToFunctionParamProp", "assignmentToFunctionParam"]);
    }
}
