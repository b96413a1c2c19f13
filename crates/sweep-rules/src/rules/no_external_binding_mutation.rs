//! `no-external-binding-mutation`: a function may reassign and call
//! methods on its own locals only. Parameters and bindings from enclosing
//! scopes or imports are off limits, except for method calls on receivers
//! typed as readonly.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::Diagnostic;
use sweep_core::RuleCategory;
use sweep_parser::ast::{AssignmentTarget, AstKind, Expression, IdentifierReference, NodeId, TsType};
use sweep_parser::semantic::SymbolId;

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-external-binding-mutation",
    category: RuleCategory::Core,
    description: "Disallow mutating parameters and bindings declared outside the current function",
    messages: &[
        (
            "noExternalBindingMutation",
            "Only mutate local bindings. '{{name}}' is external or a parameter.",
        ),
        (
            "noExternalBindingCallRequiresReadonly",
            "Method calls on external or parameter binding '{{name}}' require a readonly type annotation.",
        ),
    ],
};

#[derive(Debug, Default)]
pub struct NoExternalBindingMutation;

impl Configurable for NoExternalBindingMutation {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn identifier(expression: &Expression) -> Option<&IdentifierReference> {
    match expression.without_wrappers() {
        Expression::Identifier(ident) => Some(ident),
        _ => None,
    }
}

/// Symbol behind `ident` when it is a parameter of, or declared outside,
/// the function around `node`. Unresolved names and top-level code never
/// qualify.
fn foreign_symbol(ctx: &RuleContext<'_>, node: NodeId, ident: &IdentifierReference) -> Option<SymbolId> {
    let semantic = ctx.semantic();
    let function = semantic.enclosing_function(node)?;
    let symbol = semantic.resolve(ident.node_id)?;
    ctx.function_state(function)
        .is_external_or_parameter(symbol)
        .then_some(symbol)
}

fn declared_annotation<'a>(ctx: &RuleContext<'a>, symbol: SymbolId) -> Option<&'a TsType> {
    match ctx.semantic().declaration(symbol)? {
        AstKind::Param(param) => param.type_annotation.as_ref(),
        AstKind::VariableDeclarator(declarator) => declarator.type_annotation.as_ref(),
        _ => None,
    }
}

fn receiver_is_readonly(ctx: &RuleContext<'_>, receiver: &IdentifierReference, symbol: SymbolId) -> bool {
    if declared_annotation(ctx, symbol).is_some_and(|annotation| ctx.shapes().is_readonly(annotation)) {
        return true;
    }
    ctx.resolved_type(receiver.node_id)
        .is_some_and(|ty| ty.every_constituent(&|member| member.is_readonly || member.is_primitive))
}

fn mutation(ident: &IdentifierReference) -> Diagnostic {
    Diagnostic::new(ident.span, "noExternalBindingMutation").with("name", &ident.name)
}

impl Rule for NoExternalBindingMutation {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for node in ctx.semantic().nodes() {
            match node {
                AstKind::AssignmentExpression(assignment) => {
                    if let AssignmentTarget::Identifier(ident) = &assignment.target
                        && foreign_symbol(ctx, assignment.node_id, ident).is_some()
                    {
                        diagnostics.push(mutation(ident));
                    }
                }
                AstKind::UpdateExpression(update) => {
                    if let Some(ident) = identifier(&update.argument)
                        && foreign_symbol(ctx, update.node_id, ident).is_some()
                    {
                        diagnostics.push(mutation(ident));
                    }
                }
                AstKind::CallExpression(call) => {
                    let Expression::Member(member) = call.callee.without_wrappers() else {
                        continue;
                    };
                    let Expression::Identifier(receiver) = &member.object else {
                        continue;
                    };
                    let Some(symbol) = foreign_symbol(ctx, call.node_id, receiver) else {
                        continue;
                    };
                    if !receiver_is_readonly(ctx, receiver, symbol) {
                        diagnostics.push(
                            Diagnostic::new(receiver.span, "noExternalBindingCallRequiresReadonly")
                                .with("name", &receiver.name),
                        );
                    }
                }
                _ => {}
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sweep_parser::ResolvedType;

    use super::*;
    use crate::test_support::helpers::{data, findings, run_with};

    fn found(id: &'static str, name: &str) -> (&'static str, sweep_core::DiagnosticData) {
        (id, data(&[("name", name)]))
    }

    #[rstest]
    #[case("function update() { let count = 0; count = 1; return count; }")]
    #[case("function fill() { const cache = new Map(); cache.set('a', 1); return cache; }")]
    #[case("function read(cache: ReadonlyMap<string, number>) { return cache.get('a'); }")]
    #[case("function read(values: ReadonlyArray<string>) { return values.includes('a'); }")]
    #[case("function read(values: readonly string[]) { return values.includes('a'); }")]
    #[case("function read(values: Readonly<Settings> | ReadonlySet<string>) { return values.has('a'); }")]
    #[case("const limits: ReadonlyArray<number> = [1]; function read() { return limits.at(0); }")]
    #[case("function check() { const test = 'x'; return test.includes('x'); }")]
    #[case("function log() { console.log('x'); undeclared = 1; }")]
    #[case("let total = 0; total = 1; total++;")]
    #[case("function clean(label: string) { return label.trim(); }")]
    #[case("function format(amount: number) { return amount.toFixed(2); }")]
    #[case("function pick(size: 'sm' | 'lg' | undefined) { return size?.toUpperCase(); }")]
    #[case("function show(value: string | ReadonlyArray<string>) { return value.includes('a'); }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoExternalBindingMutation, source).is_empty());
    }

    #[rstest]
    #[case("let count = 0; function bump() { count = count + 1; }", "noExternalBindingMutation", "count")]
    #[case("function bump(count: number) { count++; return count; }", "noExternalBindingMutation", "count")]
    #[case("const cache = new Map(); function fill() { cache.set('a', 1); }", "noExternalBindingCallRequiresReadonly", "cache")]
    #[case("function reset(target: Set<string>) { target.clear(); }", "noExternalBindingCallRequiresReadonly", "target")]
    #[case("import { counter } from './counter'; function tick() { counter.increment(); }", "noExternalBindingCallRequiresReadonly", "counter")]
    #[case("function check(values: Array<string>) { return values.includes('a'); }", "noExternalBindingCallRequiresReadonly", "values")]
    #[case("function clear(items: string[]) { items = []; }", "noExternalBindingMutation", "items")]
    #[case("let step = 0; const next = () => { step += 1; };", "noExternalBindingMutation", "step")]
    #[case("function show(value: string | string[]) { return value.includes('a'); }", "noExternalBindingCallRequiresReadonly", "value")]
    fn invalid(#[case] source: &str, #[case] id: &'static str, #[case] name: &str) {
        assert_eq!(findings(&NoExternalBindingMutation, source), vec![found(id, name)]);
    }

    #[test]
    fn nested_function_cannot_touch_outer_locals() {
        let source = r"
            function outer() {
                let seen = 0;
                seen += 1;
                function inner() { seen = 2; }
                return inner;
            }
        ";
        assert_eq!(
            findings(&NoExternalBindingMutation, source),
            vec![found("noExternalBindingMutation", "seen")]
        );
    }

    #[test]
    fn resolved_readonly_type_exempts_method_calls() {
        let source = "function read(values: Items) { return values.includes('a'); }";
        let readonly = ResolvedType {
            text: "readonly string[]".to_string(),
            is_array_like: true,
            is_readonly: true,
            ..ResolvedType::default()
        };
        assert!(run_with(&NoExternalBindingMutation, "read.ts", source, &[("values", readonly)]).is_empty());
        assert_eq!(run_with(&NoExternalBindingMutation, "read.ts", source, &[]).len(), 1);
    }

    #[test]
    fn resolved_primitive_type_exempts_method_calls() {
        let source = "function clean(label: Label) { return label.trim(); }";
        let primitive = ResolvedType {
            text: "string".to_string(),
            is_primitive: true,
            ..ResolvedType::default()
        };
        assert!(run_with(&NoExternalBindingMutation, "clean.ts", source, &[("label", primitive)]).is_empty());
        assert_eq!(run_with(&NoExternalBindingMutation, "clean.ts", source, &[]).len(), 1);
    }

    #[test]
    fn resolved_union_needs_every_member_readonly_or_primitive() {
        let source = "function show(value: Value) { return value.includes('a'); }";
        let union = |second_readonly: bool| ResolvedType {
            text: "string | string[]".to_string(),
            union: vec![
                ResolvedType {
                    is_primitive: true,
                    ..ResolvedType::default()
                },
                ResolvedType {
                    is_array_like: true,
                    is_readonly: second_readonly,
                    ..ResolvedType::default()
                },
            ],
            ..ResolvedType::default()
        };
        assert!(run_with(&NoExternalBindingMutation, "show.ts", source, &[("value", union(true))]).is_empty());
        assert_eq!(run_with(&NoExternalBindingMutation, "show.ts", source, &[("value", union(false))]).len(), 1);
    }

    #[test]
    fn reports_on_the_receiver() {
        let source = "function reset(target: Set<string>) { target.clear(); }";
        let diagnostics = run_with(&NoExternalBindingMutation, "reset.ts", source, &[]);
        assert_eq!(diagnostics[0].span.source_text(source), "target");
    }
}
