//! `prefer-const`: a `let` whose bindings are all initialized and never
//! written again should be `const`.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::Semantic;
use sweep_parser::ast::{AstKind, BindingIdentifier, ForInLeft, VariableKind};

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "prefer-const",
    category: RuleCategory::Core,
    description: "Require const declarations for variables that are never reassigned after declared",
    messages: &[("useConst", "'{{name}}' is never reassigned. Use 'const' instead.")],
};

#[derive(Debug, Default)]
pub struct PreferConst;

impl Configurable for PreferConst {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn never_written(semantic: &Semantic<'_>, binding: &BindingIdentifier) -> bool {
    semantic
        .symbol_for_binding(binding.node_id)
        .is_some_and(|symbol| !semantic.references_to(symbol).any(|reference| reference.is_write()))
}

fn use_const(bindings: &[&BindingIdentifier]) -> Vec<Diagnostic> {
    bindings
        .iter()
        .map(|binding| Diagnostic::new(binding.span, "useConst").with("name", &binding.name))
        .collect()
}

impl Rule for PreferConst {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut diagnostics = Vec::new();
        for node in semantic.nodes() {
            match node {
                AstKind::VariableDeclaration(declaration) if declaration.kind == VariableKind::Let => {
                    for declarator in &declaration.declarations {
                        if declarator.init.is_none() {
                            continue;
                        }
                        let bindings = declarator.binding.binding_identifiers();
                        if !bindings.is_empty() && bindings.iter().all(|binding| never_written(semantic, binding)) {
                            diagnostics.extend(use_const(&bindings));
                        }
                    }
                }
                // `for (let item of items)` binds a fresh, initialized name per iteration.
                AstKind::ForInStatement(statement) => {
                    if let ForInLeft::Declaration {
                        kind: VariableKind::Let,
                        binding,
                    } = &statement.left
                    {
                        let bindings = binding.binding_identifiers();
                        if !bindings.is_empty() && bindings.iter().all(|binding| never_written(semantic, binding)) {
                            diagnostics.extend(use_const(&bindings));
                        }
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

    use super::*;
    use crate::test_support::helpers::{data, findings, messages};

    #[rstest]
    #[case("const total = 1;")]
    #[case("let total = 1; total = 2;")]
    #[case("let total = 1; total += 2;")]
    #[case("let count = 0; function bump() { count++; }")]
    #[case("let pending; pending = load();")]
    #[case("let { a, b } = source; a = 1;")]
    #[case("let [first] = list; [first] = other;")]
    #[case("for (let index = 0; index < 3; index++) {}")]
    #[case("for (let key in source) { key = key.trim(); }")]
    #[case("var legacy = 1;")]
    fn valid(#[case] source: &str) {
        assert!(findings(&PreferConst, source).is_empty());
    }

    #[rstest]
    #[case("let total = 1; consume(total);", vec!["total"])]
    #[case("let { a, b } = source;", vec!["a", "b"])]
    #[case("function f() { let label = 'x'; return label; }", vec!["label"])]
    #[case("for (let item of items) { consume(item); }", vec!["item"])]
    #[case("let ready = true, pending; pending = 1;", vec!["ready"])]
    fn invalid(#[case] source: &str, #[case] names: Vec<&str>) {
        let expected: Vec<_> = names
            .into_iter()
            .map(|name| ("useConst", data(&[("name", name)])))
            .collect();
        assert_eq!(findings(&PreferConst, source), expected);
    }

    #[test]
    fn message() {
        assert_eq!(
            messages(&PreferConst, "let total = 1;"),
            vec!["'total' is never reassigned. Use 'const' instead."]
        );
    }
}
