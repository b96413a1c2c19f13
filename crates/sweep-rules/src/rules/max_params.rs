//! `max-params`: functions may declare at most `max` parameters.

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::AstKind;

use crate::markup::function_label;
use crate::naming::capitalize;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "max-params",
    category: RuleCategory::Core,
    description: "Enforce a maximum number of parameters in function definitions",
    messages: &[(
        "exceed",
        "{{name}} has too many parameters ({{count}}). Maximum allowed is {{max}}.",
    )],
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max: 3 }
    }
}

#[derive(Debug)]
pub struct MaxParams {
    max: usize,
}

impl Default for MaxParams {
    fn default() -> Self {
        Self {
            max: Options::default().max,
        }
    }
}

impl Configurable for MaxParams {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        Ok(Self { max: options.max })
    }
}

impl Rule for MaxParams {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        semantic
            .nodes()
            .filter_map(|node| {
                let count = match node {
                    AstKind::Function(function) => function.params.len(),
                    AstKind::ArrowFunction(arrow) => arrow.params.len(),
                    _ => return None,
                };
                (count > self.max).then(|| {
                    Diagnostic::new(node.span(), "exceed")
                        .with("name", capitalize(&function_label(semantic, node)))
                        .with("count", count)
                        .with("max", self.max)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::{data, findings, lint_with, messages};

    #[rstest]
    #[case("function pick(a, b, c) { return a + b + c; }")]
    #[case("const pick = (a, b) => a + b;")]
    #[case("type Handler = (a: string, b: string, c: string, d: string) => void;")]
    #[case("function Card({ title, body, footer, tone }: CardProps) { return <div />; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&MaxParams::default(), source).is_empty());
    }

    #[rstest]
    #[case("function pick(a, b, c, d) {}", "Function 'pick'", "4")]
    #[case("const pick = (a, b, c, d, ...rest) => a;", "Function 'pick'", "5")]
    #[case("class Store { save(a, b, c, d) {} }", "Method 'save'", "4")]
    #[case("run(function (a, b = 1, c, d) {});", "Function", "4")]
    fn invalid(#[case] source: &str, #[case] name: &str, #[case] count: &str) {
        assert_eq!(
            findings(&MaxParams::default(), source),
            vec![("exceed", data(&[("name", name), ("count", count), ("max", "3")]))]
        );
    }

    #[test]
    fn max_is_configurable() {
        let source = "function pick(a, b, c, d) {}";
        assert!(lint_with::<MaxParams>(json!({"max": 4}), source).is_empty());
        assert_eq!(lint_with::<MaxParams>(json!({"max": 1}), "const f = (a, b) => a;").len(), 1);
        assert!(MaxParams::from_options(Some(&json!({"maximum": 2}))).is_err());
    }

    #[test]
    fn message() {
        assert_eq!(
            messages(&MaxParams::default(), "function pick(a, b, c, d) {}"),
            vec!["Function 'pick' has too many parameters (4). Maximum allowed is 3."]
        );
    }
}
