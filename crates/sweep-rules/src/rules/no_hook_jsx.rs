//! `no-hook-jsx`: `use*` functions return data, never markup.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::markup::{Body, contains_jsx, named_functions, returned_expressions};
use crate::naming::is_hook_name;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-hook-jsx",
    category: RuleCategory::React,
    description: "Disallow use* functions that return JSX. Hooks should return values, not components.",
    messages: &[(
        "noHookJsx",
        "Function '{{name}}' is named like a hook but returns JSX. Hooks should return data, not render. Use a component instead.",
    )],
};

#[derive(Debug, Default)]
pub struct NoHookJsx;

impl Configurable for NoHookJsx {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

/// Markup in any value the body returns. Returns inside nested functions
/// are not the hook's own, but markup nested in a returned value is.
fn returns_markup(body: Body<'_>) -> bool {
    match body {
        Body::Expression(expression) => contains_jsx(expression),
        Body::Block(block) => returned_expressions(block).into_iter().any(contains_jsx),
    }
}

impl Rule for NoHookJsx {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        named_functions(ctx.semantic())
            .into_iter()
            .filter(|function| is_hook_name(function.name()))
            .filter(|function| function.body.is_some_and(returns_markup))
            .map(|function| {
                Diagnostic::new(function.name.span, "noHookJsx").with("name", function.name())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{data, findings};

    #[rstest]
    #[case("function useItems() { const [items] = useState([]); return items; }")]
    #[case("function useRenderer() { const render = () => { return <div />; }; return { render: 1 }; }")]
    #[case("function Widget() { return <div />; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoHookJsx, source).is_empty());
    }

    #[rstest]
    #[case("function useBadge() { return <span />; }", "useBadge")]
    #[case("const useIcon = () => <svg />;", "useIcon")]
    #[case("const useMaybe = () => (ok ? <b /> : null);", "useMaybe")]
    #[case("function useList(items) { if (!items) { return null; } return items.map((item) => <li key={item} />); }", "useList")]
    #[case("function useSlot() { return { slot: <>x</> }; }", "useSlot")]
    fn invalid(#[case] source: &str, #[case] name: &str) {
        assert_eq!(
            findings(&NoHookJsx, source),
            vec![("noHookJsx", data(&[("name", name)]))]
        );
    }
}
