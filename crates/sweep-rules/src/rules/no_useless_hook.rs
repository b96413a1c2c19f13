//! `no-useless-hook`: a `use*` function has to call at least one hook.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::markup::{body_calls, callee_name, named_functions};
use crate::naming::{HOOK_NAMES, is_hook_name};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-useless-hook",
    category: RuleCategory::React,
    description: "Disallow use* functions that do not call any React hook (useState, useEffect, useReducer, useRef, useContext)",
    messages: &[(
        "noUselessHook",
        "Function '{{name}}' is named like a hook but does not call React hooks.",
    )],
};

#[derive(Debug, Default)]
pub struct NoUselessHook;

impl Configurable for NoUselessHook {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn is_hook_callee(name: &str) -> bool {
    HOOK_NAMES.contains(&name) || is_hook_name(name)
}

impl Rule for NoUselessHook {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        named_functions(ctx.semantic())
            .into_iter()
            .filter(|function| is_hook_name(function.name()))
            .filter(|function| {
                !function.body.is_some_and(|body| {
                    body_calls(body, |callee| callee_name(callee).is_some_and(is_hook_callee))
                })
            })
            .map(|function| {
                Diagnostic::new(function.name.span, "noUselessHook").with("name", function.name())
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
    #[case("function useWidget() { const [open, setOpen] = useState(false); return { open, setOpen }; }")]
    #[case("const useTheme = () => React.useContext(ThemeContext);")]
    #[case("const useToggle = function () { return useBoolean(false); };")]
    #[case("function useEffectOnce(fn) { useEffect(fn, []); }")]
    #[case("const use = () => 1;")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoUselessHook, source).is_empty());
    }

    #[rstest]
    #[case("function useWidget() { return { size: 1 }; }", "useWidget")]
    #[case("const useFormat = (value) => value.trim();", "useFormat")]
    #[case("const useLater = () => { const f = () => useState(0); return f; };", "useLater")]
    #[case("function user() { return {}; }", "user")]
    fn invalid(#[case] source: &str, #[case] name: &str) {
        assert_eq!(
            findings(&NoUselessHook, source),
            vec![("noUselessHook", data(&[("name", name)]))]
        );
    }
}
