//! `no-set-prefix-utils`: `set*` names are reserved for `useState` setters.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{AstKind, BindingIdentifier, FunctionKind};

use crate::markup::function_init;
use crate::naming::has_word_prefix;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-set-prefix-utils",
    category: RuleCategory::React,
    description: "Forbid util/helper functions prefixed with set*; allow React state setter identifiers from useState tuple destructuring",
    messages: &[(
        "noSetPrefixUtil",
        "Util/helper function '{{name}}' should not use set*. Reserve set* for React useState setters.",
    )],
};

#[derive(Debug, Default)]
pub struct NoSetPrefixUtils;

impl Configurable for NoSetPrefixUtils {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn set_prefixed_function<'a>(node: AstKind<'a>) -> Option<&'a BindingIdentifier> {
    let name = match node {
        AstKind::Function(function) if function.kind == FunctionKind::Declaration => {
            function.name.as_ref()?
        }
        AstKind::VariableDeclarator(declarator) => {
            function_init(declarator.init.as_ref()?)?;
            declarator.binding_name()?
        }
        _ => return None,
    };
    has_word_prefix(&name.name, "set").then_some(name)
}

impl Rule for NoSetPrefixUtils {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(set_prefixed_function)
            .map(|name| Diagnostic::new(name.span, "noSetPrefixUtil").with("name", &name.name))
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
    #[case("const [open, setOpen] = useState(false);")]
    #[case("const [value, setValue] = React.useState('');")]
    #[case("const reset = () => 1;")]
    #[case("const setup = 1;")]
    #[case("const set = () => {};")]
    #[case("obj.setValue = function () {};")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoSetPrefixUtils, source).is_empty());
    }

    #[rstest]
    #[case("function setTheme() {}", "setTheme")]
    #[case("const setUser = () => {};", "setUser")]
    #[case("const setCount = function () {};", "setCount")]
    fn invalid(#[case] source: &str, #[case] name: &str) {
        assert_eq!(
            findings(&NoSetPrefixUtils, source),
            vec![("noSetPrefixUtil", data(&[("name", name)]))]
        );
    }
}
