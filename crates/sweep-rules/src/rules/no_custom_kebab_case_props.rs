//! `no-custom-kebab-case-props`: only `aria-*` and `data-*` props may use
//! kebab-case.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-custom-kebab-case-props",
    category: RuleCategory::React,
    description: "Disallow custom kebab-case JSX props (allows aria-* and data-*)",
    messages: &[(
        "noCustomKebab",
        "Custom kebab-case prop '{{prop}}' is not allowed. Use camelCase, or use aria-* / data-* for native HTML attributes.",
    )],
};

const ALLOWED_PREFIXES: [&str; 2] = ["aria-", "data-"];

#[derive(Debug, Default)]
pub struct NoCustomKebabCaseProps;

impl Configurable for NoCustomKebabCaseProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for NoCustomKebabCaseProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(|node| node.as_jsx_attribute())
            .filter_map(|attribute| {
                let prop = attribute.name.text();
                let allowed = ALLOWED_PREFIXES.iter().any(|prefix| prop.starts_with(prefix));
                (prop.contains('-') && !allowed)
                    .then(|| Diagnostic::new(attribute.name.span(), "noCustomKebab").with("prop", prop))
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
    #[case("<div aria-hidden data-state='open' />")]
    #[case("<Button isActive />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoCustomKebabCaseProps, source).is_empty());
    }

    #[rstest]
    #[case("<Button is-active />", "is-active")]
    #[case("<Menu item-count={3} />", "item-count")]
    #[case("<div ariahidden-x />", "ariahidden-x")]
    fn invalid(#[case] source: &str, #[case] prop: &str) {
        assert_eq!(
            findings(&NoCustomKebabCaseProps, source),
            vec![("noCustomKebab", data(&[("prop", prop)]))]
        );
    }
}
