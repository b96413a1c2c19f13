//! `no-title-case-props`: JSX props must not start with an uppercase letter.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::naming::{lower_first, starts_uppercase};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-title-case-props",
    category: RuleCategory::React,
    description: "Disallow TitleCase JSX props",
    messages: &[(
        "noTitleCase",
        "Prop '{{prop}}' uses TitleCase. Use camelCase instead (e.g. {{suggestion}}).",
    )],
};

#[derive(Debug, Default)]
pub struct NoTitleCaseProps;

impl Configurable for NoTitleCaseProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for NoTitleCaseProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(|node| node.as_jsx_attribute())
            .filter_map(|attribute| {
                let prop = attribute.name.text();
                starts_uppercase(&prop).then(|| {
                    Diagnostic::new(attribute.name.span(), "noTitleCase")
                        .with("suggestion", lower_first(&prop))
                        .with("prop", prop)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{data, findings, messages};

    #[rstest]
    #[case("<Button onClick={go} />")]
    #[case("<input aria-label='x' data-id='1' />")]
    #[case("<svg xlink:href='#a' />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoTitleCaseProps, source).is_empty());
    }

    #[test]
    fn reports_title_case_with_suggestion() {
        assert_eq!(
            findings(&NoTitleCaseProps, "<Card Title='x' X={1} />"),
            vec![
                ("noTitleCase", data(&[("prop", "Title"), ("suggestion", "title")])),
                ("noTitleCase", data(&[("prop", "X"), ("suggestion", "x")])),
            ]
        );
    }

    #[test]
    fn renders_message() {
        assert_eq!(
            messages(&NoTitleCaseProps, "<Card IsOpen />"),
            vec!["Prop 'IsOpen' uses TitleCase. Use camelCase instead (e.g. isOpen)."]
        );
    }
}
