//! `jsx-bem-compound-naming`: `<Dialog.Trigger />` over `<DialogTrigger />`.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{AstKind, JsxElementName};

use crate::naming::compound_parts;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-bem-compound-naming",
    category: RuleCategory::React,
    description: "Prefer compound component member syntax in JSX (for example <Dialog.Trigger /> over <DialogTrigger />).",
    messages: &[(
        "preferMemberSyntax",
        "Use compound member syntax for '{{name}}'. Prefer '<{{block}}.{{part}} />' over '<{{name}} />'.",
    )],
};

#[derive(Debug, Default)]
pub struct JsxBemCompoundNaming;

impl Configurable for JsxBemCompoundNaming {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for JsxBemCompoundNaming {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(|node| match node {
                AstKind::JsxOpeningElement(opening) => match &opening.name {
                    JsxElementName::Identifier(ident) => Some(ident),
                    _ => None,
                },
                _ => None,
            })
            .filter_map(|ident| {
                let (block, part) = compound_parts(&ident.name)?;
                Some(
                    Diagnostic::new(ident.span, "preferMemberSyntax")
                        .with("name", &ident.name)
                        .with("block", block)
                        .with("part", part),
                )
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
    #[case("<Dialog.Trigger />")]
    #[case("<Tooltip.Content />")]
    #[case("<Dialog />")]
    #[case("<div />")]
    #[case("<DialogWrapper />")]
    #[case("<UIButtonIcon />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&JsxBemCompoundNaming, source).is_empty());
    }

    #[rstest]
    #[case("<DialogTrigger />", "DialogTrigger", "Dialog", "Trigger")]
    #[case("<TooltipContent />", "TooltipContent", "Tooltip", "Content")]
    #[case("<SelectItem value='a'>A</SelectItem>", "SelectItem", "Select", "Item")]
    fn invalid(#[case] source: &str, #[case] name: &str, #[case] block: &str, #[case] part: &str) {
        assert_eq!(
            findings(&JsxBemCompoundNaming, source),
            vec![(
                "preferMemberSyntax",
                data(&[("name", name), ("block", block), ("part", part)])
            )]
        );
    }

    #[test]
    fn message_names_the_member_form() {
        assert_eq!(
            messages(&JsxBemCompoundNaming, "<DialogTrigger />"),
            vec!["Use compound member syntax for 'DialogTrigger'. Prefer '<Dialog.Trigger />' over '<DialogTrigger />'."]
        );
    }
}
