//! `jsx-server-action-prop-suffix`: props typed as async functions are
//! named `action` or `*Action`.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::ast::{AstKind, TsType};

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};
use crate::shapes::{function_return_types, is_promise};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-server-action-prop-suffix",
    category: RuleCategory::React,
    description: "Enforce async function prop contracts to use action prop names (action or *Action).",
    messages: &[(
        "asyncPropRequiresActionName",
        "Prop '{{prop}}' expects an async function type ('{{returnType}}'). Async function props must be named 'action' or end with 'Action'.",
    )],
};

#[derive(Debug, Default)]
pub struct JsxServerActionPropSuffix;

impl Configurable for JsxServerActionPropSuffix {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn is_action_name(name: &str) -> bool {
    name == "action" || name.ends_with("Action")
}

fn async_member<'a>(node: AstKind<'a>) -> Option<(&'a str, Span, &'a TsType)> {
    match node {
        AstKind::TsPropertySignature(property) => {
            let annotation = property.type_annotation.as_ref()?;
            let returned = function_return_types(annotation)
                .into_iter()
                .find(|returned| is_promise(returned))?;
            Some((property.key.static_name()?, property.span, returned))
        }
        AstKind::TsMethodSignature(method) => {
            let returned = method.return_type.as_ref().filter(|returned| is_promise(returned))?;
            Some((method.key.static_name()?, method.span, returned))
        }
        _ => None,
    }
}

impl Rule for JsxServerActionPropSuffix {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(async_member)
            .filter(|(name, _, _)| !is_action_name(name))
            .map(|(name, span, returned)| {
                Diagnostic::new(span, "asyncPropRequiresActionName")
                    .with("prop", name)
                    .with("returnType", ctx.text(returned.span()))
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
    #[case("interface Props { action: (data: FormData) => Promise<void>; }")]
    #[case("interface Props { saveAction(data: FormData): Promise<void>; }")]
    #[case("interface Props { onSave: () => void; }")]
    #[case("interface Props { load: Promise<void>; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&JsxServerActionPropSuffix, source).is_empty());
    }

    #[rstest]
    #[case("interface Props { onSave: () => Promise<void>; }", "onSave", "Promise<void>")]
    #[case("interface Props { submit(data: FormData): Promise<Result>; }", "submit", "Promise<Result>")]
    #[case("type Props = { save: (() => void) | (() => Promise<boolean>) };", "save", "Promise<boolean>")]
    fn invalid(#[case] source: &str, #[case] prop: &str, #[case] returned: &str) {
        assert_eq!(
            findings(&JsxServerActionPropSuffix, source),
            vec![(
                "asyncPropRequiresActionName",
                data(&[("prop", prop), ("returnType", returned)])
            )]
        );
    }
}
