//! `no-boolean-capability-props`: a boolean prop in a `*Props` contract
//! needs a sibling `on<Prop>…` handler that controls it.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::TsSignature;

use crate::contracts::{Contract, props_contracts};
use crate::naming::{NATIVE_BOOLEAN_PROPS, capitalize, is_handler_name};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};
use crate::shapes::ShapeResolver;

pub static META: RuleMeta = RuleMeta {
    name: "no-boolean-capability-props",
    category: RuleCategory::React,
    description: "Disallow boolean component props without associated control handlers in prop contracts.",
    messages: &[(
        "noBooleanCapabilityProp",
        "Boolean prop '{{prop}}' has no controlled handler ('{{handlerPrefix}}…'). Prefer controlled APIs, compound composition, or an explicit variant prop.",
    )],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub ignore: Vec<String>,
    pub ignore_native_boolean_props: bool,
}

#[derive(Debug, Default)]
pub struct NoBooleanCapabilityProps {
    ignore: HashSet<String>,
}

impl NoBooleanCapabilityProps {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut ignore: HashSet<String> = options.ignore.iter().cloned().collect();
        if options.ignore_native_boolean_props {
            ignore.extend(NATIVE_BOOLEAN_PROPS.iter().map(|name| (*name).to_string()));
        }
        Self { ignore }
    }

    fn check_contract(&self, contract: &Contract<'_>, shapes: ShapeResolver<'_, '_>, out: &mut Vec<Diagnostic>) {
        let mut handlers: Vec<&str> = Vec::new();
        let mut booleans = Vec::new();
        for member in &contract.members {
            let Some(name) = member.key_name() else {
                continue;
            };
            if self.ignore.contains(name) {
                continue;
            }
            match member {
                TsSignature::Method(_) if is_handler_name(name) => handlers.push(name),
                TsSignature::Property(property) => {
                    let Some(annotation) = &property.type_annotation else {
                        continue;
                    };
                    if is_handler_name(name) && shapes.is_function(annotation) {
                        handlers.push(name);
                    } else if shapes.is_boolean(annotation) {
                        booleans.push((name, property.key.span()));
                    }
                }
                _ => {}
            }
        }
        for (name, span) in booleans {
            let prefix = format!("on{}", capitalize(name));
            if handlers.iter().any(|handler| handler.starts_with(&prefix)) {
                continue;
            }
            out.push(
                Diagnostic::new(span, "noBooleanCapabilityProp")
                    .with("prop", name)
                    .with("handlerPrefix", prefix),
            );
        }
    }
}

impl Configurable for NoBooleanCapabilityProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for NoBooleanCapabilityProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let shapes = ctx.shapes();
        let mut diagnostics = Vec::new();
        for contract in props_contracts(ctx.semantic(), ctx.aliases()) {
            self.check_contract(&contract, shapes, &mut diagnostics);
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::{data, findings, lint_with};

    #[rstest]
    #[case("interface DialogProps { open: boolean; onOpenChange: (open: boolean) => void; }")]
    #[case("interface TableProps { canEdit: string; hasAudit: number; }")]
    #[case("type MenuProps = { isOpen?: boolean; onIsOpenToggle?: () => void; }")]
    #[case("interface VisibilityProps { visible: boolean; onVisibleToggle(value: boolean): void; }")]
    #[case("interface FeatureFlags { open: boolean; }")]
    #[case("type Handler = () => void; interface DialogProps { open: boolean; onOpenChange: Handler; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoBooleanCapabilityProps::default(), source).is_empty());
    }

    #[test]
    fn ignore_lists() {
        assert!(
            lint_with::<NoBooleanCapabilityProps>(
                json!({"ignore": ["asChild"]}),
                "interface SlotProps { asChild?: boolean; }"
            )
            .is_empty()
        );
        assert!(
            lint_with::<NoBooleanCapabilityProps>(
                json!({"ignoreNativeBooleanProps": true}),
                "interface InputProps { disabled?: boolean; checked?: boolean; }"
            )
            .is_empty()
        );
    }

    #[rstest]
    #[case("interface DialogProps { open: boolean; }", "open", "onOpen")]
    #[case(
        "interface FeatureProps { visible?: boolean; onOpenChange?: (open: boolean) => void; }",
        "visible",
        "onVisible"
    )]
    #[case("type PanelProps = { isCollapsible: true | false; };", "isCollapsible", "onIsCollapsible")]
    #[case("type DrawerProps = { isEditing: boolean; onCloseChange?: () => void; };", "isEditing", "onIsEditing")]
    #[case("interface CardProps { isOpen: boolean; onOpenClick: () => void; }", "isOpen", "onIsOpen")]
    #[case("interface InputProps { disabled?: boolean; }", "disabled", "onDisabled")]
    #[case("type Flag = boolean; interface ToggleProps { pressed: Flag; }", "pressed", "onPressed")]
    fn invalid(#[case] source: &str, #[case] prop: &str, #[case] prefix: &str) {
        assert_eq!(
            findings(&NoBooleanCapabilityProps::default(), source),
            vec![(
                "noBooleanCapabilityProp",
                data(&[("prop", prop), ("handlerPrefix", prefix)])
            )]
        );
    }
}
