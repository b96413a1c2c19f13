//! `no-array-props`: array- and tuple-typed members of `*Props` contracts.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::contracts::props_contracts;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-array-props",
    category: RuleCategory::React,
    description: "Disallow array-typed members in TypeScript type definitions whose name ends with Props.",
    messages: &[(
        "noArrayProps",
        "Array type for '{{prop}}' in '{{propsType}}'. Prefer primitive props and compound composition.",
    )],
};

#[derive(Debug, Default)]
pub struct NoArrayProps;

impl Configurable for NoArrayProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for NoArrayProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let shapes = ctx.shapes();
        let mut diagnostics = Vec::new();
        for contract in props_contracts(ctx.semantic(), ctx.aliases()) {
            for property in contract.properties() {
                let Some(annotation) = &property.type_annotation else {
                    continue;
                };
                if !shapes.is_array(annotation) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::new(property.span, "noArrayProps")
                        .with("prop", property.key.static_name().unwrap_or("(unknown)"))
                        .with("propsType", contract.name()),
                );
            }
        }
        diagnostics
    }
}
