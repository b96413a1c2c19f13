//! `no-componenttype-props`: props do not take component constructors.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::PropertyKey;

use crate::contracts::contracts;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-componenttype-props",
    category: RuleCategory::React,
    description: "Disallow props typed as ComponentType, FC or FunctionComponent.",
    messages: &[(
        "noComponentTypeProps",
        "Prop '{{prop}}' uses ComponentType/FC/FunctionComponent. Prefer asChild or a render prop for polymorphism.",
    )],
};

#[derive(Debug, Default)]
pub struct NoComponentTypeProps;

impl Configurable for NoComponentTypeProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for NoComponentTypeProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let shapes = ctx.shapes();
        let mut diagnostics = Vec::new();
        for contract in contracts(ctx.semantic()) {
            for property in contract.properties() {
                let PropertyKey::Identifier(key) = &property.key else {
                    continue;
                };
                let Some(annotation) = &property.type_annotation else {
                    continue;
                };
                if shapes.is_component_constructor(annotation) {
                    diagnostics.push(
                        Diagnostic::new(property.key.span(), "noComponentTypeProps")
                            .with("prop", &key.name),
                    );
                }
            }
        }
        diagnostics
    }
}
