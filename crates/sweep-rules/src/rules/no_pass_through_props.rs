//! `no-pass-through-props`: a destructured prop that is only ever handed to
//! JSX attributes, unchanged, does not belong to the component.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::components::{components, forwarded_props};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-pass-through-props",
    category: RuleCategory::React,
    description: "Disallow pass-through-only props in component owners (accepting props only to forward them)",
    messages: &[(
        "noPassThroughProp",
        "Prop '{{prop}}' in '{{component}}' is only forwarded to '{{forwardedTo}}'. Remove it or compose via children.",
    )],
};

/// Spread targets are ownership here: `{...value}` reshapes the prop.
const SPREAD_TARGET: &str = "props spread";

#[derive(Debug, Default)]
pub struct NoPassThroughProps;

impl Configurable for NoPassThroughProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

impl Rule for NoPassThroughProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut diagnostics = Vec::new();
        for component in components(semantic) {
            for prop in forwarded_props(semantic, &component, false) {
                if prop.targets.contains(SPREAD_TARGET) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::new(prop.binding.local.span, "noPassThroughProp")
                        .with("prop", prop.binding.prop_label())
                        .with("component", component.name())
                        .with("forwardedTo", prop.targets_label()),
                );
            }
        }
        diagnostics
    }
}
