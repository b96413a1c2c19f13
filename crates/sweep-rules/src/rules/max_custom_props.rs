//! `max-custom-props`: caps the number of props one `*Props` contract
//! declares.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::TsSignature;

use crate::contracts::contracts;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "max-custom-props",
    category: RuleCategory::React,
    description: "Limit the number of custom props in component prop contracts to encourage composition.",
    messages: &[(
        "maxCustomProps",
        "Prop contract '{{name}}' declares {{count}} props (max {{threshold}}). Prefer splitting into compound parts.",
    )],
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub threshold: usize,
    /// Prop names that do not count, on top of `children`.
    pub ignore: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: 8,
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct MaxCustomProps {
    threshold: usize,
    ignore: HashSet<String>,
}

impl MaxCustomProps {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut ignore: HashSet<String> = options.ignore.iter().cloned().collect();
        ignore.insert("children".to_string());
        Self {
            threshold: options.threshold,
            ignore,
        }
    }
}

impl Default for MaxCustomProps {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Configurable for MaxCustomProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        if options.threshold == 0 {
            return Err(ConfigError::InvalidOptions {
                rule: META.name.to_string(),
                reason: "threshold must be at least 1".to_string(),
            });
        }
        Ok(Self::new(&options))
    }
}

impl Rule for MaxCustomProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        contracts(ctx.semantic())
            .into_iter()
            .filter(|contract| contract.is_props())
            .filter_map(|contract| {
                let count = contract
                    .members
                    .iter()
                    .filter(|member| matches!(member, TsSignature::Property(_) | TsSignature::Method(_)))
                    .filter_map(|member| member.key_name())
                    .filter(|name| !self.ignore.contains(*name))
                    .count();
                (count > self.threshold).then(|| {
                    Diagnostic::new(contract.span, "maxCustomProps")
                        .with("name", contract.name())
                        .with("count", count)
                        .with("threshold", self.threshold)
                })
            })
            .collect()
    }
}
