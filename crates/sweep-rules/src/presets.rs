//! The `core` and `react` preset bundles.
//!
//! A preset is an ordered list of rule settings. The host applies presets
//! in the order they are configured, later entries replacing earlier ones,
//! and then layers the `[rules]` overrides on top.

use serde_json::{Value, json};
use sweep_config::ConfigError;
use sweep_core::Severity;

/// One rule as a preset enables it.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRule {
    pub name: &'static str,
    pub level: Severity,
    pub options: Option<Value>,
}

fn error(name: &'static str) -> PresetRule {
    PresetRule {
        name,
        level: Severity::Error,
        options: None,
    }
}

fn error_with(name: &'static str, options: Value) -> PresetRule {
    PresetRule {
        options: Some(options),
        ..error(name)
    }
}

/// Baseline correctness and immutability.
#[must_use]
pub fn core() -> Vec<PresetRule> {
    vec![
        error("no-external-binding-mutation"),
        error_with("complexity", json!({"max": 5, "variant": "modified"})),
        error_with("max-params", json!({"max": 4})),
        error_with("no-param-reassign", json!({"props": true})),
        error("prefer-const"),
    ]
}

/// Component API shape conventions.
#[must_use]
pub fn react() -> Vec<PresetRule> {
    vec![
        error("no-title-case-props"),
        error("no-custom-kebab-case-props"),
        error("no-set-prefix-utils"),
        error("no-useless-hook"),
        error("no-hook-jsx"),
        error("no-exported-context-hooks"),
        error("no-handler-return-type"),
        error("jsx-server-action-prop-suffix"),
        error("jsx-on-handler-verb-suffix"),
        error("no-render-helper-functions"),
        error("no-element-props"),
        error("no-componenttype-props"),
        error("no-object-props"),
        error("no-array-props"),
        error("no-prefixed-prop-bundles"),
        error_with(
            "no-optional-props-without-defaults",
            json!({"ignore": ["on*", "ref", "render"]}),
        ),
        error_with(
            "no-boolean-capability-props",
            json!({"ignore": ["asChild"], "ignoreNativeBooleanProps": true}),
        ),
        error("max-custom-props"),
        error("jsx-bem-compound-naming"),
        error("jsx-compound-part-export-naming"),
        error_with(
            "no-prop-drilling",
            json!({"allowedDepth": 1, "ignorePropsSpread": true}),
        ),
        error("jsx-flat-owner-tree"),
    ]
}

/// Rules of the named preset, in order.
pub fn preset(name: &str) -> Result<Vec<PresetRule>, ConfigError> {
    match name {
        "core" => Ok(core()),
        "react" => Ok(react()),
        other => Err(ConfigError::UnknownPreset {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry;

    #[test]
    fn every_preset_rule_is_registered_with_valid_options() {
        for rule in core().into_iter().chain(react()) {
            let entry = registry::find(rule.name).unwrap_or_else(|| panic!("{} is not registered", rule.name));
            assert!(entry.build(rule.options.as_ref()).is_ok(), "{}", rule.name);
        }
    }

    #[test]
    fn opt_in_rules_stay_out_of_presets() {
        let enabled: Vec<&str> = core().iter().chain(react().iter()).map(|rule| rule.name).collect();
        for name in [
            "no-handle-prefix-utils",
            "no-inline-call-expressions",
            "no-pass-through-props",
            "jsx-on-noun-verb-handler-props",
        ] {
            assert!(!enabled.contains(&name), "{name}");
        }
        assert_eq!(enabled.len() + 4, registry::all_rules().len());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(matches!(preset("strict"), Err(ConfigError::UnknownPreset { name }) if name == "strict"));
        assert_eq!(preset("core").unwrap(), core());
    }
}
