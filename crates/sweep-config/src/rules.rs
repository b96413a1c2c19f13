//! `[rules.<name>]` overrides.

use serde::{Deserialize, Serialize};
use sweep_core::Severity;

/// One rule override.
///
/// Accepts either a bare level (`no-array-props = "warn"`) or a table with
/// an optional `level` and an `options` value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(Severity),
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<Severity>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<serde_json::Value>,
    },
}

impl RuleSetting {
    /// The configured level, if any. `None` keeps the preset's level.
    #[must_use]
    pub const fn level(&self) -> Option<Severity> {
        match self {
            Self::Level(level) => Some(*level),
            Self::Table { level, .. } => *level,
        }
    }

    #[must_use]
    pub const fn options(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Level(_) => None,
            Self::Table { options, .. } => options.as_ref(),
        }
    }
}

/// Canonical rule name for a config key.
///
/// Environment variables are lowercased by figment and cannot carry `-`, so
/// `SWEEPI_RULES__NO_ARRAY_PROPS__LEVEL` arrives as `no_array_props`.
#[must_use]
pub fn normalize_rule_name(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_level_parses() {
        let setting: RuleSetting = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(setting.level(), Some(Severity::Warn));
        assert_eq!(setting.options(), None);
    }

    #[test]
    fn table_keeps_options() {
        let setting: RuleSetting =
            serde_json::from_str(r#"{"options": {"max": 10}}"#).unwrap();
        assert_eq!(setting.level(), None);
        assert_eq!(setting.options(), Some(&serde_json::json!({"max": 10})));
    }

    #[test]
    fn env_style_names_normalize() {
        assert_eq!(normalize_rule_name("no_array_props"), "no-array-props");
        assert_eq!(normalize_rule_name("Complexity"), "complexity");
    }
}
