//! Rule severities and categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How a rule's diagnostics are treated by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Off,
    Warn,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(Self::Off),
            "warn" | "warning" | "1" => Ok(Self::Warn),
            "error" | "2" => Ok(Self::Error),
            other => Err(CoreError::Validation(format!(
                "unknown severity '{other}' (expected off, warn or error)"
            ))),
        }
    }
}

/// Which preset family a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Baseline correctness and immutability.
    Core,
    /// Component API shape conventions.
    React,
}

impl RuleCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::React => "react",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("off", Severity::Off)]
    #[case("warn", Severity::Warn)]
    #[case("Warning", Severity::Warn)]
    #[case("error", Severity::Error)]
    #[case("2", Severity::Error)]
    fn parses_severity(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>().ok(), Some(expected));
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warn).expect("serialize");
        assert_eq!(json, "\"warn\"");
        assert!(Severity::Error > Severity::Warn);
        assert!(!Severity::Off.is_enabled());
    }
}
