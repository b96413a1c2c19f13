//! # sweep-config
//!
//! Layered configuration loading for Sweepi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SWEEPI_*` prefix, `__` as separator)
//! 2. Project-level `<project>/.sweepi.toml`
//! 3. Toolchain-level `~/.sweepi/sweepi.toml` (written by `sweepi init`)
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SWEEPI_LINT__PRESETS` -> `lint.presets` and
//! `SWEEPI_RULES__COMPLEXITY__LEVEL` -> `rules.complexity.level`. Rule names
//! read from the environment use `_` in place of `-`; [`SweepConfig::rules`]
//! normalizes them.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use sweep_config::SweepConfig;
//!
//! let config = SweepConfig::load(Path::new(".")).expect("config");
//! for preset in &config.lint.presets {
//!     println!("preset: {preset}");
//! }
//! ```

mod error;
mod lint;
mod rules;
mod toolchain;

pub use error::ConfigError;
pub use lint::LintConfig;
pub use rules::{RuleSetting, normalize_rule_name};
pub use toolchain::{TOOLCHAIN_CONFIG_FILE, ToolchainConfig};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = ".sweepi.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

impl SweepConfig {
    /// Load configuration for a project from all sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`SWEEPI_*` prefix)
    /// 2. `<project>/.sweepi.toml`
    /// 3. `<toolchain>/sweepi.toml`
    /// 4. Default values
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_dir)?.extract()?;
        Ok(config.normalized())
    }

    /// Build the figment provider chain.
    ///
    /// The toolchain directory itself may be overridden by the project file
    /// or the environment, so it is resolved from those layers first.
    pub fn figment(project_dir: &Path) -> Result<Figment, ConfigError> {
        let toolchain = Self::toolchain(project_dir)?;
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: Toolchain config
        if let Some(path) = toolchain.config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // Layer 2: Project config
        let project_path = project_dir.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            figment = figment.merge(Toml::file(project_path));
        }

        // Layer 3: Environment variables (highest priority)
        Ok(figment.merge(Env::prefixed("SWEEPI_").split("__")))
    }

    /// Resolve only the `[toolchain]` section, from the project file and the
    /// environment.
    pub fn toolchain(project_dir: &Path) -> Result<ToolchainConfig, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        let project_path = project_dir.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            figment = figment.merge(Toml::file(project_path));
        }
        figment = figment.merge(Env::prefixed("SWEEPI_").split("__"));
        Ok(figment.extract_inner("toolchain")?)
    }

    /// Contents of the `sweepi.toml` that `sweepi init` writes.
    pub fn toolchain_template() -> Result<String, ConfigError> {
        #[derive(Serialize)]
        struct Template<'a> {
            lint: &'a LintConfig,
        }

        let lint = LintConfig::default();
        Ok(toml::to_string_pretty(&Template { lint: &lint })?)
    }

    /// Directory holding the toolchain, honoring `[toolchain] dir`.
    #[must_use]
    pub fn toolchain_dir(&self) -> Option<PathBuf> {
        self.toolchain.resolved_dir()
    }

    /// Look up the override for a rule by its canonical name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleSetting> {
        self.rules.get(name)
    }

    /// Canonicalize `[rules]` keys. Later spellings of the same rule win.
    #[must_use]
    fn normalized(mut self) -> Self {
        self.rules = std::mem::take(&mut self.rules)
            .into_iter()
            .map(|(name, setting)| (normalize_rule_name(&name), setting))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SweepConfig::default();
        assert_eq!(config.lint.presets, vec!["core", "react"]);
        assert!(config.rules.is_empty());
        assert_eq!(config.toolchain.dir, None);
    }

    #[test]
    fn toolchain_template_lists_presets_and_ignores() {
        let template = SweepConfig::toolchain_template().expect("render");
        assert!(template.contains("[lint]"));
        assert!(template.contains("\"core\""));
        assert!(template.contains("**/node_modules/**"));

        let parsed: SweepConfig = toml::from_str(&template).expect("parse back");
        assert_eq!(parsed.lint, LintConfig::default());
    }
}
