//! `[toolchain]` section: where `sweepi init` provisions its files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the generated toolchain config inside the toolchain directory.
pub const TOOLCHAIN_CONFIG_FILE: &str = "sweepi.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolchainConfig {
    /// Override for the toolchain directory (default `~/.sweepi`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl ToolchainConfig {
    /// The effective toolchain directory, or `None` when no override is set
    /// and the home directory is unknown.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".sweepi")))
    }

    /// Path to the generated `sweepi.toml`.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.resolved_dir()
            .map(|dir| dir.join(TOOLCHAIN_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let config = ToolchainConfig {
            dir: Some(PathBuf::from("/tmp/sweepi-toolchain")),
        };
        assert_eq!(
            config.config_path(),
            Some(PathBuf::from("/tmp/sweepi-toolchain/sweepi.toml"))
        );
    }

    #[test]
    fn default_is_under_home() {
        let config = ToolchainConfig::default();
        if let Some(dir) = config.resolved_dir() {
            assert!(dir.ends_with(".sweepi"));
        }
    }
}
