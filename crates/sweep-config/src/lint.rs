//! `[lint]` section: presets and file selection.

use serde::{Deserialize, Serialize};

fn default_presets() -> Vec<String> {
    vec!["core".to_string(), "react".to_string()]
}

fn default_files() -> Vec<String> {
    vec!["**/*.ts".to_string(), "**/*.tsx".to_string()]
}

fn default_ignores() -> Vec<String> {
    [
        "**/*.test.*",
        "**/*.spec.*",
        "**/node_modules/**",
        "**/.next/**",
        "**/dist/**",
        "**/build/**",
        "**/coverage/**",
        "**/.turbo/**",
        "**/out/**",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LintConfig {
    /// Preset bundles applied in order before `[rules]` overrides.
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,

    /// Globs selecting the files `--all` lints, relative to the project.
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Globs excluded from every lint run.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            files: default_files(),
            ignores: default_ignores(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LintConfig::default();
        assert_eq!(config.presets, vec!["core", "react"]);
        assert_eq!(config.files, vec!["**/*.ts", "**/*.tsx"]);
        assert!(config.ignores.iter().any(|glob| glob == "**/node_modules/**"));
        assert_eq!(config.ignores.len(), 9);
    }
}
