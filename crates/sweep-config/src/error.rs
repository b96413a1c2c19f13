//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A `[rules.<name>]` table names a rule that is not registered.
    #[error("Unknown rule '{name}' in [rules]")]
    UnknownRule { name: String },

    /// `[lint] presets` names a preset that does not exist.
    #[error("Unknown preset '{name}' (expected \"core\" or \"react\")")]
    UnknownPreset { name: String },

    /// A rule's `options` table does not match its schema.
    #[error("Invalid options for rule '{rule}': {reason}")]
    InvalidOptions { rule: String, reason: String },

    /// The generated toolchain config could not be serialized.
    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}
