//! Cross-cutting error types for Sweepi.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) live in their own
//! crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Sweepi crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named rule does not exist in the registry.
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// A named preset does not exist.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}
