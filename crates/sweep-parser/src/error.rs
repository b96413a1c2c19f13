//! Parser error types for sweep-parser.

/// Errors raised while turning a source file into a typed tree.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// The source does not parse. Position is 1-based.
    #[error("Parsing error: unexpected token at {line}:{column}")]
    Syntax {
        offset: u32,
        line: u32,
        column: u32,
    },

    #[error("Unsupported file extension: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
