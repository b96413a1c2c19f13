//! # sweep-core
//!
//! Foundational value types shared across the Sweepi crates:
//! - Source spans and a line index for byte offset to line/column mapping
//! - Diagnostics with message templates and interpolation data
//! - Rule severities and categories
//! - Cross-cutting error types

pub mod diagnostic;
pub mod errors;
pub mod severity;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticData, render_message};
pub use errors::CoreError;
pub use severity::{RuleCategory, Severity};
pub use span::{LineIndex, Position, Span};
