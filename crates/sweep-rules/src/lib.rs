//! # sweep-rules
//!
//! Structural lint rules for React/TSX sources and the host that runs them.
//!
//! Shared analyses, leaves first:
//! - [`naming`]: case conventions, handler and hook vocabularies, globs
//! - [`shapes`]: array/object/boolean/element/component-constructor verdicts
//!   for type annotations, through local aliases and the type service
//! - [`contracts`]: the `*Props` interfaces and aliases a file declares
//! - [`provenance`]: parameter, local or external, per function
//! - [`markup`] and [`components`]: named functions, components, handoff
//!   and forwarding edges
//! - [`metrics`]: cycle-safe longest chains and root-only reporting
//!
//! On top of those sit the [`rules`], the [`registry`] and [`presets`]
//! that name them, and the [`linter`] host.
//!
//! ```no_run
//! use std::path::Path;
//! use sweep_config::SweepConfig;
//! use sweep_rules::Linter;
//!
//! let linter = Linter::new(&SweepConfig::default()).expect("valid config");
//! let report = linter.lint_file(Path::new("src/Button.tsx"));
//! for message in &report.messages {
//!     println!("{}:{} {}", message.line, message.column, message.message);
//! }
//! ```

pub mod components;
pub mod contracts;
pub mod guard;
pub mod linter;
pub mod markup;
pub mod metrics;
pub mod naming;
pub mod presets;
pub mod provenance;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod shapes;

mod test_support;

pub use linter::{FileReport, LintMessage, Linter};
pub use registry::{RuleEntry, all_rules};
pub use rule::{Configurable, Rule, RuleContext, RuleMeta};
