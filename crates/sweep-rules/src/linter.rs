//! The in-process lint host.
//!
//! [`Linter::new`] resolves presets and `[rules]` overrides into the active
//! rule list, building (and so validating) every active rule once. Linting
//! a file parses it, runs each rule against a fresh [`RuleContext`], and
//! renders the findings into [`LintMessage`]s sorted by position.
//!
//! A rule that panics is isolated: the panic is logged and that rule
//! contributes nothing for the file. A file that cannot be read or parsed
//! yields a single fatal message instead of aborting the batch.

use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use sweep_config::{ConfigError, SweepConfig};
use sweep_core::{Diagnostic, LineIndex, Severity, render_message};
use sweep_parser::{Dialect, ParserError, Semantic, TypeService, parse};

use crate::presets;
use crate::registry;
use crate::rule::{Rule, RuleContext};

/// One rendered finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// `None` for fatal read and parse failures.
    pub rule: Option<&'static str>,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<&'static str>,
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fatal: bool,
}

impl LintMessage {
    fn fatal(message: String, line: u32, column: u32) -> Self {
        Self {
            rule: None,
            severity: Severity::Error,
            message_id: None,
            message,
            line,
            column,
            end_line: line,
            end_column: column,
            fatal: true,
        }
    }

    fn sort_key(&self) -> (u32, u32, &str, &str) {
        (self.line, self.column, self.rule.unwrap_or_default(), &self.message)
    }
}

/// Findings for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub messages: Vec<LintMessage>,
}

impl FileReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|message| message.severity == severity)
            .count()
    }
}

struct ActiveRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

pub struct Linter {
    rules: Vec<ActiveRule>,
    types: Option<Arc<dyn TypeService>>,
}

impl Linter {
    /// Resolve the active rules of `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown preset, an unknown rule name in
    /// `[rules]`, or options an active rule rejects.
    pub fn new(config: &SweepConfig) -> Result<Self, ConfigError> {
        let mut settings: BTreeMap<&'static str, (Severity, Option<Value>)> = BTreeMap::new();
        for name in &config.lint.presets {
            for rule in presets::preset(name)? {
                settings.insert(rule.name, (rule.level, rule.options));
            }
        }
        for (name, setting) in &config.rules {
            let entry = registry::find(name).ok_or_else(|| ConfigError::UnknownRule { name: name.clone() })?;
            let current = settings.entry(entry.name()).or_insert((Severity::Off, None));
            if let Some(level) = setting.level() {
                current.0 = level;
            }
            if let Some(options) = setting.options() {
                current.1 = Some(options.clone());
            }
        }

        let mut rules = Vec::new();
        for entry in registry::all_rules() {
            let Some((severity, options)) = settings.get(entry.name()) else {
                continue;
            };
            if !severity.is_enabled() {
                continue;
            }
            rules.push(ActiveRule {
                rule: entry.build(options.as_ref())?,
                severity: *severity,
            });
        }
        tracing::debug!(active = rules.len(), "resolved lint rules");
        Ok(Self { rules, types: None })
    }

    /// Attach a type-resolution service consulted by shape-aware rules.
    #[must_use]
    pub fn with_type_service(mut self, types: Arc<dyn TypeService>) -> Self {
        self.types = Some(types);
        self
    }

    /// Names of the active rules, in registry order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|active| active.rule.meta().name)
    }

    /// Lint in-memory `source` as if it were the file at `path`.
    #[must_use]
    pub fn lint_source(&self, path: &Path, source: &str) -> FileReport {
        let report = |messages| FileReport {
            path: path.to_path_buf(),
            messages,
        };
        let Some(dialect) = Dialect::from_path(path) else {
            let error = ParserError::UnsupportedLanguage(path.display().to_string());
            return report(vec![LintMessage::fatal(error.to_string(), 1, 1)]);
        };
        let parsed = match parse(source, dialect) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping file that does not parse");
                let (line, column) = match &error {
                    ParserError::Syntax { line, column, .. } => (*line, *column),
                    _ => (1, 1),
                };
                return report(vec![LintMessage::fatal(error.to_string(), line, column)]);
            }
        };

        let semantic = Semantic::new(&parsed.program);
        let ctx = RuleContext::new(path, source, &semantic, self.types.as_deref());
        let mut messages = Vec::new();
        for active in &self.rules {
            let name = active.rule.meta().name;
            let Ok(diagnostics) = panic::catch_unwind(AssertUnwindSafe(|| active.rule.check(&ctx))) else {
                tracing::warn!(rule = name, path = %path.display(), "rule panicked; skipping it for this file");
                continue;
            };
            tracing::debug!(rule = name, path = %path.display(), count = diagnostics.len(), "rule finished");
            messages.extend(
                diagnostics
                    .iter()
                    .map(|diagnostic| render(active, diagnostic, source, &parsed.line_index)),
            );
        }
        messages.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        report(messages)
    }

    /// Read and lint the file at `path`.
    #[must_use]
    pub fn lint_file(&self, path: &Path) -> FileReport {
        match std::fs::read_to_string(path) {
            Ok(source) => self.lint_source(path, &source),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping unreadable file");
                FileReport {
                    path: path.to_path_buf(),
                    messages: vec![LintMessage::fatal(format!("Failed to read file: {error}"), 1, 1)],
                }
            }
        }
    }

    /// Lint many files in parallel. Reports come back in input order.
    #[must_use]
    pub fn lint_paths(&self, files: &[PathBuf]) -> Vec<FileReport> {
        files.par_iter().map(|path| self.lint_file(path)).collect()
    }
}

fn render(active: &ActiveRule, diagnostic: &Diagnostic, source: &str, lines: &LineIndex) -> LintMessage {
    let meta = active.rule.meta();
    let template = meta.message(diagnostic.message_id).unwrap_or(diagnostic.message_id);
    let start = lines.position(source, diagnostic.span.start);
    let end = lines.position(source, diagnostic.span.end);
    LintMessage {
        rule: Some(meta.name),
        severity: active.severity,
        message_id: Some(diagnostic.message_id),
        message: render_message(template, &diagnostic.data),
        line: start.line,
        column: start.column,
        end_line: end.line,
        end_column: end.column,
        fatal: false,
    }
}
