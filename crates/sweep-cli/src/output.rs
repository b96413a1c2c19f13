//! Report rendering: stylish text or JSON.

use std::fmt::Write as _;
use std::path::Path;

use sweep_core::Severity;
use sweep_rules::FileReport;

use crate::cli::OutputFormat;

/// Totals across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    #[must_use]
    pub fn of(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            errors: acc.errors + report.error_count(),
            warnings: acc.warnings + report.warning_count(),
        })
    }

    #[must_use]
    pub const fn problems(&self) -> usize {
        self.errors + self.warnings
    }
}

pub fn render(reports: &[FileReport], format: OutputFormat, project: &Path) -> anyhow::Result<String> {
    match format {
        OutputFormat::Stylish => Ok(stylish(reports, project)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warn => "warning",
        Severity::Off => "off",
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Text report: a block per file with findings, then a totals line.
/// Clean runs render as an empty string.
#[must_use]
pub fn stylish(reports: &[FileReport], project: &Path) -> String {
    let mut out = String::new();
    for report in reports.iter().filter(|report| !report.is_clean()) {
        let shown = report.path.strip_prefix(project).unwrap_or(&report.path);
        let _ = writeln!(out, "{}", shown.display());

        let rows: Vec<(String, &str, &str, &str)> = report
            .messages
            .iter()
            .map(|message| {
                (
                    format!("{}:{}", message.line, message.column),
                    severity_label(message.severity),
                    message.message.as_str(),
                    message.rule.unwrap_or_default(),
                )
            })
            .collect();
        let position_width = rows.iter().map(|row| row.0.len()).max().unwrap_or(0);
        let severity_width = rows.iter().map(|row| row.1.len()).max().unwrap_or(0);
        let message_width = rows.iter().map(|row| row.2.len()).max().unwrap_or(0);

        for (position, severity, message, rule) in rows {
            let line = format!(
                "  {position:<position_width$}  {severity:<severity_width$}  {message:<message_width$}  {rule}"
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out.push('\n');
    }

    let summary = Summary::of(reports);
    if summary.problems() > 0 {
        let _ = writeln!(
            out,
            "✖ {} ({}, {})",
            plural(summary.problems(), "problem"),
            plural(summary.errors, "error"),
            plural(summary.warnings, "warning")
        );
    }
    out
}
