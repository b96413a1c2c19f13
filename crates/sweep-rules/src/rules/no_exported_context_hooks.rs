//! `no-exported-context-hooks`: `use*Context` hooks stay private to their
//! module.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::ast::{AstKind, ExportDefaultKind, Expression, Statement};

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-exported-context-hooks",
    category: RuleCategory::React,
    description: "Disallow exporting use*Context hooks. Keep context hooks private to the component module.",
    messages: &[(
        "noExportedContextHook",
        "Do not export context hook '{{name}}'. Keep it private and expose a controlled API instead.",
    )],
};

#[derive(Debug, Default)]
pub struct NoExportedContextHooks;

impl Configurable for NoExportedContextHooks {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

/// `use` + something + `Context`, e.g. `useDialogContext`.
fn is_context_hook(name: &str) -> bool {
    name.starts_with("use") && name.ends_with("Context") && name.len() > 10
}

/// Exported names with the span to report on.
fn exported_names<'a>(node: AstKind<'a>) -> Vec<(&'a str, Span)> {
    match node {
        AstKind::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Statement::Function(function)) => function
                .name
                .iter()
                .map(|name| (name.name.as_str(), function.span))
                .collect(),
            Some(Statement::Variable(variable)) => variable
                .declarations
                .iter()
                .filter_map(|declarator| declarator.binding_name())
                .map(|name| (name.name.as_str(), name.span))
                .collect(),
            Some(_) => Vec::new(),
            None => export
                .specifiers
                .iter()
                .map(|specifier| (specifier.local.name.as_str(), specifier.local.span))
                .collect(),
        },
        AstKind::ExportDefaultDeclaration(export) => match &export.declaration {
            ExportDefaultKind::Expression(Expression::Identifier(ident)) => {
                vec![(ident.name.as_str(), ident.span)]
            }
            ExportDefaultKind::Function(function) => function
                .name
                .iter()
                .map(|name| (name.name.as_str(), function.span))
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

impl Rule for NoExportedContextHooks {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .flat_map(exported_names)
            .filter(|(name, _)| is_context_hook(name))
            .map(|(name, span)| Diagnostic::new(span, "noExportedContextHook").with("name", name))
            .collect()
    }
}
