//! `jsx-compound-part-export-naming`: a compound family module exports its
//! root as `Root` and each `<Block><Part>` component as `<Part>`, and never
//! bundles parts into a runtime object.
//!
//! The family block comes from the file name (`button-group.tsx` is the
//! `ButtonGroup` family). Export aliasing is judged once every export in the
//! file has been seen, so split `export { … }` lists are fine.

use std::path::Path;

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::ast::{
    AstKind, ExportNamedDeclaration, Expression, ObjectMember, Pattern, Statement,
};

use crate::naming::{COMMON_PART_NAMES, pascal_from_file_stem, starts_uppercase};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-compound-part-export-naming",
    category: RuleCategory::React,
    description: "Enforce compound part export aliasing (export { DialogTrigger as Trigger }) and disallow runtime object exports.",
    messages: &[
        (
            "requirePartAlias",
            "Export compound part '{{local}}' as '{{part}}' (export { {{local}} as {{part}} }).",
        ),
        (
            "requireRootAlias",
            "Export compound root '{{block}}' as 'Root' (export { {{block}} as Root }).",
        ),
        (
            "requireRootExport",
            "Compound parts of '{{block}}' are exported without a root. Export it as 'Root' (export { {{block}} as Root }).",
        ),
        (
            "noRuntimeObjectExport",
            "Avoid exporting runtime object '{{name}}' for compound APIs. Export parts with aliases instead (for example export { {{name}}Trigger as Trigger }).",
        ),
    ],
};

#[derive(Debug, Default)]
pub struct JsxCompoundPartExportNaming;

impl Configurable for JsxCompoundPartExportNaming {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

/// One local binding leaving the module under some public name.
#[derive(Debug)]
struct LocalExport<'a> {
    local: &'a str,
    exported: &'a str,
    /// Where the public name is written.
    span: Span,
}

/// `export const Name = { Trigger: …, … }`.
fn is_runtime_part_object(name: &str, init: Option<&Expression>) -> bool {
    let Some(Expression::Object(object)) = init.map(Expression::without_wrappers) else {
        return false;
    };
    starts_uppercase(name)
        && object.properties.iter().any(|member| match member {
            ObjectMember::Property(property) => property
                .key
                .static_name()
                .is_some_and(|key| COMMON_PART_NAMES.contains(&key)),
            ObjectMember::Spread(_) => false,
        })
}

/// Collect the local exports of one `export` statement and report runtime
/// part objects it declares.
fn visit_export<'a>(
    export: &'a ExportNamedDeclaration,
    exports: &mut Vec<LocalExport<'a>>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if export.source.is_some() || export.type_only {
        return;
    }
    match &export.declaration {
        Some(Statement::Variable(declaration)) => {
            for declarator in &declaration.declarations {
                let Pattern::Identifier(ident) = &declarator.binding else {
                    continue;
                };
                if is_runtime_part_object(&ident.name, declarator.init.as_ref()) {
                    diagnostics.push(
                        Diagnostic::new(ident.span, "noRuntimeObjectExport").with("name", &ident.name),
                    );
                    continue;
                }
                exports.push(LocalExport {
                    local: &ident.name,
                    exported: &ident.name,
                    span: ident.span,
                });
            }
        }
        Some(Statement::Function(function)) => {
            if let Some(name) = &function.name {
                exports.push(LocalExport {
                    local: &name.name,
                    exported: &name.name,
                    span: name.span,
                });
            }
        }
        _ => {}
    }
    for specifier in &export.specifiers {
        exports.push(LocalExport {
            local: &specifier.local.name,
            exported: specifier.exported_name(),
            span: specifier.exported.as_ref().map_or(specifier.local.span, |alias| alias.span),
        });
    }
}

fn family_block(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let block = pascal_from_file_stem(stem);
    starts_uppercase(&block).then_some(block)
}

/// Judge aliasing for the family `block` once every export is known.
fn check_family(block: &str, exports: &[LocalExport<'_>], diagnostics: &mut Vec<Diagnostic>) {
    let mut first_part_span: Option<Span> = None;
    let mut judged: Vec<&str> = Vec::new();
    for export in exports {
        let Some(part) = export
            .local
            .strip_prefix(block)
            .filter(|part| COMMON_PART_NAMES.contains(part))
        else {
            continue;
        };
        first_part_span.get_or_insert(export.span);
        if judged.contains(&export.local) {
            continue;
        }
        judged.push(export.local);
        let aliased = exports
            .iter()
            .any(|other| other.local == export.local && other.exported == part);
        if !aliased {
            diagnostics.push(
                Diagnostic::new(export.span, "requirePartAlias")
                    .with("local", export.local)
                    .with("part", part)
                    .with("block", block),
            );
        }
    }

    let Some(first_part_span) = first_part_span else {
        return;
    };
    let roots: Vec<&LocalExport<'_>> = exports.iter().filter(|export| export.local == block).collect();
    match roots.first() {
        None => diagnostics.push(Diagnostic::new(first_part_span, "requireRootExport").with("block", block)),
        Some(first) if !roots.iter().any(|root| root.exported == "Root") => {
            diagnostics.push(Diagnostic::new(first.span, "requireRootAlias").with("block", block));
        }
        Some(_) => {}
    }
}

impl Rule for JsxCompoundPartExportNaming {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut exports = Vec::new();
        for node in ctx.semantic().nodes() {
            if let AstKind::ExportNamedDeclaration(export) = node {
                visit_export(export, &mut exports, &mut diagnostics);
            }
        }
        if let Some(block) = family_block(ctx.path()) {
            check_family(&block, &exports, &mut diagnostics);
        }
        diagnostics.sort_by_key(|diagnostic| diagnostic.span.start);
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{Finding, data, findings, run_with};

    fn lint_file(path: &str, source: &str) -> Vec<Finding> {
        run_with(&JsxCompoundPartExportNaming, path, source, &[])
            .into_iter()
            .map(|diagnostic| (diagnostic.message_id, diagnostic.data))
            .collect()
    }

    fn part_alias(local: &str, part: &str) -> Finding {
        (
            "requirePartAlias",
            data(&[("local", local), ("part", part), ("block", "ButtonGroup")]),
        )
    }

    #[rstest]
    #[case("const Dialog = () => null; export { Dialog };")]
    #[case("export const Theme = { light: '#fff', dark: '#000' };")]
    #[case("const Button = () => null; export { Button };")]
    fn valid_anywhere(#[case] source: &str) {
        assert!(findings(&JsxCompoundPartExportNaming, source).is_empty());
    }

    #[rstest]
    #[case(
        "/tmp/button-group.tsx",
        "const ButtonGroup = () => null; const ButtonGroupItem = () => null; export { ButtonGroup as Root, ButtonGroupItem as Item };"
    )]
    #[case(
        "/tmp/button-group.tsx",
        r"
        const ButtonGroup = () => null;
        const ButtonGroupItem = () => null;
        export { ButtonGroup as Root, ButtonGroupItem };
        export { ButtonGroupItem as Item };
        "
    )]
    #[case(
        "/tmp/index.tsx",
        "const Dialog = () => null; const DialogTrigger = () => null; export { Dialog, DialogTrigger };"
    )]
    #[case("/tmp/button-group.tsx", "export { ButtonGroup, ButtonGroupItem } from './button-group';")]
    #[case("/tmp/button-group.tsx", "const ButtonGroup = () => null; export { ButtonGroup };")]
    fn valid_family_files(#[case] path: &str, #[case] source: &str) {
        assert!(lint_file(path, source).is_empty());
    }

    #[test]
    fn unaliased_part() {
        let source = r"
            const ButtonGroup = () => null;
            const ButtonGroupItem = () => null;
            export { ButtonGroup as Root, ButtonGroupItem };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![part_alias("ButtonGroupItem", "Item")]
        );
    }

    #[test]
    fn exported_function_part() {
        let source = r"
            const ButtonGroup = () => null;
            export function ButtonGroupItem() { return null; }
            export { ButtonGroup as Root };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![part_alias("ButtonGroupItem", "Item")]
        );
    }

    #[test]
    fn unaliased_part_and_root() {
        let source = r"
            const ButtonGroup = () => null;
            export const ButtonGroupItem = () => null;
            export { ButtonGroup };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![
                part_alias("ButtonGroupItem", "Item"),
                ("requireRootAlias", data(&[("block", "ButtonGroup")])),
            ]
        );
    }

    #[test]
    fn part_exported_under_its_own_name() {
        let source = r"
            const ButtonGroup = () => null;
            const ButtonGroupItem = () => null;
            export { ButtonGroup as Root };
            export { ButtonGroupItem as ButtonGroupItem };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![part_alias("ButtonGroupItem", "Item")]
        );
    }

    #[test]
    fn runtime_object_instead_of_root() {
        let source = r"
            const ButtonGroupItem = () => null;
            const ButtonGroupIcon = () => null;
            export { ButtonGroupItem as Item, ButtonGroupIcon as Icon };
            export const ButtonGroup = { Item: ButtonGroupItem };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![
                ("requireRootExport", data(&[("block", "ButtonGroup")])),
                ("noRuntimeObjectExport", data(&[("name", "ButtonGroup")])),
            ]
        );
    }

    #[test]
    fn parts_without_root() {
        let source = r"
            const ButtonGroup = () => null;
            const ButtonGroupItem = () => null;
            const ButtonGroupIcon = () => null;
            export { ButtonGroupItem as Item, ButtonGroupIcon as Icon };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![("requireRootExport", data(&[("block", "ButtonGroup")]))]
        );
    }

    #[test]
    fn root_not_aliased() {
        let source = r"
            const ButtonGroup = () => null;
            const ButtonGroupItem = () => null;
            export { ButtonGroup, ButtonGroupItem as Item };
        ";
        assert_eq!(
            lint_file("/tmp/button-group.tsx", source),
            vec![("requireRootAlias", data(&[("block", "ButtonGroup")]))]
        );
    }
}
