//! `no-element-props`: element-typed props other than `children` (for
//! `ReactNode`) and `render` (for `ReactElement`).

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::PropertyKey;

use crate::contracts::contracts;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};
use crate::shapes::ElementKind;

pub static META: RuleMeta = RuleMeta {
    name: "no-element-props",
    category: RuleCategory::React,
    description: "Disallow ReactNode props other than children and ReactElement props other than render.",
    messages: &[
        (
            "noElementPropsReactNode",
            "Prop '{{prop}}' is typed as ReactNode. Only 'children' may be a ReactNode; use compound composition and compose parts via 'children' instead.",
        ),
        (
            "noElementPropsReactElement",
            "Prop '{{prop}}' is typed as ReactElement. Only 'render' may be a ReactElement; use compound composition and compose parts via 'children' instead.",
        ),
    ],
};

#[derive(Debug, Default)]
pub struct NoElementProps;

impl Configurable for NoElementProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

/// The prop each element kind is reserved for.
const fn allowed_prop(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Node => "children",
        ElementKind::Element => "render",
    }
}

const fn message_id(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Node => "noElementPropsReactNode",
        ElementKind::Element => "noElementPropsReactElement",
    }
}

impl Rule for NoElementProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let shapes = ctx.shapes();
        let mut diagnostics = Vec::new();
        for contract in contracts(ctx.semantic()) {
            for property in contract.properties() {
                let PropertyKey::Identifier(key) = &property.key else {
                    continue;
                };
                let Some(annotation) = &property.type_annotation else {
                    continue;
                };
                let offending = [ElementKind::Node, ElementKind::Element]
                    .into_iter()
                    .find(|kind| key.name != allowed_prop(*kind) && shapes.contains_element(annotation, *kind));
                if let Some(kind) = offending {
                    diagnostics.push(
                        Diagnostic::new(property.key.span(), message_id(kind)).with("prop", &key.name),
                    );
                }
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sweep_parser::ResolvedType;

    use super::*;
    use crate::test_support::helpers::{data, findings, named, run_with};

    #[rstest]
    #[case("import type React from 'react'; interface Props { children: React.ReactNode; }")]
    #[case("import type { ReactNode } from 'react'; interface Props { children?: ReactNode; }")]
    #[case("import type React from 'react'; type Props = { children: React.ReactNode };")]
    #[case("import type { ReactElement } from 'react'; interface Props { render: ReactElement; }")]
    #[case("import type React from 'react'; interface Props { render?: React.ReactElement; }")]
    #[case("interface Props { title: string; count: number; }")]
    #[case("interface Props { renderItem: (item: Item) => ReactNode; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoElementProps, source).is_empty());
    }

    #[rstest]
    #[case("interface Props { header: React.ReactNode; }", "noElementPropsReactNode", "header")]
    #[case("interface Props { footer?: ReactNode; }", "noElementPropsReactNode", "footer")]
    #[case("type Props = { content: React.ReactNode };", "noElementPropsReactNode", "content")]
    #[case("interface Props { render: ReactNode; }", "noElementPropsReactNode", "render")]
    #[case("interface Props { header: ReactElement; }", "noElementPropsReactElement", "header")]
    #[case("type Props = { content: ReactElement };", "noElementPropsReactElement", "content")]
    #[case("interface Props { children: ReactElement; }", "noElementPropsReactElement", "children")]
    #[case("type Slot = ReactNode | string; interface Props { icon: Slot; }", "noElementPropsReactNode", "icon")]
    #[case(
        "interface Slot extends ReactElement {} interface Props { icon: Slot; }",
        "noElementPropsReactElement",
        "icon"
    )]
    fn invalid(#[case] source: &str, #[case] id: &str, #[case] prop: &str) {
        assert_eq!(findings(&NoElementProps, source), vec![(id, data(&[("prop", prop)]))]);
    }

    #[test]
    fn resolved_types_see_through_imported_aliases() {
        let source = "import type { Slot } from './slot'; interface Props { icon: Slot; }";
        let slot = ResolvedType {
            alias_name: Some("ReactNode".to_string()),
            ..named("Slot")
        };
        let found = run_with(&NoElementProps, "component.tsx", source, &[("Slot", slot)]);
        let ids: Vec<_> = found.iter().map(|diagnostic| diagnostic.message_id).collect();
        assert_eq!(ids, vec!["noElementPropsReactNode"]);
    }
}
