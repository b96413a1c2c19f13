//! `no-object-props`: object-shaped props, both where a `*Props` contract
//! declares them and where JSX passes them.

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{AstKind, Expression, JsxAttribute, JsxAttributeName, JsxAttributeValue};

use crate::contracts::props_contracts;
use crate::naming::GlobList;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};
use crate::shapes::is_plain_object_type;

pub static META: RuleMeta = RuleMeta {
    name: "no-object-props",
    category: RuleCategory::React,
    description: "Disallow object-typed props in prop contracts and object values passed to JSX props.",
    messages: &[
        (
            "noObjectProps",
            "Object type for '{{prop}}' in '{{propsType}}'. Prefer primitive props and compound composition. If object-shaped data must be shared across parts, use private context inside the compound root.",
        ),
        (
            "noObjectPropsValue",
            "Object value passed to prop '{{prop}}'. Avoid object props; prefer primitive props and compound composition. If object-shaped data must be shared across parts, use private context inside the compound root instead of passing object props.",
        ),
    ],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Prop names (globs) allowed to be objects.
    pub ignore: Vec<String>,
}

#[derive(Debug, Default)]
pub struct NoObjectProps {
    ignore: GlobList,
}

impl NoObjectProps {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            ignore: GlobList::new(&options.ignore),
        }
    }

    fn is_exempt(&self, prop: &str) -> bool {
        prop == "style" || self.ignore.matches(prop)
    }

    fn check_attribute(&self, ctx: &RuleContext<'_>, attribute: &JsxAttribute) -> Option<Diagnostic> {
        let JsxAttributeName::Identifier(name) = &attribute.name else {
            return None;
        };
        if self.is_exempt(&name.name) {
            return None;
        }
        let Some(JsxAttributeValue::ExpressionContainer(container)) = &attribute.value else {
            return None;
        };
        let expression = container.expression.as_ref()?;
        let inline = matches!(expression.without_wrappers(), Expression::Object(_));
        let typed = || {
            ctx.resolved_type(expression.node_id())
                .is_some_and(|resolved| is_plain_object_type(&resolved))
        };
        (inline || typed())
            .then(|| Diagnostic::new(container.span, "noObjectPropsValue").with("prop", &name.name))
    }
}

impl Configurable for NoObjectProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for NoObjectProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let shapes = ctx.shapes();
        let mut diagnostics = Vec::new();

        for contract in props_contracts(ctx.semantic(), ctx.aliases()) {
            for property in contract.properties() {
                let Some(prop) = property.key.static_name() else {
                    continue;
                };
                if self.is_exempt(prop) {
                    continue;
                }
                let Some(annotation) = &property.type_annotation else {
                    continue;
                };
                if shapes.is_object(annotation) {
                    diagnostics.push(
                        Diagnostic::new(property.span, "noObjectProps")
                            .with("prop", prop)
                            .with("propsType", contract.name()),
                    );
                }
            }
        }

        diagnostics.extend(
            ctx.semantic()
                .nodes()
                .filter_map(|node| match node {
                    AstKind::JsxAttribute(attribute) => self.check_attribute(ctx, attribute),
                    _ => None,
                }),
        );
        diagnostics
    }
}
