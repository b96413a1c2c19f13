//! `no-handler-return-type`: `on*` prop contracts return `void`.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::ast::{AstKind, TsKeyword, TsType};

use crate::naming::has_word_prefix;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};
use crate::shapes::function_return_types;

pub static META: RuleMeta = RuleMeta {
    name: "no-handler-return-type",
    category: RuleCategory::React,
    description: "Disallow handler prop definitions (on*) that expect return values. Handler contracts must return void.",
    messages: &[(
        "noHandlerReturnType",
        "Handler prop '{{prop}}' expects return type '{{returnType}}'. Handler prop definitions must not expect return values; use void.",
    )],
};

#[derive(Debug, Default)]
pub struct NoHandlerReturnType;

impl Configurable for NoHandlerReturnType {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn is_void(ty: &TsType) -> bool {
    ty.as_keyword() == Some(TsKeyword::Void)
}

/// The handler signature and the first return type that is not `void`.
fn offending_return<'a>(node: AstKind<'a>) -> Option<(&'a str, Span, &'a TsType)> {
    match node {
        AstKind::TsPropertySignature(property) => {
            let name = property.key.static_name()?;
            let annotation = property.type_annotation.as_ref()?;
            let returned = function_return_types(annotation)
                .into_iter()
                .find(|returned| !is_void(returned))?;
            Some((name, property.span, returned))
        }
        AstKind::TsMethodSignature(method) => {
            let name = method.key.static_name()?;
            let returned = method.return_type.as_ref().filter(|returned| !is_void(returned))?;
            Some((name, method.span, returned))
        }
        _ => None,
    }
}

impl Rule for NoHandlerReturnType {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(offending_return)
            .filter(|(name, _, _)| has_word_prefix(name, "on"))
            .map(|(name, span, returned)| {
                Diagnostic::new(span, "noHandlerReturnType")
                    .with("prop", name)
                    .with("returnType", ctx.text(returned.span()))
            })
            .collect()
    }
}
