//! `no-handle-prefix-utils`: a `handle*` function must be wired to some
//! JSX `on*` prop in the same file.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{
    AstKind, BindingIdentifier, Expression, FunctionKind, JsxAttributeName, JsxAttributeValue,
    ObjectMember, PropertyKey,
};

use crate::markup::{callee_name, function_init};
use crate::naming::{has_word_prefix, is_handler_name};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-handle-prefix-utils",
    category: RuleCategory::React,
    description: "Forbid util/helper functions prefixed with handle* unless they are used as JSX on* handlers",
    messages: &[(
        "noHandlePrefixUtil",
        "Util/helper function '{{name}}' should not use handle*. Reserve handle* for functions used in JSX on* props.",
    )],
};

static HANDLE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bhandle[A-Za-z0-9_$]*").expect("valid regex")
});

#[derive(Debug, Default)]
pub struct NoHandlePrefixUtils;

impl Configurable for NoHandlePrefixUtils {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn is_handler_init(init: &Expression) -> bool {
    function_init(init).is_some()
        || matches!(init, Expression::Call(call) if callee_name(&call.callee) == Some("useCallback"))
}

fn candidate<'a>(node: AstKind<'a>) -> Option<&'a BindingIdentifier> {
    let name = match node {
        AstKind::Function(function) if function.kind == FunctionKind::Declaration => {
            function.name.as_ref()?
        }
        AstKind::VariableDeclarator(declarator) => {
            if !is_handler_init(declarator.init.as_ref()?) {
                return None;
            }
            declarator.binding_name()?
        }
        _ => return None,
    };
    has_word_prefix(&name.name, "handle").then_some(name)
}

/// Expressions handed to `on*` props, either as an
/// attribute value or inside an object literal spread into the element.
fn handler_values<'a>(node: AstKind<'a>) -> Vec<&'a Expression> {
    match node {
        AstKind::JsxAttribute(attribute) => {
            let JsxAttributeName::Identifier(name) = &attribute.name else {
                return Vec::new();
            };
            match &attribute.value {
                Some(JsxAttributeValue::ExpressionContainer(container))
                    if is_handler_name(&name.name) =>
                {
                    container.expression.iter().collect()
                }
                _ => Vec::new(),
            }
        }
        AstKind::JsxSpreadAttribute(spread) => {
            let Expression::Object(object) = &spread.argument else {
                return Vec::new();
            };
            object
                .properties
                .iter()
                .filter_map(|member| match member {
                    ObjectMember::Property(property) => Some(property),
                    ObjectMember::Spread(_) => None,
                })
                .filter(|property| match &property.key {
                    PropertyKey::Identifier(_) | PropertyKey::String(_) => {
                        property.key.static_name().is_some_and(is_handler_name)
                    }
                    _ => false,
                })
                .map(|property| &property.value)
                .collect()
        }
        _ => Vec::new(),
    }
}

impl Rule for NoHandlePrefixUtils {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut candidates = Vec::new();
        let mut used: Vec<&str> = Vec::new();
        for node in ctx.semantic().nodes() {
            if let Some(name) = candidate(node) {
                candidates.push(name);
            }
            for value in handler_values(node) {
                for found in HANDLE_WORD.find_iter(ctx.text(value.span())) {
                    if !used.contains(&found.as_str()) {
                        used.push(found.as_str());
                    }
                }
            }
        }

        candidates
            .into_iter()
            .filter(|name| !used.contains(&name.name.as_str()))
            .map(|name| Diagnostic::new(name.span, "noHandlePrefixUtil").with("name", &name.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::helpers::{data, findings};

    #[rstest]
    #[case("function handleClick() {} const a = <button onClick={handleClick} />;")]
    #[case("const handleSave = useCallback(() => {}, []); const a = <Form onSubmit={() => handleSave()} />;")]
    #[case("const handleOpen = () => {}; const a = <Dialog {...{ onOpenChange: handleOpen }} />;")]
    #[case("const handleCount = 3;")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoHandlePrefixUtils, source).is_empty());
    }

    #[rstest]
    #[case("const handler = () => {};", "handler")]
    #[case("function handleFormat(value) { return value.trim(); }", "handleFormat")]
    fn invalid(#[case] source: &str, #[case] name: &str) {
        assert_eq!(
            findings(&NoHandlePrefixUtils, source),
            vec![("noHandlePrefixUtil", data(&[("name", name)]))]
        );
    }

    #[test]
    fn reports_handlers_never_wired_to_on_props() {
        let source = r"
            function handleFormat(value) { return value.trim(); }
            const handleClose = () => {};
            const a = <Dialog close={handleClose} />;
        ";
        assert_eq!(
            findings(&NoHandlePrefixUtils, source),
            vec![
                ("noHandlePrefixUtil", data(&[("name", "handleFormat")])),
                ("noHandlePrefixUtil", data(&[("name", "handleClose")])),
            ]
        );
    }

    #[test]
    fn usage_before_declaration_counts() {
        let source = "const a = <b onClick={handleLater} />; function handleLater() {}";
        assert!(findings(&NoHandlePrefixUtils, source).is_empty());
    }
}
