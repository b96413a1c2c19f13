//! `no-prefixed-prop-bundles`: several props on one element sharing a
//! lowercase prefix (`userName`, `userEmail`, `userAvatarUrl`).

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{AstKind, JsxAttributeItem, JsxAttributeName, JsxIdentifier, JsxOpeningElement};

use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-prefixed-prop-bundles",
    category: RuleCategory::React,
    description: "Disallow bundles of similarly-prefixed JSX props that suggest over-grouped component APIs.",
    messages: &[(
        "noPrefixedPropBundle",
        "Prop '{{prop}}' is part of a '{{prefix}}*' prop bundle ({{count}} props). Prefer unprefixed, explicit props and compound composition. If grouped data must be shared, use context.",
    )],
};

/// Prefixes that name a flag or a namespace rather than a bundle.
const IGNORED_PREFIXES: &[&str] = &["aria", "can", "data", "has", "is", "on", "should"];

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { threshold: 3 }
    }
}

#[derive(Debug)]
pub struct NoPrefixedPropBundles {
    threshold: usize,
}

impl Default for NoPrefixedPropBundles {
    fn default() -> Self {
        Self {
            threshold: Options::default().threshold,
        }
    }
}

impl Configurable for NoPrefixedPropBundles {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        if options.threshold < 2 {
            return Err(ConfigError::InvalidOptions {
                rule: META.name.to_string(),
                reason: format!("threshold must be at least 2, got {}", options.threshold),
            });
        }
        Ok(Self {
            threshold: options.threshold,
        })
    }
}

/// Lowercase run before the first uppercase letter, when the name goes on
/// after it: `user` for `userName`.
fn bundle_prefix(name: &str) -> Option<&str> {
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    let split = name.find(|c: char| c.is_ascii_uppercase())?;
    let prefix = &name[..split];
    (!IGNORED_PREFIXES.contains(&prefix)).then_some(prefix)
}

impl NoPrefixedPropBundles {
    fn check_element(&self, opening: &JsxOpeningElement, diagnostics: &mut Vec<Diagnostic>) {
        let mut groups: Vec<(&str, Vec<&JsxIdentifier>)> = Vec::new();
        for item in &opening.attributes {
            let JsxAttributeItem::Attribute(attribute) = item else {
                continue;
            };
            let JsxAttributeName::Identifier(name) = &attribute.name else {
                continue;
            };
            let Some(prefix) = bundle_prefix(&name.name) else {
                continue;
            };
            match groups.iter_mut().find(|(existing, _)| *existing == prefix) {
                Some((_, members)) => members.push(name),
                None => groups.push((prefix, vec![name])),
            }
        }
        for (prefix, members) in groups {
            if members.len() < self.threshold {
                continue;
            }
            let count = members.len();
            for member in members {
                diagnostics.push(
                    Diagnostic::new(member.span, "noPrefixedPropBundle")
                        .with("prop", &member.name)
                        .with("prefix", prefix)
                        .with("count", count),
                );
            }
        }
    }
}

impl Rule for NoPrefixedPropBundles {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for node in ctx.semantic().nodes() {
            if let AstKind::JsxOpeningElement(opening) = node {
                self.check_element(opening, &mut diagnostics);
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::{data, findings, lint_with};

    #[rstest]
    #[case("<UserRow name={user.name} email={user.email} />")]
    #[case("<UserRow userName={user.name} userEmail={user.email} />")]
    #[case("<Dialog onOpen={handleOpen} onClose={handleClose} onChange={handleChange} />")]
    #[case("<Comp dataState={state} dataKind={kind} dataMode={mode} />")]
    #[case("<Comp isOpen={open} isLoading={loading} isDisabled={disabled} />")]
    #[case("<Comp user={a} users={b} userish={c} />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoPrefixedPropBundles::default(), source).is_empty());
    }

    #[test]
    fn threshold_is_configurable() {
        let source = "<UserRow userName={user.name} userEmail={user.email} />";
        assert!(lint_with::<NoPrefixedPropBundles>(json!({"threshold": 4}), source).is_empty());
        assert_eq!(
            lint_with::<NoPrefixedPropBundles>(json!({"threshold": 2}), source),
            vec![
                ("noPrefixedPropBundle", data(&[("prop", "userName"), ("prefix", "user"), ("count", "2")])),
                ("noPrefixedPropBundle", data(&[("prop", "userEmail"), ("prefix", "user"), ("count", "2")])),
            ]
        );
    }

    #[test]
    fn threshold_below_two_is_rejected() {
        assert!(NoPrefixedPropBundles::from_options(Some(&json!({"threshold": 1}))).is_err());
    }

    #[rstest]
    #[case(
        "<UserRow userName={user.name} userEmail={user.email} userAvatarUrl={user.avatarUrl} />",
        "user",
        &["userName", "userEmail", "userAvatarUrl"]
    )]
    #[case(
        "<Card orderId={order.id} orderStatus={order.status} orderTotal={order.total} />",
        "order",
        &["orderId", "orderStatus", "orderTotal"]
    )]
    #[case(
        "<Card className={rootClass} classHeader={headerClass} classBody={bodyClass} />",
        "class",
        &["className", "classHeader", "classBody"]
    )]
    fn invalid(#[case] source: &str, #[case] prefix: &str, #[case] props: &[&str]) {
        let expected: Vec<_> = props
            .iter()
            .map(|prop| {
                (
                    "noPrefixedPropBundle",
                    data(&[("prop", prop), ("prefix", prefix), ("count", "3")]),
                )
            })
            .collect();
        assert_eq!(findings(&NoPrefixedPropBundles::default(), source), expected);
    }
}
