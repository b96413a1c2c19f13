//! `jsx-on-handler-verb-suffix`: `on*` props end with a verb
//! (`onValueChange`, not `onChangeValue`).

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::naming::{HANDLER_VERBS, first_is_upper_or_caseless, is_handler_name, merge_vocabulary};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-on-handler-verb-suffix",
    category: RuleCategory::React,
    description: "Ensure on* handler prop names end with a verb (for example onValueChange).",
    messages: &[
        (
            "mustEndWithVerb",
            "Handler prop '{{prop}}' should end with a verb (for example 'onValueChange').",
        ),
        (
            "preferVerbSuffix",
            "Prefer '{{suggestion}}' over '{{prop}}' so the handler name ends with a verb.",
        ),
    ],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub extend_verbs: Vec<String>,
}

#[derive(Debug)]
pub struct JsxOnHandlerVerbSuffix {
    verbs: Vec<String>,
}

impl Default for JsxOnHandlerVerbSuffix {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl JsxOnHandlerVerbSuffix {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            verbs: merge_vocabulary(HANDLER_VERBS, &options.extend_verbs),
        }
    }

    fn ends_with_verb(&self, rest: &str) -> bool {
        let lower = rest.to_lowercase();
        self.verbs.iter().any(|verb| lower.ends_with(verb.as_str()))
    }

    /// `on{Verb}{Subject}` rewritten as `on{Subject}{Verb}`.
    fn suggestion(&self, rest: &str) -> Option<String> {
        if rest.chars().count() < 2 {
            return None;
        }
        let lower = rest.to_lowercase();
        self.verbs.iter().find_map(|verb| {
            if !lower.starts_with(verb.as_str()) {
                return None;
            }
            let (leading, subject) = (rest.get(..verb.len())?, rest.get(verb.len()..)?);
            (!subject.is_empty() && first_is_upper_or_caseless(subject))
                .then(|| format!("on{subject}{leading}"))
        })
    }
}

impl Configurable for JsxOnHandlerVerbSuffix {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for JsxOnHandlerVerbSuffix {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for attribute in ctx.semantic().nodes().filter_map(|node| node.as_jsx_attribute()) {
            let prop = attribute.name.text();
            if !is_handler_name(&prop) {
                continue;
            }
            let rest = &prop[2..];
            if self.ends_with_verb(rest) {
                continue;
            }
            let diagnostic = match self.suggestion(rest) {
                Some(suggestion) => Diagnostic::new(attribute.name.span(), "preferVerbSuffix")
                    .with("suggestion", suggestion),
                None => Diagnostic::new(attribute.name.span(), "mustEndWithVerb"),
            };
            diagnostics.push(diagnostic.with("prop", &prop));
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
    #[case("<Select onValueChange={set} />")]
    #[case("<Dialog onOpenChange={set} />")]
    #[case("<Button onClick={go} />")]
    #[case("<Input onKeyDown={go} />")]
    #[case("<Foo once={1} />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&JsxOnHandlerVerbSuffix::default(), source).is_empty());
    }

    #[test]
    fn suggests_moving_the_leading_verb() {
        assert_eq!(
            findings(&JsxOnHandlerVerbSuffix::default(), "<Select onChangeValue={set} />"),
            vec![(
                "preferVerbSuffix",
                data(&[("prop", "onChangeValue"), ("suggestion", "onValueChange")])
            )]
        );
    }

    #[test]
    fn reports_names_without_any_verb() {
        assert_eq!(
            findings(&JsxOnHandlerVerbSuffix::default(), "<Tabs onTabs={set} />"),
            vec![("mustEndWithVerb", data(&[("prop", "onTabs")]))]
        );
    }

    #[test]
    fn extended_verbs_are_accepted() {
        let source = "<Editor onTextCommit={save} />";
        assert_eq!(findings(&JsxOnHandlerVerbSuffix::default(), source).len(), 1);
        assert!(lint_with::<JsxOnHandlerVerbSuffix>(json!({"extendVerbs": [" Commit "]}), source).is_empty());
    }

    #[test]
    fn rejects_unknown_options() {
        assert!(JsxOnHandlerVerbSuffix::from_options(Some(&json!({"verbs": []}))).is_err());
    }
}
