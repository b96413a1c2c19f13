//! `jsx-on-noun-verb-handler-props`: prefer `on{Noun}{Verb}` over
//! `on{Verb}{Noun}` when the split is unambiguous.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::naming::{
    HANDLER_NOUNS, HANDLER_VERBS, PAST_TENSE_VERBS, first_is_upper_or_caseless, has_word_prefix,
    merge_vocabulary,
};
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-on-noun-verb-handler-props",
    category: RuleCategory::React,
    description: "Prefer on{Noun}{Verb} over on{Verb}{Noun} for handler prop names (e.g. onValueChange over onChangeValue).",
    messages: &[(
        "preferNounVerb",
        "Prefer '{{suggestion}}' over '{{prop}}' (noun before verb).",
    )],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub extend_verbs: Vec<String>,
    pub extend_nouns: Vec<String>,
}

#[derive(Debug)]
pub struct JsxOnNounVerbHandlerProps {
    verbs: Vec<String>,
    nouns: HashSet<String>,
}

impl Default for JsxOnNounVerbHandlerProps {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl JsxOnNounVerbHandlerProps {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let defaults: Vec<&str> = HANDLER_VERBS.iter().chain(PAST_TENSE_VERBS).copied().collect();
        Self {
            verbs: merge_vocabulary(&defaults, &options.extend_verbs),
            nouns: merge_vocabulary(HANDLER_NOUNS, &options.extend_nouns)
                .into_iter()
                .collect(),
        }
    }

    /// `rest` already reads as a known noun followed by a verb.
    fn is_noun_verb(&self, rest: &str) -> bool {
        let lower = rest.to_lowercase();
        self.verbs.iter().any(|verb| {
            let Some(noun) = lower.strip_suffix(verb.as_str()) else {
                return false;
            };
            !noun.is_empty()
                && rest.get(..noun.len()).is_some_and(first_is_upper_or_caseless)
                && self.nouns.contains(noun)
        })
    }

    fn suggestion(&self, prop: &str) -> Option<String> {
        if !has_word_prefix(prop, "on") {
            return None;
        }
        let rest = &prop[2..];
        if rest.chars().count() < 2 || self.is_noun_verb(rest) {
            return None;
        }
        let lower = rest.to_lowercase();
        for verb in &self.verbs {
            if !lower.starts_with(verb.as_str()) {
                continue;
            }
            // A leading word that is also a noun makes the split ambiguous.
            if self.nouns.contains(verb) {
                return None;
            }
            let (Some(leading), Some(noun)) = (rest.get(..verb.len()), rest.get(verb.len()..)) else {
                continue;
            };
            if noun.is_empty() || !first_is_upper_or_caseless(noun) {
                continue;
            }
            return Some(format!("on{noun}{leading}"));
        }
        None
    }
}

impl Configurable for JsxOnNounVerbHandlerProps {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for JsxOnNounVerbHandlerProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        ctx.semantic()
            .nodes()
            .filter_map(|node| node.as_jsx_attribute())
            .filter_map(|attribute| {
                let prop = attribute.name.text();
                let suggestion = self.suggestion(&prop)?;
                Some(
                    Diagnostic::new(attribute.name.span(), "preferNounVerb")
                        .with("prop", prop)
                        .with("suggestion", suggestion),
                )
            })
            .collect()
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
    #[case("<Feature onFeatureDisabled={set} />")]
    #[case("<Tabs onClick={set} />")]
    #[case("<Input onInputChange={set} />")]
    #[case("<Input onInputValue={set} />")]
    fn valid(#[case] source: &str) {
        assert!(findings(&JsxOnNounVerbHandlerProps::default(), source).is_empty());
    }

    #[rstest]
    #[case("<Select onChangeValue={set} />", "onChangeValue", "onValueChange")]
    #[case("<Dialog onOpenDialog={set} />", "onOpenDialog", "onDialogOpen")]
    #[case("<Row onSelectRow={set} />", "onSelectRow", "onRowSelect")]
    fn invalid(#[case] source: &str, #[case] prop: &str, #[case] suggestion: &str) {
        assert_eq!(
            findings(&JsxOnNounVerbHandlerProps::default(), source),
            vec![("preferNounVerb", data(&[("prop", prop), ("suggestion", suggestion)]))]
        );
    }

    #[test]
    fn extended_nouns_make_names_valid() {
        let source = "<Chart onWidgetSave={save} onSaveWidget={save} />";
        assert_eq!(
            lint_with::<JsxOnNounVerbHandlerProps>(json!({"extendNouns": ["widget"]}), source),
            vec![(
                "preferNounVerb",
                data(&[("prop", "onSaveWidget"), ("suggestion", "onWidgetSave")])
            )]
        );
    }
}
