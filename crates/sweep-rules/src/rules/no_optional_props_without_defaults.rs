//! `no-optional-props-without-defaults`: optional props a component declares
//! must be defaulted where the component destructures them.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::ast::{Param, Pattern, TsSignature, TsType};

use crate::components::components;
use crate::naming::GlobList;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};
use crate::shapes::AliasTable;

pub static META: RuleMeta = RuleMeta {
    name: "no-optional-props-without-defaults",
    category: RuleCategory::React,
    description: "Disallow authored optional component props unless they are defaulted at the component boundary.",
    messages: &[(
        "noOptionalPropWithoutDefault",
        "Component '{{component}}' prop '{{prop}}' is optional without a default.",
    )],
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Prop names (globs) that may stay optional.
    pub ignore: Vec<String>,
}

#[derive(Debug, Default)]
pub struct NoOptionalPropsWithoutDefaults {
    ignore: GlobList,
}

impl NoOptionalPropsWithoutDefaults {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            ignore: GlobList::new(&options.ignore),
        }
    }

    /// Optional, non-ignored property names written on the props type
    /// itself: an inline type literal or a local interface or alias.
    /// Inherited members are not authored here and are skipped.
    fn optional_props<'a>(&self, annotation: &'a TsType, aliases: &AliasTable<'a>) -> Vec<&'a str> {
        let members: Vec<&TsSignature> = match annotation {
            TsType::TypeLiteral(literal) => literal.members.iter().collect(),
            TsType::Reference(reference) => aliases.members(reference.name.last()).unwrap_or_default(),
            _ => Vec::new(),
        };
        let mut names = Vec::new();
        for member in members {
            let TsSignature::Property(property) = member else {
                continue;
            };
            if !property.optional {
                continue;
            }
            let Some(name) = property.key.static_name() else {
                continue;
            };
            if !self.ignore.matches(name) && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Keys destructured with a default: `{ tone = 'info', size: s = 'md' }`.
fn defaulted_keys(param: &Param) -> HashSet<&str> {
    let pattern = match &param.pattern {
        Pattern::Assignment(assignment) => &assignment.left,
        other => other,
    };
    let Pattern::Object(object) = pattern else {
        return HashSet::new();
    };
    object
        .properties
        .iter()
        .filter(|property| matches!(property.value, Pattern::Assignment(_)))
        .filter_map(|property| property.key.static_name())
        .collect()
}

impl Configurable for NoOptionalPropsWithoutDefaults {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for NoOptionalPropsWithoutDefaults {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for component in components(ctx.semantic()) {
            let Some(param) = component.params.first() else {
                continue;
            };
            let Some(annotation) = &param.type_annotation else {
                continue;
            };
            let defaulted = defaulted_keys(param);
            for prop in self.optional_props(annotation, ctx.aliases()) {
                if defaulted.contains(prop) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::new(param.span, "noOptionalPropWithoutDefault")
                        .with("component", component.name())
                        .with("prop", prop),
                );
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
    #[case(
        r"
        interface ButtonProps { tone?: 'primary' | 'secondary'; }
        function Button({ tone = 'primary' }: ButtonProps) { return tone; }
        "
    )]
    #[case(
        r"
        type InputProps = { size?: 'sm' | 'md' };
        const Input = ({ size = 'md' }: InputProps) => size;
        "
    )]
    #[case(
        r"
        interface DialogProps { open: boolean; onOpenChange: (open: boolean) => void; }
        function Dialog(props: DialogProps) { return props.open; }
        "
    )]
    #[case(
        r"
        interface ThirdPartyProps { fromLibrary?: boolean; }
        interface ButtonProps extends ThirdPartyProps { tone: 'primary' | 'secondary'; }
        function Button(props: ButtonProps) { return props.tone; }
        "
    )]
    #[case("function format(value?: string) { return value; }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoOptionalPropsWithoutDefaults::default(), source).is_empty());
    }

    #[rstest]
    #[case(
        r"
        interface ButtonProps { tone?: 'primary' | 'secondary'; }
        function Button(props: ButtonProps) { return props.tone; }
        ",
        "Button",
        "tone"
    )]
    #[case(
        r"
        type InputProps = { size?: 'sm' | 'md' };
        const Input = ({ size }: InputProps) => size;
        ",
        "Input",
        "size"
    )]
    #[case("const Banner = ({ dismissible }: { dismissible?: boolean }) => dismissible;", "Banner", "dismissible")]
    #[case(
        r"
        interface CardProps { tone?: 'info' | 'warning'; density?: 'comfortable' | 'compact'; }
        const Card = ({ tone = 'info' }: CardProps) => tone;
        ",
        "Card",
        "density"
    )]
    #[case(
        r"
        const Card = ({ tone }: CardProps) => tone;
        interface CardProps { tone?: 'info' | 'warning'; }
        ",
        "Card",
        "tone"
    )]
    fn invalid(#[case] source: &str, #[case] component: &str, #[case] prop: &str) {
        assert_eq!(
            findings(&NoOptionalPropsWithoutDefaults::default(), source),
            vec![(
                "noOptionalPropWithoutDefault",
                data(&[("component", component), ("prop", prop)])
            )]
        );
    }

    #[test]
    fn ignored_props_may_stay_optional() {
        let source = r"
            interface MenuProps { onSelect?: () => void; ref?: Ref; render?: Render; label?: string; }
            function Menu(props: MenuProps) { return null; }
        ";
        let found = lint_with::<NoOptionalPropsWithoutDefaults>(
            json!({"ignore": ["on*", "ref", "render"]}),
            source,
        );
        assert_eq!(
            found,
            vec![(
                "noOptionalPropWithoutDefault",
                data(&[("component", "Menu"), ("prop", "label")])
            )]
        );
    }
}
