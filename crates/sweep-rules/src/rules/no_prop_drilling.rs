//! `no-prop-drilling`: props accepted only to be forwarded form a chain
//! between the local components that receive them. Chains longer than
//! `allowedDepth` are reported at their deepest owner.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::components::{ForwardedProp, components, forwarded_props};
use crate::metrics::ComponentGraph;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-prop-drilling",
    category: RuleCategory::React,
    description: "Disallow prop drilling in component owners",
    messages: &[(
        "noPropDrilling",
        "Prop '{{prop}}' in '{{component}}' has a prop drilling depth of {{depth}} (allowed {{allowedDepth}}). Use compound composition.",
    )],
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub allowed_depth: usize,
    /// Leave `...rest` bindings out of the analysis.
    pub ignore_props_spread: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allowed_depth: 1,
            ignore_props_spread: true,
        }
    }
}

#[derive(Debug)]
pub struct NoPropDrilling {
    allowed_depth: usize,
    ignore_props_spread: bool,
}

impl NoPropDrilling {
    #[must_use]
    pub const fn new(options: &Options) -> Self {
        Self {
            allowed_depth: options.allowed_depth,
            ignore_props_spread: options.ignore_props_spread,
        }
    }
}

impl Default for NoPropDrilling {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Configurable for NoPropDrilling {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        if options.allowed_depth == 0 {
            return Err(ConfigError::InvalidOptions {
                rule: META.name.to_string(),
                reason: "allowedDepth must be at least 1".to_string(),
            });
        }
        Ok(Self::new(&options))
    }
}

impl Rule for NoPropDrilling {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut graph = ComponentGraph::new();
        let mut violations: HashMap<String, Vec<ForwardedProp<'_>>> = HashMap::new();
        for component in components(semantic) {
            let forwarded = forwarded_props(semantic, &component, !self.ignore_props_spread);
            if forwarded.is_empty() {
                continue;
            }
            let mut children: Vec<String> = Vec::new();
            for prop in &forwarded {
                children.extend(prop.components.iter().cloned());
            }
            graph.insert(component.name(), children);
            violations.insert(component.name().to_string(), forwarded);
        }

        let mut diagnostics = Vec::new();
        for flagged in graph.flagged_roots(self.allowed_depth) {
            tracing::debug!(component = %flagged.name, depth = flagged.depth(), "prop drilling chain");
            let Some(props) = violations.get(&flagged.name) else {
                continue;
            };
            for prop in props {
                diagnostics.push(
                    Diagnostic::new(prop.binding.local.span, "noPropDrilling")
                        .with("prop", prop.binding.prop_label())
                        .with("component", &flagged.name)
                        .with("forwardedTo", prop.targets_label())
                        .with("depth", flagged.depth())
                        .with("allowedDepth", self.allowed_depth),
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
    use crate::test_support::helpers::{Finding, data, findings, lint_with};

    fn drilled(prop: &str, component: &str, forwarded_to: &str, depth: &str, allowed: &str) -> Finding {
        (
            "noPropDrilling",
            data(&[
                ("prop", prop),
                ("component", component),
                ("forwardedTo", forwarded_to),
                ("depth", depth),
                ("allowedDepth", allowed),
            ]),
        )
    }

    const LEVELS: &str = r"
        const Native = ({ ...props }: InputProps) => <input {...props} />;
        const LevelOne = ({ ...props }: InputProps) => <Native {...props} />;
        const LevelTwo = ({ ...props }: InputProps) => <LevelOne {...props} />;
        const LevelThree = ({ ...props }: InputProps) => <LevelTwo {...props} />;
    ";

    #[rstest]
    #[case("function Card({ title }: { title: string }) { return <h2>{title.toUpperCase()}</h2>; }")]
    #[case("function Dialog({ children }: { children: React.ReactNode }) { return <DialogRoot>{children}</DialogRoot>; }")]
    #[case(
        r"
        const Counter = ({ count }: { count: number }) => {
            const next = count + 1;
            return <Value value={next} />;
        };
        "
    )]
    #[case("const Input: React.FC<InputProps> = ({ type = 'text', ...props }) => <input type={type} {...props} />;")]
    #[case(
        r"
        const Leaf = ({ title }: { title: string }) => <h2>{title}</h2>;
        const Card = ({ title }: { title: string }) => <Leaf title={title} />;
        "
    )]
    #[case(LEVELS)]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoPropDrilling::default(), source).is_empty());
    }

    #[test]
    fn spread_forwarding_counts_when_enabled() {
        let source = r"
            const BaseInput = ({ ...props }: InputProps) => {
                return <input {...props} />;
            };
            const Input = ({ ...props }: InputProps) => {
                return <BaseInput {...props} />;
            };
        ";
        assert_eq!(
            lint_with::<NoPropDrilling>(json!({"ignorePropsSpread": false}), source),
            vec![drilled("...props", "Input", "props spread", "2", "1")]
        );
    }

    #[test]
    fn reports_only_the_top_of_the_chain() {
        let source = r"
            const Leaf = ({ title }: { title: string }) => <h2>{title}</h2>;
            const Middle = ({ title }: { title: string }) => {
                return <Leaf title={title} />;
            };
            const Top = ({ title }: { title: string }) => {
                return <Middle title={title} />;
            };
        ";
        assert_eq!(
            findings(&NoPropDrilling::default(), source),
            vec![drilled("title", "Top", "title", "2", "1")]
        );
    }

    #[test]
    fn deeper_allowance() {
        assert_eq!(
            lint_with::<NoPropDrilling>(json!({"allowedDepth": 2, "ignorePropsSpread": false}), LEVELS),
            vec![drilled("...props", "LevelThree", "props spread", "4", "2")]
        );
        assert!(
            lint_with::<NoPropDrilling>(json!({"allowedDepth": 2}), LEVELS).is_empty()
        );
    }

    #[test]
    fn mutual_forwarding_terminates() {
        let source = r"
            const A = ({ value }: Props) => <B value={value} />;
            const B = ({ value }: Props) => <A value={value} />;
        ";
        assert_eq!(
            findings(&NoPropDrilling::default(), source),
            vec![drilled("value", "A", "value", "3", "1")]
        );
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(NoPropDrilling::from_options(Some(&json!({"allowedDepth": 0}))).is_err());
    }
}
