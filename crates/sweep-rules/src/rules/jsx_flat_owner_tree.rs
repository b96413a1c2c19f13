//! `jsx-flat-owner-tree`: self-closing handoffs between local components
//! (`Root` renders `<Page />`, `Page` renders `<Header />`, …) form chains;
//! a chain deeper than `allowedChainDepth` is reported at its root.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};

use crate::components::{components, report_span, self_closing_children};
use crate::metrics::ComponentGraph;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "jsx-flat-owner-tree",
    category: RuleCategory::React,
    description: "Encourage flatter parent component chains by reporting self-closing custom component handoffs deeper than allowedChainDepth",
    messages: &[(
        "deepParentTree",
        "Component '{{component}}' is in a {{depth}}-deep self-closing handoff chain (allowed {{allowedDepth}}): {{chain}}. Flatten at '{{nextHandoff}}'.",
    )],
};

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub allowed_chain_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { allowed_chain_depth: 2 }
    }
}

#[derive(Debug)]
pub struct JsxFlatOwnerTree {
    allowed_chain_depth: usize,
}

impl Default for JsxFlatOwnerTree {
    fn default() -> Self {
        Self {
            allowed_chain_depth: Options::default().allowed_chain_depth,
        }
    }
}

impl Configurable for JsxFlatOwnerTree {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: Options = parse_options(META.name, options)?;
        if options.allowed_chain_depth == 0 {
            return Err(ConfigError::InvalidOptions {
                rule: META.name.to_string(),
                reason: "allowedChainDepth must be at least 1".to_string(),
            });
        }
        Ok(Self {
            allowed_chain_depth: options.allowed_chain_depth,
        })
    }
}

impl Rule for JsxFlatOwnerTree {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut graph = ComponentGraph::new();
        let mut anchors: HashMap<String, Span> = HashMap::new();
        for component in components(ctx.semantic()) {
            graph.insert(component.name(), self_closing_children(component.body));
            anchors.insert(component.name().to_string(), report_span(&component));
        }

        graph
            .flagged_roots(self.allowed_chain_depth)
            .into_iter()
            .filter_map(|flagged| {
                let span = *anchors.get(&flagged.name)?;
                Some(
                    Diagnostic::new(span, "deepParentTree")
                        .with("component", &flagged.name)
                        .with("depth", flagged.depth())
                        .with("allowedDepth", self.allowed_chain_depth)
                        .with("chain", flagged.chain.join(" -> "))
                        .with("nextHandoff", flagged.next_handoff()),
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
    use crate::test_support::helpers::{Finding, data, findings, lint_with};

    fn deep(component: &str, depth: &str, allowed: &str, chain: &str, next: &str) -> Finding {
        (
            "deepParentTree",
            data(&[
                ("component", component),
                ("depth", depth),
                ("allowedDepth", allowed),
                ("chain", chain),
                ("nextHandoff", next),
            ]),
        )
    }

    const WIDE_TREE: &str = r"
        function Root() {
            return (
                <main>
                    <Page />
                    <Sidebar />
                </main>
            );
        }
        function Page() {
            return (
                <div>
                    <Header />
                    <Summary />
                </div>
            );
        }
        function Header() {
            return (
                <div>
                    <UserArea />
                    <Logo />
                </div>
            );
        }
        function UserArea() {
            return (
                <div>
                    <Avatar />
                </div>
            );
        }
        function Avatar() { return <img />; }
        function Sidebar() { return <aside>Sidebar</aside>; }
        function Summary() { return <div>Summary</div>; }
        function Logo() { return <div>Logo</div>; }
    ";

    const FOUR_LEVELS: &str = r"
        function Root() { return <Page />; }
        function Page() { return <Header />; }
        function Header() { return <UserArea />; }
        function UserArea() { return <div>User</div>; }
    ";

    #[rstest]
    #[case(
        r"
        function Header() { return <div>Header</div>; }
        function Page() { return <div><Header /></div>; }
        "
    )]
    #[case(
        r"
        function Wrapper({ children }: { children: React.ReactNode }) {
            return <section>{children}<Footer /></section>;
        }
        function Footer() { return <footer>Footer</footer>; }
        "
    )]
    #[case(
        r"
        function Root() { return <div><Page /><Sidebar /></div>; }
        function Page() { return <div>Page</div>; }
        function Sidebar() { return <div>Sidebar</div>; }
        "
    )]
    fn valid(#[case] source: &str) {
        assert!(findings(&JsxFlatOwnerTree::default(), source).is_empty());
    }

    #[test]
    fn generous_allowance() {
        assert!(lint_with::<JsxFlatOwnerTree>(json!({"allowedChainDepth": 4}), FOUR_LEVELS).is_empty());
    }

    #[test]
    fn mutual_handoff_reports_once() {
        let source = r"
            function Root() { return <Page />; }
            function Page() { return <Root />; }
        ";
        assert_eq!(
            lint_with::<JsxFlatOwnerTree>(json!({"allowedChainDepth": 1}), source),
            vec![deep("Root", "3", "1", "Root -> Page -> Root", "Page")]
        );
        assert_eq!(
            findings(&JsxFlatOwnerTree::default(), source),
            vec![deep("Root", "3", "2", "Root -> Page -> Root", "Page")]
        );
    }

    #[test]
    fn nested_members_of_a_flagged_chain_are_not_repeated() {
        let source = r"
            function Root() { return <Page />; }
            function Page() { return <Header />; }
            function Header() { return <div>Header</div>; }
        ";
        assert_eq!(
            lint_with::<JsxFlatOwnerTree>(json!({"allowedChainDepth": 1}), source),
            vec![deep("Root", "3", "1", "Root -> Page -> Header", "Page")]
        );
    }

    #[test]
    fn conditional_branches_are_followed() {
        let source = r"
            function Root({ enabled }: { enabled: boolean }) {
                return enabled ? (<Page />) : (enabled && <Sidebar />);
            }
            function Page() { return <Header />; }
            function Header() { return <UserArea />; }
            function UserArea() { return <div>User</div>; }
            function Sidebar() { return <Footer />; }
            function Footer() { return <div>Footer</div>; }
        ";
        assert_eq!(
            findings(&JsxFlatOwnerTree::default(), source),
            vec![deep("Root", "4", "2", "Root -> Page -> Header -> UserArea", "Page")]
        );
    }

    #[rstest]
    #[case(json!({}), "2")]
    #[case(json!({"allowedChainDepth": 4}), "4")]
    fn wide_tree_reports_its_root(#[case] options: Value, #[case] allowed: &str) {
        assert_eq!(
            lint_with::<JsxFlatOwnerTree>(options, WIDE_TREE),
            vec![deep(
                "Root",
                "5",
                allowed,
                "Root -> Page -> Header -> UserArea -> Avatar",
                "Page"
            )]
        );
    }

    #[test]
    fn arrow_components_anchor_on_their_binding() {
        let source = "const Outer = () => <Inner />;\nconst Inner = () => <Leaf />;\nconst Leaf = () => <span />;";
        let diagnostics = crate::test_support::helpers::run(&JsxFlatOwnerTree::default(), source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.source_text(source), "Outer");
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(JsxFlatOwnerTree::from_options(Some(&json!({"allowedChainDepth": 0}))).is_err());
    }
}
