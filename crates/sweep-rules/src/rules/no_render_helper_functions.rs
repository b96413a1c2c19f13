//! `no-render-helper-functions`: functions that return markup are
//! components and get component names.

use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};

use crate::markup::{Body, named_functions, top_level_returns, yields_jsx};
use crate::naming::is_strict_pascal_case;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, without_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-render-helper-functions",
    category: RuleCategory::React,
    description: "Disallow non-PascalCase functions that return JSX.",
    messages: &[(
        "noRenderHelperFunctions",
        "Function '{{name}}' returns JSX but is not PascalCase. Use a component name (PascalCase) or move the JSX elsewhere.",
    )],
};

#[derive(Debug, Default)]
pub struct NoRenderHelperFunctions;

impl Configurable for NoRenderHelperFunctions {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        without_options(META.name, options)
    }
}

fn returns_markup(body: Body<'_>) -> bool {
    match body {
        Body::Expression(expression) => yields_jsx(expression),
        Body::Block(block) => top_level_returns(block).into_iter().any(yields_jsx),
    }
}

impl Rule for NoRenderHelperFunctions {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        named_functions(ctx.semantic())
            .into_iter()
            .filter(|function| !is_strict_pascal_case(function.name()))
            .filter(|function| function.body.is_some_and(returns_markup))
            .map(|function| {
                Diagnostic::new(function.name.span, "noRenderHelperFunctions")
                    .with("name", function.name())
            })
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
    #[case("function Header() { return <header>Title</header>; }")]
    #[case("const Layout = () => <div className='layout' />;")]
    #[case("const Card = () => <><div /></>;")]
    #[case("function useUser() { const [u, setU] = useState(null); return u; }")]
    #[case("const getData = () => ({ foo: 1 });")]
    #[case("function renderHelper() { return null; }")]
    #[case("const formatText = () => 'hello';")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoRenderHelperFunctions, source).is_empty());
    }

    #[rstest]
    #[case("function renderHeader() { return <header>Title</header>; }", "renderHeader")]
    #[case("const getLayout = () => <div className='layout' />;", "getLayout")]
    #[case("function formatLabel() { return <span><strong>Label</strong></span>; }", "formatLabel")]
    #[case("const makeCard = () => <><div /></>;", "makeCard")]
    #[case("const foo = () => (<div />);", "foo")]
    #[case("function renderItem() { return cond ? <A /> : <B />; }", "renderItem")]
    fn invalid(#[case] source: &str, #[case] name: &str) {
        assert_eq!(
            findings(&NoRenderHelperFunctions, source),
            vec![("noRenderHelperFunctions", data(&[("name", name)]))]
        );
    }
}
