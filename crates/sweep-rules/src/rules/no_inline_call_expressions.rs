//! `no-inline-call-expressions`: calls written inside loop headers or as
//! arguments of other calls should be bound to a name first.

use serde::Deserialize;
use serde_json::Value;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory};
use sweep_parser::Semantic;
use sweep_parser::ast::{AstKind, CallExpression, Expression, ForInKind, ForInit, MemberProperty, NodeId};

use crate::naming::GlobList;
use crate::rule::{Configurable, Rule, RuleContext, RuleMeta, parse_options};

pub static META: RuleMeta = RuleMeta {
    name: "no-inline-call-expressions",
    category: RuleCategory::Core,
    description: "Prefer extracting function calls into variables instead of placing them in loop headers or call arguments.",
    messages: &[
        (
            "noCallInForHeader",
            "Extract this function call from the for-loop header into a named variable.",
        ),
        (
            "noCallArg",
            "Extract this function call into a variable before passing it as an argument.",
        ),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InlineContext {
    ForHeader,
    CallArg,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    pub contexts: Vec<InlineContext>,
    /// Callee globs (`Object.entries` matches `*.entries`) allowed as the
    /// iterable of a `for…of`.
    pub allow_call_patterns: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            contexts: vec![InlineContext::ForHeader, InlineContext::CallArg],
            allow_call_patterns: ["*.entries", "*.values", "*.keys"].map(String::from).to_vec(),
        }
    }
}

#[derive(Debug)]
pub struct NoInlineCallExpressions {
    for_header: bool,
    call_arg: bool,
    allowed_iterables: GlobList,
}

impl NoInlineCallExpressions {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let contexts = if options.contexts.is_empty() {
            Options::default().contexts
        } else {
            options.contexts.clone()
        };
        Self {
            for_header: contexts.contains(&InlineContext::ForHeader),
            call_arg: contexts.contains(&InlineContext::CallArg),
            allowed_iterables: GlobList::new(&options.allow_call_patterns),
        }
    }

    fn is_allowed_iterable(&self, semantic: &Semantic<'_>, call: &CallExpression) -> bool {
        let Some(AstKind::ForInStatement(statement)) = semantic.parent(call.node_id) else {
            return false;
        };
        statement.kind == ForInKind::Of
            && statement.right.node_id() == call.node_id
            && dotted_name(&call.callee).is_some_and(|name| self.allowed_iterables.matches(&name))
    }
}

impl Default for NoInlineCallExpressions {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

/// `a.b.c` for a non-computed member chain of identifiers. A chain rooted
/// at anything else keeps only its property name.
fn dotted_name(callee: &Expression) -> Option<String> {
    match callee {
        Expression::Identifier(ident) => Some(ident.name.clone()),
        Expression::Member(member) => {
            let MemberProperty::Identifier(property) = &member.property else {
                return None;
            };
            Some(match dotted_name(&member.object) {
                Some(object) => format!("{object}.{}", property.name),
                None => property.name.clone(),
            })
        }
        _ => None,
    }
}

/// Whether `child` is the init, test or update clause of a `for`, or the
/// right-hand side of a `for…in`/`for…of`.
fn is_header_clause(parent: AstKind<'_>, child: NodeId) -> bool {
    match parent {
        AstKind::ForStatement(statement) => {
            let init = statement.init.as_ref().map(|init| match init {
                ForInit::Variable(declaration) => declaration.node_id,
                ForInit::Expression(expression) => expression.node_id(),
            });
            init == Some(child)
                || statement.test.as_ref().is_some_and(|test| test.node_id() == child)
                || statement.update.as_ref().is_some_and(|update| update.node_id() == child)
        }
        AstKind::ForInStatement(statement) => statement.right.node_id() == child,
        _ => false,
    }
}

fn is_argument(parent: AstKind<'_>, child: NodeId) -> bool {
    matches!(parent, AstKind::CallExpression(call)
        if call.arguments.iter().any(|argument| argument.node_id() == child))
}

/// Walk from `node` outwards and test every (parent, child) pair.
fn has_ancestor_edge(semantic: &Semantic<'_>, node: NodeId, edge: fn(AstKind<'_>, NodeId) -> bool) -> bool {
    let mut current = node;
    while let Some(parent) = semantic.parent(current) {
        if edge(parent, current) {
            return true;
        }
        current = parent.node_id();
    }
    false
}

impl Configurable for NoInlineCallExpressions {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        Ok(Self::new(&parse_options(META.name, options)?))
    }
}

impl Rule for NoInlineCallExpressions {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let semantic = ctx.semantic();
        let mut diagnostics = Vec::new();
        for call in semantic.nodes().filter_map(AstKind::as_call) {
            if self.for_header
                && has_ancestor_edge(semantic, call.node_id, is_header_clause)
                && !self.is_allowed_iterable(semantic, call)
            {
                diagnostics.push(Diagnostic::new(call.span, "noCallInForHeader"));
                continue;
            }
            if self.call_arg && has_ancestor_edge(semantic, call.node_id, is_argument) {
                diagnostics.push(Diagnostic::new(call.span, "noCallArg"));
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
    use crate::test_support::helpers::{findings, ids, lint_with};

    #[rstest]
    #[case("const reports = getReports(); for (const report of reports) { consume(report); }")]
    #[case("const result = buildResult(); handle(result);")]
    #[case("for (const entry of Object.entries(record)) { consume(entry); }")]
    #[case("for (const key of map.keys()) { consume(key); }")]
    #[case("for (let index = 0; index < items.length; index += 1) { consume(items[index]); }")]
    fn valid(#[case] source: &str) {
        assert!(findings(&NoInlineCallExpressions::default(), source).is_empty());
    }

    #[test]
    fn contexts_can_be_narrowed() {
        assert!(
            lint_with::<NoInlineCallExpressions>(
                json!({"contexts": ["call-arg"]}),
                "for (const entry of getEntries()) { consume(entry); }"
            )
            .is_empty()
        );
        assert!(
            lint_with::<NoInlineCallExpressions>(
                json!({"contexts": ["for-header"]}),
                "for (const key in source) { consume(key); } consume(format(key));"
            )
            .is_empty()
        );
    }

    #[rstest]
    #[case("for (let index = 0; index < getLimit(); index += 1) { consume(index); }")]
    #[case(
        r"
        function createIterable(): Iterable<string> { return new Set(['value']); }
        for (const value of createIterable()) { consume(value); }
        "
    )]
    #[case("for (const item of getItems()) { consume(item); }")]
    #[case("for (const key in loadSource()) { consume(key); }")]
    #[case("for (let cursor = open(); cursor; cursor = cursor.next) {}")]
    fn loop_headers(#[case] source: &str) {
        assert_eq!(ids(&NoInlineCallExpressions::default(), source), vec!["noCallInForHeader"]);
    }

    #[test]
    fn allow_list_can_be_cleared() {
        let found = lint_with::<NoInlineCallExpressions>(
            json!({"contexts": ["for-header"], "allowCallPatterns": []}),
            "for (const entry of Object.entries(record)) { consume(entry); }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "noCallInForHeader");
    }

    #[test]
    fn nested_calls_inside_an_allowed_iterable_are_still_headers() {
        assert_eq!(
            ids(
                &NoInlineCallExpressions::default(),
                "for (const entry of Object.entries(load())) { consume(entry); }"
            ),
            vec!["noCallInForHeader"]
        );
    }

    #[rstest]
    #[case("consume(formatValue(input));", vec!["noCallArg"])]
    #[case("consume(buildValue(loadValue()));", vec!["noCallArg", "noCallArg"])]
    #[case("consume((formatValue(input)));", vec!["noCallArg"])]
    #[case("items.forEach((item) => consume(item));", vec!["noCallArg"])]
    fn call_arguments(#[case] source: &str, #[case] expected: Vec<&str>) {
        assert_eq!(ids(&NoInlineCallExpressions::default(), source), expected);
    }

    #[test]
    fn unknown_context_is_rejected() {
        assert!(NoInlineCallExpressions::from_options(Some(&json!({"contexts": ["loop-body"]}))).is_err());
    }
}
