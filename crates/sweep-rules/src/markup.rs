//! Named functions, their bodies, and what those bodies return or call.

use sweep_parser::Semantic;
use sweep_parser::ast::{
    ArrowBody, AstKind, BindingIdentifier, Expression, FunctionBody, FunctionKind, Param,
    Statement,
};
use sweep_parser::visit::{self, Visit};

// ── Named functions ────────────────────────────────────────────────

/// Body of a function: a statement block, or an arrow's expression.
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Block(&'a FunctionBody),
    Expression(&'a Expression),
}

impl<'a> Body<'a> {
    #[must_use]
    pub fn of(function: AstKind<'a>) -> Option<Self> {
        match function {
            AstKind::Function(function) => function.body.as_ref().map(Body::Block),
            AstKind::ArrowFunction(arrow) => Some(match &arrow.body {
                ArrowBody::Block(block) => Body::Block(block),
                ArrowBody::Expression(expression) => Body::Expression(expression),
            }),
            _ => None,
        }
    }
}

/// A function declaration with a name, or a `const name = () => …` /
/// `const name = function () {…}` declarator.
#[derive(Debug, Clone, Copy)]
pub struct NamedFunction<'a> {
    pub name: &'a BindingIdentifier,
    /// The `Function` or `ArrowFunction` node.
    pub function: AstKind<'a>,
    pub params: &'a [Param],
    pub body: Option<Body<'a>>,
}

impl<'a> NamedFunction<'a> {
    fn new(name: &'a BindingIdentifier, function: AstKind<'a>) -> Option<Self> {
        let params = match function {
            AstKind::Function(function) => function.params.as_slice(),
            AstKind::ArrowFunction(arrow) => arrow.params.as_slice(),
            _ => return None,
        };
        Some(Self {
            name,
            function,
            params,
            body: Body::of(function),
        })
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.name.name
    }
}

/// The function a declarator's initializer defines, if any.
#[must_use]
pub fn function_init(init: &Expression) -> Option<AstKind<'_>> {
    match init {
        Expression::Function(function) => Some(AstKind::Function(function)),
        Expression::Arrow(arrow) => Some(AstKind::ArrowFunction(arrow)),
        _ => None,
    }
}

/// Every named function in the file, in source order.
#[must_use]
pub fn named_functions<'a>(semantic: &Semantic<'a>) -> Vec<NamedFunction<'a>> {
    semantic
        .nodes()
        .filter_map(|node| match node {
            AstKind::Function(function) if function.kind == FunctionKind::Declaration => {
                NamedFunction::new(function.name.as_ref()?, node)
            }
            AstKind::VariableDeclarator(declarator) => {
                let name = declarator.binding_name()?;
                NamedFunction::new(name, function_init(declarator.init.as_ref()?)?)
            }
            _ => None,
        })
        .collect()
}

// ── Markup ─────────────────────────────────────────────────────────

/// Whether evaluating `expression` can directly produce JSX, looking
/// through parentheses, conditionals and short-circuit operators.
#[must_use]
pub fn yields_jsx(expression: &Expression) -> bool {
    match expression {
        Expression::JsxElement(_) | Expression::JsxFragment(_) => true,
        Expression::Parenthesized(inner) => yields_jsx(&inner.expression),
        Expression::Conditional(conditional) => {
            yields_jsx(&conditional.consequent) || yields_jsx(&conditional.alternate)
        }
        Expression::Logical(logical) => yields_jsx(&logical.left) || yields_jsx(&logical.right),
        _ => false,
    }
}

#[derive(Default)]
struct JsxFinder {
    found: bool,
}

impl Visit<'_> for JsxFinder {
    fn enter_node(&mut self, kind: AstKind<'_>) {
        if matches!(kind, AstKind::JsxElement(_) | AstKind::JsxFragment(_)) {
            self.found = true;
        }
    }
}

/// JSX anywhere inside `expression`, nested functions included.
#[must_use]
pub fn contains_jsx(expression: &Expression) -> bool {
    let mut finder = JsxFinder::default();
    visit::walk_expression(&mut finder, expression);
    finder.found
}

/// Arguments of the `return` statements that belong to this body, skipping
/// returns inside nested functions.
#[must_use]
pub fn returned_expressions(body: &FunctionBody) -> Vec<&Expression> {
    let mut out = Vec::new();
    for statement in &body.statements {
        collect_returns(statement, &mut out);
    }
    out
}

fn collect_returns<'a>(statement: &'a Statement, out: &mut Vec<&'a Expression>) {
    match statement {
        Statement::Return(node) => out.extend(node.argument.as_ref()),
        Statement::If(node) => {
            collect_returns(&node.consequent, out);
            if let Some(alternate) = &node.alternate {
                collect_returns(alternate, out);
            }
        }
        Statement::For(node) => collect_returns(&node.body, out),
        Statement::ForIn(node) => collect_returns(&node.body, out),
        Statement::While(node) => collect_returns(&node.body, out),
        Statement::DoWhile(node) => collect_returns(&node.body, out),
        Statement::Labeled(node) => collect_returns(&node.body, out),
        Statement::Block(block) => {
            for inner in &block.body {
                collect_returns(inner, out);
            }
        }
        Statement::Switch(node) => {
            for case in &node.cases {
                for inner in &case.consequent {
                    collect_returns(inner, out);
                }
            }
        }
        Statement::Try(node) => {
            let handler = node.handler.as_ref().map(|clause| &clause.body);
            for block in std::iter::once(&node.block)
                .chain(handler)
                .chain(node.finalizer.as_ref())
            {
                for inner in &block.body {
                    collect_returns(inner, out);
                }
            }
        }
        _ => {}
    }
}

/// Arguments of the `return` statements written directly in the body.
#[must_use]
pub fn top_level_returns(body: &FunctionBody) -> Vec<&Expression> {
    body.statements
        .iter()
        .filter_map(|statement| match statement {
            Statement::Return(node) => node.argument.as_ref(),
            _ => None,
        })
        .collect()
}

// ── Calls ──────────────────────────────────────────────────────────

/// Collects call expressions that are not inside a nested function.
struct OwnCalls<F> {
    depth: usize,
    matches: F,
    found: bool,
}

impl<'a, F: Fn(&Expression) -> bool> Visit<'a> for OwnCalls<F> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        if kind.is_function_like() {
            self.depth += 1;
            return;
        }
        if self.depth == 0 && kind.as_call().is_some_and(|call| (self.matches)(&call.callee)) {
            self.found = true;
        }
    }

    fn leave_node(&mut self, kind: AstKind<'a>) {
        if kind.is_function_like() {
            self.depth = self.depth.saturating_sub(1);
        }
    }
}

/// Whether the body calls something whose callee satisfies `matches`,
/// outside of nested functions.
pub fn body_calls(body: Body<'_>, matches: impl Fn(&Expression) -> bool) -> bool {
    let mut finder = OwnCalls {
        depth: 0,
        matches,
        found: false,
    };
    match body {
        Body::Block(block) => {
            for statement in &block.statements {
                visit::walk_statement(&mut finder, statement);
            }
        }
        Body::Expression(expression) => visit::walk_expression(&mut finder, expression),
    }
    finder.found
}

/// Name a call targets: the identifier, or a member's property name.
#[must_use]
pub fn callee_name(callee: &Expression) -> Option<&str> {
    match callee.without_wrappers() {
        Expression::Identifier(ident) => Some(&ident.name),
        Expression::Member(member) => member.static_property_name(),
        _ => None,
    }
}

// ── Labels ─────────────────────────────────────────────────────────

/// Name a function is known by: its own name, or the declarator that binds
/// it.
#[must_use]
pub fn declared_name<'a>(semantic: &Semantic<'a>, function: AstKind<'a>) -> Option<&'a str> {
    if let AstKind::Function(function) = function
        && let Some(name) = &function.name
    {
        return Some(&name.name);
    }
    match semantic.parent(function.node_id())? {
        AstKind::VariableDeclarator(declarator) => declarator.binding_name().map(|name| name.name.as_str()),
        _ => None,
    }
}

/// `function 'name'`, `method 'name'`, or plain `function`.
#[must_use]
pub fn function_label(semantic: &Semantic<'_>, function: AstKind<'_>) -> String {
    if let Some(name) = declared_name(semantic, function) {
        return format!("function '{name}'");
    }
    if let Some(AstKind::MethodDefinition(method)) = semantic.parent(function.node_id())
        && let Some(name) = method.key.static_name()
    {
        return format!("method '{name}'");
    }
    "function".to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sweep_parser::{Dialect, parse};

    use super::*;
    use crate::naming::{HOOK_NAMES, is_hook_name};

    fn first_function(source: &str, check: impl Fn(&NamedFunction<'_>) -> bool) -> bool {
        let parsed = parse(source, Dialect::Tsx).unwrap();
        let semantic = Semantic::new(&parsed.program);
        let functions = named_functions(&semantic);
        check(&functions[0])
    }

    #[test]
    fn named_functions_in_source_order() {
        let parsed = parse(
            "function a() {} const b = () => 1; const c = function () {}; const d = 1;",
            Dialect::Tsx,
        )
        .unwrap();
        let semantic = Semantic::new(&parsed.program);
        let names: Vec<_> = named_functions(&semantic).iter().map(NamedFunction::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[rstest]
    #[case("const f = () => <div />;", true)]
    #[case("const f = () => (ok ? <div /> : null);", true)]
    #[case("const f = () => ok && <>x</>;", true)]
    #[case("const f = () => [<div key='a' />];", false)]
    fn yields(#[case] source: &str, #[case] expected: bool) {
        let result = first_function(source, |function| match function.body {
            Some(Body::Expression(expression)) => yields_jsx(expression),
            _ => false,
        });
        assert_eq!(result, expected);
    }

    #[test]
    fn returns_skip_nested_functions() {
        let source = r"
            function f() {
                if (a) { return 1; }
                try { return 2; } catch { return 3; }
                const g = () => { return 4; };
                return 5;
            }
        ";
        let count = first_function(source, |function| match function.body {
            Some(Body::Block(block)) => returned_expressions(block).len() == 4,
            _ => false,
        });
        assert!(count);
    }

    #[rstest]
    #[case("function useX() { const [a] = useState(0); return a; }", true)]
    #[case("function useX() { return React.useMemo(() => 1, []); }", true)]
    #[case("function useX() { return { a: 1 }; }", false)]
    #[case("function useX() { const f = () => useState(0); return f; }", false)]
    fn hook_calls(#[case] source: &str, #[case] expected: bool) {
        let result = first_function(source, |function| {
            function.body.is_some_and(|body| {
                body_calls(body, |callee| {
                    callee_name(callee).is_some_and(|name| HOOK_NAMES.contains(&name) || is_hook_name(name))
                })
            })
        });
        assert_eq!(result, expected);
    }

    #[test]
    fn function_labels() {
        let source = r"
            function load() {}
            const save = () => {};
            class Store { sync() {} }
            run(function () {});
        ";
        let parsed = parse(source, Dialect::Tsx).unwrap();
        let semantic = Semantic::new(&parsed.program);
        let labels: Vec<String> = semantic
            .nodes()
            .filter(|node| node.is_function_like())
            .map(|node| function_label(&semantic, node))
            .collect();
        assert_eq!(labels, vec!["function 'load'", "function 'save'", "method 'sync'", "function"]);
    }
}
