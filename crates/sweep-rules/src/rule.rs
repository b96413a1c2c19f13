//! The rule contract and the per-file context every rule runs against.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use sweep_config::ConfigError;
use sweep_core::{Diagnostic, RuleCategory, Span};
use sweep_parser::ast::{AstKind, NodeId};
use sweep_parser::{ResolvedType, Semantic, TypeService};

use crate::provenance::FunctionState;
use crate::shapes::{AliasTable, ShapeResolver};

/// Static description of a rule.
#[derive(Debug)]
pub struct RuleMeta {
    /// Kebab-case rule name used in configuration.
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    /// `(message id, template)` pairs. Templates use `{{key}}` placeholders.
    pub messages: &'static [(&'static str, &'static str)],
}

impl RuleMeta {
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(message_id, _)| *message_id == id)
            .map(|(_, template)| *template)
    }
}

/// One analysis over one file.
///
/// Rules are pure per file: `check` reads the context and returns findings.
/// Inconclusive analysis yields no diagnostic rather than an error.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;
}

/// A rule that can be built from its `options` value.
pub trait Configurable: Rule + Sized + 'static {
    fn from_options(options: Option<&serde_json::Value>) -> Result<Self, ConfigError>;
}

/// Options schema of rules that take none. Any key is rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoOptions {}

/// Everything a rule may consult while checking one file.
///
/// Caches (the file-wide alias table and per-function provenance) live here
/// and are dropped with the context once the file is done.
pub struct RuleContext<'a> {
    path: &'a Path,
    source: &'a str,
    semantic: &'a Semantic<'a>,
    types: Option<&'a dyn TypeService>,
    aliases: OnceCell<AliasTable<'a>>,
    functions: RefCell<HashMap<NodeId, Rc<FunctionState>>>,
}

impl<'a> RuleContext<'a> {
    #[must_use]
    pub fn new(
        path: &'a Path,
        source: &'a str,
        semantic: &'a Semantic<'a>,
        types: Option<&'a dyn TypeService>,
    ) -> Self {
        Self {
            path,
            source,
            semantic,
            types,
            aliases: OnceCell::new(),
            functions: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn path(&self) -> &'a Path {
        self.path
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub const fn semantic(&self) -> &'a Semantic<'a> {
        self.semantic
    }

    #[must_use]
    pub const fn types(&self) -> Option<&'a dyn TypeService> {
        self.types
    }

    /// Source text under `span`.
    #[must_use]
    pub fn text(&self, span: Span) -> &'a str {
        span.source_text(self.source)
    }

    /// Resolved type of a node, when a type service is attached.
    #[must_use]
    pub fn resolved_type(&self, node: NodeId) -> Option<ResolvedType> {
        self.types.and_then(|types| types.type_of(node))
    }

    /// Interfaces and type aliases declared anywhere in the file.
    pub fn aliases(&self) -> &AliasTable<'a> {
        self.aliases
            .get_or_init(|| AliasTable::collect(self.semantic))
    }

    #[must_use]
    pub fn shapes(&self) -> ShapeResolver<'_, 'a> {
        ShapeResolver::new(self.aliases(), self.types)
    }

    /// Locals and parameters of `function`, computed once per function.
    pub fn function_state(&self, function: AstKind<'a>) -> Rc<FunctionState> {
        let id = function.node_id();
        if let Some(state) = self.functions.borrow().get(&id) {
            return Rc::clone(state);
        }
        let state = Rc::new(FunctionState::build(self.semantic, function));
        self.functions.borrow_mut().insert(id, Rc::clone(&state));
        state
    }
}

/// Deserialize a rule's options, falling back to defaults when absent.
///
/// A bare non-object value is offered to the options type as-is so rules
/// like `complexity` can accept shorthand such as `complexity = 10`.
pub fn parse_options<T>(rule: &str, options: Option<&serde_json::Value>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match options {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_json::from_value(value.clone()).map_err(|error| ConfigError::InvalidOptions {
                rule: rule.to_string(),
                reason: error.to_string(),
            })
        }
    }
}

/// Build a rule that takes no options, rejecting any that are given.
pub fn without_options<R: Default>(rule: &str, options: Option<&serde_json::Value>) -> Result<R, ConfigError> {
    parse_options::<NoOptions>(rule, options)?;
    Ok(R::default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default, deny_unknown_fields, rename_all = "camelCase")]
    struct Options {
        allowed_depth: usize,
    }

    #[test]
    fn missing_options_use_defaults() {
        let options: Options = parse_options("demo", None).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn options_are_camel_case() {
        let options: Options = parse_options("demo", Some(&json!({"allowedDepth": 3}))).unwrap();
        assert_eq!(options.allowed_depth, 3);
    }

    #[test]
    fn optionless_rules_reject_keys() {
        assert!(parse_options::<NoOptions>("demo", Some(&json!({}))).is_ok());
        assert!(parse_options::<NoOptions>("demo", Some(&json!({"max": 1}))).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = parse_options::<Options>("demo", Some(&json!({"depth": 3}))).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidOptions { rule, .. } if rule == "demo"));
    }
}
