//! Variable provenance relative to one function: its own parameters, its
//! own locals, or bindings declared somewhere else.

use std::collections::HashSet;

use sweep_parser::Semantic;
use sweep_parser::ast::AstKind;
use sweep_parser::semantic::{DeclKind, Scope, ScopeId, ScopeKind, SymbolId};

/// Where a binding used inside a function comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Parameter,
    Local,
    External,
}

/// Bindings declared by one function, excluding those of nested functions.
#[derive(Debug, Default, Clone)]
pub struct FunctionState {
    locals: HashSet<SymbolId>,
    params: HashSet<SymbolId>,
}

impl FunctionState {
    /// Collect the function's own scope and every nested block, catch, loop,
    /// class or switch scope without crossing into nested functions.
    #[must_use]
    pub fn build(semantic: &Semantic<'_>, function: AstKind<'_>) -> Self {
        let mut state = Self::default();
        let Some(function_scope) = semantic.scope_owned_by(function.node_id()) else {
            return state;
        };
        for scope in semantic.scopes() {
            if !belongs_to(semantic, scope, function_scope) {
                continue;
            }
            for symbol_id in scope.bindings() {
                state.locals.insert(symbol_id);
                if semantic.symbol(symbol_id).kind == DeclKind::Param {
                    state.params.insert(symbol_id);
                }
            }
        }
        state
    }

    #[must_use]
    pub fn classify(&self, symbol: SymbolId) -> Provenance {
        if self.params.contains(&symbol) {
            Provenance::Parameter
        } else if self.locals.contains(&symbol) {
            Provenance::Local
        } else {
            Provenance::External
        }
    }

    #[must_use]
    pub fn is_external_or_parameter(&self, symbol: SymbolId) -> bool {
        self.classify(symbol) != Provenance::Local
    }

    #[must_use]
    pub fn is_parameter(&self, symbol: SymbolId) -> bool {
        self.params.contains(&symbol)
    }
}

fn belongs_to(semantic: &Semantic<'_>, scope: &Scope, function_scope: ScopeId) -> bool {
    let function_node = semantic.scope(function_scope).node_id;
    if scope.node_id == function_node {
        return true;
    }
    if scope.kind == ScopeKind::Function {
        return false;
    }
    let mut current = scope.parent;
    while let Some(id) = current {
        if id == function_scope {
            return true;
        }
        let parent = semantic.scope(id);
        if parent.kind == ScopeKind::Function {
            return false;
        }
        current = parent.parent;
    }
    false
}
