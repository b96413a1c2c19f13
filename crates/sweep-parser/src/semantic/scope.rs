use std::collections::HashMap;

use crate::ast::NodeId;

use super::SymbolId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    /// Functions, arrows and class static blocks.
    Function,
    Block,
    Catch,
    /// Head of a `for`, `for…in` or `for…of` loop.
    For,
    Class,
    Switch,
}

impl ScopeKind {
    /// Scopes that `var` declarations hoist to.
    #[must_use]
    pub const fn is_var_scope(self) -> bool {
        matches!(self, Self::Module | Self::Function)
    }
}

#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    /// The node that opened this scope.
    pub node_id: NodeId,
    pub(crate) bindings: HashMap<String, SymbolId>,
    /// Interfaces and type aliases live in their own namespace.
    pub(crate) type_bindings: HashMap<String, SymbolId>,
}

impl Scope {
    pub(crate) fn new(kind: ScopeKind, parent: Option<ScopeId>, node_id: NodeId) -> Self {
        Self {
            kind,
            parent,
            node_id,
            bindings: HashMap::new(),
            type_bindings: HashMap::new(),
        }
    }

    /// Symbol declared directly in this scope under `name`.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<SymbolId> {
        self.bindings.get(name).copied()
    }

    /// Interface or type alias declared directly in this scope.
    #[must_use]
    pub fn type_binding(&self, name: &str) -> Option<SymbolId> {
        self.type_bindings.get(name).copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.bindings.values().copied()
    }
}
