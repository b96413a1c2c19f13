//! Per-file semantic model: a preorder node table with parent links, lexical
//! scopes, declared symbols and resolved references.
//!
//! Built once per file and shared read-only by every rule.

mod builder;
mod scope;
mod symbol;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

pub use scope::{Scope, ScopeId, ScopeKind};
pub use symbol::{DeclKind, Reference, ReferenceFlags, ReferenceId, Symbol, SymbolId};

use crate::ast::{AstKind, NodeId, Program};

pub struct Semantic<'a> {
    program: &'a Program,
    nodes: Vec<Option<AstKind<'a>>>,
    parents: Vec<Option<NodeId>>,
    node_scopes: Vec<Option<ScopeId>>,
    preorder: Vec<NodeId>,
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    references: Vec<Reference>,
    scope_owners: HashMap<NodeId, ScopeId>,
    symbol_by_binding: HashMap<NodeId, SymbolId>,
    reference_by_node: HashMap<NodeId, ReferenceId>,
}

impl<'a> Semantic<'a> {
    #[must_use]
    pub fn new(program: &'a Program) -> Self {
        builder::SemanticBuilder::build(program)
    }

    #[must_use]
    pub const fn program(&self) -> &'a Program {
        self.program
    }

    // ── Nodes ──────────────────────────────────────────────────────

    /// Every node in preorder.
    pub fn nodes(&self) -> impl Iterator<Item = AstKind<'a>> + '_ {
        self.preorder.iter().filter_map(|id| self.kind(*id))
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<AstKind<'a>> {
        self.nodes.get(id.index()).copied().flatten()
    }

    #[must_use]
    pub fn parent_id(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<AstKind<'a>> {
        self.parent_id(id).and_then(|parent| self.kind(parent))
    }

    /// Ancestors from the parent outwards, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = AstKind<'a>> + '_ {
        std::iter::successors(self.parent_id(id), |current| self.parent_id(*current))
            .filter_map(|ancestor| self.kind(ancestor))
    }

    /// Nearest enclosing function or arrow, excluding `id` itself.
    #[must_use]
    pub fn enclosing_function(&self, id: NodeId) -> Option<AstKind<'a>> {
        self.ancestors(id).find(|kind| kind.is_function_like())
    }

    /// Whether `inner` is `outer` or lies inside it.
    #[must_use]
    pub fn is_within(&self, inner: NodeId, outer: NodeId) -> bool {
        inner == outer
            || std::iter::successors(self.parent_id(inner), |current| self.parent_id(*current))
                .any(|ancestor| ancestor == outer)
    }

    // ── Scopes ─────────────────────────────────────────────────────

    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[must_use]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    /// The scope a node sits in (for scope-opening nodes, the enclosing one).
    #[must_use]
    pub fn scope_of(&self, id: NodeId) -> ScopeId {
        self.node_scopes
            .get(id.index())
            .copied()
            .flatten()
            .unwrap_or_else(|| ScopeId::new(0))
    }

    /// The scope opened by a function, block, loop, catch clause or class.
    #[must_use]
    pub fn scope_owned_by(&self, id: NodeId) -> Option<ScopeId> {
        self.scope_owners.get(&id).copied()
    }

    /// Whether `inner` is `outer` or nested inside it.
    #[must_use]
    pub fn scope_is_within(&self, inner: ScopeId, outer: ScopeId) -> bool {
        std::iter::successors(Some(inner), |scope| self.scope(*scope).parent)
            .any(|scope| scope == outer)
    }

    // ── Symbols and references ─────────────────────────────────────

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[must_use]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// The symbol a `BindingIdentifier` declares.
    #[must_use]
    pub fn symbol_for_binding(&self, binding: NodeId) -> Option<SymbolId> {
        self.symbol_by_binding.get(&binding).copied()
    }

    #[must_use]
    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.index()]
    }

    pub fn references(&self) -> impl Iterator<Item = &Reference> + '_ {
        self.references.iter()
    }

    /// The reference recorded for an identifier expression or JSX name.
    #[must_use]
    pub fn reference_at(&self, node: NodeId) -> Option<&Reference> {
        self.reference_by_node
            .get(&node)
            .map(|reference| self.reference(*reference))
    }

    /// Symbol an identifier expression resolves to.
    #[must_use]
    pub fn resolve(&self, node: NodeId) -> Option<SymbolId> {
        self.reference_at(node).and_then(|reference| reference.symbol)
    }

    pub fn references_to(&self, symbol: SymbolId) -> impl Iterator<Item = &Reference> + '_ {
        self.symbol(symbol)
            .references()
            .map(|reference| self.reference(reference))
    }

    /// Look `name` up as a value from `scope` outwards.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        std::iter::successors(Some(scope), |current| self.scope(*current).parent)
            .find_map(|current| self.scope(current).binding(name))
    }

    /// Look `name` up as an interface or type alias from `scope` outwards.
    #[must_use]
    pub fn lookup_type(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        std::iter::successors(Some(scope), |current| self.scope(*current).parent)
            .find_map(|current| self.scope(current).type_binding(name))
    }

    /// Declaring node of a symbol.
    #[must_use]
    pub fn declaration(&self, symbol: SymbolId) -> Option<AstKind<'a>> {
        self.kind(self.symbol(symbol).declaration)
    }
}
