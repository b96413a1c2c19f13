use std::collections::HashMap;

use crate::ast::{
    AssignmentTarget, AstKind, BindingIdentifier, Expression, ForInLeft, FunctionKind, NodeId,
    Program, VariableKind,
};
use crate::visit::{Visit, walk_program};

use super::{
    DeclKind, Reference, ReferenceFlags, ReferenceId, Scope, ScopeId, ScopeKind, Semantic,
    Symbol, SymbolId,
};

pub(super) struct SemanticBuilder<'a> {
    nodes: Vec<Option<AstKind<'a>>>,
    parents: Vec<Option<NodeId>>,
    node_scopes: Vec<Option<ScopeId>>,
    preorder: Vec<NodeId>,
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    references: Vec<Reference>,
    node_stack: Vec<AstKind<'a>>,
    /// Open scopes with the node that opened each.
    scope_stack: Vec<(NodeId, ScopeId)>,
    scope_owners: HashMap<NodeId, ScopeId>,
    symbol_by_binding: HashMap<NodeId, SymbolId>,
    reference_by_node: HashMap<NodeId, ReferenceId>,
}

impl<'a> SemanticBuilder<'a> {
    pub(super) fn build(program: &'a Program) -> Semantic<'a> {
        let capacity = program.node_count as usize;
        let mut builder = Self {
            nodes: vec![None; capacity],
            parents: vec![None; capacity],
            node_scopes: vec![None; capacity],
            preorder: Vec::with_capacity(capacity),
            scopes: Vec::new(),
            symbols: Vec::new(),
            references: Vec::new(),
            node_stack: Vec::new(),
            scope_stack: Vec::new(),
            scope_owners: HashMap::new(),
            symbol_by_binding: HashMap::new(),
            reference_by_node: HashMap::new(),
        };
        walk_program(&mut builder, program);
        builder.resolve_references();

        Semantic {
            program,
            nodes: builder.nodes,
            parents: builder.parents,
            node_scopes: builder.node_scopes,
            preorder: builder.preorder,
            scopes: builder.scopes,
            symbols: builder.symbols,
            references: builder.references,
            scope_owners: builder.scope_owners,
            symbol_by_binding: builder.symbol_by_binding,
            reference_by_node: builder.reference_by_node,
        }
    }

    fn current_scope(&self) -> ScopeId {
        self.scope_stack
            .last()
            .map_or(ScopeId::new(0), |(_, scope)| *scope)
    }

    fn nearest_var_scope(&self) -> ScopeId {
        let mut scope = self.current_scope();
        loop {
            let data = &self.scopes[scope.index()];
            match data.parent {
                Some(parent) if !data.kind.is_var_scope() => scope = parent,
                _ => return scope,
            }
        }
    }

    fn parent_scope_of_current(&self) -> ScopeId {
        let current = self.current_scope();
        self.scopes[current.index()].parent.unwrap_or(current)
    }

    fn record_node(&mut self, kind: AstKind<'a>) {
        let id = kind.node_id();
        let index = id.index();
        if index >= self.nodes.len() {
            self.nodes.resize(index + 1, None);
            self.parents.resize(index + 1, None);
            self.node_scopes.resize(index + 1, None);
        }
        self.nodes[index] = Some(kind);
        self.parents[index] = self.node_stack.last().map(|parent| parent.node_id());
        self.node_scopes[index] = (!self.scopes.is_empty()).then(|| self.current_scope());
        self.preorder.push(id);
    }

    fn open_scope(&mut self, kind: AstKind<'a>) {
        let scope_kind = match kind {
            AstKind::Program(_) => ScopeKind::Module,
            AstKind::Function(_) | AstKind::ArrowFunction(_) | AstKind::StaticBlock(_) => {
                ScopeKind::Function
            }
            AstKind::BlockStatement(_) => ScopeKind::Block,
            AstKind::ForStatement(_) | AstKind::ForInStatement(_) => ScopeKind::For,
            AstKind::CatchClause(_) => ScopeKind::Catch,
            AstKind::Class(_) => ScopeKind::Class,
            AstKind::SwitchStatement(_) => ScopeKind::Switch,
            _ => return,
        };
        let parent = (!self.scopes.is_empty()).then(|| self.current_scope());
        let scope = ScopeId::new(self.scopes.len());
        self.scopes.push(Scope::new(scope_kind, parent, kind.node_id()));
        self.scope_stack.push((kind.node_id(), scope));
        self.scope_owners.insert(kind.node_id(), scope);
    }

    // ── Declarations ───────────────────────────────────────────────

    /// Classify a binding identifier by its nearest non-pattern ancestor.
    fn on_binding(&mut self, ident: &'a BindingIdentifier) {
        let mut ancestors = self.node_stack.iter().rev().copied().filter(|kind| {
            !matches!(
                kind,
                AstKind::ObjectPattern(_)
                    | AstKind::ArrayPattern(_)
                    | AstKind::BindingProperty(_)
                    | AstKind::AssignmentPattern(_)
                    | AstKind::RestElement(_)
            )
        });
        let Some(owner) = ancestors.next() else {
            return;
        };

        let (kind, scope, declaration) = match owner {
            AstKind::VariableDeclarator(declarator) => {
                let variable_kind = match ancestors.next() {
                    Some(AstKind::VariableDeclaration(declaration)) => declaration.kind,
                    _ => VariableKind::Let,
                };
                let (kind, scope) = self.variable_target(variable_kind);
                (kind, scope, declarator.node_id)
            }
            AstKind::Param(param) => match ancestors.next() {
                Some(AstKind::Function(_) | AstKind::ArrowFunction(_)) => {
                    (DeclKind::Param, self.current_scope(), param.node_id)
                }
                // Parameters of function types and signatures declare nothing.
                _ => return,
            },
            AstKind::Function(function) => {
                let scope = if function.kind == FunctionKind::Declaration {
                    self.parent_scope_of_current()
                } else {
                    self.current_scope()
                };
                (DeclKind::Function, scope, function.node_id)
            }
            AstKind::Class(class) => {
                let scope = if class.is_declaration {
                    self.parent_scope_of_current()
                } else {
                    self.current_scope()
                };
                (DeclKind::Class, scope, class.node_id)
            }
            AstKind::ImportSpecifier(specifier) => {
                (DeclKind::Import, ScopeId::new(0), specifier.node_id)
            }
            AstKind::CatchClause(clause) => {
                (DeclKind::CatchParam, self.current_scope(), clause.node_id)
            }
            AstKind::TsInterfaceDeclaration(declaration) => {
                (DeclKind::Type, self.current_scope(), declaration.node_id)
            }
            AstKind::TsTypeAliasDeclaration(declaration) => {
                (DeclKind::Type, self.current_scope(), declaration.node_id)
            }
            AstKind::ForInStatement(statement) => match &statement.left {
                ForInLeft::Declaration { kind, .. } => {
                    let (decl_kind, scope) = self.variable_target(*kind);
                    (decl_kind, scope, statement.node_id)
                }
                ForInLeft::Target(_) => {
                    self.add_reference(ident.node_id, &ident.name, ReferenceFlags::WRITE);
                    return;
                }
            },
            // Identifiers inside a destructuring assignment target.
            AstKind::AssignmentExpression(_) => {
                self.add_reference(ident.node_id, &ident.name, ReferenceFlags::WRITE);
                return;
            }
            _ => return,
        };

        self.declare(ident, kind, scope, declaration);
    }

    fn variable_target(&self, kind: VariableKind) -> (DeclKind, ScopeId) {
        match kind {
            VariableKind::Var => (DeclKind::Var, self.nearest_var_scope()),
            VariableKind::Let => (DeclKind::Let, self.current_scope()),
            VariableKind::Const => (DeclKind::Const, self.current_scope()),
        }
    }

    fn declare(
        &mut self,
        ident: &BindingIdentifier,
        kind: DeclKind,
        scope: ScopeId,
        declaration: NodeId,
    ) {
        let scope_data = &self.scopes[scope.index()];
        let existing = if kind.is_value() {
            scope_data.binding(&ident.name)
        } else {
            scope_data.type_binding(&ident.name)
        };
        // Redeclarations (`var`, overloads, merged interfaces) share one symbol.
        if let Some(symbol) = existing {
            self.symbol_by_binding.insert(ident.node_id, symbol);
            return;
        }

        let symbol = SymbolId::new(self.symbols.len());
        self.symbols.push(Symbol {
            name: ident.name.clone(),
            kind,
            scope,
            binding: ident.node_id,
            declaration,
            span: ident.span,
            references: Vec::new(),
        });
        let scope_data = &mut self.scopes[scope.index()];
        if kind.is_value() {
            scope_data.bindings.insert(ident.name.clone(), symbol);
        } else {
            scope_data.type_bindings.insert(ident.name.clone(), symbol);
        }
        self.symbol_by_binding.insert(ident.node_id, symbol);
    }

    // ── References ─────────────────────────────────────────────────

    fn add_reference(&mut self, node_id: NodeId, name: &str, flags: ReferenceFlags) {
        let reference = ReferenceId::new(self.references.len());
        self.references.push(Reference {
            node_id,
            name: name.to_string(),
            scope: self.current_scope(),
            flags,
            symbol: None,
        });
        self.reference_by_node.insert(node_id, reference);
    }

    fn reference_flags(&self, node_id: NodeId) -> ReferenceFlags {
        let Some(parent) = self.node_stack.iter().rev().copied().find(|kind| {
            !matches!(
                kind,
                AstKind::ParenthesizedExpression(_)
                    | AstKind::TsNonNullExpression(_)
                    | AstKind::TsAsExpression(_)
                    | AstKind::TsSatisfiesExpression(_)
            )
        }) else {
            return ReferenceFlags::READ;
        };

        match parent {
            AstKind::AssignmentExpression(assignment) => match &assignment.target {
                AssignmentTarget::Identifier(target) if target.node_id == node_id => {
                    if assignment.operator == "=" {
                        ReferenceFlags::WRITE
                    } else {
                        ReferenceFlags::READ_WRITE
                    }
                }
                _ => ReferenceFlags::READ,
            },
            AstKind::UpdateExpression(update)
                if matches!(
                    update.argument.without_wrappers(),
                    Expression::Identifier(target) if target.node_id == node_id
                ) =>
            {
                ReferenceFlags::READ_WRITE
            }
            AstKind::ForInStatement(statement) => match &statement.left {
                ForInLeft::Target(AssignmentTarget::Identifier(target))
                    if target.node_id == node_id =>
                {
                    ReferenceFlags::WRITE
                }
                _ => ReferenceFlags::READ,
            },
            _ => ReferenceFlags::READ,
        }
    }

    fn resolve_references(&mut self) {
        for index in 0..self.references.len() {
            let (scope, name) = {
                let reference = &self.references[index];
                (reference.scope, reference.name.clone())
            };
            let mut current = Some(scope);
            while let Some(scope) = current {
                let data = &self.scopes[scope.index()];
                if let Some(symbol) = data.binding(&name) {
                    self.references[index].symbol = Some(symbol);
                    self.symbols[symbol.index()]
                        .references
                        .push(ReferenceId::new(index));
                    break;
                }
                current = data.parent;
            }
        }
    }
}

impl<'a> Visit<'a> for SemanticBuilder<'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        self.record_node(kind);

        match kind {
            AstKind::BindingIdentifier(ident) => self.on_binding(ident),
            AstKind::IdentifierReference(ident) => {
                let flags = self.reference_flags(ident.node_id);
                self.add_reference(ident.node_id, &ident.name, flags);
            }
            // `<Card />` reads `Card`; lowercase names are intrinsic elements.
            AstKind::JsxIdentifier(ident)
                if matches!(self.node_stack.last(), Some(AstKind::JsxOpeningElement(_)))
                    && !ident.name.starts_with(|c: char| c.is_ascii_lowercase()) =>
            {
                self.add_reference(ident.node_id, &ident.name, ReferenceFlags::READ);
            }
            AstKind::JsxMemberName(name) => {
                if let Some(root) = name.segments.first() {
                    self.add_reference(name.node_id, root, ReferenceFlags::READ);
                }
            }
            _ => {}
        }

        self.node_stack.push(kind);
        self.open_scope(kind);
    }

    fn leave_node(&mut self, kind: AstKind<'a>) {
        self.node_stack.pop();
        if self
            .scope_stack
            .last()
            .is_some_and(|(owner, _)| *owner == kind.node_id())
        {
            self.scope_stack.pop();
        }
    }
}
