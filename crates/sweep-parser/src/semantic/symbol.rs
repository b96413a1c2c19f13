use crate::ast::{NodeId, Span};

use super::ScopeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// How a binding was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Param,
    Var,
    Let,
    Const,
    Function,
    Class,
    Import,
    CatchParam,
    /// Interfaces and type aliases; never targets of value references.
    Type,
}

impl DeclKind {
    #[must_use]
    pub const fn is_value(self) -> bool {
        !matches!(self, Self::Type)
    }
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: DeclKind,
    pub scope: ScopeId,
    /// The `BindingIdentifier` that names the symbol.
    pub binding: NodeId,
    /// The construct that declares it: a declarator, parameter, function,
    /// class, import specifier, catch clause, loop or type declaration.
    pub declaration: NodeId,
    pub span: Span,
    pub(crate) references: Vec<ReferenceId>,
}

impl Symbol {
    pub fn references(&self) -> impl Iterator<Item = ReferenceId> + '_ {
        self.references.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReferenceId(u32);

impl ReferenceId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReferenceFlags {
    pub read: bool,
    pub write: bool,
}

impl ReferenceFlags {
    pub const READ: Self = Self {
        read: true,
        write: false,
    };
    pub const WRITE: Self = Self {
        read: false,
        write: true,
    };
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };
}

/// One use of a name: an identifier expression, an assignment target, or a
/// JSX element name.
#[derive(Debug, Clone)]
pub struct Reference {
    pub node_id: NodeId,
    pub name: String,
    pub scope: ScopeId,
    pub flags: ReferenceFlags,
    /// `None` for globals and names this file never declares.
    pub symbol: Option<SymbolId>,
}

impl Reference {
    #[must_use]
    pub const fn is_write(&self) -> bool {
        self.flags.write
    }

    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.flags.read
    }
}
