//! Typed syntax tree for TypeScript/TSX sources.
//!
//! Every syntactic category is a closed sum type so consumers match
//! exhaustively instead of probing string tags. Every node struct carries a
//! [`NodeId`] (assigned in preorder during lowering) and a [`Span`].

mod js;
mod jsx;
mod kind;
mod ts;

use serde::Serialize;
pub use sweep_core::Span;

pub use js::*;
pub use jsx::*;
pub use kind::AstKind;
pub use ts::*;

/// Preorder index of a node inside one file's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Placeholder for CST shapes the lowering does not model. Keeps the span
/// and raw kind so a single odd node never aborts the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNode {
    pub node_id: NodeId,
    pub span: Span,
    pub cst_kind: String,
}

/// Root of one parsed file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub node_id: NodeId,
    pub span: Span,
    pub body: Vec<Statement>,
    /// Total number of node ids handed out for this tree.
    pub node_count: u32,
}
