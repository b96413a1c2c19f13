//! Lowering from the tree-sitter CST (via ast-grep) into the typed AST.
//!
//! Lowering is total: any CST shape the typed tree does not model becomes an
//! `Unknown`/`Other`/`Opaque` node carrying its span, so a file never fails
//! to lower. Ids are handed out before children are visited, which makes
//! them a preorder numbering of the tree.

mod expressions;
mod jsx;
mod patterns;
mod statements;
mod types;


use ast_grep_core::{Doc, Node};

use crate::ast::{NodeId, Program, Span, UnknownNode};

pub(crate) struct Lowerer {
    next_id: u32,
}

impl Lowerer {
    pub(crate) const fn new() -> Self {
        Self { next_id: 0 }
    }

    pub(crate) fn lower_program<D: Doc>(mut self, root: &Node<'_, D>) -> Program {
        let node_id = self.alloc();
        let body = named_children(root)
            .iter()
            .map(|child| self.lower_statement(child))
            .collect();

        Program {
            node_id,
            span: span_of(root),
            body,
            node_count: self.next_id,
        }
    }

    fn alloc(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn unknown<D: Doc>(&mut self, node: &Node<'_, D>) -> UnknownNode {
        UnknownNode {
            node_id: self.alloc(),
            span: span_of(node),
            cst_kind: node.kind().to_string(),
        }
    }
}

// ── CST helpers ────────────────────────────────────────────────────

pub(crate) fn span_of<D: Doc>(node: &Node<'_, D>) -> Span {
    Span::from_range(node.range())
}

/// Named children, skipping comments.
pub(crate) fn named_children<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|child| child.is_named() && child.kind().as_ref() != "comment")
        .collect()
}

pub(crate) fn first_named<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children()
        .find(|child| child.is_named() && child.kind().as_ref() != "comment")
}

/// Whether a direct child (named or anonymous) has the given kind.
pub(crate) fn has_token<D: Doc>(node: &Node<'_, D>, token: &str) -> bool {
    node.children().any(|child| child.kind().as_ref() == token)
}

/// Whether a direct child with the given kind appears before `limit`.
pub(crate) fn has_token_before<D: Doc>(node: &Node<'_, D>, token: &str, limit: usize) -> bool {
    node.children()
        .any(|child| child.kind().as_ref() == token && child.range().start < limit)
}

pub(crate) fn is_kind<D: Doc>(node: &Node<'_, D>, kind: &str) -> bool {
    node.kind().as_ref() == kind
}

pub(crate) fn same_node<D: Doc>(left: &Node<'_, D>, right: &Node<'_, D>) -> bool {
    left.range() == right.range() && left.kind() == right.kind()
}

/// Strip matching quotes from a string literal's source text.
pub(crate) fn unquote(text: &str) -> String {
    let bytes = text.as_bytes();
    let quoted = bytes.len() >= 2
        && matches!(bytes[0], b'"' | b'\'' | b'`')
        && bytes[0] == bytes[bytes.len() - 1];
    if quoted {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}
