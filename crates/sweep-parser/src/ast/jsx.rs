//! JSX elements, attributes and children.

use super::{Expression, NodeId, Span, StringLiteral};

#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    pub node_id: NodeId,
    pub span: Span,
    pub opening: JsxOpeningElement,
    pub children: Vec<JsxChild>,
    /// `<Name />` as opposed to `<Name>…</Name>`.
    pub self_closing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxFragment {
    pub node_id: NodeId,
    pub span: Span,
    pub children: Vec<JsxChild>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxOpeningElement {
    pub node_id: NodeId,
    pub span: Span,
    pub name: JsxElementName,
    pub attributes: Vec<JsxAttributeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxIdentifier {
    pub node_id: NodeId,
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxNamespacedName {
    pub node_id: NodeId,
    pub span: Span,
    pub namespace: String,
    pub name: String,
}

/// `Card.Header` / `ui.card.Header`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxMemberName {
    pub node_id: NodeId,
    pub span: Span,
    /// Every segment in source order (`["Card", "Header"]`).
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxElementName {
    Identifier(JsxIdentifier),
    Namespaced(JsxNamespacedName),
    Member(JsxMemberName),
}

impl JsxElementName {
    /// Source-like text of the name (`div`, `svg:path`, `Card.Header`).
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::Namespaced(name) => format!("{}:{}", name.namespace, name.name),
            Self::Member(member) => member.segments.join("."),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(node) => node.span,
            Self::Namespaced(node) => node.span,
            Self::Member(node) => node.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttributeName {
    Identifier(JsxIdentifier),
    Namespaced(JsxNamespacedName),
}

impl JsxAttributeName {
    /// Attribute name, namespaced names rendered as `ns:name`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::Namespaced(name) => format!("{}:{}", name.namespace, name.name),
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(node) => node.span,
            Self::Namespaced(node) => node.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeItem {
    Attribute(JsxAttribute),
    Spread(JsxSpreadAttribute),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    pub node_id: NodeId,
    pub span: Span,
    pub name: JsxAttributeName,
    pub value: Option<JsxAttributeValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxAttributeValue {
    String(StringLiteral),
    ExpressionContainer(JsxExpressionContainer),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxSpreadAttribute {
    pub node_id: NodeId,
    pub span: Span,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxExpressionContainer {
    pub node_id: NodeId,
    pub span: Span,
    /// `None` for `{}` or comment-only containers.
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxText {
    pub node_id: NodeId,
    pub span: Span,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JsxChild {
    Text(JsxText),
    Element(Box<JsxElement>),
    Fragment(Box<JsxFragment>),
    ExpressionContainer(JsxExpressionContainer),
}
