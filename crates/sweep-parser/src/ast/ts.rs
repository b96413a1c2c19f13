//! TypeScript type annotations and signature members.

use super::{NodeId, Param, PropertyKey, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsKeyword {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    String,
    Number,
    BigInt,
    Symbol,
    Object,
}

impl TsKeyword {
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "any" => Self::Any,
            "unknown" => Self::Unknown,
            "never" => Self::Never,
            "void" => Self::Void,
            "undefined" => Self::Undefined,
            "null" => Self::Null,
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "number" => Self::Number,
            "bigint" => Self::BigInt,
            "symbol" => Self::Symbol,
            "object" => Self::Object,
            _ => return None,
        })
    }

    /// Value types that cannot be mutated through a method call.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::String
                | Self::Number
                | Self::BigInt
                | Self::Symbol
                | Self::Undefined
                | Self::Null
                | Self::Void
                | Self::Never
        )
    }
}

/// Dotted type name such as `Props` or `React.ReactNode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsTypeName {
    pub node_id: NodeId,
    pub span: Span,
    /// Segments in source order; never empty.
    pub segments: Vec<String>,
}

impl TsTypeName {
    /// Final segment (`ReactNode` for `React.ReactNode`).
    #[must_use]
    pub fn last(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Full dotted text.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.join(".")
    }

    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    Boolean(bool),
    String(String),
    Number(String),
    Null,
    Undefined,
    Template,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    Keyword(TsKeywordType),
    Reference(Box<TsTypeReference>),
    Array(Box<TsArrayType>),
    Tuple(TsTupleType),
    TypeLiteral(TsTypeLiteral),
    Union(TsUnionType),
    Intersection(TsIntersectionType),
    Function(Box<TsFunctionType>),
    Constructor(Box<TsFunctionType>),
    Parenthesized(Box<TsParenthesizedType>),
    /// `readonly T`, `keyof T`, `unique symbol`.
    Operator(Box<TsTypeOperator>),
    /// `T?` inside tuples.
    Optional(Box<TsOptionalType>),
    Literal(TsLiteralType),
    /// `typeof x`, indexed access, conditional, mapped, infer, predicates
    /// and other forms shape analysis treats as opaque.
    Opaque(TsOpaqueType),
}

impl TsType {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Keyword(node) => node.span,
            Self::Reference(node) => node.span,
            Self::Array(node) => node.span,
            Self::Tuple(node) => node.span,
            Self::TypeLiteral(node) => node.span,
            Self::Union(node) => node.span,
            Self::Intersection(node) => node.span,
            Self::Function(node) | Self::Constructor(node) => node.span,
            Self::Parenthesized(node) => node.span,
            Self::Operator(node) => node.span,
            Self::Optional(node) => node.span,
            Self::Literal(node) => node.span,
            Self::Opaque(node) => node.span,
        }
    }

    #[must_use]
    pub fn node_id(&self) -> NodeId {
        match self {
            Self::Keyword(node) => node.node_id,
            Self::Reference(node) => node.node_id,
            Self::Array(node) => node.node_id,
            Self::Tuple(node) => node.node_id,
            Self::TypeLiteral(node) => node.node_id,
            Self::Union(node) => node.node_id,
            Self::Intersection(node) => node.node_id,
            Self::Function(node) | Self::Constructor(node) => node.node_id,
            Self::Parenthesized(node) => node.node_id,
            Self::Operator(node) => node.node_id,
            Self::Optional(node) => node.node_id,
            Self::Literal(node) => node.node_id,
            Self::Opaque(node) => node.node_id,
        }
    }

    /// Strip parentheses and optional markers.
    #[must_use]
    pub fn without_parens(&self) -> &Self {
        let mut current = self;
        loop {
            current = match current {
                Self::Parenthesized(node) => &node.type_annotation,
                Self::Optional(node) => &node.type_annotation,
                _ => return current,
            };
        }
    }

    #[must_use]
    pub const fn as_keyword(&self) -> Option<TsKeyword> {
        match self {
            Self::Keyword(node) => Some(node.keyword),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsKeywordType {
    pub node_id: NodeId,
    pub span: Span,
    pub keyword: TsKeyword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeReference {
    pub node_id: NodeId,
    pub span: Span,
    pub name: TsTypeName,
    pub type_arguments: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsArrayType {
    pub node_id: NodeId,
    pub span: Span,
    pub element: TsType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsTupleType {
    pub node_id: NodeId,
    pub span: Span,
    pub elements: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeLiteral {
    pub node_id: NodeId,
    pub span: Span,
    pub members: Vec<TsSignature>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsUnionType {
    pub node_id: NodeId,
    pub span: Span,
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsIntersectionType {
    pub node_id: NodeId,
    pub span: Span,
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsFunctionType {
    pub node_id: NodeId,
    pub span: Span,
    pub params: Vec<Param>,
    pub return_type: Option<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsParenthesizedType {
    pub node_id: NodeId,
    pub span: Span,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsTypeOperatorKind {
    Readonly,
    Keyof,
    Unique,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeOperator {
    pub node_id: NodeId,
    pub span: Span,
    pub operator: TsTypeOperatorKind,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsOptionalType {
    pub node_id: NodeId,
    pub span: Span,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsLiteralType {
    pub node_id: NodeId,
    pub span: Span,
    pub literal: TsLiteral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsOpaqueType {
    pub node_id: NodeId,
    pub span: Span,
    pub cst_kind: String,
}

// ── Signature members ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TsSignature {
    Property(TsPropertySignature),
    Method(TsMethodSignature),
    Call(TsCallSignature),
    Construct(TsCallSignature),
    Index(TsIndexSignature),
}

impl TsSignature {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Property(node) => node.span,
            Self::Method(node) => node.span,
            Self::Call(node) | Self::Construct(node) => node.span,
            Self::Index(node) => node.span,
        }
    }

    /// Static key of a property or method signature.
    #[must_use]
    pub fn key_name(&self) -> Option<&str> {
        match self {
            Self::Property(node) => node.key.static_name(),
            Self::Method(node) => node.key.static_name(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsPropertySignature {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub optional: bool,
    pub readonly: bool,
    pub type_annotation: Option<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsMethodSignature {
    pub node_id: NodeId,
    pub span: Span,
    pub key: PropertyKey,
    pub optional: bool,
    pub params: Vec<Param>,
    pub return_type: Option<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsCallSignature {
    pub node_id: NodeId,
    pub span: Span,
    pub params: Vec<Param>,
    pub return_type: Option<TsType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TsIndexSignature {
    pub node_id: NodeId,
    pub span: Span,
    pub type_annotation: Option<TsType>,
}
