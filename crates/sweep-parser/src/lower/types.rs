//! TypeScript type annotations.

use ast_grep_core::{Doc, Node};

use super::{Lowerer, first_named, has_token, is_kind, named_children, span_of, unquote};
use crate::ast::{
    Expression, PropertyKey, TsArrayType, TsCallSignature, TsFunctionType, TsIndexSignature,
    TsIntersectionType, TsKeyword, TsKeywordType, TsLiteral, TsLiteralType, TsMethodSignature,
    TsOptionalType, TsParenthesizedType, TsPropertySignature, TsSignature, TsTupleType, TsType,
    TsTypeLiteral, TsTypeName, TsTypeOperator, TsTypeOperatorKind, TsTypeReference, TsUnionType,
};

impl Lowerer {
    pub(super) fn lower_type<D: Doc>(&mut self, node: &Node<'_, D>) -> TsType {
        match node.kind().as_ref() {
            "type_annotation" | "opting_type_annotation" | "omitting_type_annotation" => {
                match first_named(node) {
                    Some(inner) => self.lower_type(&inner),
                    None => self.opaque_type(node),
                }
            }
            "predefined_type" => match TsKeyword::from_text(node.text().trim()) {
                Some(keyword) => self.keyword_type(node, keyword),
                None => self.opaque_type(node),
            },
            "type_predicate" | "type_predicate_annotation" | "asserts_annotation" => {
                self.keyword_type(node, TsKeyword::Boolean)
            }
            "type_identifier" | "nested_type_identifier" | "identifier" => {
                let node_id = self.alloc();
                let name = self.lower_type_name(node);
                TsType::Reference(Box::new(TsTypeReference {
                    node_id,
                    span: span_of(node),
                    name,
                    type_arguments: Vec::new(),
                }))
            }
            "generic_type" => {
                let node_id = self.alloc();
                let name = match node.field("name").or_else(|| first_named(node)) {
                    Some(name) => self.lower_type_name(&name),
                    None => self.lower_type_name(node),
                };
                let type_arguments = node
                    .field("type_arguments")
                    .map(|arguments| {
                        named_children(&arguments)
                            .iter()
                            .map(|argument| self.lower_type(argument))
                            .collect()
                    })
                    .unwrap_or_default();
                TsType::Reference(Box::new(TsTypeReference {
                    node_id,
                    span: span_of(node),
                    name,
                    type_arguments,
                }))
            }
            "array_type" => {
                let node_id = self.alloc();
                let element = match first_named(node) {
                    Some(element) => self.lower_type(&element),
                    None => self.opaque_type(node),
                };
                TsType::Array(Box::new(TsArrayType {
                    node_id,
                    span: span_of(node),
                    element,
                }))
            }
            "tuple_type" => {
                let node_id = self.alloc();
                let elements = named_children(node)
                    .iter()
                    .map(|element| self.lower_tuple_element(element))
                    .collect();
                TsType::Tuple(TsTupleType {
                    node_id,
                    span: span_of(node),
                    elements,
                })
            }
            "object_type" => {
                let node_id = self.alloc();
                let members = self.lower_signatures(node);
                TsType::TypeLiteral(TsTypeLiteral {
                    node_id,
                    span: span_of(node),
                    members,
                })
            }
            "union_type" => {
                let node_id = self.alloc();
                let mut parts = Vec::new();
                flatten_binary_type(node, "union_type", &mut parts);
                let types = parts.iter().map(|part| self.lower_type(part)).collect();
                TsType::Union(TsUnionType {
                    node_id,
                    span: span_of(node),
                    types,
                })
            }
            "intersection_type" => {
                let node_id = self.alloc();
                let mut parts = Vec::new();
                flatten_binary_type(node, "intersection_type", &mut parts);
                let types = parts.iter().map(|part| self.lower_type(part)).collect();
                TsType::Intersection(TsIntersectionType {
                    node_id,
                    span: span_of(node),
                    types,
                })
            }
            "function_type" => TsType::Function(Box::new(self.lower_function_type(node))),
            "constructor_type" => TsType::Constructor(Box::new(self.lower_function_type(node))),
            "parenthesized_type" => {
                let node_id = self.alloc();
                let type_annotation = match first_named(node) {
                    Some(inner) => self.lower_type(&inner),
                    None => self.opaque_type(node),
                };
                TsType::Parenthesized(Box::new(TsParenthesizedType {
                    node_id,
                    span: span_of(node),
                    type_annotation,
                }))
            }
            "readonly_type" => self.lower_type_operator(node, TsTypeOperatorKind::Readonly),
            "index_type_query" => self.lower_type_operator(node, TsTypeOperatorKind::Keyof),
            "optional_type" | "rest_type" => {
                let node_id = self.alloc();
                let type_annotation = match first_named(node) {
                    Some(inner) => self.lower_type(&inner),
                    None => self.opaque_type(node),
                };
                TsType::Optional(Box::new(TsOptionalType {
                    node_id,
                    span: span_of(node),
                    type_annotation,
                }))
            }
            "literal_type" => self.lower_literal_type(node),
            "template_literal_type" => TsType::Literal(TsLiteralType {
                node_id: self.alloc(),
                span: span_of(node),
                literal: TsLiteral::Template,
            }),
            "undefined" => self.keyword_type(node, TsKeyword::Undefined),
            "null" => self.keyword_type(node, TsKeyword::Null),
            _ => self.opaque_type(node),
        }
    }

    fn keyword_type<D: Doc>(&mut self, node: &Node<'_, D>, keyword: TsKeyword) -> TsType {
        TsType::Keyword(TsKeywordType {
            node_id: self.alloc(),
            span: span_of(node),
            keyword,
        })
    }

    fn lower_type_name<D: Doc>(&mut self, node: &Node<'_, D>) -> TsTypeName {
        let segments = node
            .text()
            .split('.')
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();
        TsTypeName {
            node_id: self.alloc(),
            span: span_of(node),
            segments,
        }
    }

    fn lower_tuple_element<D: Doc>(&mut self, node: &Node<'_, D>) -> TsType {
        match node.kind().as_ref() {
            // Named members: `[first: string, second?: number]`.
            "tuple_parameter" | "optional_tuple_parameter" | "required_parameter"
            | "optional_parameter" => match node.field("type") {
                Some(ty) => self.lower_type(&ty),
                None => self.opaque_type(node),
            },
            _ => self.lower_type(node),
        }
    }

    fn lower_function_type<D: Doc>(&mut self, node: &Node<'_, D>) -> TsFunctionType {
        let node_id = self.alloc();
        let params = node
            .field("parameters")
            .map(|parameters| self.lower_params(&parameters))
            .unwrap_or_default();
        let return_type = node
            .field("return_type")
            .or_else(|| node.field("type"))
            .map(|return_type| self.lower_type(&return_type));
        TsFunctionType {
            node_id,
            span: span_of(node),
            params,
            return_type,
        }
    }

    fn lower_type_operator<D: Doc>(
        &mut self,
        node: &Node<'_, D>,
        operator: TsTypeOperatorKind,
    ) -> TsType {
        let node_id = self.alloc();
        let type_annotation = match first_named(node) {
            Some(inner) => self.lower_type(&inner),
            None => self.opaque_type(node),
        };
        TsType::Operator(Box::new(TsTypeOperator {
            node_id,
            span: span_of(node),
            operator,
            type_annotation,
        }))
    }

    fn lower_literal_type<D: Doc>(&mut self, node: &Node<'_, D>) -> TsType {
        let Some(inner) = first_named(node) else {
            return self.opaque_type(node);
        };
        let literal = match inner.kind().as_ref() {
            "undefined" => return self.keyword_type(node, TsKeyword::Undefined),
            "null" => return self.keyword_type(node, TsKeyword::Null),
            "true" => TsLiteral::Boolean(true),
            "false" => TsLiteral::Boolean(false),
            "string" => TsLiteral::String(unquote(&inner.text())),
            "number" | "unary_expression" => TsLiteral::Number(inner.text().to_string()),
            "template_string" => TsLiteral::Template,
            _ => return self.opaque_type(node),
        };
        TsType::Literal(TsLiteralType {
            node_id: self.alloc(),
            span: span_of(node),
            literal,
        })
    }

    // ── Signature members ──────────────────────────────────────────

    /// Members of an `interface_body` or `object_type`.
    pub(super) fn lower_signatures<D: Doc>(&mut self, node: &Node<'_, D>) -> Vec<TsSignature> {
        named_children(node)
            .iter()
            .filter_map(|member| self.lower_signature(member))
            .collect()
    }

    fn lower_signature<D: Doc>(&mut self, node: &Node<'_, D>) -> Option<TsSignature> {
        let signature = match node.kind().as_ref() {
            "property_signature" => {
                let node_id = self.alloc();
                let key = self.lower_signature_key(node);
                let type_annotation = node.field("type").map(|ty| self.lower_type(&ty));
                TsSignature::Property(TsPropertySignature {
                    node_id,
                    span: span_of(node),
                    key,
                    optional: has_token(node, "?"),
                    readonly: has_token(node, "readonly"),
                    type_annotation,
                })
            }
            "method_signature" => {
                let node_id = self.alloc();
                let key = self.lower_signature_key(node);
                let params = node
                    .field("parameters")
                    .map(|parameters| self.lower_params(&parameters))
                    .unwrap_or_default();
                let return_type = node
                    .field("return_type")
                    .map(|return_type| self.lower_type(&return_type));
                TsSignature::Method(TsMethodSignature {
                    node_id,
                    span: span_of(node),
                    key,
                    optional: has_token(node, "?"),
                    params,
                    return_type,
                })
            }
            "call_signature" | "construct_signature" => {
                let node_id = self.alloc();
                let params = node
                    .field("parameters")
                    .map(|parameters| self.lower_params(&parameters))
                    .unwrap_or_default();
                let return_type = node
                    .field("return_type")
                    .or_else(|| node.field("type"))
                    .map(|return_type| self.lower_type(&return_type));
                let signature = TsCallSignature {
                    node_id,
                    span: span_of(node),
                    params,
                    return_type,
                };
                if is_kind(node, "construct_signature") {
                    TsSignature::Construct(signature)
                } else {
                    TsSignature::Call(signature)
                }
            }
            "index_signature" => {
                let node_id = self.alloc();
                let type_annotation = node.field("type").map(|ty| self.lower_type(&ty));
                TsSignature::Index(TsIndexSignature {
                    node_id,
                    span: span_of(node),
                    type_annotation,
                })
            }
            _ => return None,
        };
        Some(signature)
    }

    fn lower_signature_key<D: Doc>(&mut self, node: &Node<'_, D>) -> PropertyKey {
        match node.field("name") {
            Some(name) => self.lower_property_key(&name),
            None => PropertyKey::Computed(Box::new(Expression::Unknown(self.unknown(node)))),
        }
    }
}

/// Collect the operands of a (possibly left-nested) union or intersection.
fn flatten_binary_type<'r, D: Doc>(node: &Node<'r, D>, kind: &str, out: &mut Vec<Node<'r, D>>) {
    for child in named_children(node) {
        if is_kind(&child, kind) {
            flatten_binary_type(&child, kind, out);
        } else {
            out.push(child);
        }
    }
}
