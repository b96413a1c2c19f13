use ast_grep_core::{Doc, Node};

use super::{Lowerer, first_named, named_children, span_of};
use crate::ast::{
    ArrayPattern, AssignmentPattern, BindingProperty, Expression, ObjectPattern, Pattern,
    PropertyKey, RestElement,
};

impl Lowerer {
    /// Binding and destructuring-assignment patterns.
    ///
    /// Object and array *expressions* on the left of `=` are accepted too;
    /// tree-sitter produces those for `({ a } = value)`.
    pub(super) fn lower_pattern<D: Doc>(&mut self, node: &Node<'_, D>) -> Pattern {
        match node.kind().as_ref() {
            "identifier" | "shorthand_property_identifier_pattern" | "undefined" => {
                Pattern::Identifier(self.lower_binding_identifier(node))
            }
            "object_pattern" | "object" => Pattern::Object(Box::new(self.lower_object_pattern(node))),
            "array_pattern" | "array" => Pattern::Array(Box::new(self.lower_array_pattern(node))),
            "assignment_pattern" | "object_assignment_pattern" => {
                let node_id = self.alloc();
                let left = match node.field("left") {
                    Some(left) => self.lower_pattern(&left),
                    None => Pattern::Expression(Box::new(Expression::Unknown(self.unknown(node)))),
                };
                let right = match node.field("right") {
                    Some(right) => self.lower_expression(&right),
                    None => Expression::Unknown(self.unknown(node)),
                };
                Pattern::Assignment(Box::new(AssignmentPattern {
                    node_id,
                    span: span_of(node),
                    left,
                    right,
                }))
            }
            "rest_pattern" | "spread_element" => Pattern::Rest(Box::new(self.lower_rest(node))),
            "parenthesized_expression" => match first_named(node) {
                Some(inner) => self.lower_pattern(&inner),
                None => Pattern::Expression(Box::new(Expression::Unknown(self.unknown(node)))),
            },
            _ => Pattern::Expression(Box::new(self.lower_expression(node))),
        }
    }

    fn lower_rest<D: Doc>(&mut self, node: &Node<'_, D>) -> RestElement {
        let node_id = self.alloc();
        let argument = match first_named(node) {
            Some(inner) => self.lower_pattern(&inner),
            None => Pattern::Expression(Box::new(Expression::Unknown(self.unknown(node)))),
        };
        RestElement {
            node_id,
            span: span_of(node),
            argument,
        }
    }

    fn lower_object_pattern<D: Doc>(&mut self, node: &Node<'_, D>) -> ObjectPattern {
        let node_id = self.alloc();
        let mut properties = Vec::new();
        let mut rest = None;

        for member in named_children(node) {
            match member.kind().as_ref() {
                "pair_pattern" | "pair" => {
                    let property_id = self.alloc();
                    let key = match member.field("key") {
                        Some(key) => self.lower_property_key(&key),
                        None => PropertyKey::Computed(Box::new(Expression::Unknown(
                            self.unknown(&member),
                        ))),
                    };
                    let value = match member.field("value") {
                        Some(value) => self.lower_pattern(&value),
                        None => {
                            Pattern::Expression(Box::new(Expression::Unknown(self.unknown(&member))))
                        }
                    };
                    properties.push(BindingProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value,
                        shorthand: false,
                    });
                }
                "shorthand_property_identifier_pattern" | "shorthand_property_identifier" => {
                    let property_id = self.alloc();
                    let key = PropertyKey::Identifier(self.lower_identifier_name(&member));
                    let value = Pattern::Identifier(self.lower_binding_identifier(&member));
                    properties.push(BindingProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value,
                        shorthand: true,
                    });
                }
                // `{ a = 1 }`: shorthand with a default.
                "object_assignment_pattern" => {
                    let property_id = self.alloc();
                    let left = member.field("left");
                    let key = match &left {
                        Some(left) => PropertyKey::Identifier(self.lower_identifier_name(left)),
                        None => PropertyKey::Computed(Box::new(Expression::Unknown(
                            self.unknown(&member),
                        ))),
                    };
                    let value = self.lower_pattern(&member);
                    properties.push(BindingProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value,
                        shorthand: true,
                    });
                }
                "rest_pattern" | "spread_element" => rest = Some(self.lower_rest(&member)),
                _ => {}
            }
        }

        ObjectPattern {
            node_id,
            span: span_of(node),
            properties,
            rest,
        }
    }

    fn lower_array_pattern<D: Doc>(&mut self, node: &Node<'_, D>) -> ArrayPattern {
        let node_id = self.alloc();
        let mut elements = Vec::new();
        let mut rest = None;
        // Holes show up as consecutive commas.
        let mut expecting_element = true;

        for child in node.children() {
            let kind = child.kind();
            match kind.as_ref() {
                "[" | "]" | "comment" => {}
                "," => {
                    if expecting_element {
                        elements.push(None);
                    }
                    expecting_element = true;
                }
                "rest_pattern" | "spread_element" => {
                    rest = Some(self.lower_rest(&child));
                    expecting_element = false;
                }
                _ if child.is_named() => {
                    elements.push(Some(self.lower_pattern(&child)));
                    expecting_element = false;
                }
                _ => {}
            }
        }

        ArrayPattern {
            node_id,
            span: span_of(node),
            elements,
            rest,
        }
    }
}
