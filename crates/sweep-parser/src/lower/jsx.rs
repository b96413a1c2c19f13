use ast_grep_core::{Doc, Node};

use super::{Lowerer, first_named, is_kind, named_children, span_of};
use crate::ast::{
    Expression, JsxAttribute, JsxAttributeItem, JsxAttributeName, JsxAttributeValue, JsxChild,
    JsxElement, JsxElementName, JsxExpressionContainer, JsxFragment, JsxIdentifier,
    JsxMemberName, JsxNamespacedName, JsxOpeningElement, JsxSpreadAttribute, JsxText,
};

impl Lowerer {
    pub(super) fn lower_jsx<D: Doc>(&mut self, node: &Node<'_, D>) -> Expression {
        if is_fragment(node) {
            Expression::JsxFragment(Box::new(self.lower_jsx_fragment(node)))
        } else {
            Expression::JsxElement(Box::new(self.lower_jsx_element(node)))
        }
    }

    fn lower_jsx_element<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxElement {
        let node_id = self.alloc();
        let self_closing = is_kind(node, "jsx_self_closing_element");

        let opening_node = if self_closing {
            Some(node.clone())
        } else {
            opening_tag(node)
        };
        let opening = match opening_node {
            Some(opening_node) => self.lower_opening(&opening_node),
            None => self.lower_opening(node),
        };
        let children = if self_closing {
            Vec::new()
        } else {
            self.lower_jsx_children(node)
        };

        JsxElement {
            node_id,
            span: span_of(node),
            opening,
            children,
            self_closing,
        }
    }

    fn lower_jsx_fragment<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxFragment {
        let node_id = self.alloc();
        let children = self.lower_jsx_children(node);
        JsxFragment {
            node_id,
            span: span_of(node),
            children,
        }
    }

    fn lower_opening<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxOpeningElement {
        let node_id = self.alloc();
        let name = match node.field("name") {
            Some(name) => self.lower_element_name(&name),
            None => JsxElementName::Identifier(JsxIdentifier {
                node_id: self.alloc(),
                span: span_of(node),
                name: String::new(),
            }),
        };

        let mut attributes = Vec::new();
        for child in named_children(node) {
            match child.kind().as_ref() {
                "jsx_attribute" => {
                    attributes.push(JsxAttributeItem::Attribute(self.lower_attribute(&child)));
                }
                "jsx_expression" => {
                    let spread_id = self.alloc();
                    let argument = match first_named(&child) {
                        Some(inner) if is_kind(&inner, "spread_element") => {
                            match first_named(&inner) {
                                Some(argument) => self.lower_expression(&argument),
                                None => Expression::Unknown(self.unknown(&inner)),
                            }
                        }
                        Some(inner) => self.lower_expression(&inner),
                        None => Expression::Unknown(self.unknown(&child)),
                    };
                    attributes.push(JsxAttributeItem::Spread(JsxSpreadAttribute {
                        node_id: spread_id,
                        span: span_of(&child),
                        argument,
                    }));
                }
                _ => {}
            }
        }

        JsxOpeningElement {
            node_id,
            span: span_of(node),
            name,
            attributes,
        }
    }

    fn lower_element_name<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxElementName {
        match node.kind().as_ref() {
            "jsx_namespace_name" => JsxElementName::Namespaced(self.lower_namespaced_name(node)),
            "member_expression" | "nested_identifier" => {
                let segments = node
                    .text()
                    .split('.')
                    .map(|segment| segment.trim().to_string())
                    .collect();
                JsxElementName::Member(JsxMemberName {
                    node_id: self.alloc(),
                    span: span_of(node),
                    segments,
                })
            }
            _ => JsxElementName::Identifier(self.lower_jsx_identifier(node)),
        }
    }

    fn lower_jsx_identifier<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxIdentifier {
        JsxIdentifier {
            node_id: self.alloc(),
            span: span_of(node),
            name: node.text().to_string(),
        }
    }

    fn lower_namespaced_name<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxNamespacedName {
        let text = node.text();
        let (namespace, name) = text.split_once(':').unwrap_or(("", text.as_ref()));
        JsxNamespacedName {
            node_id: self.alloc(),
            span: span_of(node),
            namespace: namespace.trim().to_string(),
            name: name.trim().to_string(),
        }
    }

    fn lower_attribute<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxAttribute {
        let node_id = self.alloc();
        let parts = named_children(node);

        let name = match parts.first() {
            Some(name) if is_kind(name, "jsx_namespace_name") => {
                JsxAttributeName::Namespaced(self.lower_namespaced_name(name))
            }
            Some(name) => JsxAttributeName::Identifier(self.lower_jsx_identifier(name)),
            None => JsxAttributeName::Identifier(JsxIdentifier {
                node_id: self.alloc(),
                span: span_of(node),
                name: String::new(),
            }),
        };

        let value = parts.get(1).map(|value| match value.kind().as_ref() {
            "string" => JsxAttributeValue::String(self.lower_string(value)),
            "jsx_expression" => {
                JsxAttributeValue::ExpressionContainer(self.lower_expression_container(value))
            }
            _ if is_fragment(value) => {
                JsxAttributeValue::Fragment(Box::new(self.lower_jsx_fragment(value)))
            }
            "jsx_element" | "jsx_self_closing_element" => {
                JsxAttributeValue::Element(Box::new(self.lower_jsx_element(value)))
            }
            _ => JsxAttributeValue::ExpressionContainer(JsxExpressionContainer {
                node_id: self.alloc(),
                span: span_of(value),
                expression: Some(self.lower_expression(value)),
            }),
        });

        JsxAttribute {
            node_id,
            span: span_of(node),
            name,
            value,
        }
    }

    fn lower_expression_container<D: Doc>(&mut self, node: &Node<'_, D>) -> JsxExpressionContainer {
        let node_id = self.alloc();
        let expression = first_named(node).map(|inner| self.lower_expression(&inner));
        JsxExpressionContainer {
            node_id,
            span: span_of(node),
            expression,
        }
    }

    /// Children between the opening and closing tags. Whitespace-only text
    /// is dropped.
    fn lower_jsx_children<D: Doc>(&mut self, node: &Node<'_, D>) -> Vec<JsxChild> {
        let mut children = Vec::new();
        for child in named_children(node) {
            match child.kind().as_ref() {
                "jsx_opening_element" | "jsx_closing_element" => {}
                "jsx_text" | "html_character_reference" => {
                    let text = child.text();
                    if text.trim().is_empty() {
                        continue;
                    }
                    children.push(JsxChild::Text(JsxText {
                        node_id: self.alloc(),
                        span: span_of(&child),
                        value: text.to_string(),
                    }));
                }
                "jsx_expression" => {
                    children.push(JsxChild::ExpressionContainer(
                        self.lower_expression_container(&child),
                    ));
                }
                _ if is_fragment(&child) => {
                    children.push(JsxChild::Fragment(Box::new(self.lower_jsx_fragment(&child))));
                }
                "jsx_element" | "jsx_self_closing_element" => {
                    children.push(JsxChild::Element(Box::new(self.lower_jsx_element(&child))));
                }
                _ => {}
            }
        }
        children
    }
}

fn opening_tag<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.field("open_tag")
        .or_else(|| node.children().find(|child| is_kind(child, "jsx_opening_element")))
}

/// `<>…</>`: either a dedicated node or an element whose opening tag has no name.
fn is_fragment<D: Doc>(node: &Node<'_, D>) -> bool {
    match node.kind().as_ref() {
        "jsx_fragment" => true,
        "jsx_element" => opening_tag(node).is_some_and(|opening| opening.field("name").is_none()),
        _ => false,
    }
}
