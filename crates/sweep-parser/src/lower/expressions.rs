//! Expressions, object members and property keys.

use ast_grep_core::{Doc, Node};

use super::{Lowerer, first_named, has_token, is_kind, named_children, span_of, unquote};
use crate::ast::{
    ArrayExpression, AssignmentExpression, AssignmentTarget, AwaitExpression, BinaryExpression,
    BooleanLiteral, CallExpression, ConditionalExpression, Expression, FunctionKind,
    IdentifierName, IdentifierReference, LogicalExpression, LogicalOperator, MemberExpression,
    MemberProperty, NewExpression, NullLiteral, NumericLiteral, ObjectExpression, ObjectMember,
    ObjectProperty, OtherLiteral, ParenthesizedExpression, PropertyKey, SequenceExpression,
    SpreadElement, StringLiteral, TemplateLiteral, ThisExpression, TsAsExpression,
    TsNonNullExpression, TsOpaqueType, TsSatisfiesExpression, TsType, UnaryExpression, UpdateExpression,
    YieldExpression,
};

impl Lowerer {
    pub(super) fn lower_expression<D: Doc>(&mut self, node: &Node<'_, D>) -> Expression {
        match node.kind().as_ref() {
            "identifier" | "undefined" | "shorthand_property_identifier" => {
                Expression::Identifier(self.lower_identifier_reference(node))
            }
            "this" => Expression::This(ThisExpression {
                node_id: self.alloc(),
                span: span_of(node),
            }),
            "string" => Expression::String(self.lower_string(node)),
            "template_string" => {
                let node_id = self.alloc();
                let expressions = named_children(node)
                    .iter()
                    .filter(|child| is_kind(child, "template_substitution"))
                    .filter_map(first_named)
                    .map(|inner| self.lower_expression(&inner))
                    .collect();
                Expression::Template(Box::new(TemplateLiteral {
                    node_id,
                    span: span_of(node),
                    expressions,
                }))
            }
            "number" => Expression::Number(NumericLiteral {
                node_id: self.alloc(),
                span: span_of(node),
                raw: node.text().to_string(),
            }),
            "true" | "false" => Expression::Boolean(BooleanLiteral {
                node_id: self.alloc(),
                span: span_of(node),
                value: is_kind(node, "true"),
            }),
            "null" => Expression::Null(NullLiteral {
                node_id: self.alloc(),
                span: span_of(node),
            }),
            "regex" | "bigint" => Expression::OtherLiteral(OtherLiteral {
                node_id: self.alloc(),
                span: span_of(node),
                raw: node.text().to_string(),
            }),
            "array" => {
                let node_id = self.alloc();
                let elements = named_children(node)
                    .iter()
                    .map(|child| self.lower_expression(child))
                    .collect();
                Expression::Array(ArrayExpression {
                    node_id,
                    span: span_of(node),
                    elements,
                })
            }
            "object" => Expression::Object(self.lower_object(node)),
            "function_expression" | "function" | "generator_function" => Expression::Function(
                Box::new(self.lower_function(node, FunctionKind::Expression)),
            ),
            "arrow_function" => Expression::Arrow(Box::new(self.lower_arrow(node))),
            "class" => Expression::Class(Box::new(self.lower_class(node, false))),
            "call_expression" => self.lower_call(node),
            "new_expression" => {
                let node_id = self.alloc();
                let callee = self.lower_required_expression(node.field("constructor").as_ref(), node);
                let arguments = node
                    .field("arguments")
                    .map(|arguments| self.lower_arguments(&arguments))
                    .unwrap_or_default();
                Expression::New(Box::new(NewExpression {
                    node_id,
                    span: span_of(node),
                    callee,
                    arguments,
                }))
            }
            "member_expression" | "subscript_expression" => {
                Expression::Member(Box::new(self.lower_member(node)))
            }
            "unary_expression" => {
                let node_id = self.alloc();
                let operator = node
                    .field("operator")
                    .map(|operator| operator.text().to_string())
                    .unwrap_or_default();
                let argument = self.lower_required_expression(node.field("argument").as_ref(), node);
                Expression::Unary(Box::new(UnaryExpression {
                    node_id,
                    span: span_of(node),
                    operator,
                    argument,
                }))
            }
            "update_expression" => {
                let node_id = self.alloc();
                let operator_node = node.field("operator");
                let argument_node = node.field("argument");
                let prefix = match (&operator_node, &argument_node) {
                    (Some(operator), Some(argument)) => {
                        operator.range().start < argument.range().start
                    }
                    _ => false,
                };
                let operator = operator_node
                    .map(|operator| operator.text().to_string())
                    .unwrap_or_default();
                let argument = self.lower_required_expression(argument_node.as_ref(), node);
                Expression::Update(Box::new(UpdateExpression {
                    node_id,
                    span: span_of(node),
                    operator,
                    prefix,
                    argument,
                }))
            }
            "binary_expression" => self.lower_binary(node),
            "ternary_expression" => {
                let node_id = self.alloc();
                let test = self.lower_required_expression(node.field("condition").as_ref(), node);
                let consequent =
                    self.lower_required_expression(node.field("consequence").as_ref(), node);
                let alternate =
                    self.lower_required_expression(node.field("alternative").as_ref(), node);
                Expression::Conditional(Box::new(ConditionalExpression {
                    node_id,
                    span: span_of(node),
                    test,
                    consequent,
                    alternate,
                }))
            }
            "assignment_expression" | "augmented_assignment_expression" => {
                let node_id = self.alloc();
                let operator = node
                    .field("operator")
                    .map_or_else(|| "=".to_string(), |operator| operator.text().to_string());
                let target = match node.field("left") {
                    Some(left) => self.lower_assignment_target(&left),
                    None => AssignmentTarget::Other(Expression::Unknown(self.unknown(node))),
                };
                let right = self.lower_required_expression(node.field("right").as_ref(), node);
                Expression::Assignment(Box::new(AssignmentExpression {
                    node_id,
                    span: span_of(node),
                    target,
                    operator,
                    right,
                }))
            }
            "sequence_expression" => {
                let node_id = self.alloc();
                let mut parts = Vec::new();
                flatten_sequence(node, &mut parts);
                let expressions = parts
                    .iter()
                    .map(|part| self.lower_expression(part))
                    .collect();
                Expression::Sequence(SequenceExpression {
                    node_id,
                    span: span_of(node),
                    expressions,
                })
            }
            "parenthesized_expression" => {
                let node_id = self.alloc();
                let expression = self.lower_required_expression(first_named(node).as_ref(), node);
                Expression::Parenthesized(Box::new(ParenthesizedExpression {
                    node_id,
                    span: span_of(node),
                    expression,
                }))
            }
            "await_expression" => {
                let node_id = self.alloc();
                let argument = self.lower_required_expression(first_named(node).as_ref(), node);
                Expression::Await(Box::new(AwaitExpression {
                    node_id,
                    span: span_of(node),
                    argument,
                }))
            }
            "yield_expression" => {
                let node_id = self.alloc();
                let argument = first_named(node).map(|inner| self.lower_expression(&inner));
                Expression::Yield(Box::new(YieldExpression {
                    node_id,
                    span: span_of(node),
                    argument,
                }))
            }
            "spread_element" => Expression::Spread(Box::new(self.lower_spread(node))),
            "as_expression" | "satisfies_expression" | "type_assertion" => {
                self.lower_type_wrapper(node)
            }
            "non_null_expression" => {
                let node_id = self.alloc();
                let expression = self.lower_required_expression(first_named(node).as_ref(), node);
                Expression::TsNonNull(Box::new(TsNonNullExpression {
                    node_id,
                    span: span_of(node),
                    expression,
                }))
            }
            "instantiation_expression" => match first_named(node) {
                Some(inner) => self.lower_expression(&inner),
                None => Expression::Unknown(self.unknown(node)),
            },
            "jsx_element" | "jsx_self_closing_element" | "jsx_fragment" => self.lower_jsx(node),
            _ => Expression::Unknown(self.unknown(node)),
        }
    }

    fn lower_required_expression<D: Doc>(
        &mut self,
        node: Option<&Node<'_, D>>,
        parent: &Node<'_, D>,
    ) -> Expression {
        match node {
            Some(node) => self.lower_expression(node),
            None => Expression::Unknown(self.unknown(parent)),
        }
    }

    pub(super) fn lower_identifier_reference<D: Doc>(
        &mut self,
        node: &Node<'_, D>,
    ) -> IdentifierReference {
        IdentifierReference {
            node_id: self.alloc(),
            span: span_of(node),
            name: node.text().to_string(),
        }
    }

    pub(super) fn lower_string<D: Doc>(&mut self, node: &Node<'_, D>) -> StringLiteral {
        StringLiteral {
            node_id: self.alloc(),
            span: span_of(node),
            value: unquote(&node.text()),
        }
    }

    fn lower_object<D: Doc>(&mut self, node: &Node<'_, D>) -> ObjectExpression {
        let node_id = self.alloc();
        let mut properties = Vec::new();

        for member in named_children(node) {
            match member.kind().as_ref() {
                "pair" => {
                    let property_id = self.alloc();
                    let key = match member.field("key") {
                        Some(key) => self.lower_property_key(&key),
                        None => PropertyKey::Computed(Box::new(Expression::Unknown(
                            self.unknown(&member),
                        ))),
                    };
                    let value = self.lower_required_expression(member.field("value").as_ref(), &member);
                    properties.push(ObjectMember::Property(Box::new(ObjectProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value,
                        shorthand: false,
                        method: false,
                    })));
                }
                "shorthand_property_identifier" => {
                    let property_id = self.alloc();
                    let key = PropertyKey::Identifier(self.lower_identifier_name(&member));
                    let value = Expression::Identifier(self.lower_identifier_reference(&member));
                    properties.push(ObjectMember::Property(Box::new(ObjectProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value,
                        shorthand: true,
                        method: false,
                    })));
                }
                "method_definition" => {
                    let property_id = self.alloc();
                    let key = match member.field("name") {
                        Some(name) => self.lower_property_key(&name),
                        None => PropertyKey::Computed(Box::new(Expression::Unknown(
                            self.unknown(&member),
                        ))),
                    };
                    let function = self.lower_function(&member, FunctionKind::Method);
                    properties.push(ObjectMember::Property(Box::new(ObjectProperty {
                        node_id: property_id,
                        span: span_of(&member),
                        key,
                        value: Expression::Function(Box::new(function)),
                        shorthand: false,
                        method: true,
                    })));
                }
                "spread_element" => {
                    properties.push(ObjectMember::Spread(Box::new(self.lower_spread(&member))));
                }
                _ => {}
            }
        }

        ObjectExpression {
            node_id,
            span: span_of(node),
            properties,
        }
    }

    pub(super) fn lower_property_key<D: Doc>(&mut self, node: &Node<'_, D>) -> PropertyKey {
        match node.kind().as_ref() {
            "private_property_identifier" => {
                PropertyKey::PrivateIdentifier(self.lower_identifier_name(node))
            }
            "string" => PropertyKey::String(self.lower_string(node)),
            "number" => PropertyKey::Number(NumericLiteral {
                node_id: self.alloc(),
                span: span_of(node),
                raw: node.text().to_string(),
            }),
            "computed_property_name" => {
                let inner = first_named(node);
                PropertyKey::Computed(Box::new(self.lower_required_expression(inner.as_ref(), node)))
            }
            _ => PropertyKey::Identifier(self.lower_identifier_name(node)),
        }
    }

    fn lower_spread<D: Doc>(&mut self, node: &Node<'_, D>) -> SpreadElement {
        let node_id = self.alloc();
        let argument = self.lower_required_expression(first_named(node).as_ref(), node);
        SpreadElement {
            node_id,
            span: span_of(node),
            argument,
        }
    }

    fn lower_call<D: Doc>(&mut self, node: &Node<'_, D>) -> Expression {
        let node_id = self.alloc();
        let callee = self.lower_required_expression(node.field("function").as_ref(), node);
        let arguments = match node.field("arguments") {
            Some(arguments) if is_kind(&arguments, "template_string") => {
                vec![self.lower_expression(&arguments)]
            }
            Some(arguments) => self.lower_arguments(&arguments),
            None => Vec::new(),
        };
        let optional = has_token(node, "optional_chain") || has_token(node, "?.");

        Expression::Call(Box::new(CallExpression {
            node_id,
            span: span_of(node),
            callee,
            arguments,
            optional,
        }))
    }

    fn lower_arguments<D: Doc>(&mut self, node: &Node<'_, D>) -> Vec<Expression> {
        named_children(node)
            .iter()
            .map(|argument| self.lower_expression(argument))
            .collect()
    }

    pub(super) fn lower_member<D: Doc>(&mut self, node: &Node<'_, D>) -> MemberExpression {
        let node_id = self.alloc();
        let object = self.lower_required_expression(node.field("object").as_ref(), node);

        let property = if is_kind(node, "subscript_expression") {
            let index = node.field("index");
            MemberProperty::Computed(self.lower_required_expression(index.as_ref(), node))
        } else {
            match node.field("property") {
                Some(property) if is_kind(&property, "private_property_identifier") => {
                    MemberProperty::PrivateIdentifier(self.lower_identifier_name(&property))
                }
                Some(property) => MemberProperty::Identifier(self.lower_identifier_name(&property)),
                None => MemberProperty::Identifier(IdentifierName {
                    node_id: self.alloc(),
                    span: span_of(node),
                    name: String::new(),
                }),
            }
        };

        MemberExpression {
            node_id,
            span: span_of(node),
            object,
            property,
            optional: has_token(node, "optional_chain") || has_token(node, "?."),
        }
    }

    fn lower_binary<D: Doc>(&mut self, node: &Node<'_, D>) -> Expression {
        let node_id = self.alloc();
        let operator = node
            .field("operator")
            .map(|operator| operator.text().to_string())
            .unwrap_or_default();
        let left = self.lower_required_expression(node.field("left").as_ref(), node);
        let right = self.lower_required_expression(node.field("right").as_ref(), node);

        match LogicalOperator::from_token(&operator) {
            Some(logical) => Expression::Logical(Box::new(LogicalExpression {
                node_id,
                span: span_of(node),
                left,
                operator: logical,
                right,
            })),
            None => Expression::Binary(Box::new(BinaryExpression {
                node_id,
                span: span_of(node),
                left,
                operator,
                right,
            })),
        }
    }

    /// `x as T`, `x satisfies T`, `<T>x`.
    fn lower_type_wrapper<D: Doc>(&mut self, node: &Node<'_, D>) -> Expression {
        let node_id = self.alloc();
        let children = named_children(node);
        let (expression_node, type_node) = if is_kind(node, "type_assertion") {
            (children.get(1), children.first())
        } else {
            (children.first(), children.get(1))
        };

        let expression = self.lower_required_expression(expression_node, node);
        let type_annotation = match type_node {
            Some(type_node) if is_kind(type_node, "type_arguments") => match first_named(type_node) {
                Some(inner) => self.lower_type(&inner),
                None => self.opaque_type(type_node),
            },
            Some(type_node) => self.lower_type(type_node),
            None => self.opaque_type(node),
        };
        let span = span_of(node);

        if is_kind(node, "satisfies_expression") {
            Expression::TsSatisfies(Box::new(TsSatisfiesExpression {
                node_id,
                span,
                expression,
                type_annotation,
            }))
        } else {
            Expression::TsAs(Box::new(TsAsExpression {
                node_id,
                span,
                expression,
                type_annotation,
            }))
        }
    }

    pub(super) fn lower_assignment_target<D: Doc>(&mut self, node: &Node<'_, D>) -> AssignmentTarget {
        match node.kind().as_ref() {
            "identifier" | "undefined" => {
                AssignmentTarget::Identifier(self.lower_identifier_reference(node))
            }
            "member_expression" | "subscript_expression" => {
                AssignmentTarget::Member(Box::new(self.lower_member(node)))
            }
            "object_pattern" | "array_pattern" | "object" | "array" => {
                AssignmentTarget::Pattern(self.lower_pattern(node))
            }
            "parenthesized_expression" | "non_null_expression" => match first_named(node) {
                Some(inner) => self.lower_assignment_target(&inner),
                None => AssignmentTarget::Other(Expression::Unknown(self.unknown(node))),
            },
            _ => AssignmentTarget::Other(self.lower_expression(node)),
        }
    }

    pub(super) fn opaque_type<D: Doc>(&mut self, node: &Node<'_, D>) -> TsType {
        TsType::Opaque(TsOpaqueType {
            node_id: self.alloc(),
            span: span_of(node),
            cst_kind: node.kind().to_string(),
        })
    }
}

fn flatten_sequence<'r, D: Doc>(node: &Node<'r, D>, out: &mut Vec<Node<'r, D>>) {
    for child in named_children(node) {
        if is_kind(&child, "sequence_expression") {
            flatten_sequence(&child, out);
        } else {
            out.push(child);
        }
    }
}
