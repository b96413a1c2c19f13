//! Preorder traversal over the typed tree.
//!
//! [`walk_program`] calls [`Visit::enter_node`] before a node's children and
//! [`Visit::leave_node`] after them, for every node that carries a
//! [`NodeId`](crate::ast::NodeId).

use crate::ast::{
    ArrowBody, AssignmentTarget, AstKind, BindingProperty, BlockStatement, Class, ClassMember,
    ExportDefaultKind, Expression, ForInLeft, ForInit, Function, FunctionBody, JsxAttributeItem,
    JsxAttributeName, JsxAttributeValue, JsxChild, JsxElement, JsxElementName,
    JsxExpressionContainer, JsxFragment, MemberExpression, MemberProperty, ObjectMember, Param,
    Pattern, Program, PropertyKey, Statement, TsCallSignature, TsFunctionType, TsSignature, TsType,
    VariableDeclaration,
};

pub trait Visit<'a> {
    fn enter_node(&mut self, _kind: AstKind<'a>) {}

    fn leave_node(&mut self, _kind: AstKind<'a>) {}
}

fn visit<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, kind: AstKind<'a>, children: impl FnOnce(&mut V)) {
    visitor.enter_node(kind);
    children(visitor);
    visitor.leave_node(kind);
}

pub fn walk_program<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, program: &'a Program) {
    visit(visitor, AstKind::Program(program), |visitor| {
        for statement in &program.body {
            walk_statement(visitor, statement);
        }
    });
}

// ── Statements ─────────────────────────────────────────────────────

pub fn walk_statement<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, statement: &'a Statement) {
    match statement {
        Statement::Expression(node) => visit(visitor, AstKind::ExpressionStatement(node), |v| {
            walk_expression(v, &node.expression);
        }),
        Statement::Variable(node) => walk_variable_declaration(visitor, node),
        Statement::Function(node) => walk_function(visitor, node),
        Statement::Class(node) => walk_class(visitor, node),
        Statement::Return(node) => visit(visitor, AstKind::ReturnStatement(node), |v| {
            if let Some(argument) = &node.argument {
                walk_expression(v, argument);
            }
        }),
        Statement::If(node) => visit(visitor, AstKind::IfStatement(node), |v| {
            walk_expression(v, &node.test);
            walk_statement(v, &node.consequent);
            if let Some(alternate) = &node.alternate {
                walk_statement(v, alternate);
            }
        }),
        Statement::For(node) => visit(visitor, AstKind::ForStatement(node), |v| {
            match &node.init {
                Some(ForInit::Variable(declaration)) => walk_variable_declaration(v, declaration),
                Some(ForInit::Expression(expression)) => walk_expression(v, expression),
                None => {}
            }
            if let Some(test) = &node.test {
                walk_expression(v, test);
            }
            if let Some(update) = &node.update {
                walk_expression(v, update);
            }
            walk_statement(v, &node.body);
        }),
        Statement::ForIn(node) => visit(visitor, AstKind::ForInStatement(node), |v| {
            match &node.left {
                ForInLeft::Declaration { binding, .. } => walk_pattern(v, binding),
                ForInLeft::Target(target) => walk_assignment_target(v, target),
            }
            walk_expression(v, &node.right);
            walk_statement(v, &node.body);
        }),
        Statement::While(node) => visit(visitor, AstKind::WhileStatement(node), |v| {
            walk_expression(v, &node.test);
            walk_statement(v, &node.body);
        }),
        Statement::DoWhile(node) => visit(visitor, AstKind::DoWhileStatement(node), |v| {
            walk_statement(v, &node.body);
            walk_expression(v, &node.test);
        }),
        Statement::Switch(node) => visit(visitor, AstKind::SwitchStatement(node), |v| {
            walk_expression(v, &node.discriminant);
            for case in &node.cases {
                visit(v, AstKind::SwitchCase(case), |v| {
                    if let Some(test) = &case.test {
                        walk_expression(v, test);
                    }
                    for statement in &case.consequent {
                        walk_statement(v, statement);
                    }
                });
            }
        }),
        Statement::Try(node) => visit(visitor, AstKind::TryStatement(node), |v| {
            walk_block(v, &node.block);
            if let Some(handler) = &node.handler {
                visit(v, AstKind::CatchClause(handler), |v| {
                    if let Some(param) = &handler.param {
                        walk_pattern(v, param);
                    }
                    walk_block(v, &handler.body);
                });
            }
            if let Some(finalizer) = &node.finalizer {
                walk_block(v, finalizer);
            }
        }),
        Statement::Throw(node) => visit(visitor, AstKind::ThrowStatement(node), |v| {
            walk_expression(v, &node.argument);
        }),
        Statement::Block(node) => walk_block(visitor, node),
        Statement::Labeled(node) => visit(visitor, AstKind::LabeledStatement(node), |v| {
            visit(v, AstKind::IdentifierName(&node.label), |_| {});
            walk_statement(v, &node.body);
        }),
        Statement::Import(node) => visit(visitor, AstKind::ImportDeclaration(node), |v| {
            for specifier in &node.specifiers {
                visit(v, AstKind::ImportSpecifier(specifier), |v| {
                    visit(v, AstKind::BindingIdentifier(&specifier.local), |_| {});
                });
            }
            visit(v, AstKind::StringLiteral(&node.source), |_| {});
        }),
        Statement::ExportNamed(node) => visit(visitor, AstKind::ExportNamedDeclaration(node), |v| {
            if let Some(declaration) = &node.declaration {
                walk_statement(v, declaration);
            }
            for specifier in &node.specifiers {
                visit(v, AstKind::ExportSpecifier(specifier), |v| {
                    visit(v, AstKind::ModuleExportName(&specifier.local), |_| {});
                    if let Some(exported) = &specifier.exported {
                        visit(v, AstKind::ModuleExportName(exported), |_| {});
                    }
                });
            }
            if let Some(source) = &node.source {
                visit(v, AstKind::StringLiteral(source), |_| {});
            }
        }),
        Statement::ExportDefault(node) => {
            visit(visitor, AstKind::ExportDefaultDeclaration(node), |v| match &node.declaration {
                ExportDefaultKind::Function(function) => walk_function(v, function),
                ExportDefaultKind::Class(class) => walk_class(v, class),
                ExportDefaultKind::Expression(expression) => walk_expression(v, expression),
            });
        }
        Statement::Interface(node) => visit(visitor, AstKind::TsInterfaceDeclaration(node), |v| {
            visit(v, AstKind::BindingIdentifier(&node.name), |_| {});
            for heritage in &node.extends {
                walk_type(v, heritage);
            }
            for signature in &node.body {
                walk_signature(v, signature);
            }
        }),
        Statement::TypeAlias(node) => visit(visitor, AstKind::TsTypeAliasDeclaration(node), |v| {
            visit(v, AstKind::BindingIdentifier(&node.name), |_| {});
            walk_type(v, &node.type_annotation);
        }),
        Statement::Other(node) => visit(visitor, AstKind::Unknown(node), |_| {}),
    }
}

fn walk_block<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, block: &'a BlockStatement) {
    visit(visitor, AstKind::BlockStatement(block), |v| {
        for statement in &block.body {
            walk_statement(v, statement);
        }
    });
}

fn walk_variable_declaration<'a, V: Visit<'a> + ?Sized>(
    visitor: &mut V,
    declaration: &'a VariableDeclaration,
) {
    visit(visitor, AstKind::VariableDeclaration(declaration), |v| {
        for declarator in &declaration.declarations {
            visit(v, AstKind::VariableDeclarator(declarator), |v| {
                walk_pattern(v, &declarator.binding);
                if let Some(type_annotation) = &declarator.type_annotation {
                    walk_type(v, type_annotation);
                }
                if let Some(init) = &declarator.init {
                    walk_expression(v, init);
                }
            });
        }
    });
}

// ── Functions and classes ──────────────────────────────────────────

pub fn walk_function<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, function: &'a Function) {
    visit(visitor, AstKind::Function(function), |v| {
        if let Some(name) = &function.name {
            visit(v, AstKind::BindingIdentifier(name), |_| {});
        }
        walk_params(v, &function.params);
        if let Some(return_type) = &function.return_type {
            walk_type(v, return_type);
        }
        if let Some(body) = &function.body {
            walk_function_body(v, body);
        }
    });
}

fn walk_function_body<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, body: &'a FunctionBody) {
    visit(visitor, AstKind::FunctionBody(body), |v| {
        for statement in &body.statements {
            walk_statement(v, statement);
        }
    });
}

fn walk_params<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, params: &'a [Param]) {
    for param in params {
        visit(visitor, AstKind::Param(param), |v| {
            walk_pattern(v, &param.pattern);
            if let Some(type_annotation) = &param.type_annotation {
                walk_type(v, type_annotation);
            }
        });
    }
}

pub fn walk_class<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, class: &'a Class) {
    visit(visitor, AstKind::Class(class), |v| {
        if let Some(name) = &class.name {
            visit(v, AstKind::BindingIdentifier(name), |_| {});
        }
        if let Some(super_class) = &class.super_class {
            walk_expression(v, super_class);
        }
        for member in &class.members {
            match member {
                ClassMember::Method(method) => visit(v, AstKind::MethodDefinition(method), |v| {
                    walk_property_key(v, &method.key);
                    walk_function(v, &method.value);
                }),
                ClassMember::Property(property) => {
                    visit(v, AstKind::PropertyDefinition(property), |v| {
                        walk_property_key(v, &property.key);
                        if let Some(type_annotation) = &property.type_annotation {
                            walk_type(v, type_annotation);
                        }
                        if let Some(value) = &property.value {
                            walk_expression(v, value);
                        }
                    });
                }
                ClassMember::StaticBlock(block) => visit(v, AstKind::StaticBlock(block), |v| {
                    for statement in &block.body {
                        walk_statement(v, statement);
                    }
                }),
                ClassMember::Other(node) => visit(v, AstKind::Unknown(node), |_| {}),
            }
        }
    });
}

fn walk_property_key<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, key: &'a PropertyKey) {
    match key {
        PropertyKey::Identifier(name) | PropertyKey::PrivateIdentifier(name) => {
            visit(visitor, AstKind::IdentifierName(name), |_| {});
        }
        PropertyKey::String(literal) => visit(visitor, AstKind::StringLiteral(literal), |_| {}),
        PropertyKey::Number(literal) => visit(visitor, AstKind::NumericLiteral(literal), |_| {}),
        PropertyKey::Computed(expression) => walk_expression(visitor, expression),
    }
}

// ── Expressions ────────────────────────────────────────────────────

pub fn walk_expression<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, expression: &'a Expression) {
    match expression {
        Expression::Identifier(node) => visit(visitor, AstKind::IdentifierReference(node), |_| {}),
        Expression::String(node) => visit(visitor, AstKind::StringLiteral(node), |_| {}),
        Expression::Template(node) => visit(visitor, AstKind::TemplateLiteral(node), |v| {
            for expression in &node.expressions {
                walk_expression(v, expression);
            }
        }),
        Expression::Number(node) => visit(visitor, AstKind::NumericLiteral(node), |_| {}),
        Expression::Boolean(node) => visit(visitor, AstKind::BooleanLiteral(node), |_| {}),
        Expression::Null(node) => visit(visitor, AstKind::NullLiteral(node), |_| {}),
        Expression::OtherLiteral(node) => visit(visitor, AstKind::OtherLiteral(node), |_| {}),
        Expression::This(node) => visit(visitor, AstKind::ThisExpression(node), |_| {}),
        Expression::Array(node) => visit(visitor, AstKind::ArrayExpression(node), |v| {
            for element in &node.elements {
                walk_expression(v, element);
            }
        }),
        Expression::Object(node) => visit(visitor, AstKind::ObjectExpression(node), |v| {
            for member in &node.properties {
                match member {
                    ObjectMember::Property(property) => {
                        visit(v, AstKind::ObjectProperty(property), |v| {
                            walk_property_key(v, &property.key);
                            walk_expression(v, &property.value);
                        });
                    }
                    ObjectMember::Spread(spread) => visit(v, AstKind::SpreadElement(spread), |v| {
                        walk_expression(v, &spread.argument);
                    }),
                }
            }
        }),
        Expression::Function(node) => walk_function(visitor, node),
        Expression::Arrow(node) => visit(visitor, AstKind::ArrowFunction(node), |v| {
            walk_params(v, &node.params);
            if let Some(return_type) = &node.return_type {
                walk_type(v, return_type);
            }
            match &node.body {
                ArrowBody::Expression(expression) => walk_expression(v, expression),
                ArrowBody::Block(body) => walk_function_body(v, body),
            }
        }),
        Expression::Class(node) => walk_class(visitor, node),
        Expression::Call(node) => visit(visitor, AstKind::CallExpression(node), |v| {
            walk_expression(v, &node.callee);
            for argument in &node.arguments {
                walk_expression(v, argument);
            }
        }),
        Expression::New(node) => visit(visitor, AstKind::NewExpression(node), |v| {
            walk_expression(v, &node.callee);
            for argument in &node.arguments {
                walk_expression(v, argument);
            }
        }),
        Expression::Member(node) => walk_member(visitor, node),
        Expression::Unary(node) => visit(visitor, AstKind::UnaryExpression(node), |v| {
            walk_expression(v, &node.argument);
        }),
        Expression::Update(node) => visit(visitor, AstKind::UpdateExpression(node), |v| {
            walk_expression(v, &node.argument);
        }),
        Expression::Binary(node) => visit(visitor, AstKind::BinaryExpression(node), |v| {
            walk_expression(v, &node.left);
            walk_expression(v, &node.right);
        }),
        Expression::Logical(node) => visit(visitor, AstKind::LogicalExpression(node), |v| {
            walk_expression(v, &node.left);
            walk_expression(v, &node.right);
        }),
        Expression::Conditional(node) => {
            visit(visitor, AstKind::ConditionalExpression(node), |v| {
                walk_expression(v, &node.test);
                walk_expression(v, &node.consequent);
                walk_expression(v, &node.alternate);
            });
        }
        Expression::Assignment(node) => visit(visitor, AstKind::AssignmentExpression(node), |v| {
            walk_assignment_target(v, &node.target);
            walk_expression(v, &node.right);
        }),
        Expression::Sequence(node) => visit(visitor, AstKind::SequenceExpression(node), |v| {
            for expression in &node.expressions {
                walk_expression(v, expression);
            }
        }),
        Expression::Parenthesized(node) => {
            visit(visitor, AstKind::ParenthesizedExpression(node), |v| {
                walk_expression(v, &node.expression);
            });
        }
        Expression::Await(node) => visit(visitor, AstKind::AwaitExpression(node), |v| {
            walk_expression(v, &node.argument);
        }),
        Expression::Yield(node) => visit(visitor, AstKind::YieldExpression(node), |v| {
            if let Some(argument) = &node.argument {
                walk_expression(v, argument);
            }
        }),
        Expression::Spread(node) => visit(visitor, AstKind::SpreadElement(node), |v| {
            walk_expression(v, &node.argument);
        }),
        Expression::TsAs(node) => visit(visitor, AstKind::TsAsExpression(node), |v| {
            walk_expression(v, &node.expression);
            walk_type(v, &node.type_annotation);
        }),
        Expression::TsSatisfies(node) => {
            visit(visitor, AstKind::TsSatisfiesExpression(node), |v| {
                walk_expression(v, &node.expression);
                walk_type(v, &node.type_annotation);
            });
        }
        Expression::TsNonNull(node) => visit(visitor, AstKind::TsNonNullExpression(node), |v| {
            walk_expression(v, &node.expression);
        }),
        Expression::JsxElement(node) => walk_jsx_element(visitor, node),
        Expression::JsxFragment(node) => walk_jsx_fragment(visitor, node),
        Expression::Unknown(node) => visit(visitor, AstKind::Unknown(node), |_| {}),
    }
}

fn walk_member<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, member: &'a MemberExpression) {
    visit(visitor, AstKind::MemberExpression(member), |v| {
        walk_expression(v, &member.object);
        match &member.property {
            MemberProperty::Identifier(name) | MemberProperty::PrivateIdentifier(name) => {
                visit(v, AstKind::IdentifierName(name), |_| {});
            }
            MemberProperty::Computed(expression) => walk_expression(v, expression),
        }
    });
}

fn walk_assignment_target<'a, V: Visit<'a> + ?Sized>(
    visitor: &mut V,
    target: &'a AssignmentTarget,
) {
    match target {
        AssignmentTarget::Identifier(node) => {
            visit(visitor, AstKind::IdentifierReference(node), |_| {});
        }
        AssignmentTarget::Member(member) => walk_member(visitor, member),
        AssignmentTarget::Pattern(pattern) => walk_pattern(visitor, pattern),
        AssignmentTarget::Other(expression) => walk_expression(visitor, expression),
    }
}

// ── Patterns ───────────────────────────────────────────────────────

pub fn walk_pattern<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, pattern: &'a Pattern) {
    match pattern {
        Pattern::Identifier(node) => visit(visitor, AstKind::BindingIdentifier(node), |_| {}),
        Pattern::Object(node) => visit(visitor, AstKind::ObjectPattern(node), |v| {
            for property in &node.properties {
                walk_binding_property(v, property);
            }
            if let Some(rest) = &node.rest {
                visit(v, AstKind::RestElement(rest), |v| walk_pattern(v, &rest.argument));
            }
        }),
        Pattern::Array(node) => visit(visitor, AstKind::ArrayPattern(node), |v| {
            for element in node.elements.iter().flatten() {
                walk_pattern(v, element);
            }
            if let Some(rest) = &node.rest {
                visit(v, AstKind::RestElement(rest), |v| walk_pattern(v, &rest.argument));
            }
        }),
        Pattern::Assignment(node) => visit(visitor, AstKind::AssignmentPattern(node), |v| {
            walk_pattern(v, &node.left);
            walk_expression(v, &node.right);
        }),
        Pattern::Rest(node) => visit(visitor, AstKind::RestElement(node), |v| {
            walk_pattern(v, &node.argument);
        }),
        Pattern::Expression(expression) => walk_expression(visitor, expression),
    }
}

fn walk_binding_property<'a, V: Visit<'a> + ?Sized>(
    visitor: &mut V,
    property: &'a BindingProperty,
) {
    visit(visitor, AstKind::BindingProperty(property), |v| {
        walk_property_key(v, &property.key);
        walk_pattern(v, &property.value);
    });
}

// ── Types ──────────────────────────────────────────────────────────

pub fn walk_type<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, ty: &'a TsType) {
    match ty {
        TsType::Keyword(node) => visit(visitor, AstKind::TsKeywordType(node), |_| {}),
        TsType::Reference(node) => visit(visitor, AstKind::TsTypeReference(node), |v| {
            visit(v, AstKind::TsTypeName(&node.name), |_| {});
            for argument in &node.type_arguments {
                walk_type(v, argument);
            }
        }),
        TsType::Array(node) => visit(visitor, AstKind::TsArrayType(node), |v| {
            walk_type(v, &node.element);
        }),
        TsType::Tuple(node) => visit(visitor, AstKind::TsTupleType(node), |v| {
            for element in &node.elements {
                walk_type(v, element);
            }
        }),
        TsType::TypeLiteral(node) => visit(visitor, AstKind::TsTypeLiteral(node), |v| {
            for member in &node.members {
                walk_signature(v, member);
            }
        }),
        TsType::Union(node) => visit(visitor, AstKind::TsUnionType(node), |v| {
            for member in &node.types {
                walk_type(v, member);
            }
        }),
        TsType::Intersection(node) => visit(visitor, AstKind::TsIntersectionType(node), |v| {
            for member in &node.types {
                walk_type(v, member);
            }
        }),
        TsType::Function(node) | TsType::Constructor(node) => walk_function_type(visitor, node),
        TsType::Parenthesized(node) => visit(visitor, AstKind::TsParenthesizedType(node), |v| {
            walk_type(v, &node.type_annotation);
        }),
        TsType::Operator(node) => visit(visitor, AstKind::TsTypeOperator(node), |v| {
            walk_type(v, &node.type_annotation);
        }),
        TsType::Optional(node) => visit(visitor, AstKind::TsOptionalType(node), |v| {
            walk_type(v, &node.type_annotation);
        }),
        TsType::Literal(node) => visit(visitor, AstKind::TsLiteralType(node), |_| {}),
        TsType::Opaque(node) => visit(visitor, AstKind::TsOpaqueType(node), |_| {}),
    }
}

fn walk_function_type<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, function: &'a TsFunctionType) {
    visit(visitor, AstKind::TsFunctionType(function), |v| {
        walk_params(v, &function.params);
        if let Some(return_type) = &function.return_type {
            walk_type(v, return_type);
        }
    });
}

fn walk_call_signature<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, signature: &'a TsCallSignature) {
    visit(visitor, AstKind::TsCallSignature(signature), |v| {
        walk_params(v, &signature.params);
        if let Some(return_type) = &signature.return_type {
            walk_type(v, return_type);
        }
    });
}

pub fn walk_signature<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, signature: &'a TsSignature) {
    match signature {
        TsSignature::Property(node) => visit(visitor, AstKind::TsPropertySignature(node), |v| {
            walk_property_key(v, &node.key);
            if let Some(type_annotation) = &node.type_annotation {
                walk_type(v, type_annotation);
            }
        }),
        TsSignature::Method(node) => visit(visitor, AstKind::TsMethodSignature(node), |v| {
            walk_property_key(v, &node.key);
            walk_params(v, &node.params);
            if let Some(return_type) = &node.return_type {
                walk_type(v, return_type);
            }
        }),
        TsSignature::Call(node) | TsSignature::Construct(node) => {
            walk_call_signature(visitor, node);
        }
        TsSignature::Index(node) => visit(visitor, AstKind::TsIndexSignature(node), |v| {
            if let Some(type_annotation) = &node.type_annotation {
                walk_type(v, type_annotation);
            }
        }),
    }
}

// ── JSX ────────────────────────────────────────────────────────────

pub fn walk_jsx_element<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, element: &'a JsxElement) {
    visit(visitor, AstKind::JsxElement(element), |v| {
        let opening = &element.opening;
        visit(v, AstKind::JsxOpeningElement(opening), |v| {
            match &opening.name {
                JsxElementName::Identifier(name) => visit(v, AstKind::JsxIdentifier(name), |_| {}),
                JsxElementName::Namespaced(name) => {
                    visit(v, AstKind::JsxNamespacedName(name), |_| {});
                }
                JsxElementName::Member(name) => visit(v, AstKind::JsxMemberName(name), |_| {}),
            }
            for item in &opening.attributes {
                match item {
                    JsxAttributeItem::Attribute(attribute) => {
                        visit(v, AstKind::JsxAttribute(attribute), |v| {
                            match &attribute.name {
                                JsxAttributeName::Identifier(name) => {
                                    visit(v, AstKind::JsxIdentifier(name), |_| {});
                                }
                                JsxAttributeName::Namespaced(name) => {
                                    visit(v, AstKind::JsxNamespacedName(name), |_| {});
                                }
                            }
                            match &attribute.value {
                                Some(JsxAttributeValue::String(literal)) => {
                                    visit(v, AstKind::StringLiteral(literal), |_| {});
                                }
                                Some(JsxAttributeValue::ExpressionContainer(container)) => {
                                    walk_expression_container(v, container);
                                }
                                Some(JsxAttributeValue::Element(element)) => {
                                    walk_jsx_element(v, element);
                                }
                                Some(JsxAttributeValue::Fragment(fragment)) => {
                                    walk_jsx_fragment(v, fragment);
                                }
                                None => {}
                            }
                        });
                    }
                    JsxAttributeItem::Spread(spread) => {
                        visit(v, AstKind::JsxSpreadAttribute(spread), |v| {
                            walk_expression(v, &spread.argument);
                        });
                    }
                }
            }
        });
        walk_jsx_children(v, &element.children);
    });
}

pub fn walk_jsx_fragment<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, fragment: &'a JsxFragment) {
    visit(visitor, AstKind::JsxFragment(fragment), |v| {
        walk_jsx_children(v, &fragment.children);
    });
}

fn walk_jsx_children<'a, V: Visit<'a> + ?Sized>(visitor: &mut V, children: &'a [JsxChild]) {
    for child in children {
        match child {
            JsxChild::Text(text) => visit(visitor, AstKind::JsxText(text), |_| {}),
            JsxChild::Element(element) => walk_jsx_element(visitor, element),
            JsxChild::Fragment(fragment) => walk_jsx_fragment(visitor, fragment),
            JsxChild::ExpressionContainer(container) => {
                walk_expression_container(visitor, container);
            }
        }
    }
}

fn walk_expression_container<'a, V: Visit<'a> + ?Sized>(
    visitor: &mut V,
    container: &'a JsxExpressionContainer,
) {
    visit(visitor, AstKind::JsxExpressionContainer(container), |v| {
        if let Some(expression) = &container.expression {
            walk_expression(v, expression);
        }
    });
}
