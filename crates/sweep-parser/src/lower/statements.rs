//! Statements, declarations, functions, classes and module items.

use ast_grep_core::{Doc, Node};

use super::{
    Lowerer, first_named, has_token, has_token_before, is_kind, named_children, same_node,
    span_of, unquote,
};
use crate::ast::{
    ArrowBody, ArrowFunction, BindingIdentifier, BlockStatement, CatchClause, Class, ClassMember,
    DoWhileStatement, ExportDefaultDeclaration, ExportDefaultKind, ExportNamedDeclaration,
    ExportSpecifier, Expression, ExpressionStatement, ForInKind, ForInLeft, ForInStatement, ForInit,
    ForStatement, Function, FunctionBody, FunctionKind, IdentifierName, IfStatement,
    ImportDeclaration, ImportSpecifier, ImportedName, LabeledStatement, MethodDefinition,
    MethodKind, ModuleExportName, Param, Pattern, PropertyDefinition, ReturnStatement, Span,
    Statement, StaticBlock, StringLiteral, SwitchCase, SwitchStatement, ThrowStatement, TryStatement,
    TsInterfaceDeclaration, TsTypeAliasDeclaration, VariableDeclaration, VariableDeclarator,
    VariableKind, WhileStatement,
};

impl Lowerer {
    pub(super) fn lower_statement<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        match node.kind().as_ref() {
            "expression_statement" => self.lower_expression_statement(node),
            "lexical_declaration" | "variable_declaration" => {
                Statement::Variable(self.lower_variable_declaration(node))
            }
            "function_declaration" | "generator_function_declaration" => Statement::Function(
                Box::new(self.lower_function(node, FunctionKind::Declaration)),
            ),
            "class_declaration" | "abstract_class_declaration" => {
                Statement::Class(Box::new(self.lower_class(node, true)))
            }
            "return_statement" => {
                let node_id = self.alloc();
                let argument = first_named(node).map(|child| self.lower_expression(&child));
                Statement::Return(ReturnStatement {
                    node_id,
                    span: span_of(node),
                    argument,
                })
            }
            "if_statement" => self.lower_if(node),
            "for_statement" => self.lower_for(node),
            "for_in_statement" => self.lower_for_in(node),
            "while_statement" => {
                let node_id = self.alloc();
                let test = self.lower_condition(node.field("condition").as_ref(), node);
                let body = self.lower_body_statement(node.field("body").as_ref(), node);
                Statement::While(Box::new(WhileStatement {
                    node_id,
                    span: span_of(node),
                    test,
                    body,
                }))
            }
            "do_statement" => {
                let node_id = self.alloc();
                let body = self.lower_body_statement(node.field("body").as_ref(), node);
                let test = self.lower_condition(node.field("condition").as_ref(), node);
                Statement::DoWhile(Box::new(DoWhileStatement {
                    node_id,
                    span: span_of(node),
                    body,
                    test,
                }))
            }
            "switch_statement" => self.lower_switch(node),
            "try_statement" => self.lower_try(node),
            "throw_statement" => {
                let node_id = self.alloc();
                let argument = match first_named(node) {
                    Some(child) => self.lower_expression(&child),
                    None => Expression::Unknown(self.unknown(node)),
                };
                Statement::Throw(ThrowStatement {
                    node_id,
                    span: span_of(node),
                    argument,
                })
            }
            "statement_block" => Statement::Block(self.lower_block(node)),
            "labeled_statement" => {
                let node_id = self.alloc();
                let label_node = node.field("label").or_else(|| first_named(node));
                let label = match label_node {
                    Some(label) => self.lower_identifier_name(&label),
                    None => IdentifierName {
                        node_id: self.alloc(),
                        span: span_of(node),
                        name: String::new(),
                    },
                };
                let body = self.lower_body_statement(node.field("body").as_ref(), node);
                Statement::Labeled(Box::new(LabeledStatement {
                    node_id,
                    span: span_of(node),
                    label,
                    body,
                }))
            }
            "import_statement" => Statement::Import(self.lower_import(node)),
            "export_statement" => self.lower_export(node),
            "interface_declaration" => self.lower_interface(node),
            "type_alias_declaration" => self.lower_type_alias(node),
            "ambient_declaration" => match first_named(node) {
                Some(inner) if !is_kind(&inner, "statement_block") => self.lower_statement(&inner),
                _ => Statement::Other(self.unknown(node)),
            },
            _ => Statement::Other(self.unknown(node)),
        }
    }

    fn lower_expression_statement<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let expression = match first_named(node) {
            Some(child) => self.lower_expression(&child),
            None => Expression::Unknown(self.unknown(node)),
        };
        Statement::Expression(ExpressionStatement {
            node_id,
            span: span_of(node),
            expression,
        })
    }

    /// Lower a statement slot, falling back to an `Other` placeholder when
    /// the slot is missing from a malformed tree.
    fn lower_body_statement<D: Doc>(
        &mut self,
        body: Option<&Node<'_, D>>,
        parent: &Node<'_, D>,
    ) -> Statement {
        match body {
            Some(body) => self.lower_statement(body),
            None => Statement::Other(self.unknown(parent)),
        }
    }

    /// `(test)` slots of `if`/`while`/`do`; the parentheses are dropped.
    fn lower_condition<D: Doc>(
        &mut self,
        condition: Option<&Node<'_, D>>,
        parent: &Node<'_, D>,
    ) -> Expression {
        match condition {
            Some(condition) if is_kind(condition, "parenthesized_expression") => {
                match first_named(condition) {
                    Some(inner) => self.lower_expression(&inner),
                    None => Expression::Unknown(self.unknown(condition)),
                }
            }
            Some(condition) => self.lower_expression(condition),
            None => Expression::Unknown(self.unknown(parent)),
        }
    }

    pub(super) fn lower_block<D: Doc>(&mut self, node: &Node<'_, D>) -> BlockStatement {
        let node_id = self.alloc();
        let body = named_children(node)
            .iter()
            .map(|child| self.lower_statement(child))
            .collect();
        BlockStatement {
            node_id,
            span: span_of(node),
            body,
        }
    }

    pub(super) fn lower_variable_declaration<D: Doc>(
        &mut self,
        node: &Node<'_, D>,
    ) -> VariableDeclaration {
        let node_id = self.alloc();
        let kind = if is_kind(node, "variable_declaration") {
            VariableKind::Var
        } else {
            let keyword = node
                .field("kind")
                .map(|kind| kind.text().to_string())
                .or_else(|| node.children().next().map(|first| first.text().to_string()))
                .unwrap_or_default();
            match keyword.as_str() {
                "let" => VariableKind::Let,
                "var" => VariableKind::Var,
                _ => VariableKind::Const,
            }
        };

        let declarations = named_children(node)
            .iter()
            .filter(|child| is_kind(child, "variable_declarator"))
            .map(|child| self.lower_declarator(child))
            .collect();

        VariableDeclaration {
            node_id,
            span: span_of(node),
            kind,
            declarations,
        }
    }

    fn lower_declarator<D: Doc>(&mut self, node: &Node<'_, D>) -> VariableDeclarator {
        let node_id = self.alloc();
        let binding = match node.field("name") {
            Some(name) => self.lower_pattern(&name),
            None => Pattern::Expression(Box::new(Expression::Unknown(self.unknown(node)))),
        };
        let type_annotation = node.field("type").map(|ty| self.lower_type(&ty));
        let init = node.field("value").map(|value| self.lower_expression(&value));

        VariableDeclarator {
            node_id,
            span: span_of(node),
            binding,
            type_annotation,
            init,
        }
    }

    fn lower_if<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let test = self.lower_condition(node.field("condition").as_ref(), node);
        let consequent = self.lower_body_statement(node.field("consequence").as_ref(), node);
        let alternate = node.field("alternative").map(|alternative| {
            if is_kind(&alternative, "else_clause") {
                match first_named(&alternative) {
                    Some(inner) => self.lower_statement(&inner),
                    None => Statement::Other(self.unknown(&alternative)),
                }
            } else {
                self.lower_statement(&alternative)
            }
        });

        Statement::If(Box::new(IfStatement {
            node_id,
            span: span_of(node),
            test,
            consequent,
            alternate,
        }))
    }

    fn lower_for<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();

        let init = node.field("initializer").and_then(|init| {
            match init.kind().as_ref() {
                "lexical_declaration" | "variable_declaration" => {
                    Some(ForInit::Variable(self.lower_variable_declaration(&init)))
                }
                "empty_statement" => None,
                "expression_statement" => first_named(&init)
                    .map(|expression| ForInit::Expression(self.lower_expression(&expression))),
                _ => Some(ForInit::Expression(self.lower_expression(&init))),
            }
        });

        let test = node.field("condition").and_then(|condition| {
            match condition.kind().as_ref() {
                "empty_statement" => None,
                "expression_statement" => {
                    first_named(&condition).map(|expression| self.lower_expression(&expression))
                }
                _ => Some(self.lower_expression(&condition)),
            }
        });

        let update = node
            .field("increment")
            .map(|update| self.lower_expression(&update));
        let body = self.lower_body_statement(node.field("body").as_ref(), node);

        Statement::For(Box::new(ForStatement {
            node_id,
            span: span_of(node),
            init,
            test,
            update,
            body,
        }))
    }

    fn lower_for_in<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let kind = match node.field("operator") {
            Some(operator) if operator.text().as_ref() == "in" => ForInKind::In,
            Some(_) => ForInKind::Of,
            None if has_token(node, "in") => ForInKind::In,
            None => ForInKind::Of,
        };

        let declaration_kind = node.field("kind").map(|kind| match kind.text().as_ref() {
            "var" => VariableKind::Var,
            "let" => VariableKind::Let,
            _ => VariableKind::Const,
        });

        let left = match (node.field("left"), declaration_kind) {
            (Some(left), Some(kind)) => ForInLeft::Declaration {
                kind,
                binding: self.lower_pattern(&left),
            },
            (Some(left), None) => ForInLeft::Target(self.lower_assignment_target(&left)),
            (None, _) => ForInLeft::Target(crate::ast::AssignmentTarget::Other(
                Expression::Unknown(self.unknown(node)),
            )),
        };

        let right = match node.field("right") {
            Some(right) => self.lower_expression(&right),
            None => Expression::Unknown(self.unknown(node)),
        };
        let body = self.lower_body_statement(node.field("body").as_ref(), node);

        Statement::ForIn(Box::new(ForInStatement {
            node_id,
            span: span_of(node),
            kind,
            is_await: has_token(node, "await"),
            left,
            right,
            body,
        }))
    }

    fn lower_switch<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let discriminant = self.lower_condition(node.field("value").as_ref(), node);

        let mut cases = Vec::new();
        if let Some(body) = node.field("body") {
            for case in named_children(&body) {
                if !matches!(case.kind().as_ref(), "switch_case" | "switch_default") {
                    continue;
                }
                let case_id = self.alloc();
                let value = case.field("value");
                let test = value.as_ref().map(|value| self.lower_expression(value));
                let consequent = named_children(&case)
                    .iter()
                    .filter(|child| value.as_ref().is_none_or(|value| !same_node(child, value)))
                    .map(|child| self.lower_statement(child))
                    .collect();
                cases.push(SwitchCase {
                    node_id: case_id,
                    span: span_of(&case),
                    test,
                    consequent,
                });
            }
        }

        Statement::Switch(Box::new(SwitchStatement {
            node_id,
            span: span_of(node),
            discriminant,
            cases,
        }))
    }

    fn lower_try<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let block = match node.field("body") {
            Some(body) => self.lower_block(&body),
            None => self.empty_block(node),
        };

        let handler = node.field("handler").map(|handler| {
            let clause_id = self.alloc();
            let param = handler
                .field("parameter")
                .map(|param| self.lower_pattern(&param));
            let body = match handler.field("body") {
                Some(body) => self.lower_block(&body),
                None => self.empty_block(&handler),
            };
            CatchClause {
                node_id: clause_id,
                span: span_of(&handler),
                param,
                body,
            }
        });

        let finalizer = node.field("finalizer").map(|finalizer| {
            match finalizer
                .field("body")
                .or_else(|| first_named(&finalizer))
            {
                Some(body) => self.lower_block(&body),
                None => self.empty_block(&finalizer),
            }
        });

        Statement::Try(Box::new(TryStatement {
            node_id,
            span: span_of(node),
            block,
            handler,
            finalizer,
        }))
    }

    fn empty_block<D: Doc>(&mut self, node: &Node<'_, D>) -> BlockStatement {
        BlockStatement {
            node_id: self.alloc(),
            span: span_of(node),
            body: Vec::new(),
        }
    }

    // ── Functions ──────────────────────────────────────────────────

    pub(super) fn lower_function<D: Doc>(
        &mut self,
        node: &Node<'_, D>,
        kind: FunctionKind,
    ) -> Function {
        let node_id = self.alloc();
        let name = match kind {
            FunctionKind::Method => None,
            _ => node
                .field("name")
                .map(|name| self.lower_binding_identifier(&name)),
        };
        let params = node
            .field("parameters")
            .map(|params| self.lower_params(&params))
            .unwrap_or_default();
        let return_type = node
            .field("return_type")
            .map(|return_type| self.lower_type(&return_type));
        let body = node
            .field("body")
            .map(|body| self.lower_function_body(&body));

        let body_start = node.field("body").map_or(usize::MAX, |body| body.range().start);
        let is_generator = node.kind().contains("generator") || has_token_before(node, "*", body_start);

        Function {
            node_id,
            span: span_of(node),
            kind,
            name,
            params,
            return_type,
            body,
            is_async: has_token(node, "async"),
            is_generator,
        }
    }

    pub(super) fn lower_arrow<D: Doc>(&mut self, node: &Node<'_, D>) -> ArrowFunction {
        let node_id = self.alloc();

        let params = if let Some(single) = node.field("parameter") {
            let param_id = self.alloc();
            let pattern = self.lower_pattern(&single);
            vec![Param {
                node_id: param_id,
                span: span_of(&single),
                pattern,
                type_annotation: None,
                optional: false,
                is_readonly: false,
            }]
        } else {
            node.field("parameters")
                .map(|params| self.lower_params(&params))
                .unwrap_or_default()
        };

        let return_type = node
            .field("return_type")
            .map(|return_type| self.lower_type(&return_type));

        let body = match node.field("body") {
            Some(body) if is_kind(&body, "statement_block") => {
                ArrowBody::Block(self.lower_function_body(&body))
            }
            Some(body) => ArrowBody::Expression(self.lower_expression(&body)),
            None => ArrowBody::Expression(Expression::Unknown(self.unknown(node))),
        };

        ArrowFunction {
            node_id,
            span: span_of(node),
            params,
            return_type,
            body,
            is_async: has_token(node, "async"),
        }
    }

    fn lower_function_body<D: Doc>(&mut self, node: &Node<'_, D>) -> FunctionBody {
        let node_id = self.alloc();
        let statements = named_children(node)
            .iter()
            .map(|child| self.lower_statement(child))
            .collect();
        FunctionBody {
            node_id,
            span: span_of(node),
            statements,
        }
    }

    /// `formal_parameters` into [`Param`]s. `this` parameters are dropped.
    pub(super) fn lower_params<D: Doc>(&mut self, node: &Node<'_, D>) -> Vec<Param> {
        let mut params = Vec::new();
        for child in named_children(node) {
            match child.kind().as_ref() {
                "required_parameter" | "optional_parameter" => {
                    let Some(pattern_node) = child.field("pattern").or_else(|| first_named(&child))
                    else {
                        continue;
                    };
                    if is_kind(&pattern_node, "this") {
                        continue;
                    }

                    let param_id = self.alloc();
                    let pattern = match child.field("value") {
                        Some(value) => {
                            let assignment_id = self.alloc();
                            let left = self.lower_pattern(&pattern_node);
                            let right = self.lower_expression(&value);
                            Pattern::Assignment(Box::new(crate::ast::AssignmentPattern {
                                node_id: assignment_id,
                                span: Span::new(
                                    span_of(&pattern_node).start,
                                    span_of(&value).end,
                                ),
                                left,
                                right,
                            }))
                        }
                        None => self.lower_pattern(&pattern_node),
                    };
                    let type_annotation = child.field("type").map(|ty| self.lower_type(&ty));

                    params.push(Param {
                        node_id: param_id,
                        span: span_of(&child),
                        pattern,
                        type_annotation,
                        optional: is_kind(&child, "optional_parameter"),
                        is_readonly: has_token(&child, "readonly"),
                    });
                }
                "identifier" | "object_pattern" | "array_pattern" | "assignment_pattern"
                | "rest_pattern" => {
                    let param_id = self.alloc();
                    let pattern = self.lower_pattern(&child);
                    params.push(Param {
                        node_id: param_id,
                        span: span_of(&child),
                        pattern,
                        type_annotation: None,
                        optional: false,
                        is_readonly: false,
                    });
                }
                _ => {}
            }
        }
        params
    }

    // ── Classes ────────────────────────────────────────────────────

    pub(super) fn lower_class<D: Doc>(&mut self, node: &Node<'_, D>, is_declaration: bool) -> Class {
        let node_id = self.alloc();
        let name = node
            .field("name")
            .map(|name| self.lower_binding_identifier(&name));

        let super_class = named_children(node)
            .into_iter()
            .find(|child| is_kind(child, "class_heritage"))
            .and_then(|heritage| {
                named_children(&heritage)
                    .into_iter()
                    .find(|clause| is_kind(clause, "extends_clause"))
            })
            .and_then(|clause| clause.field("value").or_else(|| first_named(&clause)))
            .map(|value| self.lower_expression(&value));

        let members = node
            .field("body")
            .map(|body| {
                named_children(&body)
                    .iter()
                    .filter_map(|member| self.lower_class_member(member))
                    .collect()
            })
            .unwrap_or_default();

        Class {
            node_id,
            span: span_of(node),
            name,
            super_class,
            members,
            is_declaration,
        }
    }

    fn lower_class_member<D: Doc>(&mut self, node: &Node<'_, D>) -> Option<ClassMember> {
        let member = match node.kind().as_ref() {
            "method_definition" => {
                let node_id = self.alloc();
                let name_node = node.field("name")?;
                let name_start = name_node.range().start;
                let key = self.lower_property_key(&name_node);
                let kind = if has_token_before(node, "get", name_start) {
                    MethodKind::Get
                } else if has_token_before(node, "set", name_start) {
                    MethodKind::Set
                } else if key.static_name() == Some("constructor") {
                    MethodKind::Constructor
                } else {
                    MethodKind::Method
                };
                let value = self.lower_function(node, FunctionKind::Method);
                ClassMember::Method(MethodDefinition {
                    node_id,
                    span: span_of(node),
                    key,
                    kind,
                    is_static: has_token_before(node, "static", name_start),
                    value: Box::new(value),
                })
            }
            "public_field_definition" | "field_definition" => {
                let node_id = self.alloc();
                let name_node = node.field("name").or_else(|| node.field("property"))?;
                let name_start = name_node.range().start;
                let key = self.lower_property_key(&name_node);
                let type_annotation = node.field("type").map(|ty| self.lower_type(&ty));
                let value = node.field("value").map(|value| self.lower_expression(&value));
                ClassMember::Property(PropertyDefinition {
                    node_id,
                    span: span_of(node),
                    key,
                    is_static: has_token_before(node, "static", name_start),
                    type_annotation,
                    value,
                })
            }
            "class_static_block" => {
                let node_id = self.alloc();
                let body = node
                    .field("body")
                    .or_else(|| first_named(node))
                    .map(|block| {
                        named_children(&block)
                            .iter()
                            .map(|child| self.lower_statement(child))
                            .collect()
                    })
                    .unwrap_or_default();
                ClassMember::StaticBlock(StaticBlock {
                    node_id,
                    span: span_of(node),
                    body,
                })
            }
            _ => ClassMember::Other(self.unknown(node)),
        };
        Some(member)
    }

    // ── Modules ────────────────────────────────────────────────────

    fn lower_import<D: Doc>(&mut self, node: &Node<'_, D>) -> ImportDeclaration {
        let node_id = self.alloc();
        let mut specifiers = Vec::new();

        if let Some(clause) = named_children(node)
            .into_iter()
            .find(|child| is_kind(child, "import_clause"))
        {
            for part in named_children(&clause) {
                match part.kind().as_ref() {
                    "identifier" => {
                        let specifier_id = self.alloc();
                        let local = self.lower_binding_identifier(&part);
                        specifiers.push(ImportSpecifier {
                            node_id: specifier_id,
                            span: span_of(&part),
                            imported: ImportedName::Default,
                            local,
                        });
                    }
                    "namespace_import" => {
                        let Some(ident) = first_named(&part) else {
                            continue;
                        };
                        let specifier_id = self.alloc();
                        let local = self.lower_binding_identifier(&ident);
                        specifiers.push(ImportSpecifier {
                            node_id: specifier_id,
                            span: span_of(&part),
                            imported: ImportedName::Namespace,
                            local,
                        });
                    }
                    "named_imports" => {
                        for specifier in named_children(&part) {
                            if !is_kind(&specifier, "import_specifier") {
                                continue;
                            }
                            let Some(imported) = specifier.field("name") else {
                                continue;
                            };
                            let specifier_id = self.alloc();
                            let local_node = specifier.field("alias").unwrap_or_else(|| imported.clone());
                            let local = self.lower_binding_identifier(&local_node);
                            specifiers.push(ImportSpecifier {
                                node_id: specifier_id,
                                span: span_of(&specifier),
                                imported: ImportedName::Named(unquote(&imported.text())),
                                local,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        let source = self.lower_string_field(node, "source");
        ImportDeclaration {
            node_id,
            span: span_of(node),
            specifiers,
            source,
            type_only: has_token(node, "type"),
        }
    }

    fn lower_export<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        if has_token(node, "default") {
            let node_id = self.alloc();
            let target = node.field("declaration").or_else(|| node.field("value"));
            let declaration = match target {
                Some(target) => match target.kind().as_ref() {
                    "function_declaration" | "generator_function_declaration" => {
                        ExportDefaultKind::Function(Box::new(
                            self.lower_function(&target, FunctionKind::Declaration),
                        ))
                    }
                    "function_expression" | "function" | "generator_function" => {
                        ExportDefaultKind::Function(Box::new(
                            self.lower_function(&target, FunctionKind::Expression),
                        ))
                    }
                    "class_declaration" | "abstract_class_declaration" => {
                        ExportDefaultKind::Class(Box::new(self.lower_class(&target, true)))
                    }
                    "class" => ExportDefaultKind::Class(Box::new(self.lower_class(&target, false))),
                    _ => ExportDefaultKind::Expression(self.lower_expression(&target)),
                },
                None => ExportDefaultKind::Expression(Expression::Unknown(self.unknown(node))),
            };
            return Statement::ExportDefault(Box::new(ExportDefaultDeclaration {
                node_id,
                span: span_of(node),
                declaration,
            }));
        }

        let node_id = self.alloc();
        let declaration = node
            .field("declaration")
            .map(|declaration| self.lower_statement(&declaration));

        let mut specifiers = Vec::new();
        if let Some(clause) = named_children(node)
            .into_iter()
            .find(|child| is_kind(child, "export_clause"))
        {
            for specifier in named_children(&clause) {
                if !is_kind(&specifier, "export_specifier") {
                    continue;
                }
                let Some(local_node) = specifier.field("name") else {
                    continue;
                };
                let specifier_id = self.alloc();
                let local = self.lower_module_export_name(&local_node);
                let exported = specifier
                    .field("alias")
                    .map(|alias| self.lower_module_export_name(&alias));
                specifiers.push(ExportSpecifier {
                    node_id: specifier_id,
                    span: span_of(&specifier),
                    local,
                    exported,
                });
            }
        }

        let source = node
            .field("source")
            .map(|_| self.lower_string_field(node, "source"));
        let export_all = has_token(node, "*")
            || named_children(node)
                .iter()
                .any(|child| is_kind(child, "namespace_export"));

        Statement::ExportNamed(Box::new(ExportNamedDeclaration {
            node_id,
            span: span_of(node),
            declaration,
            specifiers,
            source,
            export_all,
            type_only: has_token(node, "type"),
        }))
    }

    fn lower_module_export_name<D: Doc>(&mut self, node: &Node<'_, D>) -> ModuleExportName {
        ModuleExportName {
            node_id: self.alloc(),
            span: span_of(node),
            name: unquote(&node.text()),
        }
    }

    fn lower_string_field<D: Doc>(&mut self, node: &Node<'_, D>, field: &str) -> StringLiteral {
        match node.field(field) {
            Some(source) => StringLiteral {
                node_id: self.alloc(),
                span: span_of(&source),
                value: unquote(&source.text()),
            },
            None => StringLiteral {
                node_id: self.alloc(),
                span: span_of(node),
                value: String::new(),
            },
        }
    }

    // ── TypeScript declarations ────────────────────────────────────

    fn lower_interface<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let Some(name_node) = node.field("name") else {
            return Statement::Other(self.unknown(node));
        };
        let name = self.lower_binding_identifier(&name_node);

        let extends = named_children(node)
            .into_iter()
            .find(|child| is_kind(child, "extends_type_clause") || is_kind(child, "extends_clause"))
            .map(|clause| {
                named_children(&clause)
                    .iter()
                    .map(|ty| self.lower_type(ty))
                    .collect()
            })
            .unwrap_or_default();

        let body = node
            .field("body")
            .map(|body| self.lower_signatures(&body))
            .unwrap_or_default();

        Statement::Interface(Box::new(TsInterfaceDeclaration {
            node_id,
            span: span_of(node),
            name,
            extends,
            body,
        }))
    }

    fn lower_type_alias<D: Doc>(&mut self, node: &Node<'_, D>) -> Statement {
        let node_id = self.alloc();
        let (Some(name_node), Some(value)) = (node.field("name"), node.field("value")) else {
            return Statement::Other(self.unknown(node));
        };
        let name = self.lower_binding_identifier(&name_node);
        let type_annotation = self.lower_type(&value);

        Statement::TypeAlias(Box::new(TsTypeAliasDeclaration {
            node_id,
            span: span_of(node),
            name,
            type_annotation,
        }))
    }

    // ── Names ──────────────────────────────────────────────────────

    pub(super) fn lower_binding_identifier<D: Doc>(
        &mut self,
        node: &Node<'_, D>,
    ) -> BindingIdentifier {
        BindingIdentifier {
            node_id: self.alloc(),
            span: span_of(node),
            name: node.text().to_string(),
        }
    }

    pub(super) fn lower_identifier_name<D: Doc>(&mut self, node: &Node<'_, D>) -> IdentifierName {
        IdentifierName {
            node_id: self.alloc(),
            span: span_of(node),
            name: node.text().to_string(),
        }
    }
}

