use pretty_assertions::assert_eq;

use super::*;
use crate::parser::{Dialect, ParsedFile, parse};

fn parsed(source: &str) -> ParsedFile {
    parse(source, Dialect::Tsx).unwrap()
}

fn symbol_named<'s>(semantic: &'s Semantic<'_>, name: &str) -> &'s Symbol {
    semantic
        .symbols()
        .iter()
        .find(|symbol| symbol.name == name)
        .unwrap_or_else(|| panic!("no symbol named {name}"))
}

#[test]
fn declares_variables_with_their_kind() {
    let file = parsed("const a = 1;\nlet b = 2;\nvar c = 3;\nfunction d() {}\nclass E {}\n");
    let semantic = Semantic::new(&file.program);

    assert_eq!(symbol_named(&semantic, "a").kind, DeclKind::Const);
    assert_eq!(symbol_named(&semantic, "b").kind, DeclKind::Let);
    assert_eq!(symbol_named(&semantic, "c").kind, DeclKind::Var);
    assert_eq!(symbol_named(&semantic, "d").kind, DeclKind::Function);
    assert_eq!(symbol_named(&semantic, "E").kind, DeclKind::Class);
}

#[test]
fn var_hoists_to_function_scope() {
    let file = parsed("function f() {\n  if (x) {\n    var hoisted = 1;\n    let local = 2;\n  }\n}\n");
    let semantic = Semantic::new(&file.program);

    let hoisted = symbol_named(&semantic, "hoisted");
    let local = symbol_named(&semantic, "local");
    assert_eq!(semantic.scope(hoisted.scope).kind, ScopeKind::Function);
    assert_eq!(semantic.scope(local.scope).kind, ScopeKind::Block);
}

#[test]
fn function_declaration_name_binds_in_enclosing_scope() {
    let file = parsed("function outer() {}\nouter();\n");
    let semantic = Semantic::new(&file.program);

    let outer = symbol_named(&semantic, "outer");
    assert_eq!(semantic.scope(outer.scope).kind, ScopeKind::Module);
    assert_eq!(outer.references().count(), 1);
}

#[test]
fn resolves_params_and_shadowing() {
    let file = parsed("const value = 1;\nfunction f(value: number) {\n  return value;\n}\n");
    let semantic = Semantic::new(&file.program);

    let param = semantic
        .symbols()
        .iter()
        .find(|symbol| symbol.name == "value" && symbol.kind == DeclKind::Param)
        .unwrap();
    assert_eq!(param.references().count(), 1);

    let module_value = semantic
        .symbols()
        .iter()
        .find(|symbol| symbol.name == "value" && symbol.kind == DeclKind::Const)
        .unwrap();
    assert_eq!(module_value.references().count(), 0);
}

#[test]
fn classifies_reads_and_writes() {
    let file = parsed("let count = 0;\ncount = 1;\ncount += 2;\ncount++;\nuse(count);\n");
    let semantic = Semantic::new(&file.program);

    let count = semantic.lookup(ScopeId::new(0), "count").unwrap();
    let flags: Vec<ReferenceFlags> = semantic
        .references_to(count)
        .map(|reference| reference.flags)
        .collect();
    assert_eq!(
        flags,
        vec![
            ReferenceFlags::WRITE,
            ReferenceFlags::READ_WRITE,
            ReferenceFlags::READ_WRITE,
            ReferenceFlags::READ,
        ]
    );
}

#[test]
fn destructuring_assignment_targets_are_writes() {
    let file = parsed("let a = 1;\nlet b = 2;\n[a, b] = [b, a];\n");
    let semantic = Semantic::new(&file.program);

    let a = semantic.lookup(ScopeId::new(0), "a").unwrap();
    let writes = semantic
        .references_to(a)
        .filter(|reference| reference.is_write())
        .count();
    assert_eq!(writes, 1);
}

#[test]
fn jsx_component_names_are_references() {
    let file = parsed("const Card = () => null;\nexport const App = () => <Card><div /></Card>;\n");
    let semantic = Semantic::new(&file.program);

    let card = semantic.lookup(ScopeId::new(0), "Card").unwrap();
    assert_eq!(semantic.references_to(card).count(), 1);
    assert!(semantic.references().all(|reference| reference.name != "div"));
}

#[test]
fn type_names_live_in_their_own_namespace() {
    let file = parsed("interface Props { a: string }\nconst Props = 1;\n");
    let semantic = Semantic::new(&file.program);

    let module = ScopeId::new(0);
    let value = semantic.lookup(module, "Props").unwrap();
    let ty = semantic.lookup_type(module, "Props").unwrap();
    assert_ne!(value, ty);
    assert_eq!(semantic.symbol(ty).kind, DeclKind::Type);
}

#[test]
fn parents_and_enclosing_function() {
    let file = parsed("function f() {\n  g();\n}\n");
    let semantic = Semantic::new(&file.program);

    let call = semantic
        .nodes()
        .find(|kind| matches!(kind, AstKind::CallExpression(_)))
        .unwrap();
    let function = semantic.enclosing_function(call.node_id()).unwrap();
    assert!(matches!(function, AstKind::Function(_)));
    assert!(semantic.is_within(call.node_id(), function.node_id()));
}

#[test]
fn imports_declare_module_symbols() {
    let file = parsed("import React, { useState as useLocal } from 'react';\nuseLocal(0);\n");
    let semantic = Semantic::new(&file.program);

    let local = symbol_named(&semantic, "useLocal");
    assert_eq!(local.kind, DeclKind::Import);
    assert!(matches!(
        semantic.declaration(semantic.lookup(ScopeId::new(0), "useLocal").unwrap()),
        Some(AstKind::ImportSpecifier(_))
    ));
    assert_eq!(local.references().count(), 1);
    assert_eq!(symbol_named(&semantic, "React").kind, DeclKind::Import);
}
