//! Declared prop contracts: interfaces and type aliases whose members
//! describe a component's props.

use sweep_core::Span;
use sweep_parser::Semantic;
use sweep_parser::ast::{AstKind, BindingIdentifier, TsPropertySignature, TsSignature, TsType};

use crate::guard::CycleGuard;
use crate::shapes::AliasTable;

/// An interface body, or a type alias whose right-hand side is written as
/// an object type.
#[derive(Debug, Clone)]
pub struct Contract<'a> {
    pub name: &'a BindingIdentifier,
    /// The whole declaration.
    pub span: Span,
    pub members: Vec<&'a TsSignature>,
}

impl<'a> Contract<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.name.name
    }

    /// Named `*Props`.
    #[must_use]
    pub fn is_props(&self) -> bool {
        is_props_name(self.name())
    }

    /// Property signatures, skipping methods, call and index signatures.
    pub fn properties(&self) -> impl Iterator<Item = &'a TsPropertySignature> + '_ {
        self.members.iter().filter_map(|member| match member {
            TsSignature::Property(property) => Some(property),
            _ => None,
        })
    }
}

#[must_use]
pub fn is_props_name(name: &str) -> bool {
    name.ends_with("Props")
}

/// Every interface declaration and every `type X = { … }` alias, in source
/// order. Merged interface declarations stay separate.
#[must_use]
pub fn contracts<'a>(semantic: &Semantic<'a>) -> Vec<Contract<'a>> {
    semantic
        .nodes()
        .filter_map(|node| match node {
            AstKind::TsInterfaceDeclaration(interface) => Some(Contract {
                name: &interface.name,
                span: interface.span,
                members: interface.body.iter().collect(),
            }),
            AstKind::TsTypeAliasDeclaration(alias) => match &alias.type_annotation {
                TsType::TypeLiteral(literal) => Some(Contract {
                    name: &alias.name,
                    span: alias.span,
                    members: literal.members.iter().collect(),
                }),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// `*Props` contracts, including aliases composed from object types:
/// `type ButtonProps = BaseProps & { size: Size }` contributes the members
/// of every type literal it reaches through unions, intersections,
/// wrappers and local aliases.
#[must_use]
pub fn props_contracts<'a>(semantic: &Semantic<'a>, aliases: &AliasTable<'a>) -> Vec<Contract<'a>> {
    semantic
        .nodes()
        .filter_map(|node| match node {
            AstKind::TsInterfaceDeclaration(interface) if is_props_name(&interface.name.name) => {
                Some(Contract {
                    name: &interface.name,
                    span: interface.span,
                    members: interface.body.iter().collect(),
                })
            }
            AstKind::TsTypeAliasDeclaration(alias) if is_props_name(&alias.name.name) => {
                let mut members = Vec::new();
                let mut guard = CycleGuard::new();
                guard.enter(alias.name.name.clone());
                literal_members(&alias.type_annotation, aliases, &mut guard, &mut members);
                Some(Contract {
                    name: &alias.name,
                    span: alias.span,
                    members,
                })
            }
            _ => None,
        })
        .collect()
}

fn literal_members<'a>(
    ty: &'a TsType,
    aliases: &AliasTable<'a>,
    guard: &mut CycleGuard<String>,
    out: &mut Vec<&'a TsSignature>,
) {
    match ty {
        TsType::TypeLiteral(literal) => out.extend(literal.members.iter()),
        TsType::Union(union) => {
            for member in &union.types {
                literal_members(member, aliases, guard, out);
            }
        }
        TsType::Intersection(intersection) => {
            for member in &intersection.types {
                literal_members(member, aliases, guard, out);
            }
        }
        TsType::Parenthesized(inner) => literal_members(&inner.type_annotation, aliases, guard, out),
        TsType::Optional(inner) => literal_members(&inner.type_annotation, aliases, guard, out),
        TsType::Operator(inner) => literal_members(&inner.type_annotation, aliases, guard, out),
        TsType::Reference(reference) if !reference.name.is_qualified() => {
            let name = reference.name.last();
            if let Some(target) = aliases.alias(name) {
                guard.guarded(name.to_string(), (), |guard| {
                    literal_members(target, aliases, guard, out);
                });
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sweep_parser::{Dialect, parse};

    use super::*;

    fn member_names(contract: &Contract<'_>) -> Vec<String> {
        contract
            .members
            .iter()
            .filter_map(|member| member.key_name().map(str::to_string))
            .collect()
    }

    #[test]
    fn interfaces_and_literal_aliases_in_source_order() {
        let parsed = parse(
            "interface A { x: string } type B = { y: number }; type C = string; interface A { z: 1 }",
            Dialect::Tsx,
        )
        .unwrap();
        let semantic = Semantic::new(&parsed.program);
        let found: Vec<_> = contracts(&semantic)
            .iter()
            .map(|contract| (contract.name().to_string(), member_names(contract)))
            .collect();
        assert_eq!(
            found,
            vec![
                ("A".to_string(), vec!["x".to_string()]),
                ("B".to_string(), vec!["y".to_string()]),
                ("A".to_string(), vec!["z".to_string()]),
            ]
        );
    }

    #[test]
    fn props_aliases_follow_composition() {
        let parsed = parse(
            r"
            type Base = { id: string };
            type ButtonProps = Base & ({ size: number } | { tone: string });
            type LoopProps = LoopProps & { a: 1 };
            interface Other { b: 1 }
            ",
            Dialect::Tsx,
        )
        .unwrap();
        let semantic = Semantic::new(&parsed.program);
        let aliases = AliasTable::collect(&semantic);
        let found: Vec<_> = props_contracts(&semantic, &aliases)
            .iter()
            .map(|contract| (contract.name().to_string(), member_names(contract)))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    "ButtonProps".to_string(),
                    vec!["id".to_string(), "size".to_string(), "tone".to_string()]
                ),
                ("LoopProps".to_string(), vec!["a".to_string()]),
            ]
        );
    }
}
