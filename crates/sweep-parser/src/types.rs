//! Optional type-resolution service.
//!
//! A [`TypeService`] answers narrow questions about the resolved type of a
//! node. Analyses use it only as a fallback when the annotation alone is
//! inconclusive, and must treat `None` as "no opinion".

use serde::Serialize;

use crate::ast::NodeId;

/// What a type checker knows about one resolved type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    /// Human-readable type text (`string[]`, `Promise<void>`).
    pub text: String,
    /// Array or tuple.
    pub is_array_like: bool,
    pub is_boolean_like: bool,
    pub is_primitive: bool,
    /// `readonly T[]`, `Readonly<T>`, `ReadonlyMap<…>` and similar.
    pub is_readonly: bool,
    pub call_signatures: usize,
    pub construct_signatures: usize,
    /// Return types of the call signatures, in declaration order.
    pub call_returns: Vec<ResolvedType>,
    pub union: Vec<ResolvedType>,
    pub intersection: Vec<ResolvedType>,
    pub symbol_name: Option<String>,
    pub alias_name: Option<String>,
    /// Names along the declaration tree: alias targets and interface bases,
    /// transitively.
    pub heritage: Vec<String>,
}

impl ResolvedType {
    #[must_use]
    pub fn is_function_like(&self) -> bool {
        self.call_signatures > 0 || self.construct_signatures > 0
    }

    /// Existential check over union members (the type itself when not a union).
    pub fn any_member(&self, predicate: &impl Fn(&Self) -> bool) -> bool {
        if self.union.is_empty() {
            predicate(self)
        } else {
            self.union.iter().any(|member| member.any_member(predicate))
        }
    }

    /// Universal check over intersection and union constituents.
    pub fn every_constituent(&self, predicate: &impl Fn(&Self) -> bool) -> bool {
        if !self.intersection.is_empty() {
            return self
                .intersection
                .iter()
                .all(|member| member.every_constituent(predicate));
        }
        if !self.union.is_empty() {
            return self
                .union
                .iter()
                .all(|member| member.every_constituent(predicate));
        }
        predicate(self)
    }

    /// Whether the symbol, alias or any heritage name is one of `names`.
    #[must_use]
    pub fn is_rooted_at(&self, names: &[&str]) -> bool {
        self.symbol_name
            .iter()
            .chain(self.alias_name.iter())
            .chain(self.heritage.iter())
            .any(|name| names.contains(&name.as_str()))
    }
}

pub trait TypeService: Send + Sync {
    /// Resolved type of the expression, binding or annotation at `node`.
    fn type_of(&self, node: NodeId) -> Option<ResolvedType>;
}

/// The service used when no type checker is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTypeService;

impl TypeService for NoTypeService {
    fn type_of(&self, _node: NodeId) -> Option<ResolvedType> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(text: &str) -> ResolvedType {
        ResolvedType {
            text: text.to_string(),
            ..ResolvedType::default()
        }
    }

    #[test]
    fn no_type_service_has_no_opinion() {
        assert_eq!(NoTypeService.type_of(NodeId::new(0)), None);
    }

    #[test]
    fn union_membership_is_existential() {
        let union = ResolvedType {
            union: vec![
                named("string"),
                ResolvedType {
                    is_array_like: true,
                    ..named("string[]")
                },
            ],
            ..named("string | string[]")
        };
        assert!(union.any_member(&|member| member.is_array_like));
        assert!(!union.every_constituent(&|member| member.is_array_like));
    }

    #[test]
    fn intersection_readonly_is_universal() {
        let both = ResolvedType {
            intersection: vec![
                ResolvedType {
                    is_readonly: true,
                    ..named("ReadonlyArray<A>")
                },
                ResolvedType {
                    is_primitive: true,
                    is_readonly: true,
                    ..named("string")
                },
            ],
            ..named("ReadonlyArray<A> & string")
        };
        assert!(both.every_constituent(&|member| member.is_readonly));
    }

    #[test]
    fn heritage_roots() {
        let ty = ResolvedType {
            heritage: vec!["ReactElement".to_string()],
            ..named("MyElement")
        };
        assert!(ty.is_rooted_at(&["ReactNode", "ReactElement"]));
        assert!(!ty.is_rooted_at(&["ComponentType"]));
    }
}
