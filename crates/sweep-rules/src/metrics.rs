//! Component graphs and chain metrics over them.

use std::collections::HashMap;

use crate::guard::CycleGuard;

/// Directed graph keyed by component name, in registration order.
///
/// Registering a name again replaces its edges but keeps its position.
#[derive(Debug, Default, Clone)]
pub struct ComponentGraph {
    names: Vec<String>,
    edges: HashMap<String, Vec<String>>,
}

impl ComponentGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `name` with edges to `children` (duplicates dropped,
    /// first occurrence wins).
    pub fn insert(&mut self, name: impl Into<String>, children: impl IntoIterator<Item = String>) {
        let name = name.into();
        let mut unique: Vec<String> = Vec::new();
        for child in children {
            if !unique.contains(&child) {
                unique.push(child);
            }
        }
        if !self.edges.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.edges.insert(name, unique);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    #[must_use]
    pub fn children(&self, name: &str) -> &[String] {
        self.edges.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Longest chain starting at every registered component, in
    /// registration order, sharing one memo.
    #[must_use]
    pub fn longest_chains(&self) -> Vec<(&str, Vec<String>)> {
        let mut memo = HashMap::new();
        self.names()
            .map(|name| {
                let chain = self.longest_chain(name, &mut memo, &mut CycleGuard::new());
                (name, chain)
            })
            .collect()
    }

    /// Longest path of registered components starting at `name`.
    ///
    /// A component re-entered while still on the current path is a
    /// length-1 stub, so `A -> B -> A` yields `[A, B, A]` for `A`. Stubs are
    /// never memoized; a chain computed while an ancestor was in progress is
    /// memoized as computed, which keeps the outcome tied to registration
    /// order.
    pub fn longest_chain(
        &self,
        name: &str,
        memo: &mut HashMap<String, Vec<String>>,
        guard: &mut CycleGuard<String>,
    ) -> Vec<String> {
        if let Some(cached) = memo.get(name) {
            return cached.clone();
        }
        let chain = guard.guarded(name.to_string(), None, |guard| {
            let mut best: Vec<String> = Vec::new();
            for child in self.children(name) {
                if !self.contains(child) {
                    continue;
                }
                let candidate = self.longest_chain(child, memo, guard);
                if candidate.len() > best.len() {
                    best = candidate;
                }
            }
            let mut full = Vec::with_capacity(best.len() + 1);
            full.push(name.to_string());
            full.extend(best);
            Some(full)
        });
        let Some(chain) = chain else {
            return vec![name.to_string()];
        };
        memo.insert(name.to_string(), chain.clone());
        chain
    }

    /// Components whose chain is deeper than `allowed`, deepest first (ties
    /// by name), keeping only the roots: a flagged component that is a
    /// direct child of a deeper flagged component is dropped.
    #[must_use]
    pub fn flagged_roots(&self, allowed: usize) -> Vec<FlaggedChain> {
        let mut flagged: Vec<FlaggedChain> = self
            .longest_chains()
            .into_iter()
            .filter(|(_, chain)| chain.len() > allowed)
            .map(|(name, chain)| FlaggedChain {
                name: name.to_string(),
                chain,
            })
            .collect();
        flagged.sort_by(|left, right| {
            right
                .depth()
                .cmp(&left.depth())
                .then_with(|| left.name.cmp(&right.name))
        });

        let suppressed: Vec<bool> = flagged
            .iter()
            .map(|candidate| {
                flagged.iter().any(|parent| {
                    parent.name != candidate.name
                        && parent.depth() > candidate.depth()
                        && self.children(&parent.name).contains(&candidate.name)
                })
            })
            .collect();
        flagged
            .into_iter()
            .zip(suppressed)
            .filter_map(|(entry, suppressed)| (!suppressed).then_some(entry))
            .collect()
    }
}

/// A component whose chain exceeds the allowed depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedChain {
    pub name: String,
    pub chain: Vec<String>,
}

impl FlaggedChain {
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// The component the chain hands off to first, or the root itself.
    #[must_use]
    pub fn next_handoff(&self) -> &str {
        self.chain.get(1).unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> ComponentGraph {
        let mut graph = ComponentGraph::new();
        for (name, children) in edges {
            graph.insert(*name, children.iter().map(|child| (*child).to_string()));
        }
        graph
    }

    fn chain_of(graph: &ComponentGraph, name: &str) -> Vec<String> {
        graph
            .longest_chains()
            .into_iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, chain)| chain)
            .unwrap()
    }

    #[test]
    fn picks_the_longest_branch() {
        let graph = graph(&[("A", &["B", "C"]), ("B", &[]), ("C", &["D"]), ("D", &[])]);
        assert_eq!(chain_of(&graph, "A"), vec!["A", "C", "D"]);
        assert_eq!(chain_of(&graph, "B"), vec!["B"]);
    }

    #[test]
    fn unknown_children_are_ignored() {
        let graph = graph(&[("A", &["Button"])]);
        assert_eq!(chain_of(&graph, "A"), vec!["A"]);
    }

    #[test]
    fn cycles_terminate_deterministically() {
        let graph = graph(&[("A", &["B"]), ("B", &["A"])]);
        assert_eq!(chain_of(&graph, "A"), vec!["A", "B", "A"]);
        assert_eq!(chain_of(&graph, "B"), vec!["B", "A"]);

        let flagged = graph.flagged_roots(2);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].name, "A");
        assert_eq!(flagged[0].depth(), 3);
        assert_eq!(flagged[0].next_handoff(), "B");

        let names: Vec<_> = graph.flagged_roots(1).into_iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn self_loop_stub_adds_one() {
        let graph = graph(&[("A", &["A"])]);
        assert_eq!(chain_of(&graph, "A"), vec!["A", "A"]);
    }

    #[test]
    fn only_the_deepest_ancestor_is_flagged() {
        let graph = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["D"]), ("D", &[])]);
        let flagged = graph.flagged_roots(2);
        let names: Vec<_> = flagged.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
        assert_eq!(flagged[0].chain, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn separate_chains_are_each_reported_deepest_first() {
        let graph = graph(&[
            ("Z", &["Y"]),
            ("Y", &[]),
            ("A", &["B"]),
            ("B", &["C"]),
            ("C", &[]),
        ]);
        let names: Vec<_> = graph
            .flagged_roots(1)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["A", "Z"]);
    }

    #[test]
    fn reinsert_keeps_position_and_replaces_edges() {
        let mut graph = graph(&[("A", &["B"]), ("B", &[])]);
        graph.insert("A", Vec::new());
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(graph.children("A").is_empty());
    }
}
