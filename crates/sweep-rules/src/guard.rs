//! Cycle guard shared by alias resolution and graph walks.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks the keys currently on the resolution path.
///
/// Re-entering a key that is still in progress is refused, which is how
/// mutually recursive aliases and cyclic component graphs terminate.
#[derive(Debug)]
pub struct CycleGuard<K> {
    active: HashSet<K>,
}

impl<K> Default for CycleGuard<K> {
    fn default() -> Self {
        Self {
            active: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> CycleGuard<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as in progress. Returns `false` when it already is.
    pub fn enter(&mut self, key: K) -> bool {
        self.active.insert(key)
    }

    pub fn leave(&mut self, key: &K) {
        self.active.remove(key);
    }

    #[must_use]
    pub fn is_active(&self, key: &K) -> bool {
        self.active.contains(key)
    }

    /// Run `body` with `key` marked in progress, or return `on_cycle` when
    /// the key is already on the path.
    pub fn guarded<R>(&mut self, key: K, on_cycle: R, body: impl FnOnce(&mut Self) -> R) -> R {
        if !self.enter(key.clone()) {
            return on_cycle;
        }
        let result = body(self);
        self.leave(&key);
        result
    }
}
