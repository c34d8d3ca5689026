use std::collections::HashSet;
use std::hash::Hash;

/// One-shot triggers: each key fires at most once for the guard's lifetime.
#[derive(Debug, Clone)]
pub struct RevealGuard<K> {
    fired: HashSet<K>,
}

impl<K> Default for RevealGuard<K> {
    fn default() -> Self {
        Self {
            fired: HashSet::new(),
        }
    }
}

impl<K: Hash + Eq> RevealGuard<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `key` is seen, false afterwards.
    pub fn trigger(&mut self, key: K) -> bool {
        self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_key() {
        let mut guard = RevealGuard::new();
        assert!(guard.trigger("hero-counter"));
        assert!(!guard.trigger("hero-counter"));
        assert!(guard.trigger("stats"));
        assert!(guard.has_fired(&"hero-counter"));
    }
}
