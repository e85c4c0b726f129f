//! # Registry Module
//!
//! The per-run parameter registry: which query parameters are valid for each
//! generated operation. One registry value is constructed per generation run
//! and passed by reference to model building and emission; keys are fully
//! qualified names so endpoints sharing a leaf method name under different
//! namespaces never collide.

use std::collections::{BTreeSet, HashMap};

use crate::error::GenError;

/// Write-once map from fully qualified endpoint name to allowed query params
#[derive(Debug, Default)]
pub struct ParamsRegistry {
    entries: HashMap<String, BTreeSet<String>>,
}

impl ParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent registration
    ///
    /// # Errors
    ///
    /// Returns [`GenError::DuplicateRegistration`] when `fqn` is already
    /// registered in this run; the first registration wins.
    pub fn register(&mut self, fqn: &str, params: &BTreeSet<String>) -> Result<(), GenError> {
        match self.entries.entry(fqn.to_string()) {
            std::collections::hash_map::Entry::Occupied(_) => {
                Err(GenError::DuplicateRegistration {
                    endpoint: fqn.to_string(),
                })
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(params.clone());
                Ok(())
            }
        }
    }

    /// Look up the allowed parameters for an endpoint
    pub fn get(&self, fqn: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(fqn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn same_leaf_under_different_namespaces_is_fine() {
        let mut registry = ParamsRegistry::new();
        registry
            .register("cluster.stats", &params(&["timeout"]))
            .unwrap();
        registry
            .register("indices.stats", &params(&["level"]))
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("cluster.stats").unwrap().contains("timeout"));
        assert!(registry.get("indices.stats").unwrap().contains("level"));
    }

    #[test]
    fn duplicate_fqn_fails_and_first_wins() {
        let mut registry = ParamsRegistry::new();
        registry.register("search", &params(&["q"])).unwrap();
        let err = registry.register("search", &params(&["size"])).unwrap_err();
        assert!(matches!(err, GenError::DuplicateRegistration { .. }));
        assert!(registry.get("search").unwrap().contains("q"));
        assert!(!registry.get("search").unwrap().contains("size"));
    }
}
