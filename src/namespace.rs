//! # Namespace Module
//!
//! Splits an endpoint's dotted qualified name into its module namespace and
//! leaf method name. `"indices.split"` becomes namespace `["indices"]` with
//! method `split`; a single-segment name such as `"search"` has an empty
//! namespace.

use crate::error::GenError;

/// A qualified endpoint name split into namespace and method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// All segments but the last
    pub namespace: Vec<String>,
    /// The final segment, naming the generated operation
    pub method: String,
}

impl QualifiedName {
    /// The dotted form, usable as a registry key
    pub fn fqn(&self) -> String {
        let mut segments = self.namespace.clone();
        segments.push(self.method.clone());
        segments.join(".")
    }
}

/// Split a dotted qualified name
///
/// No validation beyond non-empty input.
///
/// # Errors
///
/// Returns [`GenError::InvalidName`] when `name` is empty.
pub fn split_qualified(name: &str) -> Result<QualifiedName, GenError> {
    if name.is_empty() {
        return Err(GenError::InvalidName {
            name: name.to_string(),
        });
    }
    let mut segments: Vec<String> = name.split('.').map(str::to_string).collect();
    // split() on a non-empty string always yields at least one segment
    let method = segments.pop().unwrap_or_default();
    Ok(QualifiedName {
        namespace: segments,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_nested_namespace() {
        let q = split_qualified("cat.indices.help").unwrap();
        assert_eq!(q.namespace, vec!["cat".to_string(), "indices".to_string()]);
        assert_eq!(q.method, "help");
        assert_eq!(q.fqn(), "cat.indices.help");
    }

    #[test]
    fn single_segment_has_empty_namespace() {
        let q = split_qualified("search").unwrap();
        assert!(q.namespace.is_empty());
        assert_eq!(q.method, "search");
    }

    #[test]
    fn rejects_empty_name() {
        let err = split_qualified("").unwrap_err();
        assert!(matches!(err, GenError::InvalidName { .. }));
    }
}
