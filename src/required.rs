//! # Required Module
//!
//! Computes which caller-supplied values are mandatory for an endpoint.
//!
//! A placeholder that occurs in *every* URL template variant is structurally
//! required regardless of which variant the canonical template picks; one
//! that occurs in only some variants is optional and, when supplied, selects
//! among variants at call time. The literal token `body` joins the set when
//! the spec marks the request body required.

use std::collections::BTreeSet;

use crate::error::GenError;
use crate::paths::{collect_parts, PathAlternative};

/// Name of the request-body pseudo-argument
pub const BODY_ARG: &str = "body";

/// The minimal caller-supplied argument set for one endpoint
///
/// Computed once per endpoint, immutable thereafter. Empty is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredArguments {
    /// Part names in canonical-alternative segment order, `body` last
    names: Vec<String>,
    parts: BTreeSet<String>,
}

impl RequiredArguments {
    /// All required names in validation order (`body` last when present)
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Only the path-part subset, without `body`
    pub fn parts(&self) -> &BTreeSet<String> {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Compute [`RequiredArguments`] for a set of resolved alternatives
///
/// The path-part subset is the intersection of placeholder sets across all
/// alternatives; ordering follows the first alternative's segment order so
/// generated validation reads in path order.
pub fn required_arguments(
    alternatives: &[PathAlternative],
    body_required: bool,
) -> RequiredArguments {
    let total = alternatives.len();
    let parts: BTreeSet<String> = collect_parts(alternatives)
        .into_iter()
        .filter(|part| part.occurs_in.len() == total)
        .map(|part| part.name)
        .collect();

    let mut names: Vec<String> = Vec::new();
    for name in alternatives
        .first()
        .map(|alt| alt.part_order())
        .unwrap_or_default()
    {
        if parts.contains(&name) && !names.contains(&name) {
            names.push(name);
        }
    }
    if body_required {
        names.push(BODY_ARG.to_string());
    }
    RequiredArguments { names, parts }
}

/// Reject required names that collide with declared query parameters
///
/// A collision would make the identifier ambiguous in the generated
/// operation, so the endpoint aborts with [`GenError::SpecConflict`] instead
/// of silently resolving it.
pub fn check_conflicts(
    endpoint: &str,
    required: &RequiredArguments,
    params: &BTreeSet<String>,
) -> Result<(), GenError> {
    for name in required.names() {
        if params.contains(name) {
            return Err(GenError::SpecConflict {
                endpoint: endpoint.to_string(),
                name: name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::resolve_alternatives;

    fn alts(paths: &[&str]) -> Vec<PathAlternative> {
        resolve_alternatives(&paths.iter().map(|p| p.to_string()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn single_alternative_requires_all_parts() {
        let required = required_arguments(&alts(&["/{index}/_split/{target}"]), false);
        assert_eq!(
            required.names(),
            &["index".to_string(), "target".to_string()]
        );
    }

    #[test]
    fn intersection_not_union() {
        let required = required_arguments(&alts(&["/{a}/{b}", "/{a}"]), false);
        assert_eq!(required.names(), &["a".to_string()]);
        assert_eq!(required.parts(), &BTreeSet::from(["a".to_string()]));
    }

    #[test]
    fn body_joins_when_required() {
        let required = required_arguments(&alts(&["/{index}/_split/{target}"]), true);
        assert_eq!(
            required.names(),
            &[
                "index".to_string(),
                "target".to_string(),
                BODY_ARG.to_string()
            ]
        );
        // body is not a path part
        assert!(!required.parts().contains(BODY_ARG));
    }

    #[test]
    fn zero_placeholders_yield_empty_set() {
        let required = required_arguments(&alts(&["/_cluster/health"]), false);
        assert!(required.is_empty());
    }

    #[test]
    fn conflict_with_query_param_is_rejected() {
        let required = required_arguments(&alts(&["/{timeout}"]), false);
        let params = BTreeSet::from(["timeout".to_string()]);
        let err = check_conflicts("bad.endpoint", &required, &params).unwrap_err();
        assert!(matches!(err, GenError::SpecConflict { ref name, .. } if name == "timeout"));
    }
}
