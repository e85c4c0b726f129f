//! # Paths Module
//!
//! Resolves an endpoint's raw URL templates into typed segment sequences.
//!
//! Each template is split on `/`; empty segments are discarded and the rest
//! are classified as literals (copied verbatim) or placeholders (`{name}`,
//! rewritten into the canonical marker form with the delimiters stripped).
//! The resolver also collects, per placeholder, the set of alternatives it
//! occurs in, which drives required-argument analysis, and selects the
//! canonical alternative that code generation renders.

use std::collections::BTreeSet;

use crate::error::GenError;

/// One classified segment of a URL template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Copied verbatim into the generated path
    Literal(String),
    /// A named path variable, substituted at call time
    Part(String),
}

/// One resolved URL template variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAlternative {
    /// The template as declared in the spec
    pub raw: String,
    /// Ordered classified segments
    pub segments: Vec<PathSegment>,
    /// Names of the placeholders this variant contains
    pub parts: BTreeSet<String>,
}

impl PathAlternative {
    /// Render the canonical `{name}`-marker template, e.g. `/{index}/_split/{target}`
    pub fn template(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Literal(lit) => out.push_str(lit),
                PathSegment::Part(name) => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
        }
        out
    }

    /// Placeholder names in segment order
    pub fn part_order(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                PathSegment::Part(name) => Some(name.clone()),
                PathSegment::Literal(_) => None,
            })
            .collect()
    }
}

/// A named path variable and the alternatives it appears in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPart {
    pub name: String,
    /// Indices into the alternative list
    pub occurs_in: BTreeSet<usize>,
}

fn valid_part_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse one raw template into a [`PathAlternative`]
///
/// # Errors
///
/// Returns [`GenError::MalformedSpec`] when a segment contains a brace but
/// is not a well-formed `{identifier}` placeholder.
pub fn parse_template(raw: &str) -> Result<PathAlternative, GenError> {
    let mut segments = Vec::new();
    let mut parts = BTreeSet::new();
    for segment in raw.split('/').filter(|s| !s.trim().is_empty()) {
        if segment.starts_with('{') && segment.ends_with('}') && segment.len() > 2 {
            let name = &segment[1..segment.len() - 1];
            if !valid_part_name(name) {
                return Err(GenError::MalformedSpec {
                    reason: format!("invalid placeholder name '{}' in '{}'", name, raw),
                });
            }
            parts.insert(name.to_string());
            segments.push(PathSegment::Part(name.to_string()));
        } else if segment.contains('{') || segment.contains('}') {
            return Err(GenError::MalformedSpec {
                reason: format!("malformed placeholder segment '{}' in '{}'", segment, raw),
            });
        } else {
            segments.push(PathSegment::Literal(segment.to_string()));
        }
    }
    Ok(PathAlternative {
        raw: raw.to_string(),
        segments,
        parts,
    })
}

/// Resolve every declared template, preserving declaration order
pub fn resolve_alternatives(raw_paths: &[String]) -> Result<Vec<PathAlternative>, GenError> {
    raw_paths.iter().map(|raw| parse_template(raw)).collect()
}

/// Collect each placeholder with the set of alternatives it occurs in
pub fn collect_parts(alternatives: &[PathAlternative]) -> Vec<PlaceholderPart> {
    let mut parts: Vec<PlaceholderPart> = Vec::new();
    for (index, alternative) in alternatives.iter().enumerate() {
        for segment in &alternative.segments {
            let PathSegment::Part(name) = segment else {
                continue;
            };
            if let Some(existing) = parts.iter_mut().find(|p| &p.name == name) {
                existing.occurs_in.insert(index);
            } else {
                parts.push(PlaceholderPart {
                    name: name.clone(),
                    occurs_in: BTreeSet::from([index]),
                });
            }
        }
    }
    parts
}

/// Choose the canonical alternative for code generation
///
/// The first alternative whose placeholder set is a superset of the computed
/// required-parts set wins; otherwise the first alternative. Selection is
/// stable and never based on length or specificity.
pub fn canonical_index(alternatives: &[PathAlternative], required_parts: &BTreeSet<String>) -> usize {
    alternatives
        .iter()
        .position(|alt| required_parts.iter().all(|p| alt.parts.contains(p)))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_literals_and_parts() {
        let alt = parse_template("/{index}/_split/{target}").unwrap();
        assert_eq!(
            alt.segments,
            vec![
                PathSegment::Part("index".into()),
                PathSegment::Literal("_split".into()),
                PathSegment::Part("target".into()),
            ]
        );
        assert_eq!(alt.template(), "/{index}/_split/{target}");
        assert_eq!(alt.part_order(), vec!["index".to_string(), "target".to_string()]);
    }

    #[test]
    fn discards_empty_segments() {
        let alt = parse_template("//_cat//indices/").unwrap();
        assert_eq!(alt.segments.len(), 2);
        assert_eq!(alt.template(), "/_cat/indices");
    }

    #[test]
    fn root_path_resolves_to_slash() {
        let alt = parse_template("/").unwrap();
        assert!(alt.segments.is_empty());
        assert_eq!(alt.template(), "/");
    }

    #[test]
    fn rejects_malformed_placeholder() {
        assert!(parse_template("/{index").is_err());
        assert!(parse_template("/in{dex}").is_err());
        assert!(parse_template("/{}").is_err());
        assert!(parse_template("/{bad-name}").is_err());
    }

    #[test]
    fn collects_occurrences_across_alternatives() {
        let alts = resolve_alternatives(&[
            "/_stats".to_string(),
            "/_stats/{metric}".to_string(),
            "/{index}/_stats/{metric}".to_string(),
        ])
        .unwrap();
        let parts = collect_parts(&alts);
        let metric = parts.iter().find(|p| p.name == "metric").unwrap();
        assert_eq!(metric.occurs_in, BTreeSet::from([1, 2]));
        let index = parts.iter().find(|p| p.name == "index").unwrap();
        assert_eq!(index.occurs_in, BTreeSet::from([2]));
    }

    #[test]
    fn canonical_prefers_first_superset() {
        let alts = resolve_alternatives(&[
            "/_stats".to_string(),
            "/{index}/_stats".to_string(),
        ])
        .unwrap();
        // No required parts: the first alternative already qualifies.
        assert_eq!(canonical_index(&alts, &BTreeSet::new()), 0);
        // With `index` required, the first alternative no longer matches.
        let required = BTreeSet::from(["index".to_string()]);
        assert_eq!(canonical_index(&alts, &required), 1);
    }
}
