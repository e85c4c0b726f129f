use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::types::{EndpointSpec, HttpMethod};
use crate::error::GenError;

/// Raw endpoint document body, shared by both historical spec shapes
#[derive(Debug, Deserialize)]
struct RawEndpoint {
    documentation: Option<RawDocumentation>,
    /// Endpoint-level method list (legacy shape)
    #[serde(default)]
    methods: Vec<String>,
    url: Option<RawUrl>,
    #[serde(default)]
    params: Option<RawParams>,
    body: Option<RawBody>,
}

/// `documentation` is either a bare URL string or `{url, description}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocumentation {
    Url(String),
    Object { url: Option<String> },
}

#[derive(Debug, Deserialize)]
struct RawUrl {
    #[serde(default)]
    paths: Vec<RawPath>,
}

/// A path variant: either a bare template string (legacy) or an object
/// carrying the template plus its methods and part metadata
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPath {
    Template(String),
    Entry {
        path: String,
        #[serde(default)]
        methods: Vec<String>,
    },
}

impl RawPath {
    fn template(&self) -> &str {
        match self {
            RawPath::Template(path) => path,
            RawPath::Entry { path, .. } => path,
        }
    }

    fn methods(&self) -> &[String] {
        match self {
            RawPath::Template(_) => &[],
            RawPath::Entry { methods, .. } => methods,
        }
    }
}

/// `params` is either an object keyed by parameter name or a list of names
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawParams {
    Named(serde_json::Map<String, Value>),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RawBody {
    #[serde(default)]
    required: bool,
}

/// Parse one endpoint document into an [`EndpointSpec`]
///
/// The document's single top-level key is the dotted qualified name; its
/// value describes the endpoint. Documents with several top-level keys keep
/// the first and warn about the rest.
///
/// # Errors
///
/// Returns [`GenError::MalformedSpec`] when the document has zero top-level
/// keys, `url.paths` is absent or empty, or the HTTP method does not resolve
/// to one of the five known verbs.
pub fn parse_spec(raw: &str) -> Result<EndpointSpec, GenError> {
    let document: serde_json::Map<String, Value> = serde_json::from_str(raw)?;
    let (name, body) = document
        .iter()
        .next()
        .ok_or_else(|| GenError::MalformedSpec {
            reason: "document has no top-level keys".to_string(),
        })?;
    if document.len() > 1 {
        warn!(endpoint = %name, "document has multiple top-level keys; keeping the first");
    }

    let endpoint: RawEndpoint = serde_json::from_value(body.clone())?;

    let paths: Vec<RawPath> = endpoint
        .url
        .ok_or_else(|| GenError::MalformedSpec {
            reason: format!("'{}' has no url section", name),
        })?
        .paths;
    if paths.is_empty() {
        return Err(GenError::MalformedSpec {
            reason: format!("'{}' declares no url.paths", name),
        });
    }

    // Endpoint-level methods take precedence (legacy shape); otherwise the
    // first path variant names the verb.
    let method = endpoint
        .methods
        .first()
        .map(String::as_str)
        .or_else(|| paths.iter().flat_map(|p| p.methods()).next().map(String::as_str))
        .ok_or_else(|| GenError::MalformedSpec {
            reason: format!("'{}' declares no HTTP method", name),
        })
        .and_then(HttpMethod::from_str)?;

    let params: BTreeSet<String> = match endpoint.params {
        Some(RawParams::Named(map)) => map.keys().cloned().collect(),
        Some(RawParams::List(names)) => names.into_iter().collect(),
        None => BTreeSet::new(),
    };

    let documentation = endpoint.documentation.and_then(|doc| match doc {
        RawDocumentation::Url(url) => Some(url),
        RawDocumentation::Object { url } => url,
    });

    Ok(EndpointSpec {
        name: name.clone(),
        method,
        paths: paths.iter().map(|p| p.template().to_string()).collect(),
        has_body: endpoint.body.is_some(),
        body_required: endpoint.body.map(|b| b.required).unwrap_or(false),
        params,
        documentation,
    })
}

/// Read and parse one endpoint document from disk
pub fn load_spec(path: &Path) -> Result<EndpointSpec, GenError> {
    let raw = std::fs::read_to_string(path)?;
    parse_spec(&raw)
}
