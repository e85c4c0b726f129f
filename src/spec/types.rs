use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::GenError;

/// HTTP verbs an endpoint spec may declare
///
/// The generator only knows the five verbs the upstream spec format uses;
/// anything else fails loading with [`GenError::MalformedSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Head,
}

impl HttpMethod {
    /// The verb as it appears on the wire and in generated code
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "PUT" => Ok(HttpMethod::Put),
            "POST" => Ok(HttpMethod::Post),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            other => Err(GenError::MalformedSpec {
                reason: format!("unknown HTTP method '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compiled endpoint description
///
/// Produced by the loader from a single JSON document; immutable afterwards.
/// `paths` preserves the declared order of every URL template variant.
#[derive(Debug, Clone)]
pub struct EndpointSpec {
    /// Dotted qualified name (namespace segments ending in the method name)
    pub name: String,
    /// Resolved HTTP verb
    pub method: HttpMethod,
    /// Raw URL templates, one per declared path variant, original order
    pub paths: Vec<String>,
    /// Whether the endpoint accepts a request body at all
    pub has_body: bool,
    /// Whether the request body is mandatory
    pub body_required: bool,
    /// Allowed query parameter names; duplicates collapse, identity is exact
    pub params: BTreeSet<String>,
    /// Upstream documentation URL, carried into generated doc comments
    pub documentation: Option<String>,
}
