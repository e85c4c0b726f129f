use std::fmt;

/// Generator-time error for a single endpoint
///
/// Every variant is a deterministic function of the input spec; none is
/// transient, so no error is retried. The batch driver collects these per
/// endpoint instead of aborting the run.
#[derive(Debug)]
pub enum GenError {
    /// The document is unparseable or structurally incomplete
    ///
    /// Raised when the document has zero top-level keys, `url.paths` is
    /// absent or empty, the HTTP method is not one of the five known verbs,
    /// or a path segment contains a malformed placeholder.
    MalformedSpec {
        /// Human-readable description of what is wrong with the document
        reason: String,
    },
    /// The qualified name is empty
    InvalidName {
        /// The offending name as it appeared in the document
        name: String,
    },
    /// A required argument name collides with a declared query parameter
    ///
    /// The identifier would be ambiguous in the generated operation, so
    /// generation for the endpoint aborts instead of silently resolving it.
    SpecConflict {
        /// Fully qualified endpoint name
        endpoint: String,
        /// The colliding identifier
        name: String,
    },
    /// The same fully qualified name was registered twice in one run
    ///
    /// Indicates a spec authoring bug. The first registration wins.
    DuplicateRegistration {
        /// Fully qualified endpoint name
        endpoint: String,
    },
    /// Reading a spec file or writing an artifact failed
    Io(std::io::Error),
    /// Template rendering failed
    Render(askama::Error),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::MalformedSpec { reason } => {
                write!(f, "malformed spec: {}", reason)
            }
            GenError::InvalidName { name } => {
                write!(f, "invalid qualified name '{}'", name)
            }
            GenError::SpecConflict { endpoint, name } => {
                write!(
                    f,
                    "spec conflict in '{}': required argument '{}' collides with a query parameter",
                    endpoint, name
                )
            }
            GenError::DuplicateRegistration { endpoint } => {
                write!(
                    f,
                    "duplicate registration for '{}': fully qualified name already registered in this run",
                    endpoint
                )
            }
            GenError::Io(err) => write!(f, "i/o error: {}", err),
            GenError::Render(err) => write!(f, "template rendering failed: {}", err),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(err) => Some(err),
            GenError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        GenError::Io(err)
    }
}

impl From<askama::Error> for GenError {
    fn from(err: askama::Error) -> Self {
        GenError::Render(err)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::MalformedSpec {
            reason: err.to_string(),
        }
    }
}
