use std::collections::BTreeSet;

use crate::error::GenError;
use crate::namespace::split_qualified;
use crate::paths::{canonical_index, resolve_alternatives, PathAlternative};
use crate::registry::ParamsRegistry;
use crate::required::{check_conflicts, required_arguments, RequiredArguments};
use crate::spec::{EndpointSpec, HttpMethod};

/// Everything the emitter needs to render one endpoint
///
/// Constructed fresh per endpoint, consumed once, discarded. Building the
/// model is the pure "what gets generated" half of the generator; writing it
/// to disk is the emitter's job.
#[derive(Debug, Clone)]
pub struct GenerationModel {
    /// Fully qualified dotted name, the registry key
    pub fqn: String,
    /// Namespace segments, reproduced as the output directory hierarchy
    pub namespace: Vec<String>,
    /// Leaf method name, naming the generated operation and its files
    pub method_name: String,
    pub http_method: HttpMethod,
    /// Every resolved URL template variant, declaration order
    pub alternatives: Vec<PathAlternative>,
    /// Index of the canonical alternative in `alternatives`
    pub canonical: usize,
    pub required: RequiredArguments,
    /// Allowed query parameters, as registered for this endpoint
    pub params: BTreeSet<String>,
    pub has_body: bool,
    pub documentation: Option<String>,
}

impl GenerationModel {
    /// The canonical path template with `{name}` substitution markers
    pub fn canonical_template(&self) -> String {
        self.alternatives[self.canonical].template()
    }
}

/// Build the generation model for one endpoint and register its parameters
///
/// Runs the namespace resolver, path resolver, and required-argument
/// analyzer, validates required names against the declared query parameters,
/// and registers the parameter set under the fully qualified name.
///
/// # Errors
///
/// Any of [`GenError::InvalidName`], [`GenError::MalformedSpec`],
/// [`GenError::SpecConflict`], or [`GenError::DuplicateRegistration`]; all
/// are per-endpoint and leave nothing on disk.
pub fn build_model(
    spec: &EndpointSpec,
    registry: &mut ParamsRegistry,
) -> Result<GenerationModel, GenError> {
    let qualified = split_qualified(&spec.name)?;
    let alternatives = resolve_alternatives(&spec.paths)?;
    debug_assert!(!alternatives.is_empty(), "loader guarantees non-empty paths");

    let required = required_arguments(&alternatives, spec.body_required);
    check_conflicts(&spec.name, &required, &spec.params)?;

    let fqn = qualified.fqn();
    registry.register(&fqn, &spec.params)?;

    let canonical = canonical_index(&alternatives, required.parts());
    Ok(GenerationModel {
        fqn,
        namespace: qualified.namespace,
        method_name: qualified.method,
        http_method: spec.method,
        alternatives,
        canonical,
        required,
        params: spec.params.clone(),
        has_body: spec.has_body,
        documentation: spec.documentation.clone(),
    })
}
