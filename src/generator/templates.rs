use askama::Template;
use std::path::PathBuf;

use super::model::GenerationModel;
use crate::error::GenError;
use crate::paths::{PathAlternative, PathSegment};
use crate::registry::ParamsRegistry;
use crate::required::BODY_ARG;

/// Rust keywords that need raw-identifier escaping when a placeholder name
/// becomes a binding in generated code (`{type}` is common upstream)
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
];

fn escape_ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// A rendered file ready to be written at its target path
///
/// Rendering is pure; regenerating from an unchanged spec reproduces a prior
/// artifact byte for byte.
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    /// Target path relative to the output root
    pub path: PathBuf,
    pub contents: String,
}

/// One call-time path choice in the generated operation
///
/// `pattern`/`scrutinee` form an `if let` guard over the optional part
/// bindings; `expr` builds the path when the guard matches.
#[derive(Debug, Clone)]
pub struct PathCandidate {
    pub pattern: String,
    pub scrutinee: String,
    pub expr: String,
}

/// Template data for a generated endpoint source file
#[derive(Template)]
#[template(path = "source.rs.txt")]
pub struct SourceTemplateData {
    pub fqn: String,
    pub method_name: String,
    pub http_method: String,
    pub doc_template: String,
    pub documentation: Option<String>,
    pub use_line: String,
    /// Quoted, comma-separated parameter names for the `ALLOWED_PARAMS` slice
    pub params_list: String,
    pub required: Vec<String>,
    pub parts: Vec<String>,
    pub has_body: bool,
    pub candidates: Vec<PathCandidate>,
    pub fallback: String,
}

/// A literal argument inserted into the argument map by a generated test
#[derive(Debug, Clone)]
pub struct TestArg {
    pub name: String,
    pub literal: String,
}

/// One missing-required-argument test case
#[derive(Debug, Clone)]
pub struct RequiredCase {
    /// The argument left out
    pub name: String,
    /// Every other required argument, supplied
    pub others: Vec<TestArg>,
}

/// Template data for a generated test stub
#[derive(Template)]
#[template(path = "test.rs.txt")]
pub struct TestTemplateData {
    pub fqn: String,
    pub method_name: String,
    pub http_method: String,
    pub http_method_lower: String,
    pub source_module: String,
    pub required_cases: Vec<RequiredCase>,
    pub smoke_args: Vec<TestArg>,
}

/// Union of placeholder names across alternatives, first-appearance order
fn part_union(alternatives: &[PathAlternative]) -> Vec<String> {
    let mut names = Vec::new();
    for alternative in alternatives {
        for name in alternative.part_order() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Build the call-time path candidates and the fallback expression
///
/// Candidates are the alternatives with at least one placeholder, ordered by
/// descending placeholder count (stable in declaration order), deduplicated
/// by placeholder set. The fallback is the first zero-placeholder alternative
/// when one exists, else the canonical template with unsupplied parts empty
/// and the result squeezed by the transport `pathify` helper.
fn path_dispatch(model: &GenerationModel) -> (Vec<PathCandidate>, String) {
    let alternatives = &model.alternatives;
    let mut order: Vec<usize> = (0..alternatives.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(alternatives[i].parts.len()));

    let mut candidates = Vec::new();
    let mut seen_sets: Vec<&std::collections::BTreeSet<String>> = Vec::new();
    let mut constant_fallback: Option<String> = None;
    for &index in &order {
        let alternative = &alternatives[index];
        if alternative.parts.is_empty() {
            if constant_fallback.is_none() {
                constant_fallback = Some(format!("{:?}.to_string()", alternative.template()));
            }
            continue;
        }
        if seen_sets.contains(&&alternative.parts) {
            continue;
        }
        seen_sets.push(&alternative.parts);
        candidates.push(candidate_for(alternative));
    }

    let fallback = constant_fallback.unwrap_or_else(|| {
        let canonical = &alternatives[model.canonical];
        let items: Vec<String> = canonical
            .segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Literal(lit) => format!("{lit:?}"),
                PathSegment::Part(name) => format!("_{name}.as_deref().unwrap_or(\"\")"),
            })
            .collect();
        format!("pathify(&[{}])", items.join(", "))
    });
    (candidates, fallback)
}

fn candidate_for(alternative: &PathAlternative) -> PathCandidate {
    let order = alternative.part_order();
    let pattern = format!(
        "({},)",
        order
            .iter()
            .map(|name| format!("Some({})", escape_ident(name)))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let scrutinee = format!(
        "({},)",
        order
            .iter()
            .map(|name| format!("_{name}.as_deref()"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut format_string = String::new();
    let mut args = Vec::new();
    for segment in &alternative.segments {
        format_string.push('/');
        match segment {
            PathSegment::Literal(lit) => format_string.push_str(lit),
            PathSegment::Part(name) => {
                format_string.push_str("{}");
                args.push(escape_ident(name));
            }
        }
    }
    let expr = format!("format!({:?}, {})", format_string, args.join(", "));
    PathCandidate {
        pattern,
        scrutinee,
        expr,
    }
}

fn use_line(candidates: &[PathCandidate], fallback: &str) -> String {
    let mut names = vec!["Arguments", "ClientError", "Response"];
    names.push("extract_params");
    if !candidates.is_empty() {
        names.push("listify");
    }
    if fallback.starts_with("pathify(") {
        names.push("pathify");
    }
    names.push("perform_request");
    names.sort_unstable();
    format!("use crate::transport::{{{}}};", names.join(", "))
}

/// Map a [`GenerationModel`] to its source-template data
pub fn source_template_data(
    model: &GenerationModel,
    registry: &ParamsRegistry,
) -> SourceTemplateData {
    let params_list = registry
        .get(&model.fqn)
        .unwrap_or(&model.params)
        .iter()
        .map(|p| format!("{p:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let (candidates, fallback) = path_dispatch(model);
    SourceTemplateData {
        fqn: model.fqn.clone(),
        method_name: model.method_name.clone(),
        http_method: model.http_method.as_str().to_string(),
        doc_template: model.canonical_template(),
        documentation: model.documentation.clone(),
        use_line: use_line(&candidates, &fallback),
        params_list,
        required: model.required.names().to_vec(),
        parts: part_union(&model.alternatives),
        has_body: model.has_body,
        candidates,
        fallback,
    }
}

fn test_literal(name: &str) -> String {
    if name == BODY_ARG {
        "json!({})".to_string()
    } else {
        "json!(\"test\")".to_string()
    }
}

/// Map a [`GenerationModel`] to its test-stub template data
pub fn test_template_data(model: &GenerationModel) -> TestTemplateData {
    let mut source_module = String::from("crate::api");
    for segment in &model.namespace {
        source_module.push_str("::");
        source_module.push_str(segment);
    }
    source_module.push_str("::");
    source_module.push_str(&model.method_name);

    let required = model.required.names();
    let required_cases = required
        .iter()
        .map(|name| RequiredCase {
            name: name.clone(),
            others: required
                .iter()
                .filter(|other| *other != name)
                .map(|other| TestArg {
                    name: other.clone(),
                    literal: test_literal(other),
                })
                .collect(),
        })
        .collect();
    let smoke_args = required
        .iter()
        .map(|name| TestArg {
            name: name.clone(),
            literal: test_literal(name),
        })
        .collect();

    TestTemplateData {
        fqn: model.fqn.clone(),
        method_name: model.method_name.clone(),
        http_method: model.http_method.as_str().to_string(),
        http_method_lower: model.http_method.as_str().to_ascii_lowercase(),
        source_module,
        required_cases,
        smoke_args,
    }
}

/// Render both artifacts for one endpoint
///
/// Pure: no I/O happens here, so a failed endpoint never reaches disk.
///
/// # Errors
///
/// Returns [`GenError::Render`] when a template fails to render.
pub fn render_endpoint(
    model: &GenerationModel,
    registry: &ParamsRegistry,
) -> Result<Vec<OutputArtifact>, GenError> {
    let mut namespace_dir = PathBuf::new();
    for segment in &model.namespace {
        namespace_dir.push(segment);
    }

    let source = source_template_data(model, registry).render()?;
    let source_path = PathBuf::from("api")
        .join(&namespace_dir)
        .join(format!("{}.rs", model.method_name));

    let test = test_template_data(model).render()?;
    let test_path = PathBuf::from("test")
        .join("api")
        .join(&namespace_dir)
        .join(format!("{}_test.rs", model.method_name));

    Ok(vec![
        OutputArtifact {
            path: source_path,
            contents: source,
        },
        OutputArtifact {
            path: test_path,
            contents: test,
        },
    ])
}
