use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::emit::{write_artifact, WriteOutcome};
use super::model::build_model;
use super::templates::{render_endpoint, OutputArtifact};
use crate::error::GenError;
use crate::registry::ParamsRegistry;
use crate::spec::load_spec;

/// Shared helper copied once into `<output>/test/` before the batch runs
const TEST_HELPER: &str = include_str!("../../templates/test_helper.rs.txt");

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory of JSON endpoint documents
    pub input: PathBuf,
    /// Destination root for generated artifacts
    pub output: PathBuf,
    /// Overwrite existing artifacts instead of skipping them
    pub force: bool,
    /// Print per-file progress
    pub verbose: bool,
}

/// Result of processing one spec file
#[derive(Debug)]
pub enum EndpointStatus {
    Generated { written: usize, skipped: usize },
    Failed(GenError),
}

#[derive(Debug)]
pub struct EndpointOutcome {
    /// The spec file this outcome belongs to
    pub file: PathBuf,
    pub status: EndpointStatus,
}

/// Aggregate result of a generation run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<EndpointOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &GenError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            EndpointStatus::Failed(err) => Some((o.file.as_path(), err)),
            EndpointStatus::Generated { .. } => None,
        })
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Print the aggregate summary and the failure list
    pub fn print_summary(&self) {
        let total = self.outcomes.len();
        let failed = self.failures().count();
        println!("{} spec files, {} generated, {} failed", total, total - failed, failed);
        for (file, err) in self.failures() {
            println!("❌ {}: {}", file.display(), err);
        }
    }
}

/// Enumerate the spec files in an input directory
///
/// Entries whose names start with `.` or `_` are ignored, as are files
/// without a `.json` extension. Results are sorted so processing order, and
/// with it duplicate-registration reporting, is deterministic.
///
/// # Errors
///
/// Returns [`GenError::Io`] when the directory cannot be read; this is a
/// fatal configuration error, not a per-endpoint failure.
pub fn find_spec_files(input: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Process one spec file end to end
///
/// Load → model (namespace, paths, required args, conflict check,
/// registration) → render → write. Rendering happens only after the full
/// model is built, so a failed endpoint leaves nothing on disk.
fn generate_one(
    file: &Path,
    registry: &mut ParamsRegistry,
    options: &GenerateOptions,
) -> Result<(usize, usize), GenError> {
    let spec = load_spec(file)?;
    debug!(endpoint = %spec.name, file = %file.display(), "loaded spec");
    let model = build_model(&spec, registry)?;
    let artifacts = render_endpoint(&model, registry)?;

    let mut written = 0;
    let mut skipped = 0;
    for artifact in &artifacts {
        match write_artifact(&options.output, artifact, options.force)? {
            WriteOutcome::Written => {
                written += 1;
                if options.verbose {
                    println!("✅ Generated {}", options.output.join(&artifact.path).display());
                }
            }
            WriteOutcome::SkippedExisting => skipped += 1,
        }
    }
    Ok((written, skipped))
}

/// Run the whole batch
///
/// Each endpoint is processed independently: one endpoint's failure is
/// collected and the batch continues. Only configuration-level errors (an
/// unreadable input directory, an unwritable output root) abort the run.
///
/// # Errors
///
/// Returns [`GenError::Io`] for fatal configuration errors only.
pub fn generate_all(options: &GenerateOptions) -> Result<BatchReport, GenError> {
    let files = find_spec_files(&options.input)?;
    fs::create_dir_all(&options.output)?;

    // Test helper goes in before the per-endpoint loop, as a plain artifact
    // under the same overwrite policy.
    let helper = OutputArtifact {
        path: PathBuf::from("test").join("test_helper.rs"),
        contents: TEST_HELPER.to_string(),
    };
    write_artifact(&options.output, &helper, options.force)?;

    let mut registry = ParamsRegistry::new();
    let mut report = BatchReport::default();
    for file in files {
        if options.verbose {
            println!("json {}", file.display());
        }
        let status = match generate_one(&file, &mut registry, options) {
            Ok((written, skipped)) => EndpointStatus::Generated { written, skipped },
            Err(err) => {
                warn!(file = %file.display(), error = %err, "endpoint generation failed");
                EndpointStatus::Failed(err)
            }
        };
        report.outcomes.push(EndpointOutcome { file, status });
    }
    Ok(report)
}
