use std::fs;
use std::path::Path;

use super::templates::OutputArtifact;
use crate::error::GenError;

/// What happened to one artifact on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The target existed and `force` was off
    SkippedExisting,
}

/// Write one rendered artifact under the output root
///
/// Intermediate directories are created as needed; creating an existing
/// directory is a no-op. When the target exists and `force` is off, the file
/// is left untouched and a skip notice is printed.
///
/// # Errors
///
/// Returns [`GenError::Io`] when directory creation or the write fails.
pub fn write_artifact(
    output_root: &Path,
    artifact: &OutputArtifact,
    force: bool,
) -> Result<WriteOutcome, GenError> {
    let target = output_root.join(&artifact.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    if target.exists() && !force {
        println!("⚠️  Skipping existing file: {target:?}");
        return Ok(WriteOutcome::SkippedExisting);
    }
    fs::write(&target, &artifact.contents)?;
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn artifact() -> OutputArtifact {
        OutputArtifact {
            path: PathBuf::from("api/indices/split.rs"),
            contents: "// generated\n".to_string(),
        }
    }

    #[test]
    fn creates_directories_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_artifact(dir.path(), &artifact(), false).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        // Second write with force overwrites; directories already exist.
        let outcome = write_artifact(dir.path(), &artifact(), true).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        let written = std::fs::read_to_string(dir.path().join("api/indices/split.rs")).unwrap();
        assert_eq!(written, "// generated\n");
    }

    #[test]
    fn existing_file_is_skipped_without_force() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), &artifact(), false).unwrap();
        let mut changed = artifact();
        changed.contents = "// changed\n".to_string();
        let outcome = write_artifact(dir.path(), &changed, false).unwrap();
        assert_eq!(outcome, WriteOutcome::SkippedExisting);
        let on_disk = std::fs::read_to_string(dir.path().join("api/indices/split.rs")).unwrap();
        assert_eq!(on_disk, "// generated\n");
    }
}
