//! Cache-path construction and idempotent artifact extraction.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::resource::Artifact;
use crate::runtime::Runtime;

/// Directory under the system temp root that holds every cache entry.
pub const CACHE_NAMESPACE: &str = "softgl";

/// Cache location for an artifact:
/// `<tmp>/softgl/[<version>/]<os>-<arch>/<file>`.
///
/// The version segment is omitted entirely when no version tag is embedded,
/// so unversioned builds all share one slot.
pub fn cache_path<R: Runtime>(
    runtime: &R,
    artifact: &Artifact,
    version: Option<&str>,
) -> PathBuf {
    let mut path = runtime.temp_dir().join(CACHE_NAMESPACE);
    if let Some(version) = version {
        path = path.join(version);
    }
    path.join(format!("{}-{}", artifact.os, artifact.arch))
        .join(artifact.file_name)
}

/// Ensure the artifact exists on disk at its cache path, copying it out of
/// the binary when the cached file is missing or has a different length.
/// Returns the path of the cached file.
///
/// The copy is staged into a process-unique temp file in the target directory
/// and renamed into place, so a concurrent process sees either the previous
/// state or the complete file, never a partial write.
pub fn ensure_extracted<R: Runtime>(
    runtime: &R,
    artifact: &Artifact,
    version: Option<&str>,
) -> Result<PathBuf> {
    let target = cache_path(runtime, artifact, version);

    if is_fresh(runtime, &target, artifact.bytes.len() as u64) {
        debug!(
            "Cache entry {} is up to date, skipping extraction",
            target.display()
        );
        return Ok(target);
    }

    let parent = target
        .parent()
        .context("Cache path has no parent directory")?;
    runtime
        .create_dir_all(parent)
        .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;

    info!("Extracting {} to {}", artifact.file_name, parent.display());

    let staging = target.with_extension(format!("tmp.{}", std::process::id()));
    runtime
        .write(&staging, artifact.bytes)
        .with_context(|| format!("Failed to write {}", staging.display()))?;

    if let Err(e) = runtime.rename(&staging, &target) {
        let _ = runtime.remove_file(&staging);
        return Err(e).with_context(|| format!("Failed to move {} into place", target.display()));
    }

    Ok(target)
}

/// Length-equality freshness check. This cannot detect corruption that
/// preserves the file length; see the tests for the documented failure mode.
fn is_fresh<R: Runtime>(runtime: &R, target: &Path, expected_len: u64) -> bool {
    runtime.exists(target)
        && runtime
            .file_len(target)
            .map(|len| len == expected_len)
            .unwrap_or(false)
}
