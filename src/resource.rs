//! Embedded native artifacts and version metadata.
//!
//! `build.rs` scans `resources/` and generates the include table this module
//! pulls in: one entry per `resources/<os>-<arch>/<file>` artifact plus the
//! version resource. A checkout without a provisioned artifact still builds;
//! lookups simply return `None` and the pipeline reports the gap.

use std::str;

/// One native library bundled into the binary for a specific (os, arch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    /// Lowercase OS token, e.g. `windows`.
    pub os: &'static str,
    /// Canonical architecture identifier, e.g. `x86-64`.
    pub arch: &'static str,
    /// File name the artifact keeps on disk, e.g. `opengl32.dll`.
    pub file_name: &'static str,
    pub bytes: &'static [u8],
}

include!(concat!(env!("OUT_DIR"), "/embed.rs"));

/// Access to the resources bundled with this build.
#[cfg_attr(test, mockall::automock)]
pub trait Resources: Send + Sync {
    /// Version tag of the bundled artifacts, if one can be read. Version
    /// information is advisory (it only busts the cache path), so every
    /// failure mode collapses to `None` rather than an error.
    fn version_tag(&self) -> Option<String>;

    /// Look up the bundled artifact for an (os, arch) pair.
    fn artifact(&self, os: &str, arch: &str) -> Option<Artifact>;
}

/// Resources compiled into this binary by `build.rs`.
pub struct BundledResources;

impl Resources for BundledResources {
    fn version_tag(&self) -> Option<String> {
        VERSION_TXT.and_then(parse_version_line)
    }

    fn artifact(&self, os: &str, arch: &str) -> Option<Artifact> {
        ARTIFACTS
            .iter()
            .copied()
            .find(|a| a.os == os && a.arch == arch)
    }
}

/// First line of the version resource, or `None` when the bytes are not
/// UTF-8 or the line is blank.
fn parse_version_line(bytes: &[u8]) -> Option<String> {
    let text = str::from_utf8(bytes).ok()?;
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
