//! The startup pipeline: detect, gate, resolve version, extract, load.
//!
//! Each stage short-circuits the rest on failure, and every failure is
//! absorbed into an [`Outcome`] variant. Nothing in here panics or unwinds
//! into the host; a host that calls [`run`] starts up whether or not the
//! renderer came up.

use log::{debug, error, info, warn};

use crate::extract;
use crate::loader::{self, LoadError, LoadedLibrary};
use crate::platform::{HostPlatform, SUPPORTED_OS, SupportDecision, check_support};
use crate::resource::{BundledResources, Resources};
use crate::runtime::{RealRuntime, Runtime};

/// Terminal state of one pipeline invocation. Every failure variant is
/// absorbing: there are no retries and no fallback paths.
#[derive(Debug)]
pub enum Outcome {
    /// The bundled library is mapped into the process.
    Loaded(LoadedLibrary),
    /// The reported OS is not the one this build bundles an artifact for.
    UnsupportedOs { os_name: String },
    /// The reported architecture is unsupported or unrecognized.
    UnsupportedArch { detail: String },
    /// The platform is supported but this build bundles no artifact for it.
    MissingArtifact { os: &'static str, arch: &'static str },
    /// Creating directories or copying bytes failed.
    ExtractFailed(anyhow::Error),
    /// The staged file exists but could not be loaded.
    LoadFailed(LoadError),
}

impl Outcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Outcome::Loaded(_))
    }
}

/// Run the pipeline once against the real process environment.
///
/// This is the whole public surface a host needs: no arguments, returns the
/// outcome, never panics, never returns an error type. Call it once at
/// startup, keep the `Loaded` handle (or [`LoadedLibrary::leak`] it), and
/// move on.
pub fn run() -> Outcome {
    let platform = HostPlatform::detect();
    bootstrap(&RealRuntime, &BundledResources, &platform)
}

/// Run the pipeline with injected dependencies.
pub fn bootstrap<R: Runtime, S: Resources>(
    runtime: &R,
    resources: &S,
    platform: &HostPlatform,
) -> Outcome {
    let arch = match check_support(platform) {
        SupportDecision::Supported(arch) => arch,
        SupportDecision::UnsupportedOs { os_name } => {
            warn!("Unsupported operating system: {}", os_name);
            return Outcome::UnsupportedOs { os_name };
        }
        SupportDecision::UnsupportedArch { detail } => {
            warn!("Unsupported architecture: {}", detail);
            return Outcome::UnsupportedArch { detail };
        }
    };

    let version = resources.version_tag();
    match &version {
        Some(version) => debug!("Bundled artifact version: {}", version),
        None => debug!("No version tag embedded, cache path will omit the version segment"),
    }

    let Some(artifact) = resources.artifact(SUPPORTED_OS, arch.canonical_id()) else {
        error!(
            "No bundled library for {}-{} in this build",
            SUPPORTED_OS,
            arch.canonical_id()
        );
        return Outcome::MissingArtifact {
            os: SUPPORTED_OS,
            arch: arch.canonical_id(),
        };
    };

    let path = match extract::ensure_extracted(runtime, &artifact, version.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to extract {}: {:#}", artifact.file_name, e);
            return Outcome::ExtractFailed(e);
        }
    };

    info!("Loading {}", path.display());
    match loader::load(&path) {
        Ok(library) => {
            info!("Loaded {}", library.path().display());
            Outcome::Loaded(library)
        }
        Err(e) => {
            error!("Failed to load bundled library: {}", e);
            Outcome::LoadFailed(e)
        }
    }
}
