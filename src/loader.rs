//! Dynamic loading of the staged library.

use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure kinds reported by [`load`]. A missing or unreadable file is a
/// different problem from a file the dynamic loader refuses to link, and the
/// two are reported separately.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("library not found or unreadable at {path:?}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dynamic loader rejected {path:?}: {source}")]
    Link {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}

/// A native library mapped into the current process.
#[derive(Debug)]
pub struct LoadedLibrary {
    path: PathBuf,
    library: libloading::Library,
}

impl LoadedLibrary {
    /// Filesystem path the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the library mapped for the rest of the process lifetime. The
    /// resolver never unloads what it loaded.
    pub fn leak(self) {
        std::mem::forget(self.library);
    }
}

/// Load the native library at `path` into the current process.
pub fn load(path: &Path) -> Result<LoadedLibrary, LoadError> {
    // Readability check first: on some platforms the dynamic loader reports a
    // missing file with the same error shape as a link failure
    if let Err(source) = std::fs::File::open(path) {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Loading {}", path.display());

    // Safety: the artifact was staged from bytes bundled with this build;
    // loading runs its initializers in-process
    match unsafe { libloading::Library::new(path) } {
        Ok(library) => Ok(LoadedLibrary {
            path: path.to_path_buf(),
            library,
        }),
        Err(source) => {
            if let Some(format) = probe_format(path) {
                warn!("Rejected library {} is a {} image", path.display(), format);
            }
            Err(LoadError::Link {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Identify the binary format of a rejected file so the link diagnostic can
/// name what was actually on disk.
fn probe_format(path: &Path) -> Option<&'static str> {
    let bytes = std::fs::read(path).ok()?;
    let format = match goblin::Object::parse(&bytes).ok()? {
        goblin::Object::PE(_) => "PE",
        goblin::Object::Elf(_) => "ELF",
        goblin::Object::Mach(_) => "Mach-O",
        goblin::Object::Archive(_) => "archive",
        _ => "unknown",
    };
    Some(format)
}
