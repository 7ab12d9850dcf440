//! Host platform detection.

use crate::arch::{Architecture, Endianness};

/// What the host reports about itself, captured once at startup and passed
/// through the pipeline rather than re-read as ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPlatform {
    /// Reported operating system name, e.g. `windows` or `Windows 11`.
    pub os_name: String,
    /// Reported CPU architecture token, e.g. `x86_64` or `amd64`.
    pub raw_arch: String,
    /// Reported byte order, if the host reports one.
    pub endianness: Option<Endianness>,
}

impl HostPlatform {
    /// Detect the platform of the running process.
    pub fn detect() -> Self {
        Self::with_overrides(None, None)
    }

    /// Detect the platform, substituting overridden OS / architecture tokens
    /// where given. Overrides exist for diagnostics and tests; the normal
    /// startup path passes `None`.
    pub fn with_overrides(os_name: Option<String>, raw_arch: Option<String>) -> Self {
        Self {
            os_name: os_name.unwrap_or_else(|| std::env::consts::OS.to_string()),
            raw_arch: raw_arch.unwrap_or_else(|| std::env::consts::ARCH.to_string()),
            endianness: Some(Endianness::native()),
        }
    }

    /// The detected architecture variant, or `None` when the raw token is not
    /// recognized.
    pub fn architecture(&self) -> Option<Architecture> {
        Architecture::parse(&self.raw_arch, self.endianness)
    }
}
