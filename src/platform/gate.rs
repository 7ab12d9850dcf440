//! Support gating: the one (OS, architecture) pair this build ships for.

use crate::arch::Architecture;

use super::HostPlatform;

/// The OS family this build bundles an artifact for. Matched by substring so
/// decorated names like `Windows 11` or `Windows Server 2022` pass.
pub const SUPPORTED_OS: &str = "windows";

/// Outcome of the support check. Rejections carry the diagnostic detail;
/// nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq)]
pub enum SupportDecision {
    Supported(Architecture),
    UnsupportedOs { os_name: String },
    UnsupportedArch { detail: String },
}

/// Check the host platform against the supported combination: a Windows OS
/// name and the 64-bit x86 architecture.
pub fn check_support(platform: &HostPlatform) -> SupportDecision {
    if !platform.os_name.to_lowercase().contains(SUPPORTED_OS) {
        return SupportDecision::UnsupportedOs {
            os_name: platform.os_name.clone(),
        };
    }

    match platform.architecture() {
        Some(Architecture::X86_64) => SupportDecision::Supported(Architecture::X86_64),
        Some(other) => SupportDecision::UnsupportedArch {
            detail: other.display_name().to_string(),
        },
        None => SupportDecision::UnsupportedArch {
            detail: format!("unrecognized token {:?}", platform.raw_arch.trim()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::Endianness;

    fn platform(os: &str, arch: &str) -> HostPlatform {
        HostPlatform {
            os_name: os.to_string(),
            raw_arch: arch.to_string(),
            endianness: Some(Endianness::Little),
        }
    }

    #[test]
    fn test_windows_x86_64_is_supported() {
        for os in ["windows", "Windows 11", "Windows Server 2022"] {
            for arch in ["x86_64", "amd64", "x64"] {
                assert_eq!(
                    check_support(&platform(os, arch)),
                    SupportDecision::Supported(Architecture::X86_64),
                    "{os} / {arch}"
                );
            }
        }
    }

    #[test]
    fn test_every_other_os_is_rejected() {
        for os in ["linux", "Linux", "macos", "freebsd", "solaris"] {
            assert_eq!(
                check_support(&platform(os, "x86_64")),
                SupportDecision::UnsupportedOs {
                    os_name: os.to_string()
                },
                "{os}"
            );
        }
    }

    #[test]
    fn test_every_other_architecture_is_rejected() {
        for (arch, display) in [
            ("aarch64", "ARM64"),
            ("armv8-a", "ARM64"),
            ("i686", "x86"),
            ("riscv64", "RISC-V"),
        ] {
            assert_eq!(
                check_support(&platform("Windows 11", arch)),
                SupportDecision::UnsupportedArch {
                    detail: display.to_string()
                },
                "{arch}"
            );
        }
    }

    #[test]
    fn test_unrecognized_architecture_reports_the_raw_token() {
        let decision = check_support(&platform("Windows 11", " vax "));
        assert_eq!(
            decision,
            SupportDecision::UnsupportedArch {
                detail: "unrecognized token \"vax\"".to_string()
            }
        );
    }

    #[test]
    fn test_os_check_runs_before_arch_check() {
        // An unsupported OS wins even when the architecture is also bad
        let decision = check_support(&platform("linux", "vax"));
        assert!(matches!(decision, SupportDecision::UnsupportedOs { .. }));
    }
}
