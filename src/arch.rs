//! CPU architecture detection.
//!
//! Maps the host-reported architecture token onto a closed set of known
//! variants. The alias table covers every spelling observed across runtimes
//! and vendors (`amd64`, `x86_64`, `em64t`, ...); a bare `ppc64` token does
//! not say which byte order it is, so that one case consults the host byte
//! order.

use std::fmt;

/// Host byte order, used to split the ambiguous `ppc64` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the running host.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

/// A CPU architecture this resolver can name.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X86,
    X86_64,
    IA32,
    IA64,
    Sparc,
    SparcV9,
    Arm32,
    Arm64,
    Mips,
    Mips64,
    MipsEl,
    Mips64El,
    Ppc,
    Ppc64,
    PpcLe,
    Ppc64Le,
    S390,
    S390X,
    RiscV,
    LoongArch32,
    LoongArch64,
}

impl Architecture {
    /// Parse a raw architecture token into a known variant.
    ///
    /// The token is trimmed and lowercased before lookup, so `" AMD64 "` and
    /// `"amd64"` resolve identically. Tokens that match no alias fall through
    /// to the `armv7*` / `armv8*` / `armv9*` prefix rules; anything still
    /// unmatched yields `None`, which callers treat as "unsupported", not as
    /// an error.
    pub fn parse(raw: &str, endian_hint: Option<Endianness>) -> Option<Architecture> {
        let token = raw.trim().to_ascii_lowercase();

        let arch = match token.as_str() {
            "x8664" | "x86-64" | "x86_64" | "amd64" | "ia32e" | "em64t" | "x64" => {
                Architecture::X86_64
            }
            "x8632" | "x86-32" | "x86_32" | "x86" | "i86pc" | "i386" | "i486" | "i586"
            | "i686" | "ia32" | "x32" => Architecture::X86,
            "arm64" | "aarch64" => Architecture::Arm64,
            "arm" | "arm32" => Architecture::Arm32,
            "mips64" => Architecture::Mips64,
            "mips64el" => Architecture::Mips64El,
            "mips" | "mips32" => Architecture::Mips,
            "mipsel" | "mips32el" => Architecture::MipsEl,
            "riscv" | "risc-v" | "riscv64" => Architecture::RiscV,
            "ia64" | "ia64w" | "itanium64" => Architecture::IA64,
            "ia64n" => Architecture::IA32,
            "sparcv9" | "sparc64" => Architecture::SparcV9,
            "sparc" | "sparc32" => Architecture::Sparc,
            // A bare ppc64 token says nothing about byte order
            "ppc64" | "powerpc64" => {
                if endian_hint == Some(Endianness::Little) {
                    Architecture::Ppc64Le
                } else {
                    Architecture::Ppc64
                }
            }
            "ppc64le" | "powerpc64le" => Architecture::Ppc64Le,
            "ppc" | "ppc32" | "powerpc" | "powerpc32" => Architecture::Ppc,
            "ppcle" | "ppc32le" | "powerpcle" | "powerpc32le" => Architecture::PpcLe,
            "s390" => Architecture::S390,
            "s390x" => Architecture::S390X,
            "loongarch32" => Architecture::LoongArch32,
            "loongarch64" => Architecture::LoongArch64,
            _ => {
                if token.starts_with("armv7") {
                    Architecture::Arm32
                } else if token.starts_with("armv8") || token.starts_with("armv9") {
                    Architecture::Arm64
                } else {
                    return None;
                }
            }
        };

        Some(arch)
    }

    /// Lowercase token used for cache paths and artifact lookup.
    pub fn canonical_id(self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X86_64 => "x86-64",
            Architecture::IA32 => "ia32",
            Architecture::IA64 => "ia64",
            Architecture::Sparc => "sparc",
            Architecture::SparcV9 => "sparcv9",
            Architecture::Arm32 => "arm32",
            Architecture::Arm64 => "arm64",
            Architecture::Mips => "mips",
            Architecture::Mips64 => "mips64",
            Architecture::MipsEl => "mipsel",
            Architecture::Mips64El => "mips64el",
            Architecture::Ppc => "ppc",
            Architecture::Ppc64 => "ppc64",
            Architecture::PpcLe => "ppcle",
            Architecture::Ppc64Le => "ppc64le",
            Architecture::S390 => "s390",
            Architecture::S390X => "s390x",
            Architecture::RiscV => "riscv",
            Architecture::LoongArch32 => "loongarch32",
            Architecture::LoongArch64 => "loongarch64",
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Architecture::X86 => "x86",
            Architecture::X86_64 => "x86-64",
            Architecture::IA32 => "IA-32",
            Architecture::IA64 => "IA-64",
            Architecture::Sparc => "SPARC",
            Architecture::SparcV9 => "SPARC V9",
            Architecture::Arm32 => "ARM32",
            Architecture::Arm64 => "ARM64",
            Architecture::Mips => "MIPS",
            Architecture::Mips64 => "MIPS64",
            Architecture::MipsEl => "MIPSel",
            Architecture::Mips64El => "MIPS64el",
            Architecture::Ppc => "PowerPC",
            Architecture::Ppc64 => "PowerPC-64",
            Architecture::PpcLe => "PowerPC (Little-Endian)",
            Architecture::Ppc64Le => "PowerPC-64 (Little-Endian)",
            Architecture::S390 => "S390",
            Architecture::S390X => "S390x",
            Architecture::RiscV => "RISC-V",
            Architecture::LoongArch32 => "LoongArch32",
            Architecture::LoongArch64 => "LoongArch64",
        }
    }

    /// Whether the variant is a 64-bit architecture.
    pub fn is_64bit(self) -> bool {
        matches!(
            self,
            Architecture::X86_64
                | Architecture::IA64
                | Architecture::SparcV9
                | Architecture::Arm64
                | Architecture::Mips64
                | Architecture::Mips64El
                | Architecture::Ppc64
                | Architecture::Ppc64Le
                | Architecture::S390X
                | Architecture::RiscV
                | Architecture::LoongArch64
        )
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
