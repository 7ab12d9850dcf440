use clap::Parser;
use softgl::bootstrap::{self, Outcome};
use softgl::extract::cache_path;
use softgl::platform::{HostPlatform, SUPPORTED_OS, SupportDecision, check_support};
use softgl::resource::{BundledResources, Resources};
use softgl::runtime::RealRuntime;

/// softgl - bundled software OpenGL renderer loader
///
/// Stages the bundled renderer into the system temp directory and loads it
/// into the current process. Intended to run once at host startup; every
/// failure is reported and none is fatal, so this command always exits 0.
#[derive(Parser, Debug)]
#[command(author, version = env!("SOFTGL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the reported operating system name (also via SOFTGL_OS)
    #[arg(long = "os", env = "SOFTGL_OS", value_name = "NAME", global = true)]
    os_name: Option<String>,

    /// Override the reported CPU architecture token (also via SOFTGL_ARCH)
    #[arg(long = "arch", env = "SOFTGL_ARCH", value_name = "NAME", global = true)]
    raw_arch: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline: detect, gate, extract, load
    Load,

    /// Print platform detection and cache information without extracting
    Info,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let platform = HostPlatform::with_overrides(cli.os_name, cli.raw_arch);

    match cli.command {
        Commands::Load => load(&platform),
        Commands::Info => info(&platform),
    }
}

fn load(platform: &HostPlatform) {
    let outcome = bootstrap::bootstrap(&RealRuntime, &BundledResources, platform);

    match &outcome {
        Outcome::Loaded(library) => println!("      loaded {}", library.path().display()),
        Outcome::UnsupportedOs { os_name } => {
            println!(" unsupported operating system: {}", os_name)
        }
        Outcome::UnsupportedArch { detail } => {
            println!(" unsupported architecture: {}", detail)
        }
        Outcome::MissingArtifact { os, arch } => {
            println!("     missing no bundled library for {}-{}", os, arch)
        }
        Outcome::ExtractFailed(e) => println!("      failed extracting: {:#}", e),
        Outcome::LoadFailed(e) => println!("      failed loading: {}", e),
    }

    if let Outcome::Loaded(library) = outcome {
        library.leak();
    }
}

fn info(platform: &HostPlatform) {
    let runtime = RealRuntime;
    let resources = BundledResources;

    println!("          os {}", platform.os_name);
    match platform.architecture() {
        Some(arch) => println!(
            "        arch {} ({}-bit)",
            arch.display_name(),
            if arch.is_64bit() { 64 } else { 32 }
        ),
        None => println!("        arch unrecognized token {:?}", platform.raw_arch),
    }

    let version = resources.version_tag();
    match &version {
        Some(version) => println!("     version {}", version),
        None => println!("     version (none)"),
    }

    match check_support(platform) {
        SupportDecision::Supported(arch) => {
            match resources.artifact(SUPPORTED_OS, arch.canonical_id()) {
                Some(artifact) => {
                    println!("   supported yes");
                    println!(
                        "       cache {}",
                        cache_path(&runtime, &artifact, version.as_deref()).display()
                    );
                }
                None => println!("   supported yes, but this build bundles no artifact"),
            }
        }
        SupportDecision::UnsupportedOs { os_name } => {
            println!("   supported no (operating system: {})", os_name)
        }
        SupportDecision::UnsupportedArch { detail } => {
            println!("   supported no (architecture: {})", detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_load_parsing() {
        let cli = Cli::try_parse_from(["softgl", "load"]).unwrap();
        assert!(matches!(cli.command, Commands::Load));
        assert_eq!(cli.os_name, None);
        assert_eq!(cli.raw_arch, None);
    }

    #[test]
    fn test_cli_info_parsing() {
        let cli = Cli::try_parse_from(["softgl", "info"]).unwrap();
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli =
            Cli::try_parse_from(["softgl", "--os", "Windows 11", "--arch", "amd64", "load"])
                .unwrap();
        assert_eq!(cli.os_name.as_deref(), Some("Windows 11"));
        assert_eq!(cli.raw_arch.as_deref(), Some("amd64"));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["softgl"]);
        assert!(result.is_err());
    }
}
