use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
    time::{SystemTime, UNIX_EPOCH},
};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = detect_version();
    println!("cargo:rustc-env=SOFTGL_VERSION={}", version);

    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let resources = manifest_dir.join("resources");
    if resources.exists() {
        println!("cargo:rerun-if-changed=resources");
    }

    let table = generate_embed_table(&resources, &out_dir, &version);
    fs::write(out_dir.join("embed.rs"), table).expect("Failed to write embed.rs");
}

/// Generate the embedded-resource table included by `src/resource.rs`.
///
/// The version resource is `resources/version.txt` when the tree carries one
/// (release builds drop it in alongside the artifact), otherwise the version
/// derived from git. Artifacts live under `resources/<os>-<arch>/<file>` and
/// are provisioned by the release process; a checkout without them still
/// builds and reports the gap at runtime.
fn generate_embed_table(resources: &Path, out_dir: &Path, version: &str) -> String {
    let mut out = String::from("// @generated by build.rs, do not edit\n");

    let version_file = resources.join("version.txt");
    let version_file = if version_file.is_file() {
        version_file
    } else {
        let generated = out_dir.join("version.txt");
        fs::write(&generated, format!("{}\n", version)).expect("Failed to write version.txt");
        generated
    };
    out.push_str(&format!(
        "pub(crate) static VERSION_TXT: Option<&[u8]> = Some(include_bytes!({:?}));\n",
        version_file.to_string_lossy()
    ));

    out.push_str("pub(crate) static ARTIFACTS: &[Artifact] = &[\n");
    for (os, arch, file) in find_artifacts(resources) {
        let file_name = file
            .file_name()
            .expect("Artifact path has no file name")
            .to_string_lossy()
            .into_owned();
        out.push_str(&format!(
            "    Artifact {{ os: {:?}, arch: {:?}, file_name: {:?}, bytes: include_bytes!({:?}) }},\n",
            os,
            arch,
            file_name,
            file.to_string_lossy()
        ));
    }
    out.push_str("];\n");
    out
}

/// Collect `(os, arch, path)` for every file under a `<os>-<arch>` directory.
/// The directory name splits on the first hyphen: `windows-x86-64` is the
/// `windows` / `x86-64` pair.
fn find_artifacts(resources: &Path) -> Vec<(String, String, PathBuf)> {
    let mut found = Vec::new();
    let Ok(entries) = fs::read_dir(resources) else {
        return found;
    };
    for entry in entries.flatten() {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some((os, arch)) = name.split_once('-') else {
            continue;
        };
        let Ok(files) = fs::read_dir(&dir) else {
            continue;
        };
        for file in files.flatten() {
            if file.path().is_file() {
                found.push((os.to_string(), arch.to_string(), file.path()));
            }
        }
    }
    found.sort();
    found
}

fn detect_version() -> String {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    match output {
        Ok(o) if o.status.success() => {
            let git_output = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Strip 'v' prefix if present (e.g., "v1.0.0" -> "1.0.0")
            let version = git_output.strip_prefix('v').unwrap_or(&git_output);

            if version.ends_with("-dirty") || version.is_empty() {
                // Dirty working tree or no output: append timestamp
                format!("{}-{}", version, timestamp())
            } else {
                version.to_string()
            }
        }
        _ => {
            // Git command failed: use timestamp as version
            format!("0.0.0-unknown-{}", timestamp())
        }
    }
}

fn timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
