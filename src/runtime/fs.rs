//! File system operations (stat, write, rename, directory).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn file_len_impl(&self, path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path).context("Failed to read file metadata")?;
        Ok(metadata.len())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).context("Failed to create directory")?;
        Ok(())
    }

    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn rename_impl(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).context("Failed to rename file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).context("Failed to remove file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.bin");

        // Test write
        runtime.write(&file_path, b"hello").unwrap();
        assert!(runtime.exists(&file_path));

        // Test file_len
        assert_eq!(runtime.file_len(&file_path).unwrap(), 5);

        // Test rename
        let new_path = dir.path().join("renamed.bin");
        runtime.rename(&file_path, &new_path).unwrap();
        assert!(!runtime.exists(&file_path));
        assert!(runtime.exists(&new_path));

        // Test remove_file
        runtime.remove_file(&new_path).unwrap();
        assert!(!runtime.exists(&new_path));
    }

    #[test]
    fn test_real_runtime_dir_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("sub/nested");

        runtime.create_dir_all(&sub_dir).unwrap();
        assert!(runtime.exists(&sub_dir));
    }

    #[test]
    fn test_real_runtime_errors() {
        let runtime = RealRuntime;

        // Stat of a non-existent file
        let result = runtime.file_len(std::path::Path::new("/nonexistent/path/file.bin"));
        assert!(result.is_err());

        // Remove of a non-existent file
        let result = runtime.remove_file(std::path::Path::new("/nonexistent/path/file.bin"));
        assert!(result.is_err());
    }
}
