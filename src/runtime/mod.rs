//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the temp directory and
//! the handful of file system operations extraction needs, enabling dependency
//! injection and testability.
//!
//! # Structure
//!
//! - `env` - Temp-directory lookup
//! - `fs` - File system operations (stat, write, rename, directory)

mod env;
mod fs;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn temp_dir(&self) -> PathBuf;

    // File System
    fn exists(&self, path: &Path) -> bool;

    /// Length in bytes of the file at `path`.
    fn file_len(&self, path: &Path) -> Result<u64>;

    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn temp_dir(&self) -> PathBuf {
        self.temp_dir_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn file_len(&self, path: &Path) -> Result<u64> {
        self.file_len_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.rename_impl(from, to)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }
}
