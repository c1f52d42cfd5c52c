//! Test-only helpers for building throwaway target files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::config::SubstitutionConfig;

/// A target file inside its own temp directory, removed on drop.
pub struct TestTarget {
    dir: TempDir,
    path: PathBuf,
}

impl TestTarget {
    /// Create `name` with `contents` in a fresh temp directory.
    pub fn new(name: &str, contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let path = dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents; panics if the file is gone or not UTF-8.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read test target")
    }

    /// Default tokens (Inter to Outfit) pointed at this file.
    pub fn config(&self) -> SubstitutionConfig {
        SubstitutionConfig {
            path: self.path.clone(),
            ..SubstitutionConfig::default()
        }
    }
}
