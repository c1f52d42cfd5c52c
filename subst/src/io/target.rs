//! Read and rewrite the target file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, SubstError};
use crate::io::config::WriteMode;

/// Read the whole target as UTF-8 text.
pub fn read_target(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading target");
    let bytes = fs::read(path).map_err(|err| SubstError::from_io(path, err))?;
    String::from_utf8(bytes).map_err(|source| SubstError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the target's contents according to `mode`.
///
/// Both modes write through symlinks: the file the link resolves to is
/// updated and the link itself is left in place.
pub fn write_target(path: &Path, contents: &str, mode: WriteMode) -> Result<()> {
    debug!(path = %path.display(), ?mode, bytes = contents.len(), "writing target");
    match mode {
        WriteMode::Atomic => write_atomic(path, contents),
        WriteMode::InPlace => {
            fs::write(path, contents).map_err(|err| SubstError::from_io(path, err))
        }
    }
}

/// Write a fresh temp file next to the resolved target, then rename it over.
///
/// Needs a writable parent directory. Errors creating or filling the temp
/// file name the directory or the temp file, not the target.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|err| SubstError::from_io(path, err))?;
    let parent = target.parent().ok_or_else(|| {
        SubstError::InvalidConfig(format!("target has no parent directory: {}", target.display()))
    })?;

    // Exclusive create with a random name; removed on drop if never persisted.
    let mut tmp = NamedTempFile::new_in(parent).map_err(|err| SubstError::from_io(parent, err))?;
    debug!(tmp = %tmp.path().display(), target = %target.display(), "staging atomic write");
    tmp.write_all(contents.as_bytes())
        .map_err(|err| SubstError::from_io(tmp.path(), err))?;

    // Keep the target's mode bits; the temp file is created owner-only.
    let permissions = fs::metadata(&target)
        .map_err(|err| SubstError::from_io(&target, err))?
        .permissions();
    tmp.as_file()
        .set_permissions(permissions)
        .map_err(|err| SubstError::from_io(tmp.path(), err))?;

    tmp.persist(&target)
        .map_err(|err| SubstError::from_io(&target, err.error))?;
    Ok(())
}
