//! File I/O utilities with atomic writes
//!
//! Generated files are written to a sibling temp file and renamed into place,
//! so a target is either the old content or the new content, never a mix.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Write text to a file atomically (write to temp, then rename)
///
/// Any existing file at `path` is replaced. Parent directories are created
/// if missing.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ScaffoldError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ScaffoldError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        ScaffoldError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ScaffoldError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;

    writer.get_ref().sync_all().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::Io(format!("Failed to sync {}: {}", path.display(), e))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// `Search.tsx` -> `Search.tsx.tmp`, in the same directory so rename stays atomic
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
