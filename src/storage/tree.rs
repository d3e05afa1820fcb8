//! Recursive directory operations
//!
//! Whole-tree copy, removal and size accounting, used by the backup system.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScaffoldError;

/// Summary of a directory tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

/// Recursively copy `src` to `dest`
///
/// `dest` must not exist yet; the copy mirrors directories, regular files and
/// (on unix) symlinks.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<TreeStats, ScaffoldError> {
    if dest.exists() {
        return Err(ScaffoldError::Io(format!(
            "Copy destination already exists: {}",
            dest.display()
        )));
    }

    let mut stats = TreeStats::default();

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(|e| {
            ScaffoldError::Io(format!("Failed to relativize {}: {}", entry.path().display(), e))
        })?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                ScaffoldError::Io(format!("Failed to create {}: {}", target.display(), e))
            })?;
            // the root is `dest` itself, not a copied directory
            if entry.depth() > 0 {
                stats.dirs += 1;
            }
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            stats.files += 1;
        } else {
            let bytes = fs::copy(entry.path(), &target).map_err(|e| {
                ScaffoldError::Io(format!(
                    "Failed to copy {} to {}: {}",
                    entry.path().display(),
                    target.display(),
                    e
                ))
            })?;
            stats.files += 1;
            stats.bytes += bytes;
        }
    }

    log::debug!(
        "copied {} -> {} ({} files, {} bytes)",
        src.display(),
        dest.display(),
        stats.files,
        stats.bytes
    );
    Ok(stats)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, target: &Path) -> Result<(), ScaffoldError> {
    let link = fs::read_link(src)?;
    std::os::unix::fs::symlink(&link, target).map_err(|e| {
        ScaffoldError::Io(format!("Failed to recreate link {}: {}", target.display(), e))
    })
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, target: &Path) -> Result<(), ScaffoldError> {
    fs::copy(src, target).map(|_| ()).map_err(|e| {
        ScaffoldError::Io(format!("Failed to copy {}: {}", src.display(), e))
    })
}

/// Remove a directory tree if it exists; returns whether anything was removed
pub fn remove_tree(path: &Path) -> Result<bool, ScaffoldError> {
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_dir_all(path)
        .map_err(|e| ScaffoldError::Io(format!("Failed to remove {}: {}", path.display(), e)))?;

    log::debug!("removed {}", path.display());
    Ok(true)
}

/// Count files, directories and bytes under `path`
pub fn tree_stats(path: &Path) -> Result<TreeStats, ScaffoldError> {
    let mut stats = TreeStats::default();

    // min_depth(1) skips the root itself
    for entry in WalkDir::new(path).min_depth(1).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            stats.dirs += 1;
        } else {
            stats.files += 1;
            stats.bytes += entry.metadata()?.len();
        }
    }

    Ok(stats)
}
