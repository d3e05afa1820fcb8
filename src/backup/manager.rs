//! Backup manager for scaffold-pages
//!
//! Snapshots the source tree into `src_backup/` before the scaffold touches
//! it, and deletes the snapshot once the run succeeds.

use serde::Serialize;

use crate::config::paths::ScaffoldPaths;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::storage::tree::{copy_tree, remove_tree, tree_stats};

/// Metadata about the current backup tree
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    /// Full path to the backup tree
    pub path: std::path::PathBuf,
    /// Number of files in the backup
    pub files: u64,
    /// Total size in bytes
    pub size_bytes: u64,
}

/// Manages the single transient backup of the source tree
pub struct BackupManager {
    paths: ScaffoldPaths,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: ScaffoldPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ScaffoldPaths {
        &self.paths
    }

    /// Snapshot the source tree
    ///
    /// Returns `false` without touching anything when there is no source tree.
    /// A leftover backup from an earlier run is replaced.
    pub fn create_backup(&self) -> ScaffoldResult<bool> {
        let source = self.paths.source_dir();
        if !source.exists() {
            log::info!("no source tree at {}, nothing to back up", source.display());
            return Ok(false);
        }
        if !source.is_dir() {
            return Err(ScaffoldError::Backup(format!(
                "{} is not a directory",
                source.display()
            )));
        }

        let backup = self.paths.backup_dir();
        if remove_tree(&backup)
            .map_err(|e| ScaffoldError::Backup(format!("Failed to remove old backup: {}", e)))?
        {
            log::warn!("replaced stale backup at {}", backup.display());
        }

        // A partial snapshot must not survive: restoring it would delete
        // whatever the copy had not reached.
        let stats = match copy_tree(&source, &backup) {
            Ok(stats) => stats,
            Err(e) => {
                if let Err(cleanup) = remove_tree(&backup) {
                    log::error!(
                        "could not remove partial backup at {}: {}",
                        backup.display(),
                        cleanup
                    );
                }
                return Err(ScaffoldError::Backup(format!(
                    "Failed to copy source tree: {}",
                    e
                )));
            }
        };

        log::info!(
            "backed up {} files ({} bytes) to {}",
            stats.files,
            stats.bytes,
            backup.display()
        );
        Ok(true)
    }

    /// Delete the backup tree if present
    pub fn discard_backup(&self) -> ScaffoldResult<bool> {
        remove_tree(&self.paths.backup_dir())
            .map_err(|e| ScaffoldError::Backup(format!("Failed to remove backup: {}", e)))
    }

    pub fn has_backup(&self) -> bool {
        self.paths.has_backup()
    }

    /// Describe the backup tree, if one exists
    pub fn backup_info(&self) -> ScaffoldResult<Option<BackupInfo>> {
        let path = self.paths.backup_dir();
        if !path.exists() {
            return Ok(None);
        }

        let stats = tree_stats(&path)?;
        Ok(Some(BackupInfo {
            path,
            files: stats.files,
            size_bytes: stats.bytes,
        }))
    }
}
