//! Backup restoration for scaffold-pages
//!
//! Puts the snapshot in `src_backup/` back in place of `src/`.

use std::fmt;

use serde::Serialize;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::storage::tree::{copy_tree, remove_tree};

use super::manager::BackupManager;

/// Result of a restore attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreOutcome {
    /// The source tree was replaced with the backup
    Restored,
    /// There was no backup to restore from
    NoBackup,
}

impl RestoreOutcome {
    /// User-facing status line
    pub fn message(&self) -> &'static str {
        match self {
            Self::Restored => "Backup restored successfully",
            Self::NoBackup => "No backup found to restore",
        }
    }
}

impl fmt::Display for RestoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl BackupManager {
    /// Replace the source tree with the backup tree
    ///
    /// The backup itself is left in place; callers discard it explicitly.
    pub fn restore_backup(&self) -> ScaffoldResult<RestoreOutcome> {
        let backup = self.paths().backup_dir();
        if !backup.exists() {
            log::warn!("restore requested but {} does not exist", backup.display());
            return Ok(RestoreOutcome::NoBackup);
        }

        let source = self.paths().source_dir();
        remove_tree(&source).map_err(|e| {
            ScaffoldError::Backup(format!("Failed to clear source tree: {}", e))
        })?;

        let stats = copy_tree(&backup, &source).map_err(|e| {
            ScaffoldError::Backup(format!("Failed to copy backup into place: {}", e))
        })?;

        log::info!(
            "restored {} files from {}",
            stats.files,
            backup.display()
        );
        Ok(RestoreOutcome::Restored)
    }
}
