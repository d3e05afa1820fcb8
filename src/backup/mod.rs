//! Backup system for scaffold-pages
//!
//! A single, transient, copy-based snapshot of `src/` kept in `src_backup/`
//! for the duration of one run.
//!
//! # Lifecycle
//!
//! - `create_backup`: replace any old snapshot with a fresh copy of `src/`
//! - `restore_backup`: delete `src/` and copy the snapshot back
//! - `discard_backup`: delete the snapshot after a successful run
//!
//! The copy is not atomic. A fault part-way through `create_backup` leaves a
//! partial snapshot, which the next run deletes before copying again.
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_pages::backup::BackupManager;
//! use scaffold_pages::config::ScaffoldPaths;
//!
//! let manager = BackupManager::new(ScaffoldPaths::new()?);
//! if manager.create_backup()? {
//!     // ... mutate src/ ...
//!     manager.discard_backup()?;
//! }
//! ```

mod manager;
mod restore;

pub use manager::{BackupInfo, BackupManager};
pub use restore::RestoreOutcome;
