//! Backup CLI commands
//!
//! Manual handling of a `src_backup/` left behind by an interrupted or
//! failed run.

use clap::Subcommand;
use serde::Serialize;

use crate::backup::{BackupInfo, BackupManager, RestoreOutcome};
use crate::config::paths::ScaffoldPaths;
use crate::error::ScaffoldResult;

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Restore src/ from a leftover src_backup/
    Restore {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Delete a leftover src_backup/
    Discard,

    /// Show whether src/ and src_backup/ exist
    Status,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    root: std::path::PathBuf,
    source_exists: bool,
    backup: Option<BackupInfo>,
}

#[derive(Debug, Serialize)]
struct RestoreReport {
    /// `None` when the restore was held back for lack of `--force`
    outcome: Option<RestoreOutcome>,
    requires_force: bool,
    backup: Option<BackupInfo>,
}

#[derive(Debug, Serialize)]
struct DiscardReport {
    path: std::path::PathBuf,
    removed: bool,
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &ScaffoldPaths,
    cmd: BackupCommands,
    json: bool,
) -> ScaffoldResult<()> {
    let manager = BackupManager::new(paths.clone());

    match cmd {
        BackupCommands::Restore { force } => {
            let Some(info) = manager.backup_info()? else {
                if json {
                    print_json(&RestoreReport {
                        outcome: Some(RestoreOutcome::NoBackup),
                        requires_force: false,
                        backup: None,
                    })?;
                } else {
                    println!("{}", RestoreOutcome::NoBackup);
                }
                return Ok(());
            };

            if !force {
                if json {
                    return print_json(&RestoreReport {
                        outcome: None,
                        requires_force: true,
                        backup: Some(info),
                    });
                }

                println!(
                    "Backup: {} ({} files, {})",
                    info.path.display(),
                    info.files,
                    format_size(info.size_bytes)
                );
                println!(
                    "WARNING: This will replace {} with the backup!",
                    paths.source_dir().display()
                );
                println!("To proceed, run again with --force flag:");
                println!("  scaffold-pages restore --force");
                return Ok(());
            }

            let outcome = manager.restore_backup()?;
            if json {
                print_json(&RestoreReport {
                    outcome: Some(outcome),
                    requires_force: false,
                    backup: Some(info),
                })?;
            } else {
                println!("{}", outcome);
            }
        }

        BackupCommands::Discard => {
            let report = DiscardReport {
                path: paths.backup_dir(),
                removed: manager.discard_backup()?,
            };

            if json {
                return print_json(&report);
            }

            if report.removed {
                println!("Removed {}", report.path.display());
            } else {
                println!("No backup to remove.");
            }
        }

        BackupCommands::Status => {
            let report = StatusReport {
                root: paths.root().to_path_buf(),
                source_exists: paths.has_source(),
                backup: manager.backup_info()?,
            };

            if json {
                return print_json(&report);
            }

            println!("Project root: {}", report.root.display());
            println!(
                "Source tree:  {}",
                if report.source_exists { "present" } else { "missing" }
            );
            match &report.backup {
                Some(info) => println!(
                    "Backup tree:  present ({} files, {})",
                    info.files,
                    format_size(info.size_bytes)
                ),
                None => println!("Backup tree:  none"),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(report: &T) -> ScaffoldResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Format a file size in human-readable form
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
