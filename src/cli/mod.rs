//! CLI command handlers
//!
//! Bridges clap argument parsing with the orchestrator and backup layer.

pub mod backup;
pub mod scaffold;

pub use backup::{handle_backup_command, BackupCommands};
pub use scaffold::{exit_code, handle_run_command, RunArgs, EXIT_FATAL, EXIT_RESTORED};
