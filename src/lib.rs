//! scaffold-pages - shared layout and page component scaffolding
//!
//! Writes a fixed `SharedLayout` component and one component per page into
//! a project's `src/` tree. The tree is copied to `src_backup/` first and
//! copied back if anything fails.
//!
//! # Architecture
//!
//! - `config`: project paths and the page set
//! - `error`: custom error types
//! - `storage`: directory creation, atomic writes, tree copy
//! - `backup`: snapshot/restore/discard of `src/`
//! - `templates`: layout and page sources and the writer
//! - `orchestrator`: one run, with the restore-on-failure path
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use scaffold_pages::config::{ScaffoldPaths, ScaffoldSettings};
//! use scaffold_pages::orchestrator::Orchestrator;
//!
//! let paths = ScaffoldPaths::new()?;
//! let report = Orchestrator::new(paths, ScaffoldSettings::default()).run()?;
//! assert!(report.succeeded());
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod storage;
pub mod templates;

pub use error::{ScaffoldError, ScaffoldResult};
