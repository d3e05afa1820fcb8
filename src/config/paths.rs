//! Path management for scaffold-pages
//!
//! Every path the tool touches is derived from a single project root.
//!
//! ## Root Resolution Order
//!
//! 1. `--root` flag (handled by the CLI)
//! 2. `SCAFFOLD_PAGES_ROOT` environment variable
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Name of the source tree directory
pub const SOURCE_DIR: &str = "src";

/// Name of the transient backup directory
pub const BACKUP_DIR: &str = "src_backup";

/// File extension for generated components
pub const COMPONENT_EXT: &str = "tsx";

/// Manages all paths used by scaffold-pages
#[derive(Debug, Clone)]
pub struct ScaffoldPaths {
    /// Project root that contains `src/` and `src_backup/`
    root: PathBuf,
}

impl ScaffoldPaths {
    /// Resolve the project root from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ScaffoldError> {
        let root = if let Ok(custom) = std::env::var("SCAFFOLD_PAGES_ROOT") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ScaffoldError::Io(format!("Failed to determine current directory: {}", e))
            })?
        };

        Ok(Self { root })
    }

    /// Create ScaffoldPaths with an explicit root (CLI flag, tests)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The source tree (`<root>/src`)
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// The backup tree (`<root>/src_backup`)
    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(BACKUP_DIR)
    }

    /// `<root>/src/components`
    pub fn components_dir(&self) -> PathBuf {
        self.source_dir().join("components")
    }

    /// `<root>/src/pages`
    pub fn pages_dir(&self) -> PathBuf {
        self.source_dir().join("pages")
    }

    /// Directories the scaffold needs, relative to the root
    pub fn scaffold_directories(&self) -> Vec<PathBuf> {
        vec![
            Path::new(SOURCE_DIR).join("components"),
            Path::new(SOURCE_DIR).join("pages"),
        ]
    }

    /// Path to the shared layout component
    pub fn layout_file(&self) -> PathBuf {
        self.components_dir()
            .join(format!("SharedLayout.{}", COMPONENT_EXT))
    }

    /// Path to the component file for a page
    pub fn page_file(&self, page_name: &str) -> PathBuf {
        self.pages_dir().join(format!("{}.{}", page_name, COMPONENT_EXT))
    }

    pub fn has_source(&self) -> bool {
        self.source_dir().exists()
    }

    pub fn has_backup(&self) -> bool {
        self.backup_dir().exists()
    }
}
