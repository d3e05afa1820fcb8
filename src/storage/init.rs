//! Directory initialization
//!
//! Creates the directory skeleton the scaffold writes into.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::ScaffoldPaths;
use crate::error::ScaffoldError;

/// Create each directory (relative to `root`) along with missing parents
///
/// Already-present directories are left alone. Returns the directories that
/// did not exist before the call.
pub fn create_directories<P: AsRef<Path>>(
    root: &Path,
    dirs: &[P],
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut created = Vec::new();

    for dir in dirs {
        let path = root.join(dir.as_ref());
        if path.is_dir() {
            continue;
        }

        fs::create_dir_all(&path).map_err(|e| {
            ScaffoldError::Io(format!("Failed to create directory {}: {}", path.display(), e))
        })?;
        log::debug!("created directory {}", path.display());
        created.push(path);
    }

    Ok(created)
}

/// Ensure `src/components` and `src/pages` exist under the project root
pub fn initialize_directories(paths: &ScaffoldPaths) -> Result<Vec<PathBuf>, ScaffoldError> {
    create_directories(paths.root(), &paths.scaffold_directories())
}
