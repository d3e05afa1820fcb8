//! Custom error types for scaffold-pages
//!
//! Every fault the tool can hit (filesystem, backup, template, validation)
//! is one variant of [`ScaffoldError`], defined with thiserror.

use thiserror::Error;

/// The main error type for scaffold-pages operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid settings (page names, paths)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backup creation or deletion failed
    #[error("Backup error: {0}")]
    Backup(String),

    /// A template could not be written
    #[error("Template error: {0}")]
    Template(String),

    /// The run failed and the follow-up restore failed as well
    #[error("Restore failed after error ({original}): {restore}")]
    RestoreFailed { original: String, restore: String },
}

impl ScaffoldError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure path itself failed
    pub fn is_restore_failure(&self) -> bool {
        matches!(self, Self::RestoreFailed { .. })
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<walkdir::Error> for ScaffoldError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(format!("JSON: {}", err))
    }
}

/// Result type alias for scaffold-pages operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScaffoldError::Validation("bad page name".into());
        assert_eq!(err.to_string(), "Validation error: bad page name");
        assert!(err.is_validation());
    }

    #[test]
    fn test_restore_failed_display() {
        let err = ScaffoldError::RestoreFailed {
            original: "disk full".into(),
            restore: "permission denied".into(),
        };
        assert_eq!(
            err.to_string(),
            "Restore failed after error (disk full): permission denied"
        );
        assert!(err.is_restore_failure());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScaffoldError = io_err.into();
        assert!(matches!(err, ScaffoldError::Io(_)));
    }
}
