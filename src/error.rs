//! Error types and handling for Council
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every failure unwinds to `main`, which prints a single formatted line and
//! exits with a non-zero status; nothing is retried or cleaned up mid-install.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Council operations
#[derive(Error, Diagnostic, Debug)]
pub enum CouncilError {
    #[error("Bundled resources not found near: {path}")]
    #[diagnostic(
        code(council::resources::not_found),
        help(
            "Council looks for the shipped 'skills/' tree next to its own executable. \
             Set COUNCIL_RESOURCE_ROOT (or pass --resource-root) to the directory containing it."
        )
    )]
    ResourcesNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(council::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(council::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(council::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(council::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CouncilError {
    fn from(err: std::io::Error) -> Self {
        CouncilError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CouncilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CouncilError::ResourcesNotFound {
            path: "/opt/council/bin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Bundled resources not found near: /opt/council/bin"
        );
    }

    #[test]
    fn test_error_code() {
        let err = CouncilError::ResourcesNotFound {
            path: "/tmp".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("council::resources::not_found".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let council_err: CouncilError = io_err.into();
        assert!(matches!(council_err, CouncilError::IoError { .. }));
        assert!(council_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_file_errors_carry_reason() {
        let err = CouncilError::FileReadFailed {
            path: "/path/to/file.txt".to_string(),
            reason: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("/path/to/file.txt"));
        assert!(err.to_string().contains("permission denied"));

        let err = CouncilError::FileWriteFailed {
            path: "/path/to/file.txt".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));

        let err = CouncilError::DirCreateFailed {
            path: "/path/to/dir".to_string(),
            reason: "read-only file system".to_string(),
        };
        assert!(err.to_string().contains("read-only file system"));
    }
}
