//! Error types for dirmirror

use std::path::PathBuf;
use thiserror::Error;

/// Error types for dirmirror operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (bad paths, bad interval)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A path that must be a directory is not one
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl SyncError {
    /// Check if this error is a startup configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, SyncError::Config(_) | SyncError::NotADirectory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let sync_error: SyncError = io_error.into();

        assert!(matches!(sync_error, SyncError::Io(_)));
        assert!(sync_error.to_string().contains("IO error"));
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), SyncError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), SyncError::Io(_)));
    }

    #[test]
    fn test_config_error() {
        let error = SyncError::Config("Invalid source folder".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid source folder"));
        assert!(error.is_config_error());
    }

    #[test]
    fn test_not_a_directory() {
        let error = SyncError::NotADirectory {
            path: PathBuf::from("/etc/passwd"),
        };
        assert!(error.to_string().contains("Not a directory"));
        assert!(error.to_string().contains("/etc/passwd"));
        assert!(error.is_config_error());
    }

    #[test]
    fn test_io_error_is_not_config_error() {
        let error = SyncError::Io(IoError::new(ErrorKind::PermissionDenied, "denied"));
        assert!(!error.is_config_error());
    }
}
