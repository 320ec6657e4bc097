//! Error types for the logging facility.
//!
//! None of these errors ever reach application code through the `write*`
//! surface; they exist for the internal fallback paths and for constructors.

use thiserror::Error;

/// Errors that can occur inside the logging facility.
#[derive(Debug, Error)]
pub enum LogError {
    /// A message template could not be combined with its arguments.
    #[error("template/argument mismatch: {0}")]
    Formatting(String),

    /// An object could not be serialized for logging.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The log folder or a chunk file could not be created, written, or flushed.
    #[error("file access error: {0}")]
    FileAccess(#[from] std::io::Error),
}

/// Result type alias for log operations.
pub type Result<T> = std::result::Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = LogError::Formatting("placeholder {3} out of range".to_string());
        assert!(err.to_string().contains("mismatch"));

        let json_err = serde_json::from_str::<i32>("not json").expect_err("must fail");
        let err = LogError::Serialization(json_err);
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LogError = io_err.into();
        assert!(err.to_string().contains("file access"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogError>();
    }
}
