//! Core record types: the per-call log record, the per-process session
//! identifier, and the caller identity used by trace output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::severity::Severity;

/// Opaque token generated once per logger instance.
///
/// Embedded in every chunk file name so files from different process runs
/// never collide without any cross-process coordination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh session identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single log record, immutable once constructed.
///
/// Created by the logger per call, consumed by the formatter, and discarded
/// once it has been turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
    /// Severity annotation for sink filtering.
    pub severity: Severity,
    /// The already-substituted message text.
    pub message: String,
    /// The session this record belongs to.
    pub session: SessionId,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>, session: SessionId) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.into(),
            session,
        }
    }
}

/// Caller identity attached to trace output.
///
/// Supplied by the calling environment (typically via [`trace_here!`]), never
/// computed by the logger itself.
///
/// [`trace_here!`]: crate::trace_here
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Name of the calling method or module path.
    pub method: String,
    /// Source file path, forward-slash separated.
    pub file: String,
    /// Line number within the file.
    pub line: u32,
}

impl Caller {
    /// Creates a caller identity, normalizing path separators.
    #[must_use]
    pub fn new(method: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            method: method.into(),
            file: file.into().replace('\\', "/"),
            line,
        }
    }

    /// Returns the base name of the source file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }

    /// Returns the directory portion of the source file path.
    #[must_use]
    pub fn directory(&self) -> &str {
        match self.file.rfind('/') {
            Some(idx) => &self.file[..idx],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_unique_and_opaque() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        // Hyphen-less uuid rendering, safe for file names.
        assert_eq!(a.as_str().len(), 32);
        assert!(!a.as_str().contains('-'));
    }

    #[test]
    fn record_carries_message_and_severity() {
        let session = SessionId::generate();
        let record = LogRecord::new(Severity::Warning, "disk almost full", session.clone());
        assert_eq!(record.severity, Severity::Warning);
        assert_eq!(record.message, "disk almost full");
        assert_eq!(record.session, session);
    }

    #[test]
    fn caller_splits_path_components() {
        let caller = Caller::new("connect", "src/net/client.rs", 42);
        assert_eq!(caller.file_name(), "client.rs");
        assert_eq!(caller.directory(), "src/net");
        assert_eq!(caller.line, 42);
    }

    #[test]
    fn caller_normalizes_backslashes() {
        let caller = Caller::new("run", "src\\jobs\\worker.rs", 7);
        assert_eq!(caller.file_name(), "worker.rs");
        assert_eq!(caller.directory(), "src/jobs");
    }

    #[test]
    fn caller_without_directory() {
        let caller = Caller::new("main", "main.rs", 1);
        assert_eq!(caller.file_name(), "main.rs");
        assert_eq!(caller.directory(), "");
    }
}
