//! Logger configuration and the rolling-file limit set.

use std::path::PathBuf;

use crate::severity::Severity;

/// Default cap on a single message entering the file buffer, in bytes.
///
/// Long writes destabilize constrained targets; everything past this length
/// is truncated before buffering.
pub const DEFAULT_SINGLE_MESSAGE_LIMIT: usize = 100 * 1024;

/// Configuration for a [`Logger`] instance.
///
/// All options are in-process properties; there is no file- or
/// environment-based configuration surface.
///
/// [`Logger`]: crate::logger::Logger
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Root folder for chunk files, created on first use.
    pub root_dir: PathBuf,
    /// Application name used as the console visibility marker prefix.
    pub app_name: String,
    /// Minimum severity mirrored to the console sink.
    pub console_threshold: Severity,
    /// Minimum severity persisted to chunk files.
    pub file_threshold: Severity,
    /// Global switch for the file path, independent of severity.
    pub file_logging_enabled: bool,
    /// Hard per-message truncation limit (bytes) before buffering.
    pub single_message_limit: usize,
    /// Soft buffer limit (bytes) that triggers a flush to disk.
    pub buffer_length_limit: usize,
    /// Capacity of one chunk file (bytes); exceeding it rotates.
    pub chunk_file_length_limit: usize,
    /// Number of chunk indices before the rotation wraps to 0.
    pub chunk_file_count_limit: u32,
    /// Cap on the accumulated text of an error's cause chain.
    pub inner_error_description_limit: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let single = DEFAULT_SINGLE_MESSAGE_LIMIT;
        Self {
            root_dir: PathBuf::from("Logs"),
            app_name: "rollog".to_string(),
            console_threshold: Severity::Default,
            file_threshold: Severity::Critical,
            file_logging_enabled: true,
            single_message_limit: single,
            buffer_length_limit: single,
            chunk_file_length_limit: 10 * single,
            chunk_file_count_limit: 1000,
            inner_error_description_limit: single,
        }
    }
}

impl LoggerConfig {
    /// Creates a config rooted at the given log folder.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the application name used in the console prefix.
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Sets the console severity threshold.
    #[must_use]
    pub const fn with_console_threshold(mut self, threshold: Severity) -> Self {
        self.console_threshold = threshold;
        self
    }

    /// Sets the file severity threshold.
    #[must_use]
    pub const fn with_file_threshold(mut self, threshold: Severity) -> Self {
        self.file_threshold = threshold;
        self
    }

    /// Enables or disables the file path entirely.
    #[must_use]
    pub const fn with_file_logging(mut self, enabled: bool) -> Self {
        self.file_logging_enabled = enabled;
        self
    }

    /// Sets the per-message truncation limit.
    #[must_use]
    pub const fn with_single_message_limit(mut self, bytes: usize) -> Self {
        self.single_message_limit = bytes;
        self
    }

    /// Sets the soft buffer limit that triggers a flush.
    #[must_use]
    pub const fn with_buffer_length_limit(mut self, bytes: usize) -> Self {
        self.buffer_length_limit = bytes;
        self
    }

    /// Sets the capacity of one chunk file.
    #[must_use]
    pub const fn with_chunk_file_length_limit(mut self, bytes: usize) -> Self {
        self.chunk_file_length_limit = bytes;
        self
    }

    /// Sets how many chunk indices exist before wrap-around.
    #[must_use]
    pub const fn with_chunk_file_count_limit(mut self, count: u32) -> Self {
        self.chunk_file_count_limit = count;
        self
    }

    /// Sets the cap on rendered error cause chains.
    #[must_use]
    pub const fn with_inner_error_description_limit(mut self, bytes: usize) -> Self {
        self.inner_error_description_limit = bytes;
        self
    }

    /// Total retained volume bound: count limit times chunk capacity.
    #[must_use]
    pub const fn log_roll_length_limit(&self) -> u64 {
        self.chunk_file_count_limit as u64 * self.chunk_file_length_limit as u64
    }
}
