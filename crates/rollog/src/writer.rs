//! Rolling chunk-file writer: buffering, rotation, and the single file gate.
//!
//! All disk access is serialized behind one async mutex. Rotation decisions
//! depend on the combined state of the buffer and the current chunk length,
//! so no finer-grained locking is safe here.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::config::LoggerConfig;
use crate::console::ConsoleSink;
use crate::error::Result;
use crate::format;
use crate::record::SessionId;
use crate::severity::Severity;

/// Mutable writer state. Guarded by the file gate as one unit: the rotation
/// decision reads both the buffer length and the chunk length.
struct WriterState {
    /// Formatted text accepted but not yet flushed to disk.
    buffer: String,
    /// Current chunk index; starts past the count limit so the first flush
    /// resets to index 0 and truncates whatever a previous cycle left there.
    chunk_index: u32,
    /// Bytes written to the current chunk since it was (re)opened fresh.
    chunk_written: usize,
    /// The current chunk must be opened truncating, not appending. Set when
    /// a rotation lands on a (re)used index and cleared only once a
    /// truncating open has succeeded, so a failed attempt retries the
    /// truncation instead of appending after stale pre-rotation content.
    needs_truncate: bool,
    /// Whether the root folder has been created.
    folder_ready: bool,
}

/// Append-only writer over a rolling sequence of bounded chunk files.
///
/// Appends below the soft buffer limit are pure memory writes; the buffer is
/// flushed once the limit is reached or a flush is requested. Chunk files are
/// named `logid_<session>_<index>.log`; when a chunk would exceed its
/// capacity the writer advances to the next index, and after
/// `chunk_file_count_limit` chunks the index wraps to 0, truncating the
/// oldest data. Total retained volume is therefore bounded by
/// `chunk_file_count_limit * chunk_file_length_limit`.
///
/// I/O failures never propagate: the diagnostic goes to the console sink
/// only and the buffer is kept, so the next successful flush retries the
/// same data (at-least-once delivery).
pub struct RollingFileWriter {
    root_dir: PathBuf,
    session: SessionId,
    single_message_limit: usize,
    buffer_length_limit: usize,
    chunk_file_length_limit: usize,
    chunk_file_count_limit: u32,
    inner_error_limit: usize,
    threshold: RwLock<Severity>,
    enabled: AtomicBool,
    console: Arc<ConsoleSink>,
    state: Mutex<WriterState>,
}

impl RollingFileWriter {
    /// Creates a writer for the given session.
    #[must_use]
    pub fn new(config: &LoggerConfig, session: SessionId, console: Arc<ConsoleSink>) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            session,
            single_message_limit: config.single_message_limit,
            buffer_length_limit: config.buffer_length_limit,
            chunk_file_length_limit: config.chunk_file_length_limit,
            chunk_file_count_limit: config.chunk_file_count_limit,
            inner_error_limit: config.inner_error_description_limit,
            threshold: RwLock::new(config.file_threshold),
            enabled: AtomicBool::new(config.file_logging_enabled),
            console,
            state: Mutex::new(WriterState {
                buffer: String::new(),
                chunk_index: config.chunk_file_count_limit,
                chunk_written: 0,
                needs_truncate: false,
                folder_ready: false,
            }),
        }
    }

    /// Returns the current file severity threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Sets the file severity threshold.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Returns whether file logging is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Enables or disables file logging independently of severity.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Returns the session this writer's chunk files belong to.
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Returns the root folder chunk files are written under.
    #[must_use]
    pub fn root_dir(&self) -> &std::path::Path {
        &self.root_dir
    }

    /// Returns the number of buffered bytes not yet on disk.
    pub async fn buffered_len(&self) -> usize {
        self.state.lock().await.buffer.len()
    }

    /// Appends `text` to the buffer, flushing to disk when the soft limit is
    /// reached or `is_flush` is set.
    ///
    /// The text is truncated to the single-message limit before buffering.
    /// Severities below the file threshold are dropped, as is everything
    /// while file logging is disabled.
    pub async fn append(&self, text: &str, severity: Severity, is_flush: bool) {
        if !severity.is_at_least(self.threshold()) || !self.is_enabled() {
            return;
        }

        let truncated = truncate_to_boundary(text, self.single_message_limit);

        let mut state = self.state.lock().await;
        state.buffer.push_str(truncated);

        if state.buffer.len() < self.buffer_length_limit && !is_flush {
            // Deferred: held in memory, not yet durable.
            return;
        }

        if let Err(err) = self.flush_locked(&mut state).await {
            tracing::error!(error = %err, "chunk file write failed, buffer retained for retry");
            self.console.emit(
                &format::error_block(&err, self.inner_error_limit),
                Severity::Critical,
            );
        }
    }

    /// Forces the rotate-and-append sequence regardless of buffer fullness.
    ///
    /// With an empty buffer this is a no-op beyond taking the gate.
    pub async fn flush(&self) {
        self.append("", Severity::None, true).await;
    }

    async fn flush_locked(&self, state: &mut WriterState) -> Result<()> {
        if state.buffer.is_empty() {
            return Ok(());
        }

        let count_limit = self.chunk_file_count_limit.max(1);

        if state.chunk_index >= count_limit {
            state.chunk_index = 0;
            state.chunk_written = 0;
            state.needs_truncate = true;
        }

        if state.chunk_written + state.buffer.len() > self.chunk_file_length_limit {
            // Rotate before appending so no chunk ever exceeds its capacity.
            // Wrapping to a reused index retires that index's old content.
            state.chunk_index = (state.chunk_index + 1) % count_limit;
            state.chunk_written = 0;
            state.needs_truncate = true;
        }

        if !state.folder_ready {
            tokio::fs::create_dir_all(&self.root_dir).await?;
            state.folder_ready = true;
        }

        let path = self.chunk_path(state.chunk_index);
        tracing::trace!(
            path = %path.display(),
            bytes = state.buffer.len(),
            fresh = state.needs_truncate,
            "writing buffered log text to chunk file"
        );

        let mut options = OpenOptions::new();
        options.create(true).write(true);
        if state.needs_truncate {
            options.truncate(true);
        } else {
            options.append(true);
        }
        let mut file = options.open(&path).await?;
        // The open above discarded any stale content at this index; a
        // failure later in this attempt must append on retry.
        state.needs_truncate = false;
        file.write_all(state.buffer.as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;

        // A crash between the write above and this update under-counts the
        // chunk length and causes one premature rotation on restart; the
        // rotation bound itself still holds.
        state.chunk_written += state.buffer.len();
        state.buffer.clear();
        Ok(())
    }

    fn chunk_path(&self, index: u32) -> PathBuf {
        self.root_dir
            .join(format!("logid_{}_{index}.log", self.session))
    }
}

impl std::fmt::Debug for RollingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFileWriter")
            .field("root_dir", &self.root_dir)
            .field("session", &self.session)
            .field("enabled", &self.is_enabled())
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}

/// Truncates to at most `limit` bytes without splitting a UTF-8 character.
fn truncate_to_boundary(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
