//! The public logging facade: severity filtering, routing to both sinks,
//! and the synchronous call forms with their detach-on-timeout policy.

use std::fmt::{Debug, Display};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use serde::Serialize;

use crate::config::LoggerConfig;
use crate::console::ConsoleSink;
use crate::format;
use crate::observer::{LogObserver, ObserverSet};
use crate::record::{Caller, LogRecord, SessionId};
use crate::severity::Severity;
use crate::writer::RollingFileWriter;

/// How long a synchronous call form waits for the underlying async path
/// before detaching. Protects latency-sensitive callers from slow disk I/O.
const WRITE_WAIT_TIMEOUT: Duration = Duration::from_millis(20);

/// Process-local logger: one instance per process run.
///
/// Routes every accepted record to the console sink and the rolling file
/// writer. Cheap to clone; clones share all state including the session.
///
/// No `write*` or `flush` call ever returns an error: every internal failure
/// degrades to reduced logging fidelity (console-only, or dropped) instead
/// of aborting the caller.
#[derive(Clone)]
pub struct Logger {
    session: SessionId,
    console: Arc<ConsoleSink>,
    writer: Arc<RollingFileWriter>,
    observers: Arc<ObserverSet>,
    inner_error_limit: usize,
    handle: Option<tokio::runtime::Handle>,
}

impl Logger {
    /// Creates a logger with a fresh session identifier.
    ///
    /// When constructed inside a tokio runtime the handle is captured so the
    /// blocking call forms can schedule their detached work; otherwise they
    /// fall back to the runtime active at call time, if any.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let observers = Arc::new(ObserverSet::new());
        let console = Arc::new(ConsoleSink::new(
            &config.app_name,
            config.console_threshold,
            Arc::clone(&observers),
        ));
        Self::assemble(config, console, observers)
    }

    /// Creates a logger whose console sink writes to `output` instead of
    /// stderr. Mainly for tests.
    #[must_use]
    pub fn with_console_output(
        config: LoggerConfig,
        output: Box<dyn std::io::Write + Send>,
    ) -> Self {
        let observers = Arc::new(ObserverSet::new());
        let console = Arc::new(ConsoleSink::with_output(
            &config.app_name,
            config.console_threshold,
            Arc::clone(&observers),
            output,
        ));
        Self::assemble(config, console, observers)
    }

    fn assemble(
        config: LoggerConfig,
        console: Arc<ConsoleSink>,
        observers: Arc<ObserverSet>,
    ) -> Self {
        let session = SessionId::generate();
        let writer = Arc::new(RollingFileWriter::new(
            &config,
            session.clone(),
            Arc::clone(&console),
        ));
        Self {
            session,
            console,
            writer,
            observers,
            inner_error_limit: config.inner_error_description_limit,
            handle: tokio::runtime::Handle::try_current().ok(),
        }
    }

    // ========== Write surface ==========

    /// Formats a templated message and routes it to both sinks.
    ///
    /// `args` fill positional `{0}`, `{1}`, … placeholders; on a mismatch the
    /// raw template is logged verbatim.
    pub async fn write(&self, template: &str, severity: Severity, args: &[&dyn Display]) {
        if !self.passes_any_threshold(severity) {
            return;
        }
        let line = self.make_line(template, args, severity);
        Self::route(
            Arc::clone(&self.console),
            Arc::clone(&self.writer),
            line,
            severity,
            false,
        )
        .await;
    }

    /// Writes a high-volume diagnostic at [`Severity::Flood`].
    pub async fn write_flood(&self, template: &str, args: &[&dyn Display]) {
        self.write(template, Severity::Flood, args).await;
    }

    /// Writes an error and its cause chain at [`Severity::Exceptions`].
    pub async fn write_error(&self, error: &(dyn std::error::Error + 'static)) {
        self.write_error_at(error, Severity::Exceptions).await;
    }

    /// Writes an error and its cause chain at [`Severity::Critical`].
    pub async fn write_critical(&self, error: &(dyn std::error::Error + 'static)) {
        self.write_error_at(error, Severity::Critical).await;
    }

    /// Writes an error at the given severity, then forces a flush — errors
    /// are important enough to be made durable immediately.
    ///
    /// The exception observers are notified regardless of sink filtering.
    pub async fn write_error_at(
        &self,
        error: &(dyn std::error::Error + 'static),
        severity: Severity,
    ) {
        let block = format::error_block(error, self.inner_error_limit);
        if self.passes_any_threshold(severity) {
            let line = self.make_line(&block, &[], severity);
            Self::route(
                Arc::clone(&self.console),
                Arc::clone(&self.writer),
                line,
                severity,
                true,
            )
            .await;
        }
        self.observers
            .notify_exception(&format!(" : {severity} : \n{block}"));
    }

    /// Serializes a value to pretty JSON and logs it.
    ///
    /// On serialization failure the value's `Debug` rendering is logged
    /// instead; the call itself never fails.
    pub async fn write_object<T: Serialize + Debug>(&self, value: &T, severity: Severity) {
        let message = render_object(value);
        self.write(&message, severity, &[]).await;
    }

    /// Emits one caller-identity line (`method : file:line : directory`)
    /// followed by the message, if any.
    ///
    /// The caller identity is supplied by the calling environment — see the
    /// [`trace_here!`](crate::trace_here) macro.
    pub async fn write_trace(&self, message: Option<&str>, severity: Severity, caller: &Caller) {
        let file_name = caller.file_name();
        let directory = caller.directory();
        self.write(
            "{0} : {1}:{2} : {3}",
            severity,
            &[&caller.method, &file_name, &caller.line, &directory],
        )
        .await;
        if let Some(message) = message {
            self.write(message, severity, &[]).await;
        }
    }

    /// Like [`write_trace`](Self::write_trace), but the message is a
    /// serialized value: the caller-identity line is followed by the value's
    /// pretty JSON (or its `Debug` rendering when serialization fails).
    pub async fn write_trace_object<T: Serialize + Debug>(
        &self,
        value: &T,
        severity: Severity,
        caller: &Caller,
    ) {
        let message = render_object(value);
        self.write_trace(Some(&message), severity, caller).await;
    }

    /// Forces the rolling file writer to flush its buffer immediately,
    /// regardless of buffer fullness.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    // ========== Blocking call forms ==========
    //
    // Each form starts the asynchronous operation, waits up to
    // WRITE_WAIT_TIMEOUT for it, and returns regardless of completion. The
    // operation is never cancelled: data already queued is still written by
    // the detached task. Intended for non-async call sites.

    /// Blocking form of [`write`](Self::write).
    pub fn write_blocking(&self, template: &str, severity: Severity, args: &[&dyn Display]) {
        if !self.passes_any_threshold(severity) {
            return;
        }
        let line = self.make_line(template, args, severity);
        let console = Arc::clone(&self.console);
        let writer = Arc::clone(&self.writer);
        self.run_detached(
            Self::route(console, writer, line, severity, false),
            Some(WRITE_WAIT_TIMEOUT),
        );
    }

    /// Blocking form of [`write_error`](Self::write_error).
    pub fn write_error_blocking(&self, error: &(dyn std::error::Error + 'static)) {
        let severity = Severity::Exceptions;
        let block = format::error_block(error, self.inner_error_limit);
        let line = self
            .passes_any_threshold(severity)
            .then(|| self.make_line(&block, &[], severity));
        let console = Arc::clone(&self.console);
        let writer = Arc::clone(&self.writer);
        let observers = Arc::clone(&self.observers);
        self.run_detached(
            async move {
                if let Some(line) = line {
                    Self::route(console, writer, line, severity, true).await;
                }
                observers.notify_exception(&format!(" : {severity} : \n{block}"));
            },
            Some(WRITE_WAIT_TIMEOUT),
        );
    }

    /// Blocking form of [`write_object`](Self::write_object).
    pub fn write_object_blocking<T: Serialize + Debug>(&self, value: &T, severity: Severity) {
        let message = render_object(value);
        self.write_blocking(&message, severity, &[]);
    }

    /// Blocking form of [`flush`](Self::flush); waits for the flush to
    /// complete rather than detaching.
    pub fn flush_blocking(&self) {
        let writer = Arc::clone(&self.writer);
        self.run_detached(async move { writer.flush().await }, None);
    }

    // ========== Configuration surface ==========

    /// Returns the session identifier embedded in this run's chunk files.
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    /// Returns the root folder chunk files are written under.
    #[must_use]
    pub fn root_dir(&self) -> &std::path::Path {
        self.writer.root_dir()
    }

    /// Returns the console severity threshold.
    #[must_use]
    pub fn console_threshold(&self) -> Severity {
        self.console.threshold()
    }

    /// Sets the console severity threshold.
    pub fn set_console_threshold(&self, threshold: Severity) {
        self.console.set_threshold(threshold);
    }

    /// Returns the file severity threshold.
    #[must_use]
    pub fn file_threshold(&self) -> Severity {
        self.writer.threshold()
    }

    /// Sets the file severity threshold.
    pub fn set_file_threshold(&self, threshold: Severity) {
        self.writer.set_threshold(threshold);
    }

    /// Returns whether file logging is enabled.
    #[must_use]
    pub fn file_logging_enabled(&self) -> bool {
        self.writer.is_enabled()
    }

    /// Enables or disables file logging independently of severity.
    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.writer.set_enabled(enabled);
    }

    // ========== Observers ==========

    /// Registers an observer for line- and exception-written notifications.
    pub fn register_observer(&self, observer: Arc<dyn LogObserver>) {
        self.observers.register(observer);
    }

    /// Registers a closure called with each line reaching the console sink.
    pub fn on_line_written<F>(&self, hook: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.observers.register(Arc::new(LineHook(hook)));
    }

    /// Registers a closure called with each rendered error block.
    pub fn on_exception_written<F>(&self, hook: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.observers.register(Arc::new(ExceptionHook(hook)));
    }

    // ========== Internal ==========

    fn passes_any_threshold(&self, severity: Severity) -> bool {
        severity.is_at_least(self.console.threshold())
            || severity.is_at_least(self.writer.threshold())
    }

    /// Builds the record for this call and renders it as a line.
    fn make_line(&self, template: &str, args: &[&dyn Display], severity: Severity) -> String {
        let record = LogRecord::new(
            severity,
            format::message(template, args),
            self.session.clone(),
        );
        format::record(&record)
    }

    /// Mirrors the line to the console and appends it to the file path.
    ///
    /// The two sinks are independent side channels: there is no ordering
    /// guarantee between the console mirror and the durable append.
    async fn route(
        console: Arc<ConsoleSink>,
        writer: Arc<RollingFileWriter>,
        line: String,
        severity: Severity,
        force_flush: bool,
    ) {
        console.emit(&line, severity);
        let mut text = line;
        text.push('\n');
        writer.append(&text, severity, false).await;
        if force_flush {
            writer.flush().await;
        }
    }

    /// Spawns `work` on the captured (or ambient) runtime and waits for it
    /// up to `wait`; `None` waits until completion. On timeout the task
    /// keeps running to completion in the background.
    fn run_detached<F>(&self, work: F, wait: Option<Duration>)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = self
            .handle
            .clone()
            .or_else(|| tokio::runtime::Handle::try_current().ok());
        let Some(handle) = handle else {
            tracing::warn!("blocking log call without a tokio runtime; record dropped");
            return;
        };

        let (tx, rx) = mpsc::channel();
        handle.spawn(async move {
            work.await;
            let _ = tx.send(());
        });
        match wait {
            Some(timeout) => {
                let _ = rx.recv_timeout(timeout);
            }
            None => {
                let _ = rx.recv();
            }
        }
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("session", &self.session)
            .field("console_threshold", &self.console_threshold())
            .field("file_threshold", &self.file_threshold())
            .field("file_logging_enabled", &self.file_logging_enabled())
            .finish_non_exhaustive()
    }
}

fn render_object<T: Serialize + Debug>(value: &T) -> String {
    match json_pretty(value) {
        Ok(json) => format!("object as JSON:\n {json}"),
        Err(err) => {
            tracing::debug!(error = %err, "object serialization failed, using debug rendering");
            format!("object :\n {value:?}")
        }
    }
}

fn json_pretty<T: Serialize>(value: &T) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

struct LineHook<F>(F);

impl<F> LogObserver for LineHook<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn on_line_written(&self, text: &str) {
        (self.0)(text);
    }
}

struct ExceptionHook<F>(F);

impl<F> LogObserver for ExceptionHook<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn on_exception_written(&self, text: &str) {
        (self.0)(text);
    }
}

/// Emits a trace line carrying the caller's identity, captured from the call
/// site via `module_path!()`, `file!()` and `line!()`.
///
/// Expands to a future; `.await` it:
///
/// ```ignore
/// trace_here!(logger).await;
/// trace_here!(logger, "cache warmed").await;
/// ```
#[macro_export]
macro_rules! trace_here {
    ($logger:expr) => {
        $logger.write_trace(
            ::core::option::Option::None,
            $crate::Severity::Trace,
            &$crate::Caller::new(module_path!(), file!(), line!()),
        )
    };
    ($logger:expr, $message:expr) => {
        $logger.write_trace(
            ::core::option::Option::Some($message),
            $crate::Severity::Trace,
            &$crate::Caller::new(module_path!(), file!(), line!()),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn make_logger(config: LoggerConfig) -> (Logger, SharedBuffer, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let config = LoggerConfig {
            root_dir: dir.path().join("Logs"),
            ..config
        };
        let buffer = SharedBuffer::default();
        let logger = Logger::with_console_output(config, Box::new(buffer.clone()));
        (logger, buffer, dir)
    }

    fn chunk_contents(logger: &Logger) -> String {
        let Ok(entries) = std::fs::read_dir(logger.root_dir()) else {
            return String::new();
        };
        let mut files: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        files.sort();
        files
            .iter()
            .filter_map(|p| std::fs::read_to_string(p).ok())
            .collect()
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..200 {
            if condition() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        condition()
    }

    #[derive(Debug)]
    struct TestError(&'static str, Option<Box<TestError>>);

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for TestError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1
                .as_deref()
                .map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[derive(Debug)]
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(
            &self,
            _serializer: S,
        ) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refuses to serialize"))
        }
    }

    #[tokio::test]
    async fn write_substitutes_args_and_reaches_both_sinks() {
        let (logger, console, _dir) = make_logger(
            LoggerConfig::default()
                .with_console_threshold(Severity::Everything)
                .with_file_threshold(Severity::Everything),
        );

        logger
            .write("job {0} took {1}ms", Severity::Default, &[&"sync", &17])
            .await;
        logger.flush().await;

        assert!(console.contents().contains("job sync took 17ms"));
        assert!(chunk_contents(&logger).contains("job sync took 17ms"));
    }

    #[tokio::test]
    async fn threshold_scenario_trace_suppressed_critical_passes() {
        let (logger, console, _dir) = make_logger(
            LoggerConfig::default()
                .with_console_threshold(Severity::Warning)
                .with_file_threshold(Severity::Warning),
        );

        logger.write("trace chatter", Severity::Trace, &[]).await;
        logger.flush().await;
        assert!(console.contents().is_empty());
        assert!(chunk_contents(&logger).is_empty());

        logger.write("it broke", Severity::Critical, &[]).await;
        logger.flush().await;
        assert!(console.contents().contains("it broke"));
        assert!(chunk_contents(&logger).contains("it broke"));
    }

    #[tokio::test]
    async fn write_error_flushes_immediately() {
        let (logger, console, _dir) = make_logger(
            LoggerConfig::default()
                .with_console_threshold(Severity::Everything)
                .with_file_threshold(Severity::Everything),
        );

        let error = TestError("disk on fire", Some(Box::new(TestError("root cause", None))));
        logger.write_error(&error).await;

        // No explicit flush: errors force their own.
        let persisted = chunk_contents(&logger);
        assert!(persisted.contains("disk on fire"));
        assert!(persisted.contains("root cause"));
        assert!(persisted.contains("error start"));
        assert!(console.contents().contains("disk on fire"));
    }

    #[tokio::test]
    async fn exception_observer_fires_even_when_fully_filtered() {
        let (logger, console, _dir) = make_logger(
            LoggerConfig::default()
                .with_console_threshold(Severity::None)
                .with_file_threshold(Severity::None),
        );

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        logger.on_exception_written(move |text| sink.lock().push(text.to_string()));

        logger.write_error(&TestError("silent", None)).await;

        assert!(console.contents().is_empty());
        assert!(chunk_contents(&logger).is_empty());
        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("exceptions"));
        assert!(seen[0].contains("silent"));
    }

    #[tokio::test]
    async fn line_observer_receives_unprefixed_text() {
        let (logger, _console, _dir) =
            make_logger(LoggerConfig::default().with_console_threshold(Severity::Everything));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        logger.on_line_written(move |text| sink.lock().push(text.to_string()));

        logger.write("observed", Severity::Default, &[]).await;

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].ends_with("observed"));
        assert!(!seen[0].contains("rollog : "));
    }

    #[tokio::test]
    async fn write_object_logs_json() {
        #[derive(Serialize, Debug)]
        struct Payload {
            name: &'static str,
            count: u32,
        }

        let (logger, console, _dir) =
            make_logger(LoggerConfig::default().with_console_threshold(Severity::Everything));

        logger
            .write_object(&Payload { name: "batch", count: 3 }, Severity::Default)
            .await;

        let out = console.contents();
        assert!(out.contains("object as JSON:"));
        assert!(out.contains("\"name\": \"batch\""));
        assert!(out.contains("\"count\": 3"));
    }

    #[tokio::test]
    async fn write_object_falls_back_to_debug() {
        let (logger, console, _dir) =
            make_logger(LoggerConfig::default().with_console_threshold(Severity::Everything));

        logger.write_object(&Unserializable, Severity::Default).await;

        let out = console.contents();
        assert!(out.contains("object :"));
        assert!(out.contains("Unserializable"));
        assert!(!out.contains("object as JSON"));
    }

    #[tokio::test]
    async fn trace_macro_carries_caller_identity() {
        let (logger, console, _dir) = make_logger(
            LoggerConfig::default().with_console_threshold(Severity::Everything),
        );

        trace_here!(logger, "checkpoint reached").await;

        let out = console.contents();
        assert!(out.contains("rollog::logger::tests"));
        assert!(out.contains("logger.rs:"));
        assert!(out.contains("checkpoint reached"));
    }

    #[tokio::test]
    async fn write_trace_object_combines_caller_and_json() {
        #[derive(Serialize, Debug)]
        struct State {
            phase: &'static str,
        }

        let (logger, console, _dir) = make_logger(
            LoggerConfig::default().with_console_threshold(Severity::Everything),
        );

        let caller = Caller::new("startup", "src/boot.rs", 17);
        logger
            .write_trace_object(&State { phase: "ready" }, Severity::Trace, &caller)
            .await;

        let out = console.contents();
        assert!(out.contains("startup : boot.rs:17 : src"));
        assert!(out.contains("object as JSON:"));
        assert!(out.contains("\"phase\": \"ready\""));
    }

    #[tokio::test]
    async fn write_flood_is_below_default_threshold() {
        let (logger, console, _dir) = make_logger(LoggerConfig::default());

        logger.write_flood("spam {0}", &[&1]).await;
        assert!(console.contents().is_empty());

        logger.set_console_threshold(Severity::Everything);
        logger.write_flood("spam {0}", &[&2]).await;
        assert!(console.contents().contains("spam 2"));
    }

    #[tokio::test]
    async fn threshold_and_enable_setters_round_trip() {
        let (logger, _console, _dir) = make_logger(LoggerConfig::default());

        logger.set_console_threshold(Severity::Flood);
        logger.set_file_threshold(Severity::Trace);
        logger.set_file_logging_enabled(false);

        assert_eq!(logger.console_threshold(), Severity::Flood);
        assert_eq!(logger.file_threshold(), Severity::Trace);
        assert!(!logger.file_logging_enabled());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_write_lands_after_return() {
        let (logger, console, _dir) =
            make_logger(LoggerConfig::default().with_console_threshold(Severity::Everything));

        let worker = {
            let logger = logger.clone();
            std::thread::spawn(move || {
                logger.write_blocking("from a plain thread", Severity::Default, &[]);
            })
        };
        worker.join().expect("thread completes");

        // The operation may have detached past the 20ms wait; poll for it.
        assert!(wait_until(|| console.contents().contains("from a plain thread")).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_flush_makes_data_durable() {
        let (logger, _console, _dir) = make_logger(
            LoggerConfig::default().with_file_threshold(Severity::Everything),
        );

        logger.write("buffered line", Severity::Default, &[]).await;
        assert!(chunk_contents(&logger).is_empty());

        let worker = {
            let logger = logger.clone();
            std::thread::spawn(move || logger.flush_blocking())
        };
        worker.join().expect("thread completes");

        assert!(chunk_contents(&logger).contains("buffered line"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn blocking_error_write_notifies_observer() {
        let (logger, _console, _dir) = make_logger(LoggerConfig::default());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        logger.on_exception_written(move |text| sink.lock().push(text.to_string()));

        let worker = {
            let logger = logger.clone();
            std::thread::spawn(move || {
                logger.write_error_blocking(&TestError("detached failure", None));
            })
        };
        worker.join().expect("thread completes");

        assert!(wait_until(|| !seen.lock().is_empty()).await);
        assert!(seen.lock()[0].contains("detached failure"));
    }

    #[tokio::test]
    async fn clones_share_session_and_state() {
        let (logger, console, _dir) =
            make_logger(LoggerConfig::default().with_console_threshold(Severity::None));
        let clone = logger.clone();

        assert_eq!(logger.session_id(), clone.session_id());

        clone.set_console_threshold(Severity::Everything);
        logger.write("shared settings", Severity::Default, &[]).await;
        assert!(console.contents().contains("shared settings"));
    }
}
