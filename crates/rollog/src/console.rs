//! Best-effort console mirror for formatted log text.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::observer::ObserverSet;
use crate::severity::Severity;

/// Fire-and-forget mirror of formatted lines to a console channel.
///
/// Every line of the emitted text is prefixed with a visibility marker
/// (`"<app_name> : "`) so multi-line messages stay identifiable when
/// interleaved with other console output. Emission is independent of the
/// file path: a console failure never affects durability and vice versa.
pub struct ConsoleSink {
    app_name: String,
    marker: String,
    threshold: RwLock<Severity>,
    observers: Arc<ObserverSet>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Creates a sink writing to stderr.
    #[must_use]
    pub fn new(app_name: &str, threshold: Severity, observers: Arc<ObserverSet>) -> Self {
        Self::with_output(app_name, threshold, observers, Box::new(io::stderr()))
    }

    /// Creates a sink writing to an arbitrary channel, mainly for tests.
    #[must_use]
    pub fn with_output(
        app_name: &str,
        threshold: Severity,
        observers: Arc<ObserverSet>,
        output: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            app_name: app_name.to_string(),
            marker: format!("{app_name} : "),
            threshold: RwLock::new(threshold),
            observers,
            output: Mutex::new(output),
        }
    }

    /// Returns the current console severity threshold.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Sets the console severity threshold.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Mirrors `text` to the console if `severity` clears the threshold.
    ///
    /// Fires the line-written observers with the original unprefixed text.
    /// Any write failure degrades to a single fixed-format self-report; a
    /// failure of that report is dropped to stop the recursion there.
    pub fn emit(&self, text: &str, severity: Severity) {
        if !severity.is_at_least(self.threshold()) {
            return;
        }

        self.observers.notify_line(text);

        if self.write_marked(text).is_err() {
            let report = format!("{} error!!! problem with: {text}", self.app_name);
            let _ = self.write_marked(&report);
        }
    }

    fn write_marked(&self, text: &str) -> io::Result<()> {
        let line_prefix = format!("\n{}", self.marker);
        let decorated = format!("{line_prefix}{}", text.replace('\n', &line_prefix));
        let mut output = self.output.lock();
        writeln!(output, "{decorated}")?;
        output.flush()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("app_name", &self.app_name)
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}
