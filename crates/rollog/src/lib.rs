//! # rollog
//!
//! Process-local logging with a console mirror and rotating chunk files.
//!
//! This crate provides:
//!
//! - [`Logger`] — The public entry point: filtering, routing, sync and async
//!   call forms
//! - [`Severity`] — Totally ordered severity ladder used as per-sink
//!   thresholds
//! - [`LoggerConfig`] — In-process configuration: thresholds, folder, limits
//! - [`RollingFileWriter`] — Buffered, size-bounded rolling chunk files
//! - [`ConsoleSink`] — Best-effort console mirror with a visibility marker
//! - [`LogObserver`] — Line- and exception-written notification hooks
//!
//! Logging never fails the caller: formatting, serialization, and file
//! failures all degrade to reduced fidelity instead of propagating.
//!
//! ## Example
//!
//! ```rust
//! use rollog::{Logger, LoggerConfig, Severity};
//!
//! # async fn demo() {
//! let logger = Logger::new(
//!     LoggerConfig::new("Logs")
//!         .with_app_name("demo")
//!         .with_file_threshold(Severity::Warning),
//! );
//!
//! logger.write("listening on {0}", Severity::Default, &[&"0.0.0.0:8080"]).await;
//! rollog::trace_here!(logger, "startup complete").await;
//! logger.flush().await;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod logger;
pub mod observer;
pub mod record;
pub mod severity;
pub mod writer;

// Re-export main types
pub use config::{DEFAULT_SINGLE_MESSAGE_LIMIT, LoggerConfig};
pub use console::ConsoleSink;
pub use error::{LogError, Result};
pub use logger::Logger;
pub use observer::{LogObserver, ObserverSet};
pub use record::{Caller, LogRecord, SessionId};
pub use severity::Severity;
pub use writer::RollingFileWriter;
