//! Text formatting: message lines and bounded error blocks.
//!
//! Everything here is a pure function over a snapshot of "now"; nothing in
//! this module performs I/O or fails the calling write.

use std::fmt::Display;
use std::fmt::Write as _;

use crate::error::{LogError, Result};
use crate::record::LogRecord;

/// Sortable timestamp pattern: day-month-year, time, millisecond fraction.
const TIMESTAMP_FORMAT: &str = "%d%m%y %H:%M:%S:%3f";

const ERROR_START_MARKER: &str = "************error start***************";
const ERROR_END_MARKER: &str = "************error end***************";
const SECTION_RULE: &str =
    "**************************************************************************************";

/// Produces the message text for a record: positional substitution of `args`
/// into `template`.
///
/// On a template/argument mismatch the raw template is used verbatim rather
/// than failing the write.
#[must_use]
pub fn message(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        template.to_string()
    } else {
        substitute(template, args).unwrap_or_else(|_| template.to_string())
    }
}

/// Renders a record as one log line: timestamp, severity, then the message.
#[must_use]
pub fn record(record: &LogRecord) -> String {
    format!(
        "{} : {} : {}",
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.severity,
        record.message
    )
}

/// Substitutes positional `{0}`, `{1}`, … placeholders with `args`.
///
/// `{{` and `}}` render literal braces. Fails on malformed placeholders and
/// on indices with no matching argument; callers fall back to the raw
/// template.
pub fn substitute(template: &str, args: &[&dyn Display]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut index_text = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(digit) if digit.is_ascii_digit() => index_text.push(digit),
                        _ => {
                            return Err(LogError::Formatting(format!(
                                "malformed placeholder in {template:?}"
                            )));
                        }
                    }
                }
                let index: usize = index_text
                    .parse()
                    .map_err(|_| LogError::Formatting(format!("bad index in {template:?}")))?;
                let arg = args.get(index).ok_or_else(|| {
                    LogError::Formatting(format!(
                        "placeholder {{{index}}} has no argument ({} supplied)",
                        args.len()
                    ))
                })?;
                let _ = write!(out, "{arg}");
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Renders an error and its cause chain as a bounded, human-scannable block.
///
/// Appends one section per cause, stopping when the chain ends or when the
/// accumulated text reaches `limit`, then closes with the end marker. Never
/// fails.
#[must_use]
pub fn error_block(error: &(dyn std::error::Error + 'static), limit: usize) -> String {
    let mut out = String::new();
    let _ = write!(out, "\n\n{ERROR_START_MARKER}{}", cause_section(error));

    let mut cause = error.source();
    while let Some(inner) = cause {
        if out.len() >= limit {
            break;
        }
        out.push_str(&cause_section(inner));
        cause = inner.source();
    }

    let _ = write!(out, "{ERROR_END_MARKER}\n\n");
    out
}

fn cause_section(error: &(dyn std::error::Error + 'static)) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("Message: \n");
    let _ = writeln!(out, "{error}");
    let _ = writeln!(out, "{SECTION_RULE}");
    out.push_str("Source: \n");
    match error.source() {
        Some(source) => {
            let _ = writeln!(out, "{source}");
        }
        None => out.push('\n'),
    }
    out.push('\n');
    out
}
