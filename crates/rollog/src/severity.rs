//! Severity ladder used to filter records per sink.

use serde::{Deserialize, Serialize};

/// Log severity levels, totally ordered from "log everything" to "log nothing".
///
/// The numeric weights leave gaps so a threshold can sit between levels; a
/// record reaches a sink when its severity is at or above that sink's
/// threshold. `Everything` and `None` are intended as thresholds, not as
/// per-record annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Severity {
    /// Threshold that lets every record through.
    Everything = i32::MIN,
    /// High-volume diagnostics, below normal output.
    Flood = -10_000,
    /// Ordinary messages.
    Default = 0,
    /// Caller-identified trace output.
    Trace = 1,
    /// Warning conditions.
    Warning = 10,
    /// Errors and their cause chains.
    Exceptions = 100,
    /// Conditions that must never be filtered out in practice.
    Critical = 1000,
    /// Threshold that suppresses every record.
    None = i32::MAX,
}

impl Severity {
    /// Returns the numeric weight used for threshold comparisons.
    #[must_use]
    pub const fn weight(self) -> i32 {
        self as i32
    }

    /// Returns true if this severity clears the given threshold.
    #[must_use]
    pub fn is_at_least(self, threshold: Self) -> bool {
        self >= threshold
    }

    /// Returns the string representation of this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::Flood => "flood",
            Self::Default => "default",
            Self::Trace => "trace",
            Self::Warning => "warning",
            Self::Exceptions => "exceptions",
            Self::Critical => "critical",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Everything < Severity::Flood);
        assert!(Severity::Flood < Severity::Default);
        assert!(Severity::Default < Severity::Trace);
        assert!(Severity::Trace < Severity::Warning);
        assert!(Severity::Warning < Severity::Exceptions);
        assert!(Severity::Exceptions < Severity::Critical);
        assert!(Severity::Critical < Severity::None);
    }

    #[test]
    fn severity_weights_match_ladder() {
        assert_eq!(Severity::Everything.weight(), i32::MIN);
        assert_eq!(Severity::Flood.weight(), -10_000);
        assert_eq!(Severity::Default.weight(), 0);
        assert_eq!(Severity::Trace.weight(), 1);
        assert_eq!(Severity::Warning.weight(), 10);
        assert_eq!(Severity::Exceptions.weight(), 100);
        assert_eq!(Severity::Critical.weight(), 1000);
        assert_eq!(Severity::None.weight(), i32::MAX);
    }

    #[test_case(Severity::Critical, Severity::Warning, true; "critical clears warning")]
    #[test_case(Severity::Warning, Severity::Warning, true; "threshold is inclusive")]
    #[test_case(Severity::Trace, Severity::Warning, false; "trace filtered by warning")]
    #[test_case(Severity::Flood, Severity::Default, false; "flood below default")]
    #[test_case(Severity::None, Severity::Critical, true; "none clears everything")]
    fn severity_threshold_checks(level: Severity, threshold: Severity, expected: bool) {
        assert_eq!(level.is_at_least(threshold), expected);
    }

    #[test]
    fn severity_serde_roundtrip() {
        let json = serde_json::to_string(&Severity::Warning).expect("serialize");
        assert_eq!(json, "\"warning\"");

        let parsed: Severity = serde_json::from_str("\"critical\"").expect("deserialize");
        assert_eq!(parsed, Severity::Critical);
    }

    #[test]
    fn severity_display_matches_as_str() {
        for level in [Severity::Flood, Severity::Trace, Severity::None] {
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
