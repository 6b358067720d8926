//! The input record describing a completed security scan.
//!
//! [`ThreatReport`] is a serialization-friendly model: it carries no rendering
//! state and avoids referencing the PDF crate so values can be produced by
//! frontends, persisted, or exchanged over the wire before they reach the
//! renderer.  Every field is optional on the wire and falls back to a
//! documented default.

use serde::{Deserialize, Serialize};

/// Structured verdict of a security scan, ready for rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatReport {
    /// Severity classification as reported by the scanner.  Matched
    /// case-insensitively against the known verdict levels; anything else
    /// (including an absent value) renders with the neutral fallback color.
    pub level: String,
    /// One-line human-readable verdict shown inside the banner.
    pub summary: String,
    /// Ordered findings backing the verdict.
    pub reasons: Vec<String>,
    /// Addresses observed during the scan.
    pub ips: Vec<String>,
    /// Wall-clock scan duration in seconds.
    pub scan_time: f64,
}

impl ThreatReport {
    /// Creates a report with the given level and summary and empty detail lists.
    pub fn new(level: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Sets the findings list and returns the updated report.
    pub fn with_reasons<I, S>(mut self, reasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reasons = reasons.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the observed addresses and returns the updated report.
    pub fn with_ips<I, S>(mut self, ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ips = ips.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the scan duration and returns the updated report.
    pub fn with_scan_time(mut self, seconds: f64) -> Self {
        self.scan_time = seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let report: ThreatReport = serde_json::from_str("{}").expect("deserialize empty record");
        assert_eq!(report.level, "");
        assert_eq!(report.summary, "");
        assert!(report.reasons.is_empty());
        assert!(report.ips.is_empty());
        assert_eq!(report.scan_time, 0.0);
    }

    #[test]
    fn partial_records_keep_the_provided_fields() {
        let report: ThreatReport =
            serde_json::from_str(r#"{"level":"red","ips":["10.0.0.1"]}"#).expect("deserialize");
        assert_eq!(report.level, "red");
        assert_eq!(report.ips, vec!["10.0.0.1"]);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn builder_helpers_populate_the_record() {
        let report = ThreatReport::new("GREEN", "No threats")
            .with_reasons(["Clean scan"])
            .with_ips(["10.0.0.1", "10.0.0.2"])
            .with_scan_time(3.2);
        assert_eq!(report.level, "GREEN");
        assert_eq!(report.summary, "No threats");
        assert_eq!(report.reasons, vec!["Clean scan"]);
        assert_eq!(report.ips.len(), 2);
        assert_eq!(report.scan_time, 3.2);
    }
}
