//! JSON output format for inspection verdicts
//!
//! `--format json` serializes one of these structs per invocation so the
//! binary can sit in a pipeline.

use serde::{Deserialize, Serialize};

/// Verdict of a signature scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonScanVerdict {
    /// Text that was checked
    pub text: String,
    /// Number of signatures loaded into the store
    pub signatures: usize,
    /// True when the text exactly matched a known signature
    pub malicious: bool,
}

/// Verdict of a repetition-burst scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAnomalyVerdict {
    /// Number of event codes scanned
    pub events: usize,
    /// Window size used
    pub window: usize,
    /// Repetition threshold used
    pub threshold: usize,
    /// True when some window crossed the threshold
    pub anomalous: bool,
    /// Index of the last event of the triggering window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Distinct repeated codes in the triggering window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeated_codes: Option<usize>,
}

/// Verdict of a port authorization check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPortVerdict {
    /// Port that was checked
    pub port: u16,
    /// Number of rules consulted
    pub rules: usize,
    /// True when some rule covers the port
    pub allowed: bool,
    /// The first covering rule, as `"low-high"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_verdict_serializes() {
        let verdict = JsonScanVerdict {
            text: "virus.exe".to_string(),
            signatures: 2,
            malicious: true,
        };

        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"malicious\":true"));
        assert!(json.contains("virus.exe"));
    }

    #[test]
    fn test_anomaly_verdict_omits_empty_position() {
        let verdict = JsonAnomalyVerdict {
            events: 8,
            window: 3,
            threshold: 2,
            anomalous: false,
            position: None,
            repeated_codes: None,
        };

        let json = serde_json::to_string(&verdict).unwrap();
        assert!(!json.contains("position"));
        assert!(json.contains("\"anomalous\":false"));
    }

    #[test]
    fn test_port_verdict_round_trips() {
        let verdict = JsonPortVerdict {
            port: 21,
            rules: 3,
            allowed: true,
            matched_rule: Some("20-22".to_string()),
        };

        let json = serde_json::to_string(&verdict).unwrap();
        let back: JsonPortVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back.port, 21);
        assert!(back.allowed);
        assert_eq!(back.matched_rule.as_deref(), Some("20-22"));
    }
}
