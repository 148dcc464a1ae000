use super::OutputFormatter;
use crate::feature::{FeatureStatus, GateReport, GateStats};
use serde::{Deserialize, Serialize};

/// JSON output formatter
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a gate report
#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    stats: JsonStats,
    features: Vec<FeatureStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonStats {
    total: usize,
    included: usize,
    excluded: usize,
}

impl From<&GateStats> for JsonStats {
    fn from(stats: &GateStats) -> Self {
        Self {
            total: stats.total,
            included: stats.included,
            excluded: stats.excluded,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &GateReport) -> String {
        let json_output = JsonOutput {
            stats: JsonStats::from(&report.stats()),
            features: report.features.clone(),
        };

        serde_json::to_string_pretty(&json_output)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize JSON: {e}"}}"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_formatter_empty_report() {
        let output = JsonFormatter::new().format_report(&GateReport::default());
        let parsed: JsonOutput = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed.stats.total, 0);
        assert!(parsed.features.is_empty());
    }

    #[test]
    fn test_json_formatter_with_features() {
        let report = GateReport {
            features: vec![
                FeatureStatus {
                    name: "oculus".to_string(),
                    path: "/opt/oculus".to_string(),
                    included: false,
                },
                FeatureStatus {
                    name: "openvr".to_string(),
                    path: "/opt/openvr".to_string(),
                    included: true,
                },
            ],
        };

        let output = JsonFormatter::new().format_report(&report);
        let parsed: JsonOutput = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed.stats.total, 2);
        assert_eq!(parsed.stats.included, 1);
        assert_eq!(parsed.stats.excluded, 1);
        assert_eq!(parsed.features, report.features);
    }

    #[test]
    fn test_json_field_names() {
        let report = GateReport {
            features: vec![FeatureStatus {
                name: "sdk".to_string(),
                path: "/opt/sdk".to_string(),
                included: true,
            }],
        };

        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter::new().format_report(&report)).expect("Invalid JSON");

        assert_eq!(value["stats"]["included"], 1);
        assert_eq!(value["features"][0]["name"], "sdk");
        assert_eq!(value["features"][0]["included"], true);
    }
}
