use super::OutputFormatter;
use crate::feature::{FeatureStatus, GateReport, GateStats};
use std::io::IsTerminal;

/// Human-readable output formatter
#[derive(Debug, Default)]
pub struct HumanFormatter {
    use_colors: bool,
}

impl HumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        Self {
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a new human formatter with explicit color setting
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn should_use_colors() -> bool {
        std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
    }

    /// Format the included/excluded marker
    fn format_state(&self, included: bool) -> String {
        match (included, self.use_colors) {
            (true, true) => "\x1b[32mincluded\x1b[0m".to_string(), // Green
            (true, false) => "included".to_string(),
            (false, true) => "\x1b[33mexcluded\x1b[0m".to_string(), // Yellow
            (false, false) => "excluded".to_string(),
        }
    }

    fn format_name(&self, name: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m{}\x1b[0m", name) // Bold
        } else {
            name.to_string()
        }
    }

    fn format_feature(&self, status: &FeatureStatus) -> String {
        if status.name == status.path {
            format!("  {} {}", self.format_state(status.included), self.format_name(&status.name))
        } else {
            format!(
                "  {} {} ({})",
                self.format_state(status.included),
                self.format_name(&status.name),
                status.path
            )
        }
    }

    /// Format statistics summary
    fn format_stats(&self, stats: &GateStats) -> String {
        if stats.total == 0 {
            return "No features to check".to_string();
        }

        let plural = if stats.total == 1 { "" } else { "s" };
        let summary = format!(
            "{} feature{}: {} included, {} excluded",
            stats.total, plural, stats.included, stats.excluded
        );

        if !self.use_colors {
            return summary;
        }
        if stats.has_exclusions() {
            format!("\x1b[33m{}\x1b[0m", summary)
        } else {
            format!("\x1b[32m{}\x1b[0m", summary)
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &GateReport) -> String {
        let mut output: Vec<String> = report
            .features
            .iter()
            .map(|status| self.format_feature(status))
            .collect();

        if !output.is_empty() {
            output.push(String::new());
        }
        output.push(self.format_stats(&report.stats()));

        output.join("\n")
    }
}
