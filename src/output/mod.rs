pub mod human;
pub mod json;

use crate::cli::OutputFormat;
use crate::feature::GateReport;

/// Trait for formatting gate reports
pub trait OutputFormatter {
    /// Format the report for output
    fn format_report(&self, report: &GateReport) -> String;
}

/// Get the appropriate formatter for the given format
pub fn get_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(human::HumanFormatter::new()),
        OutputFormat::Json => Box::new(json::JsonFormatter::new()),
    }
}
