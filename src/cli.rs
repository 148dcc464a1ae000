use crate::feature::Feature;
use clap::{Parser, ValueEnum};
use eyre::Result;
use std::path::PathBuf;

/// Output format for gate results
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON format for machine processing
    Json,
}

/// Command-line interface for the feature gate
#[derive(Parser, Debug, Default)]
#[command(
    name = "featgate",
    about = "Exclude optional build features whose dependency directories are missing",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Dependency directories to check, each treated as its own feature
    #[arg(help = "Dependency directories to check")]
    pub paths: Vec<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to feature manifest")]
    pub config: Option<PathBuf>,

    /// Extra features (format: NAME=PATH)
    #[arg(long = "feature", value_name = "NAME=PATH", help = "Gate a feature on a directory (NAME=PATH)")]
    pub features: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormat,

    /// Fail when any feature is excluded
    #[arg(long, help = "Exit with status 1 if any feature is excluded")]
    pub strict: bool,

    /// Show configuration and exit
    #[arg(long, help = "Show effective configuration and exit")]
    pub show_config: bool,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Parse `--feature` arguments
    pub fn get_features(&self) -> Result<Vec<Feature>> {
        self.features.iter().map(|arg| Feature::parse(arg)).collect()
    }

    /// Positional paths as features named after themselves
    pub fn get_path_features(&self) -> Vec<Feature> {
        self.paths.iter().cloned().map(Feature::from_path).collect()
    }
}
