use clap::Parser;
use eyre::{Context, Result};
use log::LevelFilter;

use featgate::cli::Cli;
use featgate::output::get_formatter;
use featgate::{Config, Feature, FeatureStatus, PathAvailabilityChecker, gate_features};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    if cli.show_config {
        return show_config(&config);
    }

    let features = collect_features(&config, &cli)?;

    let checker = PathAvailabilityChecker::new();
    let report = gate_features(&checker, &features);

    let formatter = get_formatter(&cli.format);
    println!("{}", formatter.format_report(&report));

    let stats = report.stats();
    if cli.verbose {
        eprintln!("Checked {} distinct paths", checker.len());
        eprintln!("Included: {}", join_names(report.included()));
        eprintln!("Excluded: {}", join_names(report.excluded()));
    }

    if cli.strict && stats.has_exclusions() {
        std::process::exit(1);
    }

    Ok(())
}

/// Warnings reach the build log by default; RUST_LOG still wins
fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_level(verbose)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Manifest features by name, then `--feature` arguments, then bare paths
fn collect_features(config: &Config, cli: &Cli) -> Result<Vec<Feature>> {
    let mut features = config.features();
    features.extend(cli.get_features().context("Invalid --feature argument")?);
    features.extend(cli.get_path_features());
    Ok(features)
}

fn join_names<'a>(statuses: impl Iterator<Item = &'a FeatureStatus>) -> String {
    let names: Vec<&str> = statuses.map(|s| s.name.as_str()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Show the effective configuration
fn show_config(config: &Config) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;

    println!("Effective configuration:");
    println!("{}", yaml);

    Ok(())
}
