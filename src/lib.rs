pub mod checker;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod feature;
pub mod output;
pub mod probe;

pub use checker::PathAvailabilityChecker;
pub use config::Config;
pub use diagnostics::{LogSink, RecordingSink, WarningSink, exclusion_notice};
pub use feature::{Feature, FeatureStatus, GateReport, GateStats, gate_features};
pub use probe::{DirProbe, FsProbe};
