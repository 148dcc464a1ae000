use crate::checker::PathAvailabilityChecker;
use crate::diagnostics::WarningSink;
use crate::probe::DirProbe;
use eyre::Result;
use serde::{Deserialize, Serialize};

/// An optional build feature and the directory it depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub path: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Parse a `NAME=PATH` argument.
    ///
    /// The name is trimmed. The path is kept exactly as written, so
    /// `sdk= /opt/sdk` checks `" /opt/sdk"` with its leading space.
    pub fn parse(arg: &str) -> Result<Self> {
        let (name, path) = arg
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("Invalid feature '{}': expected NAME=PATH", arg))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(eyre::eyre!("Invalid feature '{}': name is empty", arg));
        }

        Ok(Self::new(name, path))
    }

    /// Feature named after its own path, used for bare path arguments
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path.clone(),
            path,
        }
    }
}

/// Outcome of gating a single feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub name: String,
    pub path: String,
    pub included: bool,
}

/// Result of gating a list of features
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    pub features: Vec<FeatureStatus>,
}

impl GateReport {
    pub fn stats(&self) -> GateStats {
        GateStats::from_statuses(&self.features)
    }

    /// Features that will be built
    pub fn included(&self) -> impl Iterator<Item = &FeatureStatus> {
        self.features.iter().filter(|f| f.included)
    }

    /// Features dropped from the build
    pub fn excluded(&self) -> impl Iterator<Item = &FeatureStatus> {
        self.features.iter().filter(|f| !f.included)
    }
}

/// Counts over a gate report
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GateStats {
    pub total: usize,
    pub included: usize,
    pub excluded: usize,
}

impl GateStats {
    pub fn from_statuses(statuses: &[FeatureStatus]) -> Self {
        let included = statuses.iter().filter(|s| s.included).count();
        Self {
            total: statuses.len(),
            included,
            excluded: statuses.len() - included,
        }
    }

    pub fn has_exclusions(&self) -> bool {
        self.excluded > 0
    }
}

/// Run every feature through the checker, keeping input order
pub fn gate_features<P, S>(checker: &PathAvailabilityChecker<P, S>, features: &[Feature]) -> GateReport
where
    P: DirProbe,
    S: WarningSink,
{
    let features = features
        .iter()
        .map(|feature| {
            let included = checker.is_path_available(&feature.path);
            if included {
                log::debug!("feature '{}' included", feature.name);
            } else {
                log::info!("feature '{}' excluded", feature.name);
            }
            FeatureStatus {
                name: feature.name.clone(),
                path: feature.path.clone(),
                included,
            }
        })
        .collect();

    GateReport { features }
}
