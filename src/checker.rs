use crate::diagnostics::{LogSink, WarningSink, exclusion_notice};
use crate::probe::{DirProbe, FsProbe};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Memoized check of whether feature dependency paths are usable directories.
///
/// Each distinct path string is probed at most once for the lifetime of the
/// checker. A negative answer is reported once to the warning sink and then
/// served from the cache like any other result.
pub struct PathAvailabilityChecker<P = FsProbe, S = LogSink> {
    probe: P,
    sink: S,
    cache: Mutex<HashMap<String, bool>>,
}

impl PathAvailabilityChecker {
    /// Create a checker that probes the real filesystem and warns through `log`
    pub fn new() -> Self {
        Self::with_parts(FsProbe::new(), LogSink::new())
    }
}

impl Default for PathAvailabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: DirProbe, S: WarningSink> PathAvailabilityChecker<P, S> {
    /// Create a checker with an explicit probe and warning sink
    pub fn with_parts(probe: P, sink: S) -> Self {
        Self {
            probe,
            sink,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether `path` is an existing directory.
    ///
    /// The lock is held across the probe so that concurrent first queries
    /// for the same path still hit the filesystem once. The warning is sent
    /// after the result is cached and the lock released.
    pub fn is_path_available(&self, path: &str) -> bool {
        let mut cache = self.lock_cache();

        if let Some(&available) = cache.get(path) {
            log::debug!("cache hit for {}: {}", path, available);
            return available;
        }

        log::debug!("probing {}", path);
        let available = self.probe.is_dir(Path::new(path));
        cache.insert(path.to_string(), available);
        drop(cache);

        // sink runs unlocked so it may query the checker itself
        if !available {
            self.sink.warn(&exclusion_notice(path));
        }
        available
    }

    /// Previously computed result for `path`, without probing
    pub fn cached(&self, path: &str) -> Option<bool> {
        self.lock_cache().get(path).copied()
    }

    /// Number of distinct paths checked so far
    pub fn len(&self) -> usize {
        self.lock_cache().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_cache().is_empty()
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, bool>> {
        // entries are plain booleans, so a poisoned map is still consistent
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
