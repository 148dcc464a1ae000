use std::path::Path;

/// Answers whether a path names an existing directory
pub trait DirProbe {
    /// Return true only for an existing directory. Any error reads as false.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FsProbe {
    /// Create a new filesystem probe
    pub fn new() -> Self {
        Self
    }
}

impl DirProbe for FsProbe {
    fn is_dir(&self, path: &Path) -> bool {
        // follows symlinks; permission errors on a parent look like absence
        path.is_dir()
    }
}
