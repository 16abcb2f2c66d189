use std::path::PathBuf;

use derive_builder::Builder;
use loc_report_core::ExtensionMap;

use crate::error::{EngineError, Result};

/// Worker count used when none is configured.
pub const DEFAULT_WORKERS: usize = 8;

/// Upper bound on the worker count.
pub const MAX_WORKERS: usize = 512;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Files or directories to scan, in order.
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "DEFAULT_WORKERS")]
    pub workers: usize,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub extensions: ExtensionMap,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: vec![],
            workers: DEFAULT_WORKERS,
            follow_links: false,
            extensions: ExtensionMap::default(),
        }
    }
}

fn check_workers(workers: usize) -> std::result::Result<(), String> {
    if workers == 0 {
        return Err("worker count must be at least 1".into());
    }
    if workers > MAX_WORKERS {
        return Err(format!("worker count {workers} exceeds the maximum of {MAX_WORKERS}"));
    }
    Ok(())
}

impl ScanConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.workers {
            Some(workers) => check_workers(workers),
            None => Ok(()),
        }
    }
}

impl From<ScanConfigBuilderError> for EngineError {
    fn from(err: ScanConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

impl ScanConfig {
    #[must_use]
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Checks the configuration before a scan starts.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] for an empty root list or an out-of-range worker count.
    pub fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(EngineError::Config("at least one path is required".into()));
        }
        check_workers(self.workers).map_err(EngineError::Config)
    }
}
