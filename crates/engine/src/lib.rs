// crates/engine/src/lib.rs
//! Concurrent traversal-and-aggregation engine.
//!
//! [`generate_report`] walks a set of roots with a bounded pool of workers
//! sharing one [`queue::WorkQueue`], classifies every file with a registered
//! extension and merges the per-file counts into a [`Summary`].

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod pool;
pub mod progress;
pub mod queue;

pub use config::{DEFAULT_WORKERS, MAX_WORKERS, ScanConfig, ScanConfigBuilder, ScanConfigBuilderError};
pub use error::{EngineError, FsOperation, Result};
pub use filesystem::{DirEntry, EntryKind, FileSystem, LocalFileSystem};
pub use loc_report_core::Summary;
pub use pool::{Entry, generate_report};
pub use progress::{NoProgress, ProgressSink, ScanPhase};

/// Scans the local filesystem as configured.
///
/// # Errors
/// See [`generate_report`].
pub fn run(config: &ScanConfig) -> Result<Summary> {
    run_with_progress(config, &NoProgress)
}

/// [`run`] reporting progress to `progress`.
///
/// # Errors
/// See [`generate_report`].
pub fn run_with_progress(config: &ScanConfig, progress: &dyn ProgressSink) -> Result<Summary> {
    let fs = LocalFileSystem::new(config.follow_links);
    generate_report(config, &fs, progress)
}
