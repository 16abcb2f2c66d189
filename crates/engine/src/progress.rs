// crates/engine/src/progress.rs
use loc_report_core::{FileReport, Summary};

/// Lifecycle of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    /// Roots are being stat'd and enqueued.
    Seeding,
    /// Workers are draining the queue.
    Draining,
    /// Pending work reached zero; the summary is final.
    Done,
}

/// Observer for scan progress. Called from worker threads.
pub trait ProgressSink: Send + Sync {
    fn on_phase(&self, _phase: ScanPhase) {}
    fn on_file(&self, _report: &FileReport) {}
    fn on_complete(&self, _summary: &Summary) {}
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
