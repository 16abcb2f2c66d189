// crates/cli/src/progress.rs
use loc_report_core::{FileReport, Summary};
use loc_report_engine::{ProgressSink, ScanPhase};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Files between two progress lines.
const REPORT_EVERY: usize = 100;

/// Writes scan progress to stderr.
#[derive(Debug, Default)]
pub struct StderrProgress {
    files: AtomicUsize,
}

impl StderrProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files(&self) -> usize {
        self.files.load(Ordering::Relaxed)
    }

    fn line(&self, msg: &str) {
        let _ = writeln!(std::io::stderr().lock(), "[loc_report] {msg}");
    }
}

impl ProgressSink for StderrProgress {
    fn on_phase(&self, phase: ScanPhase) {
        match phase {
            ScanPhase::Seeding => self.line("resolving paths..."),
            ScanPhase::Draining => self.line("scanning..."),
            ScanPhase::Done => {}
        }
    }

    fn on_file(&self, _report: &FileReport) {
        let n = self.files.fetch_add(1, Ordering::Relaxed) + 1;
        if n % REPORT_EVERY == 0 {
            self.line(&format!("{n} files counted"));
        }
    }

    fn on_complete(&self, summary: &Summary) {
        self.line(&format!(
            "completed: {} files in {} language(s)",
            self.files(),
            summary.len()
        ));
    }
}
