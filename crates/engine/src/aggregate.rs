//! Summary shared by all workers of a scan.

use std::sync::{Mutex, PoisonError};

use loc_report_core::{FileReport, Summary};

/// [`Summary`] behind a lock; every merge is one read-modify-write under it.
#[derive(Debug, Default)]
pub struct SharedSummary {
    inner: Mutex<Summary>,
}

impl SharedSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&self, report: &FileReport) {
        // `absorb` never leaves a half-updated row, so a poisoned lock is still consistent.
        let mut summary = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        summary.absorb(report);
    }

    #[must_use]
    pub fn into_inner(self) -> Summary {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
