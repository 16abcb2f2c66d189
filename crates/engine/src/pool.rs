// crates/engine/src/pool.rs
//! Worker pool that walks the filesystem and classifies files concurrently.
//!
//! Roots are stat'd and enqueued on the calling thread, then a fixed number of
//! workers drain the shared [`WorkQueue`]. A directory expands into new queue
//! entries, so the tree is discovered breadth-first across the whole pool. A
//! file is classified and merged into the [`SharedSummary`]. The first
//! filesystem error aborts the scan.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::Ordering;
use std::thread;

use log::{debug, trace, warn};
use loc_report_core::{ExtensionMap, FileReport, Summary, classify};

use crate::aggregate::SharedSummary;
use crate::config::ScanConfig;
use crate::error::{EngineError, FsOperation, Result};
use crate::filesystem::{EntryKind, FileSystem};
use crate::progress::{ProgressSink, ScanPhase};
use crate::queue::{WorkGuard, WorkQueue};

/// A discovered path awaiting processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self { path: path.into(), kind }
    }
}

/// Scans `config.roots` with `config.workers` workers and returns the per-language summary.
///
/// # Errors
/// Returns the first filesystem failure met anywhere in the scan, or a
/// configuration/threading error. No partial summary is returned.
pub fn generate_report(
    config: &ScanConfig,
    fs: &dyn FileSystem,
    progress: &dyn ProgressSink,
) -> Result<Summary> {
    config.validate()?;

    let queue = WorkQueue::new(config.workers);

    progress.on_phase(ScanPhase::Seeding);
    debug!("seeding {} root(s)", config.roots.len());
    // Roots are non-empty and each one is enqueued, so pending work is at
    // least one here and the queue cannot close before draining starts.
    seed(&queue, &config.roots, fs)?;

    progress.on_phase(ScanPhase::Draining);
    debug!("draining with {} worker(s), {} entries queued", config.workers, queue.len());

    let ctx = WorkerContext {
        queue: &queue,
        fs,
        extensions: &config.extensions,
        summary: SharedSummary::new(),
        failure: OnceLock::new(),
        progress,
    };
    ctx.drain(config.workers);

    let WorkerContext { summary, failure, .. } = ctx;
    if let Some(err) = failure.into_inner() {
        warn!("scan aborted: {err}");
        return Err(err);
    }
    debug_assert_eq!(queue.pending(), 0);

    let summary = summary.into_inner();
    progress.on_phase(ScanPhase::Done);
    debug!(
        "scan done: {} entries visited, {} language(s)",
        queue.stats().dequeued.load(Ordering::Relaxed),
        summary.len()
    );
    progress.on_complete(&summary);
    Ok(summary)
}

fn seed(queue: &WorkQueue<Entry>, roots: &[PathBuf], fs: &dyn FileSystem) -> Result<()> {
    for root in roots {
        let kind = fs
            .stat(root)
            .map_err(|e| EngineError::io(FsOperation::Stat, root, e))?;
        trace!("seed {} ({kind:?})", root.display());
        queue.add(Entry::new(root.clone(), kind));
    }
    Ok(())
}

struct WorkerContext<'a> {
    queue: &'a WorkQueue<Entry>,
    fs: &'a dyn FileSystem,
    extensions: &'a ExtensionMap,
    summary: SharedSummary,
    failure: OnceLock<EngineError>,
    progress: &'a dyn ProgressSink,
}

impl WorkerContext<'_> {
    /// Runs `workers` threads until the queue closes, then joins them.
    fn drain(&self, workers: usize) {
        thread::scope(|s| {
            let mut handles = Vec::with_capacity(workers);
            for id in 0..workers {
                let spawned = thread::Builder::new()
                    .name(format!("loc-worker-{id}"))
                    .spawn_scoped(s, move || self.worker_loop(id));
                match spawned {
                    Ok(handle) => handles.push((id, handle)),
                    Err(e) => {
                        self.fail(EngineError::WorkerSpawn(e));
                        break;
                    }
                }
            }
            for (id, handle) in handles {
                if handle.join().is_err() {
                    self.fail(EngineError::WorkerPanicked { worker: id });
                }
            }
        });
    }

    fn worker_loop(&self, id: usize) {
        trace!("worker {id} started");
        while let Some(entry) = self.queue.remove() {
            let _guard = WorkGuard::new(self.queue);
            if let Err(err) = self.process(&entry) {
                self.fail(err);
            }
        }
        trace!("worker {id} stopped");
    }

    /// Records the first error and stops every worker.
    fn fail(&self, err: EngineError) {
        if let Err(later) = self.failure.set(err) {
            debug!("ignoring error after abort: {later}");
        }
        self.queue.abort();
    }

    fn process(&self, entry: &Entry) -> Result<()> {
        match entry.kind {
            EntryKind::File => self.process_file(&entry.path),
            EntryKind::Directory => self.expand(&entry.path),
            EntryKind::Other => {
                trace!("skip {} (not a file or directory)", entry.path.display());
                Ok(())
            }
        }
    }

    fn process_file(&self, path: &Path) -> Result<()> {
        let Some(language) = self.extensions.lookup(path) else {
            trace!("skip {} (unknown extension)", path.display());
            return Ok(());
        };
        let content = self
            .fs
            .read_file(path)
            .map_err(|e| EngineError::io(FsOperation::ReadFile, path, e))?;

        let report = FileReport::new(path, language, classify(&content, language));
        trace!("{} -> {language} {:?}", path.display(), report.counts);
        self.summary.merge(&report);
        self.progress.on_file(&report);
        Ok(())
    }

    fn expand(&self, dir: &Path) -> Result<()> {
        let children = self
            .fs
            .list_directory(dir)
            .map_err(|e| EngineError::io(FsOperation::ListDirectory, dir, e))?;
        for child in children {
            self.queue.add(Entry::new(dir.join(&child.name), child.kind));
        }
        Ok(())
    }
}
