//! Work queue shared by the traversal workers.
//!
//! Workers are both consumers and producers: expanding a directory adds new
//! entries. Completion is tracked with a pending-work count that covers
//! entries waiting in the queue plus entries a worker is still processing.
//! The count is incremented before an entry becomes visible and decremented
//! only after its processing (including enqueuing children) has finished, so
//! it reaches zero exactly once, when no more work can appear.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender, unbounded};

enum Message<T> {
    Item(T),
    Close,
}

/// Counters for diagnostics.
#[derive(Debug, Default)]
pub struct QueueStats {
    /// Total entries added.
    pub enqueued: AtomicU64,
    /// Total entries handed to a consumer.
    pub dequeued: AtomicU64,
}

/// Unbounded multi-producer/multi-consumer FIFO with completion detection.
pub struct WorkQueue<T> {
    sender: Sender<Message<T>>,
    receiver: Receiver<Message<T>>,
    /// Entries queued plus entries being processed.
    pending: AtomicUsize,
    /// Entries queued and not yet removed.
    queued: AtomicUsize,
    closed: AtomicBool,
    consumers: usize,
    stats: QueueStats,
}

impl<T> WorkQueue<T> {
    /// Creates a queue drained by `consumers` blocking removers.
    ///
    /// Closing wakes exactly that many removers, so no more than `consumers`
    /// threads may call [`WorkQueue::remove`].
    #[must_use]
    pub fn new(consumers: usize) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            pending: AtomicUsize::new(0),
            queued: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
            consumers,
            stats: QueueStats::default(),
        }
    }

    /// Makes `item` available to a future [`WorkQueue::remove`]. Never blocks.
    pub fn add(&self, item: T) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.queued.fetch_add(1, Ordering::SeqCst);
        self.stats.enqueued.fetch_add(1, Ordering::Relaxed);
        // Cannot fail: the queue owns a receiver for its whole lifetime.
        let _ = self.sender.send(Message::Item(item));
    }

    /// Returns the oldest entry, blocking while the queue is empty.
    ///
    /// Returns `None` once the queue is closed, either because all work is
    /// done or because the scan was aborted. Every `Some` must be paired with
    /// one [`WorkQueue::finish`], usually through a [`WorkGuard`].
    pub fn remove(&self) -> Option<T> {
        if self.is_closed() {
            return None;
        }
        match self.receiver.recv() {
            Ok(Message::Item(item)) => {
                self.queued.fetch_sub(1, Ordering::SeqCst);
                if self.is_closed() {
                    // Aborted while this entry was queued; drop it.
                    return None;
                }
                self.stats.dequeued.fetch_add(1, Ordering::Relaxed);
                Some(item)
            }
            Ok(Message::Close) | Err(_) => None,
        }
    }

    /// Marks one removed entry as fully processed. Closes the queue when this
    /// was the last pending entry.
    pub fn finish(&self) {
        let previous = self.pending.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "finish() without a matching add()");
        if previous == 1 {
            self.close();
        }
    }

    /// Stops the queue immediately; queued entries are discarded.
    pub fn abort(&self) {
        self.close();
    }

    fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            for _ in 0..self.consumers {
                let _ = self.sender.send(Message::Close);
            }
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Entries present in the queue (not those being processed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.queued.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries queued plus entries being processed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }
}

/// RAII guard calling [`WorkQueue::finish`] when the current entry is done.
///
/// Hold it for the whole processing of an entry so children are enqueued
/// before the pending count drops.
pub struct WorkGuard<'a, T> {
    queue: &'a WorkQueue<T>,
}

impl<'a, T> WorkGuard<'a, T> {
    #[must_use]
    pub fn new(queue: &'a WorkQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T> Drop for WorkGuard<'_, T> {
    fn drop(&mut self) {
        self.queue.finish();
    }
}
