use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    Stat,
    ListDirectory,
    ReadFile,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stat => "stat",
            Self::ListDirectory => "list directory",
            Self::ReadFile => "read file",
        })
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Any filesystem failure; aborts the whole scan.
    #[error("Failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

impl EngineError {
    pub(crate) fn io(operation: FsOperation, path: &Path, source: std::io::Error) -> Self {
        Self::Io { operation, path: path.to_path_buf(), source }
    }

    /// Path of the entry an I/O failure refers to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
