//! Test doubles shared by the engine integration tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use loc_report_engine::{DirEntry, EntryKind, FileSystem};

/// In-memory tree with injectable failures and latency.
#[derive(Debug, Default)]
pub struct MemoryFs {
    dirs: HashMap<PathBuf, Vec<DirEntry>>,
    files: HashMap<PathBuf, String>,
    denied: HashSet<PathBuf>,
    latency: Option<Duration>,
    calls: Mutex<usize>,
}

#[allow(dead_code)]
impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and every missing parent directory.
    pub fn add_file(&mut self, path: &str, content: &str) -> &mut Self {
        let path = PathBuf::from(path);
        self.link_parents(&path, EntryKind::File);
        self.files.insert(path, content.to_string());
        self
    }

    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        let path = PathBuf::from(path);
        self.link_parents(&path, EntryKind::Directory);
        self.dirs.entry(path).or_default();
        self
    }

    /// Any operation on `path` fails with `PermissionDenied`.
    pub fn deny(&mut self, path: &str) -> &mut Self {
        self.denied.insert(PathBuf::from(path));
        self
    }

    /// Every operation sleeps for `latency` first.
    pub fn with_latency(&mut self, latency: Duration) -> &mut Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn link_parents(&mut self, path: &Path, kind: EntryKind) {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return;
        };
        let name = path.file_name().unwrap().to_os_string();
        let children = self.dirs.entry(parent.to_path_buf()).or_default();
        if children.iter().any(|c| c.name == name) {
            return;
        }
        children.push(DirEntry { name, kind });
        self.link_parents(&parent.to_path_buf(), EntryKind::Directory);
    }

    fn enter(&self, path: &Path) -> io::Result<()> {
        *self.calls.lock().unwrap() += 1;
        if let Some(latency) = self.latency {
            thread::sleep(latency);
        }
        if self.denied.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        self.enter(path)?;
        if self.dirs.contains_key(path) {
            Ok(EntryKind::Directory)
        } else if self.files.contains_key(path) {
            Ok(EntryKind::File)
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
        }
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.enter(path)?;
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        self.enter(path)?;
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}
