// crates/engine/src/filesystem.rs
//! Filesystem access used by the traversal engine.
//!
//! Every operation may fail and may block; the engine never retries.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Kind of a filesystem entry as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, devices, unresolved symlinks and the like. Ignored by the scan.
    Other,
}

impl EntryKind {
    fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_file() {
            Self::File
        } else if ft.is_dir() {
            Self::Directory
        } else {
            Self::Other
        }
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

/// Port for the three filesystem primitives the engine needs.
pub trait FileSystem: Send + Sync {
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Immediate children of `path`, in the order the filesystem returns them.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Whole file decoded as UTF-8. Undecodable content is `ErrorKind::InvalidData`.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem {
    /// Resolve symlinks found while listing. No cycle detection is done.
    pub follow_links: bool,
}

impl LocalFileSystem {
    #[must_use]
    pub const fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }
}

/// Kind of a symlink's target. A link that cannot be resolved is `Other`.
fn resolve_link(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) => EntryKind::from_file_type(meta.file_type()),
        Err(err) => {
            debug!("skip unresolvable link {}: {err}", path.display());
            EntryKind::Other
        }
    }
}

impl FileSystem for LocalFileSystem {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        // Explicitly named roots are always resolved, like stat(2).
        fs::metadata(path).map(|meta| EntryKind::from_file_type(meta.file_type()))
    }

    fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() && self.follow_links {
                resolve_link(&entry.path())
            } else {
                EntryKind::from_file_type(file_type)
            };
            entries.push(DirEntry { name: entry.file_name(), kind });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stat_distinguishes_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        let fs = LocalFileSystem::default();
        assert_eq!(fs.stat(dir.path()).unwrap(), EntryKind::Directory);
        assert_eq!(fs.stat(&file).unwrap(), EntryKind::File);
        assert_eq!(
            fs.stat(&dir.path().join("missing")).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn list_directory_reports_children() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.rs"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries = LocalFileSystem::default().list_directory(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                DirEntry { name: "a.rs".into(), kind: EntryKind::File },
                DirEntry { name: "sub".into(), kind: EntryKind::Directory },
            ]
        );
    }

    #[test]
    fn read_file_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bin.py");
        fs::write(&file, [0x66, 0xff, 0xfe]).unwrap();

        let err = LocalFileSystem::default().read_file(&file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_other_unless_followed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.py"), "x\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.py"), dir.path().join("link.py")).unwrap();

        let kind_of = |fs: LocalFileSystem| {
            fs.list_directory(dir.path())
                .unwrap()
                .into_iter()
                .find(|e| e.name == "link.py")
                .map(|e| e.kind)
        };
        assert_eq!(kind_of(LocalFileSystem::new(false)), Some(EntryKind::Other));
        assert_eq!(kind_of(LocalFileSystem::new(true)), Some(EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_other_when_followed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "x\n").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.py"), dir.path().join("dangling.py")).unwrap();

        let mut entries = LocalFileSystem::new(true).list_directory(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                DirEntry { name: "a.py".into(), kind: EntryKind::File },
                DirEntry { name: "dangling.py".into(), kind: EntryKind::Other },
            ]
        );
    }
}
