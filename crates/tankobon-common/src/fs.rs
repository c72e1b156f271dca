//! File-system abstraction.
//!
//! Metadata readers only need to check existence and read whole files, so the
//! seam is kept that small. [`StdFileSystem`] is the real implementation and
//! [`MemoryFileSystem`] backs tests that should not touch the disk.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Minimal read-only view of a file system.
pub trait FileSystem: Send + Sync {
    /// Check whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Bare file name of `path`, if it has one.
    fn file_name(&self, path: &Path) -> Option<String> {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
    }
}

/// File system backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }
}

/// In-memory file system keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryFileSystem {
    /// Create an empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder-style variant of [`MemoryFileSystem::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::not_found(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_memory_fs_roundtrip() {
        let fs = MemoryFileSystem::new().with_file("/lib/a.cbz", b"abc".to_vec());
        assert!(fs.exists(Path::new("/lib/a.cbz")));
        assert!(!fs.exists(Path::new("/lib/b.cbz")));
        assert_eq!(fs.read(Path::new("/lib/a.cbz")).unwrap(), b"abc");
        assert!(matches!(
            fs.read(Path::new("/lib/b.cbz")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_file_name() {
        let fs = StdFileSystem;
        assert_eq!(
            fs.file_name(Path::new("/lib/Naruto/Naruto v01.cbz")),
            Some("Naruto v01.cbz".to_string())
        );
        assert_eq!(fs.file_name(Path::new("/")), None);
    }

    #[test]
    fn test_std_fs_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.epub");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"PK").unwrap();

        let fs = StdFileSystem;
        assert!(fs.exists(&path));
        assert!(!fs.exists(dir.path()));
        assert_eq!(fs.read(&path).unwrap(), b"PK");
        assert!(matches!(
            fs.read(&dir.path().join("missing")),
            Err(Error::Io(_))
        ));
    }
}
