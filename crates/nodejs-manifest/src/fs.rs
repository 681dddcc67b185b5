//! File access used by the loader
//!
//! The loader never touches `std::fs` directly; it reads through a
//! [`FileAccess`] so callers can point it at a real project directory
//! ([`DirFs`]) or at an in-memory tree ([`MemoryFs`]).

use ahash::AHashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only capability for fetching a file's bytes.
///
/// A missing file must be reported as `io::ErrorKind::NotFound` so the loader
/// can tell "no manifest" apart from other failures.
pub trait FileAccess: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<T: FileAccess + ?Sized> FileAccess for &T {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<T: FileAccess + ?Sized> FileAccess for Box<T> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// Files on disk, resolved relative to a project root.
#[derive(Debug, Clone)]
pub struct DirFs {
    root: PathBuf,
}

impl DirFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirFs { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileAccess for DirFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}

/// In-memory file tree keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: AHashMap<PathBuf, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemoryFs::insert`].
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }
}

impl FileAccess for MemoryFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }
}
