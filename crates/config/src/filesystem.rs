//! Filesystem access used by the configuration loader

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to files below a root directory.
///
/// The loader only ever asks for paths relative to [`FileSystem::root`], so an
/// implementation is free to serve them from disk or from memory.
pub trait FileSystem {
    /// Root that relative paths are resolved against
    fn root(&self) -> &Path;

    /// Read the whole file at `relative` as UTF-8
    fn read_to_string(&self, relative: &Path) -> io::Result<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn root(&self) -> &Path {
        (**self).root()
    }

    fn read_to_string(&self, relative: &Path) -> io::Result<String> {
        (**self).read_to_string(relative)
    }
}

/// Files on the local disk
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    /// Serve files below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileSystem for OsFileSystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_to_string(&self, relative: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(relative))
    }
}

/// In-memory files, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    root: PathBuf,
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    /// Empty filesystem; every read fails with `NotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return the filesystem
    pub fn with_file(mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(relative, contents);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, relative: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(relative.into(), contents.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_to_string(&self, relative: &Path) -> io::Result<String> {
        self.files.get(relative).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", relative.display()),
            )
        })
    }
}
