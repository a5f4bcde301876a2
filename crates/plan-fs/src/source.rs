//! Read-only views over a project tree

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::path::relative_key;
use crate::{Error, NormalizedPath, Result};

/// A readable project tree.
///
/// Paths are always relative to the project root. Implementations must be
/// safe to share between threads since inference queries only ever read.
pub trait Source: Send + Sync {
    /// Read the raw bytes of a project file.
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Check whether a project file exists.
    fn exists(&self, path: &str) -> bool;

    /// Read a project file as UTF-8 text.
    fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
            path: relative_key(path),
        })
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }
}

/// A project tree rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: NormalizedPath,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(root),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }
}

impl Source for DirSource {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let native = self.root.join(path).to_native();
        fs::read(&native).map_err(|e| Error::io(native, e))
    }

    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

/// An in-memory project tree.
///
/// Useful for callers that already hold file contents (uploaded archives,
/// tests) and should not have to stage them on disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(relative_key(path), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Source for MemorySource {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let key = relative_key(path);
        self.files
            .get(&key)
            .cloned()
            .ok_or(Error::NotFound { path: key })
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(&relative_key(path))
    }
}
