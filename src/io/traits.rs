//! I/O trait definitions for scan operations.
//!
//! The walker and the extractor never touch `std::fs` directly. They go
//! through [`FileSystem`], which lets tests run a full scan against an
//! in-memory tree.
//!
//! # Example
//!
//! ```rust,ignore
//! use gradetally::io::traits::FileSystem;
//!
//! fn count_entries<F: FileSystem>(fs: &F, dir: &Path) -> Result<usize> {
//!     Ok(fs.list_dir(dir)?.len())
//! }
//! ```

use crate::errors::Error;
use std::path::{Path, PathBuf};

/// Kind of a directory entry as seen by the walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets and anything else the walker does not descend into
    Other,
}

/// One child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// File name of the entry, lossily converted for suffix matching.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// File system operations trait.
pub trait FileSystem {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileSystem` if:
    /// - The file doesn't exist
    /// - Permission is denied
    /// - The file isn't valid UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;

    /// List the direct children of a directory, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileSystem` if the directory doesn't exist or can't be
    /// read.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, Error>;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        (**self).read_to_string(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, Error> {
        (**self).list_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
