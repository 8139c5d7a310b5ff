//! Output destination abstractions for gradetally writers.
//!
//! This module provides the `OutputDestination` trait and implementations
//! for file, memory and stdout targets. Report and summary writers never call
//! `std::fs` themselves; they ask a [`DestinationFactory`] for a destination
//! at a path, so tests can capture every artifact in memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use gradetally::io::destinations::{FileDestination, MemoryDestination};
//!
//! // Write to file
//! let file_dest = FileDestination::new("grading_report.txt".into());
//! file_dest.write_str("Grand total: 7 / 8\n")?;
//!
//! // Write to memory (for testing)
//! let mem_dest = MemoryDestination::new();
//! mem_dest.write_str("Grand total: 7 / 8\n")?;
//! assert!(mem_dest.get_content().contains("7 / 8"));
//! ```

use crate::errors::Error;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Trait for destinations that receive rendered output.
pub trait OutputDestination {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<(), Error>;

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), Error>;

    /// Get a description of the destination for diagnostics.
    fn description(&self) -> String;
}

/// Hands out the destination for an artifact path.
pub trait DestinationFactory {
    type Destination: OutputDestination;

    fn destination_for(&self, path: &Path) -> Self::Destination;
}

/// File system output destination.
///
/// Each `write_str` replaces the whole file, so a writer must render its
/// artifact completely before writing it.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        std::fs::write(&self.path, content)
            .map_err(|e| Error::io_at("Failed to write to file", &self.path, e))
    }

    fn flush(&self) -> Result<(), Error> {
        // File writes are already flushed
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Factory producing a [`FileDestination`] per path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDestinations;

impl DestinationFactory for FileDestinations {
    type Destination = FileDestination;

    fn destination_for(&self, path: &Path) -> FileDestination {
        FileDestination::new(path.to_path_buf())
    }
}

/// In-memory output destination for testing.
///
/// Captures all output in a shared buffer that can be inspected after
/// writing. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.buffer.write().expect("RwLock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.read().expect("RwLock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Factory keeping one [`MemoryDestination`] per path.
///
/// Requesting a path again clears its buffer, mirroring the overwrite
/// behavior of files.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestinations {
    outputs: Arc<RwLock<BTreeMap<PathBuf, MemoryDestination>>>,
}

impl MemoryDestinations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content written to `path`, if anything was written there.
    pub fn content_of(&self, path: &Path) -> Option<String> {
        self.outputs
            .read()
            .expect("RwLock poisoned")
            .get(path)
            .map(MemoryDestination::get_content)
    }

    /// All paths a destination was requested for, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.outputs
            .read()
            .expect("RwLock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl DestinationFactory for MemoryDestinations {
    type Destination = MemoryDestination;

    fn destination_for(&self, path: &Path) -> MemoryDestination {
        let mut outputs = self.outputs.write().expect("RwLock poisoned");
        let destination = outputs.entry(path.to_path_buf()).or_default();
        destination.clear();
        destination.clone()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}
