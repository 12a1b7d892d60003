//! Verse resource access.
//!
//! The parser only ever sees the full text of a resource. Where that text
//! comes from (a file on disk, an in-memory string in tests) is hidden behind
//! [`VerseSource`].

use std::path::{Path, PathBuf};

use crate::constants::reading::RESOURCE_FILE;
use crate::error::{Error, Result};

/// Trait for verse text providers.
///
/// A provider hands back the whole resource in one blocking read. There is
/// no retry and no caching; each call reads afresh.
pub trait VerseSource {
    /// Read the complete resource as UTF-8 text.
    fn read_text(&self) -> Result<String>;

    /// Human-readable description of the source, used in log messages.
    fn describe(&self) -> String;
}

/// A verse resource stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VerseSource for FileSource {
    fn read_text(&self) -> Result<String> {
        // fs_err already names the path in its message; keep it structured too
        fs_err::read_to_string(&self.path).map_err(|e| Error::io(e, self.path.clone()))
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

/// A verse resource held in memory.
#[derive(Debug, Clone, Default)]
pub struct TextSource(pub String);

impl TextSource {
    /// Wrap already-loaded text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl VerseSource for TextSource {
    fn read_text(&self) -> Result<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory text ({} bytes)", self.0.len())
    }
}

/// Default location of the verse file.
///
/// Uses `~/Library/Application Support/proverbs/Proverbs.txt` on macOS (via
/// `dirs::data_dir`), falling back to the working directory.
pub fn default_resource_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(RESOURCE_FILE),
        |d| d.join("proverbs").join(RESOURCE_FILE),
    )
}
