//! Uploaded files.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// A file handed to the converter: a name used for classification and a
/// whole-file byte read.
pub trait Upload {
    fn filename(&self) -> &str;

    fn read(&self) -> Result<Vec<u8>>;
}

/// An upload backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileUpload {
    path: PathBuf,
    filename: String,
}

impl FileUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, filename }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Upload for FileUpload {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|source| IngestError::FileRead {
            path: self.path.clone(),
            source,
        })
    }
}

/// An upload already held in memory.
#[derive(Debug, Clone)]
pub struct MemoryUpload {
    filename: String,
    contents: Vec<u8>,
}

impl MemoryUpload {
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

impl Upload for MemoryUpload {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn read(&self) -> Result<Vec<u8>> {
        Ok(self.contents.clone())
    }
}
