//! Error types for upload handling and row extraction.

use std::path::PathBuf;
use thiserror::Error;

use crate::classify::FileKind;

/// Errors that can occur while reading and parsing uploads.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Upload Errors ===
    /// Failed to read an upload from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the two required files was not uploaded.
    #[error("Both 'Variant' and 'CaseData' files are required (missing {missing})")]
    MissingFile { missing: FileKind },

    /// Two uploads classify as the same kind of file.
    #[error("more than one {kind} file provided: {first} and {second}")]
    DuplicateFile {
        kind: FileKind,
        first: String,
        second: String,
    },

    // === Parsing Errors ===
    /// Failed to write the parse buffer.
    #[error("failed to buffer upload contents: {source}")]
    Buffer {
        #[source]
        source: std::io::Error,
    },

    /// Upload is not UTF-8 text.
    #[error("file is not valid UTF-8 (invalid byte at offset {offset})")]
    Encoding { offset: usize },

    /// Delimited text could not be parsed.
    #[error("failed to parse delimited text at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// File has no usable header row.
    #[error("file has no header row")]
    NoHeader,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
