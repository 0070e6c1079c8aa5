//! Upload handling and row extraction.
//!
//! This crate turns uploaded Variant and CaseData files into [`Table`]s of
//! field-name to value records.
//!
//! # Example
//!
//! ```ignore
//! use pcv_ingest::{Delimiter, FileUpload, classify_uploads, read_records};
//!
//! let uploads = vec![
//!     FileUpload::new("submission/Variant.csv"),
//!     FileUpload::new("submission/CaseData.csv"),
//! ];
//! let pair = classify_uploads(uploads)?;
//! let variants = read_records(&pair.variant.read()?, Delimiter::Auto)?;
//! ```
//!
//! [`Table`]: pcv_model::Table

mod classify;
mod error;
mod extract;
mod upload;

// === Error Types ===
pub use error::{IngestError, Result};

// === Row Extraction ===
pub use extract::{Delimiter, extract_records, read_records};

// === Uploads ===
pub use classify::{ClassifiedUploads, FileKind, classify_uploads};
pub use upload::{FileUpload, MemoryUpload, Upload};
