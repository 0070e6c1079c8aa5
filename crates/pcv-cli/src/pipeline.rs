//! The conversion pipeline: uploads in, validated submission document out.
//!
//! Stages run in order and the first failing stage rejects the request:
//!
//! 1. classify the uploads into the Variant and CaseData files
//! 2. extract both tables (an unreadable or empty file is malformed)
//! 3. assemble the submission document
//! 4. validate the document against the selected schema
//!
//! No document is returned unless every stage succeeded.

use std::time::Instant;

use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, info_span, warn};

use pcv_ingest::{Delimiter, FileKind, IngestError, Upload, classify_uploads, read_records};
use pcv_map::{AssemblyError, Diagnostics, SubmissionOptions, assemble};
use pcv_model::{SubmissionDocument, Table};
use pcv_validate::{SchemaError, SchemaKind, validate};

/// Why a conversion was rejected.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The Variant or CaseData file was not among the uploads.
    #[error("Both 'Variant' and 'CaseData' csv files are required")]
    MissingFile { missing: FileKind },

    /// An upload could not be classified or read.
    #[error(transparent)]
    Ingest(IngestError),

    /// An upload yielded no header or no data rows.
    #[error("Malformed file: {filename}")]
    MalformedFile { filename: String },

    /// Variant rows that describe no variant.
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The document does not conform to the schema.
    #[error("Created json file contains validation errors")]
    Validation { errors: Vec<String> },
}

impl From<IngestError> for ConvertError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::MissingFile { missing } => Self::MissingFile { missing },
            other => Self::Ingest(other),
        }
    }
}

impl ConvertError {
    /// Structured rejection payload: a message plus the offending filename
    /// or the ordered validation errors where they apply.
    pub fn payload(&self) -> Value {
        match self {
            Self::MalformedFile { filename } => json!({
                "message": self.to_string(),
                "filename": filename,
            }),
            Self::Validation { errors } => json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            _ => json!({ "message": self.to_string() }),
        }
    }
}

/// Settings of one conversion request.
#[derive(Debug, Clone, Default)]
pub struct ConvertRequest {
    pub delimiter: Delimiter,
    pub schema: SchemaKind,
    pub options: SubmissionOptions,
}

/// A successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: SubmissionDocument,
    /// The document as sent to the API.
    pub json: Value,
    /// Fields skipped while building items.
    pub diagnostics: Diagnostics,
    pub variant_file: String,
    pub casedata_file: String,
    pub variant_rows: usize,
    pub casedata_rows: usize,
}

impl Conversion {
    pub fn observation_count(&self) -> usize {
        self.document
            .items()
            .iter()
            .map(|item| item.observed_in.len())
            .sum()
    }
}

/// Reads one upload into a table, rejecting it as malformed when it has no
/// header or no data rows.
fn extract<U: Upload>(upload: &U, delimiter: Delimiter) -> Result<Table, ConvertError> {
    let filename = upload.filename().to_string();
    let contents = upload.read()?;
    match read_records(&contents, delimiter) {
        Ok(table) if !table.is_empty() => {
            info!(file = %filename, rows = table.len(), "extracted rows");
            Ok(table)
        }
        Ok(_) => {
            warn!(file = %filename, "file has no data rows");
            Err(ConvertError::MalformedFile { filename })
        }
        Err(error) => {
            warn!(file = %filename, %error, "file could not be parsed");
            Err(ConvertError::MalformedFile { filename })
        }
    }
}

/// Converts a Variant / CaseData upload pair into a validated submission.
pub fn convert<U: Upload>(
    uploads: Vec<U>,
    request: &ConvertRequest,
) -> Result<Conversion, ConvertError> {
    let span = info_span!("convert", schema = %request.schema);
    let _guard = span.enter();
    let start = Instant::now();

    let pair = classify_uploads(uploads)?;
    let variants = extract(&pair.variant, request.delimiter)?;
    let casedata = extract(&pair.casedata, request.delimiter)?;

    let mut diagnostics = Diagnostics::new();
    let document = assemble(&variants, &casedata, &request.options, &mut diagnostics)?;
    let json = document.to_json()?;

    let validation = validate(request.schema, &json)?;
    if !validation.is_valid() {
        warn!(errors = validation.errors.len(), "submission failed schema validation");
        return Err(ConvertError::Validation {
            errors: validation.errors,
        });
    }

    info!(
        items = document.items().len(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(Conversion {
        document,
        json,
        diagnostics,
        variant_file: pair.variant.filename().to_string(),
        casedata_file: pair.casedata.filename().to_string(),
        variant_rows: variants.len(),
        casedata_rows: casedata.len(),
    })
}
