//! Error types for schema validation.

use thiserror::Error;

/// Errors raised before a document can be checked.
///
/// A document that fails its schema is not an error; see
/// [`Validation`](crate::Validation).
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Unknown schema name.
    #[error("unknown schema '{0}' (expected germline or somatic)")]
    UnknownSchema(String),

    /// Embedded schema text is not JSON.
    #[error("schema {schema} is not valid JSON: {source}")]
    Parse {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Embedded schema does not compile.
    #[error("schema {schema} could not be compiled: {message}")]
    Compile {
        schema: &'static str,
        message: String,
    },

    /// Submission text is not JSON.
    #[error("submission is not valid JSON: {0}")]
    Document(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
