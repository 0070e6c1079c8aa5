//! Document validation against the embedded schemas.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::embedded::{GERMLINE_SCHEMA, SOMATIC_SCHEMA};
use crate::error::{Result, SchemaError};

/// Submission schema dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaKind {
    #[default]
    Germline,
    Somatic,
}

impl SchemaKind {
    pub const ALL: [Self; 2] = [Self::Germline, Self::Somatic];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Germline => "germline",
            Self::Somatic => "somatic",
        }
    }

    /// Raw schema text.
    pub const fn source(self) -> &'static str {
        match self {
            Self::Germline => GERMLINE_SCHEMA,
            Self::Somatic => SOMATIC_SCHEMA,
        }
    }

    /// Parsed schema document.
    pub fn schema(self) -> Result<Value> {
        serde_json::from_str(self.source()).map_err(|source| SchemaError::Parse {
            schema: self.as_str(),
            source,
        })
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SchemaError::UnknownSchema(s.to_string()))
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Every violation as `"<instance path>: <message>"`, sorted.
    pub errors: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `(is_valid, errors)`.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.errors.is_empty(), self.errors)
    }
}

/// Validates `document` against the `kind` schema.
///
/// # Errors
///
/// Fails only when the embedded schema cannot be loaded. Schema violations
/// are reported in the returned [`Validation`].
pub fn validate(kind: SchemaKind, document: &Value) -> Result<Validation> {
    let schema = kind.schema()?;
    let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError::Compile {
        schema: kind.as_str(),
        message: format!("{e}"),
    })?;

    let mut errors: Vec<String> = validator
        .iter_errors(document)
        .map(|e| {
            let path = e.instance_path.to_string();
            let path = if path.is_empty() { "/" } else { path.as_str() };
            format!("{path}: {e}")
        })
        .collect();
    errors.sort();
    errors.dedup();

    debug!(schema = %kind, errors = errors.len(), "validated submission");
    Ok(Validation { errors })
}

/// Parses `text` as JSON and validates it.
pub fn validate_str(kind: SchemaKind, text: &str) -> Result<Validation> {
    let document: Value = serde_json::from_str(text)?;
    validate(kind, &document)
}
