//! Error types for submission assembly.

use std::fmt;

use thiserror::Error;

/// A single cell that could not be converted to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("not a whole number")]
    NotAnInteger { value: String },
}

/// A Variant row that yields neither HGVS nor any chromosome coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrepresentedRow {
    /// 1-based data row in the Variant file.
    pub row: usize,
    pub local_id: Option<String>,
}

impl fmt::Display for UnrepresentedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.local_id {
            Some(local_id) => write!(f, "row {} ({local_id})", self.row),
            None => write!(f, "row {}", self.row),
        }
    }
}

fn describe_rows(rows: &[UnrepresentedRow]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// Every offending row is listed, not just the first.
    #[error("variant rows without HGVS or chromosome coordinates: {}", describe_rows(.rows))]
    MissingVariantRepresentation { rows: Vec<UnrepresentedRow> },
}

pub type Result<T> = std::result::Result<T, AssemblyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_representation_lists_rows() {
        let err = AssemblyError::MissingVariantRepresentation {
            rows: vec![
                UnrepresentedRow {
                    row: 2,
                    local_id: Some("v2".to_string()),
                },
                UnrepresentedRow {
                    row: 5,
                    local_id: None,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "variant rows without HGVS or chromosome coordinates: row 2 (v2), row 5"
        );
    }
}
