//! Request-level settings applied after the items are built.

use pcv_model::DocumentAssertionCriteria;

/// Optional request parameters of a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionOptions {
    pub submission_name: Option<String>,
    pub release_status: Option<String>,
    /// Citation database of the batch assertion criteria (e.g. `PubMed`).
    pub assertion_db: Option<String>,
    /// Citation identifier of the batch assertion criteria.
    pub assertion_id: Option<String>,
    /// Genome assembly for coordinate-based variants (e.g. `GRCh38`).
    pub assembly: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value
        .map(String::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl SubmissionOptions {
    pub fn submission_name(&self) -> Option<&str> {
        non_blank(self.submission_name.as_ref())
    }

    pub fn release_status(&self) -> Option<&str> {
        non_blank(self.release_status.as_ref())
    }

    pub fn assembly(&self) -> Option<&str> {
        non_blank(self.assembly.as_ref())
    }

    /// Batch assertion criteria; only set when both database and id are given.
    pub fn assertion_criteria(&self) -> Option<DocumentAssertionCriteria> {
        let db = non_blank(self.assertion_db.as_ref())?;
        let id = non_blank(self.assertion_id.as_ref())?;
        Some(DocumentAssertionCriteria {
            db: db.to_string(),
            id: id.to_string(),
        })
    }
}
