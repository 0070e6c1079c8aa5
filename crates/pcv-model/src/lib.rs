//! Data model for ClinVar submission preparation.
//!
//! - [`record`]: rows extracted from uploaded Variant / CaseData files
//! - [`columns`]: column names of the input file dialects
//! - [`vocab`]: controlled vocabularies and lookup tables
//! - [`submission`]: the submission document sent to the ClinVar API

pub mod columns;
pub mod record;
pub mod submission;
pub mod vocab;

pub use columns::{CaseDataColumn, Column, VariantColumn};
pub use record::{Record, Table};
pub use submission::{
    AssertionCriteria, ClinicalSignificance, Condition, ConditionSet, CoordinateRecord,
    DocumentAssertionCriteria, Gene, ItemCitation, Observation, RECORD_STATUS_NOVEL,
    SubmissionDocument, SubmissionItem, Variant, VariantSet,
};
