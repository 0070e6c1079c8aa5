//! Field mapping and submission assembly.
//!
//! Turns a Variant table and a CaseData table into a ClinVar
//! [`SubmissionDocument`]:
//!
//! 1. [`coords`] normalizes chromosome coordinates for small and structural variants
//! 2. [`item`] builds one submission item per Variant row
//! 3. [`assemble`] joins the tables, builds every item and applies request overrides
//!
//! Field-level problems never abort a conversion. They are recorded in a
//! [`Diagnostics`] sink owned by the caller and passed down by `&mut`.
//!
//! [`SubmissionDocument`]: pcv_model::SubmissionDocument

pub mod assemble;
pub mod coords;
pub mod diagnostics;
pub mod error;
pub mod item;
pub mod options;

pub use assemble::{CaseDataIndex, assemble, legacy_assertion_criteria};
pub use coords::{
    CoordinateField, CoordinateKey, CoordinateValue, FieldFormat, Geometry, SMALL_VARIANT_FIELDS,
    STRUCTURAL_VARIANT_FIELDS, normalize_coordinates, read_coordinates,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{AssemblyError, ConversionError, Result, UnrepresentedRow};
pub use item::{ItemOptions, build_item};
pub use options::SubmissionOptions;
