//! Schema validation of ClinVar submission documents.
//!
//! The germline and somatic submission schemas are embedded at compile time
//! (see [`embedded`]). [`validate`] checks a whole document and reports every
//! violation, sorted, rather than stopping at the first.

pub mod embedded;
pub mod error;
pub mod validator;

pub use error::{Result, SchemaError};
pub use validator::{SchemaKind, Validation, validate, validate_str};
