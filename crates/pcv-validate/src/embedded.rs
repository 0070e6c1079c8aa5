//! Embedded submission schemas.
//!
//! Both schemas are compiled into the binary with `include_str!()` so that
//! validation needs no schema files at runtime.

// =============================================================================
// ClinVar submission schemas (JSON Schema draft-07)
// =============================================================================

/// Germline submission schema.
pub const GERMLINE_SCHEMA: &str = include_str!("../schemas/germline.json");

/// Somatic submission schema. Accepts somatic allele origins and
/// somatic clinical impact tiers in addition to the germline vocabulary.
pub const SOMATIC_SCHEMA: &str = include_str!("../schemas/somatic.json");
