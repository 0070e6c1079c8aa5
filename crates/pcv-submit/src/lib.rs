//! Client for the ClinVar Submission API.
//!
//! Sends an assembled submission document to one of three endpoints:
//!
//! - [`Endpoint::Validate`]: the API's test service, checks without storing
//! - [`Endpoint::DryRun`]: the live service with `dry-run=true`
//! - [`Endpoint::Submit`]: the live service
//!
//! The API key is checked locally before any request is made.

pub mod api_key;
pub mod client;
pub mod error;

pub use api_key::ApiKey;
pub use client::{ClinVarClient, Endpoint, SubmissionResponse, submission_payload};
pub use error::{Result, SubmitError};
