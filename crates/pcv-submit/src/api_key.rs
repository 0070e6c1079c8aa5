//! Submission portal API keys.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SubmitError};

/// Length of a submission portal API key.
pub const API_KEY_LENGTH: usize = 64;

/// A syntactically valid API key.
///
/// `Debug` and `Display` never print the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim();
        if key.len() != API_KEY_LENGTH || !key.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(SubmitError::InvalidApiKey {
                length: key.chars().count(),
            });
        }
        Ok(Self(key.to_string()))
    }

    /// The key as sent in the `SP-API-KEY` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for ApiKey {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
