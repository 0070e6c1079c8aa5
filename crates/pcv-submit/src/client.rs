//! Blocking HTTP client for the submission endpoints.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Request, Response};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::api_key::ApiKey;
use crate::error::{Result, SubmitError};

/// Live submission service.
const SUBMIT_URL: &str = "https://submit.ncbi.nlm.nih.gov/api/v1/submissions";

/// Test service; validates without creating a submission.
const VALIDATE_URL: &str = "https://submit.ncbi.nlm.nih.gov/apitest/v1/submissions";

/// Header carrying the submission portal API key.
const API_KEY_HEADER: &str = "SP-API-KEY";

const USER_AGENT_VALUE: &str = concat!("preclinvar/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Remote API verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Validate,
    DryRun,
    Submit,
}

impl Endpoint {
    pub fn url(self) -> String {
        match self {
            Self::Validate => VALIDATE_URL.to_string(),
            Self::DryRun => format!("{SUBMIT_URL}/?dry-run=true"),
            Self::Submit => SUBMIT_URL.to_string(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::DryRun => "dry-run",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps a submission document in the API's action envelope.
pub fn submission_payload(document: &Value) -> Value {
    json!({
        "actions": [{
            "type": "AddData",
            "targetDb": "clinvar",
            "data": {"content": document}
        }]
    })
}

/// A success response from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResponse {
    pub status: u16,
    /// Parsed body; `None` when the API answered without one (dry-run
    /// success is `204 No Content`).
    pub body: Option<Value>,
}

/// Client bound to one API key.
#[derive(Debug, Clone)]
pub struct ClinVarClient {
    client: Client,
    api_key: ApiKey,
}

impl ClinVarClient {
    pub fn new(api_key: ApiKey) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, api_key })
    }

    /// Builds the request for `endpoint` without sending it.
    pub fn request(&self, endpoint: Endpoint, document: &Value) -> Result<Request> {
        let request = self
            .client
            .post(endpoint.url())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&submission_payload(document))
            .build()?;
        Ok(request)
    }

    /// Sends `document` to `endpoint`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Unauthorized`] on 401, [`SubmitError::Api`] on any other
    /// non-success status, [`SubmitError::Network`] when no response arrives.
    pub fn send(&self, endpoint: Endpoint, document: &Value) -> Result<SubmissionResponse> {
        let request = self.request(endpoint, document)?;
        debug!(%endpoint, url = %request.url(), "sending submission");
        let response = self.client.execute(request)?;
        let response = handle_response(response)?;
        info!(%endpoint, status = response.status, "ClinVar API accepted request");
        Ok(response)
    }
}

fn handle_response(response: Response) -> Result<SubmissionResponse> {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(SubmitError::Unauthorized);
    }

    let text = response.text()?;
    if !status.is_success() {
        warn!(status = status.as_u16(), "ClinVar API rejected request");
        return Err(SubmitError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    let body = if text.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str(&text)?)
    };
    Ok(SubmissionResponse {
        status: status.as_u16(),
        body,
    })
}
