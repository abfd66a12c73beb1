//! Client for the remote AI code-review service.
//!
//! The service is advisory: local diagnostics and corrections never depend
//! on it, and callers must treat a failed review as a non-fatal notice.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default deployment of the review service.
pub const DEFAULT_ENDPOINT: &str = "https://lexical-analyzer-hw4z.onrender.com/api/analyze";

/// Environment variable overriding the review endpoint.
pub const ENDPOINT_ENV_VAR: &str = "LEXA_REVIEW_URL";

#[derive(Debug, Serialize)]
struct ReviewRequest<'a> {
    code: &'a str,
    language: &'a str,
}

/// Advisory result from the review service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Free-form analysis text (markdown).
    pub analysis: String,
    /// Optional rewritten source suggested by the service.
    #[serde(default)]
    pub corrections: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("failed to reach review service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("review service returned HTTP {status}")]
    Status { status: u16 },
}

/// Resolve the endpoint to use: explicit override, then the
/// `LEXA_REVIEW_URL` environment variable, then the default deployment.
pub fn resolve_endpoint(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Request an AI review of `code` from the service at `endpoint`.
///
/// Blocking call with connect and total-request timeouts so a slow or
/// unreachable service cannot hang the CLI.
pub fn request_review(
    endpoint: &str,
    code: &str,
    language: Language,
) -> Result<Review, ReviewError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(concat!("lexa/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .post(endpoint)
        .json(&ReviewRequest {
            code,
            language: language.tag(),
        })
        .send()?;

    if !response.status().is_success() {
        return Err(ReviewError::Status {
            status: response.status().as_u16(),
        });
    }

    Ok(response.json::<Review>()?)
}
