// SPDX-License-Identifier: EUPL-1.2

//! Error types for the SNS Verifier.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Reasons a message could not be verified.
///
/// A signature that simply does not match is *not* an error: `validate`
/// returns `Ok(false)` for it. Every variant here means "could not verify".
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed signing certificate URL: {0}")]
    MalformedCertificateUrl(String),

    #[error("Mandatory field missing: {0}")]
    MissingMandatoryField(&'static str),

    #[error("Signing certificate could not be retrieved: {0}")]
    CertificateFetchFailed(#[from] FetchError),

    #[error("Malformed certificate or signature: {0}")]
    MalformedCertificateOrSignature(String),
}

/// Failures of a [`CertificateFetcher`](crate::fetch::CertificateFetcher).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors returned by the webhook handlers.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Message rejected: {0}")]
    Rejected(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebhookError::Invalid(ValidationError::CertificateFetchFailed(_)) => {
                StatusCode::BAD_GATEWAY
            }
            WebhookError::Invalid(_) => StatusCode::BAD_REQUEST,
            WebhookError::Rejected(_) => StatusCode::FORBIDDEN,
            WebhookError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
