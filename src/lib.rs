// SPDX-License-Identifier: EUPL-1.2

//! SNS Verifier — authenticity checks for Amazon SNS messages.
//!
//! SNS signs every message it delivers to an HTTP(S) endpoint. Before a
//! message is trusted, [`SignatureVerifier::validate`]:
//!
//! 1. rewrites legacy field names (`SigningCertUrl` → `SigningCertURL`, …),
//! 2. checks the signing certificate URL is `https`, on an SNS host, and a `.pem`,
//! 3. fetches the certificate through a [`CertificateFetcher`],
//! 4. rebuilds the canonical string for the message type,
//! 5. verifies the RSA-SHA1 signature with the certificate's public key.
//!
//! The result is `Ok(true)` / `Ok(false)` for a signature that did / did not
//! match, and `Err(ValidationError)` whenever verification could not run.

pub mod auth;
pub mod canonical;
pub mod cert_url;
pub mod config;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod state;
pub mod verifier;


use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use cert_url::CertUrlAuthenticator;
pub use error::{FetchError, ValidationError};
pub use fetch::{CertificateFetcher, HttpCertificateFetcher};
pub use models::{Message, MessageType};
pub use state::AppState;
pub use verifier::SignatureVerifier;

/// The webhook router: `GET /health` and `POST /sns`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/sns", post(handlers::receive_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
