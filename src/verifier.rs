// SPDX-License-Identifier: EUPL-1.2

//! The verification pipeline.
//!
//! normalize → certificate URL gate → fetch certificate → canonical string →
//! RSA-SHA1 check. The first failing stage ends the call.

use crate::{
    auth, canonical, cert_url::CertUrlAuthenticator, error::ValidationError,
    fetch::CertificateFetcher, models::Message, normalize::normalize,
};
use std::sync::Arc;

/// Verifies SNS messages.
///
/// Holds no per-message state, so one instance can be shared across tasks.
#[derive(Clone)]
pub struct SignatureVerifier {
    authenticator: CertUrlAuthenticator,
    fetcher: Arc<dyn CertificateFetcher>,
}

impl SignatureVerifier {
    pub fn new(authenticator: CertUrlAuthenticator, fetcher: Arc<dyn CertificateFetcher>) -> Self {
        Self {
            authenticator,
            fetcher,
        }
    }

    /// `Ok(true)` if the message is authentic, `Ok(false)` if its signature
    /// does not match, `Err` if it could not be verified at all.
    pub async fn validate(&self, message: &Message) -> Result<bool, ValidationError> {
        let message = normalize(message);

        let cert_url = message
            .get("SigningCertURL")
            .ok_or(ValidationError::MissingMandatoryField("SigningCertURL"))?;
        if let Err(e) = self.authenticator.check(cert_url) {
            tracing::warn!("Refusing to fetch signing certificate: {e}");
            return Err(e);
        }

        let certificate = self.fetcher.fetch(cert_url).await?;
        tracing::debug!("Signing certificate retrieved from {cert_url}");

        let string_to_sign = canonical::string_to_sign(&message)?;
        let signature = message
            .get("Signature")
            .ok_or(ValidationError::MissingMandatoryField("Signature"))?;

        let verified = auth::verify_signature(&certificate, &string_to_sign, signature)?;
        tracing::debug!(
            "Signature check for message {}: {}",
            message.get("MessageId").unwrap_or("<none>"),
            if verified { "match" } else { "mismatch" }
        );
        Ok(verified)
    }
}
