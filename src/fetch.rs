// SPDX-License-Identifier: EUPL-1.2

//! Signing certificate retrieval.

use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the bytes behind a signing certificate URL.
///
/// Only called with URLs that already passed the certificate URL gate.
#[async_trait]
pub trait CertificateFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`CertificateFetcher`] over HTTPS.
///
/// Redirects are not followed: a redirect could leave the SNS host the URL
/// was checked against.
#[derive(Debug, Clone)]
pub struct HttpCertificateFetcher {
    client: reqwest::Client,
}

impl HttpCertificateFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .https_only(true)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CertificateFetcher for HttpCertificateFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!("Fetched signing certificate from {url} ({} bytes)", body.len());
        Ok(body.to_vec())
    }
}
