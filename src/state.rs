// SPDX-License-Identifier: EUPL-1.2

//! Application state shared by the webhook handlers.

use crate::{config::Config, fetch::HttpCertificateFetcher, verifier::SignatureVerifier};
use std::sync::Arc;

/// Shared application state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub verifier: SignatureVerifier,
    /// Topic ARN allow-list. `None` accepts every topic that verifies.
    /// Set via `SNS_TOPIC_ARNS`.
    pub allowed_topics: Option<Vec<String>>,
}

impl AppState {
    /// Build the state the binary runs with: HTTPS certificate fetching.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = HttpCertificateFetcher::new(config.fetch_timeout)?;
        let verifier = SignatureVerifier::new(config.authenticator.clone(), Arc::new(fetcher));

        match &config.allowed_topics {
            Some(topics) => tracing::info!("Accepting messages from {} topic(s)", topics.len()),
            None => tracing::warn!("SNS_TOPIC_ARNS not set — accepting every topic that verifies"),
        }

        Ok(Self::new(verifier, config.allowed_topics.clone()))
    }

    pub fn new(verifier: SignatureVerifier, allowed_topics: Option<Vec<String>>) -> Self {
        Self {
            verifier,
            allowed_topics,
        }
    }

    pub fn topic_allowed(&self, topic_arn: &str) -> bool {
        self.allowed_topics
            .as_ref()
            .map_or(true, |topics| topics.iter().any(|t| t == topic_arn))
    }
}
