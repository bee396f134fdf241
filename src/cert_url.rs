// SPDX-License-Identifier: EUPL-1.2

//! Signing certificate URL gate.
//!
//! A certificate is only ever fetched from a URL that passes [`CertUrlAuthenticator::check`]:
//! `https`, an SNS host, and a path ending in `.pem`. Anything else would let a
//! sender point us at a certificate it controls.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Hosts SNS serves its signing certificates from, including the China partition.
pub const DEFAULT_HOST_PATTERN: &str = r"sns\.[a-zA-Z0-9-]{3,}\.amazonaws\.com(\.cn)?";

static DEFAULT_HOST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    anchored(DEFAULT_HOST_PATTERN).expect("default SNS host pattern compiles")
});

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Checks signing certificate URLs against a host pattern.
#[derive(Debug, Clone)]
pub struct CertUrlAuthenticator {
    host: Regex,
}

impl CertUrlAuthenticator {
    /// Build with a custom host pattern. The pattern always has to match the
    /// whole host, whether or not it carries its own `^`/`$`.
    pub fn new(host_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            host: anchored(host_pattern)?,
        })
    }

    /// Parse `raw` and return it if it may be fetched.
    pub fn check(&self, raw: &str) -> Result<Url, ValidationError> {
        let reject = |why: &str| ValidationError::MalformedCertificateUrl(format!("{raw}: {why}"));

        let url = Url::parse(raw).map_err(|e| reject(&e.to_string()))?;

        if url.scheme() != "https" {
            return Err(reject("scheme must be https"));
        }

        let host = url.host_str().ok_or_else(|| reject("no host"))?;
        if !self.host.is_match(host) {
            return Err(reject("host is not an SNS endpoint"));
        }
        if url.port().is_some() {
            return Err(reject("explicit port not allowed"));
        }

        if url.query().is_some() || !url.path().ends_with(".pem") {
            return Err(reject("path must end with .pem"));
        }

        Ok(url)
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.check(raw).is_ok()
    }
}

impl Default for CertUrlAuthenticator {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST_REGEX.clone(),
        }
    }
}
