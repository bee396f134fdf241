// SPDX-License-Identifier: EUPL-1.2

//! Start-up configuration, read from the environment.
//!
//! | Variable                      | Default                    |
//! |-------------------------------|----------------------------|
//! | `LISTEN_ADDR`                 | `0.0.0.0:3100`             |
//! | `SNS_CERT_HOST_PATTERN`       | SNS regional hosts         |
//! | `SNS_CERT_FETCH_TIMEOUT_SECS` | `10`                       |
//! | `SNS_TOPIC_ARNS`              | unset (accept every topic) |

use crate::cert_url::CertUrlAuthenticator;
use anyhow::Context;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3100";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub authenticator: CertUrlAuthenticator,
    pub fetch_timeout: Duration,
    /// When `Some`, verified messages from any other topic are refused.
    pub allowed_topics: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());

        let authenticator = match lookup("SNS_CERT_HOST_PATTERN") {
            Some(pattern) => CertUrlAuthenticator::new(&pattern)
                .with_context(|| format!("SNS_CERT_HOST_PATTERN is not a valid regex: {pattern}"))?,
            None => CertUrlAuthenticator::default(),
        };

        let fetch_timeout = match lookup("SNS_CERT_FETCH_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("SNS_CERT_FETCH_TIMEOUT_SECS must be seconds: {secs}"))?,
            ),
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let allowed_topics = lookup("SNS_TOPIC_ARNS")
            .map(|arns| {
                arns.split(',')
                    .map(str::trim)
                    .filter(|arn| !arn.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|arns| !arns.is_empty());

        Ok(Self {
            listen_addr,
            authenticator,
            fetch_timeout,
            allowed_topics,
        })
    }
}
