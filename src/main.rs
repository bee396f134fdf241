// SPDX-License-Identifier: EUPL-1.2

//! SNS Verifier — webhook endpoint for Amazon SNS HTTP(S) subscriptions.
//!
//! Every delivery is signature-checked before it is acknowledged.
//!
//! ## Endpoints
//!
//! - `GET  /health` — Health check
//! - `POST /sns`    — Receive and verify an SNS message

use sns_verifier::{config::Config, router, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sns_verifier=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("SNS Verifier listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
