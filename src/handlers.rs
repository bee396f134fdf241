// SPDX-License-Identifier: EUPL-1.2

//! Axum route handlers for the SNS Verifier.
//!
//! ## Endpoints
//!
//! - `GET  /health` — Health check
//! - `POST /sns`    — Receive and verify an SNS HTTP(S) delivery

use crate::{
    error::WebhookError,
    models::{AcceptedResponse, Message, MessageType},
    normalize::normalize,
    state::AppState,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

// ── Health ────────────────────────────────────────────────────────────────────

/// `GET /health` — Health check
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "sns-verifier",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ── Receive ───────────────────────────────────────────────────────────────────

/// `POST /sns` — Verify an SNS message.
///
/// SNS posts JSON with `Content-Type: text/plain`, so the body is read as a
/// string and parsed here rather than through the `Json` extractor.
/// Subscription confirmations are verified but not confirmed: the
/// `subscribe_url` in the response is for the operator.
pub async fn receive_message(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<AcceptedResponse>, WebhookError> {
    let value: Value = serde_json::from_str(&body)
        .map_err(|e| WebhookError::Validation(format!("body is not JSON: {e}")))?;
    let message = normalize(&Message::try_from(value).map_err(WebhookError::Validation)?);

    if !state.verifier.validate(&message).await? {
        tracing::warn!(
            "Signature mismatch for message {} on {}",
            message.get("MessageId").unwrap_or("<none>"),
            message.get("TopicArn").unwrap_or("<none>"),
        );
        return Err(WebhookError::Rejected("signature does not match".into()));
    }

    // Both are signed fields, so present once validation succeeded.
    let topic_arn = message.get("TopicArn").unwrap_or_default().to_string();
    let message_id = message.get("MessageId").unwrap_or_default().to_string();

    if !state.topic_allowed(&topic_arn) {
        tracing::warn!("Message {message_id} from unexpected topic {topic_arn}");
        return Err(WebhookError::Rejected(format!("topic {topic_arn} is not accepted")));
    }

    let message_type = message.message_type().unwrap_or(MessageType::Notification);
    let subscribe_url = match message_type {
        MessageType::SubscriptionConfirmation => message.get("SubscribeURL").map(String::from),
        _ => None,
    };

    tracing::info!(
        "Verified {} {} from {}",
        message_type.as_str(),
        message_id,
        topic_arn
    );

    Ok(Json(AcceptedResponse {
        verified: true,
        message_type: message_type.as_str().to_string(),
        message_id,
        topic_arn,
        subscribe_url,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
