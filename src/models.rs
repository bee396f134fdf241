// SPDX-License-Identifier: EUPL-1.2

//! Domain models for the SNS Verifier.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A received SNS message: field name to field value.
///
/// Only string-valued fields take part in signing, so non-string JSON values
/// (e.g. `MessageAttributes`) are dropped when building from a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Message(BTreeMap<String, String>);

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `Type` field, if present.
    pub fn message_type(&self) -> Option<MessageType> {
        self.get("Type").map(MessageType::parse)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Message {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<Value> for Message {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(fields
                .into_iter()
                .filter_map(|(k, v)| match v {
                    Value::String(s) => Some((k, s)),
                    _ => None,
                })
                .collect()),
            other => Err(format!("message body must be a JSON object, got {other}")),
        }
    }
}

/// Value of the `Type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageType {
    Notification,
    SubscriptionConfirmation,
    UnsubscribeConfirmation,
    Other(String),
}

impl MessageType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Notification" => MessageType::Notification,
            "SubscriptionConfirmation" => MessageType::SubscriptionConfirmation,
            "UnsubscribeConfirmation" => MessageType::UnsubscribeConfirmation,
            other => MessageType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Notification => "Notification",
            MessageType::SubscriptionConfirmation => "SubscriptionConfirmation",
            MessageType::UnsubscribeConfirmation => "UnsubscribeConfirmation",
            MessageType::Other(s) => s,
        }
    }
}

/// Response for an accepted `POST /sns`.
#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    pub verified: bool,
    #[serde(rename = "type")]
    pub message_type: String,
    pub message_id: String,
    pub topic_arn: String,
    /// Present for `SubscriptionConfirmation`: visit it to confirm the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe_url: Option<String>,
}
