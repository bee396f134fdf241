// SPDX-License-Identifier: EUPL-1.2

//! The string SNS signs.
//!
//! ## Format
//!
//! For each mandatory field, in the fixed order below (not message order):
//!
//! ```text
//! <FieldName>\n<FieldValue>\n
//! ```
//!
//! Notifications sign `Message, MessageId, Subject, Timestamp, TopicArn, Type`.
//! Subscription and unsubscribe confirmations sign
//! `Message, MessageId, SubscribeURL, Timestamp, Token, TopicArn, Type`.

use crate::{
    error::ValidationError,
    models::{Message, MessageType},
};

pub const NOTIFICATION_FIELDS: [&str; 6] = [
    "Message",
    "MessageId",
    "Subject",
    "Timestamp",
    "TopicArn",
    "Type",
];

pub const CONFIRMATION_FIELDS: [&str; 7] = [
    "Message",
    "MessageId",
    "SubscribeURL",
    "Timestamp",
    "Token",
    "TopicArn",
    "Type",
];

/// Signed fields for a message type. Anything that is not a notification is
/// signed like a subscription confirmation.
pub fn mandatory_fields(message_type: &MessageType) -> &'static [&'static str] {
    match message_type {
        MessageType::Notification => &NOTIFICATION_FIELDS,
        _ => &CONFIRMATION_FIELDS,
    }
}

/// Build the canonical string for an already-normalized message.
pub fn string_to_sign(message: &Message) -> Result<String, ValidationError> {
    let message_type = message
        .message_type()
        .ok_or(ValidationError::MissingMandatoryField("Type"))?;

    let mut out = String::new();
    for &field in mandatory_fields(&message_type) {
        let value = message
            .get(field)
            .ok_or(ValidationError::MissingMandatoryField(field))?;
        out.push_str(field);
        out.push('\n');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}
