// SPDX-License-Identifier: EUPL-1.2

//! Legacy field names.
//!
//! Older SNS deliveries (and some Lambda event shapes) spell a few URL fields
//! with `Url` instead of `URL`. They are rewritten to the canonical spelling
//! before anything else looks at the message.

use crate::models::Message;

/// Legacy name → canonical name.
pub const LEGACY_FIELDS: [(&str, &str); 3] = [
    ("SigningCertUrl", "SigningCertURL"),
    ("SubscribeUrl", "SubscribeURL"),
    ("UnsubscribeUrl", "UnsubscribeURL"),
];

/// Canonical spelling of `field`; unknown names are returned unchanged.
pub fn canonical_name(field: &str) -> &str {
    LEGACY_FIELDS
        .iter()
        .find(|(legacy, _)| *legacy == field)
        .map_or(field, |&(_, canonical)| canonical)
}

/// Rewrite legacy field names, keeping values and every other field as is.
///
/// If a message carries both spellings, the canonical one wins.
pub fn normalize(message: &Message) -> Message {
    message
        .iter()
        .filter(|(field, _)| {
            let name = canonical_name(field);
            name == *field || !message.contains(name)
        })
        .map(|(field, value)| (canonical_name(field), value))
        .collect()
}
