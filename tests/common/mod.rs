// SPDX-License-Identifier: EUPL-1.2

//! Shared fixtures for the webhook integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use openssl::{
    asn1::Asn1Time,
    bn::BigNum,
    hash::MessageDigest,
    pkey::{PKey, Private},
    rsa::Rsa,
    sign::Signer,
    x509::{X509Builder, X509NameBuilder},
};
use serde_json::{json, Value};
use sns_verifier::{
    canonical, router, AppState, CertUrlAuthenticator, CertificateFetcher, FetchError, Message,
    SignatureVerifier,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

pub const CERT_URL: &str = "https://sns.eu-west-1.amazonaws.com/SimpleNotificationService-it.pem";
pub const TOPIC_ARN: &str = "arn:aws:sns:eu-west-1:123456789012:webhook-it";

/// Stand-in for the SNS signing key and its certificate.
pub struct Sns {
    key: PKey<Private>,
    pub certificate_pem: Vec<u8>,
}

impl Sns {
    pub fn new() -> Self {
        let key = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "sns.amazonaws.com").unwrap();
        let name = name.build();

        let mut cert = X509Builder::new().unwrap();
        cert.set_version(2).unwrap();
        cert.set_serial_number(&BigNum::from_u32(7).unwrap().to_asn1_integer().unwrap())
            .unwrap();
        cert.set_subject_name(&name).unwrap();
        cert.set_issuer_name(&name).unwrap();
        cert.set_pubkey(&key).unwrap();
        cert.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
        cert.set_not_after(&Asn1Time::days_from_now(30).unwrap()).unwrap();
        cert.sign(&key, MessageDigest::sha256()).unwrap();

        Self {
            key,
            certificate_pem: cert.build().to_pem().unwrap(),
        }
    }

    /// Add `SigningCertURL`, `SignatureVersion` and `Signature` to `fields`.
    pub fn sign(&self, mut fields: Value) -> Value {
        fields["SigningCertURL"] = json!(CERT_URL);
        fields["SignatureVersion"] = json!("1");

        let message = Message::try_from(fields.clone()).unwrap();
        let string_to_sign = canonical::string_to_sign(&message).unwrap();

        let mut signer = Signer::new(MessageDigest::sha1(), &self.key).unwrap();
        signer.update(string_to_sign.as_bytes()).unwrap();
        fields["Signature"] = json!(STANDARD.encode(signer.sign_to_vec().unwrap()));
        fields
    }

    pub fn notification(&self, body: &str) -> Value {
        self.sign(json!({
            "Type": "Notification",
            "MessageId": "da41e39f-ea4d-435a-b922-c6aae3915ebe",
            "TopicArn": TOPIC_ARN,
            "Subject": "test",
            "Message": body,
            "Timestamp": "2024-03-01T12:00:00.000Z",
            "UnsubscribeURL": "https://sns.eu-west-1.amazonaws.com/?Action=Unsubscribe",
            "MessageAttributes": { "env": { "Type": "String", "Value": "it" } },
        }))
    }

    pub fn subscription_confirmation(&self) -> Value {
        self.sign(json!({
            "Type": "SubscriptionConfirmation",
            "MessageId": "165545c9-2a5c-472c-8df2-7ff2be2b3b1b",
            "Token": "2336412f37fb687f5d51e6e241d09c805a5a57b30d712f794cc5f6a988666d92768dd60a747ba6f3beb71854e285d6ad02428b09ceece29417f1f02d609c582afbacc99c583a916b9981dd2728f4ae6fdb82efd087cc3b7849e05798d2d2785c03b0879594eeac82c01f235d0e717736",
            "TopicArn": TOPIC_ARN,
            "Message": "You have chosen to subscribe to the topic. To confirm the subscription, visit the SubscribeURL included in this message.",
            "SubscribeURL": "https://sns.eu-west-1.amazonaws.com/?Action=ConfirmSubscription&TopicArn=arn:aws:sns:eu-west-1:123456789012:webhook-it&Token=2336412f37fb",
            "Timestamp": "2024-03-01T11:59:00.000Z",
        }))
    }
}

/// Serves one certificate at [`CERT_URL`] and counts fetches.
pub struct OneCertificate {
    pem: Vec<u8>,
    pub calls: AtomicUsize,
}

impl OneCertificate {
    pub fn new(pem: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            pem,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CertificateFetcher for OneCertificate {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url == CERT_URL {
            Ok(self.pem.clone())
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}

pub fn app(fetcher: Arc<OneCertificate>, allowed_topics: Option<Vec<String>>) -> axum::Router {
    let verifier = SignatureVerifier::new(CertUrlAuthenticator::default(), fetcher);
    router(Arc::new(AppState::new(verifier, allowed_topics)))
}
