// SPDX-License-Identifier: EUPL-1.2

//! RSA-SHA1 signature verification for SNS messages.
//!
//! SNS signs the canonical string (see [`crate::canonical`]) with the private
//! key behind its signing certificate and sends the signature base64-encoded
//! in the `Signature` field. Only the certificate's public key is used here:
//! no chain, expiry, or revocation checks.

use crate::error::ValidationError;
use base64::{engine::general_purpose::STANDARD, Engine};
use openssl::{hash::MessageDigest, pkey::Id, sign::Verifier, x509::X509};

/// Verify an RSA-SHA1 signature over `message`.
///
/// - `certificate_pem` — PEM-encoded X.509 signing certificate
/// - `message`         — the canonical string that was signed
/// - `signature_b64`   — standard base64 signature from the `Signature` field
///
/// Returns `Ok(false)` when everything decodes but the signature does not match.
pub fn verify_signature(
    certificate_pem: &[u8],
    message: &str,
    signature_b64: &str,
) -> Result<bool, ValidationError> {
    let malformed = ValidationError::MalformedCertificateOrSignature;

    // Decode certificate
    let certificate =
        X509::from_pem(certificate_pem).map_err(|e| malformed(format!("bad certificate: {e}")))?;

    let public_key = certificate
        .public_key()
        .map_err(|e| malformed(format!("unusable public key: {e}")))?;

    if public_key.id() != Id::RSA {
        return Err(malformed(format!(
            "certificate key is {:?}, expected RSA",
            public_key.id()
        )));
    }

    // Decode signature
    let signature = STANDARD
        .decode(signature_b64)
        .map_err(|e| malformed(format!("bad signature encoding: {e}")))?;

    // Verify
    let mut verifier = Verifier::new(MessageDigest::sha1(), &public_key)
        .map_err(|e| malformed(format!("verifier setup failed: {e}")))?;
    verifier
        .update(message.as_bytes())
        .map_err(|e| malformed(format!("digest failed: {e}")))?;
    verifier
        .verify(&signature)
        .map_err(|e| malformed(format!("signature could not be checked: {e}")))
}
