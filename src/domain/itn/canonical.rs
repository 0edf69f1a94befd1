//! Canonical parameter string and signature check.
//!
//! The canonical string is `key=value&...` over every field except
//! `signature`, in receipt order, with values trimmed and encoded by
//! [`encode_value`]. The signature is the MD5 hex digest of the canonical
//! string followed by `&passphrase=<encoded passphrase>`.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use super::errors::ValidationError;
use super::payload::{NotificationPayload, SIGNATURE_FIELD};
use crate::domain::signing::{encode_value, join_pairs, md5_hex};

/// Builds the canonical parameter string of `payload`.
pub fn canonical_string(payload: &NotificationPayload) -> String {
    join_pairs(payload.iter().filter(|(key, _)| *key != SIGNATURE_FIELD))
}

/// Computes the expected signature for a canonical string.
pub fn expected_signature(canonical: &str, passphrase: &SecretString) -> String {
    let signed = format!(
        "{}&passphrase={}",
        canonical,
        encode_value(passphrase.expose_secret().trim())
    );
    md5_hex(&signed)
}

/// Verifies the payload's `signature` field against `canonical`.
///
/// Comparison is exact (case-sensitive hex) and constant-time.
pub fn verify_signature(
    payload: &NotificationPayload,
    canonical: &str,
    passphrase: &SecretString,
) -> Result<(), ValidationError> {
    let provided = payload
        .signature()
        .ok_or(ValidationError::MissingSignature)?;
    let expected = expected_signature(canonical, passphrase);

    if constant_time_compare(expected.as_bytes(), provided.as_bytes()) {
        Ok(())
    } else {
        Err(ValidationError::SignatureMismatch)
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
