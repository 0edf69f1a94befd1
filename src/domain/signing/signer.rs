//! Authentication headers for subscription management calls.
//!
//! Every call carries `merchant-id`, `version`, `timestamp` and `signature`.
//! The signature is an MD5 hex digest over the sorted set of
//! `{merchant-id, passphrase, version, timestamp} ∪ body field names`.
//!
//! # Schemes
//!
//! - [`SignatureScheme::KeyValuePairs`] hashes `k1=v1&k2=v2...` over the sorted
//!   set. Values (including the timestamp) are bound into the digest.
//! - [`SignatureScheme::KeyNames`] hashes only the sorted key names joined by
//!   `,`. This matches older clients byte for byte, but the digest does not
//!   depend on any value: it is identical for every call with the same body
//!   shape and offers no replay or tamper protection. Only use it when talking
//!   to a peer that expects it.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::encoding::{join_pairs, md5_hex};
use crate::domain::subscription::MerchantCredential;

/// API version sent with every management call.
pub const API_VERSION: &str = "v1";

pub const HEADER_MERCHANT_ID: &str = "merchant-id";
pub const HEADER_VERSION: &str = "version";
pub const HEADER_TIMESTAMP: &str = "timestamp";
pub const HEADER_SIGNATURE: &str = "signature";

const PASSPHRASE_FIELD: &str = "passphrase";

/// How the request signature is derived from the signing field set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureScheme {
    #[default]
    KeyValuePairs,
    KeyNames,
}

/// Header set attached to an outbound management call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub merchant_id: String,
    pub version: String,
    pub timestamp: String,
    pub signature: String,
}

impl RequestHeaders {
    /// Headers as `(name, value)` pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            (HEADER_MERCHANT_ID.to_string(), self.merchant_id.clone()),
            (HEADER_VERSION.to_string(), self.version.clone()),
            (HEADER_TIMESTAMP.to_string(), self.timestamp.clone()),
            (HEADER_SIGNATURE.to_string(), self.signature.clone()),
        ]
    }
}

/// Builds signed header sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSigner {
    scheme: SignatureScheme,
}

impl RequestSigner {
    pub fn new(scheme: SignatureScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Builds headers stamped with the current time.
    pub fn build_headers(
        &self,
        credential: &MerchantCredential,
        body_fields: &[(&str, String)],
    ) -> RequestHeaders {
        self.build_headers_at(credential, body_fields, Utc::now())
    }

    /// Builds headers stamped with `at`.
    pub fn build_headers_at(
        &self,
        credential: &MerchantCredential,
        body_fields: &[(&str, String)],
        at: DateTime<Utc>,
    ) -> RequestHeaders {
        let timestamp = format_timestamp(at);

        let signature = {
            // Body fields go in first so the fixed fields win on a name clash.
            let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
            for (name, value) in body_fields {
                fields.insert(*name, value.as_str());
            }
            fields.insert(HEADER_MERCHANT_ID, credential.merchant_id());
            fields.insert(PASSPHRASE_FIELD, credential.passphrase().expose_secret());
            fields.insert(HEADER_VERSION, API_VERSION);
            fields.insert(HEADER_TIMESTAMP, &timestamp);

            match self.scheme {
                SignatureScheme::KeyValuePairs => {
                    md5_hex(&join_pairs(fields.iter().map(|(name, value)| (*name, *value))))
                }
                SignatureScheme::KeyNames => {
                    md5_hex(&fields.keys().copied().collect::<Vec<_>>().join(","))
                }
            }
        };

        RequestHeaders {
            merchant_id: credential.merchant_id().to_string(),
            version: API_VERSION.to_string(),
            timestamp,
            signature,
        }
    }
}

/// ISO-8601 UTC with second precision, e.g. `2026-10-17T09:30:00Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
