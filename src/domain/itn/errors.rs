//! ITN check failures.
//!
//! These describe *why* a notification was not trusted. They are for operator
//! diagnostics only: the public [`ValidationResult`](super::ValidationResult)
//! never carries them, so a caller probing the endpoint learns nothing about
//! which check tripped.

use std::net::IpAddr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Reason a single ITN check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload had no `signature` field.
    #[error("Missing signature")]
    MissingSignature,

    /// The computed digest did not match the payload's `signature` field.
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Neither a forwarded-for header nor a peer address yielded an IP.
    #[error("Missing source IP")]
    MissingSourceIp,

    /// No allow-list host could be resolved.
    #[error("Allow-list is empty")]
    EmptyAllowList,

    /// The source IP is not one of the gateway's addresses.
    #[error("Untrusted source IP: {ip}")]
    UntrustedSource { ip: IpAddr },

    /// An amount could not be parsed as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The paid amount differs from the expected cart total.
    #[error("Amount mismatch: expected {expected}, received {received}")]
    AmountMismatch { expected: Decimal, received: Decimal },

    /// The gateway answered the confirmation query with something other than `VALID`.
    #[error("Server rejected notification")]
    ServerRejected,

    /// The confirmation query could not be completed.
    #[error("Confirmation unavailable: {0}")]
    ConfirmationUnavailable(String),
}

impl ValidationError {
    /// Short stable label for structured logs.
    pub fn check(&self) -> &'static str {
        match self {
            ValidationError::MissingSignature | ValidationError::SignatureMismatch => "signature",
            ValidationError::MissingSourceIp
            | ValidationError::EmptyAllowList
            | ValidationError::UntrustedSource { .. } => "source_ip",
            ValidationError::InvalidAmount(_) | ValidationError::AmountMismatch { .. } => "amount",
            ValidationError::ServerRejected | ValidationError::ConfirmationUnavailable(_) => {
                "server_confirmation"
            }
        }
    }
}
