//! Subscription client error types.
//!
//! Configuration problems are detected before any network activity and are
//! never retried. Transport problems are passed through to the caller as-is.
//!
//! | Error | Raised |
//! |-------|--------|
//! | Configuration | before any request is built |
//! | Transport | by the `HttpTransport` adapter |
//! | Encode | while serializing a request body |

use thiserror::Error;

use crate::ports::TransportError;

/// Caller-side configuration mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The merchant id was empty or whitespace.
    #[error("Merchant id is required")]
    MissingMerchantId,

    /// The merchant passphrase was empty or whitespace.
    #[error("Merchant passphrase is required")]
    MissingPassphrase,

    /// A lifecycle call was made without a subscription token.
    #[error("Subscription token is required")]
    MissingSubscriptionToken,

    /// An update request carried no fields to change.
    #[error("Subscription update has no fields set")]
    EmptyUpdate,
}

/// Errors returned by subscription lifecycle operations.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request body could not be serialized. Nothing was sent.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl SubscriptionError {
    /// Returns true if the same call may succeed when repeated later.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubscriptionError::Configuration(_) | SubscriptionError::Encode(_) => false,
            SubscriptionError::Transport(err) => err.is_retryable(),
        }
    }
}
