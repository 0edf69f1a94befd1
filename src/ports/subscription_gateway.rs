//! Subscription gateway port.
//!
//! Lifecycle operations on an existing recurring-billing subscription,
//! identified by the token the gateway issued when it was created.

use async_trait::async_trait;

use crate::domain::subscription::{SubscriptionDetails, SubscriptionError, SubscriptionUpdate};

/// Port for subscription lifecycle management.
///
/// Every operation rejects a blank token with
/// `ConfigurationError::MissingSubscriptionToken` before any network call.
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    /// Cancels the subscription.
    async fn cancel(&self, token: &str) -> Result<(), SubscriptionError>;

    /// Pauses billing for `cycles` cycles (one when `None`).
    async fn pause(&self, token: &str, cycles: Option<u32>) -> Result<(), SubscriptionError>;

    /// Resumes a paused subscription.
    async fn unpause(&self, token: &str) -> Result<(), SubscriptionError>;

    /// Applies a partial update.
    async fn update(&self, token: &str, update: &SubscriptionUpdate)
        -> Result<(), SubscriptionError>;

    /// Fetches the current subscription record.
    async fn fetch(&self, token: &str) -> Result<SubscriptionDetails, SubscriptionError>;
}
