//! Subscription domain module.
//!
//! Value objects for merchant identity and the lifecycle request/response
//! bodies of the recurring billing API.
//!
//! # Module Structure
//!
//! - `credential` - MerchantCredential (merchant id, passphrase, sandbox flag)
//! - `update` - SubscriptionUpdate, PauseRequest, Frequency
//! - `details` - SubscriptionDetails decoded from the fetch call
//! - `errors` - ConfigurationError, SubscriptionError

mod credential;
mod details;
mod errors;
mod update;

pub use credential::{MerchantCredential, PRODUCTION_HOST, SANDBOX_HOST};
pub use details::{SubscriptionDetails, SubscriptionState};
pub(crate) use details::FetchEnvelope;
pub use errors::{ConfigurationError, SubscriptionError};
pub use update::{Frequency, PauseRequest, SubscriptionUpdate};
