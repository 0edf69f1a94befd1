//! PayFast adapters.
//!
//! - `subscription_client` - `SubscriptionGateway` over the management API
//!
//! # Security
//!
//! - The merchant passphrase is held as `secrecy::SecretString` and only
//!   exposed to the MD5 signing routine; it is never sent or logged.
//! - Request signatures default to the value-bound scheme. See
//!   [`SignatureScheme`](crate::domain::signing::SignatureScheme) for the
//!   names-only compatibility scheme and its weakness.

mod subscription_client;

pub use subscription_client::{PayfastSubscriptionClient, DEFAULT_API_BASE_URL};
