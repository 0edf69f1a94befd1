//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `dns` - Host resolution (tokio system resolver, static table for tests)
//! - `payfast` - PayFast subscription management API
//! - `transport` - Outbound HTTP (reqwest, scripted mock for tests)

pub mod dns;
pub mod payfast;
pub mod transport;

pub use dns::{StaticHostResolver, TokioHostResolver};
pub use payfast::{PayfastSubscriptionClient, DEFAULT_API_BASE_URL};
pub use transport::{MockTransport, ReqwestTransport, DEFAULT_REQUEST_TIMEOUT};
