//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `subscription` - Merchant credential, lifecycle request bodies, subscription details
//! - `signing` - Canonical encoding and management request signatures
//! - `itn` - Instant Transaction Notification payloads and the pure validation checks

pub mod itn;
pub mod signing;
pub mod subscription;
