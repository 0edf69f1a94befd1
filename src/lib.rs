//! PayFast subscription client and ITN validation.
//!
//! - [`domain::signing`] builds the signed headers every management call carries.
//! - [`adapters::payfast::PayfastSubscriptionClient`] cancels, pauses, unpauses,
//!   updates and fetches subscriptions.
//! - [`application::handlers::itn::ItnValidator`] decides whether an inbound
//!   Instant Transaction Notification can be trusted.
//!
//! # Request signatures
//!
//! The default [`SignatureScheme::KeyValuePairs`](domain::signing::SignatureScheme)
//! signs every field name *and value*, timestamp included. This differs from
//! the legacy PayFast client, whose signature is an MD5 of the sorted field
//! names only. Select [`SignatureScheme::KeyNames`](domain::signing::SignatureScheme)
//! (`PAYFAST__API__SIGNATURE_SCHEME=key_names`) to reproduce that digest
//! byte-for-byte where the gateway expects it. It binds neither values nor
//! the timestamp.
//!
//! I/O goes through the ports in [`ports`], so every component can be driven
//! with the mock adapters in tests.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
