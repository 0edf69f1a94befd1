//! Application handlers.
//!
//! - `itn` - Inbound notification validation

pub mod itn;
