//! Application layer - Handlers that orchestrate domain checks over ports.

pub mod handlers;

pub use handlers::itn::{ItnValidator, ItnValidatorConfig};
