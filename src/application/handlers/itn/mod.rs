//! ITN (Instant Transaction Notification) handlers.

mod validate_notification;

pub use validate_notification::{ItnValidator, ItnValidatorConfig};
