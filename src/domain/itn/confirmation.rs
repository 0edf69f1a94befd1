//! Server-side confirmation query.
//!
//! The canonical parameter string (without the passphrase) is posted back to
//! the gateway, which answers with the literal `VALID` for notifications it
//! sent.

use super::errors::ValidationError;

pub const CONFIRMATION_PATH: &str = "/eng/query/validate";

pub const CONFIRMATION_TOKEN: &str = "VALID";

/// Full confirmation URL for a gateway base such as `https://www.payfast.co.za`.
pub fn confirmation_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONFIRMATION_PATH)
}

/// Default confirmation base for a gateway host.
pub fn confirmation_base_url(host: &str) -> String {
    format!("https://{}", host)
}

/// Interprets the gateway's answer.
pub fn interpret_confirmation(body: &str) -> Result<(), ValidationError> {
    if body.trim() == CONFIRMATION_TOKEN {
        Ok(())
    } else {
        Err(ValidationError::ServerRejected)
    }
}
