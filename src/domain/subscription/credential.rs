//! Merchant credential value object.
//!
//! Holds the merchant identity used to sign every outbound management call
//! and to verify inbound notifications. The passphrase is wrapped in
//! `secrecy::SecretString` so it is redacted from `Debug` output and is only
//! reachable through `expose_secret()` at the hashing sites.

use secrecy::{ExposeSecret, SecretString};

use super::errors::ConfigurationError;

/// Host used for production notifications and server confirmation.
pub const PRODUCTION_HOST: &str = "www.payfast.co.za";

/// Host used for sandbox notifications and server confirmation.
pub const SANDBOX_HOST: &str = "sandbox.payfast.co.za";

/// Merchant identity and shared secret.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct MerchantCredential {
    merchant_id: String,
    passphrase: SecretString,
    sandbox: bool,
}

impl MerchantCredential {
    /// Creates a credential, rejecting blank identifiers.
    ///
    /// # Errors
    ///
    /// - `MissingMerchantId` if `merchant_id` is blank
    /// - `MissingPassphrase` if `passphrase` is blank
    pub fn new(
        merchant_id: impl Into<String>,
        passphrase: impl Into<String>,
        sandbox: bool,
    ) -> Result<Self, ConfigurationError> {
        Self::from_secret(merchant_id, SecretString::new(passphrase.into()), sandbox)
    }

    /// Creates a credential from an already-wrapped passphrase.
    pub fn from_secret(
        merchant_id: impl Into<String>,
        passphrase: SecretString,
        sandbox: bool,
    ) -> Result<Self, ConfigurationError> {
        let merchant_id = merchant_id.into();
        if merchant_id.trim().is_empty() {
            return Err(ConfigurationError::MissingMerchantId);
        }
        if passphrase.expose_secret().trim().is_empty() {
            return Err(ConfigurationError::MissingPassphrase);
        }

        Ok(Self {
            merchant_id,
            passphrase,
            sandbox,
        })
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub(crate) fn passphrase(&self) -> &SecretString {
        &self.passphrase
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Gateway host that sends notifications and answers confirmation queries.
    pub fn gateway_host(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_HOST
        } else {
            PRODUCTION_HOST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_credential() {
        let credential = MerchantCredential::new("10000100", "jt7NOE43FZPn", false).unwrap();
        assert_eq!(credential.merchant_id(), "10000100");
        assert!(!credential.is_sandbox());
    }

    #[test]
    fn new_rejects_blank_merchant_id() {
        let result = MerchantCredential::new("   ", "secret", false);
        assert_eq!(result.unwrap_err(), ConfigurationError::MissingMerchantId);
    }

    #[test]
    fn new_rejects_empty_passphrase() {
        let result = MerchantCredential::new("10000100", "", true);
        assert_eq!(result.unwrap_err(), ConfigurationError::MissingPassphrase);
    }

    #[test]
    fn debug_output_redacts_passphrase() {
        let credential = MerchantCredential::new("10000100", "super-secret-phrase", false).unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("super-secret-phrase"));
        assert!(debug.contains("10000100"));
    }

    #[test]
    fn gateway_host_follows_sandbox_flag() {
        let live = MerchantCredential::new("1", "p", false).unwrap();
        let sandbox = MerchantCredential::new("1", "p", true).unwrap();
        assert_eq!(live.gateway_host(), "www.payfast.co.za");
        assert_eq!(sandbox.gateway_host(), "sandbox.payfast.co.za");
    }
}
