//! Merchant configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::subscription::{ConfigurationError, MerchantCredential};

/// Merchant identity (PayFast)
#[derive(Debug, Clone, Deserialize)]
pub struct MerchantConfig {
    /// Merchant ID issued by the gateway
    #[serde(default)]
    pub merchant_id: String,

    /// Shared passphrase set in the merchant dashboard
    #[serde(default = "empty_secret")]
    pub passphrase: SecretString,

    /// Use the sandbox environment
    #[serde(default)]
    pub sandbox: bool,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

impl MerchantConfig {
    /// Build the credential used by the client and the ITN validator
    pub fn credential(&self) -> Result<MerchantCredential, ConfigurationError> {
        MerchantCredential::from_secret(&self.merchant_id, self.passphrase.clone(), self.sandbox)
    }

    /// Validate merchant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("MERCHANT_ID"));
        }
        if self.passphrase.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("PASSPHRASE"));
        }
        Ok(())
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            merchant_id: String::new(),
            passphrase: empty_secret(),
            sandbox: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(merchant_id: &str, passphrase: &str) -> MerchantConfig {
        MerchantConfig {
            merchant_id: merchant_id.to_string(),
            passphrase: SecretString::new(passphrase.to_string()),
            sandbox: true,
        }
    }

    #[test]
    fn test_validate_complete() {
        assert!(config("10000100", "jt7NOE43FZPn").validate().is_ok());
    }

    #[test]
    fn test_validate_missing_merchant_id() {
        assert_eq!(
            config(" ", "jt7NOE43FZPn").validate(),
            Err(ValidationError::MissingRequired("MERCHANT_ID"))
        );
    }

    #[test]
    fn test_validate_missing_passphrase() {
        assert_eq!(
            config("10000100", "").validate(),
            Err(ValidationError::MissingRequired("PASSPHRASE"))
        );
    }

    #[test]
    fn test_credential_carries_sandbox_flag() {
        let credential = config("10000100", "jt7NOE43FZPn").credential().unwrap();
        assert_eq!(credential.merchant_id(), "10000100");
        assert!(credential.is_sandbox());
    }

    #[test]
    fn test_debug_redacts_passphrase() {
        let debug = format!("{:?}", config("10000100", "jt7NOE43FZPn"));
        assert!(!debug.contains("jt7NOE43FZPn"));
    }
}
