//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYFAST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use payfast_subscriptions::config::PayfastConfig;
//!
//! let config = PayfastConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let credential = config.credential().expect("Invalid merchant credential");
//! println!("Merchant {} (sandbox: {})", credential.merchant_id(), credential.is_sandbox());
//! ```

mod api;
mod error;
mod itn;
mod logging;
mod merchant;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use itn::ItnConfig;
pub use logging::LoggingConfig;
pub use merchant::MerchantConfig;

use std::sync::Arc;

use serde::Deserialize;

use crate::adapters::dns::TokioHostResolver;
use crate::adapters::payfast::PayfastSubscriptionClient;
use crate::adapters::transport::ReqwestTransport;
use crate::application::handlers::itn::ItnValidator;
use crate::domain::subscription::{ConfigurationError, MerchantCredential, SubscriptionError};

/// Root configuration
///
/// Load using [`PayfastConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayfastConfig {
    /// Merchant identity and passphrase
    #[serde(default)]
    pub merchant: MerchantConfig,

    /// Subscription management API
    #[serde(default)]
    pub api: ApiConfig,

    /// ITN validation
    #[serde(default)]
    pub itn: ItnConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PayfastConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYFAST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYFAST__MERCHANT__MERCHANT_ID=10000100` -> `merchant.merchant_id = "10000100"`
    /// - `PAYFAST__ITN__DNS_TIMEOUT_MS=1500` -> `itn.dns_timeout_ms = 1500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing merchant values are reported by [`validate`](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYFAST")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.merchant.validate()?;
        self.api.validate()?;
        self.itn.validate()?;
        Ok(())
    }

    /// Merchant credential for the client and the ITN validator
    pub fn credential(&self) -> Result<MerchantCredential, ConfigurationError> {
        self.merchant.credential()
    }

    /// Subscription client over `reqwest`, using every `api` setting
    pub fn subscription_client(&self) -> Result<PayfastSubscriptionClient, SubscriptionError> {
        let transport = ReqwestTransport::new(self.api.request_timeout())?;
        Ok(PayfastSubscriptionClient::from_config(
            &self.api,
            self.credential()?,
            Arc::new(transport),
        ))
    }

    /// ITN validator over the system resolver and `reqwest`
    pub fn itn_validator(&self) -> Result<ItnValidator, SubscriptionError> {
        let transport = ReqwestTransport::new(self.itn.confirmation_timeout())?;
        Ok(ItnValidator::with_config(
            self.credential()?,
            Arc::new(TokioHostResolver::new()),
            Arc::new(transport),
            self.itn.validator_config(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signing::SignatureScheme;
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 8] = [
        "PAYFAST__MERCHANT__MERCHANT_ID",
        "PAYFAST__MERCHANT__PASSPHRASE",
        "PAYFAST__MERCHANT__SANDBOX",
        "PAYFAST__API__SIGNATURE_SCHEME",
        "PAYFAST__API__REQUEST_TIMEOUT_SECS",
        "PAYFAST__ITN__DNS_TIMEOUT_MS",
        "PAYFAST__ITN__VALID_HOSTS",
        "PAYFAST__LOGGING__JSON",
    ];

    fn set_minimal_env() {
        env::set_var("PAYFAST__MERCHANT__MERCHANT_ID", "10000100");
        env::set_var("PAYFAST__MERCHANT__PASSPHRASE", "jt7NOE43FZPn");
        env::set_var("PAYFAST__MERCHANT__SANDBOX", "true");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = PayfastConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.merchant.merchant_id, "10000100");
        assert!(config.merchant.sandbox);
        assert_eq!(config.api.base_url, "https://api.payfast.co.za");
        assert_eq!(config.itn.dns_timeout(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PAYFAST__API__SIGNATURE_SCHEME", "key_names");
        env::set_var("PAYFAST__API__REQUEST_TIMEOUT_SECS", "10");
        env::set_var("PAYFAST__ITN__DNS_TIMEOUT_MS", "500");
        env::set_var("PAYFAST__ITN__VALID_HOSTS", "www.payfast.co.za,w1w.payfast.co.za");
        env::set_var("PAYFAST__LOGGING__JSON", "true");
        let result = PayfastConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.signature_scheme, SignatureScheme::KeyNames);
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.itn.dns_timeout_ms, 500);
        assert_eq!(config.itn.valid_hosts_list().len(), 2);
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_merchant_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = PayfastConfig::load_validated();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::MissingRequired("MERCHANT_ID")))
        ));
    }

    fn complete_config() -> PayfastConfig {
        PayfastConfig {
            merchant: MerchantConfig {
                merchant_id: "10000100".to_string(),
                passphrase: secrecy::SecretString::new("jt7NOE43FZPn".to_string()),
                sandbox: true,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_subscription_client_from_config() {
        let mut config = complete_config();
        config.api.signature_scheme = SignatureScheme::KeyNames;

        let client = config.subscription_client().unwrap();
        assert_eq!(client.credential().merchant_id(), "10000100");
        assert!(client.credential().is_sandbox());
    }

    #[test]
    fn test_itn_validator_from_config() {
        let mut config = complete_config();
        config.itn.dns_timeout_ms = 750;

        let validator = config.itn_validator().unwrap();
        assert_eq!(validator.config().dns_timeout, Duration::from_millis(750));
        assert_eq!(validator.config().valid_hosts.len(), 4);
    }

    #[test]
    fn test_builders_reject_missing_credential() {
        let config = PayfastConfig::default();

        assert!(matches!(
            config.subscription_client(),
            Err(SubscriptionError::Configuration(ConfigurationError::MissingMerchantId))
        ));
        assert!(config.itn_validator().is_err());
    }

    #[test]
    fn test_credential_from_config() {
        let config = PayfastConfig {
            merchant: MerchantConfig {
                merchant_id: "10000100".to_string(),
                passphrase: secrecy::SecretString::new("jt7NOE43FZPn".to_string()),
                sandbox: false,
            },
            ..Default::default()
        };

        let credential = config.credential().unwrap();
        assert_eq!(credential.gateway_host(), "www.payfast.co.za");
    }
}
