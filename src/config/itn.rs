//! ITN validation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::handlers::itn::ItnValidatorConfig;
use crate::domain::itn::DEFAULT_VALID_HOSTS;

/// ITN validation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ItnConfig {
    /// Per-host DNS lookup timeout in milliseconds
    #[serde(default = "default_dns_timeout")]
    pub dns_timeout_ms: u64,

    /// Server confirmation timeout in milliseconds
    #[serde(default = "default_confirmation_timeout")]
    pub confirmation_timeout_ms: u64,

    /// Allow-listed gateway hosts (comma-separated)
    pub valid_hosts: Option<String>,

    /// Confirmation base URL override
    pub validate_base_url: Option<String>,
}

impl ItnConfig {
    /// Get allow-listed hosts, falling back to the gateway defaults
    pub fn valid_hosts_list(&self) -> Vec<String> {
        match &self.valid_hosts {
            Some(hosts) => hosts
                .split(',')
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
            None => DEFAULT_VALID_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_millis(self.confirmation_timeout_ms)
    }

    /// Convert into validator settings
    pub fn validator_config(&self) -> ItnValidatorConfig {
        ItnValidatorConfig {
            valid_hosts: self.valid_hosts_list(),
            dns_timeout: self.dns_timeout(),
            confirmation_timeout: self.confirmation_timeout(),
            confirmation_base_url: self.validate_base_url.clone(),
        }
    }

    /// Validate ITN configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dns_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout("DNS_TIMEOUT_MS"));
        }
        if self.confirmation_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout("CONFIRMATION_TIMEOUT_MS"));
        }
        if self.valid_hosts_list().is_empty() {
            return Err(ValidationError::NoValidHosts);
        }
        if let Some(url) = &self.validate_base_url {
            if url::Url::parse(url).is_err() {
                return Err(ValidationError::InvalidBaseUrl("VALIDATE_BASE_URL"));
            }
        }
        Ok(())
    }
}

impl Default for ItnConfig {
    fn default() -> Self {
        Self {
            dns_timeout_ms: default_dns_timeout(),
            confirmation_timeout_ms: default_confirmation_timeout(),
            valid_hosts: None,
            validate_base_url: None,
        }
    }
}

fn default_dns_timeout() -> u64 {
    2000
}

fn default_confirmation_timeout() -> u64 {
    5000
}
