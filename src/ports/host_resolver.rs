//! Host resolution port used to build the gateway allow-list.

use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

/// Port for forward DNS lookups.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to all of its current addresses.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Lookup of {host} failed: {message}")]
    Lookup { host: String, message: String },

    #[error("Lookup of {host} timed out")]
    Timeout { host: String },
}

impl ResolveError {
    pub fn lookup(host: &str, message: impl Into<String>) -> Self {
        ResolveError::Lookup {
            host: host.to_string(),
            message: message.into(),
        }
    }
}
