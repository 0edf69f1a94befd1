//! `HostResolver` over the system resolver via `tokio::net::lookup_host`.

use std::collections::BTreeSet;
use std::net::IpAddr;

use async_trait::async_trait;

use crate::ports::{HostResolver, ResolveError};

/// Resolves hosts with the operating system's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioHostResolver;

impl TokioHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for TokioHostResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        // The port is irrelevant; lookup_host needs one to build socket addresses.
        let addresses = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::lookup(host, e.to_string()))?;

        let unique: BTreeSet<IpAddr> = addresses.map(|addr| addr.ip()).collect();
        Ok(unique.into_iter().collect())
    }
}
