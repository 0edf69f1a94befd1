//! Fixed-table `HostResolver`.
//!
//! Useful in tests and in deployments that pin the gateway's published
//! address ranges instead of resolving them live.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{HostResolver, ResolveError};

#[derive(Clone, Default)]
pub struct StaticHostResolver {
    inner: Arc<Mutex<ResolverState>>,
}

#[derive(Default)]
struct ResolverState {
    entries: HashMap<String, Result<Vec<IpAddr>, ResolveError>>,
    delays: HashMap<String, Duration>,
    lookups: Vec<String>,
}

impl StaticHostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `host` to `addresses`.
    pub fn with_host(self, host: &str, addresses: Vec<IpAddr>) -> Self {
        self.inner
            .lock()
            .unwrap()
            .entries
            .insert(host.to_string(), Ok(addresses));
        self
    }

    /// Makes lookups of `host` fail.
    pub fn with_failure(self, host: &str, message: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .entries
            .insert(host.to_string(), Err(ResolveError::lookup(host, message)));
        self
    }

    /// Delays lookups of `host`.
    pub fn with_delay(self, host: &str, delay: Duration) -> Self {
        self.inner
            .lock()
            .unwrap()
            .delays
            .insert(host.to_string(), delay);
        self
    }

    /// Hosts looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.inner.lock().unwrap().lookups.clone()
    }
}

#[async_trait]
impl HostResolver for StaticHostResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let (entry, delay) = {
            let mut state = self.inner.lock().unwrap();
            state.lookups.push(host.to_string());
            (state.entries.get(host).cloned(), state.delays.get(host).copied())
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        entry.unwrap_or_else(|| Err(ResolveError::lookup(host, "unknown host")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn returns_configured_addresses() {
        let resolver = StaticHostResolver::new().with_host("www.payfast.co.za", vec![ip("197.97.145.144")]);
        assert_eq!(
            resolver.resolve("www.payfast.co.za").await.unwrap(),
            vec![ip("197.97.145.144")]
        );
    }

    #[tokio::test]
    async fn unknown_host_fails() {
        let resolver = StaticHostResolver::new();
        assert!(resolver.resolve("nope.example").await.is_err());
    }

    #[tokio::test]
    async fn configured_failure_is_returned() {
        let resolver = StaticHostResolver::new().with_failure("w1w.payfast.co.za", "SERVFAIL");
        assert_eq!(
            resolver.resolve("w1w.payfast.co.za").await,
            Err(ResolveError::lookup("w1w.payfast.co.za", "SERVFAIL"))
        );
    }

    #[tokio::test]
    async fn records_lookups() {
        let resolver = StaticHostResolver::new();
        let _ = resolver.resolve("a").await;
        let _ = resolver.resolve("b").await;
        assert_eq!(resolver.lookups(), vec!["a".to_string(), "b".to_string()]);
    }
}
