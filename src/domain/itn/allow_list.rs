//! Gateway address allow-list.

use std::collections::BTreeSet;
use std::net::IpAddr;

use super::errors::ValidationError;
use super::inbound::normalize;

/// Hosts whose addresses may send notifications.
pub const DEFAULT_VALID_HOSTS: [&str; 4] = [
    "www.payfast.co.za",
    "sandbox.payfast.co.za",
    "w1w.payfast.co.za",
    "w2w.payfast.co.za",
];

/// Union of the resolved addresses of every allow-listed host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    addresses: BTreeSet<IpAddr>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds resolved addresses; duplicates collapse.
    pub fn extend<I: IntoIterator<Item = IpAddr>>(&mut self, addresses: I) {
        self.addresses
            .extend(addresses.into_iter().map(normalize));
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.addresses.contains(&normalize(*ip))
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Checks a claimed source against the list. An empty list rejects everything.
    pub fn check(&self, source: Option<IpAddr>) -> Result<(), ValidationError> {
        let ip = source.ok_or(ValidationError::MissingSourceIp)?;
        if self.is_empty() {
            return Err(ValidationError::EmptyAllowList);
        }
        if self.contains(&ip) {
            Ok(())
        } else {
            Err(ValidationError::UntrustedSource { ip })
        }
    }
}

impl FromIterator<IpAddr> for AllowList {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        let mut list = AllowList::new();
        list.extend(iter);
        list
    }
}
