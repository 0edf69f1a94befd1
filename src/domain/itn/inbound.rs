//! Inbound notification as received by the merchant's web endpoint.
//!
//! Framework-neutral: build it from the form body, the request headers and
//! the connection's peer address, whatever server produced them.

use std::net::{IpAddr, SocketAddr};

use http::HeaderMap;

use super::payload::NotificationPayload;

/// Header set by reverse proxies with the originating client address.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// A received notification plus the data needed to judge its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundNotification {
    pub payload: NotificationPayload,
    pub forwarded_for: Option<String>,
    pub peer: Option<IpAddr>,
}

impl InboundNotification {
    pub fn new(
        payload: NotificationPayload,
        forwarded_for: Option<String>,
        peer: Option<IpAddr>,
    ) -> Self {
        Self {
            payload,
            forwarded_for,
            peer,
        }
    }

    /// Builds a notification from raw request parts.
    pub fn from_parts(headers: &HeaderMap, peer: Option<SocketAddr>, body: &[u8]) -> Self {
        let forwarded_for = headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Self {
            payload: NotificationPayload::from_form_body(body),
            forwarded_for,
            peer: peer.map(|addr| addr.ip()),
        }
    }

    /// Claimed source IP of the sender.
    ///
    /// The first `X-Forwarded-For` entry wins; the peer address is only used
    /// when the header is absent or blank. A header that is present but does
    /// not parse yields `None` rather than falling back to the peer.
    pub fn source_ip(&self) -> Option<IpAddr> {
        let forwarded = self
            .forwarded_for
            .as_deref()
            .and_then(|header| header.split(',').next())
            .map(str::trim)
            .filter(|entry| !entry.is_empty());

        match forwarded {
            Some(entry) => entry.parse::<IpAddr>().ok().map(normalize),
            None => self.peer.map(normalize),
        }
    }
}

/// Unwraps IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) so they compare
/// equal to the IPv4 addresses DNS returns.
pub fn normalize(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    }
}
