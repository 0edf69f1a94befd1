//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HttpTransport` - sends one HTTP request, no retries
//! - `HostResolver` - forward DNS lookups for the ITN allow-list
//! - `SubscriptionGateway` - subscription lifecycle operations

mod host_resolver;
mod http_transport;
mod subscription_gateway;

pub use host_resolver::{HostResolver, ResolveError};
pub use http_transport::{HttpMethod, HttpTransport, OutboundRequest, OutboundResponse, TransportError};
pub use subscription_gateway::SubscriptionGateway;
