//! `HostResolver` adapters.

mod static_resolver;
mod tokio_resolver;

pub use static_resolver::StaticHostResolver;
pub use tokio_resolver::TokioHostResolver;
