//! `HttpTransport` adapters.

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::MockTransport;
pub use reqwest_transport::{ReqwestTransport, DEFAULT_REQUEST_TIMEOUT};
