//! `HttpTransport` over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{HttpMethod, HttpTransport, OutboundRequest, OutboundResponse, TransportError};

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends requests with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Wraps an existing client, keeping its settings.
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(&request.url),
            HttpMethod::Post => self.http_client.post(&request.url),
            HttpMethod::Put => self.http_client.put(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Decode(e.to_string())
            }
        })?;

        Ok(OutboundResponse { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_client() {
        assert!(ReqwestTransport::new(DEFAULT_REQUEST_TIMEOUT).is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        // Port 9 on localhost is the discard service; nothing listens there in CI.
        let request = OutboundRequest::new(HttpMethod::Get, "http://127.0.0.1:9/");

        let result = transport.send(request).await;

        assert!(matches!(
            result,
            Err(TransportError::Network(_)) | Err(TransportError::Timeout)
        ));
    }
}
