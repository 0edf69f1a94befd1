//! Mock HTTP transport for testing.
//!
//! Provides a scriptable `HttpTransport` for unit and integration tests.
//! Supports:
//! - Queued responses (consumed in order), then a default response
//! - Error injection
//! - Artificial latency
//! - Call tracking

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::ports::{HttpTransport, OutboundRequest, OutboundResponse, TransportError};

/// Mock transport for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.push_response(OutboundResponse::new(200, "VALID"));
///
/// let client = PayfastSubscriptionClient::new(credential, Arc::new(mock.clone()));
/// client.cancel("token").await?;
///
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Inner state (shared between clones so tests can inspect after handing one off).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses returned in order before falling back to `default_response`.
    queued: VecDeque<Result<OutboundResponse, TransportError>>,

    /// Returned once the queue is empty. `None` means `200` with an empty body.
    default_response: Option<Result<OutboundResponse, TransportError>>,

    /// Delay applied before every response.
    latency: Option<Duration>,

    /// Every request received, in order.
    call_log: Vec<OutboundRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that answers every request with `status` and `body`.
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_default_response(OutboundResponse::new(status, body));
        mock
    }

    /// A transport that fails every request with `error`.
    pub fn failing(error: TransportError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().default_response = Some(Err(error));
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a response for the next unanswered call.
    pub fn push_response(&self, response: OutboundResponse) {
        self.inner.lock().unwrap().queued.push_back(Ok(response));
    }

    /// Queue an error for the next unanswered call.
    pub fn push_error(&self, error: TransportError) {
        self.inner.lock().unwrap().queued.push_back(Err(error));
    }

    pub fn set_default_response(&self, response: OutboundResponse) {
        self.inner.lock().unwrap().default_response = Some(Ok(response));
    }

    /// Delay every response by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.inner.lock().unwrap().latency = Some(latency);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<OutboundRequest> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    pub fn last_call(&self) -> Option<OutboundRequest> {
        self.inner.lock().unwrap().call_log.last().cloned()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().call_log.clear();
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> Result<OutboundResponse, TransportError> {
        let (response, latency) = {
            let mut state = self.inner.lock().unwrap();
            state.call_log.push(request);
            let response = match state.queued.pop_front() {
                Some(response) => response,
                None => state
                    .default_response
                    .clone()
                    .unwrap_or_else(|| Ok(OutboundResponse::new(200, ""))),
            };
            (response, state.latency)
        };

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        response
    }
}
