//! PayFast subscription lifecycle adapter.
//!
//! Implements the `SubscriptionGateway` port over an `HttpTransport`.
//! Every call is signed by [`RequestSigner`] and targets
//! `{base}/subscriptions/{token}/{action}`; sandbox credentials append
//! `?testing=true` instead of switching hosts.
//!
//! # Configuration
//!
//! ```ignore
//! let credential = MerchantCredential::new("10000100", "jt7NOE43FZPn", true)?;
//! let transport = Arc::new(ReqwestTransport::new(Duration::from_secs(30))?);
//! let client = PayfastSubscriptionClient::new(credential, transport);
//! client.pause(&token, Some(2)).await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::domain::signing::{RequestSigner, SignatureScheme};
use crate::domain::subscription::{
    ConfigurationError, FetchEnvelope, MerchantCredential, PauseRequest, SubscriptionDetails,
    SubscriptionError, SubscriptionUpdate,
};
use crate::ports::{
    HttpMethod, HttpTransport, OutboundRequest, OutboundResponse, SubscriptionGateway,
    TransportError,
};

/// Default API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.payfast.co.za";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Lifecycle actions, named as they appear in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Cancel,
    Pause,
    Unpause,
    Update,
    Fetch,
}

impl Action {
    fn path(&self) -> &'static str {
        match self {
            Action::Cancel => "cancel",
            Action::Pause => "pause",
            Action::Unpause => "unpause",
            Action::Update => "update",
            Action::Fetch => "fetch",
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            Action::Fetch => HttpMethod::Get,
            _ => HttpMethod::Put,
        }
    }
}

/// Signed request body: the fields to sign plus the JSON to send.
struct SignedBody {
    fields: Vec<(&'static str, String)>,
    json: String,
}

impl SignedBody {
    fn new<T: Serialize>(
        fields: Vec<(&'static str, String)>,
        body: &T,
    ) -> Result<Self, SubscriptionError> {
        let json =
            serde_json::to_string(body).map_err(|e| SubscriptionError::Encode(e.to_string()))?;
        Ok(Self { fields, json })
    }
}

/// PayFast subscription client.
pub struct PayfastSubscriptionClient {
    credential: MerchantCredential,
    signer: RequestSigner,
    transport: Arc<dyn HttpTransport>,
    api_base_url: String,
}

impl PayfastSubscriptionClient {
    pub fn new(credential: MerchantCredential, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            credential,
            signer: RequestSigner::default(),
            transport,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Applies the configured base URL and signature scheme. The request
    /// timeout belongs to the transport; see [`ApiConfig::request_timeout`].
    pub fn from_config(
        config: &ApiConfig,
        credential: MerchantCredential,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::new(credential, transport)
            .with_base_url(config.base_url.as_str())
            .with_signature_scheme(config.signature_scheme)
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_signature_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.signer = RequestSigner::new(scheme);
        self
    }

    pub fn credential(&self) -> &MerchantCredential {
        &self.credential
    }

    /// URL for `action` on `token`.
    fn endpoint(&self, token: &str, action: Action) -> String {
        let mut url = format!(
            "{}/subscriptions/{}/{}",
            self.api_base_url,
            urlencoding::encode(token),
            action.path()
        );
        if self.credential.is_sandbox() {
            url.push_str("?testing=true");
        }
        url
    }

    fn require_token(token: &str) -> Result<&str, ConfigurationError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigurationError::MissingSubscriptionToken);
        }
        Ok(token)
    }

    /// Signs and sends one lifecycle call. Non-2xx answers become errors.
    async fn execute(
        &self,
        token: &str,
        action: Action,
        body: Option<SignedBody>,
    ) -> Result<OutboundResponse, SubscriptionError> {
        let url = self.endpoint(token, action);
        let fields = body.as_ref().map(|b| b.fields.as_slice()).unwrap_or(&[]);
        let headers = self.signer.build_headers(&self.credential, fields);

        let mut request = OutboundRequest::new(action.method(), url).with_headers(headers.to_pairs());
        if let Some(body) = body {
            request = request.with_body(JSON_CONTENT_TYPE, body.json);
        }

        tracing::debug!(
            action = action.path(),
            method = %action.method(),
            sandbox = self.credential.is_sandbox(),
            "Sending subscription request"
        );

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(action = action.path(), error = %e, "Subscription request failed");
            e
        })?;

        response.error_for_status().map_err(|e| {
            tracing::error!(action = action.path(), error = %e, "Subscription API error");
            SubscriptionError::from(e)
        })
    }
}

#[async_trait]
impl SubscriptionGateway for PayfastSubscriptionClient {
    async fn cancel(&self, token: &str) -> Result<(), SubscriptionError> {
        let token = Self::require_token(token)?;
        self.execute(token, Action::Cancel, None).await?;
        Ok(())
    }

    async fn pause(&self, token: &str, cycles: Option<u32>) -> Result<(), SubscriptionError> {
        let token = Self::require_token(token)?;
        let pause = PauseRequest::new(cycles);
        let body = SignedBody::new(pause.fields(), &pause)?;
        self.execute(token, Action::Pause, Some(body)).await?;
        Ok(())
    }

    async fn unpause(&self, token: &str) -> Result<(), SubscriptionError> {
        let token = Self::require_token(token)?;
        self.execute(token, Action::Unpause, None).await?;
        Ok(())
    }

    async fn update(
        &self,
        token: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), SubscriptionError> {
        let token = Self::require_token(token)?;
        if update.is_empty() {
            return Err(ConfigurationError::EmptyUpdate.into());
        }
        let body = SignedBody::new(update.fields(), update)?;
        self.execute(token, Action::Update, Some(body)).await?;
        Ok(())
    }

    async fn fetch(&self, token: &str) -> Result<SubscriptionDetails, SubscriptionError> {
        let token = Self::require_token(token)?;
        let response = self.execute(token, Action::Fetch, None).await?;

        let envelope: FetchEnvelope = serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse subscription fetch response");
            TransportError::Decode(format!("Failed to parse fetch response: {}", e))
        })?;

        if !envelope.is_success() {
            tracing::error!(
                code = ?envelope.code,
                status = ?envelope.status,
                "Subscription fetch rejected by gateway"
            );
            return Err(TransportError::Status {
                status: envelope.code.unwrap_or(response.status),
                body: response.body,
            }
            .into());
        }

        let details = envelope.into_details().map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode subscription record");
            TransportError::Decode(format!("Failed to decode subscription record: {}", e))
        })?;

        Ok(details)
    }
}
