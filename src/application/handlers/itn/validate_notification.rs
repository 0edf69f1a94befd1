//! ItnValidator - Decides whether an inbound notification can be trusted.
//!
//! Four independent checks run for every notification:
//!
//! 1. Signature over the canonical parameter string plus passphrase
//! 2. Source IP against the resolved gateway hosts
//! 3. `amount_gross` against the caller's expected cart total
//! 4. Server confirmation via the gateway's validate endpoint
//!
//! The signature and amount checks are pure. The source IP and confirmation
//! checks do network I/O, bounded by the configured timeouts, and run
//! concurrently. The notification is trusted only when all four pass.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use rust_decimal::Decimal;

use crate::domain::itn::{
    canonical_string, check_amount, confirmation_base_url, confirmation_url,
    interpret_confirmation, verify_signature, AllowList, CheckOutcome, CheckOutcomes,
    InboundNotification, ItnReport, ValidationError, ValidationResult, DEFAULT_VALID_HOSTS,
};
use crate::domain::subscription::MerchantCredential;
use crate::ports::{
    HostResolver, HttpMethod, HttpTransport, OutboundRequest, OutboundResponse, ResolveError,
    TransportError,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Tunables for notification validation.
#[derive(Debug, Clone)]
pub struct ItnValidatorConfig {
    /// Hosts whose addresses form the allow-list.
    pub valid_hosts: Vec<String>,

    /// Per-host DNS lookup bound.
    pub dns_timeout: Duration,

    /// Server confirmation bound.
    pub confirmation_timeout: Duration,

    /// Overrides `https://{gateway host}` for the confirmation call.
    pub confirmation_base_url: Option<String>,
}

impl Default for ItnValidatorConfig {
    fn default() -> Self {
        Self {
            valid_hosts: DEFAULT_VALID_HOSTS.iter().map(|h| h.to_string()).collect(),
            dns_timeout: Duration::from_millis(2000),
            confirmation_timeout: Duration::from_millis(5000),
            confirmation_base_url: None,
        }
    }
}

impl ItnValidatorConfig {
    pub fn with_valid_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    pub fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Set a custom confirmation base URL (for testing).
    pub fn with_confirmation_base_url(mut self, url: impl Into<String>) -> Self {
        self.confirmation_base_url = Some(url.into());
        self
    }
}

/// Validator for inbound payment notifications.
///
/// Holds no per-notification state, so one instance can serve concurrent
/// requests and re-validating the same notification gives the same answer.
pub struct ItnValidator {
    credential: MerchantCredential,
    resolver: Arc<dyn HostResolver>,
    transport: Arc<dyn HttpTransport>,
    config: ItnValidatorConfig,
}

impl ItnValidator {
    pub fn new(
        credential: MerchantCredential,
        resolver: Arc<dyn HostResolver>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::with_config(credential, resolver, transport, ItnValidatorConfig::default())
    }

    pub fn with_config(
        credential: MerchantCredential,
        resolver: Arc<dyn HostResolver>,
        transport: Arc<dyn HttpTransport>,
        config: ItnValidatorConfig,
    ) -> Self {
        Self {
            credential,
            resolver,
            transport,
            config,
        }
    }

    pub fn config(&self) -> &ItnValidatorConfig {
        &self.config
    }

    /// Validates `notification` against `expected_amount`.
    ///
    /// Returns only the trust decision; reasons are logged at `warn`.
    pub async fn validate(
        &self,
        notification: &InboundNotification,
        expected_amount: Decimal,
    ) -> ValidationResult {
        self.validate_with_report(notification, expected_amount)
            .await
            .result
    }

    /// Validates `notification` and returns per-check diagnostics.
    pub async fn validate_with_report(
        &self,
        notification: &InboundNotification,
        expected_amount: Decimal,
    ) -> ItnReport {
        let payload = &notification.payload;
        let canonical = canonical_string(payload);

        let signature = verify_signature(payload, &canonical, self.credential.passphrase());

        let (source_ip, amount, server_confirmation) = futures::join!(
            self.check_source_ip(notification),
            async { check_amount(expected_amount, payload) },
            self.confirm_with_server(&canonical),
        );

        let checks = CheckOutcomes {
            signature,
            source_ip,
            amount,
            server_confirmation,
        };

        for failure in checks.failures() {
            tracing::warn!(
                check = failure.check(),
                error = %failure,
                pf_payment_id = payload.pf_payment_id().unwrap_or_default(),
                "ITN check failed"
            );
        }

        let report = ItnReport::combine(payload, checks);

        if let Some(status) = report.result.status() {
            tracing::info!(
                pf_payment_id = payload.pf_payment_id().unwrap_or_default(),
                m_payment_id = payload.m_payment_id().unwrap_or_default(),
                status = %status,
                "ITN validated"
            );
        }

        report
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Source IP
    // ════════════════════════════════════════════════════════════════════════════

    async fn check_source_ip(&self, notification: &InboundNotification) -> CheckOutcome {
        let source = notification.source_ip();
        if source.is_none() {
            return Err(ValidationError::MissingSourceIp);
        }

        self.resolve_allow_list().await.check(source)
    }

    /// Resolves every configured host concurrently. Hosts that fail or time
    /// out are skipped.
    async fn resolve_allow_list(&self) -> AllowList {
        let lookups = self.config.valid_hosts.iter().map(|host| async move {
            let outcome =
                match tokio::time::timeout(self.config.dns_timeout, self.resolver.resolve(host))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => Err(ResolveError::Timeout { host: host.clone() }),
                };

            outcome.unwrap_or_else(|e| {
                tracing::warn!(host = %host, error = %e, "Skipping unresolvable ITN host");
                Vec::new()
            })
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Server Confirmation
    // ════════════════════════════════════════════════════════════════════════════

    fn confirmation_endpoint(&self) -> String {
        let base = self
            .config
            .confirmation_base_url
            .clone()
            .unwrap_or_else(|| confirmation_base_url(self.credential.gateway_host()));
        confirmation_url(&base)
    }

    async fn confirm_with_server(&self, canonical: &str) -> CheckOutcome {
        let request = OutboundRequest::new(HttpMethod::Post, self.confirmation_endpoint())
            .with_body(FORM_CONTENT_TYPE, canonical);

        let response =
            match tokio::time::timeout(self.config.confirmation_timeout, self.transport.send(request))
                .await
            {
                Ok(response) => response,
                Err(_) => Err(TransportError::Timeout),
            }
            .and_then(OutboundResponse::error_for_status);

        match response {
            Ok(response) => interpret_confirmation(&response.body),
            Err(e) => {
                tracing::error!(error = %e, "ITN server confirmation failed");
                Err(ValidationError::ConfirmationUnavailable(e.to_string()))
            }
        }
    }
}
