//! Subscription details returned by the fetch call.
//!
//! The gateway wraps the record in an envelope:
//! `{"code": 200, "status": "success", "data": {"response": {...}}}`.
//! Fields are optional on the wire, so unknown or missing values degrade to
//! defaults rather than failing the decode.

use serde::{Deserialize, Serialize};

/// Lifecycle state reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Paused,
    Cancelled,
    Unknown,
}

impl SubscriptionState {
    fn from_status_text(text: &str) -> Self {
        match text.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => SubscriptionState::Active,
            "PAUSED" => SubscriptionState::Paused,
            "CANCELLED" | "CANCELED" => SubscriptionState::Cancelled,
            _ => SubscriptionState::Unknown,
        }
    }
}

/// A subscription as seen by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    pub token: String,

    /// Recurring amount in cents.
    pub amount: i64,

    /// Total cycles (0 means indefinite).
    pub cycles: u32,

    pub cycles_complete: u32,

    /// Frequency code, kept raw since the gateway may add codes.
    pub frequency: Option<u8>,

    /// Next run date as sent by the gateway.
    pub run_date: Option<String>,

    pub state: SubscriptionState,

    pub status_reason: Option<String>,
}

/// Wire envelope of the fetch response.
#[derive(Debug, Deserialize)]
pub(crate) struct FetchEnvelope {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    data: Option<FetchData>,
}

#[derive(Debug, Deserialize)]
struct FetchData {
    // Failed calls carry a message string here instead of a record.
    #[serde(default)]
    response: serde_json::Value,
}

impl FetchEnvelope {
    /// False when the gateway reports a non-2xx `code` or a `status` other
    /// than `success`, even inside an HTTP 200 answer.
    pub fn is_success(&self) -> bool {
        let code_ok = self.code.map_or(true, |code| (200..300).contains(&code));
        let status_ok = self
            .status
            .as_deref()
            .map_or(true, |status| status.eq_ignore_ascii_case("success"));
        code_ok && status_ok
    }

    /// Decodes the wrapped subscription record.
    pub fn into_details(self) -> Result<SubscriptionDetails, serde_json::Error> {
        let response = self
            .data
            .map(|data| data.response)
            .unwrap_or(serde_json::Value::Null);
        let record: FetchRecord = serde_json::from_value(response)?;
        Ok(record.into())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FetchRecord {
    #[serde(default)]
    token: String,
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    cycles: u32,
    #[serde(default)]
    cycles_complete: u32,
    #[serde(default)]
    frequency: Option<u8>,
    #[serde(default)]
    run_date: Option<String>,
    #[serde(default)]
    status_text: Option<String>,
    #[serde(default)]
    status_reason: Option<String>,
}

impl From<FetchRecord> for SubscriptionDetails {
    fn from(record: FetchRecord) -> Self {
        let state = record
            .status_text
            .as_deref()
            .map(SubscriptionState::from_status_text)
            .unwrap_or(SubscriptionState::Unknown);

        SubscriptionDetails {
            token: record.token,
            amount: record.amount,
            cycles: record.cycles,
            cycles_complete: record.cycles_complete,
            frequency: record.frequency,
            run_date: record.run_date,
            state,
            status_reason: record.status_reason.filter(|reason| !reason.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fetch_envelope() {
        let body = r#"{
            "code": 200,
            "status": "success",
            "data": {
                "response": {
                    "amount": 9900,
                    "cycles": 0,
                    "cycles_complete": 4,
                    "frequency": 3,
                    "run_date": "2026-11-01T00:00:00+02:00",
                    "status": 1,
                    "status_reason": "",
                    "status_text": "ACTIVE",
                    "token": "dc0521d3-55fe-269b-fa00-b647310d760f"
                }
            }
        }"#;

        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.code, Some(200));
        assert!(envelope.is_success());
        let details = envelope.into_details().unwrap();

        assert_eq!(details.token, "dc0521d3-55fe-269b-fa00-b647310d760f");
        assert_eq!(details.amount, 9900);
        assert_eq!(details.cycles_complete, 4);
        assert_eq!(details.state, SubscriptionState::Active);
        assert!(details.status_reason.is_none());
    }

    #[test]
    fn unknown_status_text_maps_to_unknown() {
        assert_eq!(
            SubscriptionState::from_status_text("SUSPENDED"),
            SubscriptionState::Unknown
        );
        assert_eq!(
            SubscriptionState::from_status_text("paused"),
            SubscriptionState::Paused
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let body = r#"{"data": {"response": {"token": "abc"}}}"#;
        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.is_success());
        let details = envelope.into_details().unwrap();

        assert_eq!(details.token, "abc");
        assert_eq!(details.amount, 0);
        assert_eq!(details.state, SubscriptionState::Unknown);
    }

    #[test]
    fn failed_status_is_not_success() {
        let body = r#"{"code": 404, "status": "failed", "data": {"response": "Subscription not found"}}"#;
        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();

        assert!(!envelope.is_success());
        assert!(envelope.into_details().is_err());
    }

    #[test]
    fn failed_status_with_ok_code_is_not_success() {
        let body = r#"{"code": 200, "status": "failed", "data": {"response": "Invalid signature"}}"#;
        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();

        assert!(!envelope.is_success());
    }

    #[test]
    fn missing_data_fails_to_decode() {
        let envelope: FetchEnvelope = serde_json::from_str(r#"{"code": 200}"#).unwrap();

        assert!(envelope.is_success());
        assert!(envelope.into_details().is_err());
    }
}
