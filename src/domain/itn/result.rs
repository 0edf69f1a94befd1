//! Validation outcome types.

use serde::Serialize;

use super::errors::ValidationError;
use super::payload::NotificationPayload;
use super::status::PaymentStatus;

/// Public trust decision for a notification.
///
/// `Untrusted` deliberately carries no reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationResult {
    Trusted {
        status: PaymentStatus,
        payload: NotificationPayload,
    },
    Untrusted,
}

impl ValidationResult {
    pub fn is_trusted(&self) -> bool {
        matches!(self, ValidationResult::Trusted { .. })
    }

    pub fn status(&self) -> Option<PaymentStatus> {
        match self {
            ValidationResult::Trusted { status, .. } => Some(*status),
            ValidationResult::Untrusted => None,
        }
    }
}

/// Per-check outcome.
pub type CheckOutcome = Result<(), ValidationError>;

/// Outcomes of the four checks, for operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcomes {
    pub signature: CheckOutcome,
    pub source_ip: CheckOutcome,
    pub amount: CheckOutcome,
    pub server_confirmation: CheckOutcome,
}

impl CheckOutcomes {
    pub fn all_passed(&self) -> bool {
        self.failures().is_empty()
    }

    /// Failed checks in evaluation order.
    pub fn failures(&self) -> Vec<&ValidationError> {
        [
            &self.signature,
            &self.source_ip,
            &self.amount,
            &self.server_confirmation,
        ]
        .into_iter()
        .filter_map(|outcome| outcome.as_ref().err())
        .collect()
    }
}

/// Public result plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItnReport {
    pub result: ValidationResult,
    pub checks: CheckOutcomes,
}

impl ItnReport {
    /// Combines check outcomes into a report. Trusted only if every check passed.
    pub fn combine(payload: &NotificationPayload, checks: CheckOutcomes) -> Self {
        let result = if checks.all_passed() {
            ValidationResult::Trusted {
                status: PaymentStatus::from_payment_status(payload.payment_status()),
                payload: payload.clone(),
            }
        } else {
            ValidationResult::Untrusted
        };

        Self { result, checks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> CheckOutcomes {
        CheckOutcomes {
            signature: Ok(()),
            source_ip: Ok(()),
            amount: Ok(()),
            server_confirmation: Ok(()),
        }
    }

    fn payload(status: &str) -> NotificationPayload {
        vec![("payment_status", status)].into_iter().collect()
    }

    #[test]
    fn all_passing_is_trusted_with_status() {
        let report = ItnReport::combine(&payload("COMPLETE"), passing());

        assert!(report.result.is_trusted());
        assert_eq!(report.result.status(), Some(PaymentStatus::Complete));
    }

    #[test]
    fn non_complete_status_is_cancelled() {
        let report = ItnReport::combine(&payload("CANCELLED"), passing());
        assert_eq!(report.result.status(), Some(PaymentStatus::Cancelled));
    }

    #[test]
    fn any_failure_is_untrusted() {
        let mut checks = passing();
        checks.server_confirmation = Err(ValidationError::ServerRejected);

        let report = ItnReport::combine(&payload("COMPLETE"), checks);

        assert_eq!(report.result, ValidationResult::Untrusted);
        assert_eq!(report.checks.failures(), vec![&ValidationError::ServerRejected]);
    }

    #[test]
    fn untrusted_serializes_without_reason() {
        let json = serde_json::to_value(ValidationResult::Untrusted).unwrap();
        assert_eq!(json, serde_json::json!({"result": "untrusted"}));
    }

    #[test]
    fn trusted_serializes_status_and_payload() {
        let result = ValidationResult::Trusted {
            status: PaymentStatus::Complete,
            payload: payload("COMPLETE"),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": "trusted",
                "status": "COMPLETE",
                "payload": {"payment_status": "COMPLETE"}
            })
        );
    }
}
