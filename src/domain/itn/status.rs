//! Payment status derived from a trusted notification.

use serde::{Deserialize, Serialize};

/// Value of `payment_status` that marks a completed payment.
pub const STATUS_COMPLETE: &str = "COMPLETE";

/// Outcome of the payment a notification reports.
///
/// Anything other than `COMPLETE` (e.g. `CANCELLED`, `FAILED`) maps to
/// `Cancelled`: the subscription should not be treated as paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Complete,
    Cancelled,
}

impl PaymentStatus {
    pub fn from_payment_status(value: Option<&str>) -> Self {
        match value {
            Some(STATUS_COMPLETE) => PaymentStatus::Complete,
            _ => PaymentStatus::Cancelled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Complete => "COMPLETE",
            PaymentStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PaymentStatus::Complete)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
