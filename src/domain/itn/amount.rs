//! Amount reconciliation between the merchant's cart and the notification.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::errors::ValidationError;
use super::payload::NotificationPayload;

/// Largest accepted absolute difference (one cent).
pub const AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Parses a currency amount such as `"200.00"`.
pub fn parse_amount(value: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(value.trim()).map_err(|_| ValidationError::InvalidAmount(value.to_string()))
}

/// Checks that `amount_gross` is within one cent of `expected`.
pub fn check_amount(
    expected: Decimal,
    payload: &NotificationPayload,
) -> Result<(), ValidationError> {
    let received = payload
        .amount_gross()
        .ok_or_else(|| ValidationError::InvalidAmount("missing amount_gross".to_string()))
        .and_then(parse_amount)?;

    // Sender-controlled values can sit at the edge of Decimal's range.
    match expected.checked_sub(received) {
        Some(difference) if difference.abs() <= AMOUNT_TOLERANCE => Ok(()),
        _ => Err(ValidationError::AmountMismatch { expected, received }),
    }
}
