//! Instant Transaction Notification (ITN) domain.
//!
//! Pure building blocks of notification validation. Network-facing checks
//! (DNS, server confirmation) are orchestrated by the application layer;
//! everything here is a function of its inputs.
//!
//! # Module Structure
//!
//! - `payload` - ordered notification fields
//! - `inbound` - payload plus origin (forwarded-for header, peer address)
//! - `canonical` - canonical parameter string and signature check
//! - `allow_list` - resolved gateway addresses and the source IP check
//! - `amount` - cart total reconciliation
//! - `confirmation` - server confirmation URL and answer
//! - `status` - PaymentStatus derived from `payment_status`
//! - `result` - ValidationResult, CheckOutcomes, ItnReport
//! - `errors` - ValidationError (diagnostics only)

mod allow_list;
mod amount;
mod canonical;
mod confirmation;
mod errors;
mod inbound;
mod payload;
mod result;
mod status;

pub use allow_list::{AllowList, DEFAULT_VALID_HOSTS};
pub use amount::{check_amount, parse_amount, AMOUNT_TOLERANCE};
pub use canonical::{canonical_string, expected_signature, verify_signature};
pub use confirmation::{
    confirmation_base_url, confirmation_url, interpret_confirmation, CONFIRMATION_PATH,
    CONFIRMATION_TOKEN,
};
pub use errors::ValidationError;
pub use inbound::{normalize, InboundNotification, FORWARDED_FOR_HEADER};
pub use payload::{NotificationPayload, SIGNATURE_FIELD};
pub use result::{CheckOutcome, CheckOutcomes, ItnReport, ValidationResult};
pub use status::{PaymentStatus, STATUS_COMPLETE};
