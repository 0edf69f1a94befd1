//! Request signing.
//!
//! - `encoding` - parameter-string value encoding and MD5 digests
//! - `signer` - authentication headers for management calls

mod encoding;
mod signer;

pub use encoding::{encode_value, join_pairs, md5_hex};
pub use signer::{
    format_timestamp, RequestHeaders, RequestSigner, SignatureScheme, API_VERSION,
    HEADER_MERCHANT_ID, HEADER_SIGNATURE, HEADER_TIMESTAMP, HEADER_VERSION,
};
