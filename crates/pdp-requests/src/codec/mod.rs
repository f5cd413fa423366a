//! Binary encoding/decoding of request messages.
//!
//! One message carries the typed assignments of one request.

pub mod primitives;
pub mod request;

pub use primitives::{Reader, Writer, zigzag_decode, zigzag_encode};
pub use request::{decode_request, decode_value, encode_request, encode_request_to_vec, encode_value};
