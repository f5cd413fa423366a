//! Limits and defaults for request marshalling and the message wire format.

/// Wire format version written as the first byte of every message.
pub const FORMAT_VERSION: u8 = 1;

/// Default capacity of the pre-sized buffer each request is encoded into.
pub const DEFAULT_MESSAGE_SIZE: usize = 10240;

/// Maximum attribute name length in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length of a string or domain payload in bytes.
pub const MAX_STRING_LEN: usize = 65535;

/// Maximum number of elements in a list of strings.
pub const MAX_LIST_LEN: usize = 65535;

/// Maximum number of assignments in one message.
pub const MAX_ASSIGNMENTS: usize = 65535;

/// Maximum bytes for a varint (64-bit value).
pub const MAX_VARINT_BYTES: usize = 10;

/// 2^53, the first integer an IEEE-754 double can no longer tell from its neighbour.
///
/// Floats converted to integers must lie strictly inside `(-2^53, 2^53)`.
pub const MAX_FLOAT64_INT: f64 = 9_007_199_254_740_992.0;

/// Maximum length of a domain label in bytes.
pub const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Maximum length of a domain name in wire form (length-prefixed labels plus root).
pub const MAX_DOMAIN_NAME_LEN: usize = 255;
