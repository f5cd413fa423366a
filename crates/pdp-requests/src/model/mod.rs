//! Data model types for request marshalling.
//!
//! - Types (the fixed builtin set and its registry)
//! - Raw values (untyped document literals)
//! - Attribute values and assignments (canonical typed output)
//! - Networks and domain names (validated value types)

pub mod domain;
pub mod network;
pub mod raw;
pub mod types;
pub mod value;

pub use domain::DomainName;
pub use network::IpNetwork;
pub use raw::RawValue;
pub use types::{Type, BUILTIN_TYPES};
pub use value::{Assignment, AttributeValue, Msg};
