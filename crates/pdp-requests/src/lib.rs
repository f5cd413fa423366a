//! Typed attribute marshalling for PDP authorization request fixtures.
//!
//! This crate turns human-written request documents into the typed attribute
//! messages a policy decision point evaluates.
//!
//! # Overview
//!
//! A document declares attribute types by name and lists a batch of requests:
//!
//! ```yaml
//! attributes:
//!   age: integer
//!   net: network
//! requests:
//!   - age: "30"
//!     net: 10.0.0.0/24
//!     flag: true
//! ```
//!
//! For every attribute of every request the type is taken from the
//! declarations, or inferred from the literal when undeclared (`flag` above
//! becomes a Boolean). The literal is then converted to the canonical value of
//! that type, and each request's assignments are encoded into one message.
//!
//! # Quick Start
//!
//! ```rust
//! use pdp_requests::{load, LoadOptions, AttributeValue};
//! use pdp_requests::codec::decode_request;
//!
//! let msgs = load(
//!     r#"{"attributes": {"age": "integer"}, "requests": [{"age": "30"}]}"#,
//!     &LoadOptions::default(),
//! )
//! .unwrap();
//!
//! let assignments = decode_request(&msgs[0].body).unwrap();
//! assert_eq!(assignments[0].name, "age");
//! assert_eq!(assignments[0].value, AttributeValue::Integer(30));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Types, raw values, typed values and assignments
//! - [`resolve`]: Symbol table, type inference and value conversion
//! - [`source`]: Document ingestion from YAML/JSON files or JSON text
//! - [`codec`]: Binary message encoding/decoding
//! - [`error`]: Error types
//! - [`limits`]: Wire format limits and defaults
//!
//! # Failure model
//!
//! Loading is all-or-nothing. An unknown declared type fails before any
//! request is looked at; the first bad attribute fails the whole batch with
//! the 1-based index of its request.

pub mod codec;
pub mod error;
pub mod limits;
pub mod load;
pub mod model;
pub mod resolve;
pub mod source;

// Re-export commonly used types at crate root
pub use codec::{decode_request, encode_request};
pub use error::{
    AttributeError, ConvertError, DecodeError, DomainError, EncodeError, InferError, LoadError,
    NetworkParseError,
};
pub use load::{load, LoadOptions};
pub use model::{Assignment, AttributeValue, DomainName, IpNetwork, Msg, RawValue, Type};
pub use resolve::{converter, infer_type, make_attribute, SymbolTable};
pub use source::{Document, Request, Source};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message format version this crate writes.
pub const FORMAT_VERSION: u8 = limits::FORMAT_VERSION;
