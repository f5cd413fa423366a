//! Typed attribute values and assignments.
//!
//! Values are the canonical, converted form of raw document literals.

use std::net::IpAddr;

use crate::model::{DomainName, IpNetwork, Type};

/// A canonical attribute value of exactly one builtin type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Boolean(bool),
    String(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit IEEE 754 float.
    Float(f64),
    Address(IpAddr),
    Network(IpNetwork),
    Domain(DomainName),
    /// Ordered, possibly empty.
    ListOfStrings(Vec<String>),
}

impl AttributeValue {
    /// Returns the type of this value.
    pub fn type_of(&self) -> Type {
        match self {
            AttributeValue::Boolean(_) => Type::Boolean,
            AttributeValue::String(_) => Type::String,
            AttributeValue::Integer(_) => Type::Integer,
            AttributeValue::Float(_) => Type::Float,
            AttributeValue::Address(_) => Type::Address,
            AttributeValue::Network(_) => Type::Network,
            AttributeValue::Domain(_) => Type::Domain,
            AttributeValue::ListOfStrings(_) => Type::ListOfStrings,
        }
    }
}

/// A named attribute with its typed value, ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Attribute name.
    pub name: String,
    /// The value.
    pub value: AttributeValue,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One encoded request message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Msg {
    /// Encoded assignments, see [`crate::codec::encode_request`].
    pub body: Vec<u8>,
}
