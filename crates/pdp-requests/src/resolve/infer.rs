//! Type inference for undeclared attributes.
//!
//! Only shapes that are unambiguous at the literal level are inferred. A
//! number could be an integer or a float, and a string could be an address,
//! a network, a domain or a number, so neither is guessed beyond its literal
//! shape: numbers fail and strings are always `String`.

use crate::error::InferError;
use crate::model::{RawValue, Type};

/// Derives the type of an undeclared attribute from its raw value.
pub fn infer_type(value: &RawValue) -> Result<Type, InferError> {
    match value {
        RawValue::Boolean(_) => Ok(Type::Boolean),
        RawValue::String(_) => Ok(Type::String),
        RawValue::Address(_) => Ok(Type::Address),
        RawValue::Network(_) => Ok(Type::Network),
        RawValue::Sequence(items) => match items.first() {
            None => Err(InferError::EmptySequence),
            Some(RawValue::String(_)) => Ok(Type::ListOfStrings),
            Some(first) => Err(InferError::Unsupported {
                shape: sequence_shape(first),
            }),
        },
        RawValue::Integer(_)
        | RawValue::Unsigned(_)
        | RawValue::Float(_)
        | RawValue::Other(_) => Err(InferError::Unsupported {
            shape: value.shape(),
        }),
    }
}

fn sequence_shape(first: &RawValue) -> &'static str {
    match first {
        RawValue::Boolean(_) => "sequence of booleans",
        RawValue::Integer(_) | RawValue::Unsigned(_) => "sequence of integers",
        RawValue::Float(_) => "sequence of floats",
        RawValue::Sequence(_) => "sequence of sequences",
        RawValue::Address(_) => "sequence of addresses",
        RawValue::Network(_) => "sequence of networks",
        RawValue::String(_) | RawValue::Other(_) => "sequence",
    }
}
