//! Conversion of raw values to typed attribute values.
//!
//! Each builtin type has one converter. A converter accepts a small set of raw
//! shapes for its type and rejects everything else; string input is parsed
//! with the grammar of the target type.

use std::net::IpAddr;

use crate::error::ConvertError;
use crate::limits::MAX_FLOAT64_INT;
use crate::model::{AttributeValue, DomainName, IpNetwork, RawValue, Type};

/// Converts a raw value to a typed value of one fixed type.
pub type Converter = fn(&RawValue) -> Result<AttributeValue, ConvertError>;

/// Returns the converter for a type. `None` only for [`Type::Undefined`].
pub fn converter(ty: Type) -> Option<Converter> {
    match ty {
        Type::Boolean => Some(boolean),
        Type::String => Some(string),
        Type::Integer => Some(integer),
        Type::Float => Some(float),
        Type::Address => Some(address),
        Type::Network => Some(network),
        Type::Domain => Some(domain),
        Type::ListOfStrings => Some(list_of_strings),
        Type::Undefined => None,
    }
}

fn unsupported(target: Type, value: &RawValue) -> ConvertError {
    ConvertError::UnsupportedShape {
        target,
        shape: value.shape(),
    }
}

fn malformed(target: Type, text: &str) -> ConvertError {
    ConvertError::Malformed {
        target,
        text: text.to_string(),
    }
}

/// Parses the boolean literals `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn boolean(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::Boolean(b) => Ok(AttributeValue::Boolean(*b)),
        RawValue::String(s) => parse_bool(s)
            .map(AttributeValue::Boolean)
            .ok_or_else(|| malformed(Type::Boolean, s)),
        _ => Err(unsupported(Type::Boolean, value)),
    }
}

fn string(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::String(s) => Ok(AttributeValue::String(s.clone())),
        _ => Err(unsupported(Type::String, value)),
    }
}

fn integer(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::Integer(i) => Ok(AttributeValue::Integer(*i)),
        RawValue::Unsigned(u) => i64::try_from(*u)
            .map(AttributeValue::Integer)
            .map_err(|_| ConvertError::OutOfRange {
                target: Type::Integer,
                shape: value.shape(),
                value: u.to_string(),
            }),
        // Fractional parts are truncated toward zero.
        RawValue::Float(f) if *f > -MAX_FLOAT64_INT && *f < MAX_FLOAT64_INT => {
            Ok(AttributeValue::Integer(*f as i64))
        }
        RawValue::Float(f) => Err(ConvertError::OutOfRange {
            target: Type::Integer,
            shape: value.shape(),
            value: f.to_string(),
        }),
        RawValue::String(s) => s
            .parse::<i64>()
            .map(AttributeValue::Integer)
            .map_err(|_| malformed(Type::Integer, s)),
        _ => Err(unsupported(Type::Integer, value)),
    }
}

fn float(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::Integer(i) => Ok(AttributeValue::Float(*i as f64)),
        RawValue::Unsigned(u) => Ok(AttributeValue::Float(*u as f64)),
        RawValue::Float(f) => Ok(AttributeValue::Float(*f)),
        RawValue::String(s) => s
            .parse::<f64>()
            .map(AttributeValue::Float)
            .map_err(|_| malformed(Type::Float, s)),
        _ => Err(unsupported(Type::Float, value)),
    }
}

fn address(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::Address(a) => Ok(AttributeValue::Address(*a)),
        RawValue::String(s) => s
            .parse::<IpAddr>()
            .map(AttributeValue::Address)
            .map_err(|_| malformed(Type::Address, s)),
        _ => Err(unsupported(Type::Address, value)),
    }
}

fn network(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::Network(n) => Ok(AttributeValue::Network(*n)),
        RawValue::String(s) => s
            .parse::<IpNetwork>()
            .map(AttributeValue::Network)
            .map_err(|_| malformed(Type::Network, s)),
        _ => Err(unsupported(Type::Network, value)),
    }
}

fn domain(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    match value {
        RawValue::String(s) => DomainName::parse(s)
            .map(AttributeValue::Domain)
            .map_err(|source| ConvertError::Domain {
                text: s.clone(),
                source,
            }),
        _ => Err(unsupported(Type::Domain, value)),
    }
}

fn list_of_strings(value: &RawValue) -> Result<AttributeValue, ConvertError> {
    let RawValue::Sequence(items) = value else {
        return Err(unsupported(Type::ListOfStrings, value));
    };

    let mut list = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            RawValue::String(s) => list.push(s.clone()),
            _ => {
                return Err(ConvertError::ListElement {
                    index,
                    shape: item.shape(),
                });
            }
        }
    }
    Ok(AttributeValue::ListOfStrings(list))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(ty: Type, value: impl Into<RawValue>) -> Result<AttributeValue, ConvertError> {
        converter(ty).unwrap()(&value.into())
    }

    #[test]
    fn test_registry_covers_builtins() {
        for t in Type::ALL {
            assert!(converter(t).is_some(), "no converter for {t}");
        }
        assert!(converter(Type::Undefined).is_none());
    }

    #[test]
    fn test_boolean() {
        assert_eq!(convert(Type::Boolean, true), Ok(AttributeValue::Boolean(true)));
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(convert(Type::Boolean, s), Ok(AttributeValue::Boolean(true)), "{s}");
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(convert(Type::Boolean, s), Ok(AttributeValue::Boolean(false)), "{s}");
        }
        assert!(matches!(
            convert(Type::Boolean, "yes"),
            Err(ConvertError::Malformed { target: Type::Boolean, .. })
        ));
        assert!(matches!(
            convert(Type::Boolean, "tRUE"),
            Err(ConvertError::Malformed { .. })
        ));
        assert!(matches!(
            convert(Type::Boolean, 1i64),
            Err(ConvertError::UnsupportedShape { shape: "integer", .. })
        ));
    }

    #[test]
    fn test_string() {
        assert_eq!(
            convert(Type::String, "x"),
            Ok(AttributeValue::String("x".to_string()))
        );
        assert!(matches!(
            convert(Type::String, true),
            Err(ConvertError::UnsupportedShape { .. })
        ));
        assert!(matches!(
            convert(Type::String, vec!["x"]),
            Err(ConvertError::UnsupportedShape { shape: "sequence", .. })
        ));
    }

    #[test]
    fn test_integer_native() {
        assert_eq!(convert(Type::Integer, -5i64), Ok(AttributeValue::Integer(-5)));
        assert_eq!(
            convert(Type::Integer, RawValue::Unsigned(i64::MAX as u64)),
            Ok(AttributeValue::Integer(i64::MAX))
        );
        assert!(matches!(
            convert(Type::Integer, RawValue::Unsigned(i64::MAX as u64 + 1)),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_integer_float_bounds() {
        let max_exact = MAX_FLOAT64_INT - 1.0;
        assert_eq!(
            convert(Type::Integer, max_exact),
            Ok(AttributeValue::Integer(9_007_199_254_740_991))
        );
        assert_eq!(
            convert(Type::Integer, -max_exact),
            Ok(AttributeValue::Integer(-9_007_199_254_740_991))
        );
        assert!(matches!(
            convert(Type::Integer, MAX_FLOAT64_INT),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert!(matches!(
            convert(Type::Integer, -MAX_FLOAT64_INT),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert!(matches!(
            convert(Type::Integer, f64::NAN),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert_eq!(convert(Type::Integer, 2.9), Ok(AttributeValue::Integer(2)));
        assert_eq!(convert(Type::Integer, -2.9), Ok(AttributeValue::Integer(-2)));
    }

    #[test]
    fn test_integer_string() {
        assert_eq!(convert(Type::Integer, "30"), Ok(AttributeValue::Integer(30)));
        assert_eq!(convert(Type::Integer, "-7"), Ok(AttributeValue::Integer(-7)));
        assert_eq!(convert(Type::Integer, "+7"), Ok(AttributeValue::Integer(7)));
        for s in ["", "3.0", "0x10", "9223372036854775808", " 1"] {
            assert!(
                matches!(convert(Type::Integer, s), Err(ConvertError::Malformed { .. })),
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_float() {
        assert_eq!(convert(Type::Float, 2.75), Ok(AttributeValue::Float(2.75)));
        assert_eq!(convert(Type::Float, 2i64), Ok(AttributeValue::Float(2.0)));
        assert_eq!(
            convert(Type::Float, RawValue::Unsigned(u64::MAX)),
            Ok(AttributeValue::Float(u64::MAX as f64))
        );
        assert_eq!(convert(Type::Float, "1e3"), Ok(AttributeValue::Float(1000.0)));
        assert!(matches!(
            convert(Type::Float, "one"),
            Err(ConvertError::Malformed { target: Type::Float, .. })
        ));
        assert!(matches!(
            convert(Type::Float, false),
            Err(ConvertError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_address() {
        let v4: IpAddr = "192.0.2.1".parse().unwrap();
        assert_eq!(convert(Type::Address, "192.0.2.1"), Ok(AttributeValue::Address(v4)));
        assert_eq!(convert(Type::Address, v4), Ok(AttributeValue::Address(v4)));
        let v6: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(convert(Type::Address, "2001:db8::1"), Ok(AttributeValue::Address(v6)));
        assert!(matches!(
            convert(Type::Address, "example.com"),
            Err(ConvertError::Malformed { .. })
        ));
        assert!(matches!(
            convert(Type::Address, 1i64),
            Err(ConvertError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_network() {
        let net: IpNetwork = "10.0.0.0/24".parse().unwrap();
        assert_eq!(convert(Type::Network, "10.0.0.0/24"), Ok(AttributeValue::Network(net)));
        assert_eq!(convert(Type::Network, net), Ok(AttributeValue::Network(net)));
        assert!(matches!(
            convert(Type::Network, "10.0.0.0"),
            Err(ConvertError::Malformed { target: Type::Network, .. })
        ));
        assert!(matches!(
            convert(Type::Network, RawValue::Address("10.0.0.1".parse().unwrap())),
            Err(ConvertError::UnsupportedShape { shape: "address", .. })
        ));
    }

    #[test]
    fn test_domain() {
        assert_eq!(
            convert(Type::Domain, "example.com"),
            Ok(AttributeValue::Domain(DomainName::parse("example.com").unwrap()))
        );
        assert!(matches!(
            convert(Type::Domain, "example..com"),
            Err(ConvertError::Domain { .. })
        ));
        assert!(matches!(
            convert(Type::Domain, vec!["example.com"]),
            Err(ConvertError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_list_of_strings() {
        assert_eq!(
            convert(Type::ListOfStrings, RawValue::Sequence(vec![])),
            Ok(AttributeValue::ListOfStrings(vec![]))
        );
        assert_eq!(
            convert(Type::ListOfStrings, vec!["a", "b"]),
            Ok(AttributeValue::ListOfStrings(vec!["a".to_string(), "b".to_string()]))
        );
        let mixed = RawValue::Sequence(vec![
            RawValue::from("a"),
            RawValue::from(2i64),
            RawValue::from("c"),
        ]);
        assert_eq!(
            convert(Type::ListOfStrings, mixed),
            Err(ConvertError::ListElement {
                index: 1,
                shape: "integer"
            })
        );
        assert!(matches!(
            convert(Type::ListOfStrings, "a"),
            Err(ConvertError::UnsupportedShape { .. })
        ));
    }
}
