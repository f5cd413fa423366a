//! Untyped attribute values as they appear in a request document.

use std::fmt;
use std::net::IpAddr;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::model::IpNetwork;

/// A literal taken from a request document before its type is known.
///
/// Only the shape of the literal is recorded. Deserializing from JSON or YAML
/// never yields `Address` or `Network`; those come from callers that build
/// requests programmatically.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Boolean(bool),
    String(String),
    /// Signed integer, or an unsigned one that fits `i64`.
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    Sequence(Vec<RawValue>),
    Address(IpAddr),
    Network(IpNetwork),
    /// Anything else (mappings, nulls), labelled by its shape.
    Other(&'static str),
}

impl RawValue {
    /// Describes the shape of this value for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            RawValue::Boolean(_) => "boolean",
            RawValue::String(_) => "string",
            RawValue::Integer(_) => "integer",
            RawValue::Unsigned(_) => "unsigned integer",
            RawValue::Float(_) => "float",
            RawValue::Sequence(_) => "sequence",
            RawValue::Address(_) => "address",
            RawValue::Network(_) => "network",
            RawValue::Other(shape) => shape,
        }
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Boolean(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::String(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::String(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<u64> for RawValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(i) => RawValue::Integer(i),
            Err(_) => RawValue::Unsigned(v),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<IpAddr> for RawValue {
    fn from(v: IpAddr) -> Self {
        RawValue::Address(v)
    }
}

impl From<IpNetwork> for RawValue {
    fn from(v: IpNetwork) -> Self {
        RawValue::Network(v)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(v: Vec<T>) -> Self {
        RawValue::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an attribute value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::String(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<RawValue, E> {
        Ok(RawValue::Other("bytes"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Other("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Other("null"))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<RawValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<RawValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(RawValue::Other("mapping"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let v: Vec<RawValue> =
            serde_json::from_str(r#"[true, "x", -3, 42, 18446744073709551615, 1.5, ["a"], {"k": 1}, null]"#)
                .unwrap();
        assert_eq!(
            v,
            vec![
                RawValue::Boolean(true),
                RawValue::String("x".to_string()),
                RawValue::Integer(-3),
                RawValue::Integer(42),
                RawValue::Unsigned(u64::MAX),
                RawValue::Float(1.5),
                RawValue::Sequence(vec![RawValue::String("a".to_string())]),
                RawValue::Other("mapping"),
                RawValue::Other("null"),
            ]
        );
    }

    #[test]
    fn test_from_yaml() {
        let v: Vec<RawValue> = serde_yaml::from_str("- yes\n- true\n- 7\n- 2.5\n- ~\n- [a, b]\n").unwrap();
        assert_eq!(
            v,
            vec![
                RawValue::String("yes".to_string()),
                RawValue::Boolean(true),
                RawValue::Integer(7),
                RawValue::Float(2.5),
                RawValue::Other("null"),
                RawValue::Sequence(vec![
                    RawValue::String("a".to_string()),
                    RawValue::String("b".to_string()),
                ]),
            ]
        );
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(RawValue::from(1.0).shape(), "float");
        assert_eq!(RawValue::from(u64::MAX).shape(), "unsigned integer");
        assert_eq!(RawValue::from(7u64).shape(), "integer");
        assert_eq!(RawValue::Other("mapping").shape(), "mapping");
    }
}
