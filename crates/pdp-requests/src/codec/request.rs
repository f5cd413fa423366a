//! Request message encoding/decoding.
//!
//! A message is one request's assignment list:
//!
//! ```text
//! u8      format version
//! varint  assignment count
//! repeat:
//!   varint + bytes   attribute name
//!   u8               type tag
//!   payload          per type
//! ```

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{FORMAT_VERSION, MAX_ASSIGNMENTS, MAX_LIST_LEN, MAX_NAME_LEN, MAX_STRING_LEN};
use crate::model::{Assignment, AttributeValue, DomainName, IpNetwork, Type};

const FAMILY_V4: u8 = 4;
const FAMILY_V6: u8 = 6;

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a request's assignments into `buf`, returning the encoded length.
///
/// `buf` is not grown: a message that doesn't fit fails with
/// [`EncodeError::BufferOverflow`].
pub fn encode_request(assignments: &[Assignment], buf: &mut [u8]) -> Result<usize, EncodeError> {
    if assignments.len() > MAX_ASSIGNMENTS {
        return Err(EncodeError::LengthExceedsLimit {
            field: "assignments",
            len: assignments.len(),
            max: MAX_ASSIGNMENTS,
        });
    }

    let mut writer = Writer::new(buf);
    writer.write_byte(FORMAT_VERSION)?;
    writer.write_varint(assignments.len() as u64)?;
    for assignment in assignments {
        encode_assignment(&mut writer, assignment)?;
    }
    Ok(writer.len())
}

/// Encodes a request into a freshly allocated message of at most `capacity` bytes.
pub fn encode_request_to_vec(assignments: &[Assignment], capacity: usize) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![0u8; capacity];
    let n = encode_request(assignments, &mut buf)?;
    buf.truncate(n);
    Ok(buf)
}

fn encode_assignment(writer: &mut Writer<'_>, assignment: &Assignment) -> Result<(), EncodeError> {
    if assignment.name.is_empty() {
        return Err(EncodeError::EmptyName);
    }
    writer.write_str(&assignment.name, MAX_NAME_LEN, "name")?;
    writer.write_byte(assignment.value.type_of() as u8)?;
    encode_value(writer, &assignment.value)
}

/// Encodes a value payload (without its type tag).
pub fn encode_value(writer: &mut Writer<'_>, value: &AttributeValue) -> Result<(), EncodeError> {
    match value {
        AttributeValue::Boolean(b) => writer.write_byte(u8::from(*b)),
        AttributeValue::String(s) => writer.write_str(s, MAX_STRING_LEN, "string"),
        AttributeValue::Integer(i) => writer.write_signed_varint(*i),
        AttributeValue::Float(f) => writer.write_f64(*f),
        AttributeValue::Address(addr) => encode_addr(writer, addr),
        AttributeValue::Network(net) => {
            let addr = net.addr();
            writer.write_byte(family(&addr))?;
            writer.write_byte(net.prefix())?;
            write_addr_bytes(writer, &addr)
        }
        AttributeValue::Domain(d) => writer.write_str(d.as_str(), MAX_STRING_LEN, "domain"),
        AttributeValue::ListOfStrings(list) => {
            if list.len() > MAX_LIST_LEN {
                return Err(EncodeError::LengthExceedsLimit {
                    field: "list",
                    len: list.len(),
                    max: MAX_LIST_LEN,
                });
            }
            writer.write_varint(list.len() as u64)?;
            for s in list {
                writer.write_str(s, MAX_STRING_LEN, "list item")?;
            }
            Ok(())
        }
    }
}

fn family(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => FAMILY_V4,
        IpAddr::V6(_) => FAMILY_V6,
    }
}

fn encode_addr(writer: &mut Writer<'_>, addr: &IpAddr) -> Result<(), EncodeError> {
    writer.write_byte(family(addr))?;
    write_addr_bytes(writer, addr)
}

fn write_addr_bytes(writer: &mut Writer<'_>, addr: &IpAddr) -> Result<(), EncodeError> {
    match addr {
        IpAddr::V4(v4) => writer.write_bytes(&v4.octets()),
        IpAddr::V6(v6) => writer.write_bytes(&v6.octets()),
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a request message back into its assignments.
pub fn decode_request(input: &[u8]) -> Result<Vec<Assignment>, DecodeError> {
    let mut reader = Reader::new(input);

    let version = reader.read_byte("version")?;
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }

    let count = reader.read_len(MAX_ASSIGNMENTS, "assignments")?;
    // Each assignment takes at least 3 bytes; don't trust the count for allocation.
    let mut assignments = Vec::with_capacity(count.min(reader.remaining_len() / 3));
    for _ in 0..count {
        assignments.push(decode_assignment(&mut reader)?);
    }

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            count: reader.remaining_len(),
        });
    }
    Ok(assignments)
}

fn decode_assignment(reader: &mut Reader<'_>) -> Result<Assignment, DecodeError> {
    let name = reader.read_str(MAX_NAME_LEN, "name")?;
    let tag = reader.read_byte("type")?;
    let ty = Type::from_u8(tag).ok_or(DecodeError::InvalidTypeTag { tag })?;
    let value = decode_value(reader, ty)?;
    Ok(Assignment::new(name, value))
}

/// Decodes a value payload of a known type.
pub fn decode_value(reader: &mut Reader<'_>, ty: Type) -> Result<AttributeValue, DecodeError> {
    match ty {
        Type::Boolean => match reader.read_byte("boolean")? {
            0x00 => Ok(AttributeValue::Boolean(false)),
            0x01 => Ok(AttributeValue::Boolean(true)),
            value => Err(DecodeError::InvalidBool { value }),
        },
        Type::String => Ok(AttributeValue::String(
            reader.read_str(MAX_STRING_LEN, "string")?.to_string(),
        )),
        Type::Integer => Ok(AttributeValue::Integer(reader.read_signed_varint("integer")?)),
        Type::Float => Ok(AttributeValue::Float(reader.read_f64("float")?)),
        Type::Address => {
            let family = reader.read_byte("address.family")?;
            Ok(AttributeValue::Address(read_addr(reader, family, "address")?))
        }
        Type::Network => {
            let family = reader.read_byte("network.family")?;
            let prefix = reader.read_byte("network.prefix")?;
            let addr = read_addr(reader, family, "network")?;
            let max = if addr.is_ipv4() { 32 } else { 128 };
            let net = IpNetwork::new(addr, prefix).map_err(|_| DecodeError::InvalidPrefix { prefix, max })?;
            Ok(AttributeValue::Network(net))
        }
        Type::Domain => {
            let text = reader.read_str(MAX_STRING_LEN, "domain")?;
            Ok(AttributeValue::Domain(DomainName::parse(text)?))
        }
        Type::ListOfStrings => {
            let count = reader.read_len(MAX_LIST_LEN, "list")?;
            let mut list = Vec::with_capacity(count.min(reader.remaining_len()));
            for _ in 0..count {
                list.push(reader.read_str(MAX_STRING_LEN, "list item")?.to_string());
            }
            Ok(AttributeValue::ListOfStrings(list))
        }
        Type::Undefined => Err(DecodeError::InvalidTypeTag { tag: 0 }),
    }
}

fn read_addr(reader: &mut Reader<'_>, family: u8, context: &'static str) -> Result<IpAddr, DecodeError> {
    match family {
        FAMILY_V4 => Ok(IpAddr::V4(Ipv4Addr::from(reader.read_array::<4>(context)?))),
        FAMILY_V6 => Ok(IpAddr::V6(Ipv6Addr::from(reader.read_array::<16>(context)?))),
        _ => Err(DecodeError::InvalidAddressFamily { family }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::limits::DEFAULT_MESSAGE_SIZE;

    fn roundtrip(assignments: &[Assignment]) -> Vec<Assignment> {
        let bytes = encode_request_to_vec(assignments, DEFAULT_MESSAGE_SIZE).unwrap();
        decode_request(&bytes).unwrap()
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_roundtrip_canonical_values() {
        let assignments = vec![
            Assignment::new("b", AttributeValue::Boolean(true)),
            Assignment::new("i", AttributeValue::Integer(42)),
            Assignment::new("f", AttributeValue::Float(3.14)),
            Assignment::new("s", AttributeValue::String("x".to_string())),
            Assignment::new(
                "l",
                AttributeValue::ListOfStrings(vec!["a".to_string(), "b".to_string()]),
            ),
        ];
        assert_eq!(roundtrip(&assignments), assignments);
    }

    #[test]
    fn test_roundtrip_network_values() {
        let assignments = vec![
            Assignment::new("a4", AttributeValue::Address("192.0.2.1".parse().unwrap())),
            Assignment::new("a6", AttributeValue::Address("2001:db8::1".parse().unwrap())),
            Assignment::new("n4", AttributeValue::Network("10.0.0.0/24".parse().unwrap())),
            Assignment::new("n6", AttributeValue::Network("2001:db8::/48".parse().unwrap())),
            Assignment::new("d", AttributeValue::Domain(DomainName::parse("Example.com").unwrap())),
            Assignment::new("e", AttributeValue::ListOfStrings(vec![])),
        ];
        assert_eq!(roundtrip(&assignments), assignments);
    }

    #[test]
    fn test_encoded_layout() {
        let assignments = vec![Assignment::new("x", AttributeValue::Integer(-1))];
        let bytes = encode_request_to_vec(&assignments, 64).unwrap();
        // version, count, name len, name, tag, zigzag(-1)
        assert_eq!(bytes, vec![FORMAT_VERSION, 1, 1, b'x', Type::Integer as u8, 1]);
    }

    #[test]
    fn test_empty_request() {
        let bytes = encode_request_to_vec(&[], 8).unwrap();
        assert_eq!(bytes, vec![FORMAT_VERSION, 0]);
        assert!(decode_request(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_buffer_too_small() {
        let assignments = vec![Assignment::new(
            "long",
            AttributeValue::String("y".repeat(100)),
        )];
        let err = encode_request_to_vec(&assignments, 32).unwrap_err();
        assert!(matches!(err, EncodeError::BufferOverflow { capacity: 32, .. }));
    }

    #[test]
    fn test_name_limits() {
        let empty = vec![Assignment::new("", AttributeValue::Boolean(true))];
        assert_eq!(encode_request_to_vec(&empty, 64), Err(EncodeError::EmptyName));

        let long = vec![Assignment::new("n".repeat(256), AttributeValue::Boolean(true))];
        assert!(matches!(
            encode_request_to_vec(&long, 1024),
            Err(EncodeError::LengthExceedsLimit { field: "name", len: 256, .. })
        ));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode_request(&[]), Err(DecodeError::UnexpectedEof { context: "version" }));
        assert_eq!(
            decode_request(&[9, 0]),
            Err(DecodeError::UnsupportedVersion { version: 9 })
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 1, 1, b'x', 0xEE]),
            Err(DecodeError::InvalidTypeTag { tag: 0xEE })
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 1, 1, b'x', Type::Boolean as u8, 2]),
            Err(DecodeError::InvalidBool { value: 2 })
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 1, 1, b'x', Type::Address as u8, 5, 1, 2, 3, 4]),
            Err(DecodeError::InvalidAddressFamily { family: 5 })
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 1, 1, b'x', Type::Network as u8, 4, 33, 10, 0, 0, 0]),
            Err(DecodeError::InvalidPrefix { prefix: 33, max: 32 })
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 1, 1, b'x', Type::Domain as u8, 2, b'.', b'.']),
            Err(DecodeError::InvalidDomain(DomainError::EmptyLabel { position: 0 }))
        );
        assert_eq!(
            decode_request(&[FORMAT_VERSION, 0, 0xAA]),
            Err(DecodeError::TrailingBytes { count: 1 })
        );
    }
}
