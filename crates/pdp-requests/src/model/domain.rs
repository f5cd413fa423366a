//! Validated domain names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::DomainError;
use crate::limits::{MAX_DOMAIN_LABEL_LEN, MAX_DOMAIN_NAME_LEN};

/// A domain name that passed label and length validation.
///
/// Keeps the text as written (minus a trailing dot) for display and encoding.
/// Comparison is case-insensitive.
#[derive(Debug, Clone)]
pub struct DomainName {
    text: String,
    canonical: String,
}

impl DomainName {
    /// Parses and validates a domain name.
    ///
    /// Labels are separated by `.`; inside a label `\.` escapes a literal
    /// character and `\DDD` a decimal byte value.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let text = s.strip_suffix('.').unwrap_or(s);
        if text.is_empty() {
            return Err(DomainError::Empty);
        }

        let bytes = text.as_bytes();
        let mut canonical = String::with_capacity(text.len());
        let mut label_start = 0;
        let mut label_len = 0usize;
        let mut wire_len = 1; // root label
        let mut i = 0;

        while i <= bytes.len() {
            if i == bytes.len() || bytes[i] == b'.' {
                if label_len == 0 {
                    return Err(DomainError::EmptyLabel { position: i });
                }
                if label_len > MAX_DOMAIN_LABEL_LEN {
                    return Err(DomainError::LabelTooLong {
                        label: text[label_start..i].to_string(),
                        len: label_len,
                    });
                }
                wire_len += label_len + 1;
                if i < bytes.len() {
                    canonical.push('.');
                }
                i += 1;
                label_start = i;
                label_len = 0;
                continue;
            }

            if bytes[i] == b'\\' {
                let escape = parse_escape(bytes, i)?;
                canonical.push_str(&text[i..i + escape.consumed].to_ascii_lowercase());
                label_len += escape.wire_len;
                i += escape.consumed;
            } else {
                let ch_len = utf8_len(bytes[i]);
                canonical.push_str(&text[i..i + ch_len].to_ascii_lowercase());
                label_len += ch_len;
                i += ch_len;
            }
        }

        if wire_len > MAX_DOMAIN_NAME_LEN {
            return Err(DomainError::NameTooLong { len: wire_len });
        }

        Ok(Self {
            text: text.to_string(),
            canonical,
        })
    }

    /// Returns the name as written, without a trailing dot.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the lowercase form used for comparison.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

struct Escape {
    /// Bytes of text the escape spans, backslash included.
    consumed: usize,
    /// Bytes the escaped character takes in wire form.
    wire_len: usize,
}

/// Parses the escape sequence starting at the backslash at `i`.
///
/// `\DDD` is a single byte; `\X` is X itself.
fn parse_escape(bytes: &[u8], i: usize) -> Result<Escape, DomainError> {
    let rest = &bytes[i + 1..];
    match rest.first() {
        None => Err(DomainError::InvalidEscape { position: i }),
        Some(b) if b.is_ascii_digit() => {
            if rest.len() < 3 || !rest[..3].iter().all(u8::is_ascii_digit) {
                return Err(DomainError::InvalidEscape { position: i });
            }
            let value = rest[..3]
                .iter()
                .fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32);
            if value > 255 {
                return Err(DomainError::InvalidEscape { position: i });
            }
            Ok(Escape {
                consumed: 4,
                wire_len: 1,
            })
        }
        Some(b) => {
            let len = utf8_len(*b);
            Ok(Escape {
                consumed: 1 + len,
                wire_len: len,
            })
        }
    }
}

fn utf8_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainName::parse(s)
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
