//! Error types for request loading, attribute marshalling and the wire codec.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Type;

/// Error while parsing a domain name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("empty domain name")]
    Empty,

    #[error("empty label at byte {position}")]
    EmptyLabel { position: usize },

    #[error("label {label:?} is {len} bytes long (maximum 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("name is {len} bytes long in wire form (maximum 255)")]
    NameTooLong { len: usize },

    #[error("invalid escape sequence at byte {position}")]
    InvalidEscape { position: usize },
}

/// Error while parsing CIDR notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkParseError {
    #[error("missing '/' prefix length")]
    MissingPrefix,

    #[error("invalid IP address {0:?}")]
    InvalidAddress(String),

    #[error("invalid prefix length {0:?}")]
    InvalidPrefix(String),

    #[error("prefix length {prefix} exceeds {max}")]
    PrefixTooLong { prefix: u8, max: u8 },
}

/// Error converting a raw value to its target type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("can't marshal {shape} as {target}")]
    UnsupportedShape { target: Type, shape: &'static str },

    #[error("can't marshal {text:?} as {target}")]
    Malformed { target: Type, text: String },

    #[error("can't marshal {shape} ({value}) as {target}: out of range")]
    OutOfRange {
        target: Type,
        shape: &'static str,
        value: String,
    },

    #[error("can't marshal {shape} at {index} as string in list of strings")]
    ListElement { index: usize, shape: &'static str },

    #[error("can't marshal {text:?} as Domain: {source}")]
    Domain {
        text: String,
        #[source]
        source: DomainError,
    },
}

/// Error inferring the type of an undeclared attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    #[error("unable to infer element type of an empty sequence")]
    EmptySequence,

    #[error("type inference isn't supported for {shape}")]
    Unsupported { shape: &'static str },
}

/// Error resolving and converting a single attribute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("type of {name:?} attribute isn't defined and can't be derived: {source}")]
    Unresolvable {
        name: String,
        #[source]
        source: InferError,
    },

    #[error("marshaling hasn't been implemented for type {ty} of {name:?} attribute")]
    UnimplementedConversion { name: String, ty: Type },

    #[error("can't marshal {name:?} attribute as {ty}: {source}")]
    Conversion {
        name: String,
        ty: Type,
        #[source]
        source: ConvertError,
    },
}

impl AttributeError {
    /// Name of the attribute that failed.
    pub fn name(&self) -> &str {
        match self {
            AttributeError::Unresolvable { name, .. }
            | AttributeError::UnimplementedConversion { name, .. }
            | AttributeError::Conversion { name, .. } => name,
        }
    }
}

/// Error during message encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("message buffer too small: capacity {capacity}, need at least {needed}")]
    BufferOverflow { capacity: usize, needed: usize },

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("attribute name is empty")]
    EmptyName,
}

/// Error during message decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("unsupported format version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("varint exceeds maximum length (10 bytes)")]
    VarintTooLong,

    #[error("varint overflow (value exceeds u64)")]
    VarintOverflow,

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("invalid type tag: {tag}")]
    InvalidTypeTag { tag: u8 },

    #[error("invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("invalid address family: {family}")]
    InvalidAddressFamily { family: u8 },

    #[error("network prefix {prefix} exceeds {max}")]
    InvalidPrefix { prefix: u8, max: u8 },

    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] DomainError),

    #[error("{count} trailing bytes after last assignment")]
    TrailingBytes { count: usize },
}

/// Error loading a request document.
///
/// `Io`, `Json` and `Yaml` are document-level failures that happen before any
/// attribute is looked at. Every other variant names the request (1-based) or
/// declaration it came from.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("can't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown type {type_name:?} of {name:?} attribute")]
    UnknownDeclaredType { name: String, type_name: String },

    #[error("invalid attribute in request {index}: {source}")]
    InvalidAttribute {
        index: usize,
        #[source]
        source: AttributeError,
    },

    #[error("can't create request {index}: {source}")]
    Encoding {
        index: usize,
        #[source]
        source: EncodeError,
    },
}

impl LoadError {
    /// Returns the 1-based index of the failing request, if any.
    pub fn request_index(&self) -> Option<usize> {
        match self {
            LoadError::InvalidAttribute { index, .. } | LoadError::Encoding { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// Returns true for failures to read or parse the document itself.
    pub fn is_document_error(&self) -> bool {
        matches!(self, LoadError::Io { .. } | LoadError::Json(_) | LoadError::Yaml(_))
    }
}
