//! Builtin attribute types.
//!
//! The set of types is fixed. Declarations in a document refer to them by
//! key (`"integer"`, `"list of strings"`, ...), case-insensitively.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Semantic type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    /// Sentinel for failed resolution. Never produced by a conversion.
    Undefined = 0,
    Boolean = 1,
    String = 2,
    Integer = 3,
    Float = 4,
    Address = 5,
    Network = 6,
    Domain = 7,
    ListOfStrings = 8,
}

lazy_static! {
    /// Registry of builtin types by lowercase key.
    pub static ref BUILTIN_TYPES: FxHashMap<&'static str, Type> =
        Type::ALL.iter().map(|t| (t.key(), *t)).collect();
}

impl Type {
    /// Every type a declaration may name.
    pub const ALL: [Type; 8] = [
        Type::Boolean,
        Type::String,
        Type::Integer,
        Type::Float,
        Type::Address,
        Type::Network,
        Type::Domain,
        Type::ListOfStrings,
    ];

    /// Lowercase key used in attribute declarations.
    pub fn key(self) -> &'static str {
        match self {
            Type::Undefined => "undefined",
            Type::Boolean => "boolean",
            Type::String => "string",
            Type::Integer => "integer",
            Type::Float => "float",
            Type::Address => "address",
            Type::Network => "network",
            Type::Domain => "domain",
            Type::ListOfStrings => "list of strings",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Type::Undefined => "Undefined",
            Type::Boolean => "Boolean",
            Type::String => "String",
            Type::Integer => "Integer",
            Type::Float => "Float",
            Type::Address => "Address",
            Type::Network => "Network",
            Type::Domain => "Domain",
            Type::ListOfStrings => "List of Strings",
        }
    }

    /// Looks up a builtin type by declaration key. Matching ignores case.
    ///
    /// `Undefined` is not a declarable type and is never returned.
    pub fn from_key(key: &str) -> Option<Type> {
        BUILTIN_TYPES.get(key.to_lowercase().as_str()).copied()
    }

    /// Creates a Type from its wire tag.
    pub fn from_u8(v: u8) -> Option<Type> {
        match v {
            1 => Some(Type::Boolean),
            2 => Some(Type::String),
            3 => Some(Type::Integer),
            4 => Some(Type::Float),
            5 => Some(Type::Address),
            6 => Some(Type::Network),
            7 => Some(Type::Domain),
            8 => Some(Type::ListOfStrings),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_ignores_case() {
        assert_eq!(Type::from_key("integer"), Some(Type::Integer));
        assert_eq!(Type::from_key("Integer"), Some(Type::Integer));
        assert_eq!(Type::from_key("LIST OF STRINGS"), Some(Type::ListOfStrings));
        assert_eq!(Type::from_key("Network"), Some(Type::Network));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(Type::from_key("undefined"), None);
        assert_eq!(Type::from_key("int"), None);
        assert_eq!(Type::from_key("set of strings"), None);
        assert_eq!(Type::from_key(""), None);
    }

    #[test]
    fn test_wire_tags() {
        for t in Type::ALL {
            assert_eq!(Type::from_u8(t as u8), Some(t));
        }
        assert_eq!(Type::from_u8(0), None);
        assert_eq!(Type::from_u8(9), None);
    }

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(BUILTIN_TYPES.len(), Type::ALL.len());
        assert!(!BUILTIN_TYPES.contains_key("undefined"));
    }
}
