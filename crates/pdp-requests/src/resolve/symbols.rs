//! Declared attribute types.
//!
//! A document may declare the type of any attribute by name. The declarations
//! are resolved against the builtin registry once per document; a single
//! unknown type name rejects the whole document.

use rustc_hash::FxHashMap;

use crate::error::LoadError;
use crate::model::Type;

/// Attribute name to declared type.
///
/// Immutable once built. Attributes missing from the table have their type
/// inferred from the raw value.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Type>,
}

impl SymbolTable {
    /// Creates an empty symbol table. Every attribute will be inferred.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a symbol table from declared `(name, type name)` pairs.
    ///
    /// Type names are matched case-insensitively. Later duplicates of a name
    /// replace earlier ones.
    pub fn build<'a, I>(declared: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut symbols = FxHashMap::default();
        for (name, type_name) in declared {
            let ty = Type::from_key(type_name).ok_or_else(|| LoadError::UnknownDeclaredType {
                name: name.clone(),
                type_name: type_name.clone(),
            })?;
            symbols.insert(name.clone(), ty);
        }
        Ok(Self { symbols })
    }

    /// Gets the declared type of an attribute, if any.
    pub fn get(&self, name: &str) -> Option<Type> {
        self.symbols.get(name).copied()
    }

    /// Returns the number of declared attributes.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_build_resolves_types() {
        let decl = declared(&[("age", "integer"), ("net", "Network"), ("tags", "List Of Strings")]);
        let table = SymbolTable::build(decl.iter().map(|(n, t)| (n, t))).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("age"), Some(Type::Integer));
        assert_eq!(table.get("net"), Some(Type::Network));
        assert_eq!(table.get("tags"), Some(Type::ListOfStrings));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_build_unknown_type() {
        let decl = declared(&[("age", "integer"), ("x", "set of strings")]);
        let result = SymbolTable::build(decl.iter().map(|(n, t)| (n, t)));

        match result {
            Err(LoadError::UnknownDeclaredType { name, type_name }) => {
                assert_eq!(name, "x");
                assert_eq!(type_name, "set of strings");
            }
            other => panic!("expected UnknownDeclaredType, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let decl = declared(&[("a", "string"), ("a", "domain")]);
        let table = SymbolTable::build(decl.iter().map(|(n, t)| (n, t))).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(Type::Domain));
    }

    #[test]
    fn test_empty() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), None);
    }
}
