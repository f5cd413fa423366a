//! Request document ingestion.
//!
//! A document is given either as a path to a `.yaml` or `.json` file, or as a
//! literal JSON string. Anything without one of those extensions is treated
//! as a literal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::LoadError;
use crate::model::RawValue;

/// One request: attribute names to raw values.
pub type Request = BTreeMap<String, RawValue>;

/// A request document: type declarations plus an ordered batch of requests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Declared attribute types, name to type name.
    #[serde(default)]
    pub attributes: FxHashMap<String, String>,
    /// Requests in batch order.
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Document {
    /// Parses a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    YamlFile(&'a Path),
    JsonFile(&'a Path),
    JsonText(&'a str),
}

impl<'a> Source<'a> {
    /// Picks a source for `data` by its extension (case-insensitive).
    pub fn sniff(data: &'a str) -> Self {
        let path = Path::new(data);
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") => Source::YamlFile(path),
            Some("json") => Source::JsonFile(path),
            _ => Source::JsonText(data),
        }
    }

    /// Reads and parses the document.
    pub fn read(&self) -> Result<Document, LoadError> {
        match self {
            Source::YamlFile(path) => {
                debug!(path = %path.display(), "reading YAML requests");
                Document::from_yaml_str(&read_file(path)?)
            }
            Source::JsonFile(path) => {
                debug!(path = %path.display(), "reading JSON requests");
                Document::from_json_str(&read_file(path)?)
            }
            Source::JsonText(text) => {
                debug!(len = text.len(), "parsing literal JSON requests");
                Document::from_json_str(text)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: PathBuf::from(path),
        source,
    })
}
