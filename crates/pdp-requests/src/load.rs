//! Request assembly: the document-level entry points.
//!
//! The symbol table is built once per document, before any request is
//! touched. Requests are then converted and encoded in order; the first
//! failing request aborts the whole batch and nothing is returned for earlier
//! requests.

use tracing::debug;

use crate::codec::encode_request_to_vec;
use crate::error::LoadError;
use crate::limits::DEFAULT_MESSAGE_SIZE;
use crate::model::{Assignment, Msg};
use crate::resolve::{make_attribute, SymbolTable};
use crate::source::{Document, Request, Source};

/// Options for [`load`] and [`Document::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Size of the buffer each request is encoded into. Requests that don't
    /// fit fail with [`crate::EncodeError::BufferOverflow`].
    pub message_size: usize,
}

impl LoadOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message buffer size.
    pub fn with_message_size(mut self, message_size: usize) -> Self {
        self.message_size = message_size;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            message_size: DEFAULT_MESSAGE_SIZE,
        }
    }
}

impl Document {
    /// Builds the symbol table for this document's declarations.
    pub fn symbols(&self) -> Result<SymbolTable, LoadError> {
        SymbolTable::build(&self.attributes)
    }

    /// Converts every request to its typed assignments, in batch order.
    pub fn assemble(&self) -> Result<Vec<Vec<Assignment>>, LoadError> {
        let symbols = self.symbols()?;
        debug!(
            declared = symbols.len(),
            requests = self.requests.len(),
            "assembling requests"
        );

        self.requests
            .iter()
            .enumerate()
            .map(|(i, request)| assemble_request(i + 1, request, &symbols))
            .collect()
    }

    /// Converts and encodes every request, one message per request.
    ///
    /// Each request is encoded as soon as it converts, so the reported index
    /// is always the first request that failed at either step.
    pub fn encode(&self, options: &LoadOptions) -> Result<Vec<Msg>, LoadError> {
        let symbols = self.symbols()?;
        debug!(
            declared = symbols.len(),
            requests = self.requests.len(),
            message_size = options.message_size,
            "encoding requests"
        );

        let mut out = Vec::with_capacity(self.requests.len());
        for (i, request) in self.requests.iter().enumerate() {
            let index = i + 1;
            let assignments = assemble_request(index, request, &symbols)?;
            let body = encode_request_to_vec(&assignments, options.message_size)
                .map_err(|source| LoadError::Encoding { index, source })?;
            debug!(request = index, bytes = body.len(), "encoded request");
            out.push(Msg { body });
        }
        Ok(out)
    }
}

fn assemble_request(
    index: usize,
    request: &Request,
    symbols: &SymbolTable,
) -> Result<Vec<Assignment>, LoadError> {
    let assignments = request
        .iter()
        .map(|(name, value)| make_attribute(name, value, symbols))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LoadError::InvalidAttribute { index, source })?;
    debug!(request = index, attributes = assignments.len(), "assembled request");
    Ok(assignments)
}

/// Loads requests from a `.yaml`/`.json` file path or a literal JSON string
/// and encodes each request into a message.
pub fn load(data: &str, options: &LoadOptions) -> Result<Vec<Msg>, LoadError> {
    Source::sniff(data).read()?.encode(options)
}
