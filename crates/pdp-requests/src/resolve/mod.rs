//! Attribute type resolution and value marshalling.
//!
//! An attribute's type comes from the document's declarations when present
//! ([`SymbolTable`]) and from the shape of its raw value otherwise
//! ([`infer_type`]). The raw value is then converted by the type's
//! [`Converter`].

pub mod infer;
pub mod marshal;
pub mod symbols;

pub use infer::infer_type;
pub use marshal::{converter, parse_bool, Converter};
pub use symbols::SymbolTable;

use tracing::trace;

use crate::error::AttributeError;
use crate::model::{Assignment, RawValue};

/// Resolves the type of one attribute and converts its raw value.
pub fn make_attribute(
    name: &str,
    value: &RawValue,
    symbols: &SymbolTable,
) -> Result<Assignment, AttributeError> {
    let ty = match symbols.get(name) {
        Some(ty) => ty,
        None => infer_type(value).map_err(|source| AttributeError::Unresolvable {
            name: name.to_string(),
            source,
        })?,
    };

    let convert = converter(ty).ok_or_else(|| AttributeError::UnimplementedConversion {
        name: name.to_string(),
        ty,
    })?;

    let value = convert(value).map_err(|source| AttributeError::Conversion {
        name: name.to_string(),
        ty,
        source,
    })?;

    trace!(attribute = name, ty = %ty, "resolved attribute");
    Ok(Assignment::new(name, value))
}
