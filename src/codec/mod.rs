//! JSON wire codec.
//!
//! The API exchanges JSON with snake_case field names and upper-case enum
//! literals. The typed resource shapes in [`crate::resources`] carry that
//! convention in their serde derives; this module provides the encode/decode
//! entry points that map codec failures into the crate error channel.
//!
//! Decoding is strict: a missing required field or an enum string outside
//! the known member set is a hard [`Deserialization`] failure naming the
//! offending field, never a silent default.
//!
//! [`Deserialization`]: crate::error::AssinaturasError::Deserialization

pub mod date;

pub use date::ApiDate;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AssinaturasError, Result};

/// Encodes a typed value into its JSON wire form.
///
/// Optional fields holding `None` are omitted from the output, except for
/// fields the resource shape marks always-present (explicit `null` carries
/// dissociation semantics on this wire).
///
/// # Errors
///
/// Returns [`AssinaturasError::InvalidArgument`] if the value cannot be
/// encoded; the request is never dispatched in that case.
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| {
        AssinaturasError::InvalidArgument(format!(
            "failed to encode {}: {e}",
            short_type_name::<T>()
        ))
    })
}

/// Decodes JSON wire text into a typed value.
///
/// # Errors
///
/// Returns [`AssinaturasError::Deserialization`] for malformed JSON, a
/// missing required field, or an unrecognized enum literal. The decoder
/// diagnostic names the offending field.
pub fn from_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AssinaturasError::Deserialization {
        context: short_type_name::<T>().to_owned(),
        message: e.to_string(),
    })
}

/// Last path segment of a type name, for error context.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
