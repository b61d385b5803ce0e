//! Reversible storage obfuscation
//!
//! Keeps the journal from being readable at a glance on a shared machine.
//! This is NOT encryption: anyone with the format can decode it.
//!
//! Format: `enc_v1_` followed by the reversed standard base64 of the JSON.
//! Values without the prefix are treated as plain JSON written by older
//! versions.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Marker for obfuscated values
pub const PREFIX: &str = "enc_v1_";

/// Serialize and obfuscate a value
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    let reversed: String = STANDARD.encode(json).chars().rev().collect();
    Ok(format!("{}{}", PREFIX, reversed))
}

/// Decode a stored value, obfuscated or legacy plain JSON
///
/// An empty string decodes to `None`.
pub fn decode<T: DeserializeOwned>(stored: &str) -> Result<Option<T>> {
    if stored.is_empty() {
        return Ok(None);
    }

    let Some(body) = stored.strip_prefix(PREFIX) else {
        return Ok(Some(serde_json::from_str(stored)?));
    };

    let unreversed: String = body.chars().rev().collect();
    let json = STANDARD
        .decode(unreversed)
        .map_err(|e| Error::Codec(format!("Invalid base64 payload: {}", e)))?;
    Ok(Some(serde_json::from_slice(&json)?))
}

/// Whether a stored value carries the obfuscation prefix
pub fn is_encoded(stored: &str) -> bool {
    stored.starts_with(PREFIX)
}
