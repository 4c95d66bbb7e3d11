use serde_json::Value;
use sideload_types::Envelope;
use std::collections::HashSet;
use std::path::Path;

use super::mapper::map_document;
use super::schema::{RawDocument, json_kind};
use crate::{Error, Result};

/// Decode a response body into an envelope
///
/// Fails only when the body is not a JSON object, lacks top-level `data`,
/// has a `data` that is neither object nor array, or has a primary resource
/// without an identity. Every other irregularity degrades softly.
pub fn decode_document(body: &[u8]) -> Result<Envelope> {
    // Parsed to a Value first: the derived struct would also accept a JSON array.
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(Error::NotAnObject(json_kind(&value)));
    }
    let raw: RawDocument = serde_json::from_value(value)?;
    let envelope = map_document(raw)?;
    warn_duplicate_primaries(&envelope);

    tracing::debug!(
        kind = envelope.kind(),
        primary = envelope.primary().len(),
        included = envelope.included().len(),
        "decoded document"
    );
    Ok(envelope)
}

pub fn decode_str(body: &str) -> Result<Envelope> {
    decode_document(body.as_bytes())
}

/// Decode and require a single-resource envelope
pub fn decode_single(body: &[u8]) -> Result<Envelope> {
    require_shape(decode_document(body)?, "single")
}

/// Decode and require a collection envelope
pub fn decode_collection(body: &[u8]) -> Result<Envelope> {
    require_shape(decode_document(body)?, "collection")
}

/// Read a saved response body from disk and decode it
pub fn decode_file(path: &Path) -> Result<Envelope> {
    let body = std::fs::read(path)?;
    decode_document(&body)
}

fn require_shape(envelope: Envelope, expected: &'static str) -> Result<Envelope> {
    if envelope.kind() == expected {
        Ok(envelope)
    } else {
        Err(Error::UnexpectedShape {
            expected,
            found: envelope.kind(),
        })
    }
}

// Servers guarantee unique primary identities; a repeat is logged, not fatal.
fn warn_duplicate_primaries(envelope: &Envelope) {
    let mut seen = HashSet::new();
    for resource in envelope.primary() {
        if !seen.insert(resource.identifier()) {
            tracing::warn!(resource = %resource.identifier(), "duplicate primary resource");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(decode_str("not json"), Err(Error::Json(_))));
        assert!(matches!(decode_str(""), Err(Error::Json(_))));
        assert!(matches!(
            decode_str("[1, 2]"),
            Err(Error::NotAnObject("an array"))
        ));
    }

    #[test]
    fn test_shape_requirements() {
        let single = br#"{"data": {"type": "widgets", "id": "1"}}"#;
        let collection = br#"{"data": [{"type": "widgets", "id": "1"}]}"#;

        assert!(decode_single(single).is_ok());
        assert!(decode_collection(collection).is_ok());

        let err = decode_single(collection).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Decode error: expected a single document, found a collection document"
        );
        assert!(matches!(
            decode_collection(single),
            Err(Error::UnexpectedShape { .. })
        ));
    }

    #[test]
    fn test_decode_file_missing_is_io_error() {
        let result = decode_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
