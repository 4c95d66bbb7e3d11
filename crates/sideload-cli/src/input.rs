use crate::args::InputArgs;
use anyhow::{Context, Result, anyhow};
use sideload_document::decode_document;
use sideload_types::Envelope;
use std::io::Read;

/// Bytes of the raw body echoed back when decoding fails
pub const BODY_PREVIEW_BYTES: usize = 512;

/// A decoded response body and where it came from
pub struct LoadedDocument {
    /// Input as the user typed it (`-` for stdin), for hints
    pub source: String,
    pub envelope: Envelope,
}

pub fn read_body(input: &InputArgs) -> Result<Vec<u8>> {
    if input.is_stdin() {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("Failed to read response body from stdin")?;
        return Ok(body);
    }

    std::fs::read(&input.input)
        .with_context(|| format!("Failed to read response body: {}", input.input.display()))
}

/// Read and decode; a decode failure echoes the start of the body
pub fn load(input: &InputArgs) -> Result<LoadedDocument> {
    let body = read_body(input)?;
    tracing::debug!(bytes = body.len(), input = %input.input.display(), "read response body");

    let envelope = decode_document(&body).map_err(|err| {
        anyhow!(
            "{}\nBody (first {} bytes):\n{}",
            err,
            BODY_PREVIEW_BYTES,
            body_preview(&body)
        )
    })?;

    Ok(LoadedDocument {
        source: input.input.display().to_string(),
        envelope,
    })
}

pub fn body_preview(body: &[u8]) -> String {
    let end = body.len().min(BODY_PREVIEW_BYTES);
    String::from_utf8_lossy(&body[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_preview_caps_length() {
        let body = vec![b'x'; 2048];
        assert_eq!(body_preview(&body).len(), BODY_PREVIEW_BYTES);
        assert_eq!(body_preview(b"{}"), "{}");
    }

    #[test]
    fn test_body_preview_tolerates_split_utf8() {
        let mut body = vec![b'a'; BODY_PREVIEW_BYTES - 1];
        body.extend("é".as_bytes());
        let preview = body_preview(&body);
        assert!(preview.starts_with("aaa"));
        assert!(preview.ends_with('\u{FFFD}'));
    }
}
