use std::fmt;

/// Result type for sideload-document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a document
///
/// Only the document envelope can fail. Attribute coercion and relationship
/// resolution degrade to empty values instead of erroring.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed while reading a body from disk
    Io(std::io::Error),

    /// Body is not well-formed JSON
    Json(serde_json::Error),

    /// Body is JSON, but the top-level value is not an object
    NotAnObject(&'static str),

    /// Top-level `data` key is absent
    MissingData,

    /// Top-level `data` is neither an object nor an array
    InvalidData(&'static str),

    /// Document decoded, but with the other envelope shape than the caller required
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    /// Sparse fieldset argument could not be parsed
    Fieldset(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::NotAnObject(found) => write!(
                f,
                "Decode error: document must be a JSON object, found {}",
                found
            ),
            Error::MissingData => write!(f, "Decode error: document has no top-level 'data'"),
            Error::InvalidData(found) => write!(
                f,
                "Decode error: top-level 'data' must be an object or array, found {}",
                found
            ),
            Error::UnexpectedShape { expected, found } => write!(
                f,
                "Decode error: expected a {} document, found a {} document",
                expected, found
            ),
            Error::Fieldset(msg) => write!(f, "Invalid fieldset: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::NotAnObject(_)
            | Error::MissingData
            | Error::InvalidData(_)
            | Error::UnexpectedShape { .. }
            | Error::Fieldset(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
