use std::fmt;

/// Result type for sideload-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A resource identifier string could not be split into type and id
    InvalidIdentifier(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIdentifier(raw) => {
                write!(f, "Invalid resource identifier '{}': expected TYPE|ID", raw)
            }
        }
    }
}

impl std::error::Error for Error {}
