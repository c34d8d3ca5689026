use std::fmt;

/// Result type for agentstack-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a catalog
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Catalog document is not valid JSON or has the wrong shape
    Json(serde_json::Error),

    /// Catalog content violates a data contract (duplicate id, empty name, ...)
    InvalidCatalog(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Catalog parse error: {}", err),
            Error::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidCatalog(_) => None,
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
