use thiserror::Error;

/// Top-level error type for the movie catalog.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for MovieDbError` so that the `?` operator works
/// across crate boundaries. Every variant is recoverable at the menu loop;
/// only startup failures end the process.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MovieDbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Movie '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("Movie '{title}' not found")]
    NotFound { title: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Metadata lookup unavailable: {0}")]
    LookupUnavailable(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MovieDbError {
    fn from(err: toml::de::Error) -> Self {
        MovieDbError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MovieDbError {
    fn from(err: serde_json::Error) -> Self {
        MovieDbError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, MovieDbError>;
