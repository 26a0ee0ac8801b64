//! Error types for the OMDb client.

use moviedb_core::error::MovieDbError;

/// Errors from talking to the OMDb API.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("OMDb API key is not configured (set OMDB_API_KEY)")]
    MissingApiKey,
    #[error("HTTP client error: {0}")]
    ClientInit(String),
    #[error("Could not reach OMDb: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OMDb returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected OMDb response: {0}")]
    Decode(String),
}

impl From<LookupError> for MovieDbError {
    fn from(err: LookupError) -> Self {
        MovieDbError::LookupUnavailable(err.to_string())
    }
}
