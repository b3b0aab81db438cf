//! Error types for the film organizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the film organizer.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("guessit not found. Install with: pip install guessit")]
    GuessitNotFound,

    #[error("OMDb API key not configured. Set omdbAPIKey in conf.json or the OMDB_API_KEY environment variable")]
    OmdbApiKeyMissing,

    #[error("OMDb API key rejected: {0}")]
    OmdbApiKeyInvalid(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to move {from}: {source}")]
    MoveFailed {
        from: String,
        #[source]
        source: std::io::Error,
    },

    // Parse errors
    #[error("guessit produced unusable output for {0}")]
    GuessFailed(String),

    // OMDb errors
    #[error("OMDb lookup failed: {0}")]
    OmdbLookup(String),

    #[error("Title not found on OMDb: {0}")]
    TitleNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
