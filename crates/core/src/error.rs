//! Unified error types for brochure.
//!
//! Every failure on the way from a fragment path to placed markup is one of
//! these. The content loader downgrades them to fallback markup, so they are
//! only ever seen by callers of the lower-level client APIs.

/// Unified error type for fetch, extraction and page rewriting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., an unusable selector).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// A fragment path could not be turned into a fetchable URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Network failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Fetch did not complete within the configured timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Response body exceeded the configured limit.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// The fetched document has no element with the requested id.
    #[error("ELEMENT_NOT_FOUND: {element_id} in {source_path}")]
    ElementNotFound { element_id: String, source_path: String },

    /// The page has no placeholder element with the given id.
    #[error("PLACEHOLDER_MISSING: {0}")]
    PlaceholderMissing(String),

    /// Rewriting the page markup failed.
    #[error("REWRITE_FAILED: {0}")]
    RewriteFailed(String),
}

impl Error {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::InvalidUrl(_) => "INVALID_URL",
            Error::HttpError(_) => "HTTP_ERROR",
            Error::FetchTimeout(_) => "FETCH_TIMEOUT",
            Error::FetchTooLarge(_) => "FETCH_TOO_LARGE",
            Error::ElementNotFound { .. } => "ELEMENT_NOT_FOUND",
            Error::PlaceholderMissing(_) => "PLACEHOLDER_MISSING",
            Error::RewriteFailed(_) => "REWRITE_FAILED",
        }
    }
}
