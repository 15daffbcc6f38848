//! Error types

use thiserror::Error;

/// Failure modes for loading the remote dataset.
///
/// `Display` text is what the UI shows after "Failed to load APOD
/// data. ", so each variant reads as a sentence fragment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered outside the 2xx range.
    #[error("HTTP {0}")]
    Status(u16),

    /// Request never produced a response (offline, DNS, CORS).
    #[error("{0}")]
    Network(String),

    /// Response arrived but the body was not the expected JSON array.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Result alias for dataset loading.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
