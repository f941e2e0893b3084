//! Error types for the headline scraper.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Errors that can occur while fetching a page or saving its headlines.
///
/// Extraction itself never fails: a page without matching elements simply
/// produces an empty [`Headlines`](crate::Headlines) value.
#[derive(Error, Debug)]
pub enum ScraperError {
    /// The page could not be fetched, either because of a transport failure
    /// or because the server answered with a non-success status.
    #[error("Error fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Writing the headline file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the console report failed
    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    /// Headlines could not be serialized as JSON
    #[error("Failed to serialize headlines: {0}")]
    Json(#[from] serde_json::Error),
}
