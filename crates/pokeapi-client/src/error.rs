use thiserror::Error;

/// Errors that can occur while talking to PokeAPI
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport level failure (DNS, TLS, timeout, connection reset)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The resource does not exist
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Any other non-success status
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON we expected
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
