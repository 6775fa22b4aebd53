use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// True for a 404, which PokeAPI returns for unknown IDs and type names.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
