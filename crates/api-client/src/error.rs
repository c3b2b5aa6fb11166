use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The endpoint returned status {0}: {1}")]
    Status(u16, String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Whether trying the same request again could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request() || e.is_body(),
            ApiError::Status(code, _) => *code == 429 || *code >= 500,
            ApiError::Deserialization(_) => false,
        }
    }
}
