use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Chamber must be House or Senate, got '{0}'")]
    InvalidChamber(String),

    #[error("Congress {0} is not supported (earliest supported session is 93)")]
    UnsupportedSession(u32),

    #[error("Bill number must be a positive integer")]
    InvalidBillNumber,

    #[error("Bill not found: {0}")]
    BillNotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
