#[derive(Debug, thiserror::Error)]
pub enum AcError {
    #[cfg(feature = "network")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("data source returned HTTP {status}: {url}")]
    Api { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid dataset: {0}")]
    Invalid(String),

    #[error("platform not found: {0}")]
    PlatformNotFound(String),

    #[error("bad config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, AcError>;
