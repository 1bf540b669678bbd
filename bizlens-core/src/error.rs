#[derive(Debug, thiserror::Error)]
pub enum BizlensError {
    /// The backend answered with a non-success HTTP status. Carries the
    /// human-readable message extracted from the backend's error body.
    #[error("Backend error: {0}")]
    Remote(String),

    /// The backend could not be reached at all (connection refused, DNS
    /// failure, timeout expiry).
    #[error("Connection error: {0}")]
    Connectivity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BizlensError>;
