use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Failed to reach ticket feed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Ticket feed responded with {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid drag: {0}")]
    InvalidDrag(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(feature = "sqlite-storage")]
impl From<rusqlite::Error> for BoardError {
    fn from(err: rusqlite::Error) -> Self {
        BoardError::StorageError(err.to_string())
    }
}
