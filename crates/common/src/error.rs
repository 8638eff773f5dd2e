use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid upload: {0}")]
    InvalidInput(String),

    #[error("Photo decode error: {0}")]
    Decode(String),

    #[error("Photo encode error: {0}")]
    Encode(String),

    #[error("Roster store error: {0}")]
    Store(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wrap a storage backend failure.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Error::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
