use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    /// No sentences left after normalization. No request is issued.
    #[error("No sentences to analyze")]
    EmptyInput,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Analysis service returned HTTP {0}")]
    Status(u16),

    #[error("Could not decode analysis response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LensError {
    /// Whether this failure happened at the network boundary (connection,
    /// non-success status, or an unparseable body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LensError::Transport(_) | LensError::Status(_) | LensError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LensError>;
