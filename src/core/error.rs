//! core/error.rs
//! One error type for everything under `core`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The remote listener was asked to start without a signed-in session.
    #[error("Authentication required: sign in before subscribing to a profile")]
    AuthenticationRequired,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audio output error: {0}")]
    Audio(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Remote read failed: {0}")]
    Remote(String),

    #[error("Remote record decode failed: {0}")]
    RemoteDecode(#[from] serde_json::Error),
}

impl From<ureq::Error> for AppError {
    fn from(error: ureq::Error) -> Self {
        AppError::Remote(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
