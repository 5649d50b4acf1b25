use thiserror::Error;
use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Client sent no query (missing field or empty string). HTTP 400.
    #[error("No query provided")]
    EmptyQuery,

    /// Upstream webhook answered with a status other than 200. HTTP 500.
    #[error("Webhook request failed")]
    WebhookFailed,

    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] JsonError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
