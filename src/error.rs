//! Error types for the FIFA API client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FifaError>;

#[derive(Error, Debug)]
pub enum FifaError {
    #[error("{parameter} is required but was not provided")]
    MissingParameter { parameter: &'static str },

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("FIFA API returned {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Invalid query parameters: {message}")]
    InvalidQuery { message: String },

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Failure raised by a [`Transport`](crate::core::transport::Transport) before any
/// status code was received.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FifaError {
    /// Status code for [`FifaError::Upstream`], `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            FifaError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
