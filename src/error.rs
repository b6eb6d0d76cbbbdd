//! Error types for backend calls and chart decoding

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
}
