// src/fetch/error.rs
// =============================================================================
// Errors that can happen while downloading an image or a page.
//
// None of these stop the program. The crawler logs them and moves on to
// the next URL, so they only need to carry enough detail for a useful
// log line.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - From<T>: Lets the ? operator convert reqwest errors automatically
// =============================================================================

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed, or is not http/https
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server did not answer within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// DNS failure, connection refused, TLS handshake failure...
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(StatusCode),

    /// Any other transport error (body read, decoding)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Creating the output directory or writing the file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}

// Sorts reqwest errors into our categories
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::Connect(error)
        } else if let Some(status) = error.status() {
            FetchError::Status(status)
        } else {
            FetchError::Network(error)
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[error("...")] do?
//    - thiserror turns it into a Display impl
//    - {0} is the first tuple field, {source} a named field
//
// 2. What does #[source] do?
//    - It exposes the underlying error through Error::source(), so
//      `{:#}` in anyhow prints the whole chain
// -----------------------------------------------------------------------------
