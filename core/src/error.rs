//! Error types for the portfolio API client.
//!
//! # Design
//! One variant per failure stage of a request cycle: the network call itself
//! (`Transport`), the status line (`Http`, carrying the raw status and body
//! text for display), the body decode (`Decode`), and the backend's own
//! `{"error": …}` payload delivered with a 2xx status (`Application`).
//! The view layer shows every variant as `Error: {Display}`, so the `Display`
//! strings below are part of the rendered output contract.

use std::fmt;

/// Errors returned by `PortfolioClient` parse and fetch methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The network call could not complete (unreachable host, dropped
    /// connection, unreadable body).
    Transport(String),

    /// The server returned a status outside the 2xx range.
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    Decode(String),

    /// The server answered 2xx but the body was an `{"error": …}` payload.
    /// The message is displayed verbatim, matching how the page showed it.
    Application(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "decode failed: {msg}"),
            ApiError::Application(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
