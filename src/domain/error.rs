//! Repository host errors

use thiserror::Error;

/// Errors raised by a repository host client.
///
/// These never escape past the metadata fetcher: every variant is absorbed
/// into an absent result there, so callers treat "no data" as the uniform
/// failure signal.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Host returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    Decode(String),
}
