//! README content decoding
//!
//! The contents endpoint of the hosting service delivers README bodies as
//! base64 with embedded line breaks. This core only decodes; fetching and
//! rendering belong to the caller.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Error decoding base64 README content
#[derive(Error, Debug)]
pub enum ReadmeDecodeError {
    #[error("Invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Decode base64-encoded README content into text.
///
/// Whitespace is stripped first; the service wraps encoded content in
/// newlines.
pub fn decode_readme(encoded: &str) -> Result<String, ReadmeDecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
