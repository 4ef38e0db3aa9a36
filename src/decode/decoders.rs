//! Page decoding

use super::types::{PageResponse, ResponseFormat};
use crate::error::{Error, Result};

/// Decode a response body into a [`PageResponse`].
///
/// Malformed JSON (for example a raw control character inside a string
/// literal) fails the whole page, so nothing from it reaches the output.
pub fn decode_page(body: &[u8], format: ResponseFormat) -> Result<PageResponse> {
    match format {
        ResponseFormat::Json => {
            serde_json::from_slice(body).map_err(|e| Error::decode(e.to_string()))
        }
    }
}
