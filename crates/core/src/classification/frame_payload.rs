use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::classification::error::ClassifyError;

/// Extract and decode the base64 image bytes from a data-URI style payload.
///
/// The caller sends `"<metadata>,<base64>"` (e.g. `"data:image/png;base64,..."`).
/// Everything up to the first comma is discarded. The remainder is trimmed
/// of surrounding whitespace before decoding so a trailing newline from the
/// transport doesn't fail the decode.
pub fn decode_payload(input: &str) -> Result<Vec<u8>, ClassifyError> {
    let (_, payload) = input
        .split_once(',')
        .ok_or(ClassifyError::MissingSeparator)?;
    Ok(STANDARD.decode(payload.trim())?)
}
