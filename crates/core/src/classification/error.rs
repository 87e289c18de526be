use thiserror::Error;

/// Hard failures on the classification path.
///
/// These surface to the caller as a `Neutral` verdict with an `error`
/// field. A frame whose bytes simply aren't a decodable image is not a
/// hard failure; that path yields a plain `Neutral` with no error.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("input has no comma separator before the base64 payload")]
    MissingSeparator,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("face detection failed: {0}")]
    Detection(String),
}
