use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Domain interface for face detection.
///
/// Implementations may hold mutable runtime state (e.g. an inference
/// session), hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>>;
}
