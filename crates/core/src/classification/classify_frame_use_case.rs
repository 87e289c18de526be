use crate::classification::error::ClassifyError;
use crate::classification::frame_decoder;
use crate::classification::frame_payload;
use crate::classification::verdict::Verdict;
use crate::detection::domain::face_detector::FaceDetector;

/// Single-frame classification pipeline: parse → decode → detect → label.
///
/// `execute` never fails outward; every hard failure collapses into a
/// `Neutral` verdict carrying diagnostic text, and the distinguished cause
/// is logged before it is flattened.
pub struct ClassifyFrameUseCase {
    detector: Box<dyn FaceDetector>,
}

impl ClassifyFrameUseCase {
    pub fn new(detector: Box<dyn FaceDetector>) -> Self {
        Self { detector }
    }

    /// Classify one stdin payload into a verdict.
    pub fn execute(&mut self, input: &str) -> Verdict {
        match self.classify(input) {
            Ok(verdict) => verdict,
            Err(e) => {
                log::error!("classification failed: {e}");
                Verdict::failure(e.to_string())
            }
        }
    }

    fn classify(&mut self, input: &str) -> Result<Verdict, ClassifyError> {
        let image_bytes = frame_payload::decode_payload(input)?;

        // Undecodable image bytes are the graceful path: plain Neutral,
        // no error field, unlike the hard failures above and below.
        let Some(frame) = frame_decoder::decode_frame(&image_bytes) else {
            return Ok(Verdict::neutral());
        };

        let detections = self
            .detector
            .detect(&frame)
            .map_err(|e| ClassifyError::Detection(e.to_string()))?;

        if detections.is_empty() {
            Ok(Verdict::neutral())
        } else {
            log::debug!("{} face(s) detected", detections.len());
            Ok(Verdict::engaged())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection::Detection;
    use crate::shared::frame::Frame;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use std::io::Cursor;

    // --- Stubs ---

    struct FixedDetector {
        detections: Vec<Detection>,
    }

    impl FaceDetector for FixedDetector {
        fn detect(&mut self, _frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
            Ok(self.detections.clone())
        }
    }

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(&mut self, _frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
            Err("session died".into())
        }
    }

    fn face_at_origin() -> Detection {
        Detection {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 50.0,
            score: 0.9,
        }
    }

    fn png_data_uri() -> String {
        let img = image::RgbImage::from_pixel(16, 16, image::Rgb([80, 90, 100]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(buf.into_inner()))
    }

    fn use_case(detections: Vec<Detection>) -> ClassifyFrameUseCase {
        ClassifyFrameUseCase::new(Box::new(FixedDetector { detections }))
    }

    // --- Happy paths ---

    #[test]
    fn test_face_detected_is_engaged() {
        let mut uc = use_case(vec![face_at_origin()]);
        let verdict = uc.execute(&png_data_uri());
        assert_eq!(verdict.to_json(), r#"{"emotion":"Engaged"}"#);
    }

    #[test]
    fn test_no_face_is_neutral() {
        let mut uc = use_case(vec![]);
        let verdict = uc.execute(&png_data_uri());
        assert_eq!(verdict.to_json(), r#"{"emotion":"Neutral"}"#);
    }

    #[test]
    fn test_multiple_faces_still_engaged() {
        let mut uc = use_case(vec![face_at_origin(), face_at_origin()]);
        let verdict = uc.execute(&png_data_uri());
        assert_eq!(verdict.to_json(), r#"{"emotion":"Engaged"}"#);
    }

    // --- Graceful empty decode ---

    #[test]
    fn test_non_image_payload_is_plain_neutral() {
        // "aGVsbG8=" is valid base64 for "hello", which is not an image.
        let mut uc = use_case(vec![face_at_origin()]);
        let verdict = uc.execute("data:image/png;base64,aGVsbG8=");
        assert_eq!(verdict.to_json(), r#"{"emotion":"Neutral"}"#);
    }

    // --- Hard failures ---

    #[test]
    fn test_missing_comma_reports_error() {
        let mut uc = use_case(vec![]);
        let verdict = uc.execute("no separator here");
        let json = verdict.to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["emotion"], "Neutral");
        assert!(!value["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_base64_reports_error() {
        let mut uc = use_case(vec![]);
        let verdict = uc.execute("data:image/png;base64,@@@not-base64@@@");
        let value: serde_json::Value = serde_json::from_str(&verdict.to_json()).unwrap();
        assert_eq!(value["emotion"], "Neutral");
        assert!(!value["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_detector_failure_reports_error() {
        let mut uc = ClassifyFrameUseCase::new(Box::new(FailingDetector));
        let verdict = uc.execute(&png_data_uri());
        let value: serde_json::Value = serde_json::from_str(&verdict.to_json()).unwrap();
        assert_eq!(value["emotion"], "Neutral");
        assert!(value["error"].as_str().unwrap().contains("session died"));
    }

    #[test]
    fn test_output_has_only_expected_keys() {
        let mut uc = use_case(vec![]);
        for input in [png_data_uri().as_str(), "garbage", "data:,aGVsbG8="] {
            let value: serde_json::Value =
                serde_json::from_str(&uc.execute(input).to_json()).unwrap();
            let obj = value.as_object().unwrap();
            assert!(obj.contains_key("emotion"));
            assert!(obj.keys().all(|k| k == "emotion" || k == "error"));
        }
    }
}
