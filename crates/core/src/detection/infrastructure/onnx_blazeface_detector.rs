/// BlazeFace face detector using ONNX Runtime via `ort`.
///
/// Runs the short-range preset (the lighter of the two BlazeFace variants,
/// tuned for webcam-distance faces) over a single frame and returns scored
/// bounding boxes.
use std::path::Path;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;

/// BlazeFace model input resolution.
const INPUT_SIZE: u32 = 128;

/// Default confidence threshold.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// NMS IoU threshold.
const NMS_IOU_THRESH: f64 = 0.3;

/// Number of BlazeFace anchors (short-range model).
const NUM_ANCHORS: usize = 896;

/// BlazeFace face detector backed by an ONNX Runtime session.
pub struct OnnxBlazefaceDetector {
    session: ort::session::Session,
    confidence: f64,
    anchors: Vec<[f32; 2]>,
}

impl OnnxBlazefaceDetector {
    /// Load a BlazeFace short-range ONNX model.
    pub fn new(model_path: &Path, confidence: f64) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?.commit_from_file(model_path)?;
        let anchors = generate_anchors();
        Ok(Self {
            session,
            confidence,
            anchors,
        })
    }
}

impl FaceDetector for OnnxBlazefaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        let input_tensor = preprocess(frame, INPUT_SIZE);

        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;

        // BlazeFace outputs two tensors:
        // - regressors: [1, 896, 16] (box deltas + keypoints)
        // - classificators: [1, 896, 1] (confidence logits)
        if outputs.len() < 2 {
            return Err(
                format!("BlazeFace model expected 2 outputs, got {}", outputs.len()).into(),
            );
        }

        let regressors = outputs[0].try_extract_array::<f32>()?;
        let scores = outputs[1].try_extract_array::<f32>()?;
        let reg_data = regressors.as_slice().ok_or("Cannot get regressor slice")?;
        let score_data = scores.as_slice().ok_or("Cannot get score slice")?;

        let candidates = decode_boxes(
            reg_data,
            score_data,
            &self.anchors,
            self.confidence,
            frame.width(),
            frame.height(),
        );

        Ok(nms(candidates, NMS_IOU_THRESH))
    }
}

// ---------------------------------------------------------------------------
// Preprocessing
// ---------------------------------------------------------------------------

/// Resize frame to `size × size` and normalize to [0,1] NCHW float32.
fn preprocess(frame: &Frame, size: u32) -> ndarray::Array4<f32> {
    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;
    let s = size as usize;

    let mut tensor = ndarray::Array4::<f32>::zeros((1, 3, s, s));

    for y in 0..s {
        let src_y = (((y as f64 + 0.5) * src_h as f64 / s as f64) as usize).min(src_h - 1);
        for x in 0..s {
            let src_x = (((x as f64 + 0.5) * src_w as f64 / s as f64) as usize).min(src_w - 1);
            for c in 0..3 {
                tensor[[0, c, y, x]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    tensor
}

// ---------------------------------------------------------------------------
// Box decoding
// ---------------------------------------------------------------------------

/// Decode anchor-relative regressor output into frame-space detections,
/// keeping only anchors whose sigmoid score clears the threshold.
fn decode_boxes(
    reg_data: &[f32],
    score_data: &[f32],
    anchors: &[[f32; 2]],
    confidence: f64,
    frame_width: u32,
    frame_height: u32,
) -> Vec<Detection> {
    let fw = frame_width as f32;
    let fh = frame_height as f32;
    let num_anchors = anchors.len().min(NUM_ANCHORS);
    let mut detections = Vec::new();

    for (i, &raw_score) in score_data.iter().enumerate().take(num_anchors) {
        let score = sigmoid(raw_score);
        if (score as f64) < confidence {
            continue;
        }

        let anchor = &anchors[i];
        let reg_offset = i * 16;
        if reg_offset + 4 > reg_data.len() {
            break;
        }

        // Box center + size relative to the anchor, in input-resolution units
        let cx = anchor[0] + reg_data[reg_offset] / INPUT_SIZE as f32;
        let cy = anchor[1] + reg_data[reg_offset + 1] / INPUT_SIZE as f32;
        let w = reg_data[reg_offset + 2] / INPUT_SIZE as f32;
        let h = reg_data[reg_offset + 3] / INPUT_SIZE as f32;

        // Back to original frame coordinates, clamped to the frame
        let x1 = ((cx - w / 2.0) * fw).max(0.0);
        let y1 = ((cy - h / 2.0) * fh).max(0.0);
        let x2 = ((cx + w / 2.0) * fw).min(fw);
        let y2 = ((cy + h / 2.0) * fh).min(fh);

        detections.push(Detection {
            x: x1 as f64,
            y: y1 as f64,
            width: (x2 - x1) as f64,
            height: (y2 - y1) as f64,
            score: score as f64,
        });
    }

    detections
}

// ---------------------------------------------------------------------------
// Anchor generation (BlazeFace short-range)
// ---------------------------------------------------------------------------

/// Generate BlazeFace anchors for the short-range model.
///
/// The short-range model uses two feature map sizes: 16×16 and 8×8,
/// with 2 and 6 anchors per cell respectively.
fn generate_anchors() -> Vec<[f32; 2]> {
    let strides = [(8, 2), (16, 6)]; // (stride, anchors_per_cell)
    let mut anchors = Vec::with_capacity(NUM_ANCHORS);

    for &(stride, num) in &strides {
        let grid_size = INPUT_SIZE as usize / stride;
        for y in 0..grid_size {
            for x in 0..grid_size {
                let cx = (x as f32 + 0.5) / grid_size as f32;
                let cy = (y as f32 + 0.5) / grid_size as f32;
                for _ in 0..num {
                    anchors.push([cx, cy]);
                }
            }
        }
    }

    anchors
}

// ---------------------------------------------------------------------------
// NMS
// ---------------------------------------------------------------------------

fn nms(mut dets: Vec<Detection>, iou_thresh: f64) -> Vec<Detection> {
    dets.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep: Vec<Detection> = Vec::new();
    for det in dets {
        let dominated = keep.iter().any(|k| det.iou(k) > iou_thresh);
        if !dominated {
            keep.push(det);
        }
    }
    keep
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
