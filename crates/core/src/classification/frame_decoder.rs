use crate::shared::frame::Frame;

/// Decode raw container bytes (JPEG/PNG/...) into an RGB frame.
///
/// Returns `None` when the bytes are not a recognizable image. That is the
/// graceful empty-decode path: the caller reports a plain `Neutral` verdict
/// rather than an error. The reason is still logged so a stream of garbled
/// frames is visible to operators.
pub fn decode_frame(bytes: &[u8]) -> Option<Frame> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("frame bytes did not decode to an image: {e}");
            return None;
        }
    };

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Some(Frame::new(rgb.into_raw(), width, height, 3))
}
