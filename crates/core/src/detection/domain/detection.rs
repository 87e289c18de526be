/// A detected face: pixel-space bounding box plus confidence score.
///
/// The classifier only cares whether any detection exists; geometry and
/// score are kept for diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub score: f64,
}

impl Detection {
    pub fn iou(&self, other: &Detection) -> f64 {
        let ix1 = self.x.max(other.x);
        let iy1 = self.y.max(other.y);
        let ix2 = (self.x + self.width).min(other.x + other.width);
        let iy2 = (self.y + self.height).min(other.y + other.height);

        let inter = (ix2 - ix1).max(0.0) * (iy2 - iy1).max(0.0);
        if inter == 0.0 {
            return 0.0;
        }

        let area_a = self.width * self.height;
        let area_b = other.width * other.height;
        inter / (area_a + area_b - inter)
    }
}
