use crate::surface::{PixelPoint, PixelRect};
use fl_core::types::{BoundingBox, NormalizedPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn scale(fraction: f32, extent: u32) -> i32 {
    (f64::from(fraction) * f64::from(extent)).round() as i32
}

pub fn project_point(point: NormalizedPoint, size: ImageSize) -> PixelPoint {
    PixelPoint {
        x: scale(point.x, size.width),
        y: scale(point.y, size.height),
    }
}

pub fn project_polygon(points: &[NormalizedPoint], size: ImageSize) -> Vec<PixelPoint> {
    points.iter().map(|p| project_point(*p, size)).collect()
}

/// Each edge is scaled and rounded on its own, so width and height are not derived from the
/// rounded corners.
pub fn project_box(bbox: BoundingBox, size: ImageSize) -> PixelRect {
    PixelRect {
        x: scale(bbox.left, size.width),
        y: scale(bbox.top, size.height),
        width: scale(bbox.width, size.width),
        height: scale(bbox.height, size.height),
    }
}
