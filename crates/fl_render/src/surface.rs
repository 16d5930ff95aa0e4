#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub width: u32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: u32, color: Color) -> Self {
        Self { width, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn top_left(&self) -> PixelPoint {
        PixelPoint {
            x: self.x,
            y: self.y,
        }
    }
}

/// Whatever the overlay is painted onto. Coordinates are image pixels.
pub trait DrawSurface {
    fn stroke_rect(&mut self, rect: PixelRect, stroke: Stroke);
    fn stroke_polygon(&mut self, points: &[PixelPoint], stroke: Stroke);
    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke);
    fn text(&mut self, anchor: PixelPoint, text: &str, color: Color);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Rect(PixelRect, Stroke),
    Polygon(Vec<PixelPoint>, Stroke),
    Line(PixelPoint, PixelPoint, Stroke),
    Text(PixelPoint, String, Color),
}

/// Keeps every call in order; used to check what a render pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> Vec<PixelRect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> Vec<&[PixelPoint]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Polygon(points, _) => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(PixelPoint, &str)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(anchor, text, _) => Some((*anchor, text.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_rect(&mut self, rect: PixelRect, stroke: Stroke) {
        self.calls.push(DrawCall::Rect(rect, stroke));
    }

    fn stroke_polygon(&mut self, points: &[PixelPoint], stroke: Stroke) {
        self.calls.push(DrawCall::Polygon(points.to_vec(), stroke));
    }

    fn line(&mut self, from: PixelPoint, to: PixelPoint, stroke: Stroke) {
        self.calls.push(DrawCall::Line(from, to, stroke));
    }

    fn text(&mut self, anchor: PixelPoint, text: &str, color: Color) {
        self.calls
            .push(DrawCall::Text(anchor, text.to_string(), color));
    }
}
