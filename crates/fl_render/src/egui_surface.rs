use crate::surface::{Color, DrawSurface, PixelPoint, PixelRect, Stroke};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape};

/// Paints overlay markers with an egui painter, offset so pixel (0, 0) lands on `origin`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    font: FontId,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            font: FontId::proportional(12.0),
        }
    }

    fn pos(&self, point: PixelPoint) -> Pos2 {
        self.origin + egui::vec2(point.x as f32, point.y as f32)
    }
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width as f32, color32(stroke.color))
}

impl DrawSurface for EguiSurface<'_> {
    fn stroke_rect(&mut self, rect: PixelRect, style: Stroke) {
        let min = self.pos(rect.top_left());
        let area = Rect::from_min_size(min, egui::vec2(rect.width as f32, rect.height as f32));
        self.painter.rect_stroke(area, 0.0, stroke(style));
    }

    fn stroke_polygon(&mut self, points: &[PixelPoint], style: Stroke) {
        let points = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(Shape::closed_line(points, stroke(style)));
    }

    fn line(&mut self, from: PixelPoint, to: PixelPoint, style: Stroke) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], stroke(style));
    }

    // Anchored at the bottom-left so the label sits on top of the box edge.
    fn text(&mut self, anchor: PixelPoint, text: &str, color: Color) {
        self.painter.text(
            self.pos(anchor),
            Align2::LEFT_BOTTOM,
            text,
            self.font.clone(),
            color32(color),
        );
    }
}
