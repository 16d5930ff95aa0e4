use crate::projection::{project_box, project_polygon, ImageSize};
use crate::surface::{Color, DrawSurface, Stroke};
use fl_core::diagnostics::log_region;
use fl_core::resolver::ResolvedFields;
use fl_core::selection::KeySelector;
use fl_core::types::{BlockType, Region};
use tracing::trace;

pub const MARKER_GREEN: Color = Color::rgb(0, 212, 0);
pub const OUTLINE_BLACK: Color = Color::rgb(0, 0, 0);
pub const EDGE_RED: Color = Color::rgb(255, 0, 0);

/// How LINE regions are marked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    /// Closed polygon through all corners.
    #[default]
    Outline,
    /// Left edge (corner 0 to 3) and right edge (corner 1 to 2) only.
    Verticals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayOptions {
    pub line_style: LineStyle,
    pub word_stroke: Stroke,
    pub line_stroke: Stroke,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Outline,
            word_stroke: Stroke::new(1, MARKER_GREEN),
            line_stroke: Stroke::new(1, OUTLINE_BLACK),
        }
    }
}

/// Integer part of a 0-100 confidence score.
pub fn confidence_label(confidence: f32) -> String {
    (confidence.trunc() as i64).to_string()
}

fn draw_verticals(region: &Region, size: ImageSize, surface: &mut dyn DrawSurface) {
    let corners = project_polygon(&region.geometry.polygon, size);
    if corners.len() < 4 {
        return;
    }
    surface.line(corners[0], corners[3], Stroke::new(2, MARKER_GREEN));
    surface.line(corners[1], corners[2], Stroke::new(2, EDGE_RED));
}

/// Draws the marker for one region. Categories without a marker draw nothing.
pub fn render_region(
    region: &Region,
    size: ImageSize,
    surface: &mut dyn DrawSurface,
    options: &OverlayOptions,
) {
    match region.block_type {
        BlockType::Line => match options.line_style {
            LineStyle::Outline => {
                let points = project_polygon(&region.geometry.polygon, size);
                if !points.is_empty() {
                    surface.stroke_polygon(&points, options.line_stroke);
                }
            }
            LineStyle::Verticals => draw_verticals(region, size, surface),
        },
        BlockType::Word => {
            let rect = project_box(region.geometry.bounding_box, size);
            surface.stroke_rect(rect, options.word_stroke);
            if let Some(confidence) = region.confidence {
                surface.text(
                    rect.top_left(),
                    &confidence_label(confidence),
                    options.word_stroke.color,
                );
            }
        }
        BlockType::Page
        | BlockType::KeyValueSet
        | BlockType::Table
        | BlockType::Cell
        | BlockType::MergedCell
        | BlockType::SelectionElement
        | BlockType::Signature
        | BlockType::Title
        | BlockType::Query
        | BlockType::QueryResult
        | BlockType::Other(_) => {}
    }
}

/// Marks every value region of every key accepted by `selector`.
///
/// Reads `fields` only; repeated calls with the same arguments issue the same calls in the
/// same order.
pub fn render_overlay(
    fields: &ResolvedFields,
    selector: &KeySelector,
    size: ImageSize,
    surface: &mut dyn DrawSurface,
    options: &OverlayOptions,
) {
    for (key, values) in fields.sorted() {
        if !selector.matches(key) {
            continue;
        }
        trace!(key, values = values.len(), "marking field");
        for region in values {
            log_region(region);
            render_region(region, size, surface, options);
        }
    }
}
