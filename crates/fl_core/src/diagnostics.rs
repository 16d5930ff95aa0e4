use crate::types::{BlockType, Region};
use tracing::{debug, field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub row: Option<u32>,
    pub column: Option<u32>,
    pub row_span: Option<u32>,
    pub column_span: Option<u32>,
}

/// Cell coordinates, present only for CELL regions.
pub fn cell_position(region: &Region) -> Option<CellPosition> {
    (region.block_type == BlockType::Cell).then(|| CellPosition {
        row: region.row_index,
        column: region.column_index,
        row_span: region.row_span,
        column_span: region.column_span,
    })
}

/// `CHILD[a,b]; VALUE[c]`, or `none` when the region has no links.
pub fn describe_links(region: &Region) -> String {
    if region.links.is_empty() {
        return "none".to_string();
    }
    region
        .links
        .iter()
        .map(|link| {
            let ids = link
                .ids
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(",");
            format!("{}[{}]", link.kind, ids)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn describe_entities(region: &Region) -> String {
    if region.entity_types.is_empty() {
        return "none".to_string();
    }
    region
        .entity_types
        .iter()
        .map(|entity| entity.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn describe_index(index: Option<u32>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}

/// Emits one structured debug event describing `region`.
///
/// `confidence` is left out for PAGE regions and `cell` for anything but CELL regions.
pub fn log_region(region: &Region) {
    let confidence = match region.block_type {
        BlockType::Page => None,
        _ => region.confidence,
    };
    let cell = cell_position(region).map(|c| {
        field::display(format!(
            "row={} column={} row_span={} column_span={}",
            describe_index(c.row),
            describe_index(c.column),
            describe_index(c.row_span),
            describe_index(c.column_span)
        ))
    });
    let bbox = region.geometry.bounding_box;
    let polygon = region
        .geometry
        .polygon
        .iter()
        .map(|p| format!("({:.4},{:.4})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(
        id = %region.id,
        block_type = %region.block_type,
        text = region.text.as_deref().unwrap_or(""),
        confidence,
        cell,
        links = %describe_links(region),
        bounding_box = %format!(
            "left={:.4} top={:.4} width={:.4} height={:.4}",
            bbox.left, bbox.top, bbox.width, bbox.height
        ),
        polygon = %polygon,
        entity_types = %describe_entities(region),
        page = ?region.page,
        "region"
    );
}
