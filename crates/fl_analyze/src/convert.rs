use aws_sdk_textract::operation::analyze_document::AnalyzeDocumentOutput;
use aws_sdk_textract::types as sdk;
use fl_core::types::{
    AnalysisResult, BlockType, BoundingBox, DocumentMetadata, EntityType, Geometry,
    HumanLoopActivation, Link, LinkKind, NormalizedPoint, Region, RegionId,
};

fn to_u32(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

fn convert_geometry(geometry: Option<&sdk::Geometry>) -> Geometry {
    let Some(geometry) = geometry else {
        return Geometry::default();
    };
    let bounding_box = geometry
        .bounding_box
        .as_ref()
        .map(|b| BoundingBox {
            width: b.width,
            height: b.height,
            left: b.left,
            top: b.top,
        })
        .unwrap_or_default();
    let polygon = geometry
        .polygon
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|p| NormalizedPoint { x: p.x, y: p.y })
        .collect();
    Geometry {
        bounding_box,
        polygon,
    }
}

fn convert_link(relationship: &sdk::Relationship) -> Option<Link> {
    let kind = relationship.r#type.as_ref()?;
    Some(Link {
        kind: LinkKind::from(kind.as_str()),
        ids: relationship
            .ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|id| RegionId(id.clone()))
            .collect(),
    })
}

/// Maps one SDK block onto a region. Relationships without a type are dropped.
pub fn block_to_region(block: &sdk::Block) -> Region {
    Region {
        id: RegionId(block.id.clone().unwrap_or_default()),
        block_type: block
            .block_type
            .as_ref()
            .map(|t| BlockType::from(t.as_str()))
            .unwrap_or_else(|| BlockType::Other(String::new())),
        text: block.text.clone(),
        confidence: block.confidence,
        geometry: convert_geometry(block.geometry.as_ref()),
        entity_types: block
            .entity_types
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| EntityType::from(e.as_str()))
            .collect(),
        links: block
            .relationships
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(convert_link)
            .collect(),
        page: to_u32(block.page),
        row_index: to_u32(block.row_index),
        column_index: to_u32(block.column_index),
        row_span: to_u32(block.row_span),
        column_span: to_u32(block.column_span),
        selection_status: block
            .selection_status
            .as_ref()
            .map(|s| s.as_str().to_string()),
    }
}

pub fn output_to_result(output: &AnalyzeDocumentOutput) -> AnalysisResult {
    AnalysisResult {
        document_metadata: output.document_metadata.as_ref().map(|m| DocumentMetadata {
            pages: to_u32(m.pages),
        }),
        regions: output
            .blocks
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(block_to_region)
            .collect(),
        human_loop: output
            .human_loop_activation_output
            .as_ref()
            .map(|h| HumanLoopActivation {
                human_loop_arn: h.human_loop_arn.clone(),
                activation_reasons: h.human_loop_activation_reasons.clone().unwrap_or_default(),
            }),
        model_version: output.analyze_document_model_version.clone(),
    }
}
