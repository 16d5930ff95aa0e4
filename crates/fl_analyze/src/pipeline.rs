use crate::document_image::decode_image;
use fl_core::app_error::AppResult;
use fl_core::resolver::{resolve_fields, ResolvedFields};
use fl_core::services::{AnalyzeRequest, DocumentAnalyzer, ObjectSource};
use fl_core::types::AnalysisResult;
use image::RgbaImage;
use tracing::info;

/// A fetched, decoded and analyzed document with its fields resolved.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub image: RgbaImage,
    pub analysis: AnalysisResult,
    pub fields: ResolvedFields,
}

impl LoadedDocument {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Fetch, decode, analyze, resolve. Any failure aborts the whole load.
pub fn load_document(
    objects: &dyn ObjectSource,
    analyzer: &dyn DocumentAnalyzer,
    request: &AnalyzeRequest,
) -> AppResult<LoadedDocument> {
    let bytes = objects.fetch(&request.source)?;
    let image = decode_image(&bytes)?;
    info!(width = image.width(), height = image.height(), "decoded document image");

    let analysis = analyzer.analyze(request)?;
    let fields = resolve_fields(&analysis.regions);
    info!(fields = fields.len(), "resolved key/value fields");

    Ok(LoadedDocument {
        image,
        analysis,
        fields,
    })
}
