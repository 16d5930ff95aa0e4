use crate::cli::{SelectArgs, SourceArgs};
use crate::commands::load::{load, selector};
use fl_core::app_error::AppResult;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct FieldValue {
    id: String,
    block_type: String,
    text: Option<String>,
    confidence: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ImageDims {
    width: u32,
    height: u32,
}

#[derive(Debug, Serialize)]
struct FieldsReport {
    document: String,
    bucket: String,
    image: ImageDims,
    fields: BTreeMap<String, Vec<FieldValue>>,
}

pub fn run_fields(source: &SourceArgs, select: &SelectArgs) -> AppResult<()> {
    let loaded = load(source)?;
    let filter = selector(select, None);
    let (width, height) = loaded.dimensions();

    let fields = loaded
        .fields
        .select(&filter)
        .map(|(key, values)| {
            let values = values
                .iter()
                .map(|region| FieldValue {
                    id: region.id.to_string(),
                    block_type: region.block_type.to_string(),
                    text: region.text.clone(),
                    confidence: region.confidence,
                })
                .collect();
            (key.to_string(), values)
        })
        .collect();

    let report = FieldsReport {
        document: source.document.clone(),
        bucket: source.bucket.clone(),
        image: ImageDims { width, height },
        fields,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    );
    Ok(())
}
