use fl_core::app_error::{AppError, AppResult};
use image::RgbaImage;

pub fn decode_image(bytes: &[u8]) -> AppResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| {
        AppError::new(
            "FL_IMAGE_DECODE_FAILED",
            "image",
            "failed decoding document image",
            false,
            serde_json::json!({ "error": e.to_string(), "bytes": bytes.len() }),
        )
    })?;
    Ok(decoded.to_rgba8())
}
