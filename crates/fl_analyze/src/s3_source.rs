use crate::runtime::run_async;
use fl_core::app_error::{AppError, AppResult};
use fl_core::config::AwsSettings;
use fl_core::services::{DocumentSource, ObjectSource};
use std::path::PathBuf;
use tracing::info;

/// Reads document objects from S3, or from `<emulate_root>/<bucket>/<key>` when emulated.
#[derive(Debug, Clone)]
pub struct S3ObjectSource {
    pub endpoint_url: Option<String>,
    pub region: String,
    pub emulate_root: Option<PathBuf>,
}

impl S3ObjectSource {
    pub fn new(settings: &AwsSettings) -> Self {
        Self {
            endpoint_url: settings.s3_endpoint.clone(),
            region: settings.region.clone(),
            emulate_root: settings.emulate_root.clone(),
        }
    }

    fn emulated_path(&self, source: &DocumentSource) -> Option<PathBuf> {
        self.emulate_root
            .as_ref()
            .map(|root| root.join(&source.bucket).join(&source.document))
    }

    async fn build_client(endpoint_url: Option<String>, region: String) -> aws_sdk_s3::Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region));
        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let cfg = loader.load().await;
        aws_sdk_s3::Client::new(&cfg)
    }

    fn is_not_found(message: &str) -> bool {
        message.contains("NoSuchKey")
            || message.contains("NotFound")
            || message.contains("status: 404")
    }

    fn not_found(source: &DocumentSource) -> AppError {
        AppError::new(
            "FL_OBJECT_NOT_FOUND",
            "storage",
            "document object not found",
            false,
            serde_json::json!({ "bucket": source.bucket, "key": source.document }),
        )
    }

    fn read_emulated(&self, path: PathBuf, source: &DocumentSource) -> AppResult<Vec<u8>> {
        if !path.exists() {
            return Err(Self::not_found(source));
        }
        std::fs::read(&path).map_err(|e| {
            AppError::new(
                "FL_EMULATED_READ_FAILED",
                "storage",
                "failed reading emulated s3 object",
                false,
                serde_json::json!({ "error": e.to_string(), "path": path }),
            )
        })
    }
}

impl ObjectSource for S3ObjectSource {
    fn fetch(&self, source: &DocumentSource) -> AppResult<Vec<u8>> {
        if let Some(path) = self.emulated_path(source) {
            let bytes = self.read_emulated(path, source)?;
            info!(source = %source.display(), bytes = bytes.len(), "read emulated object");
            return Ok(bytes);
        }

        let endpoint = self.endpoint_url.clone();
        let region = self.region.clone();
        let bytes = run_async(async move {
            let client = Self::build_client(endpoint, region).await;
            let out = client
                .get_object()
                .bucket(&source.bucket)
                .key(&source.document)
                .send()
                .await
                .map_err(|e| {
                    let msg = aws_sdk_s3::error::DisplayErrorContext(&e).to_string();
                    if Self::is_not_found(&msg) {
                        Self::not_found(source)
                    } else {
                        AppError::remote(
                            "FL_S3",
                            "storage",
                            "failed reading s3 object",
                            &msg,
                            serde_json::json!({ "bucket": source.bucket, "key": source.document }),
                        )
                    }
                })?;
            let body = out.body.collect().await.map_err(|e| {
                AppError::remote(
                    "FL_S3",
                    "storage",
                    "failed collecting s3 response body",
                    &e.to_string(),
                    serde_json::json!({ "bucket": source.bucket, "key": source.document }),
                )
            })?;
            Ok(body.into_bytes().to_vec())
        })?;
        info!(source = %source.display(), bytes = bytes.len(), "fetched object");
        Ok(bytes)
    }
}
