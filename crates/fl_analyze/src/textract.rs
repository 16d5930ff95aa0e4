use crate::convert::output_to_result;
use crate::runtime::run_async;
use aws_sdk_textract::types::{
    ContentClassifier as SdkClassifier, Document, FeatureType, HumanLoopConfig,
    HumanLoopDataAttributes, S3Object,
};
use fl_core::app_error::{AppError, AppResult};
use fl_core::config::AwsSettings;
use fl_core::services::{
    AnalyzeRequest, ContentClassifier, DocumentAnalyzer, DocumentSource, FeatureKind,
    HumanLoopSettings,
};
use fl_core::types::AnalysisResult;
use std::path::PathBuf;
use tracing::info;

pub const EMULATED_ANALYSIS_SUFFIX: &str = ".analysis.json";

/// Calls Textract `AnalyzeDocument` on an object already stored in S3.
///
/// With an emulation root the response is read from
/// `<root>/<bucket>/<document>.analysis.json` instead, in the service's JSON shape.
#[derive(Debug, Clone)]
pub struct TextractAnalyzer {
    pub endpoint_url: Option<String>,
    pub region: String,
    pub emulate_root: Option<PathBuf>,
}

fn feature_type(kind: FeatureKind) -> FeatureType {
    match kind {
        FeatureKind::Forms => FeatureType::Forms,
        FeatureKind::Tables => FeatureType::Tables,
        FeatureKind::Signatures => FeatureType::Signatures,
    }
}

fn content_classifier(classifier: ContentClassifier) -> SdkClassifier {
    match classifier {
        ContentClassifier::FreeOfAdultContent => SdkClassifier::FreeOfAdultContent,
        ContentClassifier::FreeOfPersonallyIdentifiableInformation => {
            SdkClassifier::FreeOfPersonallyIdentifiableInformation
        }
    }
}

/// Review-loop settings as the SDK request structure.
pub fn human_loop_config(settings: &HumanLoopSettings) -> AppResult<HumanLoopConfig> {
    let attributes = settings
        .content_classifiers
        .iter()
        .fold(HumanLoopDataAttributes::builder(), |b, c| {
            b.content_classifiers(content_classifier(*c))
        })
        .build();
    HumanLoopConfig::builder()
        .human_loop_name(&settings.human_loop_name)
        .flow_definition_arn(&settings.flow_definition_arn)
        .data_attributes(attributes)
        .build()
        .map_err(|e| {
            AppError::new(
                "FL_HUMAN_LOOP_INVALID",
                "config",
                "invalid human loop configuration",
                false,
                serde_json::json!({
                    "error": e.to_string(),
                    "flow_definition_arn": settings.flow_definition_arn
                }),
            )
        })
}

impl TextractAnalyzer {
    pub fn new(settings: &AwsSettings) -> Self {
        Self {
            endpoint_url: settings.textract_endpoint.clone(),
            region: settings.region.clone(),
            emulate_root: settings.emulate_root.clone(),
        }
    }

    pub fn emulated_path(&self, source: &DocumentSource) -> Option<PathBuf> {
        self.emulate_root.as_ref().map(|root| {
            root.join(&source.bucket)
                .join(format!("{}{}", source.document, EMULATED_ANALYSIS_SUFFIX))
        })
    }

    async fn build_client(
        endpoint_url: Option<String>,
        region: String,
    ) -> aws_sdk_textract::Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_textract::config::Region::new(region));
        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let cfg = loader.load().await;
        aws_sdk_textract::Client::new(&cfg)
    }

    fn read_emulated(path: PathBuf, source: &DocumentSource) -> AppResult<AnalysisResult> {
        if !path.exists() {
            return Err(AppError::new(
                "FL_ANALYSIS_NOT_FOUND",
                "analyze",
                "emulated analysis response not found",
                false,
                serde_json::json!({ "path": path, "source": source.display() }),
            ));
        }
        let bytes = std::fs::read(&path).map_err(|e| {
            AppError::new(
                "FL_EMULATED_READ_FAILED",
                "analyze",
                "failed reading emulated analysis response",
                false,
                serde_json::json!({ "error": e.to_string(), "path": path }),
            )
        })?;
        serde_json::from_slice::<AnalysisResult>(&bytes).map_err(|e| {
            AppError::new(
                "FL_ANALYSIS_PARSE_FAILED",
                "analyze",
                "failed parsing emulated analysis response",
                false,
                serde_json::json!({ "error": e.to_string(), "path": path }),
            )
        })
    }
}

impl DocumentAnalyzer for TextractAnalyzer {
    fn analyze(&self, request: &AnalyzeRequest) -> AppResult<AnalysisResult> {
        // Review config is checked on the emulated path too.
        let loop_config = request
            .human_loop
            .as_ref()
            .map(human_loop_config)
            .transpose()?;

        let result = if let Some(path) = self.emulated_path(&request.source) {
            Self::read_emulated(path, &request.source)?
        } else {
            let endpoint = self.endpoint_url.clone();
            let region = self.region.clone();
            let source = &request.source;
            let features = &request.features;
            run_async(async move {
                let client = Self::build_client(endpoint, region).await;
                let document = Document::builder()
                    .s3_object(
                        S3Object::builder()
                            .bucket(&source.bucket)
                            .name(&source.document)
                            .build(),
                    )
                    .build();
                let call = features
                    .iter()
                    .fold(client.analyze_document().document(document), |call, f| {
                        call.feature_types(feature_type(*f))
                    })
                    .set_human_loop_config(loop_config);
                let out = call.send().await.map_err(|e| {
                    AppError::remote(
                        "FL_ANALYZE",
                        "analyze",
                        "document analysis failed",
                        &aws_sdk_textract::error::DisplayErrorContext(&e).to_string(),
                        serde_json::json!({ "bucket": source.bucket, "key": source.document }),
                    )
                })?;
                Ok(output_to_result(&out))
            })?
        };

        info!(
            source = %request.source.display(),
            regions = result.regions.len(),
            pages = ?result.page_count(),
            model_version = ?result.model_version,
            "document analyzed"
        );
        if let Some(activation) = &result.human_loop {
            info!(
                human_loop_arn = ?activation.human_loop_arn,
                reasons = ?activation.activation_reasons,
                "human review loop activated"
            );
        }
        Ok(result)
    }
}
