use crate::app_error::{AppError, AppResult};
use crate::types::AnalysisResult;
use serde::{Deserialize, Serialize};

/// An object in a storage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    pub bucket: String,
    pub document: String,
}

impl DocumentSource {
    pub fn new(bucket: &str, document: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            document: document.to_string(),
        }
    }

    pub fn display(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.document)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Forms,
    Tables,
    Signatures,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forms => "FORMS",
            Self::Tables => "TABLES",
            Self::Signatures => "SIGNATURES",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentClassifier {
    FreeOfAdultContent,
    FreeOfPersonallyIdentifiableInformation,
}

impl ContentClassifier {
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.trim() {
            "FreeOfAdultContent" => Ok(Self::FreeOfAdultContent),
            "FreeOfPersonallyIdentifiableInformation" => {
                Ok(Self::FreeOfPersonallyIdentifiableInformation)
            }
            other => Err(AppError::new(
                "FL_HUMAN_LOOP_INVALID",
                "config",
                "unknown content classifier",
                false,
                serde_json::json!({
                    "classifier": other,
                    "allowed": ["FreeOfAdultContent", "FreeOfPersonallyIdentifiableInformation"]
                }),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeOfAdultContent => "FreeOfAdultContent",
            Self::FreeOfPersonallyIdentifiableInformation => {
                "FreeOfPersonallyIdentifiableInformation"
            }
        }
    }
}

/// Routing of low-confidence results to a human review workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanLoopSettings {
    pub flow_definition_arn: String,
    pub human_loop_name: String,
    pub content_classifiers: Vec<ContentClassifier>,
}

impl HumanLoopSettings {
    /// Settings for one run, named after `now_secs` so every run gets a fresh loop.
    pub fn for_run(
        flow_definition_arn: &str,
        now_secs: u64,
        content_classifiers: Vec<ContentClassifier>,
    ) -> AppResult<Self> {
        if flow_definition_arn.trim().is_empty() {
            return Err(AppError::new(
                "FL_HUMAN_LOOP_INVALID",
                "config",
                "flow definition arn is required for a human loop",
                false,
                serde_json::json!({}),
            ));
        }
        Ok(Self {
            flow_definition_arn: flow_definition_arn.trim().to_string(),
            human_loop_name: format!("human-loop-name-{now_secs}"),
            content_classifiers,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub source: DocumentSource,
    pub features: Vec<FeatureKind>,
    pub human_loop: Option<HumanLoopSettings>,
}

impl AnalyzeRequest {
    /// Form extraction only, no review loop.
    pub fn forms(source: DocumentSource) -> Self {
        Self {
            source,
            features: vec![FeatureKind::Forms],
            human_loop: None,
        }
    }
}

/// Retrieves raw object bytes.
pub trait ObjectSource {
    fn fetch(&self, source: &DocumentSource) -> AppResult<Vec<u8>>;
}

/// Submits a stored document for analysis.
pub trait DocumentAnalyzer {
    fn analyze(&self, request: &AnalyzeRequest) -> AppResult<AnalysisResult>;
}
