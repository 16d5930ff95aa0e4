use std::path::PathBuf;

pub const DEFAULT_DOCUMENT: &str = "1641530461707.jpg";
pub const DEFAULT_BUCKET: &str = "shiqi-detection-test";
pub const DEFAULT_FLOW_DEFINITION_ARN: &str =
    "arn:aws:sagemaker:us-east-1:742593912130:flow-definition/shiqi-test2";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TARGET_KEY: &str = "Signature of Buyer(s)";

pub const ENV_REGION: &str = "FL_AWS_REGION";
pub const ENV_S3_ENDPOINT: &str = "FL_S3_ENDPOINT";
pub const ENV_TEXTRACT_ENDPOINT: &str = "FL_TEXTRACT_ENDPOINT";
pub const ENV_EMULATE_ROOT: &str = "FL_EMULATE_ROOT";

/// Where the AWS adapters send requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: String,
    pub s3_endpoint: Option<String>,
    pub textract_endpoint: Option<String>,
    /// Local directory standing in for both S3 and Textract.
    pub emulate_root: Option<PathBuf>,
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            s3_endpoint: None,
            textract_endpoint: None,
            emulate_root: None,
        }
    }
}

impl AwsSettings {
    pub fn from_env() -> Self {
        Self {
            region: env_value(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            s3_endpoint: env_value(ENV_S3_ENDPOINT),
            textract_endpoint: env_value(ENV_TEXTRACT_ENDPOINT),
            emulate_root: env_value(ENV_EMULATE_ROOT).map(PathBuf::from),
        }
    }

    pub fn emulated(root: PathBuf) -> Self {
        Self {
            emulate_root: Some(root),
            ..Self::default()
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
