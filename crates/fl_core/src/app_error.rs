use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub schema_version: u32,
    pub code: String,
    pub category: String,
    pub message: String,
    pub retryable: bool,
    pub details: Value,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: &str, category: &str, message: &str, retryable: bool, details: Value) -> Self {
        Self {
            schema_version: 1,
            code: code.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            retryable,
            details,
        }
    }

    /// Builds an error for a remote call, classifying auth failures as non-retryable.
    ///
    /// `prefix` selects the code family, e.g. `FL_S3` yields `FL_S3_AUTH_FAILED` or
    /// `FL_S3_NETWORK_FAILED`.
    pub fn remote(prefix: &str, category: &str, message: &str, error: &str, details: Value) -> Self {
        let (suffix, retryable) = classify_remote_error(error);
        let mut details = details;
        if let Value::Object(map) = &mut details {
            map.insert("error".to_string(), Value::String(error.to_string()));
        }
        Self::new(
            &format!("{prefix}_{suffix}"),
            category,
            message,
            retryable,
            details,
        )
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

pub fn classify_remote_error(message: &str) -> (&'static str, bool) {
    let lower = message.to_ascii_lowercase();
    if lower.contains("credential")
        || lower.contains("accessdenied")
        || lower.contains("signature")
        || lower.contains("unauthorized")
        || lower.contains("forbidden")
        || lower.contains("403")
    {
        ("AUTH_FAILED", false)
    } else {
        ("NETWORK_FAILED", true)
    }
}
