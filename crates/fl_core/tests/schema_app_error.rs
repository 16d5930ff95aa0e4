use fl_core::app_error::{classify_remote_error, AppError};
use jsonschema::validator_for;
use serde_json::json;

fn app_error_schema() -> serde_json::Value {
    json!({
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "$id": "fl://schemas/app-error/v1",
      "type": "object",
      "required": [
        "schema_version",
        "code",
        "category",
        "message",
        "retryable",
        "details"
      ],
      "properties": {
        "schema_version": { "const": 1 },
        "code": { "type": "string", "pattern": "^FL_[A-Z0-9_]+$" },
        "category": { "type": "string" },
        "message": { "type": "string" },
        "retryable": { "type": "boolean" },
        "details": {}
      },
      "additionalProperties": false
    })
}

#[test]
fn schema_app_error_accepts_valid_payload() {
    let schema = validator_for(&app_error_schema()).expect("compile app_error schema");
    let value = serde_json::to_value(AppError::new(
        "FL_OBJECT_NOT_FOUND",
        "storage",
        "document object not found",
        false,
        json!({ "bucket": "b", "key": "k" }),
    ))
    .expect("serialize app_error");

    assert!(schema.is_valid(&value));
}

#[test]
fn schema_app_error_rejects_missing_code() {
    let schema = validator_for(&app_error_schema()).expect("compile app_error schema");
    let invalid = json!({
      "schema_version": 1,
      "category": "storage",
      "message": "missing code",
      "retryable": false,
      "details": {}
    });

    assert!(!schema.is_valid(&invalid));
}

#[test]
fn remote_errors_classify_auth_failures_as_final() {
    let err = AppError::remote(
        "FL_S3",
        "storage",
        "failed reading s3 object",
        "AccessDenied: status 403",
        json!({ "bucket": "b" }),
    );
    assert_eq!(err.code, "FL_S3_AUTH_FAILED");
    assert!(!err.retryable);
    assert_eq!(err.details["error"], "AccessDenied: status 403");
    assert_eq!(err.details["bucket"], "b");

    assert_eq!(classify_remote_error("dispatch failure: timeout"), ("NETWORK_FAILED", true));
}
