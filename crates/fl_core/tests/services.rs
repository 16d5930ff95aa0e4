use fl_core::services::{
    AnalyzeRequest, ContentClassifier, DocumentSource, FeatureKind, HumanLoopSettings,
};

#[test]
fn human_loop_is_named_after_the_epoch_and_trims_the_arn() {
    let settings = HumanLoopSettings::for_run(
        "  arn:aws:sagemaker:us-east-1:123456789012:flow-definition/review ",
        1641530461,
        vec![ContentClassifier::FreeOfAdultContent],
    )
    .expect("settings");

    assert_eq!(settings.human_loop_name, "human-loop-name-1641530461");
    assert_eq!(
        settings.flow_definition_arn,
        "arn:aws:sagemaker:us-east-1:123456789012:flow-definition/review"
    );
    assert_eq!(
        settings.content_classifiers,
        vec![ContentClassifier::FreeOfAdultContent]
    );
}

#[test]
fn blank_flow_definition_arn_is_rejected() {
    let err = HumanLoopSettings::for_run("   ", 1641530461, Vec::new())
        .expect_err("blank arn must fail");
    assert_eq!(err.code, "FL_HUMAN_LOOP_INVALID");
    assert_eq!(err.category, "config");
    assert!(!err.retryable);
}

#[test]
fn content_classifiers_parse_by_name() {
    assert_eq!(
        ContentClassifier::parse(" FreeOfPersonallyIdentifiableInformation ")
            .expect("classifier"),
        ContentClassifier::FreeOfPersonallyIdentifiableInformation
    );
    let err = ContentClassifier::parse("FreeOfGlitter").expect_err("unknown classifier");
    assert_eq!(err.code, "FL_HUMAN_LOOP_INVALID");
    assert_eq!(err.details["classifier"], "FreeOfGlitter");
}

#[test]
fn forms_request_has_no_review_loop() {
    let request = AnalyzeRequest::forms(DocumentSource::new("bucket", "scan.jpg"));
    assert_eq!(request.features, vec![FeatureKind::Forms]);
    assert!(request.human_loop.is_none());
    assert_eq!(request.source.display(), "s3://bucket/scan.jpg");
}
