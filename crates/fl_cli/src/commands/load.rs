use crate::cli::{FeatureArg, MatchArg, SelectArgs, SourceArgs};
use fl_analyze::{load_document, LoadedDocument, S3ObjectSource, TextractAnalyzer};
use fl_core::app_error::AppResult;
use fl_core::config::AwsSettings;
use fl_core::selection::KeySelector;
use fl_core::services::{
    AnalyzeRequest, ContentClassifier, DocumentSource, FeatureKind, HumanLoopSettings,
};

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub fn analyze_request(args: &SourceArgs, now_secs: u64) -> AppResult<AnalyzeRequest> {
    let human_loop = if args.no_human_loop {
        None
    } else {
        let classifiers = args
            .content_classifiers
            .iter()
            .map(|raw| ContentClassifier::parse(raw))
            .collect::<AppResult<Vec<_>>>()?;
        Some(HumanLoopSettings::for_run(
            &args.flow_definition_arn,
            now_secs,
            classifiers,
        )?)
    };
    Ok(AnalyzeRequest {
        source: DocumentSource::new(&args.bucket, &args.document),
        features: feature_kinds(&args.features),
        human_loop,
    })
}

/// FORMS first, then the other requested kinds once each. Key/value regions only come
/// back when FORMS is requested.
fn feature_kinds(requested: &[FeatureArg]) -> Vec<FeatureKind> {
    let mut kinds = vec![FeatureKind::Forms];
    for arg in requested {
        let kind = match arg {
            FeatureArg::Forms => FeatureKind::Forms,
            FeatureArg::Tables => FeatureKind::Tables,
            FeatureArg::Signatures => FeatureKind::Signatures,
        };
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

pub fn selector(args: &SelectArgs, default_key: Option<&str>) -> KeySelector {
    let key = args.key.as_deref().or(default_key);
    match (args.match_mode, key) {
        (MatchArg::All, _) | (_, None) => KeySelector::All,
        (MatchArg::Contains, Some(key)) => KeySelector::contains(key),
        (MatchArg::Equals, Some(key)) => KeySelector::equals(key),
    }
}

pub fn load(args: &SourceArgs) -> AppResult<LoadedDocument> {
    let request = analyze_request(args, now_secs())?;
    let settings = AwsSettings::from_env();
    load_document(
        &S3ObjectSource::new(&settings),
        &TextractAnalyzer::new(&settings),
        &request,
    )
}
