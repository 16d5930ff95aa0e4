pub mod convert;
pub mod document_image;
pub mod pipeline;
pub mod runtime;
pub mod s3_source;
pub mod textract;

pub use pipeline::{load_document, LoadedDocument};
pub use s3_source::S3ObjectSource;
pub use textract::TextractAnalyzer;
