use clap::{Args, Parser, Subcommand, ValueEnum};
use fl_core::config::{DEFAULT_BUCKET, DEFAULT_DOCUMENT, DEFAULT_FLOW_DEFINITION_ARN};

#[derive(Parser)]
#[command(name = "fl_cli")]
#[command(about = "Form field overlay for analyzed document images")]
pub struct Cli {
    /// Log region diagnostics (debug level) unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch, analyze and show the document with matching fields marked.
    View {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        select: SelectArgs,
        #[arg(long = "line-style", value_enum, default_value = "outline")]
        line_style: LineStyleArg,
    },
    /// Fetch and analyze, then print resolved fields as JSON.
    Fields {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        select: SelectArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long, default_value = DEFAULT_DOCUMENT)]
    pub document: String,
    #[arg(long, default_value = DEFAULT_BUCKET)]
    pub bucket: String,
    #[arg(long = "flow-definition-arn", default_value = DEFAULT_FLOW_DEFINITION_ARN)]
    pub flow_definition_arn: String,
    #[arg(long = "no-human-loop")]
    pub no_human_loop: bool,
    #[arg(long = "content-classifier", default_value = "FreeOfAdultContent")]
    pub content_classifiers: Vec<String>,
    #[arg(long = "feature", value_enum, default_value = "forms")]
    pub features: Vec<FeatureArg>,
}

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// Target key text; `view` falls back to the signature label.
    #[arg(long)]
    pub key: Option<String>,
    #[arg(long = "match", value_enum, default_value = "contains")]
    pub match_mode: MatchArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureArg {
    Forms,
    Tables,
    Signatures,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchArg {
    Contains,
    Equals,
    All,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyleArg {
    Outline,
    Verticals,
}
