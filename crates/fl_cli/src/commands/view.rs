use crate::cli::{LineStyleArg, SelectArgs, SourceArgs};
use crate::commands::load::{load, selector};
use fl_core::app_error::AppResult;
use fl_core::config::DEFAULT_TARGET_KEY;
use fl_render::overlay::{LineStyle, OverlayOptions};
use fl_render::viewer::{run_viewer, ViewerDocument};

pub fn run_view(
    source: &SourceArgs,
    select: &SelectArgs,
    line_style: LineStyleArg,
) -> AppResult<()> {
    let loaded = load(source)?;
    let options = OverlayOptions {
        line_style: match line_style {
            LineStyleArg::Outline => LineStyle::Outline,
            LineStyleArg::Verticals => LineStyle::Verticals,
        },
        ..OverlayOptions::default()
    };

    run_viewer(ViewerDocument {
        title: format!("s3://{}/{}", source.bucket, source.document),
        image: loaded.image,
        fields: loaded.fields,
        selector: selector(select, Some(DEFAULT_TARGET_KEY)),
        options,
    })
}
