use crate::egui_surface::EguiSurface;
use crate::overlay::{render_overlay, OverlayOptions};
use crate::projection::ImageSize;
use fl_core::app_error::{AppError, AppResult};
use fl_core::resolver::ResolvedFields;
use fl_core::selection::KeySelector;
use image::RgbaImage;
use tracing::info;

/// Everything the window needs, computed before it opens.
pub struct ViewerDocument {
    pub title: String,
    pub image: RgbaImage,
    pub fields: ResolvedFields,
    pub selector: KeySelector,
    pub options: OverlayOptions,
}

pub struct OverlayViewer {
    texture: egui::TextureHandle,
    size: ImageSize,
    fields: ResolvedFields,
    selector: KeySelector,
    options: OverlayOptions,
}

impl OverlayViewer {
    pub fn new(ctx: &egui::Context, document: ViewerDocument) -> Self {
        let size = ImageSize::new(document.image.width(), document.image.height());
        let pixels = egui::ColorImage::from_rgba_unmultiplied(
            [size.width as usize, size.height as usize],
            document.image.as_raw(),
        );
        let texture = ctx.load_texture("document", pixels, egui::TextureOptions::LINEAR);
        Self {
            texture,
            size,
            fields: document.fields,
            selector: document.selector,
            options: document.options,
        }
    }
}

impl eframe::App for OverlayViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let extent = egui::vec2(self.size.width as f32, self.size.height as f32);
                    let (rect, _) = ui.allocate_exact_size(extent, egui::Sense::hover());
                    let painter = ui.painter_at(rect);
                    painter.image(
                        self.texture.id(),
                        rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                    let mut surface = EguiSurface::new(&painter, rect.min);
                    render_overlay(
                        &self.fields,
                        &self.selector,
                        self.size,
                        &mut surface,
                        &self.options,
                    );
                });
            });
    }
}

/// Opens the window and blocks until it is closed.
pub fn run_viewer(document: ViewerDocument) -> AppResult<()> {
    let (width, height) = document.image.dimensions();
    let title = document.title.clone();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([width as f32, height as f32])
            .with_resizable(true),
        ..Default::default()
    };

    info!(width, height, "opening viewer");
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc: &eframe::CreationContext<'_>| {
            Ok(Box::new(OverlayViewer::new(&cc.egui_ctx, document)) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| {
        AppError::new(
            "FL_VIEWER_FAILED",
            "viewer",
            "viewer window failed",
            false,
            serde_json::json!({ "error": e.to_string() }),
        )
    })
}
