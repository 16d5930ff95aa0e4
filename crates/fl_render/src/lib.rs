pub mod egui_surface;
pub mod overlay;
pub mod projection;
pub mod surface;
pub mod viewer;

pub use overlay::{render_overlay, LineStyle, OverlayOptions};
pub use projection::ImageSize;
pub use surface::{DrawSurface, RecordingSurface};
