pub mod app_error;
pub mod config;
pub mod diagnostics;
pub mod resolver;
pub mod selection;
pub mod services;
pub mod types;

pub use app_error::{AppError, AppResult};
pub use resolver::{resolve_fields, ResolvedFields};
pub use selection::KeySelector;
