use fl_core::app_error::{AppError, AppResult};

/// Drives one SDK future to completion on a throwaway current-thread runtime.
pub fn run_async<T>(fut: impl std::future::Future<Output = AppResult<T>>) -> AppResult<T> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            AppError::new(
                "FL_RUNTIME_FAILED",
                "runtime",
                "failed creating async runtime",
                false,
                serde_json::json!({ "error": e.to_string() }),
            )
        })?;
    rt.block_on(fut)
}
