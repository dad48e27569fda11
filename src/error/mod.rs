mod app_error;

pub use app_error::AppError;

/// Result type shared by handlers, stores and startup code.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
