use thiserror::Error;

/// Errors that can occur while building or loading a cross-reference index.
///
/// Malformed tokens and lines are never errors; they are skipped during
/// ingestion. Only whole-run failures surface here.
#[derive(Error, Debug)]
pub enum XrefError {
    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `XrefError`.
pub type Result<T> = std::result::Result<T, XrefError>;
