use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

/// Startup and serve-loop failures. Request extraction errors stay axum's own rejections.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: String, #[source] source: std::io::Error },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
