use thiserror::Error;

/// Application-level error type for the output path.
/// Rendering itself is infallible; only host-boundary I/O can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
