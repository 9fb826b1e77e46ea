use thiserror::Error;

/// Service-level errors for the binaries and the settings layer.
///
/// Transaction-level rejections are NOT errors: the parser reports them as
/// `EraseReason` values. Only I/O and malformed input surface here.
#[derive(Error, Debug)]
pub enum SwapLensError {
    #[error("Configuration error: {0}")] Config(String),

    #[error("Invalid input: {0}")] Input(String),

    #[error("Serialization error: {0}")] Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")] Io(#[from] std::io::Error),
}

pub type SwapLensResult<T> = Result<T, SwapLensError>;
