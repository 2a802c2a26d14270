use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur while compressing a single payload.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Failed to serialize aggregated output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CompressError {
    pub fn log_error(&self) {
        match self {
            CompressError::InputFormat(e) => {
                error!("Rejected payload: {}", e);
            }
            CompressError::Serialization(e) => {
                error!("Serialization of aggregated output failed: {}", e);
                debug!("Serialization error details: {:?}", e);
            }
        }
    }
}
