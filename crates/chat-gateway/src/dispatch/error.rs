//! Dispatch error types

use chat_common::AppError;
use thiserror::Error;

/// Dispatch error type
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Dispatch payload without an event name
    #[error("Dispatch payload has no event name")]
    MissingEventName,

    /// Text frame is not a valid payload
    #[error("Invalid payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        Self::gateway(err)
    }
}

/// Dispatch result type
pub type GatewayResult<T> = Result<T, GatewayError>;
