//! Application error types
//!
//! Unified error handling for client code built on the mapper.

use chat_mapper::{CompletedMapping, Mappable, MapperError, MappingError};

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // Payload errors
    #[error(transparent)]
    Decode(#[from] MapperError),

    #[error("Mapping {target_type} failed with {} error(s)", .errors.len())]
    Mapping {
        target_type: &'static str,
        errors: Vec<MappingError>,
    },

    // Gateway errors
    #[error("Gateway error: {0}")]
    Gateway(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get error code for logs and reports
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Mapping { .. } => "MAPPING_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the payload itself was at fault rather than the client
    #[must_use]
    pub fn is_payload_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Mapping { .. })
    }

    #[must_use]
    pub fn mapping(target_type: &'static str, errors: Vec<MappingError>) -> Self {
        Self::Mapping {
            target_type,
            errors,
        }
    }

    /// Create a gateway error
    #[must_use]
    pub fn gateway(msg: impl std::fmt::Display) -> Self {
        Self::Gateway(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Accept a mapping only when it recorded no errors
    ///
    /// For callers that cannot work with a partially mapped object.
    pub fn require<T: Mappable>(mapping: CompletedMapping<T>) -> AppResult<T> {
        mapping
            .strict()
            .map_err(|errors| Self::mapping(T::TYPE_NAME, errors))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
