use super::{GatewayError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Resource not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
