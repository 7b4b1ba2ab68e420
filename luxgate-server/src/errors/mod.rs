pub mod api;
pub mod gateway;
pub mod validation;

pub use api::ApiError;
pub use gateway::GatewayError;
pub use validation::ValidationError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use luxgate_api::models::{ErrorBody, ErrorResponse};
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, error_id) = match self {
            ApiError::ValidationError(e) => (e.status_code(), e.to_string(), None),
            ApiError::GatewayError(e) => {
                if let GatewayError::ServiceUnavailable { service, source } = &e {
                    tracing::warn!(service = %service, "Upstream unreachable: {}", source);
                }
                (e.status_code(), e.to_string(), None)
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string(), None),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: status.as_u16(),
                message,
                error_id,
            },
        });

        (status, body).into_response()
    }
}
