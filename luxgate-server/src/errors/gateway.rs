use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No service is mapped to `{0}`")]
    RouteNotFound(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Service `{service}` is unavailable")]
    ServiceUnavailable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
