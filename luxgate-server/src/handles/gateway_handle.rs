use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;

use crate::errors::ApiError;
use crate::services::GatewayService;

#[derive(Clone)]
pub struct GatewayState {
    pub gateway_service: Arc<GatewayService>,
}

/// Every public path goes through the proxy; unmatched prefixes answer 404.
pub fn gateway_router(gateway_state: GatewayState) -> Router {
    Router::new().fallback(forward).with_state(gateway_state)
}

pub async fn forward(
    State(state): State<GatewayState>,
    request: Request,
) -> Result<Response, ApiError> {
    state.gateway_service.forward(request).await
}
