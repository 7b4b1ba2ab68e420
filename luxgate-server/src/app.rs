use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handles::*;
use crate::services::{GatewayService, ReadingLog, ThresholdStore};

pub fn create_control_app(threshold_store: ThresholdStore) -> Router {
    threshold_router(ThresholdState { threshold_store })
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub fn create_logging_app(reading_log: Arc<dyn ReadingLog>) -> Router {
    reading_router(ReadingState { reading_log })
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub fn create_gateway_app(gateway_service: Arc<GatewayService>) -> Router {
    gateway_router(GatewayState { gateway_service })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
