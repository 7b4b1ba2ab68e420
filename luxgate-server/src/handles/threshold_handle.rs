use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::{Json, Router};
use luxgate_api::models::*;
use utoipa::OpenApi;

use crate::errors::{ApiError, ValidationError};
use crate::services::ThresholdStore;

#[derive(Clone)]
pub struct ThresholdState {
    pub threshold_store: ThresholdStore,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_threshold, update_threshold),
    components(schemas(Threshold, UpdateThresholdRequest, UpdateThresholdResponse, ErrorResponse, ErrorBody)),
    tags((name = "config", description = "Brightness threshold driving the LED"))
)]
pub struct ThresholdApiDoc;

pub fn threshold_router(threshold_state: ThresholdState) -> Router {
    Router::new()
        .route("/config", get(get_threshold).post(update_threshold))
        .route("/api-docs/openapi.json", get(threshold_api_doc))
        .with_state(threshold_state)
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    responses(
        (status = 200, description = "Current threshold", body = Threshold)
    )
)]
pub async fn get_threshold(State(state): State<ThresholdState>) -> Json<Threshold> {
    Json(state.threshold_store.get_threshold().await)
}

#[utoipa::path(
    post,
    path = "/config",
    tag = "config",
    request_body = UpdateThresholdRequest,
    responses(
        (status = 200, description = "Threshold replaced", body = UpdateThresholdResponse),
        (status = 400, description = "Missing or non numeric limite_luz", body = ErrorResponse)
    )
)]
pub async fn update_threshold(
    State(state): State<ThresholdState>,
    body: Result<Json<UpdateThresholdRequest>, JsonRejection>,
) -> Result<Json<UpdateThresholdResponse>, ApiError> {
    let Json(body) = body.map_err(ValidationError::from)?;

    let config = state.threshold_store.set_threshold(body.limite_luz).await?;

    Ok(Json(UpdateThresholdResponse {
        status: STATUS_OK.to_string(),
        config,
    }))
}

async fn threshold_api_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ThresholdApiDoc::openapi())
}
