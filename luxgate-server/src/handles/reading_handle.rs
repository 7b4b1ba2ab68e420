use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::{Json, Router};
use luxgate_api::models::*;
use utoipa::OpenApi;

use crate::errors::{ApiError, ValidationError};
use crate::services::ReadingLog;

#[derive(Clone)]
pub struct ReadingState {
    pub reading_log: Arc<dyn ReadingLog>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_readings, create_reading),
    components(schemas(Reading, ReadingTimestamp, CreateReadingRequest, StatusResponse, ErrorResponse, ErrorBody)),
    tags((name = "log", description = "Luminosity history reported by the sensor"))
)]
pub struct ReadingApiDoc;

pub fn reading_router(reading_state: ReadingState) -> Router {
    Router::new()
        .route("/log", get(get_readings).post(create_reading))
        .route("/api-docs/openapi.json", get(reading_api_doc))
        .with_state(reading_state)
}

#[utoipa::path(
    get,
    path = "/log",
    tag = "log",
    responses(
        (status = 200, description = "Every retained reading, oldest first", body = Vec<Reading>)
    )
)]
pub async fn get_readings(State(state): State<ReadingState>) -> Json<Vec<Reading>> {
    Json(state.reading_log.list_readings().await)
}

#[utoipa::path(
    post,
    path = "/log",
    tag = "log",
    request_body = CreateReadingRequest,
    responses(
        (status = 200, description = "Reading appended", body = StatusResponse),
        (status = 400, description = "valor_luz or timestamp missing", body = ErrorResponse)
    )
)]
pub async fn create_reading(
    State(state): State<ReadingState>,
    body: Result<Json<CreateReadingRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(body) = body.map_err(ValidationError::from)?;

    let reading = state
        .reading_log
        .append_reading(body.valor_luz, body.timestamp)
        .await?;

    tracing::debug!(valor_luz = reading.valor_luz, timestamp = %reading.timestamp, "Reading appended");

    Ok(Json(StatusResponse::ok()))
}

async fn reading_api_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ReadingApiDoc::openapi())
}
