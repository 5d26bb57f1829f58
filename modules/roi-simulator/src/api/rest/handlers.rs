//! REST handlers for the ROI simulator.
//!
//! Handlers are thin: parse input, call the domain service, map errors.

use axum::extract::{Path, State};
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use super::dto::{
    CreateScenarioResponse, ScenarioDto, ScenarioListResponse, SimulateResponse, StatusResponse,
};
use super::error::ApiResult;
use super::routes::AppState;

/// GET /api/health - liveness probe.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::new("ok"))
}

/// POST /api/simulate - validate inputs and compute the projection.
#[tracing::instrument(skip(state, payload))]
pub async fn simulate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<SimulateResponse>> {
    let (_, results) = state.service.simulate(&payload)?;
    Ok(Json(SimulateResponse {
        inputs: payload,
        results: results.into(),
    }))
}

/// POST /api/scenarios - validate, compute, and persist a named scenario.
#[tracing::instrument(skip(state, payload))]
pub async fn create_scenario(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<impl IntoResponse> {
    let scenario = state.service.create_scenario(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateScenarioResponse {
            id: scenario.id,
            status: "created".to_owned(),
        }),
    ))
}

/// GET /api/scenarios - list persisted scenarios, newest first.
#[tracing::instrument(skip(state))]
pub async fn list_scenarios(
    State(state): State<AppState>,
) -> ApiResult<Json<ScenarioListResponse>> {
    let scenarios = state.service.list_scenarios().await?;
    Ok(Json(ScenarioListResponse {
        scenarios: scenarios.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/scenarios/{id} - full persisted record including raw JSON.
#[tracing::instrument(skip(state), fields(scenario_id = id))]
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ScenarioDto>> {
    let scenario = state.service.get_scenario(id).await?;
    Ok(Json(scenario.into()))
}

/// DELETE /api/scenarios/{id} - delete by id.
#[tracing::instrument(skip(state), fields(scenario_id = id))]
pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<StatusResponse>> {
    state.service.delete_scenario(id).await?;
    Ok(Json(StatusResponse::new("deleted")))
}

/// POST /api/report/generate - validate, compute, and stream the report
/// document as a download.
#[tracing::instrument(skip(state, payload))]
pub async fn generate_report(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<impl IntoResponse> {
    let doc = state.service.generate_report(&payload)?;
    Ok((
        [
            (header::CONTENT_TYPE, doc.content_type.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.filename),
            ),
        ],
        doc.body,
    ))
}
