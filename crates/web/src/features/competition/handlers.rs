use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::models::Snapshot;

use crate::error::WebError;
use crate::scheduler::CompetitionTarget;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/snapshot",
    responses(
        (status = 200, description = "Latest derived snapshot, empty before the first successful refresh", body = Snapshot)
    ),
    tag = "live"
)]
pub async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    let current = state.store.current();
    Json(Snapshot::clone(&current))
}

#[utoipa::path(
    get,
    path = "/api/competition",
    responses(
        (status = 200, description = "Competition currently being followed", body = CompetitionTarget),
        (status = 404, description = "No competition configured")
    ),
    tag = "live"
)]
pub async fn get_competition(
    State(state): State<AppState>,
) -> Result<Json<CompetitionTarget>, WebError> {
    state.scheduler.target().map(Json).ok_or(WebError::NotFound)
}

#[utoipa::path(
    put,
    path = "/api/competition",
    request_body = CompetitionTarget,
    responses(
        (status = 202, description = "Target accepted, refresh scheduled", body = CompetitionTarget),
        (status = 400, description = "Validation error")
    ),
    tag = "live"
)]
pub async fn configure_competition(
    State(state): State<AppState>,
    Json(target): Json<CompetitionTarget>,
) -> Result<Response, WebError> {
    let target = services::apply_target(&state.scheduler, target)?;

    Ok((StatusCode::ACCEPTED, Json(target)).into_response())
}
