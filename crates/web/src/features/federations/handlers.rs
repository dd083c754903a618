use axum::{Json, extract::State};
use storage::models::FederationSummary;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/federations",
    responses(
        (status = 200, description = "Known federations", body = Vec<FederationSummary>)
    ),
    tag = "federations"
)]
pub async fn list_federations(State(state): State<AppState>) -> Json<Vec<FederationSummary>> {
    Json(state.registry.summaries())
}
