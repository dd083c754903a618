use axum::{Router, routing::get};

use crate::state::AppState;

pub mod competition;
pub mod federations;
pub mod live;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(live::routes::routes())
        .nest(
            "/api",
            Router::new()
                .merge(competition::routes::routes())
                .merge(federations::routes::routes()),
        )
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
