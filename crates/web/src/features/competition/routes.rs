use axum::{Router, routing::get};

use super::handlers::{configure_competition, get_competition, get_snapshot};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(get_snapshot))
        .route(
            "/competition",
            get(get_competition).put(configure_competition),
        )
}
