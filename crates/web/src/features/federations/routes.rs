use axum::{Router, routing::get};

use super::handlers::list_federations;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/federations", get(list_federations))
}
