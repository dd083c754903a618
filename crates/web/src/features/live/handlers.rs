use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};

use crate::state::AppState;

use super::services;

/// Upgrades to the live viewer socket. The first frame is always the
/// `initial` message; `update` frames follow every successful refresh.
pub async fn live_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| services::serve_viewer(socket, state))
}
