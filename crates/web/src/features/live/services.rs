use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::WebResult;
use crate::features::competition::services::apply_target;
use crate::hub::VIEWER_QUEUE_CAPACITY;
use crate::protocol::ClientMessage;
use crate::scheduler::{CompetitionTarget, PollingScheduler};
use crate::state::AppState;

pub async fn serve_viewer(socket: WebSocket, state: AppState) {
    let id = Uuid::new_v4();
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::channel::<Arc<str>>(VIEWER_QUEUE_CAPACITY);

    if let Err(e) = state.hub.join(id, Arc::new(tx)).await {
        warn!("Viewer {} could not join: {}", id, e);
        state.hub.leave(id).await;
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if sink.send(Message::Text(payload.to_string())).await.is_err() {
                break;
            }
        }
    });

    let scheduler = Arc::clone(&state.scheduler);
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => {
                    if let Err(e) = apply_client_message(&scheduler, &text) {
                        debug!("Ignoring frame from viewer {}: {}", id, e);
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    if state.hub.leave(id).await {
        debug!(
            "Viewer {} disconnected, {} still watching",
            id,
            state.hub.viewer_count().await
        );
    }
}

/// Parses one inbound text frame and applies it.
pub fn apply_client_message(scheduler: &PollingScheduler, text: &str) -> WebResult<CompetitionTarget> {
    match serde_json::from_str::<ClientMessage>(text)? {
        ClientMessage::Configure(target) => apply_target(scheduler, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebError;
    use crate::features::testing;

    #[test]
    fn test_configure_frame_updates_target() {
        let state = testing::state();

        let target = apply_client_message(
            &state.scheduler,
            r#"{"type":"configure","competitionId":"spring-open","federation":"USPA"}"#,
        )
        .unwrap();

        assert_eq!(target, CompetitionTarget::new("spring-open", "USPA"));
        assert_eq!(state.scheduler.target(), Some(target));
    }

    #[test]
    fn test_garbage_frame_is_rejected() {
        let state = testing::state();

        let result = apply_client_message(&state.scheduler, "not json");

        assert!(matches!(result, Err(WebError::BadRequest(_))));
        assert_eq!(state.scheduler.target(), None);
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let state = testing::state();

        let result = apply_client_message(
            &state.scheduler,
            r#"{"type":"configure","competitionId":""}"#,
        );

        assert!(matches!(result, Err(WebError::Validation(_))));
        assert_eq!(state.scheduler.target(), None);
    }
}
