use std::collections::HashMap;
use std::sync::Arc;
use storage::SnapshotStore;
use storage::models::Snapshot;
use thiserror::Error;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::protocol::ServerMessage;

pub type ViewerId = Uuid;

/// Frames queued per viewer before further updates are dropped for it.
pub const VIEWER_QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("viewer channel is closed")]
    ChannelClosed,

    #[error("viewer is {0} frames behind, frame dropped")]
    Lagging(usize),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outbound half of a viewer connection. Payloads are pre-encoded JSON so a
/// broadcast serializes the snapshot once for every viewer.
pub trait ViewerChannel: Send + Sync {
    fn deliver(&self, payload: Arc<str>) -> Result<(), HubError>;
}

/// Every frame carries a full snapshot, so a viewer whose queue is full only
/// misses intermediate states and catches up with the next one it accepts.
impl ViewerChannel for mpsc::Sender<Arc<str>> {
    fn deliver(&self, payload: Arc<str>) -> Result<(), HubError> {
        self.try_send(payload).map_err(|e| match e {
            TrySendError::Full(_) => HubError::Lagging(self.max_capacity()),
            TrySendError::Closed(_) => HubError::ChannelClosed,
        })
    }
}

/// Registry of connected viewers and fan-out of snapshots to them.
pub struct BroadcastHub {
    viewers: RwLock<HashMap<ViewerId, Arc<dyn ViewerChannel>>>,
    store: Arc<SnapshotStore>,
    federations: Vec<String>,
}

impl BroadcastHub {
    pub fn new(store: Arc<SnapshotStore>, federations: Vec<String>) -> Self {
        Self {
            viewers: RwLock::new(HashMap::new()),
            store,
            federations,
        }
    }

    /// Registers a viewer and hands it the current snapshot straight away.
    ///
    /// The registry write lock is held until the initial message is queued, so
    /// a concurrent publish can only reach this viewer after its initial frame.
    pub async fn join(&self, id: ViewerId, channel: Arc<dyn ViewerChannel>) -> Result<(), HubError> {
        let mut viewers = self.viewers.write().await;

        let snapshot = self.store.current();
        let payload = encode(&ServerMessage::Initial {
            snapshot: &snapshot,
            federations: &self.federations,
        })?;

        viewers.insert(id, Arc::clone(&channel));
        info!("Viewer {} joined, {} connected", id, viewers.len());

        channel.deliver(payload)
    }

    /// Removes a viewer. Returns whether it was still registered.
    pub async fn leave(&self, id: ViewerId) -> bool {
        let mut viewers = self.viewers.write().await;
        let removed = viewers.remove(&id).is_some();
        if removed {
            info!("Viewer {} left, {} connected", id, viewers.len());
        }
        removed
    }

    /// Sends an update to every connected viewer and returns how many
    /// accepted it. A viewer that fails is skipped but stays registered.
    pub async fn publish(&self, snapshot: &Snapshot) -> usize {
        let payload = match encode(&ServerMessage::Update { snapshot }) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode snapshot update: {}", e);
                return 0;
            }
        };

        let viewers = self.viewers.read().await;
        let mut delivered = 0;
        for (id, channel) in viewers.iter() {
            match channel.deliver(Arc::clone(&payload)) {
                Ok(()) => delivered += 1,
                Err(e) => warn!("Failed to deliver update to viewer {}: {}", id, e),
            }
        }

        debug!("Published update to {}/{} viewers", delivered, viewers.len());
        delivered
    }

    pub async fn viewer_count(&self) -> usize {
        self.viewers.read().await.len()
    }
}

fn encode(message: &ServerMessage<'_>) -> Result<Arc<str>, HubError> {
    Ok(serde_json::to_string(message)?.into())
}
