use std::sync::Arc;
use storage::SnapshotStore;
use storage::models::FederationRegistry;

use crate::hub::BroadcastHub;
use crate::scheduler::PollingScheduler;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnapshotStore>,
    pub hub: Arc<BroadcastHub>,
    pub scheduler: Arc<PollingScheduler>,
    pub registry: Arc<FederationRegistry>,
}
