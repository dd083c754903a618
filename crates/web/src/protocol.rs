//! JSON frames exchanged with viewers over the live socket.

use serde::{Deserialize, Serialize};
use storage::models::Snapshot;

use crate::scheduler::CompetitionTarget;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Configure(CompetitionTarget),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage<'a> {
    Initial {
        snapshot: &'a Snapshot,
        federations: &'a [String],
    },
    Update {
        snapshot: &'a Snapshot,
    },
}
