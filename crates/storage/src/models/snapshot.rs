use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::{Attempt, Division, Lifter, MeetInfo, Platform, Referee};

/// A complete, internally consistent view of the competition at one point in
/// time. Built wholesale each cycle and never edited after installation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub lifters: BTreeMap<String, Lifter>,
    pub attempts: BTreeMap<String, Attempt>,
    pub divisions: BTreeMap<String, Division>,
    pub platforms: BTreeMap<String, Platform>,
    pub referees: BTreeMap<String, Referee>,
    pub meet_info: Option<MeetInfo>,
    pub federation: String,
    pub last_update: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.last_update.is_none()
    }
}
