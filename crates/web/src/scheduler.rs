use chrono::Utc;
use importer::{DocumentSource, build_snapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use storage::SnapshotStore;
use storage::models::FederationRegistry;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::hub::BroadcastHub;

/// The competition currently being followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTarget {
    #[validate(
        length(min = 1, max = 128, message = "competitionId must be 1-128 characters"),
        custom(function = "validate_competition_id")
    )]
    pub competition_id: String,
    #[serde(default)]
    #[validate(length(max = 16, message = "federation must be at most 16 characters"))]
    pub federation: String,
}

impl CompetitionTarget {
    pub fn new(competition_id: impl Into<String>, federation: impl Into<String>) -> Self {
        Self {
            competition_id: competition_id.into(),
            federation: federation.into(),
        }
    }
}

/// The identifier ends up as a path segment of the source URL.
fn validate_competition_id(id: &str) -> Result<(), ValidationError> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(ValidationError::new("competition_id")
            .with_message("competitionId may only contain letters, digits, '-' and '_'".into()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_backoff: Duration,
}

impl PollSettings {
    /// Delay before the next poll: the plain interval while healthy, doubled
    /// per consecutive failure up to `max_backoff`.
    pub fn next_delay(&self, failures: u32) -> Duration {
        if failures == 0 {
            return self.interval;
        }
        let factor = 2u32.saturating_pow(failures.min(16));
        self.interval
            .saturating_mul(factor)
            .min(self.max_backoff.max(self.interval))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No competition configured yet.
    Idle,
    /// The target changed while the fetch was in flight; result dropped.
    Superseded,
    Published { delivered: usize },
}

/// Drives fetch, derive, install and publish. The only writer of the
/// snapshot store.
pub struct PollingScheduler {
    source: Arc<dyn DocumentSource>,
    store: Arc<SnapshotStore>,
    hub: Arc<BroadcastHub>,
    registry: Arc<FederationRegistry>,
    target: watch::Sender<Option<CompetitionTarget>>,
    settings: PollSettings,
}

impl PollingScheduler {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        store: Arc<SnapshotStore>,
        hub: Arc<BroadcastHub>,
        registry: Arc<FederationRegistry>,
        settings: PollSettings,
    ) -> Self {
        let (target, _) = watch::channel(None);
        Self {
            source,
            store,
            hub,
            registry,
            target,
            settings,
        }
    }

    /// Switches to a new competition. The running loop refreshes immediately
    /// instead of waiting for the next tick.
    pub fn configure(&self, target: CompetitionTarget) {
        info!(
            "Following competition '{}' ({})",
            target.competition_id, target.federation
        );
        self.target.send_replace(Some(target));
    }

    pub fn target(&self) -> Option<CompetitionTarget> {
        self.target.borrow().clone()
    }

    /// Runs one cycle. On any error the store is left untouched.
    pub async fn refresh(&self) -> importer::Result<RefreshOutcome> {
        let Some(target) = self.target() else {
            return Ok(RefreshOutcome::Idle);
        };

        let documents = self.source.fetch(&target.competition_id).await?;

        if self.target().as_ref() != Some(&target) {
            debug!(
                "Dropping result for '{}', target changed during fetch",
                target.competition_id
            );
            return Ok(RefreshOutcome::Superseded);
        }

        let federation = self.registry.get(&target.federation);
        let snapshot = build_snapshot(federation, &documents, Utc::now())?;
        let snapshot = self.store.replace(snapshot);
        let delivered = self.hub.publish(&snapshot).await;

        info!(
            "Refreshed '{}': {} lifters, {} attempts, sent to {} viewers",
            target.competition_id,
            snapshot.lifters.len(),
            snapshot.attempts.len(),
            delivered
        );

        Ok(RefreshOutcome::Published { delivered })
    }

    pub async fn run(self: Arc<Self>) {
        let mut changes = self.target.subscribe();
        let mut failures: u32 = 0;

        info!(
            "Polling {} every {:?}",
            self.source.name(),
            self.settings.interval
        );

        loop {
            match self.refresh().await {
                Ok(outcome) => {
                    if let RefreshOutcome::Published { delivered } = outcome {
                        debug!("Cycle delivered to {} viewers", delivered);
                    }
                    failures = 0;
                }
                Err(e) => {
                    failures = failures.saturating_add(1);
                    warn!(
                        "Refresh failed ({} in a row), keeping previous snapshot: {}",
                        failures, e
                    );
                }
            }

            let delay = self.settings.next_delay(failures);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    failures = 0;
                }
            }
        }
    }
}
