use chrono::{DateTime, Utc};
use storage::models::{Federation, Snapshot};
use storage::services::{live_state, scoring};
use tracing::debug;

use crate::Result;
use crate::linker;
use crate::projector::EntityProjector;
use crate::sources::RawDocument;

/// Runs one full derivation from raw documents to a finished snapshot:
/// projection, attempt linking, scoring and live platform state.
pub fn build_snapshot(
    federation: &Federation,
    documents: &[RawDocument],
    now: DateTime<Utc>,
) -> Result<Snapshot> {
    let projector = EntityProjector::new(federation)?;
    let mut projection = projector.project(documents);

    let report = linker::link(&mut projection.lifters, &projection.attempts);
    scoring::score(&mut projection.lifters);
    live_state::aggregate(
        &mut projection.platforms,
        &projection.referees,
        &projection.attempts,
    );

    debug!(
        "Projected {} lifters, {} attempts ({} linked, {} orphaned), skipped {} documents",
        projection.lifters.len(),
        projection.attempts.len(),
        report.linked,
        report.orphaned,
        projection.skipped
    );

    Ok(Snapshot {
        lifters: projection.lifters,
        attempts: projection.attempts,
        divisions: projection.divisions,
        platforms: projection.platforms,
        referees: projection.referees,
        meet_info: projection.meet_info,
        federation: federation.code.clone(),
        last_update: Some(now),
    })
}
