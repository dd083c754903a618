use validator::Validate;

use crate::error::WebResult;
use crate::scheduler::{CompetitionTarget, PollingScheduler};

/// Validates a target and hands it to the scheduler, which refreshes
/// straight away.
pub fn apply_target(
    scheduler: &PollingScheduler,
    target: CompetitionTarget,
) -> WebResult<CompetitionTarget> {
    target.validate()?;
    scheduler.configure(target.clone());
    Ok(target)
}
