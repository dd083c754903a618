use std::collections::BTreeMap;

use crate::models::{Attempt, DEFAULT_CLOCK_SECONDS, Platform, Referee};

/// Fills in each platform's referee lights, clock and current lifter.
pub fn aggregate(
    platforms: &mut BTreeMap<String, Platform>,
    referees: &BTreeMap<String, Referee>,
    attempts: &BTreeMap<String, Attempt>,
) {
    for platform in platforms.values_mut() {
        platform.ref_lights = lights_for(&platform.id, referees);
        platform.clock_seconds = clock_seconds(platform);
        platform.current_lifter_id = platform
            .current_attempt_id
            .as_ref()
            .and_then(|attempt_id| attempts.get(attempt_id))
            .map(|attempt| attempt.lifter_id.clone());
    }
}

/// One light per referee seated on the platform, ordered by seat position.
/// A referee who has not voted yet shows as a red light.
pub fn lights_for(platform_id: &str, referees: &BTreeMap<String, Referee>) -> Vec<bool> {
    let mut seated: Vec<&Referee> = referees
        .values()
        .filter(|referee| referee.platform_id == platform_id)
        .collect();

    seated.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.id.cmp(&b.id)));

    seated
        .into_iter()
        .map(|referee| referee.decision.is_good())
        .collect()
}

pub fn clock_seconds(platform: &Platform) -> u32 {
    platform
        .clock_countdown
        .or(platform.clock_timer_length)
        .unwrap_or(DEFAULT_CLOCK_SECONDS)
}
