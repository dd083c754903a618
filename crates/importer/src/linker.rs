use std::collections::BTreeMap;
use storage::models::{Attempt, AttemptSlot, Lifter};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkReport {
    pub linked: usize,
    pub orphaned: usize,
    pub out_of_range: usize,
}

/// Writes every attempt into its lifter's slot for that discipline and
/// attempt number. Lifters are expected to come fresh from projection, so
/// slots are never carried over from a previous cycle.
pub fn link(lifters: &mut BTreeMap<String, Lifter>, attempts: &BTreeMap<String, Attempt>) -> LinkReport {
    let mut report = LinkReport::default();

    for attempt in attempts.values() {
        let Some(lifter) = lifters.get_mut(&attempt.lifter_id) else {
            debug!(
                "Attempt {} references unknown lifter {}",
                attempt.id, attempt.lifter_id
            );
            report.orphaned += 1;
            continue;
        };

        let slot = AttemptSlot::new(attempt.weight, attempt.result);
        if lifter
            .lift_mut(attempt.lift_name)
            .set(attempt.attempt_number, slot)
        {
            report.linked += 1;
        } else {
            debug!(
                "Attempt {} has out-of-range number {}",
                attempt.id, attempt.attempt_number
            );
            report.out_of_range += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storage::models::{Discipline, Outcome};

    fn attempt(id: &str, lifter_id: &str, lift: Discipline, number: u8, weight: i64, result: Outcome) -> (String, Attempt) {
        (
            id.to_string(),
            Attempt {
                id: id.to_string(),
                lifter_id: lifter_id.to_string(),
                lift_name: lift,
                attempt_number: number,
                weight: Decimal::from(weight),
                result,
                timestamp: None,
            },
        )
    }

    fn lifters() -> BTreeMap<String, Lifter> {
        BTreeMap::from([("l1".to_string(), Lifter::new("l1", "Ada"))])
    }

    #[test]
    fn test_attempts_encode_outcome_in_sign() {
        let mut lifters = lifters();
        let attempts: BTreeMap<_, _> = [
            attempt("a1", "l1", Discipline::Squat, 1, 100, Outcome::Good),
            attempt("a2", "l1", Discipline::Squat, 2, 105, Outcome::Bad),
            attempt("a3", "l1", Discipline::Squat, 3, 110, Outcome::Pending),
        ]
        .into_iter()
        .collect();

        let report = link(&mut lifters, &attempts);

        assert_eq!(report.linked, 3);
        assert_eq!(
            lifters["l1"].squat.signed(),
            [Decimal::from(100), Decimal::from(-105), Decimal::ZERO]
        );
    }

    #[test]
    fn test_orphans_and_out_of_range_are_ignored() {
        let mut lifters = lifters();
        let attempts: BTreeMap<_, _> = [
            attempt("a1", "ghost", Discipline::Bench, 1, 100, Outcome::Good),
            attempt("a2", "l1", Discipline::Bench, 4, 100, Outcome::Good),
            attempt("a3", "l1", Discipline::Bench, 0, 100, Outcome::Good),
            attempt("a4", "l1", Discipline::Deadlift, 1, 200, Outcome::Good),
        ]
        .into_iter()
        .collect();

        let report = link(&mut lifters, &attempts);

        assert_eq!(
            report,
            LinkReport {
                linked: 1,
                orphaned: 1,
                out_of_range: 2
            }
        );
        assert_eq!(lifters["l1"].bench.signed(), [Decimal::ZERO; 3]);
        assert_eq!(lifters["l1"].deadlift.signed()[0], Decimal::from(200));
    }
}
