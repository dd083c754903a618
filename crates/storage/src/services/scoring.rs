use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Discipline, Lifter, LiftSlots, Sex};

/// Placement cohort: lifters only compete against others in the same
/// division, sex and weight class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub division_id: Option<String>,
    pub sex: Option<Sex>,
    pub weight_class: String,
}

impl From<&Lifter> for GroupKey {
    fn from(lifter: &Lifter) -> Self {
        Self {
            division_id: lifter.division_id.clone(),
            sex: lifter.sex,
            weight_class: lifter.weight_class.clone(),
        }
    }
}

/// Recomputes bests, totals and places from the attempt slots alone.
pub fn score(lifters: &mut BTreeMap<String, Lifter>) {
    for lifter in lifters.values_mut() {
        derive_bests(lifter);
    }
    assign_places(lifters);
}

pub fn best_of(lift: &LiftSlots) -> Decimal {
    lift.signed()
        .into_iter()
        .filter(|value| *value > Decimal::ZERO)
        .max()
        .unwrap_or(Decimal::ZERO)
}

pub fn derive_bests(lifter: &mut Lifter) {
    let mut total = Decimal::ZERO;
    for discipline in Discipline::ALL {
        let lift = lifter.lift_mut(discipline);
        lift.best = best_of(lift);
        total += lift.best;
    }
    lifter.total = total;
}

pub fn assign_places(lifters: &mut BTreeMap<String, Lifter>) {
    let mut groups: BTreeMap<GroupKey, Vec<&mut Lifter>> = BTreeMap::new();
    for lifter in lifters.values_mut() {
        groups.entry(GroupKey::from(&*lifter)).or_default().push(lifter);
    }

    for members in groups.values_mut() {
        members.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| tie_break_weight(a).cmp(&tie_break_weight(b)))
                .then_with(|| a.id.cmp(&b.id))
        });

        for (index, lifter) in members.iter_mut().enumerate() {
            lifter.place = if lifter.total > Decimal::ZERO {
                Some(index as u32 + 1)
            } else {
                None
            };
        }
    }
}

/// Bodyweight for tie-breaking. Unweighed lifters (zero) sort after every
/// weighed one.
fn tie_break_weight(lifter: &Lifter) -> (bool, Decimal) {
    (lifter.bodyweight <= Decimal::ZERO, lifter.bodyweight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttemptSlot, Outcome};

    fn kg(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn fill(lift: &mut LiftSlots, signed: [&str; 3]) {
        for (index, raw) in signed.iter().enumerate() {
            let weight = kg(raw);
            let outcome = if weight > Decimal::ZERO {
                Outcome::Good
            } else if weight < Decimal::ZERO {
                Outcome::Bad
            } else {
                Outcome::Pending
            };
            lift.set(index as u8 + 1, AttemptSlot::new(weight.abs(), outcome));
        }
    }

    fn lifter(id: &str, bodyweight: &str, squat: [&str; 3], bench: [&str; 3], dead: [&str; 3]) -> Lifter {
        let mut lifter = Lifter::new(id, id.to_uppercase());
        lifter.sex = Some(Sex::Male);
        lifter.weight_class = "83".to_string();
        lifter.division_id = Some("d-open".to_string());
        lifter.bodyweight = kg(bodyweight);
        fill(&mut lifter.squat, squat);
        fill(&mut lifter.bench, bench);
        fill(&mut lifter.deadlift, dead);
        lifter
    }

    fn roster(lifters: Vec<Lifter>) -> BTreeMap<String, Lifter> {
        lifters.into_iter().map(|l| (l.id.clone(), l)).collect()
    }

    #[test]
    fn test_partial_meet_still_totals() {
        let mut lifters = roster(vec![lifter(
            "l1",
            "82",
            ["100", "-105", "105"],
            ["0", "0", "0"],
            ["150", "0", "0"],
        )]);

        score(&mut lifters);

        let l1 = &lifters["l1"];
        assert_eq!(l1.squat.best, kg("105"));
        assert_eq!(l1.bench.best, Decimal::ZERO);
        assert_eq!(l1.deadlift.best, kg("150"));
        assert_eq!(l1.total, kg("255"));
        assert_eq!(l1.place, Some(1));
    }

    #[test]
    fn test_best_ignores_failed_and_pending() {
        let mut lift = LiftSlots::default();
        fill(&mut lift, ["-120", "0", "-125"]);
        assert_eq!(best_of(&lift), Decimal::ZERO);

        fill(&mut lift, ["110", "-120", "115"]);
        assert_eq!(best_of(&lift), kg("115"));
    }

    #[test]
    fn test_total_invariant_and_unplaced_zero_total() {
        let mut lifters = roster(vec![
            lifter("l1", "80", ["100", "0", "0"], ["60", "0", "0"], ["0", "0", "0"]),
            lifter("l2", "81", ["-100", "-100", "-100"], ["0", "0", "0"], ["0", "0", "0"]),
        ]);

        score(&mut lifters);

        for lifter in lifters.values() {
            assert_eq!(
                lifter.total,
                lifter.squat.best + lifter.bench.best + lifter.deadlift.best
            );
            assert_eq!(lifter.place.is_some(), lifter.total > Decimal::ZERO);
        }
        assert_eq!(lifters["l2"].place, None);
    }

    #[test]
    fn test_ties_go_to_lighter_lifter() {
        let mut lifters = roster(vec![
            lifter("heavy", "82.9", ["200", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
            lifter("light", "80.1", ["200", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
            lifter("strong", "82.5", ["210", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
        ]);

        score(&mut lifters);

        assert_eq!(lifters["strong"].place, Some(1));
        assert_eq!(lifters["light"].place, Some(2));
        assert_eq!(lifters["heavy"].place, Some(3));
    }

    #[test]
    fn test_unweighed_lifter_loses_tie() {
        let mut weighed = lifter("weighed", "80", ["100", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]);
        let mut unweighed = lifter("unweighed", "0", ["100", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]);
        weighed.weight_class = "0".to_string();
        unweighed.weight_class = "0".to_string();
        let mut lifters = roster(vec![weighed, unweighed]);

        score(&mut lifters);

        assert_eq!(lifters["weighed"].place, Some(1));
        assert_eq!(lifters["unweighed"].place, Some(2));
    }

    #[test]
    fn test_groups_rank_independently() {
        let mut other_class = lifter("l3", "90", ["300", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]);
        other_class.weight_class = "93".to_string();
        let mut other_sex = lifter("l4", "60", ["250", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]);
        other_sex.sex = Some(Sex::Female);

        let mut lifters = roster(vec![
            lifter("l1", "80", ["100", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
            lifter("l2", "80", ["120", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
            other_class,
            other_sex,
        ]);

        score(&mut lifters);

        assert_eq!(lifters["l2"].place, Some(1));
        assert_eq!(lifters["l1"].place, Some(2));
        assert_eq!(lifters["l3"].place, Some(1));
        assert_eq!(lifters["l4"].place, Some(1));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut lifters = roster(vec![
            lifter("l1", "80", ["100", "0", "0"], ["70", "0", "0"], ["180", "0", "0"]),
            lifter("l2", "80", ["100", "0", "0"], ["70", "0", "0"], ["180", "0", "0"]),
            lifter("l3", "79", ["0", "0", "0"], ["0", "0", "0"], ["0", "0", "0"]),
        ]);

        score(&mut lifters);
        let first = lifters.clone();
        score(&mut lifters);

        assert_eq!(first, lifters);
        assert_eq!(lifters["l1"].place, Some(1));
        assert_eq!(lifters["l2"].place, Some(2));
        assert_eq!(lifters["l3"].place, None);
    }
}
