mod shapes;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use storage::models::{
    Attempt, Division, Federation, Lifter, MeetInfo, Outcome, Plate, Platform, Referee, Sex,
    Units,
};
use storage::services::WeightClassResolver;
use tracing::debug;

use crate::Result;
use crate::movement_mapper::{DisciplineMapper, MovementMapper};
use crate::sources::RawDocument;
use shapes::*;

/// Document kind as told by the identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    MeetInfo,
    Division,
    Lifter,
    Attempt,
    Platform,
    Referee,
    Unknown,
}

impl DocumentKind {
    pub fn classify(id: &str) -> Self {
        if id.starts_with("meet") {
            return Self::MeetInfo;
        }
        match id.chars().next() {
            Some('d') => Self::Division,
            Some('l') => Self::Lifter,
            Some('a') => Self::Attempt,
            Some('p') => Self::Platform,
            Some('r') => Self::Referee,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    MeetInfo(MeetInfo),
    Division(Division),
    Lifter(Lifter),
    Attempt(Attempt),
    Platform(Platform),
    Referee(Referee),
}

/// Typed entities of one fetch, keyed by document identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub meet_info: Option<MeetInfo>,
    pub divisions: BTreeMap<String, Division>,
    pub lifters: BTreeMap<String, Lifter>,
    pub attempts: BTreeMap<String, Attempt>,
    pub platforms: BTreeMap<String, Platform>,
    pub referees: BTreeMap<String, Referee>,
    pub skipped: usize,
}

pub struct EntityProjector<'a> {
    federation: &'a Federation,
    resolver: WeightClassResolver,
    mapper: DisciplineMapper,
}

impl<'a> EntityProjector<'a> {
    pub fn new(federation: &'a Federation) -> Result<Self> {
        Ok(Self {
            federation,
            resolver: WeightClassResolver::from_table(&federation.weight_classes)?,
            mapper: DisciplineMapper,
        })
    }

    pub fn project(&self, documents: &[RawDocument]) -> Projection {
        let mut projection = Projection::default();

        for document in documents {
            match self.decode(document) {
                Some(Entity::MeetInfo(meet)) => {
                    if projection.meet_info.is_some() {
                        debug!("Ignoring extra meet document {}", document.id);
                    } else {
                        projection.meet_info = Some(meet);
                    }
                }
                Some(Entity::Division(division)) => {
                    projection.divisions.insert(division.id.clone(), division);
                }
                Some(Entity::Lifter(lifter)) => {
                    projection.lifters.insert(lifter.id.clone(), lifter);
                }
                Some(Entity::Attempt(attempt)) => {
                    projection.attempts.insert(attempt.id.clone(), attempt);
                }
                Some(Entity::Platform(platform)) => {
                    projection.platforms.insert(platform.id.clone(), platform);
                }
                Some(Entity::Referee(referee)) => {
                    projection.referees.insert(referee.id.clone(), referee);
                }
                None => {
                    if DocumentKind::classify(&document.id) != DocumentKind::Unknown {
                        projection.skipped += 1;
                    }
                }
            }
        }

        for lifter in projection.lifters.values_mut() {
            lifter.division_name = lifter
                .division_id
                .as_ref()
                .and_then(|id| projection.divisions.get(id))
                .map(|division| division.display_name.clone());
        }

        projection
    }

    /// Decodes one document into its entity, or `None` when the kind is
    /// unknown or a required field is missing.
    pub fn decode(&self, document: &RawDocument) -> Option<Entity> {
        let id = document.id.clone();

        match DocumentKind::classify(&document.id) {
            DocumentKind::MeetInfo => {
                let shape: MeetShape = shape_of(document)?;
                Some(Entity::MeetInfo(MeetInfo {
                    name: shape.name,
                    date: shape.date,
                    federation: shape.federation,
                    units: shape
                        .units
                        .as_deref()
                        .and_then(Units::parse)
                        .unwrap_or_default(),
                    bar_and_collars_weight: shape.bar_and_collars_weight,
                    plates: shape
                        .plates
                        .into_iter()
                        .map(|plate| Plate {
                            weight: plate.weight,
                            color: plate.color,
                            pair_count: plate.pair_count.unwrap_or(0),
                        })
                        .collect(),
                }))
            }
            DocumentKind::Division => {
                let shape: DivisionShape = shape_of(document)?;
                Some(Entity::Division(Division {
                    id,
                    display_name: self.federation.division_label(&shape.name),
                    name: shape.name,
                    raw_or_equipped: shape.raw_or_equipped,
                    lifts: shape
                        .lifts
                        .iter()
                        .filter_map(|lift| self.mapper.map_movement(lift))
                        .collect(),
                }))
            }
            DocumentKind::Lifter => {
                let shape: LifterShape = shape_of(document)?;
                let sex = shape.gender.as_deref().and_then(Sex::parse);
                let bodyweight = shape.body_weight.filter(|bw| *bw > Decimal::ZERO);

                let mut lifter = Lifter::new(id, shape.name);
                lifter.sex = sex;
                lifter.bodyweight = bodyweight.unwrap_or(Decimal::ZERO);
                lifter.weight_class = self.resolver.resolve(sex, bodyweight);
                lifter.division_id = shape.division_id;
                lifter.platform_id = shape.platform_id;
                lifter.lot = shape.lot;
                lifter.team = shape.team;
                Some(Entity::Lifter(lifter))
            }
            DocumentKind::Attempt => {
                let shape: AttemptShape = shape_of(document)?;
                let Some(lift_name) = self.mapper.map_movement(&shape.lift_name) else {
                    debug!(
                        "Skipping attempt {}: unknown lift '{}'",
                        document.id, shape.lift_name
                    );
                    return None;
                };
                Some(Entity::Attempt(Attempt {
                    id,
                    lifter_id: shape.lifter_id,
                    lift_name,
                    attempt_number: u8::try_from(shape.attempt_number).unwrap_or(0),
                    weight: shape.weight.unwrap_or(Decimal::ZERO),
                    result: shape
                        .result
                        .as_deref()
                        .map(Outcome::parse)
                        .unwrap_or_default(),
                    timestamp: shape.timestamp,
                }))
            }
            DocumentKind::Platform => {
                let shape: PlatformShape = shape_of(document)?;
                let mut platform = Platform::new(id, shape.name);
                platform.current_attempt_id = shape.current_attempt_id;
                platform.clock_timer_length = shape.clock_timer_length;
                platform.clock_countdown = shape.clock_remaining;
                Some(Entity::Platform(platform))
            }
            DocumentKind::Referee => {
                let shape: RefereeShape = shape_of(document)?;
                Some(Entity::Referee(Referee {
                    id,
                    platform_id: shape.platform_id,
                    position: shape.position,
                    decision: shape
                        .decision
                        .as_deref()
                        .map(Outcome::parse)
                        .unwrap_or_default(),
                }))
            }
            DocumentKind::Unknown => None,
        }
    }
}

fn shape_of<T: DeserializeOwned>(document: &RawDocument) -> Option<T> {
    match serde_json::from_value(document.body.clone()) {
        Ok(shape) => Some(shape),
        Err(e) => {
            debug!("Skipping malformed document {}: {}", document.id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storage::models::{Discipline, FederationRegistry};

    fn doc(id: &str, body: serde_json::Value) -> RawDocument {
        RawDocument::new(id, body)
    }

    fn project(documents: &[RawDocument]) -> Projection {
        let registry = FederationRegistry::new();
        EntityProjector::new(registry.get("IPF"))
            .unwrap()
            .project(documents)
    }

    #[test]
    fn test_classify_by_prefix() {
        assert_eq!(DocumentKind::classify("meetSetup"), DocumentKind::MeetInfo);
        assert_eq!(DocumentKind::classify("d-open"), DocumentKind::Division);
        assert_eq!(DocumentKind::classify("l123"), DocumentKind::Lifter);
        assert_eq!(DocumentKind::classify("a9"), DocumentKind::Attempt);
        assert_eq!(DocumentKind::classify("p1"), DocumentKind::Platform);
        assert_eq!(DocumentKind::classify("r-left"), DocumentKind::Referee);
        assert_eq!(DocumentKind::classify("_design/app"), DocumentKind::Unknown);
        assert_eq!(DocumentKind::classify("xyz"), DocumentKind::Unknown);
        assert_eq!(DocumentKind::classify(""), DocumentKind::Unknown);
    }

    #[test]
    fn test_lifter_resolves_class_and_division() {
        let projection = project(&[
            doc("l1", json!({"name": "Ada", "gender": "FEMALE", "bodyWeight": "62.4", "divisionId": "d1"})),
            doc("d1", json!({"name": "JR", "rawOrEquipped": "RAW", "lifts": ["squat", "bench", "dead"]})),
        ]);

        let lifter = &projection.lifters["l1"];
        assert_eq!(lifter.sex, Some(Sex::Female));
        assert_eq!(lifter.weight_class, "63");
        assert_eq!(lifter.bodyweight, Decimal::new(624, 1));
        assert_eq!(lifter.division_name.as_deref(), Some("Junior"));

        let division = &projection.divisions["d1"];
        assert_eq!(division.lifts, vec![Discipline::Squat, Discipline::Bench, Discipline::Deadlift]);
    }

    #[test]
    fn test_unweighed_lifter_is_unclassified() {
        let projection = project(&[doc("l1", json!({"name": "Bo", "gender": "MALE"}))]);
        let lifter = &projection.lifters["l1"];
        assert_eq!(lifter.weight_class, "0");
        assert_eq!(lifter.bodyweight, Decimal::ZERO);
        assert_eq!(lifter.division_name, None);
    }

    #[test]
    fn test_missing_required_field_skips_only_that_document() {
        let projection = project(&[
            doc("l1", json!({"gender": "MALE"})),
            doc("a1", json!({"lifterId": "l2", "liftName": "squat"})),
            doc("r1", json!({"platformId": "p1"})),
            doc("l2", json!({"name": "Cy"})),
            doc("zz", json!({"name": "ignored"})),
        ]);

        assert_eq!(projection.lifters.len(), 1);
        assert!(projection.lifters.contains_key("l2"));
        assert!(projection.attempts.is_empty());
        assert!(projection.referees.is_empty());
        assert_eq!(projection.skipped, 3);
    }

    #[test]
    fn test_wrongly_typed_required_field_is_skipped() {
        let projection = project(&[
            doc("l1", json!({"name": 42})),
            doc("a1", json!({"lifterId": "l1", "liftName": "bench", "attemptNumber": "first"})),
        ]);
        assert!(projection.lifters.is_empty());
        assert!(projection.attempts.is_empty());
    }

    #[test]
    fn test_attempt_projection() {
        let projection = project(&[doc(
            "a1",
            json!({
                "lifterId": "l1",
                "liftName": "dead",
                "attemptNumber": "2",
                "weight": 180,
                "result": "bad",
                "timestamp": 1_700_000_000_000i64
            }),
        )]);

        let attempt = &projection.attempts["a1"];
        assert_eq!(attempt.lift_name, Discipline::Deadlift);
        assert_eq!(attempt.attempt_number, 2);
        assert_eq!(attempt.weight, Decimal::from(180));
        assert_eq!(attempt.result, Outcome::Bad);
        assert!(attempt.timestamp.is_some());
    }

    #[test]
    fn test_attempt_with_unknown_lift_is_skipped() {
        let projection = project(&[doc(
            "a1",
            json!({"lifterId": "l1", "liftName": "clean", "attemptNumber": 1}),
        )]);
        assert!(projection.attempts.is_empty());
        assert_eq!(projection.skipped, 1);
    }

    #[test]
    fn test_meet_platform_and_referee() {
        let projection = project(&[
            doc("meetSetup", json!({
                "name": "Spring Open",
                "date": "2025-03-08",
                "federation": "IPF",
                "units": "lbs",
                "barAndCollarsWeight": 25,
                "plates": [{"weight": 25, "color": "red", "pairCount": 8}, {"color": "broken"}]
            })),
            doc("p1", json!({"name": "Platform A", "currentAttemptId": "a1", "clockTimerLength": "60"})),
            doc("r1", json!({"platformId": "p1", "position": "left", "decision": "good"})),
        ]);

        let meet = projection.meet_info.unwrap();
        assert_eq!(meet.name, "Spring Open");
        assert_eq!(meet.units, Units::Lbs);
        assert_eq!(meet.plates.len(), 1);
        assert_eq!(meet.plates[0].pair_count, 8);

        let platform = &projection.platforms["p1"];
        assert_eq!(platform.current_attempt_id.as_deref(), Some("a1"));
        assert_eq!(platform.clock_timer_length, Some(60));

        assert_eq!(projection.referees["r1"].decision, Outcome::Good);
    }
}
