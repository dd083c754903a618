use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Discipline, LiftResult, LiftSlots, Sex};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lifter {
    pub id: String,
    pub name: String,
    pub sex: Option<Sex>,
    pub weight_class: String,
    /// Kilograms; zero until weighed in.
    pub bodyweight: Decimal,
    pub division_id: Option<String>,
    pub division_name: Option<String>,
    pub platform_id: Option<String>,
    pub lot: Option<u32>,
    pub team: Option<String>,
    #[schema(value_type = LiftResult)]
    pub squat: LiftSlots,
    #[schema(value_type = LiftResult)]
    pub bench: LiftSlots,
    #[schema(value_type = LiftResult)]
    pub deadlift: LiftSlots,
    pub total: Decimal,
    pub place: Option<u32>,
}

impl Lifter {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex: None,
            weight_class: "0".to_string(),
            bodyweight: Decimal::ZERO,
            division_id: None,
            division_name: None,
            platform_id: None,
            lot: None,
            team: None,
            squat: LiftSlots::default(),
            bench: LiftSlots::default(),
            deadlift: LiftSlots::default(),
            total: Decimal::ZERO,
            place: None,
        }
    }

    pub fn lift_mut(&mut self, discipline: Discipline) -> &mut LiftSlots {
        match discipline {
            Discipline::Squat => &mut self.squat,
            Discipline::Bench => &mut self.bench,
            Discipline::Deadlift => &mut self.deadlift,
        }
    }
}
