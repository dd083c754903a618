use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Discipline, Outcome};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub id: String,
    pub lifter_id: String,
    pub lift_name: Discipline,
    pub attempt_number: u8,
    pub weight: Decimal,
    pub result: Outcome,
    pub timestamp: Option<DateTime<Utc>>,
}
