use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Units {
    #[default]
    Kg,
    Lbs,
}

impl Units {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Some(Self::Kg),
            "lb" | "lbs" => Some(Self::Lbs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub weight: Decimal,
    pub color: Option<String>,
    pub pair_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetInfo {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub federation: Option<String>,
    pub units: Units,
    pub bar_and_collars_weight: Option<Decimal>,
    pub plates: Vec<Plate>,
}
