//! Required-field shapes for each document kind. A field without
//! `#[serde(default)]` is required; decoding fails when it is missing or has
//! the wrong logical type.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::lenient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetShape {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub federation: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub units: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub bar_and_collars_weight: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub plates: Vec<PlateShape>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateShape {
    #[serde(deserialize_with = "lenient::decimal")]
    pub weight: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub pair_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionShape {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub raw_or_equipped: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub lifts: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifterShape {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub body_weight: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub division_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub platform_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub lot: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub team: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptShape {
    pub lifter_id: String,
    pub lift_name: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub attempt_number: i64,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub weight: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformShape {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_attempt_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub clock_timer_length: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_u32")]
    pub clock_remaining: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefereeShape {
    pub platform_id: String,
    pub position: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub decision: Option<String>,
}
