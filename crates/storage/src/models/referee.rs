use serde::Serialize;
use utoipa::ToSchema;

use super::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    pub id: String,
    pub platform_id: String,
    pub position: String,
    pub decision: Outcome,
}
