use serde::Serialize;
use utoipa::ToSchema;

use super::Discipline;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: String,
    pub name: String,
    /// Federation label for `name` when the federation defines one.
    pub display_name: String,
    pub raw_or_equipped: Option<String>,
    pub lifts: Vec<Discipline>,
}
