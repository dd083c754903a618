use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AllDocsResponse {
    #[serde(default)]
    pub total_rows: Option<u64>,
    pub rows: Vec<AllDocsRow>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AllDocsRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub doc: Option<Value>,
}
