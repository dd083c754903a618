pub mod couch;

use serde_json::Value;

/// One untyped document as delivered by the source, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub body: Value,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, body: Value) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }
}
