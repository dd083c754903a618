use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_CLOCK_SECONDS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub current_attempt_id: Option<String>,
    pub current_lifter_id: Option<String>,
    pub clock_timer_length: Option<u32>,
    /// Live countdown as reported by the platform document, if running.
    #[serde(skip)]
    pub clock_countdown: Option<u32>,
    pub clock_seconds: u32,
    pub ref_lights: Vec<bool>,
}

impl Platform {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_attempt_id: None,
            current_lifter_id: None,
            clock_timer_length: None,
            clock_countdown: None,
            clock_seconds: DEFAULT_CLOCK_SECONDS,
            ref_lights: Vec::new(),
        }
    }
}
