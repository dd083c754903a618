use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Squat,
    Bench,
    Deadlift,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Self::Squat, Self::Bench, Self::Deadlift];
}

/// Referee or attempt decision. `Pending` covers both "not lifted yet" and
/// "lifted but not judged yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Good,
    Bad,
    #[default]
    Pending,
}

impl Outcome {
    /// Parses a raw decision string. Anything other than `good`/`bad` is pending.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "good" => Self::Good,
            "bad" => Self::Bad,
            _ => Self::Pending,
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptSlot {
    pub weight: Decimal,
    pub outcome: Outcome,
}

impl AttemptSlot {
    pub fn new(weight: Decimal, outcome: Outcome) -> Self {
        Self { weight, outcome }
    }

    /// Wire encoding: positive for a good lift, negative magnitude for a
    /// failed one, zero while pending whatever weight was declared.
    pub fn signed(&self) -> Decimal {
        match self.outcome {
            Outcome::Good => self.weight,
            Outcome::Bad => -self.weight.abs(),
            Outcome::Pending => Decimal::ZERO,
        }
    }
}

/// The three attempts of one discipline plus the derived best lift.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "LiftResult")]
pub struct LiftSlots {
    pub slots: [AttemptSlot; 3],
    pub best: Decimal,
}

impl LiftSlots {
    /// Stores an attempt by its 1-based number. Numbers outside 1..=3 are dropped.
    pub fn set(&mut self, attempt_number: u8, slot: AttemptSlot) -> bool {
        match attempt_number {
            1..=3 => {
                self.slots[usize::from(attempt_number - 1)] = slot;
                true
            }
            _ => false,
        }
    }

    pub fn signed(&self) -> [Decimal; 3] {
        self.slots.map(|slot| slot.signed())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LiftResult {
    pub attempts: Vec<Decimal>,
    pub best: Decimal,
}

impl From<LiftSlots> for LiftResult {
    fn from(slots: LiftSlots) -> Self {
        Self {
            attempts: slots.signed().to_vec(),
            best: slots.best,
        }
    }
}
