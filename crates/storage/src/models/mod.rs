mod attempt;
mod division;
mod federation;
mod lift;
mod lifter;
mod meet_info;
mod platform;
mod referee;
mod sex;
mod snapshot;

pub use attempt::Attempt;
pub use division::Division;
pub use federation::{
    DEFAULT_FEDERATION, Federation, FederationRegistry, FederationSummary, WeightClassTable,
};
pub use lift::{AttemptSlot, Discipline, LiftResult, LiftSlots, Outcome};
pub use lifter::Lifter;
pub use meet_info::{MeetInfo, Plate, Units};
pub use platform::{DEFAULT_CLOCK_SECONDS, Platform};
pub use referee::Referee;
pub use sex::Sex;
pub use snapshot::Snapshot;
