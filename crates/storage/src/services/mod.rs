pub mod live_state;
pub mod scoring;
pub mod weight_class;

pub use weight_class::WeightClassResolver;
