pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{Result, StorageError};
pub use store::SnapshotStore;
