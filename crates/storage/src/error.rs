use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid weight class '{label}' in {sex} table")]
    InvalidWeightClass { label: String, sex: &'static str },
}

pub type Result<T> = std::result::Result<T, StorageError>;
