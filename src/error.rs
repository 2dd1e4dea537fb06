use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("no settings found for record {0}")]
    RecordNotFound(Uuid),

    #[error("unknown method `{0}`")]
    UnknownMethod(String),
}
