use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Connection string '{name}' is not configured")]
    MissingConnectionString { name: String },
}

pub type Result<T> = std::result::Result<T, LookupError>;
