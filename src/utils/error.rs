use thiserror::Error;

#[derive(Error, Debug)]
pub enum BagError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument '{input}': {reason}")]
    ParseError { input: String, reason: String },

    #[error("Unsupported value for key '{key}': {reason}")]
    UnsupportedValueError { key: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, BagError>;
