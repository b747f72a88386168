use thiserror::Error;

#[derive(Error, Debug)]
pub enum StableError {
    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Session closed")]
    SessionClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StableError>;
