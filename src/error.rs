use thiserror::Error;

#[derive(Error, Debug)]
pub enum MastermindError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file already exists at {0}")]
    AlreadyExists(String),
}

pub type Result<T> = std::result::Result<T, MastermindError>;
