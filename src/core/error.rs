use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Unknown hexside code: {0:?}")]
    UnknownHexside(char),

    #[error("Unknown gate type: {0}")]
    UnknownGate(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HexError>;
