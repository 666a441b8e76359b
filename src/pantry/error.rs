use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("{0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PantryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        PantryError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
