//! Crate-wide error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HookError>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
