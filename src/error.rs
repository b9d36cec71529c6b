//! Error types for the scheduler.
//!
//! The scheduling operations themselves are total; these errors only come
//! from parsing caller input and from building a scheduler configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Response string is not one of `again`, `hard`, `good`, `easy`
    #[error("Invalid response: {0:?}")]
    InvalidResponse(String),

    /// Configuration values break a scheduling invariant
    #[error("Invalid scheduler config: {0}")]
    InvalidConfig(String),

    /// Configuration text is not valid TOML for `SchedulerConfig`
    #[error("Failed to parse scheduler config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// No card with this id in the set
    #[error("Card not found: {0}")]
    CardNotFound(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
