// error.rs
use thiserror::Error;

use crate::news::NewsId;

/// Error type for news lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    #[error("news {0} not found")]
    NotFound(NewsId),
}

/// Error type for server settings read from flags or the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number between 0 and 65535, got {value:?}")]
    InvalidPort { name: String, value: String },
}
