//! Errors at the crate's fallible edges.
//!
//! Game play itself never fails: out-of-turn rolls and overshoots are
//! ignored. Only loading configuration can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
