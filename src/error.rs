//! Coordinator error taxonomy.
//!
//! None of these reach the host: the manager logs them and degrades to a
//! no-op so one misbehaving window cannot break the others.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WmError {
    #[error("window index {index} is outside the registry (0..{len})")]
    InvalidIndex { index: usize, len: usize },
    #[error("registry is full ({limit} windows)")]
    RegistryFull { limit: usize },
    #[error("window adapter rejected: {0}")]
    AdapterRejected(String),
}
