//! Error types for the mirror-domain model

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid mirror host at position {index}: {host:?}")]
    InvalidHost { index: usize, host: String },
}
