//! Validation errors for caller-supplied input

use thiserror::Error;

/// Errors raised while constructing a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Topic was empty or whitespace only
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// Carousel slide count outside the supported range
    #[error("Slide count {count} out of range ({min}..={max})")]
    SlideCountOutOfRange {
        /// Requested count
        count: u32,
        /// Smallest accepted count
        min: u32,
        /// Largest accepted count
        max: u32,
    },

    /// Unrecognized tone name
    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    /// Unrecognized length name
    #[error("Unknown length: {0}")]
    UnknownLength(String),
}
