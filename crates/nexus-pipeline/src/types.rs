//! Types produced by the pipeline

use crate::error::AttemptFailure;
use serde::Serialize;
use std::fmt;

/// Name reported for output produced by the simulation fallback
pub const SIMULATION_SOURCE: &str = "simulation";

/// Where a result came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Accepted output of the named provider
    Provider(String),
    /// Deterministic placeholder output
    Simulation,
}

impl Source {
    /// Provider name, or [`SIMULATION_SOURCE`]
    pub fn as_str(&self) -> &str {
        match self {
            Source::Provider(name) => name,
            Source::Simulation => SIMULATION_SOURCE,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected provider attempt, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    /// Provider name
    pub provider: String,
    /// Why the attempt was rejected
    pub reason: AttemptFailure,
}

/// Result of one pipeline run
///
/// `data` is always complete: either one provider's output accepted in full,
/// or the simulation's output.
#[derive(Debug, Clone)]
pub struct Generated<T> {
    /// Structured output
    pub data: T,
    /// Which provider produced it
    pub source: Source,
    /// Failed attempts, in the order they were made
    pub attempts: Vec<FailedAttempt>,
}

impl<T> Generated<T> {
    /// True when every provider failed and the simulation answered
    pub fn is_simulated(&self) -> bool {
        self.source == Source::Simulation
    }
}

/// Output of the image-prompt operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrompt {
    /// Renderable image URL
    pub image_url: String,
    /// Text prompt the URL was built from
    pub prompt: String,
}
