//! Trending topic listing

use serde::{Deserialize, Serialize};

/// A trending topic surfaced to users as inspiration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Position in the listing
    pub id: u32,
    /// Topic text, usable directly as a generation topic
    pub topic: String,
    /// Broad category
    pub category: String,
    /// Relative search volume (e.g. "High", "Med")
    pub volume: String,
    /// One-line pitch
    pub summary: String,
}

impl Trend {
    /// Create a trend entry
    pub fn new(
        id: u32,
        topic: impl Into<String>,
        category: impl Into<String>,
        volume: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id,
            topic: topic.into(),
            category: category.into(),
            volume: volume.into(),
            summary: summary.into(),
        }
    }
}
