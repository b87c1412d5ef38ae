//! Content produced by the generation pipeline
//!
//! Ownership of these values transfers to the caller, which may edit or
//! persist them. Ids are unique within one response, not globally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVariation {
    /// Position within the response (1-based)
    pub id: u32,

    /// Short label for the variation
    pub title: String,

    /// Post body, newline-structured prose
    pub content: String,
}

/// One slide of a carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSlide {
    /// Position within the carousel (1-based)
    pub id: u32,

    /// Slide headline
    pub title: String,

    /// Slide body
    pub content: String,
}

/// Narrative role of a slide, derived from its position
///
/// Slide 1 is always the hook and the last slide is always the summary.
/// Slide 2 states the problem; everything in between is a distinct insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// Opening title that stops the scroll
    Hook,
    /// The problem or context
    Problem,
    /// A distinct tip or insight, numbered from 1
    Insight(u32),
    /// Summary and call to action
    Summary,
}

impl SlideRole {
    /// Role of the slide at 1-based `position` in a carousel of `total` slides
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_domain::SlideRole;
    ///
    /// assert_eq!(SlideRole::for_position(1, 5), SlideRole::Hook);
    /// assert_eq!(SlideRole::for_position(2, 5), SlideRole::Problem);
    /// assert_eq!(SlideRole::for_position(3, 5), SlideRole::Insight(1));
    /// assert_eq!(SlideRole::for_position(5, 5), SlideRole::Summary);
    /// ```
    pub fn for_position(position: u32, total: u32) -> Self {
        if position <= 1 {
            SlideRole::Hook
        } else if position >= total {
            SlideRole::Summary
        } else if position == 2 {
            SlideRole::Problem
        } else {
            SlideRole::Insight(position - 2)
        }
    }

    /// Roles for every position of a carousel, in order
    pub fn sequence(total: u32) -> Vec<SlideRole> {
        (1..=total).map(|p| Self::for_position(p, total)).collect()
    }

    /// Instruction fragment describing what the slide must contain
    pub fn describe(&self) -> &'static str {
        match self {
            SlideRole::Hook => "Hook/Title (Short).",
            SlideRole::Problem => "The Problem/Context.",
            SlideRole::Insight(_) => "A distinct step-by-step tip or insight.",
            SlideRole::Summary => "Summary & CTA.",
        }
    }
}

impl fmt::Display for SlideRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideRole::Hook => f.write_str("hook"),
            SlideRole::Problem => f.write_str("problem"),
            SlideRole::Insight(n) => write!(f, "insight {}", n),
            SlideRole::Summary => f.write_str("summary"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::request::{MAX_SLIDE_COUNT, MIN_SLIDE_COUNT};
    use proptest::prelude::*;

    proptest! {
        /// Property: first slide is the hook, last slide is the summary
        #[test]
        fn test_hook_first_summary_last(total in MIN_SLIDE_COUNT..=MAX_SLIDE_COUNT) {
            let roles = SlideRole::sequence(total);
            prop_assert_eq!(roles.len(), total as usize);
            prop_assert_eq!(roles[0], SlideRole::Hook);
            prop_assert_eq!(roles[roles.len() - 1], SlideRole::Summary);
        }

        /// Property: hook and summary appear exactly once each
        #[test]
        fn test_single_hook_and_summary(total in MIN_SLIDE_COUNT..=MAX_SLIDE_COUNT) {
            let roles = SlideRole::sequence(total);
            prop_assert_eq!(roles.iter().filter(|r| **r == SlideRole::Hook).count(), 1);
            prop_assert_eq!(roles.iter().filter(|r| **r == SlideRole::Summary).count(), 1);
        }
    }
}
