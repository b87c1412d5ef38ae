//! Nexus Domain Layer
//!
//! Core data model for the Nexus content generator. This crate performs no I/O;
//! it defines the requests a caller may submit to the generation pipeline and
//! the content the pipeline hands back.
//!
//! ## Key Concepts
//!
//! - **GenerationRequest**: topic + tone + length for a batch of post variations
//! - **CarouselRequest**: topic + slide count (3 to 10) for a carousel
//! - **PostVariation / CarouselSlide**: pipeline output, owned by the caller
//! - **SlideRole**: the narrative position of a slide (hook, problem, insight, summary)
//!
//! Requests can only be built through validating constructors, so an empty
//! topic or an out-of-range slide count never reaches a provider.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod error;
pub mod request;
pub mod trend;

// Re-exports for convenience
pub use content::{CarouselSlide, PostVariation, SlideRole};
pub use error::DomainError;
pub use request::{
    CarouselRequest, GenerationRequest, ImageRequest, Length, Tone, DEFAULT_SLIDE_COUNT,
    MAX_SLIDE_COUNT, MIN_SLIDE_COUNT, POST_VARIATION_COUNT,
};
pub use trend::Trend;
