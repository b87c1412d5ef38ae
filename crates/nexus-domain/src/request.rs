//! Generation requests submitted to the pipeline
//!
//! Requests are immutable and constructed per call. Fields are private so that
//! every instance has passed validation.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of post variations produced per request
pub const POST_VARIATION_COUNT: usize = 3;

/// Smallest carousel the pipeline will build
pub const MIN_SLIDE_COUNT: u32 = 3;

/// Largest carousel the pipeline will build
pub const MAX_SLIDE_COUNT: u32 = 10;

/// Slide count used when a caller does not specify one
pub const DEFAULT_SLIDE_COUNT: u32 = 5;

/// Voice of a generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    /// Measured, expert register
    #[default]
    Professional,

    /// Scroll-stopping opener, punchy delivery
    #[serde(rename = "Viral/Hook", alias = "Viral", alias = "Hook")]
    ViralHook,

    /// First-person narrative
    Storytelling,

    /// Contrarian take that invites debate
    Controversial,
}

impl Tone {
    /// All tones in presentation order
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::ViralHook,
        Tone::Storytelling,
        Tone::Controversial,
    ];

    /// Display name, as written into prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::ViralHook => "Viral/Hook",
            Tone::Storytelling => "Storytelling",
            Tone::Controversial => "Controversial",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "viral/hook" | "viral" | "hook" | "viral-hook" => Ok(Tone::ViralHook),
            "storytelling" | "story" => Ok(Tone::Storytelling),
            "controversial" => Ok(Tone::Controversial),
            _ => Err(DomainError::UnknownTone(s.to_string())),
        }
    }
}

/// Target length of a generated post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Length {
    /// A handful of lines
    Short,
    /// The usual feed post
    #[default]
    Medium,
    /// Long-form post
    Long,
}

impl Length {
    /// Display name, as written into prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Length::Short => "Short",
            Length::Medium => "Medium",
            Length::Long => "Long",
        }
    }

    /// Approximate word range per post, used as prompt guidance
    pub fn word_range(&self) -> (u32, u32) {
        match self {
            Length::Short => (60, 100),
            Length::Medium => (100, 200),
            Length::Long => (200, 350),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Length {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            _ => Err(DomainError::UnknownLength(s.to_string())),
        }
    }
}

/// Request for a batch of post variations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    tone: Tone,
    length: Length,
}

impl GenerationRequest {
    /// Create a validated request
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyTopic`] if the topic is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_domain::{GenerationRequest, Length, Tone};
    ///
    /// let request = GenerationRequest::new("  Remote Work ", Tone::Professional, Length::Medium).unwrap();
    /// assert_eq!(request.topic(), "Remote Work");
    /// assert!(GenerationRequest::new("   ", Tone::Professional, Length::Short).is_err());
    /// ```
    pub fn new(topic: impl Into<String>, tone: Tone, length: Length) -> Result<Self, DomainError> {
        Ok(Self {
            topic: normalize_topic(topic.into())?,
            tone,
            length,
        })
    }

    /// Topic, trimmed
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Requested tone
    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Requested length
    pub fn length(&self) -> Length {
        self.length
    }
}

/// Request for a carousel of `slide_count` slides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselRequest {
    topic: String,
    slide_count: u32,
}

impl CarouselRequest {
    /// Create a validated request
    ///
    /// # Errors
    /// Returns an error for a blank topic or a slide count outside
    /// [`MIN_SLIDE_COUNT`]..=[`MAX_SLIDE_COUNT`].
    pub fn new(topic: impl Into<String>, slide_count: u32) -> Result<Self, DomainError> {
        let topic = normalize_topic(topic.into())?;
        if !(MIN_SLIDE_COUNT..=MAX_SLIDE_COUNT).contains(&slide_count) {
            return Err(DomainError::SlideCountOutOfRange {
                count: slide_count,
                min: MIN_SLIDE_COUNT,
                max: MAX_SLIDE_COUNT,
            });
        }
        Ok(Self { topic, slide_count })
    }

    /// Topic, trimmed
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Exact number of slides expected back
    pub fn slide_count(&self) -> u32 {
        self.slide_count
    }
}

/// Request for an illustrative image prompt (auxiliary, best effort)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    topic: String,
    style: String,
}

impl ImageRequest {
    /// Style used when the caller leaves it blank
    pub const DEFAULT_STYLE: &'static str = "Photorealistic";

    /// Create a validated request
    pub fn new(topic: impl Into<String>, style: Option<String>) -> Result<Self, DomainError> {
        let style = style
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_STYLE.to_string());
        Ok(Self {
            topic: normalize_topic(topic.into())?,
            style,
        })
    }

    /// Topic, trimmed
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Visual style
    pub fn style(&self) -> &str {
        &self.style
    }
}

fn normalize_topic(topic: String) -> Result<String, DomainError> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyTopic);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_trims_topic() {
        let request = GenerationRequest::new("  AI Agents  ", Tone::Storytelling, Length::Long).unwrap();
        assert_eq!(request.topic(), "AI Agents");
        assert_eq!(request.tone(), Tone::Storytelling);
        assert_eq!(request.length(), Length::Long);
    }

    #[test]
    fn test_generation_request_rejects_empty_topic() {
        assert_eq!(
            GenerationRequest::new("", Tone::Professional, Length::Medium),
            Err(DomainError::EmptyTopic)
        );
        assert_eq!(
            GenerationRequest::new(" \n\t", Tone::Professional, Length::Medium),
            Err(DomainError::EmptyTopic)
        );
    }

    #[test]
    fn test_carousel_request_bounds() {
        assert!(CarouselRequest::new("Deep Work", 3).is_ok());
        assert!(CarouselRequest::new("Deep Work", 10).is_ok());

        assert!(matches!(
            CarouselRequest::new("Deep Work", 2),
            Err(DomainError::SlideCountOutOfRange { count: 2, .. })
        ));
        assert!(matches!(
            CarouselRequest::new("Deep Work", 11),
            Err(DomainError::SlideCountOutOfRange { count: 11, .. })
        ));
    }

    #[test]
    fn test_carousel_request_rejects_empty_topic_before_count() {
        assert_eq!(CarouselRequest::new("", 42), Err(DomainError::EmptyTopic));
    }

    #[test]
    fn test_image_request_default_style() {
        let request = ImageRequest::new("Sustainable Tech", None).unwrap();
        assert_eq!(request.style(), ImageRequest::DEFAULT_STYLE);

        let request = ImageRequest::new("Sustainable Tech", Some("   ".to_string())).unwrap();
        assert_eq!(request.style(), ImageRequest::DEFAULT_STYLE);

        let request = ImageRequest::new("Sustainable Tech", Some("Watercolor".to_string())).unwrap();
        assert_eq!(request.style(), "Watercolor");
    }

    #[test]
    fn test_tone_display_names() {
        assert_eq!(Tone::ViralHook.to_string(), "Viral/Hook");
        assert_eq!(Tone::Professional.as_str(), "Professional");
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!("viral/hook".parse::<Tone>().unwrap(), Tone::ViralHook);
        assert_eq!("Viral".parse::<Tone>().unwrap(), Tone::ViralHook);
        assert_eq!("STORYTELLING".parse::<Tone>().unwrap(), Tone::Storytelling);
        assert!(matches!("sarcastic".parse::<Tone>(), Err(DomainError::UnknownTone(_))));
    }

    #[test]
    fn test_length_parse_and_ranges() {
        assert_eq!("long".parse::<Length>().unwrap(), Length::Long);
        assert!("huge".parse::<Length>().is_err());

        for length in [Length::Short, Length::Medium, Length::Long] {
            let (low, high) = length.word_range();
            assert!(low < high);
        }
    }

    #[test]
    fn test_tone_serde_uses_display_names() {
        let json = serde_json::to_string(&Tone::ViralHook).unwrap();
        assert_eq!(json, r#""Viral/Hook""#);

        let tone: Tone = serde_json::from_str(r#""Viral/Hook""#).unwrap();
        assert_eq!(tone, Tone::ViralHook);

        let length: Length = serde_json::from_str(r#""Short""#).unwrap();
        assert_eq!(length, Length::Short);
    }
}
