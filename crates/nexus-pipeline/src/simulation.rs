//! Deterministic placeholder output used when every provider has failed
//!
//! The simulation has no I/O and cannot fail. Its output satisfies the same
//! shape rules as accepted provider output.

use nexus_domain::{CarouselSlide, PostVariation, SlideRole};

/// Tips cycled through the insight slides of a simulated carousel
///
/// A carousel of the maximum size has seven insight slides, so every insight
/// gets a distinct tip.
const INSIGHT_TIPS: [&str; 7] = [
    "Start with one small, measurable change.",
    "Automate the repetitive parts first.",
    "Share progress publicly to stay accountable.",
    "Measure outcomes, not activity.",
    "Learn from the people already doing it well.",
    "Cut one meeting and protect that time.",
    "Review and adjust every week.",
];

/// Placeholder content generator
pub struct Simulation;

impl Simulation {
    /// Three post variations, each mentioning `topic`
    pub fn posts(topic: &str) -> Vec<PostVariation> {
        vec![
            PostVariation {
                id: 1,
                title: "The Strategy (Simulated)".to_string(),
                content: format!(
                    "Here is why {} matters.\n\n1. Efficiency\n2. Scale\n3. Profit\n\nStart today.",
                    topic
                ),
            },
            PostVariation {
                id: 2,
                title: "The Story (Simulated)".to_string(),
                content: format!(
                    "I used to struggle with {}. Then I found a better way.\n\nNow I save 10 hours a week.",
                    topic
                ),
            },
            PostVariation {
                id: 3,
                title: "The Guide (Simulated)".to_string(),
                content: format!(
                    "How to master {} in 3 steps:\n\n- Audit\n- Build\n- Ship\n\nSave this.",
                    topic
                ),
            },
        ]
    }

    /// `count` slides following the hook / problem / insights / summary structure
    pub fn slides(topic: &str, count: u32) -> Vec<CarouselSlide> {
        (1..=count)
            .map(|position| {
                let (title, content) = match SlideRole::for_position(position, count) {
                    SlideRole::Hook => (
                        topic.to_string(),
                        format!("Everything you need to know about {}. Swipe.", topic),
                    ),
                    SlideRole::Problem => (
                        "The Problem".to_string(),
                        format!("Most people get {} wrong. Here is why.", topic),
                    ),
                    SlideRole::Insight(n) => {
                        let tip = INSIGHT_TIPS[(n as usize - 1) % INSIGHT_TIPS.len()];
                        (format!("Insight {}", n), tip.to_string())
                    }
                    SlideRole::Summary => (
                        "Summary".to_string(),
                        format!("{} rewards consistency. Follow for more.", topic),
                    ),
                };
                CarouselSlide {
                    id: position,
                    title,
                    content,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_posts_contain_topic() {
        let posts = Simulation::posts("Remote Work");
        assert_eq!(posts.len(), 3);
        for (idx, post) in posts.iter().enumerate() {
            assert_eq!(post.id as usize, idx + 1);
            assert!(post.title.ends_with("(Simulated)"));
            assert!(post.content.contains("Remote Work"));
        }
    }

    #[test]
    fn test_slides_follow_roles() {
        let slides = Simulation::slides("Deep Work", 5);
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].title, "Deep Work");
        assert_eq!(slides[1].title, "The Problem");
        assert_eq!(slides[2].title, "Insight 1");
        assert_eq!(slides[4].title, "Summary");
        assert!(slides[4].content.contains("Deep Work"));
    }

    proptest! {
        #[test]
        fn test_slides_are_complete_and_distinct(count in 3u32..=10) {
            let slides = Simulation::slides("Topic", count);
            prop_assert_eq!(slides.len(), count as usize);

            let ids: Vec<u32> = slides.iter().map(|s| s.id).collect();
            prop_assert_eq!(ids, (1..=count).collect::<Vec<_>>());

            let contents: HashSet<&str> = slides.iter().map(|s| s.content.as_str()).collect();
            prop_assert_eq!(contents.len(), slides.len());

            for slide in &slides {
                prop_assert!(!slide.title.is_empty());
                prop_assert!(!slide.content.is_empty());
            }
        }
    }
}
