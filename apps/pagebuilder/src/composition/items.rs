//! Illustrative item fixtures for previews. Items are rebuilt wholesale from
//! the slot's item count; nothing here is user-editable.

use serde::Serialize;

use crate::layout::bento::ItemSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Video,
    Square,
    Portrait,
    Wide,
}

impl AspectRatio {
    /// Width over height.
    pub fn ratio(self) -> (u32, u32) {
        match self {
            AspectRatio::Video => (16, 9),
            AspectRatio::Square => (1, 1),
            AspectRatio::Portrait => (3, 4),
            AspectRatio::Wide => (21, 9),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub alt: String,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardItem {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
    pub footer: Option<String>,
    pub size: Option<ItemSize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

const ASPECT_CYCLE: [AspectRatio; 4] = [
    AspectRatio::Video,
    AspectRatio::Square,
    AspectRatio::Wide,
    AspectRatio::Portrait,
];

const CARD_FIXTURES: [(&str, &str, &str); 6] = [
    ("activity", "Real-time Monitoring", "Track energy usage in real-time"),
    ("sparkles", "Smart Optimization", "AI-powered cost reduction"),
    ("plug", "Easy Integration", "Connect existing systems"),
    ("shield", "Secure by Default", "Encrypted data at rest and in transit"),
    ("bar-chart", "Detailed Reports", "Export usage and savings reports"),
    ("users", "Team Access", "Invite your whole operations team"),
];

const FAQ_FIXTURES: [FaqItem; 3] = [
    FaqItem {
        question: "What is Ramp?",
        answer: "Ramp is a comprehensive energy management platform that helps you \
                 monitor, optimize, and control your energy systems.",
    },
    FaqItem {
        question: "How does it work?",
        answer: "Our platform integrates with your existing infrastructure to provide \
                 real-time insights and automated optimization.",
    },
    FaqItem {
        question: "Is there a free trial?",
        answer: "Yes! We offer a 14-day free trial with full access to all features.",
    },
];

/// `count` media placeholders; every fourth item is a video.
pub fn media_items(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| {
            let aspect_ratio = ASPECT_CYCLE[i % ASPECT_CYCLE.len()];
            let (w, h) = aspect_ratio.ratio();
            let kind = if i % 4 == 3 {
                MediaKind::Video
            } else {
                MediaKind::Image
            };
            MediaItem {
                kind,
                src: format!("/api/placeholder/{}/{}", w * 80, h * 80),
                alt: format!("Media {}", i + 1),
                aspect_ratio,
            }
        })
        .collect()
}

/// `count` feature cards, cycling through the fixture set. `sizes` assigns an
/// explicit bento size by position; cards past its end have none.
pub fn card_items(count: usize, sizes: &[Option<ItemSize>]) -> Vec<CardItem> {
    (0..count)
        .map(|i| {
            let (icon, title, description) = CARD_FIXTURES[i % CARD_FIXTURES.len()];
            let round = i / CARD_FIXTURES.len();
            let title = if round == 0 {
                title.to_string()
            } else {
                format!("{title} {}", round + 1)
            };
            CardItem {
                icon,
                title,
                description: description.to_string(),
                footer: None,
                size: sizes.get(i).copied().flatten(),
            }
        })
        .collect()
}

pub fn faq_items() -> &'static [FaqItem] {
    &FAQ_FIXTURES
}
