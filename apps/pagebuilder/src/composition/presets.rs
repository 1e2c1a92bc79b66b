//! Static block catalog: named starting configurations for new sections.

use serde::Serialize;

use crate::composition::block::{BlockPatch, CardSlot, ContentSlotConfig, ItemSlot, SlotLayout};
use crate::layout::variants::{Alignment, Background, ContainerWidth, Padding, TitleSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockCategory {
    Hero,
    Content,
    #[serde(rename = "FAQ")]
    Faq,
    #[serde(rename = "CTA")]
    Cta,
}

impl BlockCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(BlockCategory::Hero),
            "content" => Some(BlockCategory::Content),
            "faq" => Some(BlockCategory::Faq),
            "cta" => Some(BlockCategory::Cta),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: BlockCategory,
    pub tags: Vec<&'static str>,
    pub config: BlockPatch,
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// The full catalog, in display order.
pub fn catalog() -> Vec<BlockPreset> {
    vec![
        BlockPreset {
            id: "hero-centered",
            name: "Hero - Centered",
            description: "Centered hero section with large title, subtitle, and two CTA buttons",
            category: BlockCategory::Hero,
            tags: vec!["Hero", "CTA", "Centered"],
            config: BlockPatch {
                padding: Some(Padding::Xl),
                alignment: Some(Alignment::Center),
                title_size: Some(TitleSize::Xl),
                title: text("Welcome to Ramp"),
                subtitle: text(
                    "Modern energy management platform for monitoring, optimizing, \
                     and controlling your energy systems",
                ),
                show_title: Some(true),
                show_subtitle: Some(true),
                show_cta1: Some(true),
                show_cta2: Some(true),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "hero-with-image",
            name: "Hero - With Image",
            description: "Hero section with title, CTAs, and image/illustration in content area",
            category: BlockCategory::Hero,
            tags: vec!["Hero", "Image", "CTA"],
            config: BlockPatch {
                container: Some(ContainerWidth::Wide),
                title: text("Energy Management Simplified"),
                subtitle: text(
                    "Monitor, optimize, and control your energy systems from a single platform",
                ),
                show_title: Some(true),
                show_subtitle: Some(true),
                show_cta1: Some(true),
                show_cta2: Some(true),
                content: Some(ContentSlotConfig::Media(ItemSlot {
                    item_count: 1,
                    ..ItemSlot::new(SlotLayout::Single)
                })),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "hero-gradient",
            name: "Hero - Gradient Background",
            description: "Eye-catching hero with gradient background and centered layout",
            category: BlockCategory::Hero,
            tags: vec!["Hero", "Gradient", "Centered"],
            config: BlockPatch {
                padding: Some(Padding::Xl),
                background: Some(Background::Gradient),
                alignment: Some(Alignment::Center),
                title_size: Some(TitleSize::Xl),
                title: text("Transform Your Energy Management"),
                subtitle: text("Join thousands of businesses optimizing their energy usage"),
                show_title: Some(true),
                show_subtitle: Some(true),
                show_cta1: Some(true),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "content-basic",
            name: "Content - Feature Grid",
            description: "Section header with a three-column grid of feature cards",
            category: BlockCategory::Content,
            tags: vec!["Content", "Grid", "Features"],
            config: BlockPatch {
                title: text("Why Choose Ramp?"),
                subtitle: text("Everything you need to manage energy at scale"),
                show_title: Some(true),
                show_subtitle: Some(true),
                content: Some(ContentSlotConfig::Cards(CardSlot::default())),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "faq-section",
            name: "FAQ Section",
            description: "Centered FAQ section with accordion content",
            category: BlockCategory::Faq,
            tags: vec!["FAQ", "Accordion", "Centered"],
            config: BlockPatch {
                alignment: Some(Alignment::Center),
                title: text("Frequently Asked Questions"),
                subtitle: text("Everything you need to know about Ramp"),
                show_title: Some(true),
                show_subtitle: Some(true),
                content: Some(ContentSlotConfig::Faq),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "cta-primary",
            name: "CTA - Primary",
            description: "Prominent call-to-action section with primary background color",
            category: BlockCategory::Cta,
            tags: vec!["CTA", "Primary", "Centered"],
            config: BlockPatch {
                padding: Some(Padding::Xl),
                background: Some(Background::Primary),
                alignment: Some(Alignment::Center),
                title: text("Ready to get started?"),
                subtitle: text("Join thousands of energy managers using Ramp today"),
                show_title: Some(true),
                show_subtitle: Some(true),
                show_cta1: Some(true),
                show_cta2: Some(true),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "cta-muted",
            name: "CTA - Muted",
            description: "Subtle call-to-action section with muted background",
            category: BlockCategory::Cta,
            tags: vec!["CTA", "Muted", "Centered"],
            config: BlockPatch {
                background: Some(Background::Muted),
                alignment: Some(Alignment::Center),
                title_size: Some(TitleSize::Md),
                title: text("Have questions?"),
                subtitle: text("Our team is here to help you get the most out of Ramp"),
                show_title: Some(true),
                show_subtitle: Some(true),
                show_cta1: Some(true),
                ..Default::default()
            },
        },
        BlockPreset {
            id: "new-section",
            name: "New Section",
            description: "Plain section with a title and subtitle, as added by the page builder",
            category: BlockCategory::Content,
            tags: vec!["Content", "Basic"],
            config: BlockPatch {
                title: text("New Section"),
                subtitle: text("Add your content here"),
                show_title: Some(true),
                show_subtitle: Some(true),
                ..Default::default()
            },
        },
    ]
}

pub fn find(id: &str) -> Option<BlockPreset> {
    catalog().into_iter().find(|p| p.id == id)
}

/// Presets in `category`; `None` or "All" returns the whole catalog.
pub fn by_category(category: Option<&str>) -> Result<Vec<BlockPreset>, String> {
    match category.map(str::trim) {
        None | Some("") => Ok(catalog()),
        Some(c) if c.eq_ignore_ascii_case("all") => Ok(catalog()),
        Some(c) => {
            let wanted = BlockCategory::parse(c).ok_or_else(|| format!("unknown category '{c}'"))?;
            Ok(catalog()
                .into_iter()
                .filter(|p| p.category == wanted)
                .collect())
        }
    }
}
