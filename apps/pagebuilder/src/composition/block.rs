use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::bento::ItemSize;
use crate::layout::variants::{
    resolve, Alignment, ArrangementDescriptor, Background, ContainerWidth, Padding, TitleSize,
};

// ────────────────────────────────────────────────────────────────────────────
// Identity
// ────────────────────────────────────────────────────────────────────────────

/// Stable block identifier, unique within one composition for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content slot
// ────────────────────────────────────────────────────────────────────────────

/// Arrangement of the items inside a media or card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotLayout {
    Single,
    Carousel,
    Grid,
    Bento,
    SideBySide,
}

impl SlotLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotLayout::Single => "single",
            SlotLayout::Carousel => "carousel",
            SlotLayout::Grid => "grid",
            SlotLayout::Bento => "bento",
            SlotLayout::SideBySide => "sideBySide",
        }
    }
}

pub const DEFAULT_ITEM_COUNT: u32 = 3;
/// Largest item count the builder offers for one slot.
pub const MAX_ITEM_COUNT: u32 = 24;
pub const DEFAULT_COLUMNS: u8 = 3;

/// Item list shared by media and card slots.
///
/// `items_per_page` and `scroll_by` only mean something when `layout` is
/// `Carousel`; every consumer ignores them otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub layout: SlotLayout,
    pub item_count: u32,
    pub items_per_page: f64,
    pub scroll_by: u32,
}

impl ItemSlot {
    pub fn new(layout: SlotLayout) -> Self {
        Self {
            layout,
            item_count: DEFAULT_ITEM_COUNT,
            items_per_page: 1.0,
            scroll_by: 1,
        }
    }

    /// Carousel paging parameters, or `None` for any other layout.
    pub fn carousel_params(&self) -> Option<(f64, u32)> {
        (self.layout == SlotLayout::Carousel).then_some((self.items_per_page, self.scroll_by))
    }
}

/// Card slot: an item slot plus a fixed grid column count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    #[serde(flatten)]
    pub items: ItemSlot,
    pub columns: u8,
    /// Explicit bento size per card, by position. Missing or `null` entries
    /// fall back to the span heuristic.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_sizes: Vec<Option<ItemSize>>,
}

impl Default for CardSlot {
    fn default() -> Self {
        Self {
            items: ItemSlot::new(SlotLayout::Grid),
            columns: DEFAULT_COLUMNS,
            item_sizes: Vec::new(),
        }
    }
}

/// Optional embedded content of a block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSlotConfig {
    #[default]
    None,
    Media(ItemSlot),
    Cards(CardSlot),
    /// Fixed illustrative question/answer list.
    Faq,
}

impl ContentSlotConfig {
    pub fn media() -> Self {
        ContentSlotConfig::Media(ItemSlot::new(SlotLayout::Single))
    }

    pub fn cards() -> Self {
        ContentSlotConfig::Cards(CardSlot::default())
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            ContentSlotConfig::None => "none",
            ContentSlotConfig::Media(_) => "media",
            ContentSlotConfig::Cards(_) => "cards",
            ContentSlotConfig::Faq => "faq",
        }
    }

    pub fn layout(&self) -> Option<SlotLayout> {
        match self {
            ContentSlotConfig::Media(slot) => Some(slot.layout),
            ContentSlotConfig::Cards(slot) => Some(slot.items.layout),
            ContentSlotConfig::None | ContentSlotConfig::Faq => None,
        }
    }

    /// Checks the numeric fields are inside their domains.
    pub fn validate(&self) -> Result<(), String> {
        let check_items = |slot: &ItemSlot| -> Result<(), String> {
            if !(1..=MAX_ITEM_COUNT).contains(&slot.item_count) {
                return Err(format!(
                    "item_count must be between 1 and {MAX_ITEM_COUNT} (got {})",
                    slot.item_count
                ));
            }
            if !(slot.items_per_page.is_finite() && slot.items_per_page > 0.0) {
                return Err(format!(
                    "items_per_page must be a positive number (got {})",
                    slot.items_per_page
                ));
            }
            if slot.scroll_by < 1 {
                return Err("scroll_by must be at least 1".to_string());
            }
            Ok(())
        };

        match self {
            ContentSlotConfig::None | ContentSlotConfig::Faq => Ok(()),
            ContentSlotConfig::Media(slot) => check_items(slot),
            ContentSlotConfig::Cards(slot) => {
                check_items(&slot.items)?;
                if !(2..=4).contains(&slot.columns) {
                    return Err(format!("columns must be 2, 3 or 4 (got {})", slot.columns));
                }
                if slot.item_sizes.len() > slot.items.item_count as usize {
                    return Err(format!(
                        "item_sizes has {} entries for {} items",
                        slot.item_sizes.len(),
                        slot.items.item_count
                    ));
                }
                Ok(())
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block configuration
// ────────────────────────────────────────────────────────────────────────────

/// One page section's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    pub id: BlockId,
    pub padding: Padding,
    pub background: Background,
    pub container: ContainerWidth,
    pub alignment: Alignment,
    pub title_size: TitleSize,
    pub full_bleed: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub show_title: bool,
    pub show_subtitle: bool,
    pub show_cta1: bool,
    pub show_cta2: bool,
    #[serde(default)]
    pub content: ContentSlotConfig,
}

impl BlockConfig {
    /// The documented default instance, carrying the given id.
    pub fn with_id(id: BlockId) -> Self {
        Self {
            id,
            padding: Padding::default(),
            background: Background::default(),
            container: ContainerWidth::default(),
            alignment: Alignment::default(),
            title_size: TitleSize::default(),
            full_bleed: false,
            title: None,
            subtitle: None,
            show_title: false,
            show_subtitle: false,
            show_cta1: false,
            show_cta2: false,
            content: ContentSlotConfig::None,
        }
    }

    pub fn arrangement(&self) -> ArrangementDescriptor {
        resolve(
            self.padding,
            self.background,
            self.container,
            self.alignment,
            self.title_size,
            self.full_bleed,
        )
    }

    /// Title text when it is both visible and non-empty.
    pub fn visible_title(&self) -> Option<&str> {
        visible_text(self.show_title, self.title.as_deref())
    }

    pub fn visible_subtitle(&self) -> Option<&str> {
        visible_text(self.show_subtitle, self.subtitle.as_deref())
    }

    /// Merges every field set in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: &BlockPatch) {
        if let Some(v) = patch.padding {
            self.padding = v;
        }
        if let Some(v) = patch.background {
            self.background = v;
        }
        if let Some(v) = patch.container {
            self.container = v;
        }
        if let Some(v) = patch.alignment {
            self.alignment = v;
        }
        if let Some(v) = patch.title_size {
            self.title_size = v;
        }
        if let Some(v) = patch.full_bleed {
            self.full_bleed = v;
        }
        if let Some(v) = &patch.title {
            self.title = non_empty(v);
        }
        if let Some(v) = &patch.subtitle {
            self.subtitle = non_empty(v);
        }
        if let Some(v) = patch.show_title {
            self.show_title = v;
        }
        if let Some(v) = patch.show_subtitle {
            self.show_subtitle = v;
        }
        if let Some(v) = patch.show_cta1 {
            self.show_cta1 = v;
        }
        if let Some(v) = patch.show_cta2 {
            self.show_cta2 = v;
        }
        if let Some(v) = &patch.content {
            self.content = v.clone();
        }
    }
}

fn visible_text(shown: bool, text: Option<&str>) -> Option<&str> {
    match text {
        Some(t) if shown && !t.is_empty() => Some(t),
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Partial update of a block. Unset fields are left unchanged; an empty
/// `title`/`subtitle` clears the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_size: Option<TitleSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_subtitle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_cta1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_cta2: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentSlotConfig>,
}

impl BlockPatch {
    /// Layers `other` on top of `self`: fields set in `other` win.
    pub fn merged(mut self, other: &BlockPatch) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field.clone(); })*
            };
        }
        take!(
            padding,
            background,
            container,
            alignment,
            title_size,
            full_bleed,
            title,
            subtitle,
            show_title,
            show_subtitle,
            show_cta1,
            show_cta2,
            content
        );
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        match &self.content {
            Some(content) => content.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance_matches_documented_defaults() {
        let block = BlockConfig::with_id(BlockId(1));
        assert_eq!(block.padding, Padding::Lg);
        assert_eq!(block.background, Background::Transparent);
        assert_eq!(block.container, ContainerWidth::Default);
        assert_eq!(block.alignment, Alignment::Left);
        assert_eq!(block.title_size, TitleSize::Lg);
        assert!(!block.full_bleed);
        assert!(!block.show_title && !block.show_subtitle);
        assert!(!block.show_cta1 && !block.show_cta2);
        assert_eq!(block.content, ContentSlotConfig::None);
    }

    #[test]
    fn test_apply_patch_merges_only_set_fields() {
        let mut block = BlockConfig::with_id(BlockId(3));
        block.apply(&BlockPatch {
            padding: Some(Padding::Sm),
            title: Some("Hello".to_string()),
            show_title: Some(true),
            ..Default::default()
        });
        assert_eq!(block.id, BlockId(3));
        assert_eq!(block.padding, Padding::Sm);
        assert_eq!(block.background, Background::Transparent);
        assert_eq!(block.visible_title(), Some("Hello"));
    }

    #[test]
    fn test_empty_title_clears_text() {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.title = Some("Old".to_string());
        block.apply(&BlockPatch {
            title: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(block.title, None);
    }

    #[test]
    fn test_hidden_title_is_not_visible() {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.title = Some("Kept".to_string());
        block.show_title = false;
        assert_eq!(block.visible_title(), None);
        block.show_title = true;
        assert_eq!(block.visible_title(), Some("Kept"));
    }

    #[test]
    fn test_patch_merge_prefers_later_fields() {
        let base = BlockPatch {
            padding: Some(Padding::Xl),
            title: Some("Preset".to_string()),
            ..Default::default()
        };
        let overrides = BlockPatch {
            title: Some("Custom".to_string()),
            ..Default::default()
        };
        let merged = base.merged(&overrides);
        assert_eq!(merged.padding, Some(Padding::Xl));
        assert_eq!(merged.title.as_deref(), Some("Custom"));
    }

    #[test]
    fn test_carousel_params_only_for_carousel_layout() {
        let mut slot = ItemSlot::new(SlotLayout::Grid);
        slot.items_per_page = 2.5;
        assert_eq!(slot.carousel_params(), None);
        slot.layout = SlotLayout::Carousel;
        assert_eq!(slot.carousel_params(), Some((2.5, 1)));
    }

    #[test]
    fn test_content_validation() {
        assert!(ContentSlotConfig::media().validate().is_ok());
        let mut cards = CardSlot::default();
        cards.columns = 5;
        assert!(ContentSlotConfig::Cards(cards).validate().is_err());

        let mut media = ItemSlot::new(SlotLayout::Carousel);
        media.items_per_page = 0.0;
        assert!(ContentSlotConfig::Media(media.clone()).validate().is_err());
        media.items_per_page = 1.5;
        media.item_count = 0;
        assert!(ContentSlotConfig::Media(media).validate().is_err());
    }

    #[test]
    fn test_item_count_is_bounded() {
        let mut media = ItemSlot::new(SlotLayout::Grid);
        media.item_count = MAX_ITEM_COUNT;
        assert!(ContentSlotConfig::Media(media.clone()).validate().is_ok());
        media.item_count = 4_000_000_000;
        let err = ContentSlotConfig::Media(media).validate().unwrap_err();
        assert!(err.contains("item_count"));

        let patch = BlockPatch {
            content: Some(ContentSlotConfig::Cards(CardSlot {
                items: ItemSlot {
                    item_count: MAX_ITEM_COUNT + 1,
                    ..ItemSlot::new(SlotLayout::Bento)
                },
                ..CardSlot::default()
            })),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_item_sizes_cannot_outnumber_items() {
        let mut cards = CardSlot::default();
        cards.item_sizes = vec![Some(ItemSize::Lg), None, None];
        assert!(ContentSlotConfig::Cards(cards.clone()).validate().is_ok());
        cards.item_sizes.push(None);
        assert!(ContentSlotConfig::Cards(cards).validate().is_err());
    }

    #[test]
    fn test_content_slot_wire_shape() {
        let json = serde_json::to_value(ContentSlotConfig::cards()).unwrap();
        assert_eq!(json["kind"], "cards");
        assert_eq!(json["layout"], "grid");
        assert_eq!(json["columns"], 3);
        assert!(json.get("item_sizes").is_none());

        let parsed: ContentSlotConfig = serde_json::from_str(
            r#"{"kind":"media","layout":"sideBySide","item_count":2,"items_per_page":1.0,"scroll_by":1}"#,
        )
        .unwrap();
        assert_eq!(parsed.layout(), Some(SlotLayout::SideBySide));
    }
}
