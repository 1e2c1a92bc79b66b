//! Preview builder: joins a block's arrangement with its content payload so a
//! renderer has everything it needs in one self-consistent value.

use serde::Serialize;

use crate::composition::block::{BlockConfig, BlockId, ContentSlotConfig, ItemSlot, SlotLayout};
use crate::composition::items::{card_items, faq_items, media_items, CardItem, FaqItem, MediaItem};
use crate::layout::bento::{bento_cell, bento_span_with_override, BentoCell, FiveItemRule};
use crate::layout::carousel::{pager, PagerState, DEFAULT_GAP_PX};
use crate::layout::variants::{ArrangementDescriptor, ClassNames};

/// Host-level knobs that affect rendering but are not part of a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub five_item_rule: FiveItemRule,
    pub carousel_gap_px: f64,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            five_item_rule: FiveItemRule::default(),
            carousel_gap_px: DEFAULT_GAP_PX,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CtaPreview {
    pub text: &'static str,
    pub variant: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewCell<T> {
    pub item: T,
    /// Only set for bento layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<BentoCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarouselPreview {
    pub pager: PagerState,
    pub gap_px: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPreview {
    None,
    Media {
        layout: SlotLayout,
        grid_columns: u8,
        cells: Vec<PreviewCell<MediaItem>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        carousel: Option<CarouselPreview>,
    },
    Cards {
        layout: SlotLayout,
        grid_columns: u8,
        cells: Vec<PreviewCell<CardItem>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        carousel: Option<CarouselPreview>,
    },
    Faq {
        items: &'static [FaqItem],
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockPreview {
    pub id: BlockId,
    pub selected: bool,
    pub arrangement: ArrangementDescriptor,
    pub classes: ClassNames,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub ctas: Vec<CtaPreview>,
    pub content: ContentPreview,
}

/// Bento grids are always three columns wide.
const BENTO_COLUMNS: u8 = 3;

pub fn preview_block(block: &BlockConfig, selected: bool, options: &PreviewOptions) -> BlockPreview {
    let arrangement = block.arrangement();
    let classes = arrangement.class_names();

    let mut ctas = Vec::new();
    if block.show_cta1 {
        ctas.push(CtaPreview {
            text: "Get Started",
            variant: "default",
        });
    }
    if block.show_cta2 {
        ctas.push(CtaPreview {
            text: "Learn More",
            variant: "outline",
        });
    }

    BlockPreview {
        id: block.id,
        selected,
        arrangement,
        classes,
        title: block.visible_title().map(str::to_string),
        subtitle: block.visible_subtitle().map(str::to_string),
        ctas,
        content: preview_content(&block.content, options),
    }
}

fn preview_content(content: &ContentSlotConfig, options: &PreviewOptions) -> ContentPreview {
    match content {
        ContentSlotConfig::None => ContentPreview::None,
        ContentSlotConfig::Faq => ContentPreview::Faq { items: faq_items() },
        ContentSlotConfig::Media(slot) => {
            let total = slot.item_count as usize;
            let cells = media_items(total)
                .into_iter()
                .enumerate()
                .map(|(i, item)| PreviewCell {
                    item,
                    span: (slot.layout == SlotLayout::Bento)
                        .then(|| bento_cell(i, total, options.five_item_rule)),
                })
                .collect();
            ContentPreview::Media {
                layout: slot.layout,
                grid_columns: grid_columns(slot, 3),
                cells,
                carousel: carousel_preview(slot, options),
            }
        }
        ContentSlotConfig::Cards(card_slot) => {
            let slot = &card_slot.items;
            let total = slot.item_count as usize;
            let cells = card_items(total, &card_slot.item_sizes)
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    let span = (slot.layout == SlotLayout::Bento).then(|| BentoCell {
                        columns: bento_span_with_override(
                            i,
                            total,
                            options.five_item_rule,
                            item.size,
                        ),
                        rows: 1,
                    });
                    PreviewCell { item, span }
                })
                .collect();
            ContentPreview::Cards {
                layout: slot.layout,
                grid_columns: grid_columns(slot, card_slot.columns),
                cells,
                carousel: carousel_preview(slot, options),
            }
        }
    }
}

fn grid_columns(slot: &ItemSlot, grid: u8) -> u8 {
    match slot.layout {
        SlotLayout::Grid => grid,
        SlotLayout::Bento => BENTO_COLUMNS,
        SlotLayout::SideBySide => 2,
        SlotLayout::Single | SlotLayout::Carousel => 1,
    }
}

fn carousel_preview(slot: &ItemSlot, options: &PreviewOptions) -> Option<CarouselPreview> {
    slot.carousel_params()
        .map(|(items_per_page, scroll_by)| CarouselPreview {
            pager: pager(
                slot.item_count as usize,
                items_per_page,
                scroll_by as usize,
            ),
            gap_px: options.carousel_gap_px,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::block::CardSlot;
    use crate::layout::bento::{ItemSize, SpanClass};

    fn block_with(content: ContentSlotConfig) -> BlockConfig {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.content = content;
        block
    }

    #[test]
    fn test_header_and_ctas_follow_visibility() {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.title = Some("Shown".to_string());
        block.show_title = true;
        block.subtitle = Some("Hidden".to_string());
        block.show_cta2 = true;
        let preview = preview_block(&block, true, &PreviewOptions::default());
        assert_eq!(preview.title.as_deref(), Some("Shown"));
        assert_eq!(preview.subtitle, None);
        assert_eq!(preview.ctas.len(), 1);
        assert_eq!(preview.ctas[0].variant, "outline");
        assert!(preview.selected);
    }

    #[test]
    fn test_five_item_bento_media_sequence() {
        let mut slot = ItemSlot::new(SlotLayout::Bento);
        slot.item_count = 5;
        let block = block_with(ContentSlotConfig::Media(slot));

        let spans = |rule| match preview_block(
            &block,
            false,
            &PreviewOptions {
                five_item_rule: rule,
                ..Default::default()
            },
        )
        .content
        {
            ContentPreview::Media { cells, .. } => cells
                .iter()
                .map(|c| c.span.unwrap().columns.columns())
                .collect::<Vec<_>>(),
            other => panic!("unexpected content {other:?}"),
        };

        assert_eq!(spans(FiveItemRule::SingleHero), vec![2, 1, 1, 1, 1]);
        assert_eq!(spans(FiveItemRule::SecondHero), vec![2, 1, 1, 2, 1]);
    }

    #[test]
    fn test_carousel_fields_ignored_outside_carousel() {
        let mut cards = CardSlot::default();
        cards.items.items_per_page = 2.5;
        cards.items.scroll_by = 3;
        let block = block_with(ContentSlotConfig::Cards(cards));
        match preview_block(&block, false, &PreviewOptions::default()).content {
            ContentPreview::Cards {
                carousel,
                grid_columns,
                cells,
                ..
            } => {
                assert!(carousel.is_none());
                assert_eq!(grid_columns, 3);
                assert!(cells.iter().all(|c| c.span.is_none()));
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_carousel_preview_carries_pager() {
        let mut slot = ItemSlot::new(SlotLayout::Carousel);
        slot.item_count = 6;
        slot.items_per_page = 1.5;
        slot.scroll_by = 2;
        let block = block_with(ContentSlotConfig::Media(slot));
        match preview_block(&block, false, &PreviewOptions::default()).content {
            ContentPreview::Media {
                carousel: Some(carousel),
                ..
            } => {
                assert_eq!(carousel.pager.max_page_index, 2);
                assert!(carousel.pager.controls_visible);
                assert_eq!(carousel.gap_px, DEFAULT_GAP_PX);
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_bento_cards_use_three_columns() {
        let mut cards = CardSlot::default();
        cards.items.layout = SlotLayout::Bento;
        cards.items.item_count = 6;
        let block = block_with(ContentSlotConfig::Cards(cards));
        match preview_block(&block, false, &PreviewOptions::default()).content {
            ContentPreview::Cards {
                grid_columns,
                cells,
                ..
            } => {
                assert_eq!(grid_columns, 3);
                assert_eq!(cells[3].span.unwrap().columns, SpanClass::Two);
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_sized_card_overrides_bento_span() {
        let mut cards = CardSlot::default();
        cards.items.layout = SlotLayout::Bento;
        cards.items.item_count = 6;
        cards.item_sizes = vec![Some(ItemSize::Sm), None, Some(ItemSize::Lg)];
        let block = block_with(ContentSlotConfig::Cards(cards));
        match preview_block(&block, false, &PreviewOptions::default()).content {
            ContentPreview::Cards { cells, .. } => {
                let spans: Vec<u8> = cells
                    .iter()
                    .map(|c| c.span.unwrap().columns.columns())
                    .collect();
                assert_eq!(spans, vec![1, 1, 3, 2, 1, 1]);
                assert_eq!(cells[2].item.size, Some(ItemSize::Lg));
            }
            other => panic!("unexpected content {other:?}"),
        }
    }

    #[test]
    fn test_faq_preview_uses_fixture() {
        let block = block_with(ContentSlotConfig::Faq);
        let json =
            serde_json::to_value(preview_block(&block, false, &PreviewOptions::default())).unwrap();
        assert_eq!(json["content"]["kind"], "faq");
        assert_eq!(json["content"]["items"].as_array().unwrap().len(), 3);
    }
}
