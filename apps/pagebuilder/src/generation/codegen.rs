//! Source-Code Generator: projects a composition onto the `<SectionBlock>`
//! source a developer would write by hand.
//!
//! # Rules
//! - Scalar props are emitted only when they differ from their default, in the
//!   order padding, background, container, alignment, titleSize.
//! - `fullBleed` is a bare flag.
//! - `title` / `subtitle` need both the visibility flag and non-empty text.
//! - CTA buttons are fixed placeholder literals.
//! - A content slot becomes a comment naming the slot and its layout; item
//!   data is never serialized.
//!
//! Pure string building: no AST, no mutation, byte-identical on repeat calls.

use crate::composition::block::{BlockConfig, ContentSlotConfig};
use crate::composition::model::Composition;
use crate::layout::variants::{Alignment, Background, ContainerWidth, Padding, TitleSize};

const COMPONENT: &str = "SectionBlock";
const CTA1_LITERAL: &str = r#"cta1={{ text: "Get Started", variant: "default" }}"#;
const CTA2_LITERAL: &str = r#"cta2={{ text: "Learn More", variant: "outline" }}"#;

/// Generates the source for every block, separated by a blank line.
pub fn generate(composition: &Composition) -> String {
    composition
        .blocks()
        .iter()
        .map(generate_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generates the source for a single block.
pub fn generate_block(block: &BlockConfig) -> String {
    let props = block_props(block);
    let props_str = if props.is_empty() {
        String::new()
    } else {
        format!("\n  {}\n", props.join("\n  "))
    };
    let content_str = content_placeholder(&block.content)
        .map(|comment| format!("\n  {comment}\n"))
        .unwrap_or_default();

    format!("<{COMPONENT}{props_str}>{content_str}</{COMPONENT}>")
}

fn block_props(block: &BlockConfig) -> Vec<String> {
    let mut props = Vec::new();

    if block.padding != Padding::default() {
        props.push(string_prop("padding", block.padding.as_str()));
    }
    if block.background != Background::default() {
        props.push(string_prop("background", block.background.as_str()));
    }
    if block.container != ContainerWidth::default() {
        props.push(string_prop("container", block.container.as_str()));
    }
    if block.alignment != Alignment::default() {
        props.push(string_prop("alignment", block.alignment.as_str()));
    }
    if block.title_size != TitleSize::default() {
        props.push(string_prop("titleSize", block.title_size.as_str()));
    }
    if block.full_bleed {
        props.push("fullBleed".to_string());
    }
    if let Some(title) = block.visible_title() {
        props.push(string_prop("title", title));
    }
    if let Some(subtitle) = block.visible_subtitle() {
        props.push(string_prop("subtitle", subtitle));
    }
    if block.show_cta1 {
        props.push(CTA1_LITERAL.to_string());
    }
    if block.show_cta2 {
        props.push(CTA2_LITERAL.to_string());
    }

    props
}

/// `name="value"`, or `name={"..."}` when the value cannot sit inside a plain
/// attribute string.
fn string_prop(name: &str, value: &str) -> String {
    let needs_expression = value.contains(['"', '\\', '\n', '\r', '{', '}']);
    if needs_expression {
        let escaped = serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"));
        format!("{name}={{{escaped}}}")
    } else {
        format!("{name}=\"{value}\"")
    }
}

fn content_placeholder(content: &ContentSlotConfig) -> Option<String> {
    match content {
        ContentSlotConfig::None => None,
        ContentSlotConfig::Faq => Some("{/* Add your faq content */}".to_string()),
        ContentSlotConfig::Media(_) | ContentSlotConfig::Cards(_) => {
            let layout = content.layout().map(|l| l.as_str()).unwrap_or("single");
            Some(format!(
                "{{/* Add your {} content ({layout} layout) */}}",
                content.kind_str()
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::block::{BlockId, BlockPatch, ItemSlot, SlotLayout};

    #[test]
    fn test_default_block_emits_bare_tag() {
        let c = Composition::default();
        assert_eq!(generate(&c), "<SectionBlock></SectionBlock>");
    }

    #[test]
    fn test_all_default_blocks_emit_bare_tags() {
        let mut c = Composition::default();
        c.append(&BlockPatch::default()).unwrap();
        c.append(&BlockPatch::default()).unwrap();
        assert_eq!(
            generate(&c),
            "<SectionBlock></SectionBlock>\n\n<SectionBlock></SectionBlock>\n\n<SectionBlock></SectionBlock>"
        );
    }

    #[test]
    fn test_append_scenario_emits_only_changed_props() {
        let mut c = Composition::default();
        c.append(&BlockPatch {
            padding: Some(Padding::Sm),
            background: Some(Background::Muted),
            title: Some("New Section".to_string()),
            show_title: Some(true),
            ..Default::default()
        })
        .unwrap();
        let expected = "<SectionBlock></SectionBlock>\n\n\
                        <SectionBlock\n  padding=\"sm\"\n  background=\"muted\"\n  title=\"New Section\"\n></SectionBlock>";
        assert_eq!(generate(&c), expected);
    }

    #[test]
    fn test_hero_block_prop_order() {
        let mut c = Composition::new(&BlockPatch {
            padding: Some(Padding::Xl),
            container: Some(ContainerWidth::Narrow),
            alignment: Some(Alignment::Center),
            title_size: Some(TitleSize::Xl),
            full_bleed: Some(true),
            title: Some("Welcome to Ramp".to_string()),
            subtitle: Some("Modern energy management platform".to_string()),
            show_title: Some(true),
            show_subtitle: Some(true),
            show_cta1: Some(true),
            show_cta2: Some(true),
            ..Default::default()
        });
        c.select(BlockId(1)).unwrap();
        let expected = r#"<SectionBlock
  padding="xl"
  container="narrow"
  alignment="center"
  titleSize="xl"
  fullBleed
  title="Welcome to Ramp"
  subtitle="Modern energy management platform"
  cta1={{ text: "Get Started", variant: "default" }}
  cta2={{ text: "Learn More", variant: "outline" }}
></SectionBlock>"#;
        assert_eq!(generate(&c), expected);
    }

    #[test]
    fn test_hidden_or_empty_text_is_omitted() {
        let block = {
            let mut b = BlockConfig::with_id(BlockId(1));
            b.title = Some("Hidden".to_string());
            b.show_title = false;
            b.subtitle = None;
            b.show_subtitle = true;
            b
        };
        assert_eq!(generate_block(&block), "<SectionBlock></SectionBlock>");
    }

    #[test]
    fn test_content_slot_emits_placeholder_with_layout() {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.content = ContentSlotConfig::Media(ItemSlot::new(SlotLayout::Bento));
        assert_eq!(
            generate_block(&block),
            "<SectionBlock>\n  {/* Add your media content (bento layout) */}\n</SectionBlock>"
        );

        block.content = ContentSlotConfig::Faq;
        block.background = Background::Card;
        assert_eq!(
            generate_block(&block),
            "<SectionBlock\n  background=\"card\"\n>\n  {/* Add your faq content */}\n</SectionBlock>"
        );
    }

    #[test]
    fn test_side_by_side_cards_placeholder() {
        let mut block = BlockConfig::with_id(BlockId(1));
        let mut cards = crate::composition::block::CardSlot::default();
        cards.items.layout = SlotLayout::SideBySide;
        block.content = ContentSlotConfig::Cards(cards);
        assert!(generate_block(&block).contains("(sideBySide layout)"));
    }

    #[test]
    fn test_quotes_in_title_use_expression_literal() {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.title = Some(r#"The "best" platform"#.to_string());
        block.show_title = true;
        assert_eq!(
            generate_block(&block),
            "<SectionBlock\n  title={\"The \\\"best\\\" platform\"}\n></SectionBlock>"
        );
    }

    #[test]
    fn test_generate_is_idempotent_and_read_only() {
        let mut c = Composition::default();
        c.append(&BlockPatch {
            show_cta2: Some(true),
            content: Some(ContentSlotConfig::cards()),
            ..Default::default()
        })
        .unwrap();
        let before = c.clone();
        let first = generate(&c);
        let second = generate(&c);
        assert_eq!(first, second);
        assert_eq!(c, before);
    }
}
