//! Bento Size Heuristic: fixed lookup of grid span weights keyed on item
//! position and item count.
//!
//! # Table
//! - total ≤ 2: every cell spans 1 column
//! - total 3 or 4: index 0 is the hero (2 columns)
//! - total 5: index 0 is the hero; index 3 is a second hero only under
//!   `FiveItemRule::SecondHero`
//! - total ≥ 6: index 0 and index 3 span 2 columns
//!
//! The media block additionally gives the first hero two rows (`bento_cell`).

use serde::{Deserialize, Serialize};

/// How a five-item bento grid is balanced. The media and card blocks of the
/// component library disagree here, so the choice is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiveItemRule {
    /// Only index 0 is enlarged (media block behaviour).
    #[default]
    SingleHero,
    /// Index 0 and index 3 are enlarged (card block behaviour).
    SecondHero,
}

impl FiveItemRule {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "single_hero" => Some(FiveItemRule::SingleHero),
            "second_hero" => Some(FiveItemRule::SecondHero),
            _ => None,
        }
    }
}

/// Number of grid columns a bento cell spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SpanClass {
    One = 1,
    Two = 2,
    Three = 3,
}

impl SpanClass {
    pub fn columns(self) -> u8 {
        self as u8
    }
}

impl From<SpanClass> for u8 {
    fn from(span: SpanClass) -> u8 {
        span.columns()
    }
}

impl TryFrom<u8> for SpanClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpanClass::One),
            2 => Ok(SpanClass::Two),
            3 => Ok(SpanClass::Three),
            other => Err(format!("span must be 1, 2 or 3 (got {other})")),
        }
    }
}

/// Explicit per-item size that overrides the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSize {
    Sm,
    Md,
    Lg,
}

impl From<ItemSize> for SpanClass {
    fn from(size: ItemSize) -> Self {
        match size {
            ItemSize::Sm => SpanClass::One,
            ItemSize::Md => SpanClass::Two,
            ItemSize::Lg => SpanClass::Three,
        }
    }
}

/// Column and row span of one bento cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BentoCell {
    pub columns: SpanClass,
    pub rows: u8,
}

/// Column span for the item at `index` in a bento grid of `total` items.
///
/// `total` is floored at 1; an `index` past the end gets the plain weight.
pub fn bento_span(index: usize, total: usize, rule: FiveItemRule) -> SpanClass {
    let total = total.max(1);
    if index >= total {
        return SpanClass::One;
    }

    match total {
        1 | 2 => SpanClass::One,
        3 | 4 => hero_only(index),
        5 => match rule {
            FiveItemRule::SingleHero => hero_only(index),
            FiveItemRule::SecondHero => two_heroes(index),
        },
        _ => two_heroes(index),
    }
}

/// Column and row span for a media cell. The first hero is square (2×2); the
/// second hero is a wide strip (2×1).
pub fn bento_cell(index: usize, total: usize, rule: FiveItemRule) -> BentoCell {
    let columns = bento_span(index, total, rule);
    let rows = if index == 0 && columns == SpanClass::Two {
        2
    } else {
        1
    };
    BentoCell { columns, rows }
}

/// Like `bento_span`, but an explicit item size wins.
pub fn bento_span_with_override(
    index: usize,
    total: usize,
    rule: FiveItemRule,
    size: Option<ItemSize>,
) -> SpanClass {
    size.map(SpanClass::from)
        .unwrap_or_else(|| bento_span(index, total, rule))
}

fn hero_only(index: usize) -> SpanClass {
    if index == 0 {
        SpanClass::Two
    } else {
        SpanClass::One
    }
}

fn two_heroes(index: usize) -> SpanClass {
    if index == 0 || index == 3 {
        SpanClass::Two
    } else {
        SpanClass::One
    }
}
