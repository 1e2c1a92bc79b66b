//! Layout Variant Resolver: maps a section's enumerated style configuration to
//! a renderer-agnostic `ArrangementDescriptor`.
//!
//! Every combination of the five enums plus `full_bleed` is valid; `resolve` is
//! total and never fails. The `Default` of each enum is the baseline the code
//! generator compares against when deciding which props to emit.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Variant enums
// ────────────────────────────────────────────────────────────────────────────

/// Vertical padding of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    None,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

/// Background treatment of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Transparent,
    Muted,
    Card,
    Gradient,
    Primary,
}

/// Horizontal max width of the inner container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerWidth {
    #[default]
    Default,
    Wide,
    Narrow,
    Full,
}

/// Text alignment of the section header and CTA row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Heading scale of the section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl Padding {
    pub const ALL: [Padding; 5] = [
        Padding::None,
        Padding::Sm,
        Padding::Md,
        Padding::Lg,
        Padding::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Padding::None => "none",
            Padding::Sm => "sm",
            Padding::Md => "md",
            Padding::Lg => "lg",
            Padding::Xl => "xl",
        }
    }
}

impl Background {
    pub const ALL: [Background; 5] = [
        Background::Transparent,
        Background::Muted,
        Background::Card,
        Background::Gradient,
        Background::Primary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Background::Transparent => "transparent",
            Background::Muted => "muted",
            Background::Card => "card",
            Background::Gradient => "gradient",
            Background::Primary => "primary",
        }
    }
}

impl ContainerWidth {
    pub const ALL: [ContainerWidth; 4] = [
        ContainerWidth::Default,
        ContainerWidth::Wide,
        ContainerWidth::Narrow,
        ContainerWidth::Full,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContainerWidth::Default => "default",
            ContainerWidth::Wide => "wide",
            ContainerWidth::Narrow => "narrow",
            ContainerWidth::Full => "full",
        }
    }
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl TitleSize {
    pub const ALL: [TitleSize; 4] = [TitleSize::Sm, TitleSize::Md, TitleSize::Lg, TitleSize::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            TitleSize::Sm => "sm",
            TitleSize::Md => "md",
            TitleSize::Lg => "lg",
            TitleSize::Xl => "xl",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Arrangement descriptor
// ────────────────────────────────────────────────────────────────────────────

/// Vertical spacing in spacing-scale steps (1 step = 0.25rem), mobile first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerticalSpacing {
    pub base: u8,
    /// Applied from the `md` breakpoint upwards.
    pub md: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundTreatment {
    pub surface: Background,
    /// Top and bottom hairline borders (`card` surface).
    pub bordered: bool,
    /// Foreground switches to the primary-contrast colour.
    pub inverted_text: bool,
    pub gradient: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizontalExtent {
    pub container: ContainerWidth,
    /// `None` means unconstrained.
    pub max_width_px: Option<u32>,
    pub full_bleed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextArrangement {
    pub alignment: Alignment,
    /// Header block is narrowed when it is not left-aligned.
    pub header_max_width_px: Option<u32>,
    pub cta_justify: Justify,
}

/// Type-scale steps for the section title, from smallest breakpoint up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingScale {
    pub size: TitleSize,
    pub steps: Vec<&'static str>,
}

/// The resolved, renderer-agnostic style axes for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrangementDescriptor {
    pub spacing: VerticalSpacing,
    pub background: BackgroundTreatment,
    pub extent: HorizontalExtent,
    pub text: TextArrangement,
    pub heading: HeadingScale,
}

/// Utility-class strings equivalent to a descriptor, one per rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    pub section: String,
    pub container: String,
    pub header: String,
    pub title: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

const HEADER_NARROW_PX: u32 = 768;

/// Resolves the enumerated configuration of a block to its arrangement.
pub fn resolve(
    padding: Padding,
    background: Background,
    container: ContainerWidth,
    alignment: Alignment,
    title_size: TitleSize,
    full_bleed: bool,
) -> ArrangementDescriptor {
    let spacing = match padding {
        Padding::None => VerticalSpacing { base: 0, md: 0 },
        Padding::Sm => VerticalSpacing { base: 8, md: 12 },
        Padding::Md => VerticalSpacing { base: 12, md: 16 },
        Padding::Lg => VerticalSpacing { base: 16, md: 24 },
        Padding::Xl => VerticalSpacing { base: 20, md: 32 },
    };

    let background = BackgroundTreatment {
        surface: background,
        bordered: background == Background::Card,
        inverted_text: background == Background::Primary,
        gradient: background == Background::Gradient,
    };

    let max_width_px = match container {
        ContainerWidth::Default => Some(1280),
        ContainerWidth::Wide => Some(1536),
        ContainerWidth::Narrow => Some(896),
        ContainerWidth::Full => None,
    };

    let text = match alignment {
        Alignment::Left => TextArrangement {
            alignment,
            header_max_width_px: None,
            cta_justify: Justify::Start,
        },
        Alignment::Center => TextArrangement {
            alignment,
            header_max_width_px: Some(HEADER_NARROW_PX),
            cta_justify: Justify::Center,
        },
        Alignment::Right => TextArrangement {
            alignment,
            header_max_width_px: Some(HEADER_NARROW_PX),
            cta_justify: Justify::End,
        },
    };

    let steps = match title_size {
        TitleSize::Sm => vec!["2xl", "3xl"],
        TitleSize::Md => vec!["3xl", "4xl"],
        TitleSize::Lg => vec!["4xl", "5xl"],
        TitleSize::Xl => vec!["5xl", "6xl", "7xl"],
    };

    ArrangementDescriptor {
        spacing,
        background,
        extent: HorizontalExtent {
            container,
            max_width_px,
            full_bleed,
        },
        text,
        heading: HeadingScale {
            size: title_size,
            steps,
        },
    }
}

impl ArrangementDescriptor {
    /// Renders the descriptor as the utility classes the web renderer applies.
    pub fn class_names(&self) -> ClassNames {
        let mut section = vec!["relative".to_string(), "w-full".to_string()];
        section.push(format!("py-{}", self.spacing.base));
        if self.spacing.md != self.spacing.base {
            section.push(format!("md:py-{}", self.spacing.md));
        }
        section.push(
            match self.background.surface {
                Background::Transparent => "bg-transparent",
                Background::Muted => "bg-muted",
                Background::Card => "bg-card border-y",
                Background::Primary => "bg-primary text-primary-foreground",
                Background::Gradient => {
                    "bg-gradient-to-br from-primary/10 via-accent/5 to-background"
                }
            }
            .to_string(),
        );

        let width = match self.extent.container {
            ContainerWidth::Default => "max-w-7xl",
            ContainerWidth::Wide => "max-w-[1536px]",
            ContainerWidth::Narrow => "max-w-4xl",
            ContainerWidth::Full => "max-w-none",
        };

        let header = match self.text.alignment {
            Alignment::Left => "space-y-3 md:space-y-4 text-left",
            Alignment::Center => "space-y-3 md:space-y-4 text-center mx-auto max-w-3xl",
            Alignment::Right => "space-y-3 md:space-y-4 text-right ml-auto max-w-3xl",
        };

        let breakpoints = ["", "md:", "lg:"];
        let title_steps: Vec<String> = self
            .heading
            .steps
            .iter()
            .zip(breakpoints.iter())
            .map(|(step, bp)| format!("{bp}text-{step}"))
            .collect();

        ClassNames {
            section: section.join(" "),
            container: format!("mx-auto px-4 md:px-6 lg:px-8 {width}"),
            header: header.to_string(),
            title: format!("font-bold tracking-tight {}", title_steps.join(" ")),
        }
    }
}
