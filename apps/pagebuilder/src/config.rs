use anyhow::{bail, Context, Result};

use crate::layout::carousel::DEFAULT_GAP_PX;
use crate::layout::{FiveItemRule, PreviewOptions};

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How a five-item bento grid is sized.
    pub five_item_rule: FiveItemRule,
    pub carousel_gap_px: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let five_item_rule = match lookup("BENTO_FIVE_ITEM_RULE") {
            None => FiveItemRule::default(),
            Some(raw) => FiveItemRule::parse(&raw).with_context(|| {
                format!("BENTO_FIVE_ITEM_RULE must be 'single_hero' or 'second_hero' (got '{raw}')")
            })?,
        };

        let carousel_gap_px = match lookup("CAROUSEL_GAP_PX") {
            None => DEFAULT_GAP_PX,
            Some(raw) => {
                let gap = raw
                    .trim()
                    .parse::<f64>()
                    .context("CAROUSEL_GAP_PX must be a number")?;
                if !gap.is_finite() || gap < 0.0 {
                    bail!("CAROUSEL_GAP_PX must be a non-negative number (got {gap})");
                }
                gap
            }
        };

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            five_item_rule,
            carousel_gap_px,
        })
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            five_item_rule: self.five_item_rule,
            carousel_gap_px: self.carousel_gap_px,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            five_item_rule: FiveItemRule::default(),
            carousel_gap_px: DEFAULT_GAP_PX,
        }
    }
}
