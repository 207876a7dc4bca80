// Configuration for the decorations
//
// Decorations never read global config themselves. The plugin builds a
// DecorationConfig and hands it to each decoration it creates.
use crate::geometry::clamp_label_scale;
use crate::{DecoError, Result};
use serde::{Deserialize, Serialize};
use utils::{anyhow, log, Context};

use std::str::FromStr;

/// Environment variables that override the built in defaults
pub const ENV_LABEL_SCALE: &str = "SCROLLER_JUMP_LABELS_SCALE";
pub const ENV_LABEL_FONT: &str = "SCROLLER_JUMP_LABELS_FONT";
pub const ENV_LABEL_COLOR: &str = "SCROLLER_JUMP_LABELS_COLOR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationConfig {
    /// Size of a jump label relative to its window, clamped to [0.1, 1.0]
    pub jump_labels_scale: f64,
    /// Font for jump labels, empty means use `font_family`
    pub jump_labels_font: String,
    /// Label colour as `0xAARRGGBB`
    pub jump_labels_color: u32,
    /// The compositor wide default font
    pub font_family: String,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            jump_labels_scale: 0.5,
            jump_labels_font: String::new(),
            jump_labels_color: 0x80159e30,
            font_family: "Sans".to_string(),
        }
    }
}

impl DecorationConfig {
    pub fn builder() -> DecorationConfigBuilder {
        DecorationConfigBuilder {
            ci: DecorationConfig::default(),
        }
    }

    /// The label scale actually used for drawing
    pub fn label_scale(&self) -> f64 {
        clamp_label_scale(self.jump_labels_scale)
    }

    /// The font used for labels, falling back to the default font
    pub fn label_font(&self) -> &str {
        match self.jump_labels_font.is_empty() {
            true => self.font_family.as_str(),
            false => self.jump_labels_font.as_str(),
        }
    }
}

/// Parse a `0xAARRGGBB` colour, plain decimal is accepted too
fn parse_color(val: &str) -> utils::Result<u32> {
    let val = val.trim();
    let hex = val
        .strip_prefix("0x")
        .or_else(|| val.strip_prefix("0X"));

    match hex {
        Some(digits) => u32::from_str_radix(digits, 16).context("Invalid hex colour"),
        None => u32::from_str(val).context("Invalid decimal colour"),
    }
}

fn parse_scale(val: &str) -> utils::Result<f64> {
    let scale = f64::from_str(val.trim()).context("Label scale must be a floating point number")?;
    if !scale.is_finite() {
        return Err(anyhow!("Label scale must be finite"));
    }
    Ok(scale)
}

/// Implements the builder pattern for easier config creation
pub struct DecorationConfigBuilder {
    ci: DecorationConfig,
}

impl DecorationConfigBuilder {
    pub fn jump_labels_scale(mut self, scale: f64) -> Self {
        self.ci.jump_labels_scale = scale;
        self
    }

    pub fn jump_labels_font(mut self, font: &str) -> Self {
        self.ci.jump_labels_font = font.to_string();
        self
    }

    pub fn jump_labels_color(mut self, argb: u32) -> Self {
        self.ci.jump_labels_color = argb;
        self
    }

    pub fn font_family(mut self, font: &str) -> Self {
        self.ci.font_family = font.to_string();
        self
    }

    /// Apply overrides from the environment
    pub fn env_overrides(self) -> Result<Self> {
        self.overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to
    /// its value if it is set.
    pub fn overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let invalid = |key: &'static str, value: &str, err: utils::Error| DecoError::InvalidConfig {
            key: key,
            value: value.to_string(),
            reason: format!("{:#}", err),
        };

        if let Some(val) = lookup(ENV_LABEL_SCALE) {
            self.ci.jump_labels_scale =
                parse_scale(&val).map_err(|e| invalid(ENV_LABEL_SCALE, val.as_str(), e))?;
            log::debug!("Using user specified label scale {:?}", self.ci.jump_labels_scale);
        }

        if let Some(val) = lookup(ENV_LABEL_FONT) {
            log::debug!("Using user specified label font {:?}", val);
            self.ci.jump_labels_font = val;
        }

        if let Some(val) = lookup(ENV_LABEL_COLOR) {
            self.ci.jump_labels_color =
                parse_color(&val).map_err(|e| invalid(ENV_LABEL_COLOR, val.as_str(), e))?;
            log::debug!("Using user specified label colour {:#x}", self.ci.jump_labels_color);
        }

        Ok(self)
    }

    pub fn build(self) -> DecorationConfig {
        self.ci
    }
}
