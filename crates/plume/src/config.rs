//! Configuration types for Plume diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML or any other serde format. Every section and field is optional.
//!
//! ```toml
//! [style]
//! background_color = "#fafafa"
//! font_family = "Helvetica"
//! ```
//!
//! # Example
//!
//! ```
//! # use plume::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.style().font_family(), "Arial");
//! ```

use serde::Deserialize;

use plume_core::color::Color;

const DEFAULT_BACKGROUND: &str = "white";
const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given style section.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Canvas background color, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for every label.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Creates a style section with explicit values.
    pub fn new(background_color: Option<String>, font_family: Option<String>) -> Self {
        Self {
            background_color,
            font_family,
        }
    }

    /// Returns the parsed background [`Color`], white when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Color, String> {
        let color = self.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND);
        Color::new(color).map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the label font family, `Arial` when unset.
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }
}
