//! Runtime tuning a page may supply as `window.__SITE_CONFIG__`.

use serde::Deserialize;

use crate::{
    anchor::DEFAULT_HEADER_OFFSET_PX,
    counter::DEFAULT_COUNTER_STEPS,
    reveal::{DEFAULT_HIDDEN_OFFSET_PX, DEFAULT_VIEWPORT_DIVISOR},
    theme::THEME_STORAGE_KEY,
};

/// Knobs for the page behaviors. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Space left above an anchor target after smooth scrolling.
    pub header_offset_px: f64,
    /// Cards reveal once their top is above `innerHeight / reveal_viewport_divisor`.
    pub reveal_viewport_divisor: f64,
    /// How far hidden cards are shifted down.
    pub reveal_offset_px: f64,
    /// Delay before the visitor counter starts.
    pub counter_start_delay_ms: u32,
    /// Interval between counter ticks.
    pub counter_tick_ms: u32,
    /// Increments the counter takes to reach its target.
    pub counter_steps: u32,
    /// Local storage key of the theme preference.
    pub theme_storage_key: String,
    /// Emit `console.debug` lines for skipped behaviors.
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            reveal_viewport_divisor: DEFAULT_VIEWPORT_DIVISOR,
            reveal_offset_px: DEFAULT_HIDDEN_OFFSET_PX,
            counter_start_delay_ms: 1000,
            counter_tick_ms: 30,
            counter_steps: DEFAULT_COUNTER_STEPS,
            theme_storage_key: THEME_STORAGE_KEY.to_string(),
            debug: false,
        }
    }
}

impl SiteConfig {
    /// Parse and normalize a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::normalized)
    }

    /// Replace values the behaviors cannot work with by their defaults.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !self.header_offset_px.is_finite() || self.header_offset_px < 0.0 {
            self.header_offset_px = defaults.header_offset_px;
        }
        if !self.reveal_viewport_divisor.is_finite() || self.reveal_viewport_divisor <= 0.0 {
            self.reveal_viewport_divisor = defaults.reveal_viewport_divisor;
        }
        if !self.reveal_offset_px.is_finite() || self.reveal_offset_px < 0.0 {
            self.reveal_offset_px = defaults.reveal_offset_px;
        }
        self.counter_steps = self.counter_steps.max(1);
        if self.theme_storage_key.trim().is_empty() {
            self.theme_storage_key = defaults.theme_storage_key;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("parse config");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.counter_start_delay_ms, 1000);
        assert_eq!(config.counter_tick_ms, 30);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn partial_object_overrides_selected_fields() {
        let config =
            SiteConfig::from_json(r#"{"header_offset_px": 64, "debug": true, "extra": 1}"#)
                .expect("parse config");
        assert_eq!(config.header_offset_px, 64.0);
        assert!(config.debug);
        assert_eq!(config.counter_steps, 50);
    }

    #[test]
    fn unusable_values_are_normalized() {
        let config = SiteConfig::from_json(
            r#"{"header_offset_px": -5, "reveal_viewport_divisor": 0, "counter_steps": 0, "theme_storage_key": "  "}"#,
        )
        .expect("parse config");
        assert_eq!(config.header_offset_px, 80.0);
        assert_eq!(config.reveal_viewport_divisor, 1.2);
        assert_eq!(config.counter_steps, 1);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn wrong_types_are_errors() {
        assert!(SiteConfig::from_json(r#"{"counter_tick_ms": "fast"}"#).is_err());
        assert!(SiteConfig::from_json("[]").is_err());
    }
}
