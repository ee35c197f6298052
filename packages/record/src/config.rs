//! # App configuration — `memberform.toml`
//!
//! Display settings for the two screens. The mobile app embeds the file at compile
//! time and parses it once on launch.
//!
//! ## Structure
//!
//! ```toml
//! [review]
//! mask_symbol = "•"       # character repeated once per secret character
//!
//! [clock]
//! enabled = true
//! format = "%H:%M:%S"     # chrono strftime format
//! refresh_secs = 1        # 0 is treated as 1
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `memberform.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

/// Review screen settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default = "default_mask_symbol")]
    pub mask_symbol: char,
}

/// Live clock settings for the entry screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_clock_enabled")]
    pub enabled: bool,
    #[serde(default = "default_clock_format")]
    pub format: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u32,
}

fn default_mask_symbol() -> char {
    '•'
}

fn default_clock_enabled() -> bool {
    true
}

fn default_clock_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_refresh_secs() -> u32 {
    1
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            mask_symbol: default_mask_symbol(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            enabled: default_clock_enabled(),
            format: default_clock_format(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl ClockConfig {
    /// Refresh period in seconds, never zero.
    pub fn refresh_period_secs(&self) -> u64 {
        u64::from(self.refresh_secs.max(1))
    }
}

impl AppConfig {
    /// Builder method to set the mask symbol.
    pub fn with_mask_symbol(mut self, symbol: char) -> Self {
        self.review.mask_symbol = symbol;
        self
    }

    /// Builder method to turn the clock on or off.
    pub fn with_clock(mut self, enabled: bool) -> Self {
        self.clock.enabled = enabled;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "memberform.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.review.mask_symbol, '•');
        assert_eq!(config.clock.format, "%H:%M:%S");
        assert!(config.clock.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml("[review]\nmask_symbol = \"*\"\n\n[clock]\nenabled = false\n").unwrap();
        assert_eq!(config.review.mask_symbol, '*');
        assert!(!config.clock.enabled);
        assert_eq!(config.clock.refresh_secs, 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default().with_mask_symbol('#').with_clock(false);
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        assert!(AppConfig::from_toml("[review]\nmask_symbol = \"too long\"").is_err());
        assert_eq!(AppConfig::from_toml_or_default("not = [valid"), AppConfig::default());
    }

    #[test]
    fn test_refresh_period_never_zero() {
        let mut clock = ClockConfig::default();
        clock.refresh_secs = 0;
        assert_eq!(clock.refresh_period_secs(), 1);
        clock.refresh_secs = 5;
        assert_eq!(clock.refresh_period_secs(), 5);
    }
}
