use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed ui config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid ui config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Tunables for the page controllers. Every field is optional in the JSON
/// form; missing values fall back to the site defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub pulse: PulseConfig,
    /// `tracing` filter directive for console output.
    pub log_filter: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            pulse: PulseConfig::default(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header switches to the elevated style strictly past this offset.
    pub elevate_after_px: f64,
    /// Header hides when scrolling down strictly past this offset.
    pub hide_after_px: f64,
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            elevate_after_px: 100.0,
            hide_after_px: 200.0,
            parallax_rate: -0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub selector: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            selector: crate::reveal::REVEAL_SELECTOR.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub scale: f64,
    pub revert_after_ms: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            scale: 1.02,
            revert_after_ms: 150,
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: format!("{} is outside 0..=1", self.reveal.threshold),
            });
        }
        if self.reveal.selector.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "reveal.selector",
                reason: "selector must not be empty".into(),
            });
        }
        for (field, value) in [
            ("scroll.elevate_after_px", self.scroll.elevate_after_px),
            ("scroll.hide_after_px", self.scroll.hide_after_px),
            ("scroll.parallax_rate", self.scroll.parallax_rate),
            ("pulse.scale", self.pulse.scale),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite number".into(),
                });
            }
        }
        Ok(())
    }
}
