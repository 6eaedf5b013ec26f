use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Contents of yearpick.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Construction input for one picker instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Initial selection and first anchor
    #[serde(default = "default_start")]
    pub start: i64,
    /// Values materialized per growth step
    #[serde(default = "default_chunk_size")]
    pub chunk_size: i64,
    /// Distance to a rendered edge that triggers growth
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Size of one rendered item
    #[serde(default = "default_item_extent")]
    pub item_extent: f64,
    /// Visible extent of the panel
    #[serde(default = "default_viewport")]
    pub viewport: f64,
    /// Home jumps here
    #[serde(default = "default_high_sentinel")]
    pub high_sentinel: i64,
    /// End jumps here
    #[serde(default = "default_low_sentinel")]
    pub low_sentinel: i64,
    /// PageUp/PageDown step
    #[serde(default = "default_page_step")]
    pub page_step: i64,
    /// Keyboard commits grow the window when the target is this close to an edge
    #[serde(default = "default_lookahead")]
    pub lookahead: i64,
    /// Lowest selectable value; defaults to `low_sentinel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Highest selectable value; defaults to `high_sentinel`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            start: default_start(),
            chunk_size: default_chunk_size(),
            threshold: default_threshold(),
            item_extent: default_item_extent(),
            viewport: default_viewport(),
            high_sentinel: default_high_sentinel(),
            low_sentinel: default_low_sentinel(),
            page_step: default_page_step(),
            lookahead: default_lookahead(),
            min: None,
            max: None,
        }
    }
}

fn default_start() -> i64 {
    chrono::Local::now().year() as i64
}

fn default_chunk_size() -> i64 {
    80
}

fn default_threshold() -> f64 {
    3.0
}

fn default_item_extent() -> f64 {
    1.0
}

fn default_viewport() -> f64 {
    10.0
}

fn default_high_sentinel() -> i64 {
    9999
}

fn default_low_sentinel() -> i64 {
    1
}

fn default_page_step() -> i64 {
    10
}

fn default_lookahead() -> i64 {
    5
}

fn default_field() -> String {
    "year".into()
}

/// A rejected configuration value
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidValue {
    pub field: &'static str,
    pub reason: String,
}

impl PickerConfig {
    /// Config with the given start value and defaults for everything else
    pub fn with_start(start: i64) -> Self {
        PickerConfig {
            start,
            ..Default::default()
        }
    }

    /// Selectable range: `min`/`max` when set, otherwise the sentinels
    pub fn bounds(&self) -> (i64, i64) {
        (
            self.min.unwrap_or(self.low_sentinel),
            self.max.unwrap_or(self.high_sentinel),
        )
    }

    pub fn validate(&self) -> Result<(), InvalidValue> {
        let invalid = |field, reason: &str| {
            Err(InvalidValue {
                field,
                reason: reason.to_string(),
            })
        };
        if self.chunk_size <= 0 {
            return invalid("chunk_size", "must be greater than zero");
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return invalid("threshold", "must be a finite number >= 0");
        }
        if !self.item_extent.is_finite() || self.item_extent <= 0.0 {
            return invalid("item_extent", "must be a finite number > 0");
        }
        if !self.viewport.is_finite() || self.viewport <= 0.0 {
            return invalid("viewport", "must be a finite number > 0");
        }
        if self.low_sentinel > self.high_sentinel {
            return invalid("low_sentinel", "must not exceed high_sentinel");
        }
        if self.page_step <= 0 {
            return invalid("page_step", "must be greater than zero");
        }
        if self.lookahead < 0 {
            return invalid("lookahead", "must not be negative");
        }
        let (min, max) = self.bounds();
        if min > max {
            return invalid("min", "must not exceed max");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Query key the selected value is written under
    #[serde(default = "default_field")]
    pub field: String,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            field: default_field(),
            colors: HashMap::new(),
        }
    }
}
