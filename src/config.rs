use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Kalends configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Picker behaviour.
    #[serde(default)]
    pub picker: PickerToml,

    /// Output settings.
    #[serde(default)]
    pub display: DisplayToml,
}

impl KalendsConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

/// `[picker]` section. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PickerToml {
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    #[serde(default)]
    pub month_menu: bool,
    #[serde(default)]
    pub year_menu: Option<YearMenuToml>,
}

/// Year menu span; omitted ends default to ten years around the view.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct YearMenuToml {
    pub from: Option<i32>,
    pub to: Option<i32>,
}

/// `[display]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_heading_len")]
    pub heading_len: usize,
    #[serde(default)]
    pub json: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            heading_len: default_heading_len(),
            json: false,
        }
    }
}

fn default_heading_len() -> usize {
    2
}
