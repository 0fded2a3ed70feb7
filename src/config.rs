//! Site configuration.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Stock defaults cover every key, so a config file is optional and sparse —
//! override just the values you want:
//!
//! ```toml
//! [site]
//! title = "Salon Nord"
//!
//! [gallery]
//! repeat_factor = 1
//!
//! [colors.light]
//! background = "#fdfdfb"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## The repeat factor
//!
//! `gallery.repeat_factor` multiplies the whole gallery sequence on project
//! pages. It exists for layout work: set it to 10 to preview how a dense
//! gallery flows without authoring dozens of work records. Production
//! builds should leave it at 1.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; user files need only the overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub gallery: GalleryConfig,
    pub colors: ColorConfig,
    pub rendering: RenderingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if self.gallery.repeat_factor == 0 {
            return Err(ConfigError::Validation(
                "gallery.repeat_factor must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Identity of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Gallery name, used in page titles and the site header.
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Vernissage".to_string(),
        }
    }
}

/// Project gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// How many times the gallery sequence is repeated on project pages.
    /// 1 for production; larger values preview dense layouts.
    pub repeat_factor: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { repeat_factor: 1 }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderingConfig {
    /// Maximum parallel page-rendering workers.
    /// When absent, defaults to the number of CPU cores.
    pub max_workers: Option<usize>,
}

/// Resolve the effective worker count from config.
///
/// `None` → all available cores; `Some(n)` → `min(n, cores)` — users can
/// constrain down, not up.
pub fn effective_workers(config: &RenderingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_workers.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: Palette::default_light(),
            dark: Palette::default_dark(),
        }
    }
}

/// One color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: String,
    /// Primary text color.
    pub ink: String,
    /// Secondary text: selector years, captions, prices.
    pub ink_muted: String,
    /// Links and the current-item marker.
    pub accent: String,
}

impl Palette {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            ink: "#141414".to_string(),
            ink_muted: "#6b6b6b".to_string(),
            accent: "#1a1a1a".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111111".to_string(),
            ink: "#e8e8e8".to_string(),
            ink_muted: "#9a9a9a".to_string(),
            accent: "#f0f0f0".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults when no file exists; rejects unknown keys and
/// validates the result otherwise.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Vernissage Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys are an error.

[site]
# Gallery name, used in page titles and the site header.
title = "Vernissage"

# ---------------------------------------------------------------------------
# Project galleries
# ---------------------------------------------------------------------------
[gallery]
# How many times the gallery image sequence is repeated on project pages.
# Leave at 1 for production. Larger values (e.g. 10) preview how a dense
# gallery flows without authoring more work records.
repeat_factor = 1

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
ink = "#141414"
ink_muted = "#6b6b6b"     # Selector years, captions, prices
accent = "#1a1a1a"        # Links

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111111"
ink = "#e8e8e8"
ink_muted = "#9a9a9a"
accent = "#f0f0f0"

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[rendering]
# Maximum parallel page-rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_workers = 4
"##
}

/// Generate CSS custom properties from the color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-ink: {light_ink};
    --color-ink-muted: {light_muted};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-ink: {dark_ink};
        --color-ink-muted: {dark_muted};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_ink = colors.light.ink,
        light_muted = colors.light.ink_muted,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_ink = colors.dark.ink,
        dark_muted = colors.dark.ink_muted,
        dark_accent = colors.dark.accent,
    )
}
