//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the project
//! root. Configuration is sparse: stock defaults are overridden only by the
//! values a user actually writes down.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Gallery"             # Site title (head <title> and page header)
//! footer = "Static gallery"     # Footer line
//!
//! [slideshow]
//! auto_advance_secs = 5         # Seconds between automatic advances; 0 disables
//! embed_height = 400            # Height in px of external embed iframes
//!
//! [colors]
//! background = "#0b0b0b"        # Page background
//! surface = "#111111"           # Card/panel background
//! text = "#e6edf3"              # Foreground text
//! accent = "#1f6feb"            # Buttons, active list entry
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only change the title
//! title = "Society Function — Gallery"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

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
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title shown in `<title>` and the page header.
    pub title: String,
    /// Footer line at the bottom of the page.
    pub footer: String,
    /// Slideshow behavior settings.
    pub slideshow: SlideshowConfig,
    /// Color scheme injected as CSS custom properties.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
            footer: "Static gallery".to_string(),
            slideshow: SlideshowConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Seconds between automatic advances. `0` disables the timer.
    pub auto_advance_secs: u64,
    /// Height in pixels of external embed iframes.
    pub embed_height: u32,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: 5,
            embed_height: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub accent: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#0b0b0b".to_string(),
            surface: "#111111".to_string(),
            text: "#e6edf3".to_string(),
            accent: "#1f6feb".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slideshow.auto_advance_secs > 3600 {
            return Err(ConfigError::Validation(
                "slideshow.auto_advance_secs must be 0-3600".into(),
            ));
        }
        if !(100..=2000).contains(&self.slideshow.embed_height) {
            return Err(ConfigError::Validation(
                "slideshow.embed_height must be 100-2000".into(),
            ));
        }
        for (name, value) in [
            ("colors.background", &self.colors.background),
            ("colors.surface", &self.colors.surface),
            ("colors.text", &self.colors.text),
            ("colors.accent", &self.colors.accent),
        ] {
            if !value.starts_with('#') || value.len() < 4 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a #rgb or #rrggbb color, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Load the site config from `<root>/config.toml`.
///
/// A missing file yields the stock defaults; a present file must parse and
/// validate.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Generate the `:root` custom-property block from the color config.
///
/// Prepended to the embedded stylesheet so presentation rules reference
/// `var(--color-*)` instead of literals.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n  --color-bg: {};\n  --color-surface: {};\n  --color-text: {};\n  --color-accent: {};\n}}",
        colors.background, colors.surface, colors.text, colors.accent
    )
}

/// A stock `config.toml` with every option present and documented.
pub fn stock_config_toml() -> &'static str {
    r##"# showdeck configuration
# All options are optional - the values below are the defaults.

# Site title (head <title> and page header)
title = "Gallery"

# Footer line at the bottom of the page
footer = "Static gallery"

[slideshow]
# Seconds between automatic advances; 0 disables the timer.
# Videos and external embeds are never auto-skipped.
auto_advance_secs = 5

# Height in px of external embed iframes
embed_height = 400

[colors]
background = "#0b0b0b"
surface = "#111111"
text = "#e6edf3"
accent = "#1f6feb"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.title, "Gallery");
        assert_eq!(config.slideshow.auto_advance_secs, 5);
        assert_eq!(config.slideshow.embed_height, 400);
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "title = \"Society Function\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Society Function");
        assert_eq!(config.footer, "Static gallery");
        assert_eq!(config.colors.accent, "#1f6feb");
    }

    #[test]
    fn nested_sparse_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[slideshow]\nauto_advance_secs = 0\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.slideshow.auto_advance_secs, 0);
        assert_eq!(config.slideshow.embed_height, 400);
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "titel = \"typo\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn embed_height_out_of_range_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[slideshow]\nembed_height = 20\n",
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn bad_color_rejected() {
        let config = SiteConfig {
            colors: ColorConfig {
                accent: "blue".to_string(),
                ..ColorConfig::default()
            },
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn color_css_contains_all_properties() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--color-bg: #0b0b0b"));
        assert!(css.contains("--color-surface: #111111"));
        assert!(css.contains("--color-text: #e6edf3"));
        assert!(css.contains("--color-accent: #1f6feb"));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let stock = SiteConfig::default();
        assert_eq!(parsed.title, stock.title);
        assert_eq!(
            parsed.slideshow.auto_advance_secs,
            stock.slideshow.auto_advance_secs
        );
        assert_eq!(parsed.colors.background, stock.colors.background);
    }
}
