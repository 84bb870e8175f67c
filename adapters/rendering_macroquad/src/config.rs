use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use proxy_defense_core::{EnemyVisualState, TowerVisualState, WINDOW_TITLE};
use proxy_defense_rendering::showcase::{AttackLoop, ShowcaseLayout};
use serde::Deserialize;

const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Health the showcase towers are built with.
const SHOWCASE_MAX_HEALTH: f32 = 100.0;

/// Showcase configuration read from `assets/showcase.toml`.
///
/// Every field has a default, so an empty document describes the stock gallery.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Format version; only version 1 is understood.
    pub version: u32,
    /// Window placement and presentation.
    pub window: WindowConfig,
    /// Gallery parameters.
    pub showcase: ShowcaseSettings,
}

/// Window parameters of the showcase.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown by the window manager.
    pub title: String,
    /// Window width in pixels.
    pub width: i32,
    /// Window height in pixels.
    pub height: i32,
    /// Whether presentation waits for the display refresh.
    pub vsync: bool,
}

/// Gallery parameters of the showcase.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    /// Duration of one attack animation loop in milliseconds.
    pub attack_period_ms: u32,
    /// Pixels between neighbouring sprites.
    pub spacing: f32,
    /// Health of the firewall in the tower row, out of 100.
    pub firewall_health: f32,
    /// Remaining shield of the shielded enemy.
    pub shield: f32,
    /// Spawn shield of the shielded enemy.
    pub max_shield: f32,
    /// Seed for the jitter source; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            window: WindowConfig::default(),
            showcase: ShowcaseSettings::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_owned(),
            width: 960,
            height: 640,
            vsync: true,
        }
    }
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            attack_period_ms: 1_200,
            spacing: 80.0,
            firewall_health: 85.0,
            shield: 3.0,
            max_shield: 5.0,
            seed: None,
        }
    }
}

impl ShowcaseConfig {
    /// Returns the default configuration path relative to the repository root.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from("assets/showcase.toml")
    }

    /// Loads the configuration at `path`, or the default path when `None`.
    ///
    /// An explicit path must exist. A missing default file yields built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let default_path = Self::default_path();
        if default_path.exists() {
            Self::from_path(&default_path)
        } else {
            log::debug!(
                "no showcase configuration at {}, using defaults",
                default_path.display()
            );
            Ok(Self::default())
        }
    }

    /// Reads and validates the configuration stored at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read showcase configuration at {}", path.display())
        })?;
        let config = Self::parse(&contents)
            .with_context(|| format!("invalid showcase configuration at {}", path.display()))?;
        log::debug!("loaded showcase configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a configuration document.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .context("failed to parse showcase configuration toml contents")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the showcase cannot render.
    pub fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            bail!(
                "unsupported showcase configuration version {}; expected {}",
                self.version,
                SUPPORTED_CONFIG_VERSION
            );
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            bail!(
                "window size must be positive, got {}x{}",
                self.window.width,
                self.window.height
            );
        }
        if self.showcase.attack_period_ms == 0 {
            bail!("attack_period_ms must be greater than zero");
        }
        if !(self.showcase.spacing.is_finite() && self.showcase.spacing > 0.0) {
            bail!(
                "spacing must be a positive number, got {}",
                self.showcase.spacing
            );
        }
        Ok(())
    }

    /// Gallery layout described by the configuration.
    #[must_use]
    pub fn layout(&self) -> ShowcaseLayout {
        let settings = &self.showcase;
        ShowcaseLayout::new(settings.spacing, AttackLoop::new(settings.attack_period_ms))
            .with_tower_state(TowerVisualState::new(
                settings.firewall_health,
                SHOWCASE_MAX_HEALTH,
            ))
            .with_enemy_state(EnemyVisualState::shielded(
                settings.shield,
                settings.max_shield,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ShowcaseConfig::parse("").expect("empty config should parse");

        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.window.title, WINDOW_TITLE);
        assert_eq!(config.showcase.seed, None);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = ShowcaseConfig::parse(
            r#"
            version = 1

            [showcase]
            seed = 7
            spacing = 64.0
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.showcase.seed, Some(7));
        assert_eq!(config.showcase.spacing, 64.0);
        assert_eq!(config.showcase.attack_period_ms, 1_200);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn rejects_unsupported_version() {
        let error = ShowcaseConfig::parse("version = 2").expect_err("version 2 must fail");

        assert!(error.to_string().contains("unsupported showcase configuration version 2"));
    }

    #[test]
    fn rejects_zero_attack_period() {
        let result = ShowcaseConfig::parse(
            r#"
            [showcase]
            attack_period_ms = 0
            "#,
        );

        assert!(result.is_err(), "zero period must be rejected");
    }

    #[test]
    fn rejects_non_positive_window() {
        let result = ShowcaseConfig::parse(
            r#"
            [window]
            width = 0
            "#,
        );

        assert!(result.is_err(), "zero width must be rejected");
    }

    #[test]
    fn rejects_malformed_toml() {
        let error = ShowcaseConfig::parse("version = ").expect_err("malformed toml must fail");

        assert!(error.to_string().contains("failed to parse"));
    }

    #[test]
    fn layout_carries_configured_states() {
        let config = ShowcaseConfig::default();
        let layout = config.layout();

        assert_eq!(layout.attack_loop().period_ms(), 1_200.0);
        assert_eq!(layout.extent().x, 800.0);
    }
}
