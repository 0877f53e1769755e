//! Configuration types for ketani.
//!
//! [`Config::load`] reads `~/.config/ketani/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, and layers an optional
//! `--config` file on top. [`Config::load_from`] layers a single file over
//! the defaults. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
debounce_ms = 300
# catalog   = "/path/to/catalog.toml"

[ui]
nav_pane_width_pct     = 22
show_descriptions      = true
carousel_interval_secs = 6
theme                  = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/ketani/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Catalog file replacing the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 { 300 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            catalog: None,
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_nav_pane_width_pct")]
    pub nav_pane_width_pct: u16,
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
    #[serde(default = "default_carousel_interval_secs")]
    pub carousel_interval_secs: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl UiConfig {
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs)
    }
}

fn default_nav_pane_width_pct() -> u16 { 22 }
fn default_show_descriptions() -> bool { true }
fn default_carousel_interval_secs() -> u64 { 6 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_pane_width_pct: default_nav_pane_width_pct(),
            show_descriptions: default_show_descriptions(),
            carousel_interval_secs: default_carousel_interval_secs(),
            theme: default_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ketani/config.toml`, layered on top of the
    /// built-in defaults, then `explicit` on top of both when given.
    /// Creates the user file with defaults if it does not exist.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Err(err) = write_defaults(&path) {
                tracing::debug!(path = %path.display(), %err, "config: could not write defaults");
            }
        }

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false));
        if let Some(explicit) = explicit {
            builder = builder.add_source(config::File::from(explicit).required(true));
        }
        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Load an explicit file layered on top of the built-in defaults. The
    /// file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_defaults(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
    tracing::debug!(path = %path.display(), "config: wrote defaults");
    Ok(())
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ketani")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
