//! Sink path configuration — TOML-based overrides for the sysfs channels.
//!
//! Defaults match the stock LED class layout (`/sys/class/leds/...`); a
//! config file only needs to name the paths it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriledError};

/// Filesystem locations of the ten output channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkPaths {
    #[serde(default = "default_backlight")]
    pub backlight: PathBuf,
    #[serde(default = "default_red_brightness")]
    pub red_brightness: PathBuf,
    #[serde(default = "default_green_brightness")]
    pub green_brightness: PathBuf,
    #[serde(default = "default_blue_brightness")]
    pub blue_brightness: PathBuf,
    #[serde(default = "default_red_timeout")]
    pub red_timeout: PathBuf,
    #[serde(default = "default_green_timeout")]
    pub green_timeout: PathBuf,
    #[serde(default = "default_blue_timeout")]
    pub blue_timeout: PathBuf,
    #[serde(default = "default_red_lock")]
    pub red_lock: PathBuf,
    #[serde(default = "default_green_lock")]
    pub green_lock: PathBuf,
    #[serde(default = "default_blue_lock")]
    pub blue_lock: PathBuf,
}

fn default_backlight() -> PathBuf {
    "/sys/class/leds/lcd-backlight/brightness".into()
}
fn default_red_brightness() -> PathBuf {
    "/sys/class/leds/red/brightness".into()
}
fn default_green_brightness() -> PathBuf {
    "/sys/class/leds/green/brightness".into()
}
fn default_blue_brightness() -> PathBuf {
    "/sys/class/leds/blue/brightness".into()
}
fn default_red_timeout() -> PathBuf {
    "/sys/class/leds/red/on_off_ms".into()
}
fn default_green_timeout() -> PathBuf {
    "/sys/class/leds/green/on_off_ms".into()
}
fn default_blue_timeout() -> PathBuf {
    "/sys/class/leds/blue/on_off_ms".into()
}
fn default_red_lock() -> PathBuf {
    "/sys/class/leds/red/rgb_start".into()
}
fn default_green_lock() -> PathBuf {
    "/sys/class/leds/green/rgb_start".into()
}
fn default_blue_lock() -> PathBuf {
    "/sys/class/leds/blue/rgb_start".into()
}

impl Default for SinkPaths {
    fn default() -> Self {
        SinkPaths {
            backlight: default_backlight(),
            red_brightness: default_red_brightness(),
            green_brightness: default_green_brightness(),
            blue_brightness: default_blue_brightness(),
            red_timeout: default_red_timeout(),
            green_timeout: default_green_timeout(),
            blue_timeout: default_blue_timeout(),
            red_lock: default_red_lock(),
            green_lock: default_green_lock(),
            blue_lock: default_blue_lock(),
        }
    }
}

impl SinkPaths {
    /// Load sink paths from a TOML file. Missing keys fall back to the
    /// stock sysfs locations.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| TriledError::Config(format!("{}: {e}", path.display())))
    }

    /// Load from the default per-user location if a file exists there,
    /// otherwise return the stock defaults.
    pub fn load_default() -> Result<Self> {
        match Self::default_location() {
            Some(p) if p.exists() => Self::load(&p),
            _ => Ok(SinkPaths::default()),
        }
    }

    /// Default config file location (`<config dir>/triled/config.toml`).
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("triled").join("config.toml"))
    }
}
