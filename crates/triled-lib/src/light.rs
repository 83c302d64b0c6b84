//! Light request model — the value types exchanged with the service.
//!
//! A [`LightRequest`] packs a 24-bit RGB color (`0x00RRGGBB`, high byte
//! ignored) together with an optional blink cadence. Requests are immutable
//! values: each update replaces the previous request wholesale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriledError;

/// Luma weights for the backlight conversion, summed then shifted right by 8.
/// 77/150/29 approximate the Rec. 601 perceptual weighting in integer math.
const LUMA_RED: u32 = 77;
const LUMA_GREEN: u32 = 150;
const LUMA_BLUE: u32 = 29;

/// Logical light sources known to the transport layer.
///
/// Only four of these are handled by [`LightService`](crate::service::LightService):
/// `Backlight`, `Battery`, `Notifications` and `Attention`. The rest exist so
/// a request for an unhandled source is a typed, reportable condition rather
/// than a parse failure at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    Backlight,
    Keyboard,
    Buttons,
    Battery,
    Notifications,
    Attention,
    Bluetooth,
    Wifi,
}

impl LightKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LightKind::Backlight => "backlight",
            LightKind::Keyboard => "keyboard",
            LightKind::Buttons => "buttons",
            LightKind::Battery => "battery",
            LightKind::Notifications => "notifications",
            LightKind::Attention => "attention",
            LightKind::Bluetooth => "bluetooth",
            LightKind::Wifi => "wifi",
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightKind {
    type Err = TriledError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backlight" => Ok(LightKind::Backlight),
            "keyboard" => Ok(LightKind::Keyboard),
            "buttons" => Ok(LightKind::Buttons),
            "battery" => Ok(LightKind::Battery),
            "notifications" => Ok(LightKind::Notifications),
            "attention" => Ok(LightKind::Attention),
            "bluetooth" => Ok(LightKind::Bluetooth),
            "wifi" => Ok(LightKind::Wifi),
            other => Err(TriledError::Request(format!("unknown light kind: {other}"))),
        }
    }
}

/// Blink behavior requested for a light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashMode {
    /// Steady light; on/off durations are ignored.
    #[default]
    None,
    /// Software-timed blink using the request's on/off durations.
    Timed,
    /// Hardware-driven blink using the request's on/off durations.
    Hardware,
}

impl FromStr for FlashMode {
    type Err = TriledError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(FlashMode::None),
            "timed" => Ok(FlashMode::Timed),
            "hardware" => Ok(FlashMode::Hardware),
            other => Err(TriledError::Request(format!("unknown flash mode: {other}"))),
        }
    }
}

/// A single light request as delivered by the transport layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightRequest {
    /// Packed color, `0x00RRGGBB`. The high byte carries no meaning and is
    /// masked off everywhere it could matter.
    pub color: u32,
    pub flash_mode: FlashMode,
    pub flash_on_ms: u32,
    pub flash_off_ms: u32,
}

impl LightRequest {
    /// A dark, non-blinking request. This is what the service emits when no
    /// priority source is lit.
    pub fn off() -> Self {
        LightRequest::default()
    }

    /// A steady (non-blinking) request for `color`.
    pub fn steady(color: u32) -> Self {
        LightRequest {
            color,
            ..LightRequest::default()
        }
    }

    /// A blinking request with explicit on/off durations.
    pub fn flashing(color: u32, mode: FlashMode, on_ms: u32, off_ms: u32) -> Self {
        LightRequest {
            color,
            flash_mode: mode,
            flash_on_ms: on_ms,
            flash_off_ms: off_ms,
        }
    }

    /// Whether this request asks for any visible light (low 24 bits non-zero).
    pub fn is_lit(&self) -> bool {
        self.color & 0x00FF_FFFF != 0
    }

    /// Per-channel brightness decomposition of the packed color.
    pub fn rgb(&self) -> (u32, u32, u32) {
        let color = self.color & 0x00FF_FFFF;
        ((color >> 16) & 0xFF, (color >> 8) & 0xFF, color & 0xFF)
    }

    /// Blink durations to program, `(on_ms, off_ms)`.
    ///
    /// `FlashMode::None` forces 0/0 regardless of the durations carried by
    /// the request — a steady light must never inherit stale blink timing.
    pub fn timing(&self) -> (u32, u32) {
        match self.flash_mode {
            FlashMode::Timed | FlashMode::Hardware => (self.flash_on_ms, self.flash_off_ms),
            FlashMode::None => (0, 0),
        }
    }

    /// Single-channel brightness for the backlight, derived from the packed
    /// color via fixed-weight luma.
    pub fn brightness(&self) -> u32 {
        let (r, g, b) = self.rgb();
        (LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b) >> 8
    }
}
