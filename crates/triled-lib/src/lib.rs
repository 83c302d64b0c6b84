//! TriLED — request arbitration for a tri-color notification LED and backlight.

pub mod color;
pub mod config;
pub mod error;
pub mod light;
pub mod service;
pub mod sink;

pub use error::TriledError;
