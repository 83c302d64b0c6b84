//! CLI subcommands — light requests, backlight, supported kinds.

mod backlight;
mod kinds;
mod set;

use std::path::Path;

use clap::Subcommand;

pub(super) use triled_lib::color::parse_color;
pub(super) use triled_lib::config::SinkPaths;
pub(super) use triled_lib::error::Result;
pub(super) use triled_lib::light::{FlashMode, LightKind, LightRequest};
pub(super) use triled_lib::service::LightService;
pub(super) use triled_lib::sink::SysfsSink;

#[derive(Subcommand)]
pub(super) enum Command {
    /// Request a light for one source (notifications, attention, battery)
    Set {
        /// Light source: notifications, attention or battery
        kind: String,
        /// Color: #RRGGBB or a color name ("off" clears the source)
        color: String,
        /// Blink mode: none, timed or hardware
        #[arg(long, default_value = "none")]
        flash: String,
        /// Blink on duration in milliseconds
        #[arg(long, default_value_t = 0)]
        on_ms: u32,
        /// Blink off duration in milliseconds
        #[arg(long, default_value_t = 0)]
        off_ms: u32,
    },
    /// Clear a light source
    Off {
        /// Light source: notifications, attention or battery
        kind: String,
    },
    /// Set the backlight brightness from a color (luma-converted)
    Backlight {
        /// Color: #RRGGBB or a color name
        color: String,
    },
    /// List the light kinds the service handles
    Kinds,
}

pub(super) fn run(command: Command, json: bool, config: Option<&Path>) -> Result<()> {
    match command {
        Command::Set {
            kind,
            color,
            flash,
            on_ms,
            off_ms,
        } => set::cmd_set(&kind, &color, &flash, on_ms, off_ms, config),
        Command::Off { kind } => set::cmd_off(&kind, config),
        Command::Backlight { color } => backlight::cmd_backlight(&color, config),
        Command::Kinds => kinds::cmd_kinds(json),
    }
}

/// Resolve sink paths (explicit `--config`, else per-user config, else
/// stock sysfs defaults) and build the service on top of them.
pub(super) fn open_service(config: Option<&Path>) -> Result<LightService<SysfsSink>> {
    let paths = match config {
        Some(path) => SinkPaths::load(path)?,
        None => SinkPaths::load_default()?,
    };
    log::debug!("opening sink: backlight={}", paths.backlight.display());
    Ok(LightService::new(SysfsSink::open(&paths)?))
}
