//! `set` / `off` subcommands — issue one light request and exit.

use std::path::Path;

use triled_lib::color::format_color;

use super::{FlashMode, LightKind, LightRequest, Result, open_service, parse_color};

pub(super) fn cmd_set(
    kind: &str,
    color: &str,
    flash: &str,
    on_ms: u32,
    off_ms: u32,
    config: Option<&Path>,
) -> Result<()> {
    // Validate the request before touching any hardware.
    let kind: LightKind = kind.parse()?;
    let color = parse_color(color)?;
    let flash: FlashMode = flash.parse()?;
    let request = LightRequest::flashing(color, flash, on_ms, off_ms);

    let service = open_service(config)?;
    service.set_light(kind, request)?;

    println!("{kind}: {}", format_color(color));
    Ok(())
}

pub(super) fn cmd_off(kind: &str, config: Option<&Path>) -> Result<()> {
    let kind: LightKind = kind.parse()?;

    let service = open_service(config)?;
    service.set_light(kind, LightRequest::off())?;

    println!("{kind}: off");
    Ok(())
}
