//! `backlight` subcommand — set the LCD backlight from a color.

use std::path::Path;

use super::{LightKind, LightRequest, Result, open_service, parse_color};

pub(super) fn cmd_backlight(color: &str, config: Option<&Path>) -> Result<()> {
    let color = parse_color(color)?;
    let request = LightRequest::steady(color);

    let service = open_service(config)?;
    service.set_light(LightKind::Backlight, request)?;

    println!("backlight: {}", request.brightness());
    Ok(())
}
