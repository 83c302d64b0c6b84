//! Color parsing and formatting for light requests.
//!
//! Colors use the request format `0x00RRGGBB` (high byte unused).

/// Parse a color string into the request format `0x00RRGGBB`.
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`, `"yellow"`, `"purple"`, `"cyan"`
pub fn parse_color(s: &str) -> crate::error::Result<u32> {
    let s = s.trim();

    // Named colors
    match s.to_lowercase().as_str() {
        "red" => return Ok(0x00FF_0000),
        "green" => return Ok(0x0000_FF00),
        "blue" => return Ok(0x0000_00FF),
        "white" => return Ok(0x00FF_FFFF),
        "orange" => return Ok(0x00FF_8000),
        "yellow" => return Ok(0x00FF_FF00),
        "purple" => return Ok(0x0080_00FF),
        "cyan" => return Ok(0x0000_FFFF),
        "off" | "black" => return Ok(0x0000_0000),
        _ => {}
    }

    // Hex color
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(crate::TriledError::Color(format!(
            "Invalid color: {s} (use #RRGGBB or a color name)"
        )));
    }
    u32::from_str_radix(hex, 16)
        .map_err(|_| crate::TriledError::Color(format!("Invalid hex color: {s}")))
}

/// Format a request color value as `#RRGGBB`.
pub fn format_color(val: u32) -> String {
    let r = (val >> 16) & 0xFF;
    let g = (val >> 8) & 0xFF;
    let b = val & 0xFF;
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_color ──

    #[test]
    fn parse_named_primaries() {
        assert_eq!(parse_color("red").unwrap(), 0x00FF_0000);
        assert_eq!(parse_color("green").unwrap(), 0x0000_FF00);
        assert_eq!(parse_color("blue").unwrap(), 0x0000_00FF);
    }

    #[test]
    fn parse_named_off() {
        assert_eq!(parse_color("off").unwrap(), 0);
        assert_eq!(parse_color("black").unwrap(), 0);
    }

    #[test]
    fn parse_named_case_insensitive() {
        assert_eq!(parse_color("RED").unwrap(), 0x00FF_0000);
        assert_eq!(parse_color("  Red  ").unwrap(), 0x00FF_0000);
    }

    #[test]
    fn parse_hex_with_hash() {
        assert_eq!(parse_color("#FF0000").unwrap(), 0x00FF_0000);
        assert_eq!(parse_color("#00FF00").unwrap(), 0x0000_FF00);
    }

    #[test]
    fn parse_hex_without_hash() {
        assert_eq!(parse_color("ABCDEF").unwrap(), 0x00AB_CDEF);
    }

    #[test]
    fn parse_hex_lowercase() {
        assert_eq!(parse_color("#ff8000").unwrap(), 0x00FF_8000);
    }

    #[test]
    fn parse_invalid_length() {
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("#FF000000").is_err());
    }

    #[test]
    fn parse_invalid_name() {
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn parse_invalid_hex_chars() {
        assert!(parse_color("#GGHHII").is_err());
    }

    // ── format_color ──

    #[test]
    fn format_primaries() {
        assert_eq!(format_color(0x00FF_0000), "#FF0000");
        assert_eq!(format_color(0x0000_FF00), "#00FF00");
        assert_eq!(format_color(0x0000_00FF), "#0000FF");
    }

    #[test]
    fn format_black() {
        assert_eq!(format_color(0), "#000000");
    }

    #[test]
    fn format_ignores_high_byte() {
        assert_eq!(format_color(0xFFFF_0000), "#FF0000");
    }

    // ── round-trip ──

    #[test]
    fn parse_format_roundtrip() {
        for name in &[
            "red", "green", "blue", "white", "orange", "yellow", "purple", "cyan",
        ] {
            let val = parse_color(name).unwrap();
            let hex = format_color(val);
            assert_eq!(parse_color(&hex).unwrap(), val, "round-trip failed for {name}");
        }
    }
}
