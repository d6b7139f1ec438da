//! CSS color string parsing for the banner preview
//!
//! Colors are stored in the banner config as the raw strings the user typed.
//! They are only interpreted at paint time, so an invalid string never reaches
//! the store as an error; it simply renders with a fallback color.

use egui::Color32;

/// Parse a CSS color string.
///
/// Accepts anything CSS Color Level 4 allows for a plain color value: named
/// colors, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()` and the hex forms. Hex may
/// also be given without its `#`.
pub fn parse_css_color(input: &str) -> Option<Color32> {
    let trimmed = input.trim();

    let bare_hex = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_hexdigit());
    if trimmed.starts_with('#') || bare_hex {
        return parse_hex(trimmed.strip_prefix('#').unwrap_or(trimmed));
    }

    // Names and functional notations all start with a letter
    if !trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let [r, g, b, a] = csscolorparser::parse(trimmed).ok()?.to_rgba8();
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 | 4 => {
            // Short form - each digit is doubled
            let mut channels = [255u8; 4];
            for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                let nibble = digit.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            let [r, g, b, a] = channels;
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        6 | 8 => {
            let rr = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let gg = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let bb = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let aa = if hex.len() == 8 {
                u8::from_str_radix(&hex[6..8], 16).ok()?
            } else {
                255
            };
            Some(Color32::from_rgba_unmultiplied(rr, gg, bb, aa))
        }
        _ => None,
    }
}

/// Parse a color, falling back to `fallback` (itself a CSS string) and then white.
pub fn parse_or(input: &str, fallback: &str) -> Color32 {
    parse_css_color(input)
        .or_else(|| parse_css_color(fallback))
        .unwrap_or(Color32::WHITE)
}

/// Format a color the way an HTML color input reports it: `#rrggbb`, lowercase.
/// Translucent colors keep their alpha as `#rrggbbaa`.
pub fn format_css_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Apply an opacity factor in [0,1] to a color. Out-of-range factors are clipped.
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let alpha = (a as f32 * opacity).round() as u8;
    Color32::from_rgba_unmultiplied(r, g, b, alpha)
}
