//! Per-particle color mapping: a frequency-driven hue shift on the base
//! color, then a two-hand closeness blend toward the hot accent color.
//!
//! Colors are RGB `Vec3` with channels in [0, 1], parsed from 24-bit hex
//! at the boundary.

use glam::Vec3;
use thiserror::Error;

use crate::constants::HUE_SHIFT_SPAN;

/// Accent color the swarm blends toward as hands come together (#ff69b4).
pub const HOT_PINK: Vec3 = Vec3::new(1.0, 105.0 / 255.0, 180.0 / 255.0);

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("expected a #rrggbb color, got {0:?}")]
    Malformed(String),
}

/// Parse a renderer-style `"#rrggbb"` (or bare `"rrggbb"`) string.
pub fn parse_hex(s: &str) -> Result<Vec3, ColorParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    // from_str_radix tolerates a sign prefix, so gate on hex digits only.
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::Malformed(s.to_string()));
    }
    let packed =
        u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Malformed(s.to_string()))?;
    Ok(from_hex(packed))
}

/// Expand a 24-bit `0xrrggbb` value into unit-range RGB.
pub fn from_hex(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

/// Rotate hue by `amount` (1.0 = full wheel), leaving saturation and
/// lightness alone. Achromatic colors pass through unchanged.
pub fn shift_hue(color: Vec3, amount: f32) -> Vec3 {
    if amount == 0.0 {
        return color;
    }
    let (h, s, l) = rgb_to_hsl(color);
    if s == 0.0 {
        return color;
    }
    hsl_to_rgb((h + amount).rem_euclid(1.0), s, l)
}

/// Color for one particle this frame.
///
/// `bin` is this particle's frequency sample (`None` when no audio is
/// active), `closeness` the two-hand distance (`None` unless two hands
/// are tracked). Closeness 0 lands exactly on `hot`; closeness >= 1
/// leaves the hue-shifted color untouched.
pub fn particle_color(base: Vec3, hot: Vec3, bin: Option<u8>, closeness: Option<f32>) -> Vec3 {
    let mut color = match bin {
        Some(b) => shift_hue(base, (b as f32 / 255.0) * HUE_SHIFT_SPAN),
        None => base,
    };
    if let Some(closeness) = closeness {
        let blend = (1.0 - closeness).clamp(0.0, 1.0);
        if blend >= 1.0 {
            color = hot;
        } else if blend > 0.0 {
            color += (hot - color) * blend;
        }
    }
    color
}

fn rgb_to_hsl(c: Vec3) -> (f32, f32, f32) {
    let max = c.max_element();
    let min = c.min_element();
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == c.x {
        ((c.y - c.z) / d + if c.y < c.z { 6.0 } else { 0.0 }) / 6.0
    } else if max == c.y {
        ((c.z - c.x) / d + 2.0) / 6.0
    } else {
        ((c.x - c.y) / d + 4.0) / 6.0
    };
    (h, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
