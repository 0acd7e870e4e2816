//! Shade ramps for rendering a question color as a lit surface.
//!
//! A ramp is four neighbouring hex colors (lighter, base, darker, darkest)
//! plus a lightest background tone. Dark colors get larger lightness steps
//! than light ones so the ramp stays visible at both ends. All colors are
//! gamut-mapped, so every step keeps the question's lightness and hue.

use serde::Serialize;

use crate::color::OklchColor;
use crate::gamut::{to_display_hex, HexMode};

const LOW_L: f64 = 0.05;
const HIGH_L: f64 = 0.88;
const DARKER_OFFSET: (f64, f64) = (0.0385, 0.014);
const LIGHTER_OFFSET: (f64, f64) = (0.0375, 0.012);
const MAX_L: f64 = 0.9999;

/// Hex colors derived from one question color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadeRamp {
    /// Lighter, base, darker, darkest
    pub colors: [String; 4],
    /// Lightest tone, for the background
    pub back: String,
}

/// Linear map of `value` from `[in_min, in_max]` onto `(at_min, at_max)`, clamped.
fn map_range(value: f64, in_min: f64, in_max: f64, (at_min, at_max): (f64, f64)) -> f64 {
    if value <= in_min {
        return at_min;
    }
    if value >= in_max {
        return at_max;
    }
    let t = (value - in_min) / (in_max - in_min);
    at_min + t * (at_max - at_min)
}

fn step(color: &OklchColor, dl: f64, dc: f64) -> String {
    let l = (color.l + dl).clamp(0.0, MAX_L);
    let c = (color.c + dc).max(0.0);
    to_display_hex(l, c, color.h, HexMode::GamutMapped)
}

/// Build the shade ramp for `color`.
pub fn shade_ramp(color: &OklchColor) -> ShadeRamp {
    let darker = map_range(color.l, LOW_L, HIGH_L, DARKER_OFFSET);
    let lighter = map_range(color.l, LOW_L, HIGH_L, LIGHTER_OFFSET);

    ShadeRamp {
        colors: [
            step(color, lighter, -0.0012),
            to_display_hex(color.l, color.c, color.h, HexMode::GamutMapped),
            step(color, -darker, 0.0028),
            step(color, -2.0 * darker, 0.0056),
        ],
        back: step(color, 2.0 * lighter, -0.0032),
    }
}
