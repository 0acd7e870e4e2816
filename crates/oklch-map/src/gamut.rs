//! sRGB gamut engine for OKLCH coordinates.
//!
//! Decides which `(l, c, h)` triples are displayable in 8-bit sRGB and finds
//! the chroma boundary for a given lightness and hue. Everything here is a
//! pure function of its arguments.

use crate::color::{LinearRgb, Oklab, OklchColor, Srgb};

/// Slack allowed on each linear channel before a color counts as out of gamut.
pub const DISPLAY_TOLERANCE: f64 = 1e-4;

/// Upper end of the chroma bisection interval.
pub const CHROMA_SEARCH_LIMIT: f64 = 0.4;

/// Number of bisection steps in [`max_chroma`].
pub const CHROMA_SEARCH_STEPS: u32 = 15;

/// Lightness at or beyond which the gamut collapses to the neutral axis.
const DEGENERATE_LIGHTNESS: f64 = 0.001;

/// How out-of-gamut coordinates are turned into a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexMode {
    /// Clamp each linear channel independently. Keeps the numbers, may shift hue.
    Clip,
    /// Reduce chroma to the boundary first, preserving lightness and hue.
    #[default]
    GamutMapped,
}

/// Lightness at which a hue reaches its largest displayable chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Lightness of the gamut tip
    pub l: f64,
    /// Chroma at that lightness
    pub max_c: f64,
}

/// Convert OKLCH (hue in degrees) to unclamped linear sRGB.
#[inline]
pub fn to_linear_rgb(l: f64, c: f64, h: f64) -> LinearRgb {
    LinearRgb::from(Oklab::from(OklchColor::new(l, c, h)))
}

/// True if the color maps inside the sRGB cube (with [`DISPLAY_TOLERANCE`]).
#[inline]
pub fn is_displayable(l: f64, c: f64, h: f64) -> bool {
    to_linear_rgb(l, c, h).is_within_unit_cube(DISPLAY_TOLERANCE)
}

/// Largest displayable chroma at lightness `l` and hue `h`.
///
/// Bisects `[0, 0.4]` and returns the lower bound, so the result is always
/// displayable and within `0.4 / 2^15` of the true boundary. Returns `0.0`
/// at the black and white ends of the lightness axis.
///
/// ```
/// use oklch_map::gamut::{is_displayable, max_chroma};
///
/// let c = max_chroma(0.6, 25.0);
/// assert!(c > 0.2);
/// assert!(is_displayable(0.6, c, 25.0));
/// assert!(!is_displayable(0.6, c + 0.01, 25.0));
/// ```
pub fn max_chroma(l: f64, h: f64) -> f64 {
    if l <= DEGENERATE_LIGHTNESS || l >= 1.0 - DEGENERATE_LIGHTNESS {
        return 0.0;
    }

    let mut low = 0.0;
    let mut high = CHROMA_SEARCH_LIMIT;
    for _ in 0..CHROMA_SEARCH_STEPS {
        let mid = (low + high) / 2.0;
        if is_displayable(l, mid, h) {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

/// Format a coordinate as `#RRGGBB`.
///
/// In [`HexMode::GamutMapped`] an out-of-gamut color is first pulled back to
/// `max_chroma(l, h)`; a displayable color is formatted as-is in both modes.
pub fn to_display_hex(l: f64, c: f64, h: f64, mode: HexMode) -> String {
    let c = match mode {
        HexMode::GamutMapped if !is_displayable(l, c, h) => max_chroma(l, h),
        _ => c,
    };
    Srgb::from(to_linear_rgb(l, c, h).clamped()).to_hex()
}

/// Find the lightness with the largest boundary chroma for hue `h`.
///
/// Scans `l = 0.10, 0.15, ..., 0.95`. The first strictly-largest chroma wins.
pub fn peak_lightness(h: f64) -> Peak {
    // Integer steps so 0.95 is always scanned; an accumulated float step stops at 0.90
    (0..=17)
        .map(|k| 0.10 + 0.05 * k as f64)
        .fold(Peak { l: 0.5, max_c: 0.0 }, |best, l| {
            let c = max_chroma(l, h);
            if c > best.max_c {
                Peak { l, max_c: c }
            } else {
                best
            }
        })
}

/// Closed outline of the displayable region in the chroma/lightness plane.
///
/// Points are `(c, l)`: the origin, the boundary for `l = 0.10..=1.00` in
/// steps of 0.01, the white point and back to the origin. The hook-shaped
/// boundary below `l = 0.10` is skipped.
pub fn gamut_boundary(h: f64) -> Vec<(f64, f64)> {
    let mut outline = Vec::with_capacity(94);
    outline.push((0.0, 0.0));
    outline.extend((0..=90).map(|k| {
        let l = 0.10 + 0.01 * k as f64;
        (max_chroma(l, h), l)
    }));
    outline.push((0.0, 1.0));
    outline.push((0.0, 0.0));
    outline
}
