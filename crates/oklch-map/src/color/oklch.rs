//! Oklch polar color space
//!
//! Oklch is the polar form of Oklab:
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): Colorfulness, the distance from the neutral axis
//! - **h** (Hue): Hue angle in degrees
//!
//! Every question, record and cluster centroid in this crate is an
//! [`OklchColor`]. It is the one color type that crosses the serialization
//! boundary.

use serde::{Deserialize, Serialize};

use super::oklab::Oklab;

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness, 0.0 = black, 1.0 = white
/// - `c`: Chroma, 0.0 = achromatic, about 0.4 at most for sRGB
/// - `h`: Hue angle in degrees, 0.0..360.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees
    pub h: f64,
}

impl OklchColor {
    /// Create a new Oklch color.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// CSS Color 4 notation, lightness as a percentage.
    ///
    /// ```
    /// use oklch_map::OklchColor;
    /// assert_eq!(OklchColor::new(0.5, 0.1, 25.0).to_css(), "oklch(50% 0.1 25)");
    /// ```
    pub fn to_css(&self) -> String {
        format!("oklch({}% {} {})", self.l * 100.0, self.c, self.h)
    }
}

impl From<OklchColor> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: OklchColor) -> Self {
        let (sin_h, cos_h) = lch.h.to_radians().sin_cos();
        Oklab {
            l: lch.l,
            a: lch.c * cos_h,
            b: lch.c * sin_h,
        }
    }
}

impl From<Oklab> for OklchColor {
    /// Convert from Oklab to Oklch (Cartesian to polar).
    ///
    /// Hue is normalized into 0.0..360.0. For achromatic input it is 0.0.
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
        Self { l: lab.l, c, h }
    }
}
