//! Linear RGB color type
//!
//! Linear RGB is the space in which the sRGB gamut is an axis-aligned unit
//! cube, which makes it the natural place to decide displayability.

/// A color in linear RGB color space.
///
/// Values produced by the Oklab conversion are NOT clamped: an out-of-gamut
/// coordinate shows up as a channel below 0.0 or above 1.0. That is exactly
/// what the gamut test inspects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True if every channel lies in `[-tolerance, 1 + tolerance]`.
    ///
    /// The tolerance absorbs floating point rounding right at the gamut edge.
    #[inline]
    pub fn is_within_unit_cube(self, tolerance: f64) -> bool {
        let lo = -tolerance;
        let hi = 1.0 + tolerance;
        [self.r, self.g, self.b]
            .iter()
            .all(|&channel| channel >= lo && channel <= hi)
    }

    /// Clamp every channel to 0.0..=1.0 independently.
    ///
    /// Per-channel clamping is not perceptual: it can shift hue for colors
    /// far outside the gamut.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}
