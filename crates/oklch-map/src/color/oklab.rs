//! Oklab perceptual color space
//!
//! Oklab is the Cartesian form behind Oklch. Every gamut decision goes
//! Oklch -> Oklab -> LMS -> linear sRGB through the matrices below.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab.
    ///
    /// Uses the updated 2021-01-25 matrices from Björn Ottosson.
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to LMS (M1 matrix)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS to Lab (M2 matrix)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0, which is what the gamut test
    /// relies on.
    ///
    /// # Example
    ///
    /// ```
    /// use oklch_map::{LinearRgb, Oklab};
    ///
    /// let linear = LinearRgb::from(Oklab::new(0.5, 0.0, 0.0));
    /// // Neutral gray has equal RGB components
    /// assert!((linear.r - linear.g).abs() < 1e-9);
    /// assert!((linear.g - linear.b).abs() < 1e-9);
    /// ```
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (reverse nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for palette crate comparison (single matrix transform)
    const PALETTE_TOLERANCE: f64 = 1e-6;

    /// Tolerance for a round trip through both matrix chains
    const ROUND_TRIP_TOLERANCE: f64 = 1e-7;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0), // Red
            (0.0, 1.0, 0.0), // Green
            (0.0, 0.0, 1.0), // Blue
            (0.5, 0.5, 0.5), // Mid gray
            (1.0, 1.0, 1.0), // White
            (0.2, 0.7, 0.4), // Mixed
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let theirs: PaletteOklab<f64> = LinSrgb::new(r, g, b).into_color();

            assert!(
                approx_eq(ours.l, theirs.l, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.25, 0.25, 0.25),
            (0.75, 0.1, 0.6),
        ];

        for (r, g, b) in test_colors {
            let original = LinearRgb::new(r, g, b);
            let back = LinearRgb::from(Oklab::from(original));
            assert!(
                approx_eq(original.r, back.r, ROUND_TRIP_TOLERANCE)
                    && approx_eq(original.g, back.g, ROUND_TRIP_TOLERANCE)
                    && approx_eq(original.b, back.b, ROUND_TRIP_TOLERANCE),
                "Round trip failed for ({r}, {g}, {b}): got {back:?}"
            );
        }
    }

    #[test]
    fn test_white_and_black() {
        let white = LinearRgb::from(Oklab::new(1.0, 0.0, 0.0));
        assert!(approx_eq(white.r, 1.0, 1e-6), "White r = {}", white.r);
        assert!(approx_eq(white.g, 1.0, 1e-6), "White g = {}", white.g);
        assert!(approx_eq(white.b, 1.0, 1e-6), "White b = {}", white.b);

        let black = LinearRgb::from(Oklab::new(0.0, 0.0, 0.0));
        assert_eq!(black, LinearRgb::new(0.0, 0.0, 0.0));
    }
}
