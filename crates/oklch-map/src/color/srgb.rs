//! sRGB color type
//!
//! sRGB is the display encoding: linear light run through the standard
//! transfer curve, then quantized to 8 bits per channel for hex output.

use super::linear_rgb::LinearRgb;

/// A color in gamma-encoded sRGB space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

/// Apply the sRGB transfer function to one linear channel.
///
/// Input outside 0.0..=1.0 is clamped first.
#[inline]
pub fn encode_channel(linear: f64) -> f64 {
    let x = linear.clamp(0.0, 1.0);
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use oklch_map::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// let bytes = color.to_bytes();
    /// assert_eq!(bytes[0], 255); // red
    /// assert_eq!(bytes[2], 0);   // blue
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as upper-case `#RRGGBB`.
    ///
    /// ```
    /// use oklch_map::Srgb;
    /// assert_eq!(Srgb::new(1.0, 0.0, 0.0).to_hex(), "#FF0000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<LinearRgb> for Srgb {
    /// Clamp each channel to the unit range and apply the transfer curve.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: encode_channel(linear.r),
            g: encode_channel(linear.g),
            b: encode_channel(linear.b),
        }
    }
}
