//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the perceptual (Oklab/Oklch) and display (linear RGB, sRGB) spaces.
//!
//! # Color Spaces
//!
//! - **OklchColor**: Polar perceptual coordinates. The unit of exchange for questions and records.
//! - **Oklab**: Cartesian form of Oklch. Intermediate step of every conversion.
//! - **LinearRgb**: Linear light intensity. Used for the gamut test.
//! - **Srgb**: Gamma-encoded channels. Used for hex output.
//!
//! # Example
//!
//! ```
//! use oklch_map::{LinearRgb, Oklab, OklchColor, Srgb};
//!
//! let color = OklchColor::new(0.63, 0.2, 25.0);
//! let linear = LinearRgb::from(Oklab::from(color));
//! let hex = Srgb::from(linear).to_hex();
//! assert_eq!(hex.len(), 7);
//! ```

mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::OklchColor;
pub use srgb::Srgb;
