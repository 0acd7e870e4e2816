//! Zoned rejection sampling of question colors.
//!
//! A hue's displayable region is split into four overlapping rectangles in
//! the lightness/chroma plane. A zone is chosen by weight, then points are
//! drawn uniformly from its rectangle until one falls inside the gamut. The
//! accepted points are therefore uniform over the displayable part of the
//! rectangle instead of piling up on its clipped edge.

use std::fmt;

use rand::Rng;

use crate::color::OklchColor;
use crate::gamut::max_chroma;

/// Default retry cap before a zone falls back to its safe point.
pub const MAX_TRIES: usize = 200;

/// How far the weights of a zone table may stray from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// A weighted sampling rectangle in the lightness/chroma plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleZone {
    /// Short name used in logs
    pub name: &'static str,
    /// Selection probability; the weights of a zone table sum to 1.0
    pub weight: f64,
    /// Lightness range `(min, max)`
    pub lightness: (f64, f64),
    /// Chroma range `(min, max)`
    pub chroma: (f64, f64),
    /// `(l, c)` returned when no draw lands in the gamut
    pub fallback: (f64, f64),
}

/// Near-white tints.
pub const PALE_ZONE: SampleZone = SampleZone {
    name: "pale",
    weight: 0.14,
    lightness: (0.85, 0.99),
    chroma: (0.0, 0.27),
    fallback: (0.95, 0.02),
};

/// Near-black shades.
pub const DARK_ZONE: SampleZone = SampleZone {
    name: "dark",
    weight: 0.06,
    lightness: (0.05, 0.30),
    chroma: (0.0, 0.18),
    fallback: (0.15, 0.02),
};

/// Muted grays across the lightness range.
pub const GRAY_ZONE: SampleZone = SampleZone {
    name: "gray",
    weight: 0.35,
    lightness: (0.22, 0.92),
    chroma: (0.0, 0.15),
    fallback: (0.60, 0.06),
};

/// Saturated colors.
pub const VIVID_ZONE: SampleZone = SampleZone {
    name: "vivid",
    weight: 0.45,
    lightness: (0.20, 0.98),
    chroma: (0.06, 0.32),
    fallback: (0.60, 0.10),
};

/// The zone table in selection order.
pub const DEFAULT_ZONES: [SampleZone; 4] = [PALE_ZONE, DARK_ZONE, GRAY_ZONE, VIVID_ZONE];

#[inline]
fn lerp((min, max): (f64, f64), t: f64) -> f64 {
    min + t * (max - min)
}

impl SampleZone {
    /// Draw up to `max_tries` points and return the first displayable one.
    pub fn try_sample<R: Rng + ?Sized>(
        &self,
        hue: f64,
        rng: &mut R,
        max_tries: usize,
    ) -> Option<OklchColor> {
        (0..max_tries).find_map(|_| {
            let l = lerp(self.lightness, rng.gen::<f64>());
            let c = lerp(self.chroma, rng.gen::<f64>());
            (c <= max_chroma(l, hue)).then(|| OklchColor::new(l, c, hue))
        })
    }

    /// The zone's safe interior point at `hue`.
    pub fn fallback_color(&self, hue: f64) -> OklchColor {
        OklchColor::new(self.fallback.0, self.fallback.1, hue)
    }
}

/// Error type for zone table validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneError {
    /// No zones provided
    EmptyTable,
    /// A weight is negative or not finite
    InvalidWeight {
        /// Index of the offending zone
        index: usize,
    },
    /// The weights do not add up to 1.0
    WeightSum(f64),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::EmptyTable => write!(f, "zone table is empty"),
            ZoneError::InvalidWeight { index } => {
                write!(f, "zone {} has a negative or non-finite weight", index)
            }
            ZoneError::WeightSum(total) => {
                write!(f, "zone weights sum to {}, expected 1.0", total)
            }
        }
    }
}

impl std::error::Error for ZoneError {}

/// Sampler configuration: a zone table plus a retry cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSampler {
    zones: Vec<SampleZone>,
    max_tries: usize,
}

impl Default for ColorSampler {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.to_vec(),
            max_tries: MAX_TRIES,
        }
    }
}

impl ColorSampler {
    /// Create a sampler with a custom zone table.
    ///
    /// Every weight must be finite and non-negative, and together they must
    /// sum to 1.0 within [`WEIGHT_TOLERANCE`].
    pub fn new(zones: Vec<SampleZone>, max_tries: usize) -> Result<Self, ZoneError> {
        if zones.is_empty() {
            return Err(ZoneError::EmptyTable);
        }
        if let Some(index) = zones
            .iter()
            .position(|z| !z.weight.is_finite() || z.weight < 0.0)
        {
            return Err(ZoneError::InvalidWeight { index });
        }
        let total: f64 = zones.iter().map(|z| z.weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ZoneError::WeightSum(total));
        }
        Ok(Self { zones, max_tries })
    }

    /// Replace the retry cap, keeping the zone table.
    pub fn with_max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn zones(&self) -> &[SampleZone] {
        &self.zones
    }

    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Map a uniform draw `u` in `[0, 1)` to a zone by cumulative weight.
    ///
    /// The last zone absorbs any remainder left by rounding in the weights.
    pub fn pick_zone(&self, u: f64) -> &SampleZone {
        let mut cumulative = 0.0;
        for zone in &self.zones {
            cumulative += zone.weight;
            if u < cumulative {
                return zone;
            }
        }
        self.zones.last().unwrap_or(&VIVID_ZONE)
    }

    /// Generate one displayable color at `hue`.
    pub fn sample<R: Rng + ?Sized>(&self, hue: f64, rng: &mut R) -> OklchColor {
        let zone = self.pick_zone(rng.gen::<f64>());
        zone.try_sample(hue, rng, self.max_tries)
            .unwrap_or_else(|| zone.fallback_color(hue))
    }
}

/// Generate one displayable question color at `hue` with the default zones.
///
/// ```
/// use oklch_map::{gamut::is_displayable, generate_random_color};
///
/// let color = generate_random_color(145.0, &mut rand::thread_rng());
/// assert_eq!(color.h, 145.0);
/// assert!(is_displayable(color.l, color.c, color.h));
/// ```
pub fn generate_random_color<R: Rng + ?Sized>(hue: f64, rng: &mut R) -> OklchColor {
    ColorSampler::default().sample(hue, rng)
}
