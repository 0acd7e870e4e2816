//! oklch-map: perceptual color naming on an OKLCH map
//!
//! This library holds the color math and the clustering behind a
//! crowdsourced color-naming map. People are shown a random color of a given
//! hue family and type a name for it; the accepted names are clustered into
//! labeled territories on a lightness × chroma chart.
//!
//! # Quick Start
//!
//! ```
//! use oklch_map::{compute_clusters, generate_random_color, suggest_prefixes, ColorEntry};
//!
//! let mut rng = rand::thread_rng();
//! let question = generate_random_color(25.0, &mut rng);
//! let hints = suggest_prefixes(&question);
//! assert_eq!(hints.len(), 6);
//!
//! let entries = vec![ColorEntry::new("a", question, "紅", 0)];
//! let clusters = compute_clusters(&entries);
//! assert_eq!(clusters[0].display_label, "紅");
//! ```
//!
//! # Color Science
//!
//! All coordinates are OKLCH: lightness `l` in `0..=1`, chroma `c` from 0
//! (gray) up to about 0.4, hue `h` in degrees. OKLCH is the polar form of
//! OKLab (Björn Ottosson, 2020), in which equal distances look roughly
//! equally different. That makes it the right space both for sampling
//! "evenly spread" question colors and for deciding which names describe
//! the same region.
//!
//! Not every OKLCH triple is a real screen color. The [`gamut`] module
//! converts to linear sRGB and checks the result against the unit cube:
//!
//! ```text
//! OKLCH (l, c, h°)
//!     |  a = c·cos h, b = c·sin h
//!     v
//! OKLab (l, a, b)
//!     |  inverse M2, then cube
//!     v
//! LMS
//!     |  inverse M1
//!     v
//! linear sRGB  ---- every channel in [-1e-4, 1 + 1e-4]? ----> displayable
//!     |
//!     v  clamp, transfer curve, ×255
//! #RRGGBB
//! ```
//!
//! For a fixed lightness and hue the displayable chroma values form an
//! interval starting at 0, so [`max_chroma`] finds its end by bisection.
//!
//! # Components
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gamut`] | Displayability, boundary chroma, hex output, gamut tip, boundary outline |
//! | [`sampler`] | Zoned rejection sampling of question colors |
//! | [`prefix`] | Descriptive-prefix catalog, naming hints, name normalization |
//! | [`cluster`] | Group-by-name then agglomerative merging into territories |
//! | [`territory`] | Chart projection and Voronoi cells |
//! | [`hue`] | The 18 hue families |
//! | [`entry`] | The named color record |
//! | [`seed`] | Synthetic starter records |
//! | [`shade`] | Four-step shade ramps for rendering |
//!
//! # Distance Metrics
//!
//! Two weighted metrics are used, both ignoring hue:
//!
//! | Use | Formula |
//! |-----|---------|
//! | Prefix hints | `sqrt(dl² + (2.5·dc)²)` |
//! | Cluster merging | `sqrt(dl² + (3·dc)²)`, merge below 0.08 |
//!
//! Chroma differences are scaled up because the usable chroma range is
//! several times narrower than the lightness range.
//!
//! Everything here is synchronous and deterministic given its inputs; the
//! random functions take the generator as a parameter.

pub mod cluster;
pub mod color;
pub mod entry;
pub mod gamut;
pub mod hue;
pub mod prefix;
pub mod sampler;
pub mod seed;
pub mod shade;
pub mod territory;

#[cfg(test)]
mod domain_tests;

pub use cluster::{clusters_for_hue, compute_clusters, NameShare, SemanticCluster};
pub use color::{LinearRgb, Oklab, OklchColor, Srgb};
pub use entry::{generate_id, ColorEntry};
pub use gamut::{
    gamut_boundary, is_displayable, max_chroma, peak_lightness, to_display_hex, HexMode, Peak,
};
pub use hue::{find_hue, find_hue_by_id, HueDefinition, HUES};
pub use prefix::{is_prefix_only, normalize_name, suggest_prefixes, SemanticSpec, SEMANTIC_SPECS};
pub use sampler::{generate_random_color, ColorSampler, SampleZone, ZoneError};
pub use seed::generate_seed_data;
pub use shade::{shade_ramp, ShadeRamp};
pub use territory::{partition, territories, ChartFrame, Point, Territory};
