//! Synthetic starter data.
//!
//! An empty map has nothing to cluster, so a fresh deployment is seeded with
//! a few plausible names per hue. The names are placed relative to each hue's
//! gamut tip: the saturated tip itself, a light tint above it, a deep shade
//! below it and a muted version at the tip's lightness.

use rand::Rng;

use crate::color::OklchColor;
use crate::entry::{generate_id, ColorEntry};
use crate::gamut::{max_chroma, peak_lightness, Peak};
use crate::hue::{HueDefinition, HUES};

/// Records generated per cluster.
pub const ENTRIES_PER_CLUSTER: usize = 2;

/// Placement of one seed cluster relative to the hue's boundary.
#[derive(Debug, Clone, Copy)]
struct SeedCluster {
    prefix: &'static str,
    target_l: f64,
    l_spread: f64,
    /// Fraction of the boundary chroma to aim for
    chroma_factor: f64,
    /// Jitter as a fraction of the boundary chroma
    c_spread: f64,
}

/// Descriptive prefix for the saturated tip of a hue.
pub fn tip_prefix(peak: &Peak) -> &'static str {
    if peak.l >= 0.88 {
        "螢光"
    } else if peak.l >= 0.80 {
        "亮"
    } else if peak.l <= 0.35 {
        "濃"
    } else if peak.max_c > 0.28 {
        "豔"
    } else if peak.max_c > 0.22 {
        "鮮"
    } else {
        "正"
    }
}

fn seed_clusters(peak: &Peak) -> [SeedCluster; 4] {
    [
        SeedCluster {
            prefix: tip_prefix(peak),
            target_l: peak.l,
            l_spread: 0.05,
            chroma_factor: 0.9,
            c_spread: 0.05,
        },
        SeedCluster {
            prefix: "淺",
            target_l: peak.l + (0.98 - peak.l) * 0.5,
            l_spread: 0.05,
            chroma_factor: 0.4,
            c_spread: 0.1,
        },
        SeedCluster {
            prefix: "深",
            target_l: peak.l * 0.5,
            l_spread: 0.05,
            chroma_factor: 0.5,
            c_spread: 0.1,
        },
        SeedCluster {
            prefix: "霧",
            target_l: peak.l,
            l_spread: 0.1,
            chroma_factor: 0.2,
            c_spread: 0.05,
        },
    ]
}

fn seed_entry<R: Rng + ?Sized>(
    hue: &HueDefinition,
    cluster: &SeedCluster,
    rng: &mut R,
    timestamp: i64,
) -> ColorEntry {
    let l = (cluster.target_l + (rng.gen::<f64>() - 0.5) * cluster.l_spread).clamp(0.05, 0.95);
    let boundary = max_chroma(l, hue.angle);
    let jitter = (rng.gen::<f64>() - 0.5) * boundary * cluster.c_spread;
    // A boundary below 0.001 still yields c = 0
    let c = (boundary * cluster.chroma_factor + jitter)
        .min(boundary - 0.001)
        .max(0.0);

    ColorEntry::new(
        generate_id(rng),
        OklchColor::new(l, c, hue.angle),
        format!("{}{}", cluster.prefix, hue.name_zh),
        timestamp,
    )
    .seeded()
}

/// Generate the seed records for every catalog hue.
///
/// Eight records per hue: two for each of the four relative clusters.
pub fn generate_seed_data<R: Rng + ?Sized>(rng: &mut R, timestamp: i64) -> Vec<ColorEntry> {
    let mut entries = Vec::with_capacity(HUES.len() * 4 * ENTRIES_PER_CLUSTER);
    for hue in HUES.iter() {
        let peak = peak_lightness(hue.angle);
        for cluster in seed_clusters(&peak).iter() {
            for _ in 0..ENTRIES_PER_CLUSTER {
                entries.push(seed_entry(hue, cluster, rng, timestamp));
            }
        }
    }
    entries
}
