//! Cross-module regression tests for oklch-map.
//!
//! Each test guards a property the map depends on end to end: the gamut
//! boundary being tight, the sampler never leaving the gamut, and the
//! clustering being a pure function of its input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cluster::compute_clusters;
use crate::color::OklchColor;
use crate::entry::ColorEntry;
use crate::gamut::{is_displayable, max_chroma, to_display_hex, HexMode};
use crate::hue::HUES;
use crate::prefix::suggest_prefixes;
use crate::sampler::{generate_random_color, ColorSampler, DEFAULT_ZONES, MAX_TRIES};

fn record(id: &str, name: &str, l: f64, c: f64) -> ColorEntry {
    ColorEntry::new(id, OklchColor::new(l, c, 25.0), name, 0)
}

// ========================================================================
// Gamut boundary
// ========================================================================

/// If this breaks, the bisection is returning the upper bound or the
/// tolerance has drifted: either the reported boundary is not
/// displayable, or there is visible headroom left above it.
#[test]
fn test_boundary_tightness_for_all_hues() {
    let mut lightness = vec![0.01];
    lightness.extend((1..=9).map(|k| k as f64 / 10.0));
    lightness.push(0.99);

    for hue in HUES.iter() {
        for &l in &lightness {
            let c = max_chroma(l, hue.angle);
            assert!(c >= 0.0);
            assert!(
                is_displayable(l, c, hue.angle),
                "boundary itself out of gamut at l={l} h={}",
                hue.angle
            );
            assert!(
                !is_displayable(l, c + 0.01, hue.angle),
                "boundary too low at l={l} h={}: c={c}",
                hue.angle
            );
        }
    }
}

#[test]
fn test_black_and_white_have_no_chroma() {
    for hue in HUES.iter() {
        assert_eq!(max_chroma(0.0, hue.angle), 0.0);
        assert_eq!(max_chroma(1.0, hue.angle), 0.0);
    }
}

/// Gamut mapping must only reduce chroma. Lightness and hue are kept.
#[test]
fn test_gamut_mapping_preserves_lightness_and_hue() {
    for hue in HUES.iter() {
        for l in [0.3, 0.6, 0.9] {
            let c = 0.38;
            assert!(!is_displayable(l, c, hue.angle));
            let boundary = max_chroma(l, hue.angle);
            assert_eq!(
                to_display_hex(l, c, hue.angle, HexMode::GamutMapped),
                to_display_hex(l, boundary, hue.angle, HexMode::GamutMapped),
                "l={l} h={}",
                hue.angle
            );
        }
    }
}

// ========================================================================
// Sampler
// ========================================================================

#[test]
fn test_ten_thousand_samples_are_displayable() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10_000 {
        let color = generate_random_color(25.0, &mut rng);
        assert_eq!(color.h, 25.0);
        assert!(
            color.c <= max_chroma(color.l, 25.0),
            "undisplayable sample {color:?}"
        );
    }
}

/// If this breaks, some zone rectangle barely overlaps the gamut of a
/// catalog hue and the sampler is handing out its fixed fallback point.
#[test]
fn test_retry_cap_never_exhausts() {
    let mut rng = StdRng::seed_from_u64(99);
    for hue in HUES.iter() {
        for zone in DEFAULT_ZONES.iter() {
            for _ in 0..50 {
                assert!(
                    zone.try_sample(hue.angle, &mut rng, MAX_TRIES).is_some(),
                    "{} zone exhausted at h={}",
                    zone.name,
                    hue.angle
                );
            }
        }
    }
}

#[test]
fn test_pale_zone_share() {
    let sampler = ColorSampler::default();
    let mut rng = StdRng::seed_from_u64(11);
    let draws = 1000;

    let pale = (0..draws)
        .filter(|_| sampler.pick_zone(rng.gen::<f64>()).name == "pale")
        .count();
    let share = pale as f64 / draws as f64;
    assert!((share - 0.14).abs() < 0.04, "pale zone picked {share}");

    // Light results also include the top of the gray and vivid zones
    let light = (0..draws)
        .map(|_| generate_random_color(25.0, &mut rng))
        .filter(|color| color.l > 0.85)
        .count();
    let share = light as f64 / draws as f64;
    assert!((0.10..0.24).contains(&share), "l > 0.85 share {share}");
}

// ========================================================================
// Clustering
// ========================================================================

#[test]
fn test_clustering_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(8);
    let entries: Vec<ColorEntry> = (0..60)
        .map(|i| {
            let color = generate_random_color(245.0, &mut rng);
            let name = ["淺藍", "深藍", "霧藍", "藍"][i % 4];
            ColorEntry::new(format!("e{i}"), color, name, 0)
        })
        .collect();

    assert_eq!(compute_clusters(&entries), compute_clusters(&entries));
}

#[test]
fn test_votes_are_conserved() {
    let entries = vec![
        record("1", "淺紅", 0.85, 0.08),
        record("2", "淺紅", 0.83, 0.09),
        record("3", "粉紅", 0.84, 0.085),
        record("4", "深紅", 0.35, 0.15),
        record("5", "暗紅", 0.25, 0.1),
        record("6", "酒紅", 0.4, 0.16),
        record("7", "淺", 0.8, 0.1).flagged("PREFIX_ONLY"),
    ];
    let clusters = compute_clusters(&entries);
    let total: usize = clusters.iter().map(|c| c.total_votes).sum();
    assert_eq!(total, 6);
    for cluster in &clusters {
        let counted: usize = cluster.composition.iter().map(|n| n.count).sum();
        assert_eq!(counted, cluster.total_votes);
    }
}

#[test]
fn test_same_name_merges() {
    let entries = vec![
        record("a", "正紅", 0.5, 0.2),
        record("b", "正紅", 0.52, 0.21),
    ];
    let clusters = compute_clusters(&entries);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].display_label, "正紅");
    assert_eq!(clusters[0].total_votes, 2);
}

#[test]
fn test_white_and_black_stay_apart() {
    let entries = vec![record("w", "白", 0.95, 0.01), record("k", "黑", 0.1, 0.01)];
    let clusters = compute_clusters(&entries);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].display_label, "白");
    assert_eq!(clusters[1].display_label, "黑");
}

// ========================================================================
// Prefix hints
// ========================================================================

#[test]
fn test_black_anchor_suggests_black_first() {
    let hints = suggest_prefixes(&OklchColor::new(0.10, 0.01, 25.0));
    assert_eq!(hints.len(), 6);
    assert_eq!(hints[0], "黑");
}
