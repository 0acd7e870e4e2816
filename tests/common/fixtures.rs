//! Test fixtures and constants.

use oklch_map::{ColorEntry, OklchColor};

/// Admin token configured for every test app
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Hue angles from the catalog
pub mod hues {
    pub const RED: f64 = 25.0;
    pub const GREEN: f64 = 145.0;
    pub const BLUE: f64 = 245.0;
}

/// An accepted record
pub fn entry(id: &str, name: &str, l: f64, c: f64, h: f64) -> ColorEntry {
    ColorEntry::new(id, OklchColor::new(l, c, h), name, 1_700_000_000_000)
}

/// A small red map: two light reds close together, one deep red, one
/// flagged record
pub fn red_records() -> Vec<ColorEntry> {
    vec![
        entry("r1", "淺紅", 0.85, 0.08, hues::RED),
        entry("r2", "淺紅", 0.84, 0.085, hues::RED),
        entry("r3", "深紅", 0.35, 0.12, hues::RED),
        entry("r4", "香蕉", 0.6, 0.1, hues::RED).flagged("not a red"),
        entry("b1", "藍", 0.5, 0.15, hues::BLUE),
    ]
}

/// Admin header pair for requests
pub fn admin_headers() -> [(&'static str, &'static str); 1] {
    [("Admin-Token", ADMIN_TOKEN)]
}
