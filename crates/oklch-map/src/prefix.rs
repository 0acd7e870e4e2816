//! Semantic prefix matching.
//!
//! Chinese color names are usually a descriptive prefix (淺, 深, 霧, ...)
//! followed by a hue word. Each prefix is anchored at a representative
//! lightness and chroma; the prefixes nearest to a question color are offered
//! to the user as naming hints.

use crate::color::OklchColor;

/// Number of suggestions returned by [`suggest_prefixes`].
pub const SUGGESTION_COUNT: usize = 6;

/// Chroma weight in the prefix distance.
pub const PREFIX_CHROMA_WEIGHT: f64 = 2.5;

/// A descriptive prefix anchored in the lightness/chroma plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticSpec {
    pub prefix: &'static str,
    pub l: f64,
    pub c: f64,
    /// English gloss
    pub desc: &'static str,
}

const fn spec(prefix: &'static str, l: f64, c: f64, desc: &'static str) -> SemanticSpec {
    SemanticSpec { prefix, l, c, desc }
}

/// The prefix catalog. Order matters: it breaks distance ties.
pub static SEMANTIC_SPECS: [SemanticSpec; 22] = [
    // Achromatic
    spec("白", 0.96, 0.01, "White"),
    spec("淺灰", 0.85, 0.015, "Light Gray"),
    spec("灰", 0.60, 0.015, "Gray"),
    spec("深灰", 0.35, 0.015, "Dark Gray"),
    spec("暗灰", 0.22, 0.015, "Dim Gray"),
    spec("黑", 0.10, 0.01, "Black"),
    // Muted
    spec("淺霧", 0.75, 0.04, "Pale Foggy"),
    spec("霧", 0.55, 0.05, "Foggy/Muted"),
    spec("深霧", 0.35, 0.05, "Deep Foggy"),
    spec("墨", 0.15, 0.06, "Ink"),
    // Light
    spec("淡", 0.90, 0.05, "Pale"),
    spec("淺", 0.82, 0.10, "Light"),
    spec("亮", 0.85, 0.16, "Bright"),
    spec("螢光", 0.88, 0.26, "Fluorescent/Neon"),
    // Saturated
    spec("明", 0.65, 0.12, "Luminous/Clear"),
    spec("鮮", 0.65, 0.22, "Strong"),
    spec("豔", 0.60, 0.28, "Vivid"),
    spec("純", 0.50, 0.30, "Pure"),
    spec("正", 0.50, 0.28, "Standard/Base"),
    // Dark
    spec("濃", 0.45, 0.22, "Deep/Rich"),
    spec("深", 0.35, 0.15, "Deep"),
    spec("暗", 0.25, 0.10, "Dark"),
];

/// Prefixes that are complete color names on their own.
pub const STANDALONE_PREFIXES: [&str; 6] = ["白", "淺灰", "灰", "深灰", "暗灰", "黑"];

impl SemanticSpec {
    /// Weighted distance `sqrt(dl² + (2.5·dc)²)` to a color. Hue is ignored.
    pub fn distance_to(&self, color: &OklchColor) -> f64 {
        let dl = self.l - color.l;
        let dc = (self.c - color.c) * PREFIX_CHROMA_WEIGHT;
        (dl * dl + dc * dc).sqrt()
    }
}

/// The whole catalog ordered by distance to `color`, nearest first.
///
/// The sort is stable, so equal distances keep catalog order.
pub fn rank_prefixes(color: &OklchColor) -> Vec<(&'static SemanticSpec, f64)> {
    rank_in(&SEMANTIC_SPECS, color)
}

fn rank_in<'a>(catalog: &'a [SemanticSpec], color: &OklchColor) -> Vec<(&'a SemanticSpec, f64)> {
    let mut ranked: Vec<_> = catalog
        .iter()
        .map(|spec| (spec, spec.distance_to(color)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

/// The [`SUGGESTION_COUNT`] prefixes nearest to `color`.
///
/// ```
/// use oklch_map::{suggest_prefixes, OklchColor};
///
/// let hints = suggest_prefixes(&OklchColor::new(0.1, 0.01, 245.0));
/// assert_eq!(hints[0], "黑");
/// ```
pub fn suggest_prefixes(color: &OklchColor) -> [&'static str; SUGGESTION_COUNT] {
    let ranked = rank_prefixes(color);
    std::array::from_fn(|i| ranked[i].0.prefix)
}

/// Canonicalize a submitted name.
///
/// Trims whitespace, folds the variant 艷 into 豔 and drops one trailing 色
/// unless that would leave the name empty.
pub fn normalize_name(raw: &str) -> String {
    let mut name = raw.trim().replace('艷', "豔");
    if name.chars().count() > 1 && name.ends_with('色') {
        name.pop();
    }
    name
}

/// True if `name` is a bare descriptive prefix that needs a hue word.
pub fn is_prefix_only(name: &str) -> bool {
    SEMANTIC_SPECS.iter().any(|spec| spec.prefix == name)
        && !STANDALONE_PREFIXES.contains(&name)
}
