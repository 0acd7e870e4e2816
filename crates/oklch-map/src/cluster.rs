//! Agglomerative clustering of named color records.
//!
//! Records are first grouped by their exact name. Groups whose centroids lie
//! closer than [`MERGE_THRESHOLD`] are then merged pairwise, closest first,
//! until no pair is close enough. Each surviving group becomes a labeled
//! territory on the map.
//!
//! # Algorithm
//!
//! | Step | Operation |
//! |------|-----------|
//! | 1 | Drop suspicious records |
//! | 2 | Group by name in order of first appearance, centroid = mean `(l, c)` |
//! | 3 | Find the closest pair under `sqrt(dl² + (3·dc)²)`, first minimal pair wins |
//! | 4 | If it is below the threshold, replace both with their vote-weighted merge, appended last |
//! | 5 | Sort each group's names by count, the top name labels the cluster |
//!
//! Every call is a full recomputation over its input; there is no caching.
//! The pair search is quadratic per merge, which is fine for a few hundred
//! distinct names per hue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::ColorEntry;

/// Groups closer than this are merged.
pub const MERGE_THRESHOLD: f64 = 0.08;

/// Chroma weight in the cluster distance.
pub const CLUSTER_CHROMA_WEIGHT: f64 = 3.0;

/// Share of one name within a cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameShare {
    pub name: String,
    /// Number of records carrying this name
    pub count: usize,
    /// `round(100 · count / total)`; shares may not sum to exactly 100
    pub percentage: u32,
}

/// A labeled region of the lightness/chroma plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticCluster {
    /// The most frequent name in the cluster
    pub display_label: String,
    /// Centroid lightness
    pub l: f64,
    /// Centroid chroma
    pub c: f64,
    /// Number of records in the cluster
    pub total_votes: usize,
    /// Names by descending count
    pub composition: Vec<NameShare>,
}

/// Working state during the merge phase.
#[derive(Debug, Clone)]
struct Group {
    names: Vec<(String, usize)>,
    l: f64,
    c: f64,
    total: usize,
}

impl Group {
    fn distance(&self, other: &Group) -> f64 {
        let dl = self.l - other.l;
        let dc = (self.c - other.c) * CLUSTER_CHROMA_WEIGHT;
        (dl * dl + dc * dc).sqrt()
    }

    fn merge(mut self, other: Group) -> Group {
        let total = self.total + other.total;
        let (w1, w2) = (self.total as f64, other.total as f64);
        self.l = (self.l * w1 + other.l * w2) / total as f64;
        self.c = (self.c * w1 + other.c * w2) / total as f64;
        self.total = total;
        self.names.extend(other.names);
        self
    }

    fn finalize(mut self) -> SemanticCluster {
        // Stable: equal counts keep their merge order
        self.names.sort_by(|a, b| b.1.cmp(&a.1));
        let total = self.total;
        let display_label = self
            .names
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let composition = self
            .names
            .into_iter()
            .map(|(name, count)| NameShare {
                percentage: (count as f64 / total as f64 * 100.0).round() as u32,
                name,
                count,
            })
            .collect();

        SemanticCluster {
            display_label,
            l: self.l,
            c: self.c,
            total_votes: total,
            composition,
        }
    }
}

/// One group per distinct name, in order of first appearance.
fn group_by_name<'a>(entries: impl Iterator<Item = &'a ColorEntry>) -> Vec<Group> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut sums: Vec<(&'a str, f64, f64, usize)> = Vec::new();

    for entry in entries {
        let slot = *index.entry(entry.name.as_str()).or_insert_with(|| {
            sums.push((entry.name.as_str(), 0.0, 0.0, 0));
            sums.len() - 1
        });
        let acc = &mut sums[slot];
        acc.1 += entry.color.l;
        acc.2 += entry.color.c;
        acc.3 += 1;
    }

    sums.into_iter()
        .map(|(name, sum_l, sum_c, count)| Group {
            names: vec![(name.to_string(), count)],
            l: sum_l / count as f64,
            c: sum_c / count as f64,
            total: count,
        })
        .collect()
}

/// Indices and distance of the closest pair, scanning `i < j`.
fn closest_pair(groups: &[Group]) -> Option<(usize, usize, f64)> {
    let mut best = None;
    let mut best_distance = f64::INFINITY;
    for i in 0..groups.len() {
        for j in i + 1..groups.len() {
            let d = groups[i].distance(&groups[j]);
            if d < best_distance {
                best_distance = d;
                best = Some((i, j, d));
            }
        }
    }
    best
}

fn merge_groups(groups: &mut Vec<Group>) {
    while groups.len() > 1 {
        match closest_pair(groups) {
            Some((i, j, d)) if d < MERGE_THRESHOLD => {
                // j > i, so removing j first leaves i in place
                let second = groups.remove(j);
                let first = groups.remove(i);
                groups.push(first.merge(second));
            }
            _ => break,
        }
    }
}

/// Cluster all non-suspicious records.
///
/// ```
/// use oklch_map::{compute_clusters, ColorEntry, OklchColor};
///
/// let entries = vec![
///     ColorEntry::new("a", OklchColor::new(0.5, 0.28, 25.0), "正紅", 0),
///     ColorEntry::new("b", OklchColor::new(0.51, 0.28, 25.0), "正紅", 0),
///     ColorEntry::new("c", OklchColor::new(0.5, 0.285, 25.0), "大紅", 0),
/// ];
/// let clusters = compute_clusters(&entries);
/// assert_eq!(clusters.len(), 1);
/// assert_eq!(clusters[0].display_label, "正紅");
/// assert_eq!(clusters[0].total_votes, 3);
/// ```
pub fn compute_clusters(entries: &[ColorEntry]) -> Vec<SemanticCluster> {
    cluster_records(entries.iter())
}

/// Cluster the records whose hue is exactly `hue`.
pub fn clusters_for_hue(entries: &[ColorEntry], hue: f64) -> Vec<SemanticCluster> {
    cluster_records(entries.iter().filter(|e| e.color.h == hue))
}

fn cluster_records<'a>(entries: impl Iterator<Item = &'a ColorEntry>) -> Vec<SemanticCluster> {
    let mut groups = group_by_name(entries.filter(|e| !e.is_suspicious));
    merge_groups(&mut groups);
    groups.into_iter().map(Group::finalize).collect()
}
