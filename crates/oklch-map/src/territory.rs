//! Chart projection and Voronoi territories.
//!
//! The map plots chroma on the x axis and lightness on the y axis (light at
//! the top). Each cluster owns the part of the chart that is nearer to its
//! centroid than to any other centroid, measured in projected chart
//! coordinates. Cells are built by clipping the chart rectangle against one
//! bisecting half-plane per other site, so every cell is a convex polygon.
//!
//! Nearness here is Euclidean on the chart, not the chroma-weighted metric
//! the clusters were merged under, so a boundary can sit closer to one
//! centroid than the merge distance would suggest.

use serde::{Deserialize, Serialize};

use crate::cluster::SemanticCluster;
use crate::color::OklchColor;

/// Chroma at the right edge of the chart.
pub const MAP_MAX_CHROMA: f64 = 0.32;

/// Lightness above which a territory label should use dark text.
pub const LIGHT_LABEL_THRESHOLD: f64 = 0.6;

/// A point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The plotting rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    /// Chroma mapped to `x = width`
    pub max_chroma: f64,
}

impl Default for ChartFrame {
    /// The plot area of a 360×360 chart once its axis margins are removed.
    fn default() -> Self {
        Self {
            width: 240.0,
            height: 280.0,
            max_chroma: MAP_MAX_CHROMA,
        }
    }
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            max_chroma: MAP_MAX_CHROMA,
        }
    }

    /// Map `(l, c)` to chart coordinates.
    #[inline]
    pub fn project(&self, l: f64, c: f64) -> Point {
        Point {
            x: c / self.max_chroma * self.width,
            y: (1.0 - l) * self.height,
        }
    }

    fn corners(&self) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
    }
}

/// Keep the part of `polygon` at least as close to `site` as to `other`.
///
/// One Sutherland-Hodgman pass against the perpendicular bisector.
fn clip_half_plane(polygon: &[Point], site: Point, other: Point) -> Vec<Point> {
    let normal = Point::new(other.x - site.x, other.y - site.y);
    let mid = Point::new((site.x + other.x) / 2.0, (site.y + other.y) / 2.0);
    // Positive on the `other` side of the bisector
    let side = |p: Point| (p.x - mid.x) * normal.x + (p.y - mid.y) * normal.y;

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    for (k, &current) in polygon.iter().enumerate() {
        let previous = polygon[(k + polygon.len() - 1) % polygon.len()];
        let (fp, fc) = (side(previous), side(current));
        if (fp < 0.0 && fc > 0.0) || (fp > 0.0 && fc < 0.0) {
            let t = fp / (fp - fc);
            clipped.push(Point::new(
                previous.x + t * (current.x - previous.x),
                previous.y + t * (current.y - previous.y),
            ));
        }
        if fc <= 0.0 {
            clipped.push(current);
        }
    }
    clipped
}

/// Voronoi cells of `sites`, clipped to the chart rectangle.
///
/// Cell `i` belongs to `sites[i]`. When two sites coincide the earlier one
/// keeps the cell and the later one gets an empty polygon.
pub fn partition(sites: &[Point], frame: &ChartFrame) -> Vec<Vec<Point>> {
    sites
        .iter()
        .enumerate()
        .map(|(i, &site)| {
            let mut cell = frame.corners();
            for (j, &other) in sites.iter().enumerate() {
                if i == j || cell.is_empty() {
                    continue;
                }
                if other == site {
                    if j < i {
                        cell.clear();
                    }
                    continue;
                }
                cell = clip_half_plane(&cell, site, other);
            }
            cell
        })
        .collect()
}

/// A cluster paired with its place on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub label: String,
    /// Projected centroid, where the label is drawn
    pub anchor: Point,
    /// Convex cell polygon, clockwise in screen coordinates
    pub cell: Vec<Point>,
    /// CSS fill color of the cell
    pub fill: String,
    /// True when the cell is light enough to need dark label text
    pub light: bool,
}

/// Lay out `clusters` of hue `hue` on `frame`.
pub fn territories(clusters: &[SemanticCluster], hue: f64, frame: &ChartFrame) -> Vec<Territory> {
    let anchors: Vec<Point> = clusters.iter().map(|c| frame.project(c.l, c.c)).collect();
    let cells = partition(&anchors, frame);

    clusters
        .iter()
        .zip(anchors)
        .zip(cells)
        .map(|((cluster, anchor), cell)| Territory {
            label: cluster.display_label.clone(),
            anchor,
            cell,
            fill: OklchColor::new(cluster.l, cluster.c, hue).to_css(),
            light: cluster.l > LIGHT_LABEL_THRESHOLD,
        })
        .collect()
}
