use axum::{
    extract::{Path, State},
    response::Json,
};
use oklch_map::{
    clusters_for_hue, gamut_boundary, territories, ChartFrame, ColorEntry, HueDefinition,
    SemanticCluster, Territory,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::hues::{resolve_hue, HueInfo};
use crate::error::ApiError;
use crate::services::EntryStore;

/// A point of the gamut outline
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct BoundaryPoint {
    pub c: f64,
    pub l: f64,
}

/// One accepted record placed on the chart
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MapPoint {
    pub id: String,
    pub name: String,
    pub l: f64,
    pub c: f64,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw the map of one hue
#[derive(Debug, Serialize, ToSchema)]
pub struct MapResponse {
    pub hue: HueInfo,
    /// Named regions, labels in record order
    #[schema(value_type = Vec<Object>)]
    pub clusters: Vec<SemanticCluster>,
    /// One chart cell per cluster, same order as `clusters`
    #[schema(value_type = Vec<Object>)]
    pub territories: Vec<Territory>,
    /// Closed gamut outline in the chroma/lightness plane
    pub boundary: Vec<BoundaryPoint>,
    pub points: Vec<MapPoint>,
    #[schema(value_type = Object)]
    pub frame: ChartFrame,
}

/// Assemble the map of one hue from a record snapshot.
pub fn build_map(entries: &[ColorEntry], hue: &HueDefinition, frame: ChartFrame) -> MapResponse {
    let clusters = clusters_for_hue(entries, hue.angle);
    let territories = territories(&clusters, hue.angle, &frame);

    let points = entries
        .iter()
        .filter(|e| !e.is_suspicious && e.color.h == hue.angle)
        .map(|e| {
            let at = frame.project(e.color.l, e.color.c);
            MapPoint {
                id: e.id.clone(),
                name: e.name.clone(),
                l: e.color.l,
                c: e.color.c,
                x: at.x,
                y: at.y,
            }
        })
        .collect();

    MapResponse {
        hue: HueInfo::from(hue),
        clusters,
        territories,
        boundary: gamut_boundary(hue.angle)
            .into_iter()
            .map(|(c, l)| BoundaryPoint { c, l })
            .collect(),
        points,
        frame,
    }
}

/// Semantic map of one hue
///
/// Clusters the accepted names of the hue and partitions the chart into
/// one cell per cluster.
#[utoipa::path(
    get,
    path = "/api/map/{hue}",
    params(
        ("hue" = String, Path, description = "Catalog hue angle (e.g. '25') or id (e.g. 'red')"),
    ),
    responses(
        (status = 200, description = "Map of the hue", body = MapResponse),
        (status = 400, description = "Angle is not in the catalog"),
        (status = 404, description = "No hue with that id"),
    ),
    tag = "Map"
)]
pub async fn handle_map<S: EntryStore>(
    State(store): State<Arc<S>>,
    State(frame): State<ChartFrame>,
    Path(raw_hue): Path<String>,
) -> Result<Json<MapResponse>, ApiError> {
    let hue = resolve_hue(&raw_hue)?;
    let entries = store.snapshot().await;
    let map = build_map(&entries, hue, frame);

    tracing::debug!(
        hue = hue.id,
        clusters = map.clusters.len(),
        points = map.points.len(),
        "Map computed"
    );

    Ok(Json(map))
}
