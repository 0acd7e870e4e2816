use axum::response::Json;
use oklch_map::{find_hue, find_hue_by_id, HueDefinition, HUES};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// One hue family of the catalog
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HueInfo {
    /// Hue angle in degrees
    pub angle: f64,
    pub id: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    #[serde(rename = "nameZH")]
    pub name_zh: String,
}

impl From<&HueDefinition> for HueInfo {
    fn from(hue: &HueDefinition) -> Self {
        Self {
            angle: hue.angle,
            id: hue.id.to_string(),
            name_en: hue.name_en.to_string(),
            name_zh: hue.name_zh.to_string(),
        }
    }
}

/// Resolve a hue given as an angle (`"25"`) or an identifier (`"red"`).
pub fn resolve_hue(raw: &str) -> Result<&'static HueDefinition, ApiError> {
    match raw.parse::<f64>() {
        Ok(angle) => find_hue(angle).ok_or(ApiError::UnknownHue(angle)),
        Err(_) => find_hue_by_id(raw).ok_or(ApiError::NotFound),
    }
}

/// List the hue catalog
#[utoipa::path(
    get,
    path = "/api/hues",
    responses(
        (status = 200, description = "All hue families ordered by angle", body = [HueInfo]),
    ),
    tag = "Catalog"
)]
pub async fn handle_hues() -> Json<Vec<HueInfo>> {
    Json(HUES.iter().map(HueInfo::from).collect())
}
