use axum::{extract::State, http::HeaderMap, response::Json, Json as JsonExtractor};
use oklch_map::ColorEntry;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::headers::HeaderMapExt;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::EntryStore;

/// Response from /api/import
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportResponse {
    /// Records taken from the upload
    pub imported: usize,
    /// Records in the store afterwards
    pub total: usize,
}

/// Response from /api/admin/prune
#[derive(Debug, Serialize, ToSchema)]
pub struct PruneResponse {
    /// Suspicious records removed
    pub deleted: usize,
    /// Accepted records whose moderation note was dropped
    pub updated: usize,
    /// Records at or before this time (epoch ms) were swept
    pub cutoff: i64,
}

/// Restore records from a backup
///
/// Takes a JSON array of records as produced by `/api/export`. Seed records
/// are dropped. Uploaded records are merged by id with the existing ones;
/// records without an id are skipped.
#[utoipa::path(
    post,
    path = "/api/import",
    responses(
        (status = 200, description = "Records imported", body = ImportResponse),
        (status = 400, description = "Missing Admin-Token header"),
        (status = 403, description = "Wrong token or admin disabled"),
    ),
    params(
        ("Admin-Token" = String, Header, description = "Configured admin token"),
    ),
    tag = "Admin"
)]
pub async fn handle_import<S: EntryStore>(
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<S>>,
    headers: HeaderMap,
    JsonExtractor(entries): JsonExtractor<Vec<ColorEntry>>,
) -> Result<Json<ImportResponse>, ApiError> {
    headers.require_admin(config.admin_token.as_deref())?;

    let imported = store.import(entries).await;
    Ok(Json(ImportResponse {
        imported,
        total: store.len().await,
    }))
}

/// Run the cleanup sweep
///
/// Records older than the configured age are swept: suspicious ones are
/// deleted and accepted ones lose their moderation note.
#[utoipa::path(
    post,
    path = "/api/admin/prune",
    responses(
        (status = 200, description = "Sweep finished", body = PruneResponse),
        (status = 400, description = "Missing Admin-Token header"),
        (status = 403, description = "Wrong token or admin disabled"),
    ),
    params(
        ("Admin-Token" = String, Header, description = "Configured admin token"),
    ),
    tag = "Admin"
)]
pub async fn handle_prune<S: EntryStore>(
    State(config): State<Arc<AppConfig>>,
    State(store): State<Arc<S>>,
    headers: HeaderMap,
) -> Result<Json<PruneResponse>, ApiError> {
    headers.require_admin(config.admin_token.as_deref())?;

    let cutoff = config.prune_cutoff(chrono::Utc::now().timestamp_millis());
    let report = store.prune(cutoff).await;

    Ok(Json(PruneResponse {
        deleted: report.deleted,
        updated: report.updated,
        cutoff,
    }))
}
