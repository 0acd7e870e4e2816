//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use oklch_map::{generate_seed_data, ChartFrame, ColorSampler};
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::{ApiError, ConfigError};
use crate::models::{AppConfig, Question};
use crate::services::{
    AcceptAllModerator, HttpModerator, InMemoryStore, Moderator, SubmissionService,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<InMemoryStore>,
    pub submission: Arc<SubmissionService>,
    pub sampler: Arc<ColorSampler>,
    pub frame: ChartFrame,
}

impl AppState {
    /// Wire the services around an existing store and moderator.
    pub fn new(
        config: AppConfig,
        store: Arc<InMemoryStore>,
        moderator: Arc<dyn Moderator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = Arc::new(config.color_sampler()?);
        let submission = Arc::new(SubmissionService::new(
            store.clone(),
            moderator,
            config.max_name_length,
        ));

        Ok(Self {
            sampler,
            frame: config.chart_frame(),
            config: Arc::new(config),
            store,
            submission,
        })
    }
}

/// Create application state from configuration.
///
/// Uses the HTTP moderator when an endpoint is configured and seeds the
/// store when `seed_when_empty` is set.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let moderator: Arc<dyn Moderator> = match &config.moderation.endpoint {
        Some(endpoint) => {
            let timeout = Duration::from_secs(config.moderation.timeout_secs);
            let moderator = HttpModerator::new(endpoint.clone(), timeout)
                .map_err(|e| anyhow::anyhow!("Failed to create moderation client: {e}"))?;
            tracing::info!(endpoint = %endpoint, "Moderation proxy configured");
            Arc::new(moderator)
        }
        None => {
            tracing::warn!("No moderation endpoint configured, accepting every name");
            Arc::new(AcceptAllModerator)
        }
    };

    let store = if config.seed_when_empty {
        let seed = generate_seed_data(
            &mut rand::thread_rng(),
            chrono::Utc::now().timestamp_millis(),
        );
        tracing::info!(records = seed.len(), "Seeded empty store");
        InMemoryStore::with_entries(seed)
    } else {
        InMemoryStore::new()
    };

    Ok(AppState::new(config, Arc::new(store), moderator)?)
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Catalog and naming
        .route("/api/hues", get(api::handle_hues))
        .route("/api/question", get(handle_question))
        .route("/api/entries", get(handle_entries).post(handle_submit))
        .route("/api/entries/stream", get(handle_entry_stream))
        // Map and records
        .route("/api/map/:hue", get(handle_map))
        .route("/api/stats", get(handle_stats))
        .route("/api/export", get(handle_export))
        // Admin
        .route("/api/import", post(handle_import))
        .route("/api/admin/prune", post(handle_prune))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_question(
    State(state): State<AppState>,
    query: Query<api::QuestionQuery>,
) -> Result<Json<Question>, ApiError> {
    api::handle_question(State(state.sampler), query).await
}

async fn handle_entries(State(state): State<AppState>) -> Json<Vec<oklch_map::ColorEntry>> {
    api::handle_entries(State(state.store)).await
}

async fn handle_submit(
    State(state): State<AppState>,
    body: Json<api::SubmitRequest>,
) -> Result<Json<api::SubmitResponse>, ApiError> {
    api::handle_submit(State(state.submission), body).await
}

async fn handle_entry_stream(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    api::handle_entry_stream(State(state.store)).await
}

async fn handle_map(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Json<api::MapResponse>, ApiError> {
    api::handle_map(State(state.store), State(state.frame), path).await
}

async fn handle_stats(State(state): State<AppState>) -> Json<api::StatsResponse> {
    api::handle_stats(State(state.store)).await
}

async fn handle_export(State(state): State<AppState>) -> Json<Vec<oklch_map::ColorEntry>> {
    api::handle_export(State(state.store)).await
}

async fn handle_import(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Json<Vec<oklch_map::ColorEntry>>,
) -> Result<Json<api::ImportResponse>, ApiError> {
    api::handle_import(State(state.config), State(state.store), headers, body).await
}

async fn handle_prune(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<api::PruneResponse>, ApiError> {
    api::handle_prune(State(state.config), State(state.store), headers).await
}
