use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
    Json as JsonExtractor,
};
use futures_util::stream::Stream;
use oklch_map::{find_hue, ColorEntry, OklchColor};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{EntryStore, SubmissionService};

/// Request body for a name submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    /// The question color `{l, c, h}`; `h` must be a catalog angle
    #[schema(value_type = Object)]
    pub color: OklchColor,
    /// The name typed for it
    pub name: String,
}

/// Response from a name submission
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// False when the name was flagged
    pub accepted: bool,
    /// Message for the person who typed the name
    pub feedback: String,
    /// The stored record
    #[schema(value_type = Object)]
    pub entry: ColorEntry,
}

/// Record counts
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub total: usize,
    /// Records submitted by people
    pub human: usize,
    pub seed: usize,
    pub suspicious: usize,
}

impl StatsResponse {
    pub fn from_entries(entries: &[ColorEntry]) -> Self {
        Self {
            total: entries.len(),
            human: entries.iter().filter(|e| !e.is_seed).count(),
            seed: entries.iter().filter(|e| e.is_seed).count(),
            suspicious: entries.iter().filter(|e| e.is_suspicious).count(),
        }
    }
}

/// Reject coordinates the core must never see.
pub fn validate_color(color: &OklchColor) -> Result<(), ApiError> {
    if !(color.l.is_finite() && color.c.is_finite() && color.h.is_finite()) {
        return Err(ApiError::BadRequest("coordinates must be finite".to_string()));
    }
    if !(0.0..=1.0).contains(&color.l) {
        return Err(ApiError::BadRequest(format!("lightness {} out of range", color.l)));
    }
    if color.c < 0.0 {
        return Err(ApiError::BadRequest(format!("chroma {} is negative", color.c)));
    }
    Ok(())
}

/// List all records
#[utoipa::path(
    get,
    path = "/api/entries",
    responses(
        (status = 200, description = "Every stored record in insertion order", content_type = "application/json"),
    ),
    tag = "Records"
)]
pub async fn handle_entries<S: EntryStore>(
    State(store): State<Arc<S>>,
) -> Json<Vec<ColorEntry>> {
    Json(store.snapshot().await)
}

/// Submit a name for a question color
///
/// Every non-empty name is stored. Names that are too long, that are a bare
/// prefix, or that the moderator rejects are stored as suspicious and left
/// out of the map.
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Name recorded", body = SubmitResponse),
        (status = 400, description = "Empty name, unknown hue or coordinates out of range"),
    ),
    tag = "Naming"
)]
pub async fn handle_submit(
    State(submission): State<Arc<SubmissionService>>,
    JsonExtractor(request): JsonExtractor<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    validate_color(&request.color)?;
    let hue = find_hue(request.color.h).ok_or(ApiError::UnknownHue(request.color.h))?;

    let outcome = submission.submit(request.color, hue, &request.name).await?;

    Ok(Json(SubmitResponse {
        accepted: outcome.accepted,
        feedback: outcome.feedback,
        entry: outcome.entry,
    }))
}

/// Live record feed
///
/// Sends an `entry` event with every appended record. A client that falls
/// behind gets a `refresh` event and should reload `/api/entries`.
#[utoipa::path(
    get,
    path = "/api/entries/stream",
    responses(
        (status = 200, description = "Server-sent event stream", content_type = "text/event-stream"),
    ),
    tag = "Records"
)]
pub async fn handle_entry_stream<S: EntryStore>(
    State(store): State<Arc<S>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = store.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => match serde_json::to_string(&entry) {
            Ok(json) => Some(Ok::<_, Infallible>(Event::default().event("entry").data(json))),
            Err(e) => {
                tracing::warn!(id = %entry.id, error = %e, "Skipping record that failed to serialize");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "Entry stream subscriber lagged");
            Some(Ok(Event::default().event("refresh").data("lagged")))
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Record counts
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Counts by kind", body = StatsResponse),
    ),
    tag = "Records"
)]
pub async fn handle_stats<S: EntryStore>(State(store): State<Arc<S>>) -> Json<StatsResponse> {
    Json(StatsResponse::from_entries(&store.snapshot().await))
}

/// Export accepted records
///
/// Suspicious records are left out, so the export can be fed straight back
/// into `/api/import`.
#[utoipa::path(
    get,
    path = "/api/export",
    responses(
        (status = 200, description = "Non-suspicious records", content_type = "application/json"),
    ),
    tag = "Records"
)]
pub async fn handle_export<S: EntryStore>(State(store): State<Arc<S>>) -> Json<Vec<ColorEntry>> {
    let entries: Vec<ColorEntry> = store
        .snapshot()
        .await
        .into_iter()
        .filter(|e| !e.is_suspicious)
        .collect();
    tracing::info!(count = entries.len(), "Records exported");
    Json(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entry_store::CHANNEL_CAPACITY;
    use crate::services::InMemoryStore;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    async fn next_event(body: &mut axum::body::Body) -> String {
        let frame = body.frame().await.unwrap().unwrap();
        String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_entry_stream_sends_entry_events() {
        let store = Arc::new(InMemoryStore::new());
        let sse = handle_entry_stream(State(store.clone())).await;

        let entry = ColorEntry::new("abc", OklchColor::new(0.5, 0.1, 25.0), "紅", 0);
        store.append(entry).await.unwrap();

        let mut body = sse.into_response().into_body();
        let event = next_event(&mut body).await;
        assert!(event.starts_with("event: entry\n"), "{event}");
        assert!(event.contains(r#""id":"abc""#), "{event}");
    }

    #[tokio::test]
    async fn test_entry_stream_sends_refresh_after_lag() {
        let store = Arc::new(InMemoryStore::new());
        let sse = handle_entry_stream(State(store.clone())).await;

        // Overflow the subscriber's buffer before it reads anything
        let color = OklchColor::new(0.5, 0.1, 25.0);
        for i in 0..CHANNEL_CAPACITY + 10 {
            store
                .append(ColorEntry::new(format!("id{i}"), color, "紅", 0))
                .await
                .unwrap();
        }

        let mut body = sse.into_response().into_body();

        let first = next_event(&mut body).await;
        assert!(first.starts_with("event: refresh\n"), "{first}");
        assert!(first.contains("data: lagged"), "{first}");

        // The oldest records still buffered follow the refresh
        let second = next_event(&mut body).await;
        assert!(second.starts_with("event: entry\n"), "{second}");
        assert!(second.contains(r#""id":"id10""#), "{second}");
    }

    #[test]
    fn test_validate_color_ranges() {
        assert!(validate_color(&OklchColor::new(0.5, 0.1, 25.0)).is_ok());
        assert!(validate_color(&OklchColor::new(0.0, 0.0, 25.0)).is_ok());
        assert!(validate_color(&OklchColor::new(1.0, 0.0, 25.0)).is_ok());
        assert!(matches!(
            validate_color(&OklchColor::new(1.2, 0.1, 25.0)),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            validate_color(&OklchColor::new(0.5, -0.1, 25.0)),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            validate_color(&OklchColor::new(f64::NAN, 0.1, 25.0)),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_stats_from_entries() {
        let color = OklchColor::new(0.5, 0.1, 25.0);
        let entries = vec![
            ColorEntry::new("a", color, "紅", 0),
            ColorEntry::new("b", color, "淺紅", 0).seeded(),
            ColorEntry::new("c", color, "淺", 0).flagged("PREFIX_ONLY"),
        ];

        assert_eq!(
            StatsResponse::from_entries(&entries),
            StatsResponse {
                total: 3,
                human: 2,
                seed: 1,
                suspicious: 1,
            }
        );
    }
}
