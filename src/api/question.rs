use axum::{
    extract::{Query, State},
    response::Json,
};
use oklch_map::{find_hue, ColorSampler, HUES};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::Question;

/// Query parameters for /api/question
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionQuery {
    /// Hue angle from the catalog; a random catalog hue when omitted
    pub hue: Option<f64>,
}

/// Draw a question color
///
/// Returns a random displayable color of the requested hue family together
/// with its hex renderings, six naming hints and a shade ramp.
#[utoipa::path(
    get,
    path = "/api/question",
    params(QuestionQuery),
    responses(
        (status = 200, description = "A new question color", body = Question),
        (status = 400, description = "Hue is not in the catalog"),
    ),
    tag = "Naming"
)]
pub async fn handle_question(
    State(sampler): State<Arc<ColorSampler>>,
    Query(query): Query<QuestionQuery>,
) -> Result<Json<Question>, ApiError> {
    let mut rng = rand::thread_rng();

    let hue = match query.hue {
        Some(angle) => find_hue(angle).ok_or(ApiError::UnknownHue(angle))?,
        None => HUES
            .choose(&mut rng)
            .ok_or_else(|| ApiError::Internal("hue catalog is empty".to_string()))?,
    };

    let color = sampler.sample(hue.angle, &mut rng);
    tracing::debug!(hue = hue.id, l = color.l, c = color.c, "Question generated");

    Ok(Json(Question::new(*hue, color)))
}
