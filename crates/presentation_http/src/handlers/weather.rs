//! Weather lookup handler

use application::WeatherReport;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Resolve a postal code to a weather report
///
/// `GET /{cep}` where the path segment is the raw postal code. Validation
/// happens inside the use case, so any string reaches this handler.
#[instrument(skip(state))]
pub async fn search_weather(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    let report = state.lookup.search(&cep).await?;
    Ok(Json(report))
}
