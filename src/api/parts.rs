use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::info;

use super::validation::validate_search_body;
use super::{ApiError, AppState, messages};
use crate::models::{Part, SearchRequest};

/// `POST /api/parts/search`
///
/// Returns a freshly generated list for the vehicle. When the body carries a
/// `userId` the search is logged in the background; the response never waits
/// on that write.
pub async fn search_parts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<Part>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| validate_search_body(&rejection))?;

    let catalog = Arc::clone(&state.catalog);
    let search = request.clone();
    let parts = tokio::task::spawn_blocking(move || catalog.generate(&search))
        .await
        .map_err(|e| ApiError::internal(messages::SEARCH_FAILED, e))?;

    info!(
        make = %request.make,
        model = %request.model,
        year = ?request.year,
        category = %request.category,
        results = parts.len(),
        "Parts search"
    );

    state.recorder.record_in_background(&request);

    Ok(Json(parts))
}
