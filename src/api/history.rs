use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_user_id;
use super::{ApiError, AppState};
use crate::models::SearchHistoryEntry;

/// `GET /api/search-history/{user_id}`
///
/// The ten most recent searches, newest first. Unknown users get `[]`.
pub async fn get_search_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<SearchHistoryEntry>>, ApiError> {
    let user_id = validate_user_id(&user_id)?;

    let entries = state
        .history
        .recent(user_id)
        .await
        .map_err(ApiError::history)?;

    Ok(Json(entries))
}
