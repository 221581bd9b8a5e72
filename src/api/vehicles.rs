use axum::{Json, extract::Path};

use crate::models::vehicle;

/// `GET /api/vehicles/makes`
pub async fn list_makes() -> Json<Vec<String>> {
    Json(vehicle::makes())
}

/// `GET /api/vehicles/models/{make}`
///
/// Makes without a model table answer with an empty list, not a 404.
pub async fn list_models(Path(make): Path<String>) -> Json<Vec<String>> {
    Json(vehicle::models_for(&make))
}
