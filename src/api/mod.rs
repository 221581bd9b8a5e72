use axum::{
    Router,
    extract::OriginalUri,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    CatalogSettings, HistoryRecorder, PartCatalog, RandomCatalog, SeaOrmSearchHistoryService,
    SearchHistoryService,
};

mod error;
mod history;
mod observability;
mod parts;
mod system;
mod types;
mod validation;
mod vehicles;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub catalog: Arc<dyn PartCatalog>,

    pub history: Arc<dyn SearchHistoryService>,

    pub recorder: HistoryRecorder,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let catalog: Arc<dyn PartCatalog> = Arc::new(RandomCatalog::new(CatalogSettings::from(
        &config.catalog,
    )));

    let history: Arc<dyn SearchHistoryService> =
        Arc::new(SeaOrmSearchHistoryService::new(store));

    let recorder = HistoryRecorder::new(history.clone());

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        catalog,
        history,
        recorder,
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/health", get(system::health))
        .route("/metrics", get(system::get_metrics))
        .route("/vehicles/makes", get(vehicles::list_makes))
        .route("/vehicles/models/{make}", get(vehicles::list_models))
        .route("/parts/search", post(parts::search_parts))
        .route("/search-history/{user_id}", get(history::get_search_history))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .fallback(route_fallback)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

async fn route_fallback(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::route_not_found(uri.path())
}
