//! Fire-and-forget writer for the search log.
//!
//! A failed write never reaches the searcher. It is logged and counted in
//! `search_history_writes_total{outcome="error"}` instead.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::{NewSearchHistory, SearchRequest};
use crate::services::history_service::SearchHistoryService;

#[derive(Clone)]
pub struct HistoryRecorder {
    history: Arc<dyn SearchHistoryService>,
}

impl HistoryRecorder {
    #[must_use]
    pub fn new(history: Arc<dyn SearchHistoryService>) -> Self {
        Self { history }
    }

    /// Spawns the insert when the request names a user. The handle is only
    /// returned so callers that care (tests, the CLI) can wait on it.
    pub fn record_in_background(&self, request: &SearchRequest) -> Option<JoinHandle<()>> {
        let entry = NewSearchHistory::from_request(request)?;
        let history = Arc::clone(&self.history);

        Some(tokio::spawn(async move {
            let user_id = entry.user_id;
            match history.record(entry).await {
                Ok(id) => {
                    metrics::counter!("search_history_writes_total", "outcome" => "ok")
                        .increment(1);
                    debug!(user_id, history_id = id, "Search recorded");
                }
                Err(e) => {
                    metrics::counter!("search_history_writes_total", "outcome" => "error")
                        .increment(1);
                    warn!(user_id, error = %e, "Failed to record search history");
                }
            }
        }))
    }
}
