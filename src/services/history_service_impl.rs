//! `SeaORM` implementation of the `SearchHistoryService` trait.

use crate::constants::limits::HISTORY_LIMIT;
use crate::db::Store;
use crate::models::{NewSearchHistory, SearchHistoryEntry};
use crate::services::history_service::{HistoryError, SearchHistoryService};
use async_trait::async_trait;

pub struct SeaOrmSearchHistoryService {
    store: Store,
    limit: u64,
}

impl SeaOrmSearchHistoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            limit: HISTORY_LIMIT,
        }
    }
}

#[async_trait]
impl SearchHistoryService for SeaOrmSearchHistoryService {
    async fn record(&self, entry: NewSearchHistory) -> Result<i64, HistoryError> {
        Ok(self.store.add_search_history(&entry).await?)
    }

    async fn recent(&self, user_id: i32) -> Result<Vec<SearchHistoryEntry>, HistoryError> {
        if user_id <= 0 {
            return Err(HistoryError::InvalidUser(user_id));
        }

        Ok(self
            .store
            .recent_search_history(user_id, self.limit)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> SeaOrmSearchHistoryService {
        let store = Store::new("sqlite::memory:").await.unwrap();
        SeaOrmSearchHistoryService::new(store)
    }

    fn row(user_id: i32, make: &str) -> NewSearchHistory {
        NewSearchHistory {
            user_id,
            vehicle_make: Some(make.to_string()),
            vehicle_model: Some("Civic".to_string()),
            vehicle_year: Some(2018),
            part_category: Some("Interior".to_string()),
            search_query: None,
        }
    }

    #[tokio::test]
    async fn test_empty_history() {
        let service = service().await;
        assert!(service.recent(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_first_and_capped() {
        let service = service().await;
        for i in 0..12 {
            service.record(row(1, &format!("Make{i}"))).await.unwrap();
        }
        service.record(row(2, "Other")).await.unwrap();

        let history = service.recent(1).await.unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].vehicle_make.as_deref(), Some("Make11"));
        assert_eq!(history[9].vehicle_make.as_deref(), Some("Make2"));
        assert!(history.iter().all(|h| h.user_id == 1));
        assert!(history.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[tokio::test]
    async fn test_invalid_user() {
        let service = service().await;
        assert!(matches!(
            service.recent(0).await,
            Err(HistoryError::InvalidUser(0))
        ));
    }
}
