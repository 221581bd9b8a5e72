use crate::entities::{prelude::*, search_history};
use crate::models::{NewSearchHistory, SearchHistoryEntry};
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

pub struct SearchHistoryRepository {
    conn: DatabaseConnection,
}

impl SearchHistoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: search_history::Model) -> SearchHistoryEntry {
        SearchHistoryEntry {
            id: m.id,
            user_id: m.user_id,
            vehicle_make: m.vehicle_make,
            vehicle_model: m.vehicle_model,
            vehicle_year: m.vehicle_year,
            part_category: m.part_category,
            search_query: m.search_query,
            created_at: m.created_at,
        }
    }

    pub async fn add(&self, entry: &NewSearchHistory) -> Result<i64> {
        let active_model = search_history::ActiveModel {
            user_id: Set(entry.user_id),
            vehicle_make: Set(entry.vehicle_make.clone()),
            vehicle_model: Set(entry.vehicle_model.clone()),
            vehicle_year: Set(entry.vehicle_year),
            part_category: Set(entry.part_category.clone()),
            search_query: Set(entry.search_query.clone()),
            created_at: Set(
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
            ),
            ..Default::default()
        };

        let result = SearchHistory::insert(active_model).exec(&self.conn).await?;
        Ok(result.last_insert_id)
    }

    /// Newest first. Rows written within the same instant fall back to
    /// insertion order.
    pub async fn recent_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<SearchHistoryEntry>> {
        let rows = SearchHistory::find()
            .filter(search_history::Column::UserId.eq(user_id))
            .order_by_desc(search_history::Column::CreatedAt)
            .order_by_desc(search_history::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }
}
