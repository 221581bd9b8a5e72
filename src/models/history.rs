use serde::{Deserialize, Serialize};

use super::criteria::{SearchForm, SearchRequest};

/// One logged search. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: i64,
    pub user_id: i32,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub part_category: Option<String>,
    pub search_query: Option<String>,
    pub created_at: String,
}

impl SearchHistoryEntry {
    #[must_use]
    pub fn vehicle_label(&self) -> String {
        let year = self.vehicle_year.map(|y| y.to_string()).unwrap_or_default();
        [
            year.as_str(),
            self.vehicle_make.as_deref().unwrap_or_default(),
            self.vehicle_model.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Prefills the search form from a logged row, as the history page does.
impl From<&SearchHistoryEntry> for SearchForm {
    fn from(entry: &SearchHistoryEntry) -> Self {
        Self {
            make: entry.vehicle_make.clone().unwrap_or_default(),
            model: entry.vehicle_model.clone().unwrap_or_default(),
            year: entry.vehicle_year.map(|y| y.to_string()).unwrap_or_default(),
            category: entry.part_category.clone().unwrap_or_default(),
            query: entry.search_query.clone().unwrap_or_default(),
        }
    }
}

/// Values captured for a new history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSearchHistory {
    pub user_id: i32,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub part_category: Option<String>,
    pub search_query: Option<String>,
}

impl NewSearchHistory {
    /// Returns `None` when the request carries no usable user identifier.
    /// Missing and non-positive ids are both anonymous and are not logged.
    #[must_use]
    pub fn from_request(request: &SearchRequest) -> Option<Self> {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

        Some(Self {
            user_id: request.user_id.filter(|id| *id > 0)?,
            vehicle_make: non_empty(&request.make),
            vehicle_model: non_empty(&request.model),
            vehicle_year: request.year,
            part_category: non_empty(&request.category),
            search_query: request.query_opt().map(ToString::to_string),
        })
    }
}
