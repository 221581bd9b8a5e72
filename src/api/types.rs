use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub mod messages {
    pub const HEALTH_OK: &str = "Auto Parts Finder API is running";
    pub const SEARCH_FAILED: &str = "Failed to search parts";
    pub const HISTORY_FAILED: &str = "Failed to fetch search history";
}
