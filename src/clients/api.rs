//! HTTP client for the parts REST API.
//!
//! Mirrors what the storefront does in the browser: a fixed base URL, a
//! request timeout, an optional bearer token, and a forced logout on 401.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::credentials::CredentialStore;
use crate::api::{ErrorBody, HealthResponse};
use crate::config::ClientConfig;
use crate::models::{
    Part, SearchCriteria, SearchForm, SearchHistoryEntry, SearchRequest, ValidationError,
};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Login required")]
    Unauthorized,

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct PartsApiClient {
    client: Client,
    base_url: String,
    user_id: i32,
    credentials: CredentialStore,
}

impl PartsApiClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent("PartFinder/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id,
            credentials: CredentialStore::new(config.credentials_file()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn user_id(&self) -> i32 {
        self.user_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = self.authorize(request).send().await?;
        self.handle(response).await
    }

    async fn handle<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("API rejected credentials, clearing stored token");
            if let Err(e) = self.credentials.clear() {
                warn!(error = %e, "Failed to clear stored token");
            }
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.send(self.client.get(self.url("/health"))).await
    }

    pub async fn get_makes(&self) -> Result<Vec<String>, ClientError> {
        self.send(self.client.get(self.url("/vehicles/makes"))).await
    }

    pub async fn get_models(&self, make: &str) -> Result<Vec<String>, ClientError> {
        let path = format!("/vehicles/models/{}", urlencoding::encode(make));
        self.send(self.client.get(self.url(&path))).await
    }

    /// Validates the form first; an incomplete form never reaches the network.
    pub async fn search(
        &self,
        form: &SearchForm,
    ) -> Result<(SearchCriteria, Vec<Part>), ClientError> {
        let criteria = form.validate()?;
        let parts = self.search_criteria(&criteria).await?;
        Ok((criteria, parts))
    }

    pub async fn search_criteria(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<Part>, ClientError> {
        let request: SearchRequest = criteria.clone().into_request(Some(self.user_id));
        debug!(
            vehicle = %criteria.vehicle_label(),
            category = %criteria.category,
            "Searching parts"
        );
        self.send(self.client.post(self.url("/parts/search")).json(&request))
            .await
    }

    pub async fn history(&self, user_id: i32) -> Result<Vec<SearchHistoryEntry>, ClientError> {
        let path = format!("/search-history/{user_id}");
        self.send(self.client.get(self.url(&path))).await
    }

    /// Re-runs a logged search. Rows with missing vehicle fields fail the
    /// same form validation a fresh search would.
    pub async fn repeat_search(
        &self,
        entry: &SearchHistoryEntry,
    ) -> Result<(SearchCriteria, Vec<Part>), ClientError> {
        self.search(&SearchForm::from(entry)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PartsApiClient {
        let config = ClientConfig {
            api_base_url: base.to_string(),
            credentials_path: Some(
                std::env::temp_dir()
                    .join(format!("partfinder-client-{}", uuid::Uuid::new_v4()))
                    .display()
                    .to_string(),
            ),
            ..ClientConfig::default()
        };
        PartsApiClient::from_config(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = client("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/health"), "http://localhost:5000/api/health");
        assert_eq!(client.user_id(), 1);
    }

    #[tokio::test]
    async fn test_invalid_form_skips_network() {
        // Nothing listens here; reaching the network would be a Transport error.
        let client = client("http://127.0.0.1:9/api");
        let form = SearchForm {
            make: "Toyota".to_string(),
            ..SearchForm::default()
        };

        let err = client.search(&form).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(ValidationError::MissingFields(ref f)) if f.len() == 3
        ));
    }
}
