//! Steam Web API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::catalog::AppListDocument;
use crate::domain::{AppError, AppId, CatalogEntry, ReviewSummary, SteamApiConfig};
use crate::ports::{CatalogSource, ReviewSummaryRetriever};

/// HTTP client for the app list and store review endpoints.
#[derive(Debug, Clone)]
pub struct HttpSteamClient {
    app_list_url: Url,
    reviews_url: Url,
    client: Client,
}

impl HttpSteamClient {
    /// Create a new HTTP client from configuration.
    pub fn new(config: &SteamApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(concat!("steaminfo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            app_list_url: config.app_list_url.clone(),
            reviews_url: config.reviews_url.clone(),
            client,
        })
    }

    /// Reviews request URL: `<reviews_url><app_id>?json=1`.
    pub fn reviews_url_for(&self, app_id: AppId) -> Result<Url, AppError> {
        let mut url = self.reviews_url.join(&app_id.to_string()).map_err(|e| {
            AppError::config_error(format!("Invalid reviews URL {}: {}", self.reviews_url, e))
        })?;
        url.set_query(Some("json=1"));
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response, String> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(format!("HTTP {} from {}", status.as_u16(), truncate(&body)))
        }
    }
}

impl CatalogSource for HttpSteamClient {
    fn fetch_entries(&self) -> Result<Vec<CatalogEntry>, AppError> {
        let response = self.get(self.app_list_url.clone()).map_err(AppError::SourceUnavailable)?;
        let document: AppListDocument = response
            .json()
            .map_err(|e| AppError::SourceUnavailable(format!("Failed to parse app list: {}", e)))?;
        Ok(document.into_entries())
    }
}

impl ReviewSummaryRetriever for HttpSteamClient {
    fn fetch(&self, app_id: AppId) -> Result<ReviewSummary, AppError> {
        let url = self.reviews_url_for(app_id)?;
        let response = self.get(url).map_err(AppError::SummaryUnavailable)?;
        response.json().map_err(|e| {
            AppError::SummaryUnavailable(format!(
                "Failed to parse review summary for app {}: {}",
                app_id, e
            ))
        })
    }
}

fn truncate(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_CHARS {
        let head: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{} [truncated]", head)
    } else if trimmed.is_empty() {
        "(empty body)".to_string()
    } else {
        trimmed.to_string()
    }
}
