//! TMDB (The Movie Database) provider
//!
//! API Flow:
//! 1. Filters: /discover/{movie|tv} with genre, language and date constraints
//! 2. Free text: /search/{movie|tv} → ids for /{movie|tv}/{id}/recommendations
//! 3. Trending: /trending/all/week
//!
//! Every call authenticates with the v3 `api_key` query parameter.

use crate::{
    error::{AppError, AppResult},
    models::{MediaType, QueryParams, RawTitle, TmdbPage},
    services::providers::{CatalogProvider, FetchOutcome},
};
use reqwest::Client as HttpClient;
use serde::Serialize;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String, language: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        }
    }

    /// Issues one GET and extracts the `results` list
    async fn get_page<Q>(&self, path: &str, query: &Q) -> AppResult<Vec<RawTitle>>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.api_url, path);

        tracing::debug!(path = %path, "Fetching from TMDB");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await.map_err(reqwest::Error::without_url)?;
        let page: TmdbPage = serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(response = %response_text, "Raw TMDB response");
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        Ok(page.results)
    }

    /// Wraps a call result into a `FetchOutcome`, logging failures
    fn outcome(&self, path: &str, result: AppResult<Vec<RawTitle>>) -> FetchOutcome {
        let outcome = FetchOutcome::from(result);
        match &outcome {
            FetchOutcome::Matches(titles) => {
                tracing::info!(
                    path = %path,
                    results = titles.len(),
                    provider = self.name(),
                    "TMDB request completed"
                );
            }
            FetchOutcome::NoMatches => {
                tracing::info!(path = %path, provider = self.name(), "TMDB returned no results");
            }
            FetchOutcome::Failed(e) => {
                tracing::warn!(
                    path = %path,
                    error = %e,
                    provider = self.name(),
                    "TMDB request failed"
                );
            }
        }
        outcome
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(&self, media: MediaType, params: &QueryParams) -> FetchOutcome {
        let path = format!("/discover/{}", media);
        let mut query = params.clone();
        query.insert("language", &self.language);
        let result = self.get_page(&path, &query).await;
        self.outcome(&path, result)
    }

    async fn search(&self, media: MediaType, query: &str) -> FetchOutcome {
        let path = format!("/search/{}", media);
        let result = self.get_page(&path, &[("query", query)]).await;
        self.outcome(&path, result)
    }

    async fn recommendations(&self, media: MediaType, id: u64) -> FetchOutcome {
        let path = format!("/{}/{}/recommendations", media, id);
        let result = self
            .get_page(&path, &[("language", self.language.as_str())])
            .await;
        self.outcome(&path, result)
    }

    async fn trending(&self) -> FetchOutcome {
        let path = "/trending/all/week";
        let result = self
            .get_page(path, &[("language", self.language.as_str())])
            .await;
        self.outcome(path, result)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
