//! Title metadata provider abstraction
//!
//! The resolver only talks to a `CatalogProvider`; the TMDB client is the
//! production implementation and tests substitute a mock.

use crate::{
    error::{AppError, AppResult},
    models::{MediaType, QueryParams, RawTitle},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Result of a single upstream call
///
/// Keeps "the call failed" apart from "the call matched nothing" for logging,
/// while `into_titles` collapses both to an empty list for the resolver.
#[derive(Debug)]
pub enum FetchOutcome {
    Matches(Vec<RawTitle>),
    NoMatches,
    Failed(AppError),
}

impl FetchOutcome {
    pub fn is_empty(&self) -> bool {
        !matches!(self, FetchOutcome::Matches(_))
    }

    pub fn into_titles(self) -> Vec<RawTitle> {
        match self {
            FetchOutcome::Matches(titles) => titles,
            FetchOutcome::NoMatches | FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

impl From<AppResult<Vec<RawTitle>>> for FetchOutcome {
    fn from(result: AppResult<Vec<RawTitle>>) -> Self {
        match result {
            Ok(titles) if titles.is_empty() => FetchOutcome::NoMatches,
            Ok(titles) => FetchOutcome::Matches(titles),
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// Trait for title metadata providers
///
/// Every method issues exactly one upstream request and never retries;
/// broadening a query is the caller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Filtered discovery, sorted by the provider (popularity for TMDB)
    async fn discover(&self, media: MediaType, params: &QueryParams) -> FetchOutcome;

    /// Free-text title search
    async fn search(&self, media: MediaType, query: &str) -> FetchOutcome;

    /// Titles the provider considers similar to the given title id
    async fn recommendations(&self, media: MediaType, id: u64) -> FetchOutcome;

    /// This week's trending movies and shows
    async fn trending(&self) -> FetchOutcome;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
