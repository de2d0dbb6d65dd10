use std::sync::Arc;

use crate::{
    models::TrendingTitle,
    services::{normalizer::trending_entry, providers::CatalogProvider},
};

/// Entries returned by `GET /trending`
pub const TRENDING_LIMIT: usize = 10;

/// This week's trending titles, first ten, reshaped for the client
///
/// No deduplication and no fallback; an upstream failure yields an empty list.
pub async fn get_trending(provider: Arc<dyn CatalogProvider>) -> Vec<TrendingTitle> {
    let titles = provider.trending().await.into_titles();

    titles
        .iter()
        .take(TRENDING_LIMIT)
        .filter_map(trending_entry)
        .collect()
}
