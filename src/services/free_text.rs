use regex::Regex;
use std::sync::OnceLock;

use crate::{
    models::{MediaType, RawTitle, Region},
    services::providers::CatalogProvider,
};

fn similarity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:similar\s+to|like)\s+(.+?)\s*$")
            .expect("similarity pattern is a valid regex")
    })
}

/// Extracts X from "similar to X" / "like X", allowing a leading phrase
/// such as "movies like X"
pub fn similar_to_target(text: &str) -> Option<&str> {
    similarity_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|target| !target.is_empty())
}

/// Keyword search text, biased toward Indian titles for Bollywood
pub fn keyword_query(text: &str, region: Region) -> String {
    if region == Region::Bollywood && !text.to_lowercase().contains("india") {
        format!("{} Indian", text)
    } else {
        text.to_string()
    }
}

/// Picks the search hit to seed recommendations from
///
/// An exact (case-insensitive) title match wins; otherwise the first hit
/// with an id, since TMDB ranks search results by relevance.
pub fn best_match<'a>(candidates: &'a [RawTitle], target: &str) -> Option<&'a RawTitle> {
    let with_id = || candidates.iter().filter(|c| c.id.is_some());
    with_id()
        .find(|c| {
            c.display_title()
                .is_some_and(|title| title.eq_ignore_ascii_case(target))
        })
        .or_else(|| with_id().next())
}

/// Resolves a free-text query to raw titles
///
/// Tries "similar to X" first, then a keyword search. An empty list tells the
/// caller to continue with the filter-based strategy.
pub async fn search_free_text(
    provider: &dyn CatalogProvider,
    media: MediaType,
    text: &str,
    region: Region,
) -> Vec<RawTitle> {
    if let Some(target) = similar_to_target(text) {
        let candidates = provider.search(media, target).await.into_titles();

        match best_match(&candidates, target).and_then(|c| c.id) {
            Some(id) => {
                let similar = provider.recommendations(media, id).await.into_titles();
                if !similar.is_empty() {
                    tracing::info!(
                        target = %target,
                        seed_id = id,
                        results = similar.len(),
                        "Similar-title lookup matched"
                    );
                    return similar;
                }
            }
            None => {
                tracing::debug!(target = %target, "No seed title found for similarity lookup");
            }
        }
    }

    let keywords = keyword_query(text, region);
    let results = provider.search(media, &keywords).await.into_titles();
    tracing::info!(query = %keywords, results = results.len(), "Keyword search completed");
    results
}
