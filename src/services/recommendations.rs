use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    models::{FilterRequest, RecommendResponse},
    services::{
        fallback::discover_with_fallback,
        free_text::search_free_text,
        normalizer::normalize_results,
        providers::CatalogProvider,
        query::{build_discover_query, MAX_PAGE},
    },
};

/// Resolves a filter selection into at most three recommendations
///
/// Free text, when present, is tried first; the filter strategy only runs
/// if it finds nothing. Upstream failures never surface here: they degrade
/// to the no-results response.
pub async fn get_recommendations(
    provider: Arc<dyn CatalogProvider>,
    filter: FilterRequest,
) -> RecommendResponse {
    let start = Instant::now();
    let media = filter.content_type.media_type();

    let mut raw = match filter.free_text.as_deref() {
        Some(text) => search_free_text(provider.as_ref(), media, text, filter.region).await,
        None => Vec::new(),
    };

    if raw.is_empty() {
        let page = rand::rng().random_range(1..=MAX_PAGE);
        let query = build_discover_query(&filter, page);
        raw = discover_with_fallback(provider.as_ref(), &query).await;
    }

    let results = normalize_results(&raw, &mut rand::rng());

    tracing::info!(
        provider = provider.name(),
        candidates = raw.len(),
        returned = results.len(),
        processing_time_ms = start.elapsed().as_millis() as u64,
        "Recommendation request resolved"
    );

    if results.is_empty() {
        RecommendResponse::no_results()
    } else {
        RecommendResponse::Results { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, RawTitle, Region};
    use crate::services::providers::{FetchOutcome, MockCatalogProvider};

    fn raw(id: u64, title: &str) -> RawTitle {
        RawTitle {
            id: Some(id),
            title: Some(title.to_string()),
            poster_path: Some(format!("/{}.jpg", id)),
            release_date: Some("2019-05-30".to_string()),
            vote_average: Some(7.5),
            ..Default::default()
        }
    }

    fn provider(mut mock: MockCatalogProvider) -> Arc<dyn CatalogProvider> {
        mock.expect_name().return_const("mock");
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_free_text_hit_skips_discover() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_search()
            .times(1)
            .returning(|_, _| FetchOutcome::Matches(vec![raw(496243, "Parasite")]));
        mock.expect_discover().never();

        let filter = FilterRequest {
            free_text: Some("bong joon ho".to_string()),
            ..Default::default()
        };

        match get_recommendations(provider(mock), filter).await {
            RecommendResponse::Results { results } => {
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].title, "Parasite");
                assert_eq!(results[0].year, "2019");
                assert_eq!(
                    results[0].poster,
                    "https://image.tmdb.org/t/p/w500/496243.jpg"
                );
            }
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_free_text_miss_falls_back_to_filters() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_search()
            .times(1)
            .returning(|_, _| FetchOutcome::NoMatches);
        mock.expect_discover()
            .times(1)
            .returning(|_, _| {
                FetchOutcome::Matches(vec![
                    raw(1, "Dangal"),
                    raw(2, "Dangal"),
                    raw(3, "Lagaan"),
                    raw(4, "Swades"),
                    raw(5, "PK"),
                ])
            });

        let filter = FilterRequest {
            region: Region::Bollywood,
            free_text: Some("wrestling".to_string()),
            ..Default::default()
        };

        match get_recommendations(provider(mock), filter).await {
            RecommendResponse::Results { results } => {
                let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles, vec!["Dangal", "Lagaan", "Swades"]);
            }
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_everything_empty_is_no_results() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_discover()
            .times(4)
            .returning(|_, _| FetchOutcome::NoMatches);
        mock.expect_search().never();

        let filter = FilterRequest {
            content_type: ContentType::Anime,
            ..Default::default()
        };

        assert_eq!(
            get_recommendations(provider(mock), filter).await,
            RecommendResponse::no_results()
        );
    }

    #[tokio::test]
    async fn test_untitled_results_are_no_results() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_discover()
            .times(1)
            .returning(|_, _| FetchOutcome::Matches(vec![RawTitle::default()]));

        let response = get_recommendations(provider(mock), FilterRequest::default()).await;
        assert_eq!(response, RecommendResponse::no_results());
    }
}
