use rand::Rng;
use std::collections::HashSet;

use crate::models::{RawTitle, Recommendation, TrendingTitle};

/// Maximum recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Overview length kept before the ellipsis
pub const OVERVIEW_BUDGET: usize = 200;

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Poster";
pub const OVERVIEW_PLACEHOLDER: &str = "No description available.";
pub const UNKNOWN_YEAR: &str = "N/A";

pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path.filter(|p| !p.trim().is_empty()) {
        Some(path) if path.starts_with('/') => format!("{}{}", POSTER_BASE_URL, path),
        Some(path) => format!("{}/{}", POSTER_BASE_URL, path),
        None => POSTER_PLACEHOLDER_URL.to_string(),
    }
}

/// Cuts the overview to the character budget and marks the cut
pub fn truncate_overview(overview: Option<&str>) -> String {
    let overview = match overview.map(str::trim).filter(|o| !o.is_empty()) {
        Some(overview) => overview,
        None => return OVERVIEW_PLACEHOLDER.to_string(),
    };

    if overview.chars().count() <= OVERVIEW_BUDGET {
        return overview.to_string();
    }

    let cut: String = overview.chars().take(OVERVIEW_BUDGET).collect();
    format!("{}...", cut.trim_end())
}

/// Four-digit year from a `YYYY-MM-DD` date
pub fn release_year(date: Option<&str>) -> String {
    date.and_then(|d| d.get(..4))
        .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string())
}

/// Vote average rounded to one decimal, 0.0 when absent
pub fn rating(vote_average: Option<f64>) -> f64 {
    vote_average
        .filter(|v| v.is_finite())
        .map(|v| (v * 10.0).round() / 10.0)
        .unwrap_or(0.0)
}

/// Cosmetic match percentage in [85, 99]
pub fn match_score<R: Rng>(rng: &mut R) -> String {
    format!("{}%", rng.random_range(85..=99))
}

/// Reshapes raw titles into at most `MAX_RECOMMENDATIONS` distinct entries
///
/// Keeps the provider's order. Entries without a title, or whose title was
/// already accepted, are skipped.
pub fn normalize_results<R: Rng>(raw: &[RawTitle], rng: &mut R) -> Vec<Recommendation> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommendations = Vec::with_capacity(MAX_RECOMMENDATIONS);

    for item in raw {
        if recommendations.len() == MAX_RECOMMENDATIONS {
            break;
        }

        let Some(title) = item.display_title() else {
            continue;
        };
        if !seen.insert(title) {
            continue;
        }

        recommendations.push(Recommendation {
            title: title.to_string(),
            overview: truncate_overview(item.overview.as_deref()),
            poster: poster_url(item.poster_path.as_deref()),
            year: release_year(item.date()),
            rating: rating(item.vote_average),
            match_score: match_score(rng),
        });
    }

    recommendations
}

/// Trending entry; `None` when the item has no title
pub fn trending_entry(item: &RawTitle) -> Option<TrendingTitle> {
    let title = item.display_title()?;
    Some(TrendingTitle {
        title: title.to_string(),
        poster: poster_url(item.poster_path.as_deref()),
        rating: rating(item.vote_average),
        media_type: item
            .media_type
            .clone()
            .unwrap_or_else(|| "movie".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn raw(title: &str) -> RawTitle {
        RawTitle {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(poster_url(None), POSTER_PLACEHOLDER_URL);
        assert_eq!(poster_url(Some("")), POSTER_PLACEHOLDER_URL);
    }

    #[test]
    fn test_truncate_overview() {
        assert_eq!(truncate_overview(None), OVERVIEW_PLACEHOLDER);
        assert_eq!(truncate_overview(Some("   ")), OVERVIEW_PLACEHOLDER);
        assert_eq!(truncate_overview(Some("Short.")), "Short.");

        let long = "a".repeat(250);
        let truncated = truncate_overview(Some(&long));
        assert_eq!(truncated.len(), OVERVIEW_BUDGET + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_overview_respects_char_boundaries() {
        let long = "é".repeat(300);
        let truncated = truncate_overview(Some(&long));
        assert_eq!(truncated.chars().count(), OVERVIEW_BUDGET + 3);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("2010-07-15")), "2010");
        assert_eq!(release_year(Some("199")), UNKNOWN_YEAR);
        assert_eq!(release_year(Some("")), UNKNOWN_YEAR);
        assert_eq!(release_year(Some("TBA-01")), UNKNOWN_YEAR);
        assert_eq!(release_year(None), UNKNOWN_YEAR);
    }

    #[test]
    fn test_rating() {
        assert_eq!(rating(Some(8.369)), 8.4);
        assert_eq!(rating(None), 0.0);
    }

    #[test]
    fn test_match_score_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let score = match_score(&mut rng);
            let value: u32 = score.trim_end_matches('%').parse().unwrap();
            assert!((85..=99).contains(&value));
        }
    }

    #[test]
    fn test_caps_at_three_and_dedupes() {
        let raw = vec![
            raw("Dune"),
            raw("Dune"),
            RawTitle::default(),
            raw("Arrival"),
            raw("Sicario"),
            raw("Prisoners"),
        ];

        let results = normalize_results(&raw, &mut rng());
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Arrival", "Sicario"]);
    }

    #[test]
    fn test_tv_entries_use_name_and_air_date() {
        let item = RawTitle {
            name: Some("Dark".to_string()),
            first_air_date: Some("2017-12-01".to_string()),
            poster_path: Some("/dark.jpg".to_string()),
            vote_average: Some(8.4),
            ..Default::default()
        };

        let results = normalize_results(&[item], &mut rng());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dark");
        assert_eq!(results[0].year, "2017");
        assert_eq!(results[0].poster, "https://image.tmdb.org/t/p/w500/dark.jpg");
        assert_eq!(results[0].overview, OVERVIEW_PLACEHOLDER);
    }

    #[test]
    fn test_no_titles_yields_empty() {
        let results = normalize_results(&[RawTitle::default()], &mut rng());
        assert!(results.is_empty());
    }

    #[test]
    fn test_trending_entry() {
        let item = RawTitle {
            name: Some("Shogun".to_string()),
            media_type: Some("tv".to_string()),
            vote_average: Some(8.6),
            ..Default::default()
        };
        let entry = trending_entry(&item).unwrap();
        assert_eq!(entry.media_type, "tv");
        assert_eq!(entry.poster, POSTER_PLACEHOLDER_URL);
        assert!(trending_entry(&RawTitle::default()).is_none());
    }
}
