use serde::{Deserialize, Serialize};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Paged list envelope shared by discover, search, recommendations and trending
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Vec<RawTitle>,
}

/// A movie or TV item as TMDB returns it
///
/// Movies carry `title`/`release_date`, TV shows `name`/`first_air_date`;
/// trending mixes both, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawTitle {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub media_type: Option<String>,
}

impl RawTitle {
    /// Movie title, else TV name; blank values count as missing
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.name.as_deref().filter(|n| !n.trim().is_empty()))
    }

    /// Release date for movies, first air date for TV
    pub fn date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.first_air_date.as_deref())
    }
}

// ============================================================================
// Client-facing Types
// ============================================================================

/// One entry of a `POST /recommend` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub overview: String,
    pub poster: String,
    pub year: String,
    pub rating: f64,
    /// Cosmetic percentage shown next to the title, e.g. "93%"
    pub match_score: String,
}

/// One entry of the `GET /trending` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingTitle {
    pub title: String,
    pub poster: String,
    pub rating: f64,
    pub media_type: String,
}

/// Body of `POST /recommend`
///
/// A no-results outcome is still a 200; clients look for the `error` key.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendResponse {
    Results { results: Vec<Recommendation> },
    NoResults { error: String },
}

impl RecommendResponse {
    pub fn no_results() -> Self {
        RecommendResponse::NoResults {
            error: NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

/// Suggestion returned when every strategy and fallback came back empty
pub const NO_RESULTS_MESSAGE: &str =
    "No matches found. Try a different mood or region, or an earlier year.";
