use chrono::{Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Year used when the client sends no usable minimum year
pub const DEFAULT_MIN_YEAR: i32 = 2000;

/// Earliest year accepted as a release-date floor
const EARLIEST_YEAR: i32 = 1900;

/// Coarse emotional tone picked in the UI
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Romantic,
    Scared,
    Thoughtful,
    Adventurous,
    #[default]
    Comedy,
}

impl Mood {
    /// Parses a UI mood label, falling back to `Comedy` for anything unknown
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "excited" | "thrilled" => Mood::Excited,
            "romantic" => Mood::Romantic,
            "scared" | "spooky" => Mood::Scared,
            "thoughtful" | "curious" => Mood::Thoughtful,
            "adventurous" => Mood::Adventurous,
            _ => Mood::Comedy,
        }
    }
}

/// What kind of title the user is after
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Movie,
    Tv,
    Anime,
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tv" => ContentType::Tv,
            "anime" => ContentType::Anime,
            _ => ContentType::Movie,
        }
    }

    /// TMDB endpoint family serving this content type
    pub fn media_type(self) -> MediaType {
        match self {
            ContentType::Movie => MediaType::Movie,
            ContentType::Tv | ContentType::Anime => MediaType::Tv,
        }
    }
}

/// TMDB endpoint family (`/discover/movie` vs `/discover/tv`, etc.)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    /// Path segment used in TMDB URLs
    pub fn as_path(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Query key holding the release-date floor for this endpoint family
    pub fn date_floor_key(self) -> &'static str {
        match self {
            MediaType::Movie => "primary_release_date.gte",
            MediaType::Tv => "first_air_date.gte",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Cultural / language origin filter
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Global,
    Hollywood,
    Bollywood,
    Tollywood,
    Kollywood,
    Korean,
    Japanese,
    Chinese,
    Spanish,
    French,
}

impl Region {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "hollywood" => Region::Hollywood,
            "bollywood" => Region::Bollywood,
            "tollywood" => Region::Tollywood,
            "kollywood" => Region::Kollywood,
            "korean" | "k-drama" => Region::Korean,
            "japanese" => Region::Japanese,
            "chinese" => Region::Chinese,
            "spanish" => Region::Spanish,
            "french" => Region::French,
            _ => Region::Global,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum AgeGroup {
    #[default]
    All,
    Kids,
    Adults,
}

impl AgeGroup {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "kids" => AgeGroup::Kids,
            "adults" => AgeGroup::Adults,
            _ => AgeGroup::All,
        }
    }
}

/// Inbound body of `POST /recommend`
///
/// Every key is optional; the browser form posts the year slider as a string.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Number(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<YearValue>::deserialize(deserializer)? {
        Some(YearValue::Number(n)) => i32::try_from(n).ok(),
        Some(YearValue::Text(s)) => s.trim().parse().ok(),
        Some(YearValue::Other(_)) | None => None,
    })
}

/// Parsed, typed filter selection for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub mood: Mood,
    pub content_type: ContentType,
    pub region: Region,
    pub min_year: i32,
    pub age_group: AgeGroup,
    pub free_text: Option<String>,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            content_type: ContentType::default(),
            region: Region::default(),
            min_year: DEFAULT_MIN_YEAR,
            age_group: AgeGroup::default(),
            free_text: None,
        }
    }
}

impl From<RecommendRequest> for FilterRequest {
    fn from(request: RecommendRequest) -> Self {
        let current_year = Utc::now().year();
        let min_year = request
            .year
            .map(|year| year.clamp(EARLIEST_YEAR, current_year))
            .unwrap_or(DEFAULT_MIN_YEAR);

        Self {
            mood: request.mood.as_deref().map(Mood::parse).unwrap_or_default(),
            content_type: request
                .content_type
                .as_deref()
                .map(ContentType::parse)
                .unwrap_or_default(),
            region: request.region.as_deref().map(Region::parse).unwrap_or_default(),
            min_year,
            age_group: request.age.as_deref().map(AgeGroup::parse).unwrap_or_default(),
            free_text: request
                .query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
        }
    }
}
