use crate::models::{AgeGroup, ContentType, FilterRequest, MediaType, Mood, QueryParams, Region};

/// TMDB genre ids (movie list; the TV discover endpoint accepts the shared ids)
pub mod genre {
    pub const ACTION: u32 = 28;
    pub const ADVENTURE: u32 = 12;
    pub const ANIMATION: u32 = 16;
    pub const COMEDY: u32 = 35;
    pub const CRIME: u32 = 80;
    pub const DRAMA: u32 = 18;
    pub const FAMILY: u32 = 10751;
    pub const FANTASY: u32 = 14;
    pub const HORROR: u32 = 27;
    pub const ROMANCE: u32 = 10749;
    pub const SCIENCE_FICTION: u32 = 878;
    pub const THRILLER: u32 = 53;
    pub const WAR: u32 = 10752;
    pub const WESTERN: u32 = 37;
}

/// Genres never shown to the Kids age group
pub const KIDS_BLOCKED_GENRES: [u32; 4] = [genre::HORROR, genre::CRIME, genre::WAR, genre::WESTERN];

/// Minimum number of votes a title needs to be considered
pub const MIN_VOTE_COUNT: u32 = 50;

/// Discover pages sampled for variety (1..=MAX_PAGE)
pub const MAX_PAGE: u32 = 3;

pub const GENRES_KEY: &str = "with_genres";
pub const EXCLUDED_GENRES_KEY: &str = "without_genres";
pub const LANGUAGE_KEY: &str = "with_original_language";
pub const PAGE_KEY: &str = "page";

/// Discover request for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub media: MediaType,
    pub params: QueryParams,
}

impl DiscoverQuery {
    /// Same endpoint, different constraints
    pub fn with_params(&self, params: QueryParams) -> Self {
        Self {
            media: self.media,
            params,
        }
    }
}

/// Genre set backing each mood
pub fn mood_genres(mood: Mood) -> &'static [u32] {
    match mood {
        Mood::Happy => &[genre::COMEDY, genre::FAMILY],
        Mood::Sad => &[genre::DRAMA],
        Mood::Excited => &[genre::ACTION, genre::ADVENTURE],
        Mood::Romantic => &[genre::ROMANCE],
        Mood::Scared => &[genre::HORROR, genre::THRILLER],
        Mood::Thoughtful => &[genre::SCIENCE_FICTION, genre::DRAMA],
        Mood::Adventurous => &[genre::ADVENTURE, genre::FANTASY],
        Mood::Comedy => &[genre::COMEDY],
    }
}

/// ISO 639-1 original language for a region; `None` means no language filter
pub fn region_language(region: Region) -> Option<&'static str> {
    match region {
        Region::Global => None,
        Region::Hollywood => Some("en"),
        Region::Bollywood => Some("hi"),
        Region::Tollywood => Some("te"),
        Region::Kollywood => Some("ta"),
        Region::Korean => Some("ko"),
        Region::Japanese => Some("ja"),
        Region::Chinese => Some("zh"),
        Region::Spanish => Some("es"),
        Region::French => Some("fr"),
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Translates UI filters into a strict discover query
///
/// `page` is supplied by the caller so the builder stays deterministic.
pub fn build_discover_query(filter: &FilterRequest, page: u32) -> DiscoverQuery {
    let media = filter.content_type.media_type();

    let (mut genres, language) = match filter.content_type {
        ContentType::Anime => (vec![genre::ANIMATION], Some("ja")),
        ContentType::Movie | ContentType::Tv => (
            mood_genres(filter.mood).to_vec(),
            region_language(filter.region),
        ),
    };

    let mut params = QueryParams::new();
    params.insert("sort_by", "popularity.desc");
    params.insert(PAGE_KEY, page.clamp(1, MAX_PAGE));
    params.insert("vote_count.gte", MIN_VOTE_COUNT);
    params.insert(media.date_floor_key(), format!("{}-01-01", filter.min_year));

    match filter.age_group {
        AgeGroup::Kids => {
            genres.retain(|id| !KIDS_BLOCKED_GENRES.contains(id));
            if !genres.contains(&genre::FAMILY) {
                genres.push(genre::FAMILY);
            }
            params.insert(EXCLUDED_GENRES_KEY, join_ids(&KIDS_BLOCKED_GENRES));
            params.insert("include_adult", false);
        }
        AgeGroup::Adults => params.insert("include_adult", true),
        AgeGroup::All => params.insert("include_adult", false),
    }

    params.insert(GENRES_KEY, join_ids(&genres));
    if let Some(language) = language {
        params.insert(LANGUAGE_KEY, language);
    }

    DiscoverQuery { media, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(mood: Mood, content_type: ContentType, region: Region, age_group: AgeGroup) -> FilterRequest {
        FilterRequest {
            mood,
            content_type,
            region,
            min_year: 2010,
            age_group,
            free_text: None,
        }
    }

    fn genre_ids(query: &DiscoverQuery, key: &str) -> Vec<u32> {
        query
            .params
            .get(key)
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    const ALL_MOODS: [Mood; 8] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Romantic,
        Mood::Scared,
        Mood::Thoughtful,
        Mood::Adventurous,
        Mood::Comedy,
    ];

    #[test]
    fn test_movie_query_defaults() {
        let query = build_discover_query(&FilterRequest::default(), 2);

        assert_eq!(query.media, MediaType::Movie);
        assert_eq!(query.params.get("sort_by"), Some("popularity.desc"));
        assert_eq!(query.params.get("page"), Some("2"));
        assert_eq!(query.params.get("vote_count.gte"), Some("50"));
        assert_eq!(query.params.get("primary_release_date.gte"), Some("2000-01-01"));
        assert_eq!(query.params.get("include_adult"), Some("false"));
        assert_eq!(query.params.get(GENRES_KEY), Some("35"));
        assert!(!query.params.contains(LANGUAGE_KEY));
        assert!(!query.params.contains(EXCLUDED_GENRES_KEY));
    }

    #[test]
    fn test_tv_uses_air_date() {
        let query = build_discover_query(
            &filter(Mood::Sad, ContentType::Tv, Region::Korean, AgeGroup::All),
            1,
        );

        assert_eq!(query.media, MediaType::Tv);
        assert_eq!(query.params.get("first_air_date.gte"), Some("2010-01-01"));
        assert!(!query.params.contains("primary_release_date.gte"));
        assert_eq!(query.params.get(LANGUAGE_KEY), Some("ko"));
        assert_eq!(query.params.get(GENRES_KEY), Some("18"));
    }

    #[test]
    fn test_kids_always_family_and_block_list() {
        for mood in ALL_MOODS {
            for content_type in [ContentType::Movie, ContentType::Tv, ContentType::Anime] {
                let query = build_discover_query(
                    &filter(mood, content_type, Region::Global, AgeGroup::Kids),
                    1,
                );

                let genres = genre_ids(&query, GENRES_KEY);
                assert!(genres.contains(&genre::FAMILY), "{:?}/{:?}", mood, content_type);

                let excluded = genre_ids(&query, EXCLUDED_GENRES_KEY);
                for blocked in KIDS_BLOCKED_GENRES {
                    assert!(excluded.contains(&blocked));
                    assert!(!genres.contains(&blocked));
                }
                assert_eq!(query.params.get("include_adult"), Some("false"));
            }
        }
    }

    #[test]
    fn test_kids_scared_drops_horror() {
        let query = build_discover_query(
            &filter(Mood::Scared, ContentType::Movie, Region::Global, AgeGroup::Kids),
            1,
        );
        assert_eq!(genre_ids(&query, GENRES_KEY), vec![genre::THRILLER, genre::FAMILY]);
    }

    #[test]
    fn test_anime_overrides_mood_and_region() {
        for mood in ALL_MOODS {
            for region in [Region::Global, Region::Bollywood, Region::Korean] {
                let query = build_discover_query(
                    &filter(mood, ContentType::Anime, region, AgeGroup::All),
                    1,
                );
                assert_eq!(query.media, MediaType::Tv);
                assert_eq!(query.params.get(GENRES_KEY), Some("16"));
                assert_eq!(query.params.get(LANGUAGE_KEY), Some("ja"));
            }
        }
    }

    #[test]
    fn test_adults_allow_adult_content() {
        let query = build_discover_query(
            &filter(Mood::Excited, ContentType::Movie, Region::Hollywood, AgeGroup::Adults),
            1,
        );
        assert_eq!(query.params.get("include_adult"), Some("true"));
        assert_eq!(query.params.get(GENRES_KEY), Some("28,12"));
        assert_eq!(query.params.get(LANGUAGE_KEY), Some("en"));
    }

    #[test]
    fn test_page_is_clamped() {
        let query = build_discover_query(&FilterRequest::default(), 42);
        assert_eq!(query.params.get("page"), Some("3"));
        let query = build_discover_query(&FilterRequest::default(), 0);
        assert_eq!(query.params.get("page"), Some("1"));
    }

    #[test]
    fn test_global_region_adds_no_language() {
        assert_eq!(region_language(Region::Global), None);
        assert_eq!(region_language(Region::Bollywood), Some("hi"));
    }
}
