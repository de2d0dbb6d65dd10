mod filter;
mod query_params;
mod title;

pub use filter::{
    AgeGroup, ContentType, FilterRequest, MediaType, Mood, RecommendRequest, Region,
    DEFAULT_MIN_YEAR,
};
pub use query_params::QueryParams;
pub use title::{
    RawTitle, RecommendResponse, Recommendation, TmdbPage, TrendingTitle, NO_RESULTS_MESSAGE,
};
