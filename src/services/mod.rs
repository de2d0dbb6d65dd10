pub mod fallback;
pub mod free_text;
pub mod normalizer;
pub mod providers;
pub mod query;
pub mod recommendations;
pub mod trending;

pub use providers::{CatalogProvider, FetchOutcome, TmdbProvider};
