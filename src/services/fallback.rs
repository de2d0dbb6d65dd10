use crate::{
    models::{QueryParams, RawTitle},
    services::{
        providers::CatalogProvider,
        query::{DiscoverQuery, EXCLUDED_GENRES_KEY, GENRES_KEY, LANGUAGE_KEY, PAGE_KEY},
    },
};

/// Both date-floor keys; only one is present in any given query
const DATE_FLOOR_KEYS: [&str; 2] = ["primary_release_date.gte", "first_air_date.gte"];

/// One level of query strictness
///
/// Each step derives its params from the strict query, so a later step can
/// restore a constraint an earlier one dropped. Relaxed steps always read
/// the first page; only the strict query samples a random one.
#[derive(Debug, Clone, Copy)]
pub struct RelaxStep {
    pub name: &'static str,
    pub apply: fn(&QueryParams) -> QueryParams,
}

fn strict(params: &QueryParams) -> QueryParams {
    params.clone()
}

fn relax_date(params: &QueryParams) -> QueryParams {
    let mut relaxed = params.without(&DATE_FLOOR_KEYS);
    relaxed.insert(PAGE_KEY, 1);
    relaxed
}

fn relax_genre(params: &QueryParams) -> QueryParams {
    relax_date(params).without(&[GENRES_KEY, EXCLUDED_GENRES_KEY])
}

fn relax_region(params: &QueryParams) -> QueryParams {
    relax_date(params).without(&[LANGUAGE_KEY])
}

/// Relaxation order: strict, then date, then genre, then region
pub const RELAX_STEPS: [RelaxStep; 4] = [
    RelaxStep { name: "strict", apply: strict },
    RelaxStep { name: "relax_date", apply: relax_date },
    RelaxStep { name: "relax_genre", apply: relax_genre },
    RelaxStep { name: "relax_region", apply: relax_region },
];

/// Runs the discover query through the relaxation steps
///
/// One fetch per distinct step; a step whose params match an earlier
/// attempt is skipped. Stops at the first step that returns anything and
/// returns an empty list once every step has come back empty.
pub async fn discover_with_fallback(
    provider: &dyn CatalogProvider,
    query: &DiscoverQuery,
) -> Vec<RawTitle> {
    let mut sent: Vec<QueryParams> = Vec::with_capacity(RELAX_STEPS.len());

    for (attempt, step) in RELAX_STEPS.iter().enumerate() {
        let attempt_query = query.with_params((step.apply)(&query.params));
        if sent.contains(&attempt_query.params) {
            tracing::debug!(step = step.name, "Discover step repeats an earlier query, skipping");
            continue;
        }

        let outcome = provider
            .discover(attempt_query.media, &attempt_query.params)
            .await;

        if !outcome.is_empty() {
            let titles = outcome.into_titles();
            tracing::info!(
                step = step.name,
                attempt = attempt + 1,
                results = titles.len(),
                "Discover step matched"
            );
            return titles;
        }

        tracing::debug!(step = step.name, attempt = attempt + 1, "Discover step empty, relaxing");
        sent.push(attempt_query.params);
    }

    tracing::info!(attempts = sent.len(), "All discover steps exhausted");
    Vec::new()
}
