//! Runs a listing filter against the backend search routes.

use records::ApiError;
use records::search::{Filter, FilterOutcome, compose};
use serde::de::DeserializeOwned;

use super::http;

/// Issue every search query of `filter` concurrently and compose the results
/// with `base`. The first failing query fails the whole pass.
///
/// # Errors
///
/// Returns the first backend or transport failure among the queries.
pub async fn apply_filter<F>(filter: &F, base: &[F::Item]) -> Result<FilterOutcome<F::Item>, ApiError>
where
    F: Filter,
    F::Item: DeserializeOwned,
{
    let queries = filter.queries();
    let results = futures::future::join_all(queries.iter().map(http::get::<Vec<F::Item>>)).await;

    let sets = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(compose(filter, base, &sets))
}
