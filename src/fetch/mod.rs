// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Fetch cycle orchestration.
//!
//! A fetch cycle turns one settled [`Query`] into one [`ViewState`]:
//!
//! 1. Search the provider, or request the default listing for an empty query.
//! 2. Look up the details of every result concurrently.
//! 3. Merge the details into the results, keeping the provider's order.
//!
//! A failed detail lookup only costs that movie its enrichment. Failures of
//! the search itself replace the whole result list with an error message.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use futures::future::join_all;
use thiserror::Error;

use crate::{
    model::{EnrichedMovie, Query, SearchResult, ViewState},
    omdb::{MovieProvider, ProviderError, SearchOutcome},
};

pub(crate) const GENERIC_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";
pub(crate) const NO_RESULTS_MESSAGE: &str = "No movies found";

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Failed to fetch movies ({status})")]
    Transport { status: reqwest::StatusCode },

    #[error("{}", .0.as_deref().unwrap_or(NO_RESULTS_MESSAGE))]
    NoResults(Option<String>),

    #[error("Error fetching movies: {0}")]
    Unhandled(#[source] ProviderError),
}

impl FetchError {
    /// The message shown in place of the result grid.
    pub(crate) fn user_message(&self) -> String {
        match self {
            FetchError::NoResults(_) => self.to_string(),
            FetchError::Transport { .. } | FetchError::Unhandled(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl From<ProviderError> for FetchError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status(status) => FetchError::Transport { status },
            other => FetchError::Unhandled(other),
        }
    }
}

/// Runs a complete fetch cycle, publishing [`ViewState::Loading`] first and
/// exactly one final state afterwards, whatever the outcome.
pub(crate) async fn run_cycle<P, F>(provider: &P, query: &Query, mut publish: F)
where
    P: MovieProvider + ?Sized,
    F: FnMut(ViewState),
{
    publish(ViewState::Loading);
    publish(run(provider, query).await);
}

/// Fetches and enriches the movies for `query` and maps the outcome to the
/// state the result area should show.
pub(crate) async fn run<P>(provider: &P, query: &Query) -> ViewState
where
    P: MovieProvider + ?Sized,
{
    match fetch_movies(provider, query).await {
        Ok(movies) => {
            let enriched = movies.iter().filter(|m| m.is_enriched()).count();
            tracing::info!(%query, count = movies.len(), enriched, "movies fetched");
            ViewState::Ready(movies)
        }
        Err(FetchError::NoResults(message)) => {
            tracing::info!(%query, ?message, "no movies found");
            ViewState::Error(FetchError::NoResults(message).user_message())
        }
        Err(e) => {
            tracing::error!(%query, error = %e, "error fetching movies");
            ViewState::Error(e.user_message())
        }
    }
}

pub(crate) async fn fetch_movies<P>(
    provider: &P,
    query: &Query,
) -> Result<Vec<EnrichedMovie>, FetchError>
where
    P: MovieProvider + ?Sized,
{
    let results = match provider.search(query).await? {
        SearchOutcome::Found(results) => unique_by_id(results),
        SearchOutcome::NotFound(message) => return Err(FetchError::NoResults(message)),
    };

    let lookups = results.into_iter().map(|result| enrich(provider, result));

    Ok(join_all(lookups).await)
}

async fn enrich<P>(provider: &P, result: SearchResult) -> EnrichedMovie
where
    P: MovieProvider + ?Sized,
{
    match provider.details(&result.imdb_id).await {
        Ok(details) => EnrichedMovie::new(result, Some(details.into())),
        Err(e) => {
            tracing::warn!(imdb_id = %result.imdb_id, error = %e, "error fetching movie details");
            EnrichedMovie::new(result, None)
        }
    }
}

/// Drops repeated identifiers, keeping the first occurrence, so ids can be
/// used as keys in the grid.
fn unique_by_id(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|r| {
            let first = seen.insert(r.imdb_id.clone());
            if !first {
                tracing::debug!(imdb_id = %r.imdb_id, "dropping duplicate search result");
            }
            first
        })
        .collect()
}
