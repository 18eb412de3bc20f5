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

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Barrier;

use super::*;
use crate::model::DetailRecord;

/// Scripted answer for the search call.
enum SearchScript {
    Found(Vec<SearchResult>),
    NotFound(Option<String>),
    Status(reqwest::StatusCode),
    Garbage,
}

struct FakeProvider {
    search: SearchScript,
    details: HashMap<String, DetailRecord>,
    failing_details: HashSet<String>,
    barrier: Option<Arc<Barrier>>,
    searched: Mutex<Vec<Query>>,
}

impl FakeProvider {
    fn new(search: SearchScript) -> Self {
        Self {
            search,
            details: HashMap::new(),
            failing_details: HashSet::new(),
            barrier: None,
            searched: Mutex::new(vec![]),
        }
    }

    fn with_details(mut self, id: &str, rating: Option<&str>, language: Option<&str>) -> Self {
        self.details.insert(
            id.to_string(),
            DetailRecord {
                rating: rating.map(str::to_string),
                language: language.map(str::to_string),
            },
        );
        self
    }

    fn with_failing_details(mut self, id: &str) -> Self {
        self.failing_details.insert(id.to_string());
        self
    }
}

#[async_trait]
impl MovieProvider for FakeProvider {
    async fn search(&self, query: &Query) -> Result<SearchOutcome, ProviderError> {
        self.searched.lock().unwrap().push(query.clone());

        match &self.search {
            SearchScript::Found(results) => Ok(SearchOutcome::Found(results.clone())),
            SearchScript::NotFound(message) => Ok(SearchOutcome::NotFound(message.clone())),
            SearchScript::Status(status) => Err(ProviderError::Status(*status)),
            SearchScript::Garbage => {
                let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
                Err(ProviderError::Decode(err))
            }
        }
    }

    async fn details(&self, imdb_id: &str) -> Result<DetailRecord, ProviderError> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if self.failing_details.contains(imdb_id) {
            return Err(ProviderError::Status(reqwest::StatusCode::BAD_GATEWAY));
        }

        Ok(self.details.get(imdb_id).cloned().unwrap_or_default())
    }
}

fn result(id: &str, title: &str) -> SearchResult {
    SearchResult {
        imdb_id: id.to_string(),
        title: Some(title.to_string()),
        year: Some("1999".to_string()),
        poster: Some("N/A".to_string()),
    }
}

async fn run_recording(provider: &FakeProvider, query: &Query) -> Vec<ViewState> {
    let mut published = vec![];
    run_cycle(provider, query, |state| published.push(state)).await;
    published
}

#[tokio::test]
async fn enriches_every_result_in_provider_order() {
    let provider = FakeProvider::new(SearchScript::Found(vec![
        result("tt1", "First"),
        result("tt2", "Second"),
    ]))
    .with_details("tt1", Some("7.9"), Some("French, English"))
    .with_details("tt2", Some("6.1"), None);

    let state = run(&provider, &Query::new("some")).await;

    let ViewState::Ready(movies) = state else {
        panic!("expected ready state");
    };
    let keys: Vec<_> = movies.iter().map(|m| m.key()).collect();
    assert_eq!(keys, ["tt1", "tt2"]);
    assert_eq!(movies[0].rating(), "7.9");
    assert_eq!(movies[0].language(), "French");
    assert_eq!(movies[1].rating(), "6.1");
    assert_eq!(movies[1].language(), "EN");
}

#[tokio::test]
async fn failed_detail_lookup_leaves_item_unenriched() {
    let provider = FakeProvider::new(SearchScript::Found(vec![
        result("tt1", "First"),
        result("tt2", "Second"),
        result("tt3", "Third"),
    ]))
    .with_details("tt1", Some("7.0"), Some("German"))
    .with_details("tt3", Some("5.5"), Some("Italian"))
    .with_failing_details("tt2");

    let state = run(&provider, &Query::new("some")).await;

    let movies = state.movies();
    assert_eq!(movies.len(), 3);
    assert!(movies[0].is_enriched());
    assert!(!movies[1].is_enriched());
    assert!(movies[2].is_enriched());
    assert_eq!(movies[1].title(), "Second");
    assert_eq!(movies[1].rating(), "N/A");
    assert_eq!(movies[1].language(), "EN");
    assert_eq!(movies[2].language(), "Italian");
}

#[tokio::test]
async fn missing_detail_fields_get_defaults() {
    let provider = FakeProvider::new(SearchScript::Found(vec![result("tt1", "First")]));

    let state = run(&provider, &Query::default()).await;

    let movie = &state.movies()[0];
    assert!(movie.is_enriched());
    assert_eq!(movie.rating(), "N/A");
    assert_eq!(movie.language(), "EN");
}

#[tokio::test]
async fn empty_result_list_is_ready_not_error() {
    let provider = FakeProvider::new(SearchScript::Found(vec![]));

    let state = run(&provider, &Query::new("some")).await;

    assert_eq!(state, ViewState::Ready(vec![]));
}

#[tokio::test]
async fn failure_flag_without_message_uses_fallback() {
    let provider = FakeProvider::new(SearchScript::NotFound(None));

    let state = run(&provider, &Query::new("qwertyuiop")).await;

    assert_eq!(state, ViewState::Error("No movies found".to_string()));
    assert!(state.movies().is_empty());
}

#[tokio::test]
async fn failure_flag_message_is_shown_verbatim() {
    let provider = FakeProvider::new(SearchScript::NotFound(Some("X".to_string())));

    let state = run(&provider, &Query::new("qwertyuiop")).await;

    assert_eq!(state, ViewState::Error("X".to_string()));
}

#[tokio::test]
async fn transport_failure_shows_generic_message() {
    let provider =
        FakeProvider::new(SearchScript::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));

    let err = fetch_movies(&provider, &Query::new("a")).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
    assert!(err.to_string().starts_with("Failed to fetch movies"));

    let state = run(&provider, &Query::new("a")).await;
    assert_eq!(
        state,
        ViewState::Error("Error fetching movies. Please try again later.".to_string())
    );
    assert!(state.movies().is_empty());
}

#[tokio::test]
async fn undecodable_search_is_unhandled() {
    let provider = FakeProvider::new(SearchScript::Garbage);

    let err = fetch_movies(&provider, &Query::new("a")).await.unwrap_err();
    assert!(matches!(err, FetchError::Unhandled(ProviderError::Decode(_))));

    let state = run(&provider, &Query::new("a")).await;
    assert_eq!(state, ViewState::Error(GENERIC_ERROR_MESSAGE.to_string()));
}

#[tokio::test]
async fn loading_brackets_every_outcome() {
    let providers = [
        FakeProvider::new(SearchScript::Found(vec![result("tt1", "First")])),
        FakeProvider::new(SearchScript::NotFound(None)),
        FakeProvider::new(SearchScript::Status(reqwest::StatusCode::NOT_FOUND)),
        FakeProvider::new(SearchScript::Garbage),
    ];

    for provider in &providers {
        let published = run_recording(provider, &Query::new("a")).await;

        assert_eq!(published.len(), 2);
        assert!(published[0].is_loading());
        assert!(!published[1].is_loading());
    }
}

#[tokio::test]
async fn query_is_passed_through_to_the_provider() {
    let provider = FakeProvider::new(SearchScript::Found(vec![]));

    run(&provider, &Query::default()).await;
    run(&provider, &Query::new("blade runner")).await;

    let searched = provider.searched.lock().unwrap();
    assert_eq!(*searched, vec![Query::default(), Query::new("blade runner")]);
}

#[tokio::test]
async fn duplicate_ids_keep_first_occurrence() {
    let provider = FakeProvider::new(SearchScript::Found(vec![
        result("tt1", "First"),
        result("tt2", "Second"),
        result("tt1", "Again"),
    ]));

    let state = run(&provider, &Query::new("a")).await;

    let titles: Vec<_> = state.movies().iter().map(|m| m.title()).collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[tokio::test]
async fn detail_lookups_run_concurrently() {
    let results: Vec<_> = (0..4).map(|i| result(&format!("tt{i}"), "Movie")).collect();
    let mut provider = FakeProvider::new(SearchScript::Found(results));
    // Every lookup waits until all four are in flight, so sequential lookups
    // would never finish.
    provider.barrier = Some(Arc::new(Barrier::new(4)));

    let state = tokio::time::timeout(Duration::from_secs(5), run(&provider, &Query::new("a")))
        .await
        .expect("detail lookups did not run concurrently");

    assert_eq!(state.movies().len(), 4);
}
