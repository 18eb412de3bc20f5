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

//! OMDb HTTP client.
//!
//! Both endpoints share the same base URL and differ only in their query
//! parameters, `s` for a search and `i` for a detail lookup.

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::{
    model::{DetailRecord, Query},
    omdb::{
        MovieProvider, ProviderError, SearchOutcome,
        models::{DetailResponse, SearchResponse},
    },
};

pub(crate) const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Search term used when no query has been entered.
const DEFAULT_SEARCH_TERM: &str = "movie";

const SEARCH_TYPE: &str = "movie";
const PLOT_LENGTH: &str = "short";

#[derive(Debug, Clone)]
pub(crate) struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(OMDB_BASE_URL, api_key)
    }

    pub(crate) fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        decode(response).await
    }
}

/// Rejects non-success statuses, then decodes the JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl MovieProvider for OmdbClient {
    async fn search(&self, query: &Query) -> Result<SearchOutcome, ProviderError> {
        let term = if query.is_search() {
            query.as_str()
        } else {
            DEFAULT_SEARCH_TERM
        };

        tracing::debug!(term, "searching movies");

        let response: SearchResponse = self.get(&[("s", term), ("type", SEARCH_TYPE)]).await?;
        Ok(response.into())
    }

    async fn details(&self, imdb_id: &str) -> Result<DetailRecord, ProviderError> {
        let response: DetailResponse = self.get(&[("i", imdb_id), ("plot", PLOT_LENGTH)]).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Json, Router,
        extract::Query as Params,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;

    use super::*;

    const API_KEY: &str = "test-key";

    /// Stand-in for the OMDb endpoint that answers according to the `s` and
    /// `i` parameters it receives.
    async fn fake_omdb(Params(params): Params<HashMap<String, String>>) -> Response {
        if params.get("apikey").map(String::as_str) != Some(API_KEY) {
            return StatusCode::UNAUTHORIZED.into_response();
        }

        if let Some(id) = params.get("i") {
            if params.get("plot").map(String::as_str) != Some("short") {
                return StatusCode::BAD_REQUEST.into_response();
            }
            return Json(json!({
                "imdbID": id,
                "imdbRating": "8.5",
                "Language": "French, English",
            }))
            .into_response();
        }

        if params.get("type").map(String::as_str) != Some("movie") {
            return StatusCode::BAD_REQUEST.into_response();
        }

        match params.get("s").map(String::as_str) {
            Some("movie") => Json(json!({
                "Response": "True",
                "Search": [
                    {
                        "imdbID": "tt0000001",
                        "Title": "Default One",
                        "Year": "2001",
                        "Poster": "N/A",
                    },
                ],
            }))
            .into_response(),
            Some("star wars & more") => Json(json!({
                "Response": "True",
                "Search": [
                    {
                        "imdbID": "tt0076759",
                        "Title": "Star Wars",
                        "Year": "1977",
                        "Poster": "https://img/sw.jpg",
                    },
                    {
                        "imdbID": "tt0080684",
                        "Title": "The Empire Strikes Back",
                        "Year": "1980",
                    },
                ],
            }))
            .into_response(),
            Some("broken") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Some("garbage") => "<html>not json</html>".into_response(),
            _ => Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response(),
        }
    }

    async fn spawn_fake_omdb() -> String {
        let app = Router::new().route("/", get(fake_omdb));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn empty_query_requests_default_listing() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let outcome = client.search(&Query::default()).await.unwrap();

        let SearchOutcome::Found(results) = outcome else {
            panic!("expected results");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title.as_deref(), Some("Default One"));
    }

    #[tokio::test]
    async fn search_term_is_url_encoded() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let outcome = client.search(&Query::new("star wars & more")).await.unwrap();

        let SearchOutcome::Found(results) = outcome else {
            panic!("expected results");
        };
        assert_eq!(results[0].imdb_id, "tt0076759");
        assert_eq!(results[1].poster, None);
    }

    #[tokio::test]
    async fn failure_flag_is_not_an_error() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let outcome = client.search(&Query::new("zzzz")).await.unwrap();

        assert_eq!(
            outcome,
            SearchOutcome::NotFound(Some("Movie not found!".to_string()))
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let err = client.search(&Query::new("broken")).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Status(s) if s == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));

        let bad_key = OmdbClient::with_base_url(spawn_fake_omdb().await, "wrong");
        let err = bad_key.search(&Query::default()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status(s) if s == reqwest::StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let err = client.search(&Query::new("garbage")).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn details_request_short_plot() {
        let client = OmdbClient::with_base_url(spawn_fake_omdb().await, API_KEY);

        let details = client.details("tt0076759").await.unwrap();

        assert_eq!(details.rating.as_deref(), Some("8.5"));
        assert_eq!(details.language.as_deref(), Some("French, English"));
    }
}
