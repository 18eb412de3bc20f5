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

use serde::Deserialize;

use crate::{
    model::{DetailRecord, SearchResult},
    omdb::SearchOutcome,
};

const RESPONSE_FALSE: &str = "False";

/// Body of a `?s=` search request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SearchResponse {
    pub(super) response: Option<String>,
    pub(super) error: Option<String>,
    pub(super) search: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SearchItem {
    #[serde(rename = "imdbID")]
    pub(super) imdb_id: String,
    pub(super) title: Option<String>,
    pub(super) year: Option<String>,
    pub(super) poster: Option<String>,
}

/// Body of an `?i=` detail request, every field is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct DetailResponse {
    #[serde(rename = "imdbRating")]
    pub(super) imdb_rating: Option<String>,
    pub(super) language: Option<String>,
}

impl From<SearchResponse> for SearchOutcome {
    fn from(response: SearchResponse) -> Self {
        if response.response.as_deref() == Some(RESPONSE_FALSE) {
            return SearchOutcome::NotFound(response.error);
        }

        let results = response
            .search
            .unwrap_or_default()
            .into_iter()
            .map(SearchResult::from)
            .collect();

        SearchOutcome::Found(results)
    }
}

impl From<SearchItem> for SearchResult {
    fn from(item: SearchItem) -> Self {
        Self {
            imdb_id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster: item.poster,
        }
    }
}

impl From<DetailResponse> for DetailRecord {
    fn from(details: DetailResponse) -> Self {
        Self {
            rating: details.imdb_rating,
            language: details.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_flag_without_message() {
        let response: SearchResponse = serde_json::from_str(r#"{"Response":"False"}"#).unwrap();
        assert_eq!(SearchOutcome::from(response), SearchOutcome::NotFound(None));
    }

    #[test]
    fn success_without_search_array_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"Response":"True"}"#).unwrap();
        assert_eq!(SearchOutcome::from(response), SearchOutcome::Found(vec![]));
    }

    #[test]
    fn search_items_keep_provider_order() {
        let body = r#"{
            "Response": "True",
            "totalResults": "2",
            "Search": [
                {"imdbID": "tt0078748", "Title": "Alien", "Year": "1979", "Poster": "N/A"},
                {"imdbID": "tt0090605", "Title": "Aliens", "Year": "1986", "Type": "movie"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        let SearchOutcome::Found(results) = SearchOutcome::from(response) else {
            panic!("expected results");
        };
        let ids: Vec<_> = results.iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, ["tt0078748", "tt0090605"]);
        assert_eq!(results[0].poster.as_deref(), Some("N/A"));
        assert_eq!(results[1].poster, None);
    }

    #[test]
    fn detail_fields_may_be_absent() {
        let response: DetailResponse = serde_json::from_str(r#"{"Title":"Alien"}"#).unwrap();
        assert_eq!(DetailRecord::from(response), DetailRecord::default());
    }
}
