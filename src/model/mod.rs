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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the search
//! query, the movies returned by the provider and the view state the result
//! grid is rendered from.

use std::fmt;

/// Placeholder the provider uses for any field it has no value for.
pub(crate) const UNAVAILABLE: &str = "N/A";

pub(crate) const DEFAULT_TITLE: &str = "No title available";
pub(crate) const DEFAULT_LANGUAGE: &str = "EN";

/// Identifies a single fetch cycle, later cycles always have larger ids.
pub(crate) type CycleId = u64;

/// A settled search query, empty means the default listing.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct Query(String);

impl Query {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this query asks for search results rather than the default
    /// listing.
    ///
    /// Any non-empty value counts, including whitespace.
    pub(crate) fn is_search(&self) -> bool {
        !self.0.is_empty()
    }

    /// A non-empty query made only of whitespace. It still counts as a
    /// search for the heading, but is never sent to the provider.
    pub(crate) fn is_blank(&self) -> bool {
        self.is_search() && self.0.trim().is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchResult {
    pub(crate) imdb_id: String,
    pub(crate) title: Option<String>,
    pub(crate) year: Option<String>,
    pub(crate) poster: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DetailRecord {
    pub(crate) rating: Option<String>,
    pub(crate) language: Option<String>,
}

/// Detail fields merged into a search result.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Enrichment {
    pub(crate) rating: String,
    pub(crate) language: String,
}

impl From<DetailRecord> for Enrichment {
    fn from(details: DetailRecord) -> Self {
        Self {
            rating: details
                .rating
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            language: primary_language(details.language.as_deref()),
        }
    }
}

/// Returns the first entry of a comma separated language list.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(primary_language(Some("French, English")), "French");
/// assert_eq!(primary_language(None), "EN");
/// ```
pub(crate) fn primary_language(languages: Option<&str>) -> String {
    languages
        .and_then(|l| l.split(',').next())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Poster<'a> {
    Url(&'a str),
    Unavailable,
}

/// A search result together with its detail enrichment, if the detail
/// lookup succeeded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EnrichedMovie {
    pub(crate) result: SearchResult,
    pub(crate) enrichment: Option<Enrichment>,
}

impl EnrichedMovie {
    pub(crate) fn new(result: SearchResult, enrichment: Option<Enrichment>) -> Self {
        Self { result, enrichment }
    }

    pub(crate) fn key(&self) -> &str {
        &self.result.imdb_id
    }

    pub(crate) fn title(&self) -> &str {
        self.result.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub(crate) fn year(&self) -> &str {
        self.result.year.as_deref().unwrap_or(UNAVAILABLE)
    }

    pub(crate) fn poster(&self) -> Poster<'_> {
        match self.result.poster.as_deref() {
            Some(url) if !url.is_empty() && url != UNAVAILABLE => Poster::Url(url),
            _ => Poster::Unavailable,
        }
    }

    pub(crate) fn rating(&self) -> &str {
        self.enrichment
            .as_ref()
            .map(|e| e.rating.as_str())
            .unwrap_or(UNAVAILABLE)
    }

    pub(crate) fn language(&self) -> &str {
        self.enrichment
            .as_ref()
            .map(|e| e.language.as_str())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub(crate) fn is_enriched(&self) -> bool {
        self.enrichment.is_some()
    }
}

/// Everything the result area can show, replaced as a whole at the end of
/// every fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewState {
    Loading,
    Error(String),
    Ready(Vec<EnrichedMovie>),
}

impl ViewState {
    pub(crate) fn movies(&self) -> &[EnrichedMovie] {
        match self {
            ViewState::Ready(movies) => movies,
            _ => &[],
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Ready(vec![])
    }
}
