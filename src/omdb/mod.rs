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

//! Movie data provider.
//!
//! This module defines the [`MovieProvider`] seam the fetch orchestrator talks
//! to, and the OMDb implementation of it.
//!
//! # Organization
//!
//! * [`client`]: HTTP client for the OMDb search and detail endpoints.
//! * [`models`]: Wire format of OMDb responses.

mod client;
mod models;

pub(crate) use client::{OMDB_BASE_URL, OmdbClient};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{DetailRecord, Query, SearchResult};

/// Errors raised while talking to the movie data provider.
#[derive(Debug, Error)]
pub(crate) enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of a successful search request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchOutcome {
    /// The provider returned a (possibly empty) list of matches.
    Found(Vec<SearchResult>),

    /// The provider flagged the search as failed, usually because nothing
    /// matched, with its own explanation if it gave one.
    NotFound(Option<String>),
}

#[async_trait]
pub(crate) trait MovieProvider: Send + Sync {
    /// Searches for movies matching `query`, or the default listing when the
    /// query is empty.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Status` - The provider answered with a non-success
    ///   status
    /// - `ProviderError::Http` - The request could not be completed
    /// - `ProviderError::Decode` - The body was not a valid search response
    async fn search(&self, query: &Query) -> Result<SearchOutcome, ProviderError>;

    /// Fetches the detail record for a single movie.
    ///
    /// # Errors
    ///
    /// Same as [`MovieProvider::search`].
    async fn details(&self, imdb_id: &str) -> Result<DetailRecord, ProviderError>;
}
