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

//! Search input debouncing.
//!
//! Raw search box values arrive on every keystroke. The [`Debouncer`] only
//! lets a value through once it has stayed unchanged for the whole quiescence
//! window, so a burst of typing results in a single search.
//!
//! The debouncer never looks at the clock itself, callers pass the current
//! [`Instant`] in. The event loop does so on every tick.

use std::time::{Duration, Instant};

use crate::model::Query;

pub(crate) const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub(crate) struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
    settled: Query,
}

impl Debouncer {
    /// Creates a debouncer whose initial settled value is `initial`.
    ///
    /// The initial value counts as already published, settling on it again
    /// later will not produce a new query.
    pub(crate) fn new(window: Duration, initial: Query) -> Self {
        Self {
            window,
            pending: None,
            settled: initial,
        }
    }

    /// Records a new raw value, restarting the quiescence window.
    pub(crate) fn input(&mut self, value: &str, now: Instant) {
        self.pending = Some((value.to_string(), now));
    }

    /// Publishes the pending value if it has been stable for the whole window
    /// and differs from the last settled value.
    ///
    /// A given value is published at most once.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<Query> {
        let (_, since) = self.pending.as_ref()?;
        if now.saturating_duration_since(*since) < self.window {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if value == self.settled.as_str() {
            return None;
        }

        self.settled = Query::new(value);
        Some(self.settled.clone())
    }

    /// The last published value.
    pub(crate) fn settled(&self) -> &Query {
        &self.settled
    }

    /// When the pending value will settle, if there is one.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, since)| *since + self.window)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW, Query::default())
    }
}
