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

use crate::{
    events::AppEvent,
    fetch,
    model::{CycleId, Query},
    tasks::TaskContext,
};

pub(super) async fn fetch_movies(ctx: &TaskContext, cycle: CycleId, query: Query) {
    tracing::debug!(cycle, %query, "fetch cycle started");

    fetch::run_cycle(ctx.provider.as_ref(), &query, |state| {
        // The receiver only goes away when the application is shutting down
        if ctx.event_tx.send(AppEvent::ViewStateChanged(cycle, state)).is_err() {
            tracing::debug!(cycle, "event channel closed, dropping view state");
        }
    })
    .await;
}
